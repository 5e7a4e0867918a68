pub mod matching;
pub mod or_throw;
pub mod slot;
