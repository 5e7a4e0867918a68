pub mod util;
pub mod app;
