use tracing::info;

use optext_core::app::tracing::AppTracingBuilder;
use optext_core::util::matching::Matching;

mod image;
mod todo;

fn main() {
  let _tracing = AppTracingBuilder::default().build();

  search_scenario();
  image::upload_scenario();
  todo::accessory_scenario();
}

/// Unwraps an optional search query and requires a minimum length before searching, in one chain.
fn search_scenario() {
  run_search(Some("Something For test".to_string()), 2);
  run_search(None, 3);
  run_search(Some("ab c".to_string()), 3);
}

fn run_search(text: Option<String>, min_len: usize) {
  let _ = text
    .matching(|query| query.chars().count() > min_len)
    .map(perform_search);
}

fn perform_search(query: String) {
  info!(%query, "performing search");
}
