use std::cell::RefCell;

use optext_core::util::matching::Matching;
use optext_core::util::or_throw::OrThrow;

fn search(text: Option<&str>, min_len: usize, performed: &RefCell<Vec<String>>) {
  let _ = text
    .map(str::to_string)
    .matching(|query| query.chars().count() > min_len)
    .map(|query| performed.borrow_mut().push(query));
}

#[test]
fn long_enough_query_reaches_the_handler_unchanged() {
  let performed = RefCell::new(Vec::new());
  search(Some("Something For test"), 2, &performed);
  assert_eq!(*performed.borrow(), vec!["Something For test".to_string()]);
}

#[test]
fn absent_query_never_reaches_the_handler() {
  let performed = RefCell::new(Vec::new());
  search(None, 3, &performed);
  assert!(performed.borrow().is_empty());
}

#[test]
fn four_character_query_passes_a_three_character_minimum() {
  let performed = RefCell::new(Vec::new());
  search(Some("ab c"), 3, &performed);
  assert_eq!(*performed.borrow(), vec!["ab c".to_string()]);
}

#[test]
fn matching_then_or_throw_reports_a_rejected_query() {
  let result: Result<&str, &str> = Some("ab")
    .matching(|query| query.chars().count() > 3)
    .or_throw(|| "query too short");
  assert_eq!(result, Err("query too short"));
}

#[test]
fn matching_then_or_throw_unwraps_an_accepted_query() {
  let result: Result<&str, &str> = Some("ab c")
    .matching(|query| query.chars().count() > 3)
    .or_throw(|| "query too short");
  assert_eq!(result, Ok("ab c"));
}
