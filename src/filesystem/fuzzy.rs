// src/filesystem/fuzzy.rs

/// True when every character of `query` occurs in `candidate` in order.
/// Case-sensitive; the empty query matches everything.
pub fn matches(query: &str, candidate: &str) -> bool {
    let mut remaining = candidate.chars();
    query.chars().all(|q| remaining.any(|c| c == q))
}
