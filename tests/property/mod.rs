//! Property-based tests for tree and layout invariants

#[path = "../integration/support.rs"]
mod support;
mod tree_invariants;
