//! Crate-level tests for tinct-highlight.

mod unit;
