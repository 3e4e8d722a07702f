//! Grammar tests
//!
//! These tests run the raw pest grammar and only check which inputs are
//! accepted and how the top-level rules are shaped.

mod expressions;
mod keywords;
