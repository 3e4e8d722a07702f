//! Field metadata for scoped searches.
//!
//! A [`SearchDefinition`](search::definition::SearchDefinition) describes which
//! columns of a table can be searched, how a bare keyword is matched against
//! them and how literals are converted before they are bound.

pub mod core;
pub mod error;
pub mod search;
