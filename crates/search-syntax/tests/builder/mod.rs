//! AST builder tests
//!
//! These tests verify that search queries are correctly parsed
//! into a typed AST structure.

mod expressions;
mod logical;
