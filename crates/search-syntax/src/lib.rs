//! Query language for scoped searches.
//!
//! Turns a raw search string such as `name ~ john and created_at > 2024-01-01`
//! into a small boolean AST made of leaves, comparison operators and logical
//! operators.

pub mod ast;
pub mod builder;
pub mod error;
pub mod parser;

pub use ast::{
    node::{LeafNode, LogicalOperatorNode, Node, OperatorNode},
    operator::{LogicalOperator, OperatorKind},
};
pub use builder::parse;
pub use error::SyntaxError;
