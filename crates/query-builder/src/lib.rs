//! Compiles a search AST into a parameterized SQL condition.
//!
//! The entry point is [`build_query`], which parses a raw query string and turns
//! it into [`FindParams`]: a `WHERE` fragment using `?` placeholders and the
//! values to bind to them, in placeholder order.

pub mod condition;
pub mod error;
pub mod operator;
pub mod query;

#[cfg(test)]
mod test_helpers;

pub use condition::{Compile, Fragment, MAX_NEGATION_DEPTH, Renderer};
pub use error::{BuildError, BuildResult};
pub use operator::{sql_operator, sql_test};
pub use query::{FindParams, QueryBuilder, build_query};
