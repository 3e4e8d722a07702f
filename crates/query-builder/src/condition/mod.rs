//! Per-node compilation of the search AST into SQL condition fragments.

use crate::error::BuildResult;
use model::{core::value::Value, search::definition::FieldRegistry};
use search_syntax::Node;

pub mod leaf;
pub mod logical;
pub mod operator;

/// Deepest nesting of `not` a query may use.
pub const MAX_NEGATION_DEPTH: usize = 8;

/// A node of the search AST that can be compiled into a condition fragment.
pub trait Compile {
    fn compile(&self, r: &mut Renderer) -> BuildResult<Fragment>;
}

/// The result of compiling a single node.
///
/// `Empty` means the node contributes nothing to the condition, for example a
/// comparison against a date column whose literal is not a date. It is dropped
/// from the enclosing group without binding anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Sql(String),
    Empty,
}

impl Fragment {
    pub fn is_empty(&self) -> bool {
        matches!(self, Fragment::Empty)
    }

    pub fn into_sql(self) -> Option<String> {
        match self {
            Fragment::Sql(sql) => Some(sql),
            Fragment::Empty => None,
        }
    }

    /// Joins the non-empty fragments with `separator` and wraps the result in
    /// parentheses. Yields `Empty` when nothing is left to join.
    pub fn join(fragments: Vec<Fragment>, separator: &str) -> Fragment {
        let parts: Vec<String> = fragments.into_iter().filter_map(Fragment::into_sql).collect();
        if parts.is_empty() {
            return Fragment::Empty;
        }
        Fragment::Sql(format!("({})", parts.join(separator)))
    }
}

/// Compilation context shared by every node of one query.
///
/// It gives access to the searchable fields and accumulates the bind
/// parameters in the order their placeholders are emitted.
pub struct Renderer<'a> {
    pub registry: &'a dyn FieldRegistry,
    pub params: Vec<Value>,
    negation_depth: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a dyn FieldRegistry) -> Self {
        Self {
            registry,
            params: Vec::new(),
            negation_depth: 0,
        }
    }

    /// Consumes the renderer and returns the bind parameters.
    pub fn finish(self) -> Vec<Value> {
        self.params
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
    }
}

impl Compile for Node {
    fn compile(&self, r: &mut Renderer) -> BuildResult<Fragment> {
        match self {
            Node::Leaf(leaf) => leaf.compile(r),
            Node::Operator(operator) => operator.compile(r),
            Node::LogicalOperator(logical) => logical.compile(r),
        }
    }
}
