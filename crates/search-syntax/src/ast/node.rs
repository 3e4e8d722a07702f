//! Search query AST.
//!
//! The tree is produced once by the builder and only read afterwards.

use crate::ast::operator::{LogicalOperator, OperatorKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    /// A bare token: a field name or a literal value.
    Leaf(LeafNode),

    /// A comparison (`field op value`, `op value`) or a negation (`not x`).
    Operator(OperatorNode),

    /// An n-ary AND / OR.
    LogicalOperator(LogicalOperatorNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafNode {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorNode {
    pub operator: OperatorKind,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalOperatorNode {
    pub operator: LogicalOperator,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(value: impl Into<String>) -> Self {
        Node::Leaf(LeafNode {
            value: value.into(),
        })
    }

    pub fn operator(operator: OperatorKind, children: Vec<Node>) -> Self {
        Node::Operator(OperatorNode { operator, children })
    }

    pub fn logical(operator: LogicalOperator, children: Vec<Node>) -> Self {
        Node::LogicalOperator(LogicalOperatorNode { operator, children })
    }

    /// `field op value`
    pub fn comparison(
        field: impl Into<String>,
        operator: OperatorKind,
        value: impl Into<String>,
    ) -> Self {
        Node::operator(operator, vec![Node::leaf(field), Node::leaf(value)])
    }

    pub fn not(child: Node) -> Self {
        Node::operator(OperatorKind::Not, vec![child])
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }
}

impl OperatorNode {
    pub fn arity(&self) -> usize {
        self.children.len()
    }

    /// Field side of a binary comparison.
    pub fn lhs(&self) -> Option<&Node> {
        match self.children.as_slice() {
            [lhs, _] => Some(lhs),
            _ => None,
        }
    }

    /// Value side: the last child, for both the unary and the binary form.
    pub fn rhs(&self) -> Option<&Node> {
        self.children.last()
    }
}
