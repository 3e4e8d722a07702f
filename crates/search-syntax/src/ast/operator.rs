use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison and negation operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    Eq,
    Like,
    Unlike,
    Ne,
    Gt,
    Lt,
    Lte,
    Gte,
    Not,
}

impl OperatorKind {
    /// Resolves a comparator as written in a query string.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" | "==" => Some(OperatorKind::Eq),
            "!=" | "<>" => Some(OperatorKind::Ne),
            "~" => Some(OperatorKind::Like),
            "!~" => Some(OperatorKind::Unlike),
            ">" => Some(OperatorKind::Gt),
            "<" => Some(OperatorKind::Lt),
            ">=" => Some(OperatorKind::Gte),
            "<=" => Some(OperatorKind::Lte),
            _ => None,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Eq => write!(f, "="),
            OperatorKind::Like => write!(f, "~"),
            OperatorKind::Unlike => write!(f, "!~"),
            OperatorKind::Ne => write!(f, "!="),
            OperatorKind::Gt => write!(f, ">"),
            OperatorKind::Lt => write!(f, "<"),
            OperatorKind::Lte => write!(f, "<="),
            OperatorKind::Gte => write!(f, ">="),
            OperatorKind::Not => write!(f, "not"),
        }
    }
}

/// Logical connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOperator {
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "and"),
            LogicalOperator::Or => write!(f, "or"),
        }
    }
}
