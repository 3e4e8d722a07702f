use search_syntax::{LogicalOperator, OperatorKind, SyntaxError};
use thiserror::Error;

pub type BuildResult<T> = Result<T, BuildError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Field name not a leaf node")]
    FieldNotLeaf,

    #[error("Value not a leaf node")]
    ValueNotLeaf,

    #[error("Don't know how to handle operator '{operator}' with {arity} operand(s)")]
    MalformedOperator { operator: OperatorKind, arity: usize },

    #[error("Logical operator '{0}' has no operands")]
    EmptyLogicalOperator(LogicalOperator),

    #[error("'{0}' is not a comparison operator")]
    NotAComparison(OperatorKind),

    #[error("Negations nested deeper than {limit} levels")]
    NegationTooDeep { limit: usize },

    #[error("Field '{0}' not recognized for searching")]
    UnknownField(String),

    #[error("No field can be searched for '{0}'")]
    UnresolvedField(String),
}

impl BuildError {
    /// Whether the error was caused by the query text itself rather than by a
    /// malformed tree handed to the compiler.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BuildError::Syntax(_)
                | BuildError::NegationTooDeep { .. }
                | BuildError::UnknownField(_)
                | BuildError::UnresolvedField(_)
        )
    }
}
