use search_syntax::OperatorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read search definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode search definition: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("field name or alias '{0}' is defined more than once")]
    DuplicateField(String),

    #[error("field '{field}' cannot use '{operator}' as its default operator")]
    InvalidDefaultOperator {
        field: String,
        operator: OperatorKind,
    },
}
