use model::error::DefinitionError;
use query_builder::BuildError;
use search_syntax::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Invalid search definition: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Failed to parse the search query: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Failed to compile the search query: {0}")]
    Build(#[from] BuildError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CliError {
    /// Message printed before exiting. Syntax errors point at the offending
    /// column of the query.
    pub fn report(&self) -> String {
        match self {
            CliError::Syntax(err) | CliError::Build(BuildError::Syntax(err)) => {
                err.format_error()
            }
            other => other.to_string(),
        }
    }
}
