use crate::error::CliError;
use model::search::definition::SearchDefinition;
use search_syntax::OperatorKind;
use serde::Serialize;

/// What `fields` prints for each searchable field.
#[derive(Debug, Serialize)]
pub struct FieldSummary<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub field_type: &'static str,
    pub column: String,
    pub default_operator: OperatorKind,
    pub only_explicit: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub aliases: &'a [String],
}

pub fn field_summaries(definition: &SearchDefinition) -> Vec<FieldSummary<'_>> {
    definition
        .fields()
        .iter()
        .map(|field| FieldSummary {
            name: &field.name,
            field_type: field.field_type.as_str(),
            column: field.column_sql(),
            default_operator: field.default_operator(),
            only_explicit: field.only_explicit,
            aliases: &field.aliases,
        })
        .collect()
}

pub async fn write_json<T: Serialize>(value: &T, path: String) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
