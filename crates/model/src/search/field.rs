use crate::core::{
    field_type::FieldType,
    temporal::{parse_date, parse_datetime},
    value::Value,
};
use chrono_tz::Tz;
use search_syntax::OperatorKind;
use serde::{Deserialize, Serialize};

/// A searchable field and the column it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Name used in queries, e.g. `name` in `name = alice`.
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Column name, defaults to the field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Table qualifier, defaults to the table of the definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_operator: Option<OperatorKind>,

    /// Only searchable through `field op value`, never through a bare keyword.
    #[serde(default)]
    pub only_explicit: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Field {
            name: name.into(),
            field_type,
            column: None,
            table: None,
            default_operator: None,
            only_explicit: false,
            aliases: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_default_operator(mut self, operator: OperatorKind) -> Self {
        self.default_operator = Some(operator);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn only_explicit(mut self) -> Self {
        self.only_explicit = true;
        self
    }

    /// The column expression used in conditions, e.g. `users.name`.
    pub fn column_sql(&self) -> String {
        let column = self.column.as_deref().unwrap_or(&self.name);
        match self.table.as_deref() {
            Some(table) if !table.is_empty() => format!("{table}.{column}"),
            _ => column.to_string(),
        }
    }

    /// Operator used when the field is searched through a bare keyword.
    pub fn default_operator(&self) -> OperatorKind {
        self.default_operator.unwrap_or(if self.field_type.is_textual() {
            OperatorKind::Like
        } else {
            OperatorKind::Eq
        })
    }

    pub fn is_temporal(&self) -> bool {
        self.field_type.is_temporal()
    }

    pub fn is_textual(&self) -> bool {
        self.field_type.is_textual()
    }

    pub fn is_numerical(&self) -> bool {
        self.field_type.is_numerical()
    }

    /// All names the field answers to.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Converts a literal for a temporal field into the value to bind.
    /// `date` columns bind a calendar date, the others a UTC timestamp.
    pub fn parse_temporal(&self, value: &str, tz: Tz) -> Option<Value> {
        match self.field_type {
            FieldType::Date => parse_date(value, tz).map(Value::Date),
            FieldType::Datetime | FieldType::Timestamp => {
                parse_datetime(value, tz).map(Value::Timestamp)
            }
            _ => None,
        }
    }
}
