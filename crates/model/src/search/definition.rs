//! The field registry consulted while compiling a query.

use crate::{
    core::temporal::{is_numeric_literal, parse_datetime},
    error::DefinitionError,
    search::field::Field,
};
use chrono_tz::Tz;
use search_syntax::OperatorKind;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// Read-only lookup of search fields.
pub trait FieldRegistry: Send + Sync {
    /// Exact, case-sensitive lookup by field name or alias.
    fn field(&self, name: &str) -> Option<&Field>;

    /// Fields searched when a term names no field. `operator` is `None` for a
    /// bare keyword.
    fn default_fields_for(&self, value: &str, operator: Option<OperatorKind>) -> Vec<&Field>;

    /// Zone used to read temporal literals without an offset.
    fn time_zone(&self) -> Tz {
        Tz::UTC
    }
}

/// JSON shape of a definition document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionConfig {
    pub table: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    pub fields: Vec<Field>,
}

/// The searchable fields of one table.
#[derive(Debug, Clone)]
pub struct SearchDefinition {
    table: String,
    time_zone: Tz,
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl SearchDefinition {
    pub fn builder(table: impl Into<String>) -> DefinitionBuilder {
        DefinitionBuilder {
            table: table.into(),
            time_zone: Tz::UTC,
            fields: Vec::new(),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, DefinitionError> {
        let config: DefinitionConfig = serde_json::from_str(source)?;
        Self::try_from(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let source = fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl TryFrom<DefinitionConfig> for SearchDefinition {
    type Error = DefinitionError;

    fn try_from(config: DefinitionConfig) -> Result<Self, Self::Error> {
        let mut builder = SearchDefinition::builder(config.table);

        if let Some(zone) = config.time_zone {
            let tz = zone
                .parse::<Tz>()
                .map_err(|_| DefinitionError::UnknownTimeZone(zone.clone()))?;
            builder = builder.time_zone(tz);
        }

        config
            .fields
            .into_iter()
            .fold(builder, DefinitionBuilder::field)
            .build()
    }
}

impl FieldRegistry for SearchDefinition {
    fn field(&self, name: &str) -> Option<&Field> {
        self.index.get(name).map(|&idx| &self.fields[idx])
    }

    fn default_fields_for(&self, value: &str, operator: Option<OperatorKind>) -> Vec<&Field> {
        let textual = matches!(
            operator,
            None | Some(
                OperatorKind::Like | OperatorKind::Unlike | OperatorKind::Eq | OperatorKind::Ne
            )
        );
        let numerical = is_numeric_literal(value);
        let temporal = parse_datetime(value, self.time_zone).is_some();

        self.fields
            .iter()
            .filter(|field| !field.only_explicit)
            .filter(|field| {
                (textual && field.is_textual())
                    || (numerical && field.is_numerical())
                    || (temporal && field.is_temporal())
            })
            .collect()
    }

    fn time_zone(&self) -> Tz {
        self.time_zone
    }
}

pub struct DefinitionBuilder {
    table: String,
    time_zone: Tz,
    fields: Vec<Field>,
}

impl DefinitionBuilder {
    pub fn time_zone(mut self, tz: Tz) -> Self {
        self.time_zone = tz;
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Qualifies columns with the table and indexes every name and alias.
    pub fn build(self) -> Result<SearchDefinition, DefinitionError> {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut index = HashMap::new();

        for mut field in self.fields {
            if field.name.trim().is_empty() {
                return Err(DefinitionError::EmptyFieldName);
            }
            if let Some(operator @ OperatorKind::Not) = field.default_operator {
                return Err(DefinitionError::InvalidDefaultOperator {
                    field: field.name,
                    operator,
                });
            }
            if field.table.is_none() && !self.table.is_empty() {
                field.table = Some(self.table.clone());
            }

            let position = fields.len();
            for name in field.names() {
                if index.insert(name.to_string(), position).is_some() {
                    return Err(DefinitionError::DuplicateField(name.to_string()));
                }
            }
            fields.push(field);
        }

        Ok(SearchDefinition {
            table: self.table,
            time_zone: self.time_zone,
            fields,
            index,
        })
    }
}
