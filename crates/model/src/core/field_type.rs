use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// The kind of column behind a search field. Decides the default operator,
/// whether the field takes part in keyword searches, and how literals are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FieldType {
    String,
    Text,
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    Datetime,
    Timestamp,
}

lazy_static! {
    static ref TYPE_NAME_MAP: HashMap<&'static str, FieldType> = build_type_name_map();
}

impl FieldType {
    /// Resolves a type name, accepting common SQL spellings such as
    /// `varchar(255)`, `bigint` or `timestamptz`.
    pub fn from_type_name(type_name: &str) -> Result<Self, String> {
        let normalized = Self::normalize_type_name(type_name);
        TYPE_NAME_MAP
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| format!("Unknown field type: {type_name}"))
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Text)
    }

    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            FieldType::Integer | FieldType::Float | FieldType::Decimal
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            FieldType::Date | FieldType::Datetime | FieldType::Timestamp
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Decimal => "decimal",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
            FieldType::Timestamp => "timestamp",
        }
    }

    fn normalize_type_name(type_name: &str) -> String {
        let lower = type_name.trim().to_ascii_lowercase();
        // Drop length / precision modifiers: varchar(255), numeric(10, 2)
        let base = match lower.find('(') {
            Some(idx) => &lower[..idx],
            None => lower.as_str(),
        };
        base.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        FieldType::from_type_name(&value)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn build_type_name_map() -> HashMap<&'static str, FieldType> {
    let mut map = HashMap::new();

    for name in ["string", "varchar", "character varying", "char", "character", "citext"] {
        map.insert(name, FieldType::String);
    }
    for name in ["text", "tinytext", "mediumtext", "longtext"] {
        map.insert(name, FieldType::Text);
    }
    for name in [
        "integer", "int", "int2", "int4", "int8", "smallint", "bigint", "tinyint", "serial",
        "bigserial",
    ] {
        map.insert(name, FieldType::Integer);
    }
    for name in ["float", "float4", "float8", "double", "double precision", "real"] {
        map.insert(name, FieldType::Float);
    }
    for name in ["decimal", "numeric", "money"] {
        map.insert(name, FieldType::Decimal);
    }
    for name in ["boolean", "bool"] {
        map.insert(name, FieldType::Boolean);
    }
    map.insert("date", FieldType::Date);
    map.insert("datetime", FieldType::Datetime);
    for name in [
        "timestamp",
        "timestamptz",
        "timestamp with time zone",
        "timestamp without time zone",
    ] {
        map.insert(name, FieldType::Timestamp);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_type_name_normalizes() {
        assert_eq!(FieldType::from_type_name("string"), Ok(FieldType::String));
        assert_eq!(
            FieldType::from_type_name("VARCHAR(255)"),
            Ok(FieldType::String)
        );
        assert_eq!(
            FieldType::from_type_name("numeric(10, 2)"),
            Ok(FieldType::Decimal)
        );
        assert_eq!(
            FieldType::from_type_name("timestamp  with time zone"),
            Ok(FieldType::Timestamp)
        );
        assert!(FieldType::from_type_name("geometry").is_err());
    }

    #[test]
    fn test_type_classes() {
        assert!(FieldType::Text.is_textual());
        assert!(!FieldType::Text.is_temporal());
        assert!(FieldType::Decimal.is_numerical());
        assert!(FieldType::Date.is_temporal());
        assert!(FieldType::Timestamp.is_temporal());
        assert!(!FieldType::Boolean.is_textual());
        assert!(!FieldType::Boolean.is_numerical());
    }

    #[test]
    fn test_serde() {
        let ty: FieldType = serde_json::from_str("\"bigint\"").unwrap();
        assert_eq!(ty, FieldType::Integer);
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"integer\"");
        assert!(serde_json::from_str::<FieldType>("\"blob\"").is_err());
    }
}
