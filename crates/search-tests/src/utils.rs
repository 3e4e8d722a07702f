use model::{core::value::Value, search::definition::SearchDefinition};
use query_builder::{FindParams, build_query};

/// Definition for a `users` table. `email` is only searchable explicitly.
pub const USERS_DEFINITION: &str = r#"{
    "table": "users",
    "fields": [
        { "name": "name",       "type": "varchar" },
        { "name": "email",      "type": "string", "only_explicit": true, "aliases": ["mail"] },
        { "name": "age",        "type": "integer" },
        { "name": "born_on",    "type": "date" },
        { "name": "created_at", "type": "timestamp" },
        { "name": "bio",        "type": "text" }
    ]
}"#;

/// Definition for an `issues` table whose naive timestamps are read in Berlin
/// time. `reporter` lives on the joined `users` table.
pub const ISSUES_DEFINITION: &str = r#"{
    "table": "issues",
    "time_zone": "Europe/Berlin",
    "fields": [
        { "name": "title",      "type": "string" },
        { "name": "status",     "type": "string", "default_operator": "eq" },
        { "name": "priority",   "type": "integer" },
        { "name": "created_at", "type": "datetime" },
        {
            "name": "reporter",
            "type": "string",
            "table": "users",
            "column": "login",
            "aliases": ["author"],
            "only_explicit": true
        }
    ]
}"#;

/// Compile the query, panicking on any error
pub fn compile(definition: &SearchDefinition, query: &str) -> FindParams {
    build_query(definition, query).unwrap_or_else(|e| panic!("failed to compile {query:?}: {e}"))
}

pub fn placeholder_count(find_params: &FindParams) -> usize {
    find_params
        .conditions
        .as_deref()
        .map_or(0, |sql| sql.matches('?').count())
}

/// Asserts the compiled condition and parameters, and that both line up.
pub fn assert_condition(find_params: &FindParams, sql: &str, params: &[Value]) {
    assert_eq!(find_params.conditions.as_deref(), Some(sql));
    assert_eq!(find_params.params, params);
    assert_eq!(placeholder_count(find_params), find_params.params.len());
}

pub fn assert_match_all(find_params: &FindParams) {
    assert!(
        find_params.is_match_all(),
        "expected no condition, got {:?}",
        find_params.conditions
    );
    assert!(find_params.params.is_empty());
}

pub fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().copied().map(Value::from).collect()
}
