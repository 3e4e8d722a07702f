//! End-to-end scenarios: definition documents loaded from disk, raw query
//! strings in, compiled conditions out.

use model::search::definition::SearchDefinition;
use std::io::Write;

pub mod utils;

/// Writes the definition document to a temporary file and loads it back the
/// way a host application would.
pub fn load_definition(json: &str) -> SearchDefinition {
    let mut file = tempfile::NamedTempFile::new().expect("create definition file");
    file.write_all(json.as_bytes()).expect("write definition file");
    SearchDefinition::from_json_file(file.path()).expect("load search definition")
}
