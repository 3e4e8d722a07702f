use crate::{
    condition::{Compile, Fragment, Renderer},
    error::BuildResult,
};
use model::{core::value::Value, search::definition::FieldRegistry};
use search_syntax::Node;
use serde::Serialize;
use tracing::debug;

/// Compiled search: a condition for a `WHERE` clause and its bind parameters.
///
/// `conditions` is `None` when the search does not restrict anything, either
/// because the query was blank or because every term was dropped. `params`
/// holds one value per `?` in `conditions`, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindParams {
    pub conditions: Option<String>,
    pub params: Vec<Value>,
}

impl FindParams {
    /// A search that matches every row.
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn is_match_all(&self) -> bool {
        self.conditions.is_none()
    }

    /// The condition followed by its parameters, `None` when unconditioned.
    pub fn into_conditions(self) -> Option<(String, Vec<Value>)> {
        let conditions = self.conditions?;
        Some((conditions, self.params))
    }

    /// ` WHERE <conditions>`, or an empty string when unconditioned.
    pub fn where_clause(&self) -> String {
        match &self.conditions {
            Some(conditions) => format!(" WHERE {conditions}"),
            None => String::new(),
        }
    }

    /// Stable key for the compiled search, usable to cache prepared statements.
    pub fn fingerprint(&self) -> String {
        let mut source = self.conditions.clone().unwrap_or_default();
        for param in &self.params {
            source.push('\0');
            source.push_str(&param.to_string());
        }
        format!("{:x}", md5::compute(source))
    }
}

/// Compiles an already parsed search AST against a field registry.
pub struct QueryBuilder<'a> {
    registry: &'a dyn FieldRegistry,
    ast: &'a Node,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(registry: &'a dyn FieldRegistry, ast: &'a Node) -> Self {
        Self { registry, ast }
    }

    pub fn build_find_params(&self) -> BuildResult<FindParams> {
        let mut renderer = Renderer::new(self.registry);
        let fragment = self.ast.compile(&mut renderer)?;
        let params = renderer.finish();

        match fragment {
            Fragment::Sql(sql) => Ok(FindParams {
                conditions: Some(sql),
                params,
            }),
            Fragment::Empty => {
                debug!("every search term was dropped, matching all rows");
                Ok(FindParams::match_all())
            }
        }
    }
}

/// Parses and compiles a search query.
///
/// A missing or blank query yields [`FindParams::match_all`] without parsing.
pub fn build_query<'q>(
    registry: &dyn FieldRegistry,
    query: impl Into<Option<&'q str>>,
) -> BuildResult<FindParams> {
    let Some(query) = query.into().filter(|q| !q.trim().is_empty()) else {
        debug!("blank search query, matching all rows");
        return Ok(FindParams::match_all());
    };

    let ast = search_syntax::parse(query)?;
    let find_params = QueryBuilder::new(registry, &ast).build_find_params()?;

    debug!(
        query,
        conditions = ?find_params.conditions,
        params = find_params.params.len(),
        "compiled search query"
    );
    Ok(find_params)
}
