use crate::{
    condition::{Fragment, Renderer},
    error::{BuildError, BuildResult},
};
use model::{core::value::Value, search::field::Field};
use search_syntax::OperatorKind;
use tracing::debug;

/// Maps a comparison operator to its SQL token. `not` has no token of its own,
/// negation is compiled structurally.
pub fn sql_operator(operator: OperatorKind) -> Option<&'static str> {
    match operator {
        OperatorKind::Eq => Some("="),
        OperatorKind::Like => Some("LIKE"),
        OperatorKind::Unlike => Some("NOT LIKE"),
        OperatorKind::Ne => Some("<>"),
        OperatorKind::Gt => Some(">"),
        OperatorKind::Lt => Some("<"),
        OperatorKind::Lte => Some("<="),
        OperatorKind::Gte => Some(">="),
        OperatorKind::Not => None,
    }
}

/// Builds a single `<column> <op> ?` test and binds the converted value.
///
/// `LIKE`/`NOT LIKE` values without a `%` at either end are wrapped into
/// `%value%`. Values compared against temporal fields are parsed in the
/// registry's time zone; when that fails the test is dropped and nothing is
/// bound.
pub fn sql_test(
    field: &Field,
    operator: OperatorKind,
    value: &str,
    r: &mut Renderer,
) -> BuildResult<Fragment> {
    let token = sql_operator(operator).ok_or(BuildError::NotAComparison(operator))?;

    let param = if matches!(operator, OperatorKind::Like | OperatorKind::Unlike)
        && !value.starts_with('%')
        && !value.ends_with('%')
    {
        Value::String(format!("%{value}%"))
    } else if field.is_temporal() {
        match field.parse_temporal(value, r.registry.time_zone()) {
            Some(parsed) => parsed,
            None => {
                debug!(
                    field = %field.name,
                    value,
                    "dropping comparison, value is not a valid {}",
                    field.field_type
                );
                return Ok(Fragment::Empty);
            }
        }
    } else {
        Value::from(value)
    };

    r.add_param(param);
    Ok(Fragment::Sql(format!("{} {} ?", field.column_sql(), token)))
}
