use super::{Compile, Fragment, MAX_NEGATION_DEPTH, Renderer};
use crate::{
    error::{BuildError, BuildResult},
    operator::sql_test,
};
use search_syntax::{Node, OperatorKind, OperatorNode};

impl Compile for OperatorNode {
    fn compile(&self, r: &mut Renderer) -> BuildResult<Fragment> {
        match (self.operator, self.children.as_slice()) {
            (OperatorKind::Not, [child]) => compile_not(child, r),
            (OperatorKind::Not, _) => Err(malformed(self)),
            (operator, [value]) => compile_default_fields(operator, value, r),
            (operator, [field, value]) => compile_explicit_field(operator, field, value, r),
            _ => Err(malformed(self)),
        }
    }
}

fn malformed(node: &OperatorNode) -> BuildError {
    BuildError::MalformedOperator {
        operator: node.operator,
        arity: node.arity(),
    }
}

/// `NOT(x) OR x IS NULL`, so rows where the tested column is `NULL` are
/// matched as well. The operand is compiled twice and binds its values twice,
/// so the output doubles with every nesting level; the depth is capped at
/// [`MAX_NEGATION_DEPTH`].
fn compile_not(child: &Node, r: &mut Renderer) -> BuildResult<Fragment> {
    if r.negation_depth >= MAX_NEGATION_DEPTH {
        return Err(BuildError::NegationTooDeep {
            limit: MAX_NEGATION_DEPTH,
        });
    }

    r.negation_depth += 1;
    let fragment = compile_negated(child, r);
    r.negation_depth -= 1;
    fragment
}

fn compile_negated(child: &Node, r: &mut Renderer) -> BuildResult<Fragment> {
    let Fragment::Sql(negated) = child.compile(r)? else {
        return Ok(Fragment::Empty);
    };
    // same operand, same registry: the second pass yields the same fragment
    let Fragment::Sql(null_check) = child.compile(r)? else {
        return Ok(Fragment::Empty);
    };

    Ok(Fragment::Sql(format!(
        "(NOT({negated}) OR {null_check} IS NULL)"
    )))
}

/// `> 10`: compares the value against every default field for it.
fn compile_default_fields(
    operator: OperatorKind,
    value: &Node,
    r: &mut Renderer,
) -> BuildResult<Fragment> {
    let value = &value.as_leaf().ok_or(BuildError::ValueNotLeaf)?.value;

    let registry = r.registry;
    let fields = registry.default_fields_for(value, Some(operator));
    if fields.is_empty() {
        return Err(BuildError::UnresolvedField(value.clone()));
    }

    let mut tests = Vec::with_capacity(fields.len());
    for field in fields {
        tests.push(sql_test(field, operator, value, r)?);
    }

    Ok(Fragment::join(tests, " OR "))
}

/// `field op value`
fn compile_explicit_field(
    operator: OperatorKind,
    field: &Node,
    value: &Node,
    r: &mut Renderer,
) -> BuildResult<Fragment> {
    let name = &field.as_leaf().ok_or(BuildError::FieldNotLeaf)?.value;
    let value = &value.as_leaf().ok_or(BuildError::ValueNotLeaf)?.value;

    let registry = r.registry;
    let field = registry
        .field(name)
        .ok_or_else(|| BuildError::UnknownField(name.clone()))?;

    sql_test(field, operator, value, r)
}
