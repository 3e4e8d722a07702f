use super::{Compile, Fragment, Renderer};
use crate::{
    error::{BuildError, BuildResult},
    operator::sql_test,
};
use search_syntax::LeafNode;

/// A bare keyword searches every default field using each field's own
/// default operator.
impl Compile for LeafNode {
    fn compile(&self, r: &mut Renderer) -> BuildResult<Fragment> {
        let registry = r.registry;
        let fields = registry.default_fields_for(&self.value, None);
        if fields.is_empty() {
            return Err(BuildError::UnresolvedField(self.value.clone()));
        }

        let mut tests = Vec::with_capacity(fields.len());
        for field in fields {
            tests.push(sql_test(field, field.default_operator(), &self.value, r)?);
        }

        Ok(Fragment::join(tests, " OR "))
    }
}
