use super::{Compile, Fragment, Renderer};
use crate::error::{BuildError, BuildResult};
use search_syntax::{LogicalOperator, LogicalOperatorNode};

impl Compile for LogicalOperatorNode {
    fn compile(&self, r: &mut Renderer) -> BuildResult<Fragment> {
        if self.children.is_empty() {
            return Err(BuildError::EmptyLogicalOperator(self.operator));
        }

        let mut fragments = Vec::with_capacity(self.children.len());
        for child in &self.children {
            fragments.push(child.compile(r)?);
        }

        let separator = match self.operator {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        };
        Ok(Fragment::join(fragments, separator))
    }
}
