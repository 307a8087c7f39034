use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// Every named operation in a document must have a unique name.
#[derive(Debug, Default)]
pub struct UniqueOperationNames<'a> {
    known_names: HashMap<&'a str, AstNodeRef>,
}
impl<'a> Rule<'a> for UniqueOperationNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        let Some(name) = operation.name else {
            return;
        };
        let node = AstNodeRef::new(AstNodeKind::Operation(operation.kind), operation.position);
        match self.known_names.get(name) {
            Some(first) => ctx.report(
                ValidationRule::UniqueOperationNames,
                format!("There can be only one operation named \"{name}\"."),
                vec![first.clone(), node],
            ),
            None => {
                self.known_names.insert(name, node);
            },
        }
    }
}
