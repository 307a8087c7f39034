use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// An anonymous operation is only allowed when it is the document's sole
/// operation.
#[derive(Debug, Default)]
pub struct LoneAnonymousOperation;
impl<'a> Rule<'a> for LoneAnonymousOperation {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        if operation.name.is_none() && ctx.operations().len() > 1 {
            ctx.report(
                ValidationRule::LoneAnonymousOperation,
                "This anonymous operation must be the only defined operation.",
                vec![AstNodeRef::new(AstNodeKind::Operation(operation.kind), operation.position)],
            );
        }
    }
}
