use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every variable referenced by an operation, including within the
/// fragments it spreads, must be declared by that operation.
#[derive(Debug, Default)]
pub struct NoUndefinedVariables;
impl<'a> Rule<'a> for NoUndefinedVariables {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        let defined_names: HashSet<&str> = operation.variable_definitions.iter()
            .map(|var_def| var_def.name.as_str())
            .collect();

        let usages = ctx.variable_usages(operation);
        for usage in usages.iter() {
            if defined_names.contains(usage.name) {
                continue;
            }
            let message = match operation.name {
                Some(op_name) => format!(
                    "Variable \"${}\" is not defined by operation \"{op_name}\".",
                    usage.name,
                ),
                None => format!("Variable \"${}\" is not defined.", usage.name),
            };
            ctx.report(
                ValidationRule::NoUndefinedVariables,
                message,
                vec![
                    usage.node.clone(),
                    AstNodeRef::new(AstNodeKind::Operation(operation.kind), operation.position),
                ],
            );
        }
    }
}
