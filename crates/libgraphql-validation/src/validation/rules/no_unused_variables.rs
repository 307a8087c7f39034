use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every variable an operation declares must be referenced somewhere in
/// the operation or the fragments it spreads.
#[derive(Debug, Default)]
pub struct NoUnusedVariables;
impl<'a> Rule<'a> for NoUnusedVariables {
    fn exit_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        let usages = ctx.variable_usages(operation);
        let used_names: HashSet<&str> = usages.iter()
            .map(|usage| usage.name)
            .collect();

        for var_def in operation.variable_definitions {
            if used_names.contains(var_def.name.as_str()) {
                continue;
            }
            let message = match operation.name {
                Some(op_name) => format!(
                    "Variable \"${}\" is never used in operation \"{op_name}\".",
                    var_def.name,
                ),
                None => format!("Variable \"${}\" is never used.", var_def.name),
            };
            ctx.report(
                ValidationRule::NoUnusedVariables,
                message,
                vec![AstNodeRef::new(AstNodeKind::VariableDefinition, var_def.position)],
            );
        }
    }
}
