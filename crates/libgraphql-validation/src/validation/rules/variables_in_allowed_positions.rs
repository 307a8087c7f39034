use crate::types::TypeAnnotation;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// Every variable usage must be in a position whose expected type accepts
/// the variable's declared type.
///
/// A nullable variable with a default value is treated as non-null, since
/// the default always supplies a value when the variable is omitted.
#[derive(Debug, Default)]
pub struct VariablesInAllowedPositions;
impl<'a> Rule<'a> for VariablesInAllowedPositions {
    fn exit_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        let schema = ctx.schema();
        let var_defs: HashMap<&str, _> = operation.variable_definitions.iter()
            .map(|var_def| (var_def.name.as_str(), var_def))
            .collect();

        let usages = ctx.variable_usages(operation);
        for usage in usages.iter() {
            let (Some(var_def), Some(expected_type)) = (var_defs.get(usage.name), usage.expected_type) else {
                continue;
            };
            let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
            if schema.type_by_name(var_type.innermost_type_name()).is_none() {
                continue;
            }

            let effective_type = if var_def.default_value.is_some() && var_type.nullable() {
                var_type.as_non_null()
            } else {
                var_type.clone()
            };
            if effective_type.is_subtype_of(schema, expected_type) {
                continue;
            }

            ctx.report(
                ValidationRule::VariablesInAllowedPositions,
                format!(
                    "Variable \"${}\" of type \"{var_type}\" used in position expecting type \
                    \"{expected_type}\".",
                    usage.name,
                ),
                vec![
                    AstNodeRef::new(AstNodeKind::VariableDefinition, var_def.position),
                    usage.node.clone(),
                ],
            );
        }
    }
}
