use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// An operation may declare each variable name only once.
#[derive(Debug, Default)]
pub struct UniqueVariableNames;
impl<'a> Rule<'a> for UniqueVariableNames {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        let mut known_names = HashMap::new();
        for var_def in operation.variable_definitions {
            let name = var_def.name.as_str();
            match known_names.get(name) {
                Some(first_pos) => ctx.report(
                    ValidationRule::UniqueVariableNames,
                    format!("There can be only one variable named \"{name}\"."),
                    vec![
                        AstNodeRef::new(AstNodeKind::VariableDefinition, *first_pos),
                        AstNodeRef::new(AstNodeKind::VariableDefinition, var_def.position),
                    ],
                ),
                None => {
                    known_names.insert(name, var_def.position);
                },
            }
        }
    }
}
