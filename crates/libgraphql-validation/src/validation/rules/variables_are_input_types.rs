use crate::ast;
use crate::types::TypeAnnotation;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// A variable may only be declared with an input type (scalar, enum, or
/// input object, possibly wrapped).
#[derive(Debug, Default)]
pub struct VariablesAreInputTypes;
impl<'a> Rule<'a> for VariablesAreInputTypes {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::operation::VariableDefinition,
    ) {
        let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
        let is_input = ctx.schema()
            .type_by_name(var_type.innermost_type_name())
            .is_none_or(|t| t.is_input_type());
        if !is_input {
            ctx.report(
                ValidationRule::VariablesAreInputTypes,
                format!(
                    "Variable \"${}\" cannot be non-input type \"{var_type}\".",
                    var_def.name,
                ),
                vec![AstNodeRef::new(AstNodeKind::VariableDefinition, var_def.position)],
            );
        }
    }
}
