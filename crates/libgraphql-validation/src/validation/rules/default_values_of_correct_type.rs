use crate::ast;
use crate::types::TypeAnnotation;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::value;

/// A variable's default value must be valid for its declared type, and a
/// non-null variable may not declare a default at all.
#[derive(Debug, Default)]
pub struct DefaultValuesOfCorrectType;
impl<'a> Rule<'a> for DefaultValuesOfCorrectType {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a ast::operation::VariableDefinition,
    ) {
        let Some(default_value) = &var_def.default_value else {
            return;
        };
        let var_type = TypeAnnotation::from_ast_type(&var_def.var_type);
        let nodes = vec![
            AstNodeRef::new(AstNodeKind::VariableDefinition, var_def.position),
            AstNodeRef::new(AstNodeKind::Value, var_def.position),
        ];

        if !var_type.nullable() {
            ctx.report(
                ValidationRule::DefaultValuesOfCorrectType,
                format!(
                    "Variable \"${}\" of type \"{var_type}\" is required and will not use the \
                    default value. Perhaps you meant to use type \"{}\".",
                    var_def.name,
                    var_type.as_nullable(),
                ),
                nodes,
            );
            return;
        }

        let errors = value::is_valid_literal_value(ctx.schema(), &var_type, default_value);
        if !errors.is_empty() {
            ctx.report(
                ValidationRule::DefaultValuesOfCorrectType,
                format!(
                    "Variable \"${}\" of type \"{var_type}\" has invalid default value {}.\n{}",
                    var_def.name,
                    value::print_value(default_value),
                    errors.join("\n"),
                ),
                nodes,
            );
        }
    }
}
