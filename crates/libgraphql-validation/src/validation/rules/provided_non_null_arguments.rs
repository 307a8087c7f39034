use crate::ast;
use crate::types::Parameter;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use indexmap::IndexMap;

/// The non-null parameters that `arguments` does not supply.
fn missing_required_parameters<'p>(
    parameters: &'p IndexMap<String, Parameter>,
    arguments: &[(String, ast::operation::Value)],
) -> impl Iterator<Item = &'p Parameter> {
    parameters.values().filter(move |param| {
        !param.type_annotation().nullable()
            && !arguments.iter().any(|(name, _)| name == param.name())
    })
}

/// Every non-null argument must be provided, even one the schema gives a
/// default value.
#[derive(Debug, Default)]
pub struct ProvidedNonNullArguments;
impl<'a> Rule<'a> for ProvidedNonNullArguments {
    fn exit_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::operation::Directive,
    ) {
        let Some(directive_def) = ctx.current_directive() else {
            return;
        };
        for param in missing_required_parameters(directive_def.parameters(), &directive.arguments) {
            ctx.report(
                ValidationRule::ProvidedNonNullArguments,
                format!(
                    "Directive \"@{}\" argument \"{}\" of type \"{}\" is required but not \
                    provided.",
                    directive.name,
                    param.name(),
                    param.type_annotation(),
                ),
                vec![AstNodeRef::new(AstNodeKind::Directive, directive.position)],
            );
        }
    }

    fn exit_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {
        let Some(field_def) = ctx.current_field() else {
            return;
        };
        for param in missing_required_parameters(field_def.parameters(), &field.arguments) {
            ctx.report(
                ValidationRule::ProvidedNonNullArguments,
                format!(
                    "Field \"{}\" argument \"{}\" of type \"{}\" is required but not provided.",
                    field.name,
                    param.name(),
                    param.type_annotation(),
                ),
                vec![AstNodeRef::new(AstNodeKind::Field, field.position)],
            );
        }
    }
}
