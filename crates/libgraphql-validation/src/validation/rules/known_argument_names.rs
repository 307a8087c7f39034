use crate::suggestion;
use crate::validation::ArgumentNode;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every argument given to a known field or directive must be one it
/// declares.
#[derive(Debug, Default)]
pub struct KnownArgumentNames;
impl<'a> Rule<'a> for KnownArgumentNames {
    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: ArgumentNode<'a>,
    ) {
        if ctx.current_argument().is_some() {
            return;
        }

        // The innermost ancestor is the argument itself.
        let owner_kind = ctx.ancestors().iter().rev().nth(1).copied();
        let message = match owner_kind {
            Some(AstNodeKind::Field) => {
                let (Some(field_def), Some(parent_type)) = (ctx.current_field(), ctx.parent_type()) else {
                    return;
                };
                let suggestions = suggestion::suggestion_list(
                    argument.name,
                    field_def.parameters().keys().map(String::as_str),
                );
                format!(
                    "Unknown argument \"{}\" on field \"{}\" of type \"{}\".{}",
                    argument.name,
                    field_def.name(),
                    parent_type.name(),
                    suggestion::did_you_mean(&suggestions),
                )
            },

            Some(AstNodeKind::Directive) => {
                let Some(directive_def) = ctx.current_directive() else {
                    return;
                };
                let suggestions = suggestion::suggestion_list(
                    argument.name,
                    directive_def.parameters().keys().map(String::as_str),
                );
                format!(
                    "Unknown argument \"{}\" on directive \"@{}\".{}",
                    argument.name,
                    directive_def.name(),
                    suggestion::did_you_mean(&suggestions),
                )
            },

            _ => return,
        };

        ctx.report(
            ValidationRule::KnownArgumentNames,
            message,
            vec![AstNodeRef::new(AstNodeKind::Argument, argument.position)],
        );
    }
}
