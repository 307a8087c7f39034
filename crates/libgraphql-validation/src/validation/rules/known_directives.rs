use crate::ast;
use crate::suggestion;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every directive must be defined by the schema and be legal at the
/// location it is used.
#[derive(Debug, Default)]
pub struct KnownDirectives;
impl<'a> Rule<'a> for KnownDirectives {
    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a ast::operation::Directive,
    ) {
        let node = AstNodeRef::new(AstNodeKind::Directive, directive.position);
        let Some(directive_def) = ctx.current_directive() else {
            let suggestions = suggestion::suggestion_list(
                &directive.name,
                ctx.schema().directive_names(),
            );
            ctx.report(
                ValidationRule::KnownDirectives,
                format!(
                    "Unknown directive \"{}\".{}",
                    directive.name,
                    suggestion::did_you_mean(&suggestions),
                ),
                vec![node],
            );
            return;
        };

        let location = ctx.directive_location();
        if !directive_def.is_allowed_at(location) {
            ctx.report(
                ValidationRule::KnownDirectives,
                format!(
                    "Directive \"{}\" may not be used on {}.",
                    directive.name,
                    location.as_str(),
                ),
                vec![node],
            );
        }
    }
}
