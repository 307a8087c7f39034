use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// A non-repeatable directive may appear at most once on any one node.
#[derive(Debug, Default)]
pub struct UniqueDirectivesPerLocation;
impl<'a> Rule<'a> for UniqueDirectivesPerLocation {
    fn enter_directives(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directives: &'a [ast::operation::Directive],
    ) {
        let schema = ctx.schema();
        let mut known_directives = HashMap::new();
        for directive in directives {
            let name = directive.name.as_str();
            let repeatable = schema.directive_by_name(name)
                .is_some_and(|def| def.is_repeatable());
            if repeatable {
                continue;
            }
            match known_directives.get(name) {
                Some(first_pos) => ctx.report(
                    ValidationRule::UniqueDirectivesPerLocation,
                    format!("The directive \"{name}\" can only be used once at this location."),
                    vec![
                        AstNodeRef::new(AstNodeKind::Directive, *first_pos),
                        AstNodeRef::new(AstNodeKind::Directive, directive.position),
                    ],
                ),
                None => {
                    known_directives.insert(name, directive.position);
                },
            }
        }
    }
}
