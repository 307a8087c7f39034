use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// A field or directive may be given each argument only once.
#[derive(Debug, Default)]
pub struct UniqueArgumentNames;
impl<'a> Rule<'a> for UniqueArgumentNames {
    fn enter_arguments(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        arguments: &'a [(String, ast::operation::Value)],
        position: graphql_parser::Pos,
    ) {
        let mut known_names = HashSet::new();
        for (name, _) in arguments {
            if !known_names.insert(name.as_str()) {
                // Arguments carry no position of their own, so the owning
                // field or directive stands in for both occurrences.
                ctx.report(
                    ValidationRule::UniqueArgumentNames,
                    format!("There can be only one argument named \"{name}\"."),
                    vec![AstNodeRef::new(AstNodeKind::Argument, position)],
                );
            }
        }
    }
}
