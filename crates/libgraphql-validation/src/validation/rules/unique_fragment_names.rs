use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashMap;

/// Every fragment definition in a document must have a unique name.
#[derive(Debug, Default)]
pub struct UniqueFragmentNames<'a> {
    known_names: HashMap<&'a str, graphql_parser::Pos>,
}
impl<'a> Rule<'a> for UniqueFragmentNames<'a> {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {
        let name = fragment.name.as_str();
        match self.known_names.get(name) {
            Some(first_pos) => ctx.report(
                ValidationRule::UniqueFragmentNames,
                format!("There can be only one fragment named \"{name}\"."),
                vec![
                    AstNodeRef::new(AstNodeKind::FragmentDefinition, *first_pos),
                    AstNodeRef::new(AstNodeKind::FragmentDefinition, fragment.position),
                ],
            ),
            None => {
                self.known_names.insert(name, fragment.position);
            },
        }
    }
}
