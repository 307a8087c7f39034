use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use std::collections::HashSet;

/// Every fragment defined in a document must be spread somewhere in it.
#[derive(Debug, Default)]
pub struct NoUnusedFragments<'a> {
    spread_names: HashSet<&'a str>,
}
impl<'a> Rule<'a> for NoUnusedFragments<'a> {
    fn enter_fragment_spread(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        spread: &'a ast::operation::FragmentSpread,
    ) {
        self.spread_names.insert(spread.fragment_name.as_str());
    }

    fn exit_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        document: &'a ast::operation::Document,
    ) {
        for def in &document.definitions {
            let ast::operation::Definition::Fragment(fragment) = def else {
                continue;
            };
            if self.spread_names.contains(fragment.name.as_str()) {
                continue;
            }
            ctx.report(
                ValidationRule::NoUnusedFragments,
                format!("Fragment \"{}\" is never used.", fragment.name),
                vec![AstNodeRef::new(AstNodeKind::FragmentDefinition, fragment.position)],
            );
        }
    }
}
