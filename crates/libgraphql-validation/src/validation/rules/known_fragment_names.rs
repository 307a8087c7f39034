use crate::ast;
use crate::suggestion;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Every fragment spread must name a fragment defined in the document.
#[derive(Debug, Default)]
pub struct KnownFragmentNames;
impl<'a> Rule<'a> for KnownFragmentNames {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a ast::operation::FragmentSpread,
    ) {
        if ctx.fragment(&spread.fragment_name).is_none() {
            let suggestions = suggestion::suggestion_list(
                &spread.fragment_name,
                ctx.fragments().keys().copied(),
            );
            ctx.report(
                ValidationRule::KnownFragmentNames,
                format!(
                    "Unknown fragment \"{}\".{}",
                    spread.fragment_name,
                    suggestion::did_you_mean(&suggestions),
                ),
                vec![AstNodeRef::new(AstNodeKind::FragmentSpread, spread.position)],
            );
        }
    }
}
