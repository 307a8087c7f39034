use crate::ast;
use crate::schema::SchemaView;
use crate::types::GraphQLType;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Whether some object type could satisfy both `a` and `b`.
fn do_types_overlap(schema: &dyn SchemaView, a: &GraphQLType, b: &GraphQLType) -> bool {
    if a.name() == b.name() {
        return true;
    }
    match (a.is_abstract(), b.is_abstract()) {
        (true, true) => schema.possible_types(a.name())
            .into_iter()
            .any(|type_name| schema.is_possible_type(b.name(), type_name)),
        (true, false) => schema.is_possible_type(a.name(), b.name()),
        (false, true) => schema.is_possible_type(b.name(), a.name()),
        (false, false) => false,
    }
}

/// A fragment may only be spread where the parent type and the fragment's
/// type condition can apply to the same object.
#[derive(Debug, Default)]
pub struct PossibleFragmentSpreads;
impl<'a> Rule<'a> for PossibleFragmentSpreads {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a ast::operation::FragmentSpread,
    ) {
        let schema = ctx.schema();
        let fragment_type = ctx.fragment(&spread.fragment_name).and_then(|fragment| {
            let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
            schema.type_by_name(type_name)
        });
        let (Some(fragment_type), Some(parent_type)) = (fragment_type, ctx.parent_type()) else {
            return;
        };
        if fragment_type.is_composite() && !do_types_overlap(schema, fragment_type, parent_type) {
            ctx.report(
                ValidationRule::PossibleFragmentSpreads,
                format!(
                    "Fragment \"{}\" cannot be spread here as objects of type \"{}\" can never \
                    be of type \"{}\".",
                    spread.fragment_name,
                    parent_type.name(),
                    fragment_type.name(),
                ),
                vec![AstNodeRef::new(AstNodeKind::FragmentSpread, spread.position)],
            );
        }
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a ast::operation::InlineFragment,
    ) {
        if inline_fragment.type_condition.is_none() {
            return;
        }
        let (Some(fragment_type), Some(parent_type)) = (ctx.current_type(), ctx.parent_type()) else {
            return;
        };
        if fragment_type.is_composite() && !do_types_overlap(ctx.schema(), fragment_type, parent_type) {
            ctx.report(
                ValidationRule::PossibleFragmentSpreads,
                format!(
                    "Fragment cannot be spread here as objects of type \"{}\" can never be of \
                    type \"{}\".",
                    parent_type.name(),
                    fragment_type.name(),
                ),
                vec![AstNodeRef::new(AstNodeKind::InlineFragment, inline_fragment.position)],
            );
        }
    }
}
