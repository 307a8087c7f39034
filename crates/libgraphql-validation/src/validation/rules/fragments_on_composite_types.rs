use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// A fragment's type condition must name an object, interface or union.
///
/// Type conditions naming unknown types are left to `KnownTypeNames`.
#[derive(Debug, Default)]
pub struct FragmentsOnCompositeTypes;
impl<'a> Rule<'a> for FragmentsOnCompositeTypes {
    fn enter_fragment_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) {
        let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
        let is_composite = ctx.schema()
            .type_by_name(type_name)
            .is_none_or(|t| t.is_composite());
        if !is_composite {
            ctx.report(
                ValidationRule::FragmentsOnCompositeTypes,
                format!(
                    "Fragment \"{}\" cannot condition on non composite type \"{type_name}\".",
                    fragment.name,
                ),
                vec![AstNodeRef::new(AstNodeKind::TypeCondition, fragment.position)],
            );
        }
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        inline_fragment: &'a ast::operation::InlineFragment,
    ) {
        let Some(ast::operation::TypeCondition::On(type_name)) = &inline_fragment.type_condition else {
            return;
        };
        let is_composite = ctx.schema()
            .type_by_name(type_name)
            .is_none_or(|t| t.is_composite());
        if !is_composite {
            ctx.report(
                ValidationRule::FragmentsOnCompositeTypes,
                format!("Fragment cannot condition on non composite type \"{type_name}\"."),
                vec![AstNodeRef::new(AstNodeKind::TypeCondition, inline_fragment.position)],
            );
        }
    }
}
