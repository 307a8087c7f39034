use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Leaf-typed fields must not have a selection set; every other field must.
#[derive(Debug, Default)]
pub struct ScalarLeafs;
impl<'a> Rule<'a> for ScalarLeafs {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {
        let (Some(field_type), Some(field_def)) = (ctx.current_type(), ctx.current_field()) else {
            return;
        };
        let type_annotation = field_def.type_annotation();
        let has_selection = !field.selection_set.items.is_empty();

        if field_type.is_leaf() && has_selection {
            ctx.report(
                ValidationRule::ScalarLeafs,
                format!(
                    "Field \"{}\" must not have a selection since type \"{type_annotation}\" \
                    has no subfields.",
                    field.name,
                ),
                vec![AstNodeRef::new(AstNodeKind::SelectionSet, field.selection_set.span.0)],
            );
        } else if !field_type.is_leaf() && !has_selection {
            ctx.report(
                ValidationRule::ScalarLeafs,
                format!(
                    "Field \"{name}\" of type \"{type_annotation}\" must have a selection of \
                    subfields. Did you mean \"{name} {{ ... }}\"?",
                    name = field.name,
                ),
                vec![AstNodeRef::new(AstNodeKind::Field, field.position)],
            );
        }
    }
}
