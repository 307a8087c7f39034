use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationKind;
use crate::validation::OperationNode;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Collects the root fields `selection_set` selects, keyed by response name,
/// looking through fragment spreads and inline fragments. Each key maps to
/// the first field selected under it.
fn collect_root_fields<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::operation::SelectionSet,
    visited_fragments: &mut HashSet<&'a str>,
    fields: &mut IndexMap<&'a str, &'a ast::operation::Field>,
) {
    use ast::operation::Selection;
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                let response_name = field.alias.as_deref().unwrap_or(&field.name);
                fields.entry(response_name).or_insert(field);
            },
            Selection::InlineFragment(inline_fragment) =>
                collect_root_fields(ctx, &inline_fragment.selection_set, visited_fragments, fields),
            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name.as_str()) {
                    continue;
                }
                if let Some(fragment) = ctx.fragment(&spread.fragment_name) {
                    collect_root_fields(ctx, &fragment.selection_set, visited_fragments, fields);
                }
            },
        }
    }
}

/// A subscription must select exactly one root field, counting the fields
/// its fragments contribute.
#[derive(Debug, Default)]
pub struct SingleFieldSubscriptions;
impl<'a> Rule<'a> for SingleFieldSubscriptions {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &OperationNode<'a>,
    ) {
        if operation.kind != OperationKind::Subscription {
            return;
        }

        let mut fields = IndexMap::new();
        collect_root_fields(ctx, operation.selection_set, &mut HashSet::new(), &mut fields);
        if fields.len() <= 1 {
            return;
        }

        let message = match operation.name {
            Some(name) => format!("Subscription \"{name}\" must select only one top level field."),
            None => "Anonymous Subscription must select only one top level field.".to_string(),
        };
        let extra_fields = fields.values()
            .skip(1)
            .map(|field| AstNodeRef::new(AstNodeKind::Field, field.position))
            .collect();
        ctx.report(ValidationRule::SingleFieldSubscriptions, message, extra_fields);
    }
}
