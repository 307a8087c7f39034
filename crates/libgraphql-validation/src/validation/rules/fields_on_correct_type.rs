use crate::ast;
use crate::schema::SchemaView;
use crate::suggestion;
use crate::types::GraphQLType;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use indexmap::IndexMap;

/// Every selected field must be defined on the type it is selected from.
#[derive(Debug, Default)]
pub struct FieldsOnCorrectType;
impl FieldsOnCorrectType {
    /// For an abstract parent, the interfaces (most widely implemented
    /// first) and then the object types among its possible types that do
    /// define `field_name`.
    fn suggested_type_names<'s>(
        schema: &'s dyn SchemaView,
        parent_type: &GraphQLType,
        field_name: &str,
    ) -> Vec<&'s str> {
        if !parent_type.is_abstract() {
            return vec![];
        }

        let mut object_type_names = vec![];
        let mut interface_usage_counts: IndexMap<&'s str, usize> = IndexMap::new();
        for possible_type_name in schema.possible_types(parent_type.name()) {
            if schema.field_of(possible_type_name, field_name).is_none() {
                continue;
            }
            object_type_names.push(possible_type_name);
            for iface_name in schema.implementing_interfaces_of(possible_type_name) {
                if schema.field_of(iface_name, field_name).is_none() {
                    continue;
                }
                *interface_usage_counts.entry(iface_name.as_str()).or_insert(0) += 1;
            }
        }

        let mut interface_names: Vec<(&'s str, usize)> =
            interface_usage_counts.into_iter().collect();
        interface_names.sort_by(|(_, a), (_, b)| b.cmp(a));

        interface_names.into_iter()
            .map(|(name, _)| name)
            .chain(object_type_names)
            .collect()
    }
}
impl<'a> Rule<'a> for FieldsOnCorrectType {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a ast::operation::Field,
    ) {
        let Some(parent_type) = ctx.parent_type() else {
            return;
        };
        if ctx.current_field().is_some() {
            return;
        }

        let schema = ctx.schema();
        let field_name = field.name.as_str();
        let suggested_types = Self::suggested_type_names(schema, parent_type, field_name);
        let suggestion_text = if !suggested_types.is_empty() {
            format!(
                " Did you mean to use an inline fragment on {}?",
                suggestion::quoted_or_list(&suggested_types),
            )
        } else {
            let field_names = parent_type.fields()
                .map(|fields| fields.keys().map(String::as_str).collect::<Vec<_>>())
                .unwrap_or_default();
            suggestion::did_you_mean(&suggestion::suggestion_list(field_name, field_names))
        };

        ctx.report(
            ValidationRule::FieldsOnCorrectType,
            format!(
                "Cannot query field \"{field_name}\" on type \"{}\".{suggestion_text}",
                parent_type.name(),
            ),
            vec![AstNodeRef::new(AstNodeKind::Field, field.position)],
        );
    }
}
