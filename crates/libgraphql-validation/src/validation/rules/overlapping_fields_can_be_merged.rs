use crate::ast;
use crate::schema::SchemaView;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;
use crate::value::print_value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;

/// A selected field together with its definition and the type it was
/// selected from.
#[derive(Clone, Copy, Debug)]
struct FieldAndDef<'a> {
    field: &'a ast::operation::Field,
    field_def: Option<&'a Field>,
    parent_type: Option<&'a GraphQLType>,
}

/// Response name → every field selected under that name.
type FieldMap<'a> = IndexMap<&'a str, Vec<FieldAndDef<'a>>>;

/// The fields of one selection set (inline fragments flattened in) and
/// the names of the fragments it spreads directly.
#[derive(Debug)]
struct FieldsAndFragmentNames<'a> {
    field_map: FieldMap<'a>,
    fragment_names: Vec<&'a str>,
}

#[derive(Debug)]
enum ConflictReason {
    Message(String),
    Subfields(Vec<(String, ConflictReason)>),
}
impl ConflictReason {
    fn message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Subfields(subreasons) => subreasons.iter()
                .map(|(response_name, reason)| format!(
                    "subfields \"{response_name}\" conflict because {}",
                    reason.message(),
                ))
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

#[derive(Debug)]
struct Conflict<'a> {
    fields1: Vec<&'a ast::operation::Field>,
    fields2: Vec<&'a ast::operation::Field>,
    reason: ConflictReason,
    response_name: &'a str,
}
impl<'a> Conflict<'a> {
    fn between(
        response_name: &'a str,
        reason: String,
        field1: &'a ast::operation::Field,
        field2: &'a ast::operation::Field,
    ) -> Self {
        Self {
            fields1: vec![field1],
            fields2: vec![field2],
            reason: ConflictReason::Message(reason),
            response_name,
        }
    }
}

/// Fragment pairs already compared, keyed in both orders. A pair compared
/// as mutually exclusive does not cover a later non-exclusive comparison
/// of the same pair.
#[derive(Debug, Default)]
struct PairSet<'a> {
    data: HashMap<(&'a str, &'a str), bool>,
}
impl<'a> PairSet<'a> {
    fn contains(&self, a: &'a str, b: &'a str, mutually_exclusive: bool) -> bool {
        match self.data.get(&(a, b)) {
            None => false,
            Some(stored) if !mutually_exclusive => !*stored,
            Some(_) => true,
        }
    }

    fn insert(&mut self, a: &'a str, b: &'a str, mutually_exclusive: bool) {
        self.data.insert((a, b), mutually_exclusive);
        self.data.insert((b, a), mutually_exclusive);
    }
}

/// Whether two return types can never be merged: their list/non-null
/// shapes differ, or they end in different leaf types.
fn do_types_conflict(
    schema: &dyn SchemaView,
    type1: &TypeAnnotation,
    type2: &TypeAnnotation,
) -> bool {
    if type1.nullable() != type2.nullable() {
        return true;
    }
    match (type1, type2) {
        (TypeAnnotation::List(list1), TypeAnnotation::List(list2))
            => do_types_conflict(
                schema,
                list1.inner_type_annotation(),
                list2.inner_type_annotation(),
            ),

        (TypeAnnotation::List(_), _) | (_, TypeAnnotation::List(_))
            => true,

        (TypeAnnotation::Named(named1), TypeAnnotation::Named(named2)) => {
            let is_leaf = |name: &str| {
                schema.type_by_name(name).is_some_and(|t| t.is_leaf())
            };
            let name1 = named1.graphql_type_name();
            let name2 = named2.graphql_type_name();
            (is_leaf(name1) || is_leaf(name2)) && name1 != name2
        },
    }
}

fn same_arguments(
    arguments1: &[(String, ast::operation::Value)],
    arguments2: &[(String, ast::operation::Value)],
) -> bool {
    arguments1.len() == arguments2.len()
        && arguments1.iter().all(|(name1, value1)| {
            arguments2.iter()
                .find(|(name2, _)| name2 == name1)
                .is_some_and(|(_, value2)| print_value(value1) == print_value(value2))
        })
}

fn collect_fields_and_fragment_names<'a>(
    ctx: &ValidationContext<'a>,
    parent_type: Option<&'a GraphQLType>,
    selection_set: &'a ast::operation::SelectionSet,
    field_map: &mut FieldMap<'a>,
    fragment_names: &mut Vec<&'a str>,
) {
    use ast::operation::Selection;
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                let response_name = field.alias.as_deref().unwrap_or(field.name.as_str());
                field_map.entry(response_name).or_default().push(FieldAndDef {
                    field,
                    field_def: ctx.field_definition(parent_type, &field.name),
                    parent_type,
                });
            },

            Selection::FragmentSpread(spread) => {
                let name = spread.fragment_name.as_str();
                if !fragment_names.contains(&name) {
                    fragment_names.push(name);
                }
            },

            Selection::InlineFragment(inline_fragment) => {
                let fragment_type = match &inline_fragment.type_condition {
                    Some(ast::operation::TypeCondition::On(type_name))
                        => ctx.schema().type_by_name(type_name),
                    None => parent_type,
                };
                collect_fields_and_fragment_names(
                    ctx,
                    fragment_type,
                    &inline_fragment.selection_set,
                    field_map,
                    fragment_names,
                );
            },
        }
    }
}

/// Two fields selected under the same response name must resolve to the
/// same thing: same field, same arguments, and mergeable return types
/// (recursively through their sub-selections and any spread fragments).
///
/// Fields whose parent types are distinct object types can never be
/// selected for the same object, so only their return types are compared.
#[derive(Debug, Default)]
pub struct OverlappingFieldsCanBeMerged<'a> {
    cached_fields_and_fragment_names:
        HashMap<*const ast::operation::SelectionSet, Rc<FieldsAndFragmentNames<'a>>>,
    compared_fragment_pairs: PairSet<'a>,
}
impl<'a> OverlappingFieldsCanBeMerged<'a> {
    fn collect_conflicts_between(
        &mut self,
        ctx: &ValidationContext<'a>,
        conflicts: &mut Vec<Conflict<'a>>,
        parent_fields_are_mutually_exclusive: bool,
        field_map1: &FieldMap<'a>,
        field_map2: &FieldMap<'a>,
    ) {
        for (&response_name, fields1) in field_map1 {
            let Some(fields2) = field_map2.get(response_name) else {
                continue;
            };
            for field1 in fields1 {
                for field2 in fields2 {
                    if let Some(conflict) = self.find_conflict(
                        ctx,
                        parent_fields_are_mutually_exclusive,
                        response_name,
                        *field1,
                        *field2,
                    ) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn collect_conflicts_between_fields_and_fragment(
        &mut self,
        ctx: &ValidationContext<'a>,
        conflicts: &mut Vec<Conflict<'a>>,
        compared_fragments: &mut HashSet<&'a str>,
        are_mutually_exclusive: bool,
        fields: &Rc<FieldsAndFragmentNames<'a>>,
        fragment_name: &'a str,
    ) {
        if !compared_fragments.insert(fragment_name) {
            return;
        }
        let Some(fragment) = ctx.fragment(fragment_name) else {
            return;
        };
        let referenced = self.referenced_fields_and_fragment_names(ctx, fragment);
        if Rc::ptr_eq(fields, &referenced) {
            return;
        }

        self.collect_conflicts_between(
            ctx,
            conflicts,
            are_mutually_exclusive,
            &fields.field_map,
            &referenced.field_map,
        );
        for &referenced_name in &referenced.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                ctx,
                conflicts,
                compared_fragments,
                are_mutually_exclusive,
                fields,
                referenced_name,
            );
        }
    }

    fn collect_conflicts_between_fragments(
        &mut self,
        ctx: &ValidationContext<'a>,
        conflicts: &mut Vec<Conflict<'a>>,
        are_mutually_exclusive: bool,
        fragment_name1: &'a str,
        fragment_name2: &'a str,
    ) {
        if fragment_name1 == fragment_name2 {
            return;
        }
        if self.compared_fragment_pairs.contains(fragment_name1, fragment_name2, are_mutually_exclusive) {
            return;
        }
        self.compared_fragment_pairs.insert(fragment_name1, fragment_name2, are_mutually_exclusive);

        let (Some(fragment1), Some(fragment2)) = (
            ctx.fragment(fragment_name1),
            ctx.fragment(fragment_name2),
        ) else {
            return;
        };
        let referenced1 = self.referenced_fields_and_fragment_names(ctx, fragment1);
        let referenced2 = self.referenced_fields_and_fragment_names(ctx, fragment2);

        self.collect_conflicts_between(
            ctx,
            conflicts,
            are_mutually_exclusive,
            &referenced1.field_map,
            &referenced2.field_map,
        );
        for &name2 in &referenced2.fragment_names {
            self.collect_conflicts_between_fragments(
                ctx,
                conflicts,
                are_mutually_exclusive,
                fragment_name1,
                name2,
            );
        }
        for &name1 in &referenced1.fragment_names {
            self.collect_conflicts_between_fragments(
                ctx,
                conflicts,
                are_mutually_exclusive,
                name1,
                fragment_name2,
            );
        }
    }

    fn collect_conflicts_within(
        &mut self,
        ctx: &ValidationContext<'a>,
        conflicts: &mut Vec<Conflict<'a>>,
        field_map: &FieldMap<'a>,
    ) {
        for (&response_name, fields) in field_map {
            for (i, field1) in fields.iter().enumerate() {
                for field2 in &fields[i + 1..] {
                    if let Some(conflict) = self.find_conflict(
                        ctx,
                        false,
                        response_name,
                        *field1,
                        *field2,
                    ) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn fields_and_fragment_names(
        &mut self,
        ctx: &ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::operation::SelectionSet,
    ) -> Rc<FieldsAndFragmentNames<'a>> {
        let key = selection_set as *const ast::operation::SelectionSet;
        if let Some(cached) = self.cached_fields_and_fragment_names.get(&key) {
            return Rc::clone(cached);
        }

        let mut field_map = FieldMap::new();
        let mut fragment_names = vec![];
        collect_fields_and_fragment_names(
            ctx,
            parent_type,
            selection_set,
            &mut field_map,
            &mut fragment_names,
        );
        let fields = Rc::new(FieldsAndFragmentNames {
            field_map,
            fragment_names,
        });
        self.cached_fields_and_fragment_names.insert(key, Rc::clone(&fields));
        fields
    }

    fn find_conflict(
        &mut self,
        ctx: &ValidationContext<'a>,
        parent_fields_are_mutually_exclusive: bool,
        response_name: &'a str,
        field1: FieldAndDef<'a>,
        field2: FieldAndDef<'a>,
    ) -> Option<Conflict<'a>> {
        let schema = ctx.schema();
        let are_mutually_exclusive = parent_fields_are_mutually_exclusive
            || match (field1.parent_type, field2.parent_type) {
                (Some(parent1), Some(parent2))
                    => parent1.name() != parent2.name()
                        && parent1.as_object().is_some()
                        && parent2.as_object().is_some(),
                _ => false,
            };

        let node1 = field1.field;
        let node2 = field2.field;
        if !are_mutually_exclusive {
            if node1.name != node2.name {
                return Some(Conflict::between(
                    response_name,
                    format!("\"{}\" and \"{}\" are different fields", node1.name, node2.name),
                    node1,
                    node2,
                ));
            }
            if !same_arguments(&node1.arguments, &node2.arguments) {
                return Some(Conflict::between(
                    response_name,
                    "they have differing arguments".to_string(),
                    node1,
                    node2,
                ));
            }
        }

        let type1 = field1.field_def.map(|def| def.type_annotation());
        let type2 = field2.field_def.map(|def| def.type_annotation());
        if let (Some(type1), Some(type2)) = (type1, type2)
            && do_types_conflict(schema, type1, type2) {
            return Some(Conflict::between(
                response_name,
                format!("they return conflicting types {type1} and {type2}"),
                node1,
                node2,
            ));
        }

        if node1.selection_set.items.is_empty() || node2.selection_set.items.is_empty() {
            return None;
        }
        let named_type1 = type1.and_then(|t| schema.type_by_name(t.innermost_type_name()));
        let named_type2 = type2.and_then(|t| schema.type_by_name(t.innermost_type_name()));
        let subconflicts = self.find_conflicts_between_sub_selection_sets(
            ctx,
            are_mutually_exclusive,
            named_type1,
            &node1.selection_set,
            named_type2,
            &node2.selection_set,
        );
        if subconflicts.is_empty() {
            return None;
        }

        let mut fields1 = vec![node1];
        let mut fields2 = vec![node2];
        let mut subreasons = vec![];
        for subconflict in subconflicts {
            fields1.extend(subconflict.fields1);
            fields2.extend(subconflict.fields2);
            subreasons.push((subconflict.response_name.to_string(), subconflict.reason));
        }
        Some(Conflict {
            fields1,
            fields2,
            reason: ConflictReason::Subfields(subreasons),
            response_name,
        })
    }

    fn find_conflicts_between_sub_selection_sets(
        &mut self,
        ctx: &ValidationContext<'a>,
        are_mutually_exclusive: bool,
        parent_type1: Option<&'a GraphQLType>,
        selection_set1: &'a ast::operation::SelectionSet,
        parent_type2: Option<&'a GraphQLType>,
        selection_set2: &'a ast::operation::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let fields1 = self.fields_and_fragment_names(ctx, parent_type1, selection_set1);
        let fields2 = self.fields_and_fragment_names(ctx, parent_type2, selection_set2);

        self.collect_conflicts_between(
            ctx,
            &mut conflicts,
            are_mutually_exclusive,
            &fields1.field_map,
            &fields2.field_map,
        );

        let mut compared_fragments = HashSet::new();
        for &fragment_name in &fields2.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                ctx,
                &mut conflicts,
                &mut compared_fragments,
                are_mutually_exclusive,
                &fields1,
                fragment_name,
            );
        }

        let mut compared_fragments = HashSet::new();
        for &fragment_name in &fields1.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                ctx,
                &mut conflicts,
                &mut compared_fragments,
                are_mutually_exclusive,
                &fields2,
                fragment_name,
            );
        }

        for &fragment_name1 in &fields1.fragment_names {
            for &fragment_name2 in &fields2.fragment_names {
                self.collect_conflicts_between_fragments(
                    ctx,
                    &mut conflicts,
                    are_mutually_exclusive,
                    fragment_name1,
                    fragment_name2,
                );
            }
        }

        conflicts
    }

    fn find_conflicts_within_selection_set(
        &mut self,
        ctx: &ValidationContext<'a>,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::operation::SelectionSet,
    ) -> Vec<Conflict<'a>> {
        let mut conflicts = vec![];
        let fields = self.fields_and_fragment_names(ctx, parent_type, selection_set);

        self.collect_conflicts_within(ctx, &mut conflicts, &fields.field_map);

        let mut compared_fragments = HashSet::new();
        for (i, &fragment_name) in fields.fragment_names.iter().enumerate() {
            self.collect_conflicts_between_fields_and_fragment(
                ctx,
                &mut conflicts,
                &mut compared_fragments,
                false,
                &fields,
                fragment_name,
            );
            for &other_fragment_name in &fields.fragment_names[i + 1..] {
                self.collect_conflicts_between_fragments(
                    ctx,
                    &mut conflicts,
                    false,
                    fragment_name,
                    other_fragment_name,
                );
            }
        }

        conflicts
    }

    fn referenced_fields_and_fragment_names(
        &mut self,
        ctx: &ValidationContext<'a>,
        fragment: &'a ast::operation::FragmentDefinition,
    ) -> Rc<FieldsAndFragmentNames<'a>> {
        let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
        let fragment_type = ctx.schema().type_by_name(type_name);
        self.fields_and_fragment_names(ctx, fragment_type, &fragment.selection_set)
    }
}
impl<'a> Rule<'a> for OverlappingFieldsCanBeMerged<'a> {
    fn enter_selection_set(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        selection_set: &'a ast::operation::SelectionSet,
    ) {
        let conflicts = self.find_conflicts_within_selection_set(
            ctx,
            ctx.parent_type(),
            selection_set,
        );
        for conflict in conflicts {
            let nodes = conflict.fields1.iter()
                .chain(conflict.fields2.iter())
                .map(|field| AstNodeRef::new(AstNodeKind::Field, field.position))
                .collect();
            ctx.report(
                ValidationRule::OverlappingFieldsCanBeMerged,
                format!(
                    "Fields \"{}\" conflict because {}. Use different aliases on the fields \
                    to fetch both if this was intentional.",
                    conflict.response_name,
                    conflict.reason.message(),
                ),
                nodes,
            );
        }
    }
}
