use crate::ast;
use crate::schema::SchemaView;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::OperationKind;
use crate::validation::OperationNode;
use crate::validation::VariableUsage;
use crate::validation::validation_context::field_definition;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Gathers every variable reference reachable from one operation, following
/// fragment spreads (each fragment at most once).
pub struct VariableUsageCollector<'f, 'a> {
    fragments: &'f IndexMap<&'a str, &'a ast::operation::FragmentDefinition>,
    schema: &'a dyn SchemaView,
    usages: Vec<VariableUsage<'a>>,
    visited_fragments: HashSet<&'a str>,
}
impl<'f, 'a> VariableUsageCollector<'f, 'a> {
    pub fn collect(
        schema: &'a dyn SchemaView,
        fragments: &'f IndexMap<&'a str, &'a ast::operation::FragmentDefinition>,
        operation: &OperationNode<'a>,
    ) -> Vec<VariableUsage<'a>> {
        let mut collector = Self {
            fragments,
            schema,
            usages: vec![],
            visited_fragments: HashSet::new(),
        };

        collector.visit_directives(operation.directives);
        let root_type = match operation.kind {
            OperationKind::Mutation => schema.mutation_type(),
            OperationKind::Query => schema.query_type(),
            OperationKind::Subscription => schema.subscription_type(),
        };
        collector.visit_selection_set(root_type, operation.selection_set);
        collector.usages
    }

    fn visit_directives(&mut self, directives: &'a [ast::operation::Directive]) {
        for directive in directives {
            let directive_def = self.schema.directive_by_name(&directive.name);
            for (arg_name, arg_value) in &directive.arguments {
                let expected = directive_def
                    .and_then(|def| def.parameter(arg_name))
                    .map(|param| param.type_annotation());
                self.visit_value(
                    arg_value,
                    expected,
                    AstNodeRef::new(AstNodeKind::Variable, directive.position),
                );
            }
        }
    }

    fn visit_selection_set(
        &mut self,
        parent_type: Option<&'a GraphQLType>,
        selection_set: &'a ast::operation::SelectionSet,
    ) {
        use ast::operation::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let field_def = field_definition(self.schema, parent_type, &field.name);
                    for (arg_name, arg_value) in &field.arguments {
                        let expected = field_def
                            .and_then(|def| def.parameter(arg_name))
                            .map(|param| param.type_annotation());
                        self.visit_value(
                            arg_value,
                            expected,
                            AstNodeRef::new(AstNodeKind::Variable, field.position),
                        );
                    }
                    self.visit_directives(&field.directives);
                    let field_type = field_def.and_then(|def| {
                        self.schema.type_by_name(def.type_annotation().innermost_type_name())
                    });
                    self.visit_selection_set(field_type, &field.selection_set);
                },

                Selection::FragmentSpread(spread) => {
                    self.visit_directives(&spread.directives);
                    if !self.visited_fragments.insert(spread.fragment_name.as_str()) {
                        continue;
                    }
                    if let Some(&fragment) = self.fragments.get(spread.fragment_name.as_str()) {
                        let ast::operation::TypeCondition::On(type_name) = &fragment.type_condition;
                        self.visit_directives(&fragment.directives);
                        self.visit_selection_set(
                            self.schema.type_by_name(type_name),
                            &fragment.selection_set,
                        );
                    }
                },

                Selection::InlineFragment(inline_fragment) => {
                    self.visit_directives(&inline_fragment.directives);
                    let fragment_type = match &inline_fragment.type_condition {
                        Some(ast::operation::TypeCondition::On(type_name))
                            => self.schema.type_by_name(type_name),
                        None => parent_type,
                    };
                    self.visit_selection_set(fragment_type, &inline_fragment.selection_set);
                },
            }
        }
    }

    fn visit_value(
        &mut self,
        value: &'a ast::operation::Value,
        expected_type: Option<&'a TypeAnnotation>,
        node: AstNodeRef,
    ) {
        use ast::operation::Value;
        match value {
            Value::Variable(name) => self.usages.push(VariableUsage {
                expected_type,
                name: name.as_str(),
                node,
            }),

            Value::List(items) => {
                // A non-list type given a list literal still constrains each
                // item to that same type.
                let item_type = expected_type.map(|t| t.list_item_type().unwrap_or(t));
                for item in items {
                    self.visit_value(item, item_type, node.clone());
                }
            },

            Value::Object(fields) => {
                let input_obj = expected_type
                    .and_then(|t| self.schema.type_by_name(t.innermost_type_name()))
                    .and_then(|t| t.as_input_object());
                for (field_name, field_value) in fields {
                    let field_type = input_obj
                        .and_then(|obj| obj.field(field_name))
                        .map(|field| field.type_annotation());
                    self.visit_value(field_value, field_type, node.clone());
                }
            },

            Value::Boolean(_)
                | Value::Enum(_)
                | Value::Float(_)
                | Value::Int(_)
                | Value::Null
                | Value::String(_) => (),
        }
    }
}
