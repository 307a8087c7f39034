use crate::ast;
use crate::schema::SchemaView;
use crate::types::DirectiveDefinition;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Diagnostic;
use crate::validation::OperationNode;
use crate::validation::ValidationRule;
use crate::validation::VariableUsage;
use crate::validation::VariableUsageCollector;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::rc::Rc;

/// Resolves `field_name` on `parent_type`, including the `__typename`
/// meta-field available on every composite type.
pub(crate) fn field_definition<'a>(
    schema: &'a dyn SchemaView,
    parent_type: Option<&'a GraphQLType>,
    field_name: &str,
) -> Option<&'a Field> {
    let parent_type = parent_type?;
    if field_name == "__typename" && parent_type.is_composite() {
        return Some(Field::typename_meta_field());
    }
    schema.field_of(parent_type.name(), field_name)
}

/// Per-run state shared by the [`AstWalker`](crate::validation::AstWalker)
/// and every [`Rule`](crate::validation::Rule) hook.
///
/// The type-scope stacks are maintained by the walker as it enters and
/// leaves nodes; rules only read them. Diagnostics are appended through
/// [`ValidationContext::report`].
pub struct ValidationContext<'a> {
    ancestors: Vec<AstNodeKind>,
    argument: Option<&'a Parameter>,
    diagnostics: Vec<Diagnostic>,
    directive: Option<&'a DirectiveDefinition>,
    document: &'a ast::operation::Document,
    field_stack: Vec<Option<&'a Field>>,
    fragments: IndexMap<&'a str, &'a ast::operation::FragmentDefinition>,
    operations: Vec<OperationNode<'a>>,
    parent_type_stack: Vec<Option<&'a GraphQLType>>,
    schema: &'a dyn SchemaView,
    type_stack: Vec<Option<&'a GraphQLType>>,
    variable_usages: HashMap<usize, Rc<Vec<VariableUsage<'a>>>>,
}
impl<'a> ValidationContext<'a> {
    pub fn new(
        schema: &'a dyn SchemaView,
        document: &'a ast::operation::Document,
    ) -> Self {
        use ast::operation::Definition;

        let mut fragments = IndexMap::new();
        let mut operations = vec![];
        for def in &document.definitions {
            match def {
                Definition::Fragment(fragment) => {
                    fragments.entry(fragment.name.as_str()).or_insert(fragment);
                },
                Definition::Operation(op) => {
                    operations.push(OperationNode::from_ast(operations.len(), op));
                },
            }
        }

        Self {
            ancestors: vec![],
            argument: None,
            diagnostics: vec![],
            directive: None,
            document,
            field_stack: vec![],
            fragments,
            operations,
            parent_type_stack: vec![],
            schema,
            type_stack: vec![],
            variable_usages: HashMap::new(),
        }
    }

    /// Kinds of the nodes currently being visited, outermost first. The
    /// last entry is the node whose hook is running.
    pub fn ancestors(&self) -> &[AstNodeKind] {
        self.ancestors.as_slice()
    }

    /// The definition of the argument currently being visited, if it is
    /// known.
    pub fn current_argument(&self) -> Option<&'a Parameter> {
        self.argument
    }

    /// The definition of the directive currently being visited, if it is
    /// known.
    pub fn current_directive(&self) -> Option<&'a DirectiveDefinition> {
        self.directive
    }

    /// The definition of the innermost field being visited.
    pub fn current_field(&self) -> Option<&'a Field> {
        self.field_stack.last().copied().flatten()
    }

    /// The (unwrapped) type of the innermost field, fragment, or operation
    /// being visited.
    pub fn current_type(&self) -> Option<&'a GraphQLType> {
        self.type_stack.last().copied().flatten()
    }

    /// The directive location implied by the node that owns the directive
    /// list currently being visited.
    ///
    /// # Panics
    ///
    /// Panics if that node's kind has no directive location, which means
    /// the walker was asked to visit directives somewhere they cannot be
    /// parsed.
    pub fn directive_location(&self) -> DirectiveLocation {
        let owner = self.ancestors.iter()
            .rev()
            .find(|kind| **kind != AstNodeKind::Directive);
        match owner.and_then(|kind| kind.directive_location()) {
            Some(location) => location,
            None => panic!(
                "No directive location is defined for directives on {owner:?} nodes",
            ),
        }
    }

    pub fn document(&self) -> &'a ast::operation::Document {
        self.document
    }

    /// Looks up a fragment definition by name. When a name is defined more
    /// than once, the first definition wins.
    pub fn fragment(&self, name: &str) -> Option<&'a ast::operation::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub fn fragments(&self) -> &IndexMap<&'a str, &'a ast::operation::FragmentDefinition> {
        &self.fragments
    }

    /// Every fragment spread within `selection_set`, looking through fields
    /// and inline fragments but not into the spread fragments themselves.
    pub fn fragment_spreads(
        &self,
        selection_set: &'a ast::operation::SelectionSet,
    ) -> Vec<&'a ast::operation::FragmentSpread> {
        use ast::operation::Selection;
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.items {
                match selection {
                    Selection::Field(field) => sets_to_visit.push(&field.selection_set),
                    Selection::FragmentSpread(spread) => spreads.push(spread),
                    Selection::InlineFragment(inline_fragment)
                        => sets_to_visit.push(&inline_fragment.selection_set),
                }
            }
        }
        spreads
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn operations(&self) -> &[OperationNode<'a>] {
        self.operations.as_slice()
    }

    /// The composite type whose selection set is currently being visited.
    pub fn parent_type(&self) -> Option<&'a GraphQLType> {
        self.parent_type_stack.last().copied().flatten()
    }

    pub fn report(
        &mut self,
        rule: ValidationRule,
        message: impl Into<String>,
        nodes: Vec<AstNodeRef>,
    ) {
        let message = message.into();
        log::trace!("{rule}: {message}");
        self.diagnostics.push(Diagnostic {
            rule,
            message,
            nodes,
        });
    }

    pub fn schema(&self) -> &'a dyn SchemaView {
        self.schema
    }

    /// Resolves `field_name` on `parent_type` (see [`Self::parent_type`]).
    pub fn field_definition(
        &self,
        parent_type: Option<&'a GraphQLType>,
        field_name: &str,
    ) -> Option<&'a Field> {
        field_definition(self.schema, parent_type, field_name)
    }

    /// Every variable usage reachable from `operation`, computed once per
    /// operation and shared by all rules that ask for it.
    pub fn variable_usages(
        &mut self,
        operation: &OperationNode<'a>,
    ) -> Rc<Vec<VariableUsage<'a>>> {
        if let Some(usages) = self.variable_usages.get(&operation.index) {
            return Rc::clone(usages);
        }
        let usages = Rc::new(VariableUsageCollector::collect(
            self.schema,
            &self.fragments,
            operation,
        ));
        self.variable_usages.insert(operation.index, Rc::clone(&usages));
        usages
    }

    pub(super) fn enter_node(&mut self, kind: AstNodeKind) {
        self.ancestors.push(kind);
    }

    pub(super) fn exit_node(&mut self) {
        self.ancestors.pop();
    }

    pub(super) fn push_field(&mut self, field: Option<&'a Field>) {
        self.field_stack.push(field);
    }

    pub(super) fn pop_field(&mut self) {
        self.field_stack.pop();
    }

    pub(super) fn push_parent_type(&mut self, parent_type: Option<&'a GraphQLType>) {
        self.parent_type_stack.push(parent_type);
    }

    pub(super) fn pop_parent_type(&mut self) {
        self.parent_type_stack.pop();
    }

    pub(super) fn push_type(&mut self, graphql_type: Option<&'a GraphQLType>) {
        self.type_stack.push(graphql_type);
    }

    pub(super) fn pop_type(&mut self) {
        self.type_stack.pop();
    }

    pub(super) fn set_argument(&mut self, argument: Option<&'a Parameter>) {
        self.argument = argument;
    }

    pub(super) fn set_directive(&mut self, directive: Option<&'a DirectiveDefinition>) {
        self.directive = directive;
    }
}
