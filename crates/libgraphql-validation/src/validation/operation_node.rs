use crate::ast;
use crate::validation::OperationKind;

/// A uniform view over the four shapes `graphql_parser` uses for an
/// operation definition.
#[derive(Clone, Copy, Debug)]
pub struct OperationNode<'a> {
    pub directives: &'a [ast::operation::Directive],
    /// Position of this operation among the document's operations.
    pub index: usize,
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub position: graphql_parser::Pos,
    pub selection_set: &'a ast::operation::SelectionSet,
    pub variable_definitions: &'a [ast::operation::VariableDefinition],
}
impl<'a> OperationNode<'a> {
    pub fn from_ast(
        index: usize,
        def: &'a ast::operation::OperationDefinition,
    ) -> Self {
        use ast::operation::OperationDefinition;
        match def {
            OperationDefinition::Mutation(op) => Self {
                directives: op.directives.as_slice(),
                index,
                kind: OperationKind::Mutation,
                name: op.name.as_deref(),
                position: op.position,
                selection_set: &op.selection_set,
                variable_definitions: op.variable_definitions.as_slice(),
            },

            OperationDefinition::Query(op) => Self {
                directives: op.directives.as_slice(),
                index,
                kind: OperationKind::Query,
                name: op.name.as_deref(),
                position: op.position,
                selection_set: &op.selection_set,
                variable_definitions: op.variable_definitions.as_slice(),
            },

            OperationDefinition::SelectionSet(selection_set) => Self {
                directives: &[],
                index,
                kind: OperationKind::Query,
                name: None,
                position: selection_set.span.0,
                selection_set,
                variable_definitions: &[],
            },

            OperationDefinition::Subscription(op) => Self {
                directives: op.directives.as_slice(),
                index,
                kind: OperationKind::Subscription,
                name: op.name.as_deref(),
                position: op.position,
                selection_set: &op.selection_set,
                variable_definitions: op.variable_definitions.as_slice(),
            },
        }
    }
}
