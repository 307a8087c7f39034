use crate::types::DirectiveLocation;
use crate::validation::OperationKind;

/// The kinds of executable-document node the walker visits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum AstNodeKind {
    Argument,
    Directive,
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Operation(OperationKind),
    SelectionSet,
    TypeCondition,
    Value,
    Variable,
    VariableDefinition,
}
impl AstNodeKind {
    /// The location a directive attached directly to a node of this kind is
    /// applied at, or `None` for kinds that cannot carry directives.
    pub fn directive_location(&self) -> Option<DirectiveLocation> {
        match self {
            Self::Field => Some(DirectiveLocation::Field),
            Self::FragmentDefinition => Some(DirectiveLocation::FragmentDefinition),
            Self::FragmentSpread => Some(DirectiveLocation::FragmentSpread),
            Self::InlineFragment => Some(DirectiveLocation::InlineFragment),
            Self::Operation(OperationKind::Mutation) => Some(DirectiveLocation::Mutation),
            Self::Operation(OperationKind::Query) => Some(DirectiveLocation::Query),
            Self::Operation(OperationKind::Subscription) => Some(DirectiveLocation::Subscription),
            Self::VariableDefinition => Some(DirectiveLocation::VariableDefinition),
            Self::Argument
                | Self::Directive
                | Self::Document
                | Self::SelectionSet
                | Self::TypeCondition
                | Self::Value
                | Self::Variable => None,
        }
    }
}
