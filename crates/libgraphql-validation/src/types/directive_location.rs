use crate::ast;

/// The positions within a document (or schema) at which a directive may be
/// legally applied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    ArgumentDefinition,
    Enum,
    EnumValue,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputFieldDefinition,
    InputObject,
    Interface,
    Mutation,
    Object,
    Query,
    Scalar,
    Schema,
    Subscription,
    Union,
    VariableDefinition,
}
impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }

    /// Whether this location appears in executable documents (as opposed to
    /// type-system documents).
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Self::Field
                | Self::FragmentDefinition
                | Self::FragmentSpread
                | Self::InlineFragment
                | Self::Mutation
                | Self::Query
                | Self::Subscription
                | Self::VariableDefinition
        )
    }
}
impl std::convert::From<&ast::schema::DirectiveLocation> for DirectiveLocation {
    fn from(value: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as AstLoc;
        match value {
            AstLoc::ArgumentDefinition => Self::ArgumentDefinition,
            AstLoc::Enum => Self::Enum,
            AstLoc::EnumValue => Self::EnumValue,
            AstLoc::Field => Self::Field,
            AstLoc::FieldDefinition => Self::FieldDefinition,
            AstLoc::FragmentDefinition => Self::FragmentDefinition,
            AstLoc::FragmentSpread => Self::FragmentSpread,
            AstLoc::InlineFragment => Self::InlineFragment,
            AstLoc::InputFieldDefinition => Self::InputFieldDefinition,
            AstLoc::InputObject => Self::InputObject,
            AstLoc::Interface => Self::Interface,
            AstLoc::Mutation => Self::Mutation,
            AstLoc::Object => Self::Object,
            AstLoc::Query => Self::Query,
            AstLoc::Scalar => Self::Scalar,
            AstLoc::Schema => Self::Schema,
            AstLoc::Subscription => Self::Subscription,
            AstLoc::Union => Self::Union,
            AstLoc::VariableDefinition => Self::VariableDefinition,
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
