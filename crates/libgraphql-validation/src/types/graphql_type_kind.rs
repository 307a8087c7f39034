use crate::types::GraphQLType;

/// The category of a [`GraphQLType`], which decides where in a document the
/// type may appear. Built-in scalars are [`GraphQLTypeKind::Scalar`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// Interfaces and unions: resolved to one of several object types.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    /// Kinds which may carry a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    /// Scalars and enums: kinds that terminate a selection.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar)
    }

    pub fn is_output(&self) -> bool {
        !matches!(self, Self::InputObject)
    }

    /// The keyword that introduces a definition of this kind in SDL.
    pub fn sdl_keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sdl_keyword())
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => Self::Scalar,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
