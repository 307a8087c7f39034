use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(t) = self { Some(t) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    pub fn def_location(&self) -> loc::SchemaDefLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                loc::SchemaDefLocation::GraphQLBuiltIn,
            GraphQLType::Enum(t) => t.def_location.clone().into(),
            GraphQLType::InputObject(t) => t.def_location.clone().into(),
            GraphQLType::Interface(t) => t.def_location.clone().into(),
            GraphQLType::Object(t) => t.def_location.clone().into(),
            GraphQLType::Scalar(t) => t.def_location.clone().into(),
            GraphQLType::Union(t) => t.def_location.clone().into(),
        }
    }

    /// The output fields of this type, if it is an object or interface.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) => Some(&t.fields),
            GraphQLType::Object(t) => Some(&t.fields),
            _ => None,
        }
    }

    /// Names of the interfaces implemented by this type (empty for anything
    /// other than an object or interface).
    pub fn interfaces(&self) -> &[String] {
        match self {
            GraphQLType::Interface(t) => t.interfaces(),
            GraphQLType::Object(t) => t.interfaces(),
            _ => &[],
        }
    }

    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        self.kind().is_abstract()
    }

    /// Types which may carry a selection set.
    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    pub fn is_input_type(&self) -> bool {
        self.kind().is_input()
    }

    /// Scalars and enums: types that terminate a selection.
    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    pub fn is_output_type(&self) -> bool {
        self.kind().is_output()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Int => "Int",
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::String => "String",
            GraphQLType::Union(t) => t.name(),
        }
    }
}
