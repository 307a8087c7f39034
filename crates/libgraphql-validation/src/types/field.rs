use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::OnceLock;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation: DeprecationState,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub(crate) fn from_ast(file_path: &Path, field: &ast::schema::Field) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(
                Some(file_path),
                field.position,
            ).into(),
            deprecation: DeprecationState::from(field.directives.as_slice()),
            name: field.name.to_owned(),
            parameters: field.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// The implicit `__typename: String!` meta-field available on every
    /// object, interface, and union type.
    pub fn typename_meta_field() -> &'static Field {
        static TYPENAME: OnceLock<Field> = OnceLock::new();
        TYPENAME.get_or_init(|| Field {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            deprecation: DeprecationState::NotDeprecated,
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            type_annotation: TypeAnnotation::named("String", false),
        })
    }
}
