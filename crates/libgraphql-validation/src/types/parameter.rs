use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument definition on a [`Field`](crate::types::Field) or
/// [`DirectiveDefinition`](crate::types::DirectiveDefinition).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<ast::operation::Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn builtin(
        name: &str,
        type_annotation: TypeAnnotation,
        default_value: Option<ast::operation::Value>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            default_value,
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::operation::Value> {
        self.default_value.as_ref()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(
                Some(file_path),
                input_val.position,
            ).into(),
            default_value: input_val.default_value.clone(),
            name: input_val.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
