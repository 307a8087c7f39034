use crate::ast;
use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined directive, either builtin or declared by the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    /// `@skip`, `@include`, `@deprecated`, and `@specifiedBy`.
    pub fn builtins() -> Vec<DirectiveDefinition> {
        let if_param = || Parameter::builtin(
            "if",
            TypeAnnotation::named("Boolean", false),
            None,
        );
        vec![
            Self::builtin(
                "skip",
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
                vec![if_param()],
            ),
            Self::builtin(
                "include",
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
                vec![if_param()],
            ),
            Self::builtin(
                "deprecated",
                vec![
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::EnumValue,
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::InputFieldDefinition,
                ],
                vec![Parameter::builtin(
                    "reason",
                    TypeAnnotation::named("String", true),
                    Some(ast::operation::Value::String(
                        "No longer supported".to_string(),
                    )),
                )],
            ),
            Self::builtin(
                "specifiedBy",
                vec![DirectiveLocation::Scalar],
                vec![Parameter::builtin(
                    "url",
                    TypeAnnotation::named("String", false),
                    None,
                )],
            ),
        ]
    }

    fn builtin(
        name: &str,
        locations: Vec<DirectiveLocation>,
        params: Vec<Parameter>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            locations,
            name: name.to_string(),
            parameters: params.into_iter()
                .map(|param| (param.name.to_string(), param))
                .collect(),
            repeatable: false,
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        def: &ast::schema::DirectiveDefinition,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(
                Some(file_path),
                def.position,
            ).into(),
            locations: def.locations.iter().map(DirectiveLocation::from).collect(),
            name: def.name.to_owned(),
            parameters: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            repeatable: def.repeatable,
        }
    }

    pub fn is_allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
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
}
