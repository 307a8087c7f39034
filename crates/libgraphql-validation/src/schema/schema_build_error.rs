use crate::file_reader;
use crate::loc;
use crate::schema::GraphQLOperationType;
use crate::schema::NamedTypeDefLocation;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::FilePosition,
        value_def2: loc::FilePosition,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::FilePosition,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("Multiple {operation:?} root operation types were defined")]
    DuplicateOperationDefinition {
        operation: GraphQLOperationType,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::FilePosition,
    },

    #[error("The `{type_name}` enum must define one or more values")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::FilePosition,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::FilePosition,
    },

    #[error(
        "`{type_name}` is defined as `{existing_kind}` but is extended with \
        `extend {extension_kind}`"
    )]
    InvalidExtensionType {
        type_name: String,
        existing_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_location: loc::FilePosition,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::FilePosition,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::FilePosition,
        type_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1:?} and {operation2:?} root operations are both \
        defined with the `{reused_type_name}` type. All root operations must \
        be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: GraphQLOperationType,
        operation2: GraphQLOperationType,
    },

    #[error("Error parsing schema file `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::FilePosition,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Problems with how an otherwise well-formed type definition references
/// other types.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error("`{type_name}` declares that it implements `{interface_name}`, which is not an interface")]
    ImplementsNonInterfaceType {
        def_location: loc::FilePosition,
        interface_name: String,
        type_name: String,
    },

    #[error("`{type_name}.{field_name}` must be an output type, but `{field_type_name}` is an input object")]
    InputTypeUsedAsFieldType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        field_type_name: String,
        type_name: String,
    },

    #[error("`{owner}` argument `{param_name}` must be an input type, but `{param_type_name}` is not")]
    OutputTypeUsedAsInputType {
        def_location: loc::SchemaDefLocation,
        owner: String,
        param_name: String,
        param_type_name: String,
    },

    #[error("The {operation:?} root operation type `{type_name}` must be an object type")]
    RootOperationTypeNotAnObject {
        operation: GraphQLOperationType,
        type_name: String,
    },

    #[error("`{owner}` refers to `{undefined_type_name}`, which is not defined")]
    UndefinedTypeName {
        def_location: loc::SchemaDefLocation,
        owner: String,
        undefined_type_name: String,
    },

    #[error("The `{union_name}` union lists `{member_name}`, which is not an object type")]
    UnionMemberNotAnObject {
        def_location: loc::FilePosition,
        member_name: String,
        union_name: String,
    },
}
