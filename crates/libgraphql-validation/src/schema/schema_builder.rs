use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}

/// Utility for building a [Schema] from one or more SDL documents.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    type_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        // Extensions are applied last so that they may appear before (or in a
        // different file than) the definition they extend.
        for (file_path, ext) in std::mem::take(&mut self.type_extensions) {
            self.visit_ast_type_extension(file_path.as_path(), ext)?;
        }

        let query_type =
            if let Some(def) = self.query_type.take() {
                def.type_name
            } else if let Some(GraphQLType::Object(_)) = self.types.get("Query") {
                "Query".to_string()
            } else {
                return Err(SchemaBuildError::NoQueryOperationTypeDefined);
            };
        let mutation_type = self.mutation_type.take()
            .map(|def| def.type_name)
            .or_else(|| self.default_root_type_name("Mutation"));
        let subscription_type = self.subscription_type.take()
            .map(|def| def.type_name)
            .or_else(|| self.default_root_type_name("Subscription"));

        let mut errors = self.validate_type_references();
        let root_types = [
            (GraphQLOperationType::Query, Some(&query_type)),
            (GraphQLOperationType::Mutation, mutation_type.as_ref()),
            (GraphQLOperationType::Subscription, subscription_type.as_ref()),
        ];
        for (operation, type_name) in root_types {
            let Some(type_name) = type_name else { continue };
            if !matches!(self.types.get(type_name), Some(GraphQLType::Object(_))) {
                errors.push(TypeValidationError::RootOperationTypeNotAnObject {
                    operation,
                    type_name: type_name.to_string(),
                });
            }
        }
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        let possible_types = self.compute_possible_types();
        log::trace!(
            "Built schema with {} types and {} directives",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            possible_types,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        let types = [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ].into_iter()
            .map(|t| (t.name().to_string(), t))
            .collect();

        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_extensions: vec![],
            types,
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        log::trace!("Loading schema definitions from `{}`", file_path.display());
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn add_enum_values(
        file_path: &Path,
        enum_name: &str,
        ast_values: &[ast::schema::EnumValue],
        values: &mut IndexMap<String, EnumValue>,
    ) -> Result<()> {
        for ast_value in ast_values {
            let value = EnumValue::from_ast(file_path, ast_value);
            if let Some(existing) = values.get(value.name()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    value_name: value.name.to_string(),
                    value_def1: existing.def_location.clone(),
                    value_def2: value.def_location,
                });
            }
            values.insert(value.name.to_string(), value);
        }
        Ok(())
    }

    fn add_fields(
        file_path: &Path,
        type_name: &str,
        ast_fields: &[ast::schema::Field],
        fields: &mut IndexMap<String, Field>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field = Field::from_ast(file_path, ast_field);
            if field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field.def_location,
                    field_name: field.name,
                    type_name: type_name.to_string(),
                });
            }
            if let Some(existing) = fields.get(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing.def_location.clone(),
                    field_def2: field.def_location,
                });
            }
            fields.insert(field.name.to_string(), field);
        }
        Ok(())
    }

    fn add_input_fields(
        file_path: &Path,
        type_name: &str,
        ast_fields: &[ast::schema::InputValue],
        fields: &mut IndexMap<String, InputField>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field = InputField::from_ast(file_path, ast_field);
            if let Some(existing) = fields.get(field.name()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing.def_location.clone().into(),
                    field_def2: field.def_location.into(),
                });
            }
            fields.insert(field.name.to_string(), field);
        }
        Ok(())
    }

    fn add_interfaces(
        def_location: &loc::FilePosition,
        type_name: &str,
        ast_interfaces: &[String],
        interfaces: &mut Vec<String>,
    ) -> Result<()> {
        for iface_name in ast_interfaces {
            if interfaces.contains(iface_name) {
                return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    def_location: def_location.clone(),
                    duplicated_interface_name: iface_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            interfaces.push(iface_name.to_string());
        }
        Ok(())
    }

    fn add_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        if let Some(existing) = self.types.get(graphql_type.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: graphql_type.name().to_string(),
                def1: existing.def_location(),
                def2: graphql_type.def_location(),
            });
        }
        self.types.insert(graphql_type.name().to_string(), graphql_type);
        Ok(())
    }

    fn add_union_members(
        def_location: &loc::FilePosition,
        union_name: &str,
        ast_members: &[String],
        members: &mut Vec<String>,
    ) -> Result<()> {
        for member_name in ast_members {
            if members.contains(member_name) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: union_name.to_string(),
                    member_name: member_name.to_string(),
                    location: def_location.clone(),
                });
            }
            members.push(member_name.to_string());
        }
        Ok(())
    }

    fn check_type_name(name: &str, def_location: &loc::FilePosition) -> Result<()> {
        if name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_location.clone(),
                type_name: name.to_string(),
            });
        }
        Ok(())
    }

    fn compute_possible_types(&self) -> IndexMap<String, Vec<String>> {
        let mut possible_types: IndexMap<String, Vec<String>> = IndexMap::new();
        for graphql_type in self.types.values() {
            match graphql_type {
                GraphQLType::Interface(iface) => {
                    possible_types.entry(iface.name.to_string()).or_default();
                },
                GraphQLType::Object(obj) => {
                    for iface_name in obj.interfaces() {
                        possible_types.entry(iface_name.to_string())
                            .or_default()
                            .push(obj.name.to_string());
                    }
                },
                GraphQLType::Union(union_type) => {
                    possible_types.insert(
                        union_type.name.to_string(),
                        union_type.members.clone(),
                    );
                },
                _ => (),
            }
        }
        possible_types
    }

    fn default_root_type_name(&self, name: &str) -> Option<String> {
        match self.types.get(name) {
            Some(GraphQLType::Object(_)) => Some(name.to_string()),
            _ => None,
        }
    }

    fn extension_error(
        &self,
        type_name: &str,
        extension_kind: GraphQLTypeKind,
        extension_location: loc::FilePosition,
    ) -> SchemaBuildError {
        match self.types.get(type_name) {
            Some(existing) => SchemaBuildError::InvalidExtensionType {
                type_name: type_name.to_string(),
                existing_kind: existing.into(),
                extension_kind,
                extension_location,
            },
            None => SchemaBuildError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                extension_location,
            },
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in DirectiveDefinition::builtins() {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    fn validate_type_references(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];

        let check_input_annot = |
            errors: &mut Vec<TypeValidationError>,
            owner: String,
            param_name: &str,
            annot: &TypeAnnotation,
            def_location: loc::SchemaDefLocation,
        | {
            let type_name = annot.innermost_type_name();
            match self.types.get(type_name) {
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    def_location,
                    owner,
                    undefined_type_name: type_name.to_string(),
                }),
                Some(t) if !t.is_input_type() =>
                    errors.push(TypeValidationError::OutputTypeUsedAsInputType {
                        def_location,
                        owner,
                        param_name: param_name.to_string(),
                        param_type_name: type_name.to_string(),
                    }),
                Some(_) => (),
            }
        };

        for graphql_type in self.types.values() {
            if let Some(fields) = graphql_type.fields() {
                for iface_name in graphql_type.interfaces() {
                    match self.types.get(iface_name) {
                        Some(GraphQLType::Interface(_)) => (),
                        Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                            def_location: Self::file_position_of(graphql_type),
                            interface_name: iface_name.to_string(),
                            type_name: graphql_type.name().to_string(),
                        }),
                        None => errors.push(TypeValidationError::UndefinedTypeName {
                            def_location: graphql_type.def_location(),
                            owner: graphql_type.name().to_string(),
                            undefined_type_name: iface_name.to_string(),
                        }),
                    }
                }

                for field in fields.values() {
                    let field_owner = format!("{}.{}", graphql_type.name(), field.name);
                    let field_type_name = field.type_annotation.innermost_type_name();
                    match self.types.get(field_type_name) {
                        None => errors.push(TypeValidationError::UndefinedTypeName {
                            def_location: field.def_location.clone(),
                            owner: field_owner.to_string(),
                            undefined_type_name: field_type_name.to_string(),
                        }),
                        Some(GraphQLType::InputObject(_)) =>
                            errors.push(TypeValidationError::InputTypeUsedAsFieldType {
                                def_location: field.def_location.clone(),
                                field_name: field.name.to_string(),
                                field_type_name: field_type_name.to_string(),
                                type_name: graphql_type.name().to_string(),
                            }),
                        Some(_) => (),
                    }

                    for param in field.parameters.values() {
                        check_input_annot(
                            &mut errors,
                            field_owner.to_string(),
                            param.name(),
                            &param.type_annotation,
                            param.def_location.clone(),
                        );
                    }
                }
            }

            match graphql_type {
                GraphQLType::InputObject(input_obj) => {
                    for field in input_obj.fields.values() {
                        check_input_annot(
                            &mut errors,
                            input_obj.name.to_string(),
                            field.name(),
                            &field.type_annotation,
                            field.def_location.clone().into(),
                        );
                    }
                },
                GraphQLType::Union(union_type) => {
                    for member_name in union_type.members() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(_) => errors.push(TypeValidationError::UnionMemberNotAnObject {
                                def_location: union_type.def_location.clone(),
                                member_name: member_name.to_string(),
                                union_name: union_type.name.to_string(),
                            }),
                            None => errors.push(TypeValidationError::UndefinedTypeName {
                                def_location: union_type.def_location.clone().into(),
                                owner: union_type.name.to_string(),
                                undefined_type_name: member_name.to_string(),
                            }),
                        }
                    }
                },
                _ => (),
            }
        }

        for directive in self.directive_defs.values() {
            for param in directive.parameters.values() {
                check_input_annot(
                    &mut errors,
                    format!("@{}", directive.name),
                    param.name(),
                    &param.type_annotation,
                    param.def_location.clone(),
                );
            }
        }

        errors
    }

    fn file_position_of(graphql_type: &GraphQLType) -> loc::FilePosition {
        match graphql_type.def_location() {
            loc::SchemaDefLocation::Schema(pos) => pos,
            loc::SchemaDefLocation::GraphQLBuiltIn => loc::FilePosition {
                col: 0,
                file: None,
                line: 0,
            },
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.type_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let file_position = loc::FilePosition::from_pos(
            Some(file_path),
            def.position,
        );

        if DirectiveDefinition::builtins().iter().any(|d| d.name == def.name) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location: file_position,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: file_position,
                directive_name: def.name.to_string(),
            });
        }

        if let Some(existing) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing.def_location.clone(),
                location2: file_position.into(),
            });
        }

        self.directive_defs.insert(
            def.name.to_string(),
            DirectiveDefinition::from_ast(file_path, &def),
        );

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_defs = [
            (GraphQLOperationType::Query, &schema_def.query),
            (GraphQLOperationType::Mutation, &schema_def.mutation),
            (GraphQLOperationType::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else { continue };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        // As per spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (GraphQLOperationType::Query, &self.query_type),
            (GraphQLOperationType::Mutation, &self.mutation_type),
            (GraphQLOperationType::Subscription, &self.subscription_type),
        ];
        for (i, (operation1, root1)) in roots.iter().enumerate() {
            for (operation2, root2) in roots.iter().skip(i + 1) {
                if let (Some(root1), Some(root2)) = (root1, root2)
                    && root1.type_name == root2.type_name {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: root1.type_name.to_string(),
                        operation1: *operation1,
                        operation2: *operation2,
                    });
                }
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let graphql_type = match type_def {
            TypeDefinition::Enum(enum_def) => {
                let def_location = loc::FilePosition::from_pos(Some(file_path), enum_def.position);
                Self::check_type_name(&enum_def.name, &def_location)?;
                if enum_def.values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoVariants {
                        type_name: enum_def.name,
                        location: def_location,
                    });
                }
                let mut values = IndexMap::new();
                Self::add_enum_values(file_path, &enum_def.name, &enum_def.values, &mut values)?;
                GraphQLType::Enum(EnumType {
                    def_location,
                    name: enum_def.name,
                    values,
                })
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let def_location = loc::FilePosition::from_pos(Some(file_path), inputobj_def.position);
                Self::check_type_name(&inputobj_def.name, &def_location)?;
                let mut fields = IndexMap::new();
                Self::add_input_fields(file_path, &inputobj_def.name, &inputobj_def.fields, &mut fields)?;
                GraphQLType::InputObject(InputObjectType {
                    def_location,
                    fields,
                    name: inputobj_def.name,
                })
            },

            TypeDefinition::Interface(iface_def) => {
                let def_location = loc::FilePosition::from_pos(Some(file_path), iface_def.position);
                Self::check_type_name(&iface_def.name, &def_location)?;
                let mut fields = IndexMap::new();
                Self::add_fields(file_path, &iface_def.name, &iface_def.fields, &mut fields)?;
                let mut interfaces = vec![];
                Self::add_interfaces(&def_location, &iface_def.name, &iface_def.implements_interfaces, &mut interfaces)?;
                GraphQLType::Interface(InterfaceType {
                    def_location,
                    fields,
                    interfaces,
                    name: iface_def.name,
                })
            },

            TypeDefinition::Object(obj_def) => {
                let def_location = loc::FilePosition::from_pos(Some(file_path), obj_def.position);
                Self::check_type_name(&obj_def.name, &def_location)?;
                let mut fields = IndexMap::new();
                Self::add_fields(file_path, &obj_def.name, &obj_def.fields, &mut fields)?;
                let mut interfaces = vec![];
                Self::add_interfaces(&def_location, &obj_def.name, &obj_def.implements_interfaces, &mut interfaces)?;
                GraphQLType::Object(ObjectType {
                    def_location,
                    fields,
                    interfaces,
                    name: obj_def.name,
                })
            },

            TypeDefinition::Scalar(scalar_def) => {
                let def_location = loc::FilePosition::from_pos(Some(file_path), scalar_def.position);
                Self::check_type_name(&scalar_def.name, &def_location)?;
                GraphQLType::Scalar(ScalarType {
                    def_location,
                    name: scalar_def.name,
                })
            },

            TypeDefinition::Union(union_def) => {
                let def_location = loc::FilePosition::from_pos(Some(file_path), union_def.position);
                Self::check_type_name(&union_def.name, &def_location)?;
                let mut members = vec![];
                Self::add_union_members(&def_location, &union_def.name, &union_def.types, &mut members)?;
                GraphQLType::Union(UnionType {
                    def_location,
                    members,
                    name: union_def.name,
                })
            },
        };

        self.add_type(graphql_type)
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(enum_ext) => {
                let ext_location = loc::FilePosition::from_pos(Some(file_path), enum_ext.position);
                let Some(GraphQLType::Enum(enum_type)) = self.types.get_mut(&enum_ext.name) else {
                    return Err(self.extension_error(&enum_ext.name, GraphQLTypeKind::Enum, ext_location));
                };
                Self::add_enum_values(file_path, &enum_ext.name, &enum_ext.values, &mut enum_type.values)
            },

            TypeExtension::InputObject(inputobj_ext) => {
                let ext_location = loc::FilePosition::from_pos(Some(file_path), inputobj_ext.position);
                let Some(GraphQLType::InputObject(inputobj_type)) = self.types.get_mut(&inputobj_ext.name) else {
                    return Err(self.extension_error(&inputobj_ext.name, GraphQLTypeKind::InputObject, ext_location));
                };
                Self::add_input_fields(file_path, &inputobj_ext.name, &inputobj_ext.fields, &mut inputobj_type.fields)
            },

            TypeExtension::Interface(iface_ext) => {
                let ext_location = loc::FilePosition::from_pos(Some(file_path), iface_ext.position);
                let Some(GraphQLType::Interface(iface_type)) = self.types.get_mut(&iface_ext.name) else {
                    return Err(self.extension_error(&iface_ext.name, GraphQLTypeKind::Interface, ext_location));
                };
                Self::add_fields(file_path, &iface_ext.name, &iface_ext.fields, &mut iface_type.fields)?;
                Self::add_interfaces(&ext_location, &iface_ext.name, &iface_ext.implements_interfaces, &mut iface_type.interfaces)
            },

            TypeExtension::Object(obj_ext) => {
                let ext_location = loc::FilePosition::from_pos(Some(file_path), obj_ext.position);
                let Some(GraphQLType::Object(obj_type)) = self.types.get_mut(&obj_ext.name) else {
                    return Err(self.extension_error(&obj_ext.name, GraphQLTypeKind::Object, ext_location));
                };
                Self::add_fields(file_path, &obj_ext.name, &obj_ext.fields, &mut obj_type.fields)?;
                Self::add_interfaces(&ext_location, &obj_ext.name, &obj_ext.implements_interfaces, &mut obj_type.interfaces)
            },

            TypeExtension::Scalar(scalar_ext) => {
                let ext_location = loc::FilePosition::from_pos(Some(file_path), scalar_ext.position);
                match self.types.get(&scalar_ext.name) {
                    Some(GraphQLType::Scalar(_)) => Ok(()),
                    _ => Err(self.extension_error(&scalar_ext.name, GraphQLTypeKind::Scalar, ext_location)),
                }
            },

            TypeExtension::Union(union_ext) => {
                let ext_location = loc::FilePosition::from_pos(Some(file_path), union_ext.position);
                let Some(GraphQLType::Union(union_type)) = self.types.get_mut(&union_ext.name) else {
                    return Err(self.extension_error(&union_ext.name, GraphQLTypeKind::Union, ext_location));
                };
                Self::add_union_members(&ext_location, &union_ext.name, &union_ext.types, &mut union_type.members)
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::FilePosition,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(Some(file), pos),
            type_name,
        }
    }
}
