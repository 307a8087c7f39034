use crate::schema::SchemaBuilder;
use crate::schema::SchemaView;
use crate::types::DirectiveDefinition;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, DirectiveDefinition>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) possible_types: IndexMap<String, Vec<String>>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns every directive defined within this [`Schema`], including the
    /// implicitly-defined builtins like `@skip`.
    pub fn all_directives(&self) -> &IndexMap<String, DirectiveDefinition> {
        &self.directive_defs
    }

    /// Returns every type defined within this [`Schema`], including the
    /// implicitly-defined builtin scalars like [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }
}
impl SchemaView for Schema {
    fn type_by_name(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    fn directive_by_name(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directive_defs.get(name)
    }

    fn directive_names(&self) -> Vec<&str> {
        self.directive_defs.keys().map(String::as_str).collect()
    }

    fn possible_types(&self, abstract_type_name: &str) -> Vec<&str> {
        self.possible_types
            .get(abstract_type_name)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn query_type(&self) -> Option<&GraphQLType> {
        self.types.get(&self.query_type)
    }

    fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref().and_then(|name| self.types.get(name))
    }

    fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref().and_then(|name| self.types.get(name))
    }

    fn is_possible_type(&self, abstract_type_name: &str, type_name: &str) -> bool {
        self.possible_types
            .get(abstract_type_name)
            .is_some_and(|names| names.iter().any(|name| name == type_name))
    }
}
