use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Read-only, name-based lookups over a GraphQL type system.
///
/// Validation only ever reads through this trait, so one implementation can
/// be shared by any number of concurrent validation runs.
pub trait SchemaView: std::fmt::Debug + Send + Sync {
    fn type_by_name(&self, name: &str) -> Option<&GraphQLType>;

    /// Names of every type known to the schema (builtins included), in
    /// definition order.
    fn type_names(&self) -> Vec<&str>;

    fn directive_by_name(&self, name: &str) -> Option<&DirectiveDefinition>;

    fn directive_names(&self) -> Vec<&str>;

    /// Names of the object types that satisfy the given interface or union.
    /// Empty for any other kind of type.
    fn possible_types(&self, abstract_type_name: &str) -> Vec<&str>;

    fn query_type(&self) -> Option<&GraphQLType>;

    fn mutation_type(&self) -> Option<&GraphQLType>;

    fn subscription_type(&self) -> Option<&GraphQLType>;

    fn input_type_by_name(&self, name: &str) -> Option<&GraphQLType> {
        self.type_by_name(name).filter(|t| t.is_input_type())
    }

    fn output_type_by_name(&self, name: &str) -> Option<&GraphQLType> {
        self.type_by_name(name).filter(|t| t.is_output_type())
    }

    fn fields_of(&self, type_name: &str) -> Option<&IndexMap<String, Field>> {
        self.type_by_name(type_name).and_then(|t| t.fields())
    }

    fn field_of(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.fields_of(type_name).and_then(|fields| fields.get(field_name))
    }

    fn implementing_interfaces_of(&self, type_name: &str) -> &[String] {
        self.type_by_name(type_name)
            .map(|t| t.interfaces())
            .unwrap_or(&[])
    }

    fn is_possible_type(&self, abstract_type_name: &str, type_name: &str) -> bool {
        self.possible_types(abstract_type_name).contains(&type_name)
    }
}
