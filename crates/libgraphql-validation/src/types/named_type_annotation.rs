use crate::schema::SchemaView;
use crate::types::GraphQLType;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    /// Resolves the annotated type in `schema`, if it is defined there.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema dyn SchemaView,
    ) -> Option<&'schema GraphQLType> {
        schema.type_by_name(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// A named type `self` is a subtype of a named type `other` if they
    /// name the same type, or `other` is abstract and `self` names one of
    /// its concrete possible types.
    pub(super) fn is_subtype_of(
        &self,
        schema: &dyn SchemaView,
        other: &Self,
    ) -> bool {
        if self.type_name == other.type_name {
            return true;
        }

        let (Some(sub), Some(sup)) = (
            self.graphql_type(schema),
            other.graphql_type(schema),
        ) else {
            return false;
        };

        matches!(sub, GraphQLType::Object(_))
            && sup.is_abstract()
            && schema.is_possible_type(sup.name(), sub.name())
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
