mod object_field_scanner;

pub use object_field_scanner::DuplicateObjectField;

/// Owned aliases over `graphql_parser`'s executable-document AST.
pub mod operation {
    pub use graphql_parser::query::ParseError;
    pub use super::DuplicateObjectField;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type Mutation = graphql_parser::query::Mutation<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Query = graphql_parser::query::Query<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Subscription = graphql_parser::query::Subscription<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    /// An owned executable document.
    ///
    /// `graphql_parser` keeps object literal fields in a map, so a field
    /// repeated within one literal survives there only as its last value.
    /// Such repeats are recovered from the source while parsing.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Document {
        pub definitions: Vec<Definition>,
        pub duplicate_object_fields: Vec<DuplicateObjectField>,
    }

    /// Parses an executable document into an owned AST.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        let parsed = graphql_parser::query::parse_query::<String>(content)?
            .into_static();
        Ok(Document {
            definitions: parsed.definitions,
            duplicate_object_fields:
                super::object_field_scanner::find_duplicate_object_fields(content),
        })
    }
}

/// Owned aliases over `graphql_parser`'s type-system (SDL) AST.
pub mod schema {
    pub use graphql_parser::schema::DirectiveLocation;
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
    pub type InterfaceTypeExtension = graphql_parser::schema::InterfaceTypeExtension<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type ScalarTypeExtension = graphql_parser::schema::ScalarTypeExtension<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type UnionType = graphql_parser::schema::UnionType<'static, String>;
    pub type UnionTypeExtension = graphql_parser::schema::UnionTypeExtension<'static, String>;

    /// Parses a type-system document into an owned AST.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        graphql_parser::schema::parse_schema::<String>(content)
            .map(|doc| doc.into_static())
    }
}

#[cfg(test)]
mod tests;
