#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;
mod schema_view;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_build_error::TypeValidationError;
pub use schema_builder::GraphQLOperationType;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuilder;
pub use schema_view::SchemaView;
