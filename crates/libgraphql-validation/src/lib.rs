//! Static validation of GraphQL executable documents.
//!
//! A [`Schema`] is assembled once (usually via [`SchemaBuilder`]) and can
//! then be shared across threads while any number of documents are checked
//! against it with [`validate`] or a configured [`ValidationRunner`].
//!
//! ```
//! use libgraphql_validation::ast;
//! use libgraphql_validation::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .load_str(None, "type Query { foo(id: Int!): String }")
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let document = ast::operation::parse("{ foo }").unwrap();
//! let diagnostics = libgraphql_validation::validate(&document, &schema);
//! assert_eq!(diagnostics.len(), 1);
//! ```

pub mod ast;
pub mod file_reader;
pub mod loc;
pub mod schema;
pub mod suggestion;
#[cfg(test)]
mod test;
pub mod types;
pub mod validation;
pub mod value;

pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaView;
pub use validation::Diagnostic;
pub use validation::ValidationRule;
pub use validation::ValidationRunner;
pub use validation::validate;
pub use validation::validate_with_rules;
