mod argument_node;
mod ast_node_kind;
mod ast_node_ref;
mod ast_walker;
mod diagnostic;
mod operation_kind;
mod operation_node;
mod rule;
pub mod rules;
mod validation_context;
mod validation_rule;
mod validation_runner;
mod variable_usage;
mod variable_usage_collector;

pub use argument_node::ArgumentNode;
pub use ast_node_kind::AstNodeKind;
pub use ast_node_ref::AstNodeRef;
pub use ast_walker::AstWalker;
pub use diagnostic::Diagnostic;
pub use operation_kind::OperationKind;
pub use operation_node::OperationNode;
pub use rule::Rule;
pub use validation_context::ValidationContext;
pub use validation_rule::ValidationRule;
pub use validation_runner::ValidationRunner;
pub use validation_runner::validate;
pub use validation_runner::validate_with_rules;
pub use variable_usage::VariableUsage;
pub use variable_usage_collector::VariableUsageCollector;

#[cfg(test)]
mod tests;
