use crate::types::TypeAnnotation;
use crate::validation::AstNodeRef;

/// One reference to a variable within an operation (or a fragment it
/// spreads), with the input type expected at that exact position.
#[derive(Clone, Debug)]
pub struct VariableUsage<'a> {
    /// `None` when the position's type could not be resolved, e.g. an
    /// unknown argument.
    pub expected_type: Option<&'a TypeAnnotation>,
    pub name: &'a str,
    pub node: AstNodeRef,
}
