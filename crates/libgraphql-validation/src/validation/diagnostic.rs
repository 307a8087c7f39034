use crate::loc;
use crate::validation::AstNodeRef;
use crate::validation::ValidationRule;
use thiserror::Error;

/// A single validation failure: which rule was violated, a human-readable
/// message, and the document nodes involved.
#[derive(Clone, Debug, Eq, Error, PartialEq, serde::Serialize)]
#[error("{message}")]
pub struct Diagnostic {
    pub rule: ValidationRule,
    pub message: String,
    pub nodes: Vec<AstNodeRef>,
}
impl Diagnostic {
    pub fn locations(&self) -> impl Iterator<Item = &loc::FilePosition> {
        self.nodes.iter().map(|node| &node.position)
    }
}
