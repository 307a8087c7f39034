use crate::ast;
use crate::validation::AstNodeKind;
use crate::validation::AstNodeRef;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// An input object literal may give each field only once. Each nested
/// object literal is checked on its own.
///
/// The parsed AST keeps only the last value of a repeated field, so the
/// repeats themselves come from [`ast::operation::Document::duplicate_object_fields`].
#[derive(Debug, Default)]
pub struct UniqueInputFieldNames;
impl<'a> Rule<'a> for UniqueInputFieldNames {
    fn enter_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        document: &'a ast::operation::Document,
    ) {
        for duplicate in &document.duplicate_object_fields {
            ctx.report(
                ValidationRule::UniqueInputFieldNames,
                format!("There can be only one input field named \"{}\".", duplicate.name),
                vec![
                    AstNodeRef::new(AstNodeKind::Value, duplicate.first),
                    AstNodeRef::new(AstNodeKind::Value, duplicate.duplicate),
                ],
            );
        }
    }
}
