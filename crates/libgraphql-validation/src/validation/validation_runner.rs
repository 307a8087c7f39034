use crate::ast;
use crate::schema::SchemaView;
use crate::validation::AstWalker;
use crate::validation::Diagnostic;
use crate::validation::Rule;
use crate::validation::ValidationContext;
use crate::validation::ValidationRule;

/// Runs a fixed set of [`ValidationRule`]s over executable documents.
///
/// A runner holds no per-document state, so one instance may be reused
/// (and shared across threads) for any number of documents.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationRunner {
    rules: Vec<ValidationRule>,
}
impl ValidationRunner {
    /// A runner for every rule in [`ValidationRule::ALL`].
    pub fn new() -> Self {
        Self::with_rules(ValidationRule::ALL)
    }

    /// A runner for only the given rules. Rules run in the order given;
    /// duplicates are ignored.
    pub fn with_rules(rules: &[ValidationRule]) -> Self {
        let mut deduped = Vec::with_capacity(rules.len());
        for rule in rules {
            if !deduped.contains(rule) {
                deduped.push(*rule);
            }
        }
        Self { rules: deduped }
    }

    /// Like [`validate`](Self::validate), but shaped for `?`.
    pub fn check(
        &self,
        document: &ast::operation::Document,
        schema: &dyn SchemaView,
    ) -> Result<(), Vec<Diagnostic>> {
        let diagnostics = self.validate(document, schema);
        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(diagnostics)
        }
    }

    pub fn rules(&self) -> &[ValidationRule] {
        self.rules.as_slice()
    }

    /// Validates `document` against `schema` with every configured rule,
    /// returning all diagnostics found (empty when the document is valid).
    pub fn validate(
        &self,
        document: &ast::operation::Document,
        schema: &dyn SchemaView,
    ) -> Vec<Diagnostic> {
        let mut ctx = ValidationContext::new(schema, document);
        let mut rules: Vec<Box<dyn Rule<'_> + '_>> = self.rules.iter()
            .map(|rule| rule.instantiate())
            .collect();

        AstWalker::new(rules.as_mut_slice()).walk(&mut ctx, document);

        let diagnostics = ctx.into_diagnostics();
        if log::log_enabled!(log::Level::Trace) {
            for rule in &self.rules {
                let count = diagnostics.iter().filter(|d| d.rule == *rule).count();
                log::trace!("{rule}: {count} diagnostics");
            }
        }
        log::debug!(
            "validated document ({} definitions) with {} rules: {} diagnostics",
            document.definitions.len(),
            self.rules.len(),
            diagnostics.len(),
        );
        diagnostics
    }
}
impl Default for ValidationRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates `document` against `schema` with every rule.
pub fn validate(
    document: &ast::operation::Document,
    schema: &dyn SchemaView,
) -> Vec<Diagnostic> {
    ValidationRunner::new().validate(document, schema)
}

/// Validates `document` against `schema` with only the given rules.
pub fn validate_with_rules(
    document: &ast::operation::Document,
    schema: &dyn SchemaView,
    rules: &[ValidationRule],
) -> Vec<Diagnostic> {
    ValidationRunner::with_rules(rules).validate(document, schema)
}
