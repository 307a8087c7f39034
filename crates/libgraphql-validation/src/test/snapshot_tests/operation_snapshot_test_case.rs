use crate::test::snapshot_tests::ExpectedErrorPattern;
use std::path::Path;
use std::path::PathBuf;

/// One executable document fixture, validated against its suite's schema.
#[derive(Clone, Debug)]
pub struct OperationSnapshotTestCase {
    pub expected_errors: Vec<ExpectedErrorPattern>,
    pub path: PathBuf,
}
impl OperationSnapshotTestCase {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            expected_errors: Self::parse_expected_errors(&path),
            path,
        }
    }

    /// Reads the expectation comments from a fixture file. An unreadable
    /// file has no expectations; the failure to read it is reported when
    /// the case runs.
    pub fn parse_expected_errors(path: &Path) -> Vec<ExpectedErrorPattern> {
        std::fs::read_to_string(path)
            .map(|source| ExpectedErrorPattern::parse_all(&source))
            .unwrap_or_default()
    }

    /// `None` when `actual_errors` satisfies every expectation, otherwise
    /// the expectations left unmet.
    ///
    /// A fixture without expectations only requires that something failed,
    /// so an empty `actual_errors` is always `Some`.
    pub fn unmatched_expectations<'p>(
        expected_errors: &'p [ExpectedErrorPattern],
        actual_errors: &[String],
    ) -> Option<Vec<&'p ExpectedErrorPattern>> {
        if actual_errors.is_empty() {
            return Some(expected_errors.iter().collect());
        }
        let unmatched: Vec<_> = expected_errors.iter()
            .filter(|pattern| !actual_errors.iter().any(|actual| pattern.matches(actual)))
            .collect();
        if unmatched.is_empty() {
            None
        } else {
            Some(unmatched)
        }
    }

    pub fn name(&self) -> String {
        self.path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("<unnamed>")
            .to_string()
    }
}
