use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::test::snapshot_tests::OperationSnapshotTestCase;
use crate::test::snapshot_tests::snapshot_test_case::SchemaSnapshotTestCase;
use crate::validation::Diagnostic;
use crate::validation::ValidationRunner;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

/// Outcome of a single schema or operation fixture.
#[derive(Debug)]
pub struct SnapshotTestResult {
    pub error_message: Option<String>,
    pub file_path: PathBuf,
    pub file_snippet: Option<String>,
    pub passed: bool,
    pub test_name: String,
}
impl SnapshotTestResult {
    fn fail(
        test_name: String,
        file_path: PathBuf,
        error_message: String,
        file_snippet: Option<String>,
    ) -> Self {
        Self {
            error_message: Some(error_message),
            file_path,
            file_snippet,
            passed: false,
            test_name,
        }
    }

    fn pass(test_name: String, file_path: PathBuf) -> Self {
        Self {
            error_message: None,
            file_path,
            file_snippet: None,
            passed: true,
            test_name,
        }
    }

    fn format_failure(&self) -> String {
        let mut output = format!("❌ {}\n   File: {}\n", self.test_name, self.file_path.display());
        if let Some(message) = &self.error_message {
            for line in message.lines() {
                output.push_str("   ");
                output.push_str(line);
                output.push('\n');
            }
        }
        if let Some(snippet) = &self.file_snippet {
            output.push('\n');
            output.push_str(snippet);
        }
        output
    }
}

#[derive(Debug, Default)]
pub struct SnapshotTestResults {
    pub results: Vec<SnapshotTestResult>,
}
impl SnapshotTestResults {
    pub fn add(&mut self, result: SnapshotTestResult) {
        self.results.push(result);
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }

    fn failures(&self) -> impl Iterator<Item = &SnapshotTestResult> {
        self.results.iter().filter(|result| !result.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures_text = self.failures()
            .map(SnapshotTestResult::format_failure)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{} of {} snapshot tests failed:\n\n{failures_text}",
            self.failures().count(),
            self.results.len(),
        )
    }

    pub fn summary(&self) -> String {
        let total = self.results.len();
        let failed = self.failures().count();
        let emoji = if failed == 0 { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");

        let mut summary = format!(
            "{banner}\n{emoji} SNAPSHOT TEST SUMMARY\n{banner}\n\
            Total tests: {total}\nPassed: {}\nFailed: {failed}\n",
            total - failed,
        );
        if failed > 0 {
            summary.push_str("\nFailed snapshot tests:\n");
            for failure in self.failures() {
                summary.push_str(&format!("  - {}\n", failure.test_name));
            }
        }
        summary.push_str(&banner);
        summary
    }
}

/// Builds the case's schema, returning the offending file and the error's
/// debug form on failure.
fn build_schema(test_case: &SchemaSnapshotTestCase) -> Result<Schema, (PathBuf, String)> {
    let mut builder = SchemaBuilder::new();
    for schema_path in &test_case.schema_paths {
        builder = builder.load_file(schema_path)
            .map_err(|err| (schema_path.clone(), format!("{err:?}")))?;
    }
    builder.build()
        .map_err(|err| (test_case.schema_paths[0].clone(), format!("{err:?}")))
}

/// Builds every discovered schema, checking valid suites build cleanly and
/// invalid ones fail with the expected errors.
pub fn run_schema_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let mut results = SnapshotTestResults::default();
    for test_case in SchemaSnapshotTestCase::discover_all(fixtures_dir) {
        results.add(test_schema(&test_case));
    }
    results
}

fn test_schema(test_case: &SchemaSnapshotTestCase) -> SnapshotTestResult {
    let test_name = format!("{}/schema", test_case.name);
    let first_path = test_case.schema_paths[0].clone();

    match (build_schema(test_case), test_case.expects_schema_errors()) {
        (Ok(_), false) => SnapshotTestResult::pass(test_name, first_path),

        (Ok(_), true) => SnapshotTestResult::fail(
            test_name,
            first_path.clone(),
            "Expected: schema build to fail\nGot: schema built successfully".to_string(),
            file_head_snippet(&first_path, 5),
        ),

        (Err((path, err)), false) => SnapshotTestResult::fail(
            test_name,
            path.clone(),
            format!("Expected: valid schema\nGot: {err}"),
            file_head_snippet(&path, 5),
        ),

        (Err((path, err)), true) => {
            let unmatched: Vec<String> = test_case.schema_expected_errors.iter()
                .filter(|pattern| !pattern.matches(&err))
                .map(|pattern| format!("  ✗ {pattern}"))
                .collect();
            if unmatched.is_empty() {
                SnapshotTestResult::pass(test_name, path)
            } else {
                SnapshotTestResult::fail(
                    test_name,
                    path,
                    format!(
                        "Expected: all error patterns to match\n\
                        Unmatched patterns:\n{}\nActual error:\n{err}",
                        unmatched.join("\n"),
                    ),
                    None,
                )
            }
        },
    }
}

/// Validates every operation fixture of every valid schema suite. Fixtures
/// within a suite are validated in parallel against one shared schema.
pub fn run_operation_tests(fixtures_dir: &Path) -> SnapshotTestResults {
    let runner = ValidationRunner::new();
    let mut results = SnapshotTestResults::default();

    for test_case in SchemaSnapshotTestCase::discover_all(fixtures_dir) {
        if test_case.expects_schema_errors() {
            continue;
        }
        let schema = match build_schema(&test_case) {
            Ok(schema) => schema,
            Err((path, _)) => {
                // Already reported by the schema tests.
                log::warn!("skipping operations of `{}`: schema failed to build", path.display());
                continue;
            },
        };

        let valid_results: Vec<SnapshotTestResult> = test_case.valid_operations
            .par_iter()
            .map(|op| test_operation(&runner, &schema, &test_case.name, op, true))
            .collect();
        let invalid_results: Vec<SnapshotTestResult> = test_case.invalid_operations
            .par_iter()
            .map(|op| test_operation(&runner, &schema, &test_case.name, op, false))
            .collect();
        results.results.extend(valid_results);
        results.results.extend(invalid_results);
    }

    results
}

fn test_operation(
    runner: &ValidationRunner,
    schema: &Schema,
    suite_name: &str,
    test_case: &OperationSnapshotTestCase,
    expect_valid: bool,
) -> SnapshotTestResult {
    let kind_dir = if expect_valid { "valid_operations" } else { "invalid_operations" };
    let test_name = format!("{suite_name}/{kind_dir}/{}", test_case.name());
    let file_path = test_case.path.clone();

    let source = match std::fs::read_to_string(&file_path) {
        Ok(source) => source,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Failed to read fixture: {err}"),
            None,
        ),
    };
    let document = match ast::operation::parse(&source) {
        Ok(document) => document,
        Err(err) => return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Failed to parse fixture: {err}"),
            None,
        ),
    };

    let diagnostics = runner.validate(&document, schema);
    let actual_errors: Vec<String> = diagnostics.iter()
        .map(|diagnostic| format!("{}: {}", diagnostic.rule, diagnostic.message))
        .collect();

    if expect_valid {
        if diagnostics.is_empty() {
            return SnapshotTestResult::pass(test_name, file_path);
        }
        return SnapshotTestResult::fail(
            test_name,
            file_path,
            format!("Expected: no diagnostics\nGot:\n{}", actual_errors.join("\n")),
            Some(snippet_with_error_markers(&source, &diagnostics)),
        );
    }

    match OperationSnapshotTestCase::unmatched_expectations(&test_case.expected_errors, &actual_errors) {
        None => SnapshotTestResult::pass(test_name, file_path),
        Some(unmatched) if actual_errors.is_empty() => SnapshotTestResult::fail(
            test_name,
            file_path,
            format!(
                "Expected: validation to fail ({} expectations)\nGot: no diagnostics",
                unmatched.len(),
            ),
            None,
        ),
        Some(unmatched) => SnapshotTestResult::fail(
            test_name,
            file_path,
            format!(
                "Unmatched patterns:\n{}\nActual diagnostics:\n{}",
                unmatched.iter()
                    .map(|pattern| format!("  ✗ {pattern}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
                actual_errors.join("\n"),
            ),
            Some(snippet_with_error_markers(&source, &diagnostics)),
        ),
    }
}

/// The first `max_lines` lines of a file, numbered.
fn file_head_snippet(path: &Path, max_lines: usize) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    Some(
        content.lines()
            .take(max_lines)
            .enumerate()
            .map(|(idx, line)| format!("   {:>3} │ {line}\n", idx + 1))
            .collect(),
    )
}

/// The whole fixture, numbered, with an arrow on each line a diagnostic
/// points at.
fn snippet_with_error_markers(source: &str, diagnostics: &[Diagnostic]) -> String {
    let flagged_lines: HashSet<usize> = diagnostics.iter()
        .flat_map(|diagnostic| diagnostic.locations())
        .map(|position| position.line)
        .collect();
    let width = source.lines().count().to_string().len();

    source.lines()
        .enumerate()
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let marker = if flagged_lines.contains(&line_num) { "→" } else { "│" };
            format!("   {line_num:>width$} {marker} {line}\n")
        })
        .collect()
}
