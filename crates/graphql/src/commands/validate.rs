use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_validation::Diagnostic;
use libgraphql_validation::Schema;
use libgraphql_validation::SchemaBuildError;
use libgraphql_validation::SchemaBuilder;
use libgraphql_validation::ValidationRule;
use libgraphql_validation::ValidationRunner;
use libgraphql_validation::ast;
use libgraphql_validation::file_reader;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_value_t=OutputFormat::Human,
        help="How to print the validation report.",
        long,
        value_enum,
    )]
    format: OutputFormat,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for \
             executable documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only run the named validation rule. May be repeated. Every \
             rule runs when omitted.",
        long="rule",
        value_name="RULE_NAME",
        value_parser=parse_rule_name,
    )]
    rules: Vec<ValidationRule>,

    #[arg(
        help="Schema (SDL) files, or directories containing them, that \
             documents are validated against. May be repeated.",
        long,
        required=true,
        short='s',
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to one or more executable GraphQL documents or \
             directories containing them which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graphql_file_exts = normalize_exts(&self.graphql_file_exts);
        let schema_file_exts = normalize_exts(&["graphql", "graphqls"]);

        log::debug!("Scanning {} schema paths...", self.schema.len());
        let schema_files = discover_files(&self.schema, &schema_file_exts);
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let document_files = discover_files(
            &self.file_or_dir_paths,
            &graphql_file_exts,
        );

        let walk_errors: Vec<&String> =
            schema_files.errors.iter()
                .chain(document_files.errors.iter())
                .collect();
        if !walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while searching for GraphQL files:\n{}",
                output_utils::RED_X,
                walk_errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        let schema = match build_schema(&schema_files.paths) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors building schema: {err}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Built a schema of {} types from {}.",
            schema.all_types().len(),
            output_utils::count_of(schema_files.paths.len(), "file", "files"),
        );

        let runner =
            if self.rules.is_empty() {
                ValidationRunner::new()
            } else {
                ValidationRunner::with_rules(&self.rules)
            };
        log::debug!(
            "Validating {} with {} rules.",
            output_utils::count_of(document_files.paths.len(), "document", "documents"),
            runner.rules().len(),
        );

        let reports = match validate_files(
            document_files.paths,
            Arc::new(schema),
            Arc::new(runner),
        ).await {
            Ok(reports) => reports,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Validation task failed: {err}",
                output_utils::RED_X,
            )),
        };

        let has_problems = reports.iter().any(FileReport::has_problems);
        let result = match self.format {
            OutputFormat::Human => CommandResult::stdout(format_args!(
                "{}",
                format_human_report(&reports, document_files.num_skipped),
            )),
            OutputFormat::Json => match format_json_report(&reports) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => return CommandResult::stderr(format_args!(
                    "{} Failed to serialize the report: {err}",
                    output_utils::RED_X,
                )),
            },
        };

        if has_problems {
            result.failed()
        } else {
            result
        }
    }
}

fn parse_rule_name(name: &str) -> Result<ValidationRule, String> {
    ValidationRule::from_name(name).ok_or_else(|| format!(
        "unknown validation rule `{name}` (expected one of: {})",
        ValidationRule::ALL.iter()
            .map(ValidationRule::name)
            .collect::<Vec<_>>()
            .join(", "),
    ))
}

fn normalize_exts<S: AsRef<str>>(exts: &[S]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            let ext = ext.as_ref();
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

#[derive(Debug, Default)]
struct DiscoveredFiles {
    errors: Vec<String>,
    num_skipped: usize,
    paths: Vec<PathBuf>,
}

/// Recursively collects the files at or under each root whose extension is
/// one of `exts`. A root that names a file directly is always kept.
fn discover_files(roots: &[PathBuf], exts: &HashSet<String>) -> DiscoveredFiles {
    let mut discovered = DiscoveredFiles::default();
    let mut seen = HashSet::new();
    for root in roots {
        for entry in WalkDir::new(root.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {root:#?}."
                    );
                    discovered.errors.push(err.to_string());
                    continue
                },
            };

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue
            }

            let has_matching_ext =
                path.extension()
                    .map(|ext| exts.contains(&format!(".{}", ext.to_string_lossy())))
                    .unwrap_or(false);
            if !has_matching_ext {
                if entry.depth() > 0 {
                    log::trace!("Skipping non-graphql file: {path:#?}.");
                    discovered.num_skipped += 1;
                    continue
                }
                log::warn!(
                    "Proceeding with {path:#?} even though it doesn't match \
                    any of the expected file extensions ({}).",
                    exts.iter()
                        .map(|ext| format!("`{ext}`"))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
            }

            match std::fs::canonicalize(path) {
                Ok(canonical) => {
                    if seen.insert(canonical.clone()) {
                        log::trace!("Found file at {canonical:#?}.");
                        discovered.paths.push(canonical);
                    }
                },
                Err(err) => discovered.errors.push(format!("{}: {err}", path.display())),
            }
        }
    }
    discovered
}

fn build_schema(schema_files: &[PathBuf]) -> Result<Schema, SchemaBuildError> {
    SchemaBuilder::new()
        .load_files(schema_files.iter().collect::<Vec<_>>())?
        .build()
}

#[derive(Debug)]
enum FileOutcome {
    Checked(Vec<Diagnostic>),
    ParseFailed(String),
    ReadFailed(String),
}

#[derive(Debug)]
struct FileReport {
    outcome: FileOutcome,
    path: PathBuf,
}
impl FileReport {
    fn has_problems(&self) -> bool {
        match &self.outcome {
            FileOutcome::Checked(diagnostics) => !diagnostics.is_empty(),
            FileOutcome::ParseFailed(_) | FileOutcome::ReadFailed(_) => true,
        }
    }
}

fn validate_file(
    path: &Path,
    schema: &Schema,
    runner: &ValidationRunner,
) -> FileOutcome {
    let _span = tracing::debug_span!("validate_file", path = %path.display()).entered();
    let content = match file_reader::read_content(path) {
        Ok(content) => content,
        Err(err) => return FileOutcome::ReadFailed(err.to_string()),
    };
    let document = match ast::operation::parse(&content) {
        Ok(document) => document,
        Err(err) => return FileOutcome::ParseFailed(err.to_string()),
    };
    let diagnostics = runner.validate(&document, schema);
    tracing::debug!(diagnostics = diagnostics.len(), "validated");
    FileOutcome::Checked(diagnostics)
}

/// Validates every file on the blocking pool. Reports come back in the same
/// order as `paths`.
async fn validate_files(
    paths: Vec<PathBuf>,
    schema: Arc<Schema>,
    runner: Arc<ValidationRunner>,
) -> Result<Vec<FileReport>, tokio::task::JoinError> {
    let handles: Vec<_> =
        paths.into_iter()
            .map(|path| {
                let schema = Arc::clone(&schema);
                let runner = Arc::clone(&runner);
                tokio::task::spawn_blocking(move || {
                    let outcome = validate_file(&path, &schema, &runner);
                    FileReport { outcome, path }
                })
            })
            .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await?);
    }
    Ok(reports)
}

fn format_human_report(reports: &[FileReport], num_skipped: usize) -> String {
    let mut out = String::new();
    let mut num_failed_files = 0;
    let mut num_diagnostics = 0;

    for report in reports {
        let path = report.path.display();
        match &report.outcome {
            FileOutcome::Checked(diagnostics) if diagnostics.is_empty() => (),
            FileOutcome::Checked(diagnostics) => {
                num_failed_files += 1;
                num_diagnostics += diagnostics.len();
                let _ = writeln!(out, "{} {path}", output_utils::RED_X);
                for diagnostic in diagnostics {
                    let mut locations = diagnostic.locations();
                    match locations.next() {
                        Some(first) => {
                            let _ = write!(out, "  {path}:{}:{}", first.line, first.col);
                        },
                        None => {
                            let _ = write!(out, "  {path}");
                        },
                    }
                    let _ = writeln!(out, " [{}] {}", diagnostic.rule, diagnostic.message);
                    for other in locations {
                        let _ = writeln!(out, "      (also at {}:{})", other.line, other.col);
                    }
                }
            },
            FileOutcome::ParseFailed(err) => {
                num_failed_files += 1;
                let _ = writeln!(out, "{} {path}\n  Failed to parse: {}", output_utils::RED_X, err.trim_end());
            },
            FileOutcome::ReadFailed(err) => {
                num_failed_files += 1;
                let _ = writeln!(out, "{} {path}\n  Failed to read: {err}", output_utils::RED_X);
            },
        }
    }

    if num_failed_files == 0 {
        let _ = write!(
            out,
            "{} All GraphQL validated successfully:\n  \
            * Validated {}.\n  \
            * Skipped {}.",
            output_utils::GREEN_CHECK,
            output_utils::count_of(reports.len(), "document", "documents"),
            output_utils::count_of(num_skipped, "non-graphql file", "non-graphql files"),
        );
    } else {
        let _ = write!(
            out,
            "\n{} Found {} in {} of {}.",
            output_utils::RED_X,
            output_utils::count_of(num_diagnostics, "validation error", "validation errors"),
            num_failed_files,
            output_utils::count_of(reports.len(), "document", "documents"),
        );
    }
    out
}

#[derive(serde::Serialize)]
struct JsonFileReport<'a> {
    diagnostics: &'a [Diagnostic],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    path: &'a Path,
    valid: bool,
}

fn format_json_report(reports: &[FileReport]) -> serde_json::Result<String> {
    let files: Vec<JsonFileReport<'_>> =
        reports.iter()
            .map(|report| {
                let (diagnostics, error) = match &report.outcome {
                    FileOutcome::Checked(diagnostics) => (diagnostics.as_slice(), None),
                    FileOutcome::ParseFailed(err)
                        | FileOutcome::ReadFailed(err) => (&[][..], Some(err.as_str())),
                };
                JsonFileReport {
                    diagnostics,
                    error,
                    path: report.path.as_path(),
                    valid: !report.has_problems(),
                }
            })
            .collect();
    serde_json::to_string_pretty(&files)
}
