use crate::test::snapshot_tests::ExpectedErrorPattern;
use crate::test::snapshot_tests::OperationSnapshotTestCase;
use crate::test::snapshot_tests::utils;
use std::path::Path;
use std::path::PathBuf;

/// A schema (one or more files) plus the documents to validate against it.
///
/// Layout under the fixtures directory:
///
/// ```text
/// valid_schemas/<suite>/schema.graphql        (and/or *.schema.graphql)
/// valid_schemas/<suite>/valid_operations/*.graphql
/// valid_schemas/<suite>/invalid_operations/*.graphql
/// invalid_schemas/<name>.graphql
/// invalid_schemas/<name>/*.schema.graphql
/// ```
///
/// Files ending in `.disabled` are skipped.
#[derive(Clone, Debug)]
pub struct SchemaSnapshotTestCase {
    pub invalid_operations: Vec<OperationSnapshotTestCase>,
    pub name: String,
    pub schema_expected_errors: Vec<ExpectedErrorPattern>,
    pub schema_paths: Vec<PathBuf>,
    pub valid_operations: Vec<OperationSnapshotTestCase>,
}
impl SchemaSnapshotTestCase {
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Self> {
        let mut cases = Self::discover_valid_schemas(fixtures_dir);
        cases.extend(Self::discover_invalid_schemas(fixtures_dir));
        cases
    }

    /// Whether building this case's schema is expected to fail.
    pub fn expects_schema_errors(&self) -> bool {
        !self.schema_expected_errors.is_empty()
    }

    fn discover_invalid_schemas(fixtures_dir: &Path) -> Vec<Self> {
        utils::sorted_dir_entries(&fixtures_dir.join("invalid_schemas"))
            .into_iter()
            .filter_map(|path| {
                let schema_paths = if path.is_dir() {
                    Self::discover_schema_files(&path)
                } else if utils::is_file_with_suffix(&path, ".graphql") {
                    vec![path.clone()]
                } else {
                    return None;
                };
                if schema_paths.is_empty() {
                    log::warn!("no schema files found in `{}`", path.display());
                    return None;
                }

                let name = path.file_stem()?.to_str()?.to_string();
                let mut schema_expected_errors = Self::expected_errors_of(&schema_paths);
                if schema_expected_errors.is_empty() {
                    // Any build error will do.
                    schema_expected_errors.push(ExpectedErrorPattern::Contains(String::new()));
                }

                Some(Self {
                    invalid_operations: vec![],
                    name,
                    schema_expected_errors,
                    schema_paths,
                    valid_operations: vec![],
                })
            })
            .collect()
    }

    fn discover_operations(dir: &Path) -> Vec<OperationSnapshotTestCase> {
        utils::sorted_dir_entries(dir)
            .into_iter()
            .filter(|path| {
                if utils::is_file_with_suffix(path, ".graphql") {
                    true
                } else {
                    if !utils::is_file_with_suffix(path, ".disabled") {
                        log::warn!(
                            "ignoring unexpected operation fixture `{}` (only .graphql and \
                            .disabled files are allowed)",
                            path.display(),
                        );
                    }
                    false
                }
            })
            .map(OperationSnapshotTestCase::from_path)
            .collect()
    }

    /// `schema.graphql` first, then any `*.schema.graphql` files in name
    /// order.
    fn discover_schema_files(dir: &Path) -> Vec<PathBuf> {
        let mut schema_files = vec![];
        let single_schema = dir.join("schema.graphql");
        if single_schema.is_file() {
            schema_files.push(single_schema);
        }
        schema_files.extend(
            utils::sorted_dir_entries(dir)
                .into_iter()
                .filter(|path| utils::is_file_with_suffix(path, ".schema.graphql")),
        );
        schema_files
    }

    fn discover_valid_schemas(fixtures_dir: &Path) -> Vec<Self> {
        utils::sorted_dir_entries(&fixtures_dir.join("valid_schemas"))
            .into_iter()
            .filter_map(|path| {
                if !path.is_dir() {
                    log::warn!(
                        "ignoring `{}`: valid_schemas/ may only contain suite directories",
                        path.display(),
                    );
                    return None;
                }

                let schema_paths = Self::discover_schema_files(&path);
                if schema_paths.is_empty() {
                    log::warn!("no schema files found in `{}`", path.display());
                    return None;
                }

                Some(Self {
                    invalid_operations: Self::discover_operations(&path.join("invalid_operations")),
                    name: path.file_name()?.to_str()?.to_string(),
                    schema_expected_errors: Self::expected_errors_of(&schema_paths),
                    schema_paths,
                    valid_operations: Self::discover_operations(&path.join("valid_operations")),
                })
            })
            .collect()
    }

    fn expected_errors_of(schema_paths: &[PathBuf]) -> Vec<ExpectedErrorPattern> {
        schema_paths.iter()
            .flat_map(|path| OperationSnapshotTestCase::parse_expected_errors(path))
            .collect()
    }
}
