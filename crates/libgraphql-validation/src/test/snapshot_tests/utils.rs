use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/snapshot_tests/fixtures")
    })
}

/// Whether `path` is a file whose name ends with `suffix`, ignoring ASCII
/// case (so both `.graphql` and `.GraphQL` count).
pub fn is_file_with_suffix(path: &Path, suffix: &str) -> bool {
    path.is_file()
        && path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                name.len() >= suffix.len()
                    && name.is_char_boundary(name.len() - suffix.len())
                    && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
            })
}

/// The entries of `dir` sorted by path, so suites and cases run (and
/// report) in a stable order. A missing directory has no entries.
pub fn sorted_dir_entries(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return vec![];
    };
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    paths.sort();
    paths
}
