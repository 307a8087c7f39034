//! File-based snapshot tests: schemas under `fixtures/` that must (or must
//! not) build, and documents that must (or must not) validate against
//! them.

mod expected_error_pattern;
mod operation_snapshot_test_case;
mod snapshot_test_case;
mod test_runner;
mod utils;

pub use expected_error_pattern::ExpectedErrorPattern;
pub use operation_snapshot_test_case::OperationSnapshotTestCase;

#[cfg(test)]
mod tests {
    use crate::test::snapshot_tests::test_runner;
    use crate::test::snapshot_tests::utils;

    #[test]
    fn verify_schema_snapshot_tests() {
        let results = test_runner::run_schema_tests(utils::get_fixtures_dir());

        if results.all_passed() {
            println!("{}", results.summary());
        } else {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        }
        assert!(!results.results.is_empty(), "no schema fixtures were discovered");
        assert!(
            results.all_passed(),
            "Schema snapshot tests failed:\n{}",
            results.failure_report(),
        );
    }

    #[test]
    fn verify_operation_snapshot_tests() {
        let results = test_runner::run_operation_tests(utils::get_fixtures_dir());

        if results.all_passed() {
            println!("{}", results.summary());
        } else {
            eprintln!("{}", results.failure_report());
            eprintln!("\n{}", results.summary());
        }
        assert!(!results.results.is_empty(), "no operation fixtures were discovered");
        assert!(
            results.all_passed(),
            "Operation snapshot tests failed:\n{}",
            results.failure_report(),
        );
    }
}
