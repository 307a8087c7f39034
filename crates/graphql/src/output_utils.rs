pub(crate) const GREEN_CHECK: &str = "✅";
pub(crate) const RED_X: &str = "❌";

/// `"1 file"`, `"2 files"`, ...
pub(crate) fn count_of(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
