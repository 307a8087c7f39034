use crate::ast;
use graphql_parser::Pos;

fn duplicates(source: &str) -> Vec<(String, Pos, Pos)> {
    ast::operation::parse(source)
        .unwrap()
        .duplicate_object_fields
        .into_iter()
        .map(|dup| (dup.name, dup.first, dup.duplicate))
        .collect()
}

fn pos(line: usize, column: usize) -> Pos {
    Pos { line, column }
}

#[test]
fn repeated_field_in_argument_object() {
    assert_eq!(
        duplicates("{ f(arg: { a: 1, b: 2, a: 3 }) }"),
        vec![("a".to_string(), pos(1, 12), pos(1, 24))],
    );
}

#[test]
fn selection_sets_are_not_object_literals() {
    assert_eq!(duplicates("{ a: f a: g b { a: f } }"), vec![]);
    assert_eq!(duplicates("query Q($v: In = { x: 1 }) { f(x: $v) { a: f a: g } }"), vec![]);
}

#[test]
fn nested_objects_track_their_own_fields() {
    assert_eq!(duplicates("{ f(arg: { a: { a: 1 }, b: { a: 2 } }) }"), vec![]);
    assert_eq!(duplicates("{ f(arg: [{ a: 1 }, { a: 2 }]) }"), vec![]);
}

#[test]
fn repeated_field_in_nested_object() {
    assert_eq!(
        duplicates("{ f(arg: { outer: { inner: 1, inner: 2 } }) }"),
        vec![("inner".to_string(), pos(1, 21), pos(1, 31))],
    );
}

#[test]
fn enum_values_are_not_field_names() {
    assert_eq!(duplicates("{ f(arg: { a: RED, b: RED }) }"), vec![]);
}

#[test]
fn strings_and_comments_are_skipped() {
    let source = "{ f(arg: {\n  a: \"a: {\",\n  # a: 1\n  b: \"\"\"\n a: \\\"\"\" }\n \"\"\"\n  a: 2\n}) }";
    assert_eq!(
        duplicates(source),
        vec![("a".to_string(), pos(2, 3), pos(7, 3))],
    );
}

#[test]
fn default_values_are_scanned() {
    assert_eq!(
        duplicates("query Q($v: In = { x: 1, x: 2 }) { f }"),
        vec![("x".to_string(), pos(1, 20), pos(1, 26))],
    );
}

#[test]
fn numbers_with_exponents_do_not_confuse_the_scan() {
    assert_eq!(
        duplicates("{ f(arg: { n: -1.5e+3, m: 2E-1, n: 0 }) }"),
        vec![("n".to_string(), pos(1, 12), pos(1, 33))],
    );
}
