
use crate::ast;

/// Parses `src` as the value of a field argument and returns it.
pub(super) fn parse_value(src: &str) -> ast::operation::Value {
    use ast::operation::Definition;
    use ast::operation::OperationDefinition;
    use ast::operation::Selection;

    let doc = ast::operation::parse(&format!("{{ f(a: {src}) }}"))
        .unwrap_or_else(|err| panic!("failed to parse `{src}`: {err}"));
    let Some(Definition::Operation(OperationDefinition::SelectionSet(set))) = doc.definitions.into_iter().next() else {
        panic!("expected a shorthand query");
    };
    let Some(Selection::Field(mut field)) = set.items.into_iter().next() else {
        panic!("expected a field selection");
    };
    field.arguments.remove(0).1
}
