use crate::ast;

/// An argument applied to a field or directive.
///
/// `graphql_parser` does not record argument positions, so `position` is
/// that of the field or directive the argument belongs to.
#[derive(Clone, Copy, Debug)]
pub struct ArgumentNode<'a> {
    pub name: &'a str,
    pub position: graphql_parser::Pos,
    pub value: &'a ast::operation::Value,
}
