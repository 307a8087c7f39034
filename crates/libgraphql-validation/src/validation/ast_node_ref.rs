use crate::loc;
use crate::validation::AstNodeKind;

/// Identifies a node implicated by a [`Diagnostic`](crate::validation::Diagnostic).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct AstNodeRef {
    pub kind: AstNodeKind,
    pub position: loc::FilePosition,
}
impl AstNodeRef {
    pub fn new(kind: AstNodeKind, pos: graphql_parser::Pos) -> Self {
        Self {
            kind,
            position: loc::FilePosition::from_doc_pos(pos),
        }
    }
}

impl From<&crate::ast::operation::Selection> for AstNodeRef {
    fn from(selection: &crate::ast::operation::Selection) -> Self {
        use crate::ast::operation::Selection;
        match selection {
            Selection::Field(field)
                => Self::new(AstNodeKind::Field, field.position),
            Selection::FragmentSpread(spread)
                => Self::new(AstNodeKind::FragmentSpread, spread.position),
            Selection::InlineFragment(inline_fragment)
                => Self::new(AstNodeKind::InlineFragment, inline_fragment.position),
        }
    }
}
