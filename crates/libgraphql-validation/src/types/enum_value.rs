use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) deprecation: DeprecationState,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn deprecation(&self) -> &DeprecationState {
        &self.deprecation
    }

    pub(crate) fn from_ast(file_path: &Path, value: &ast::schema::EnumValue) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(Some(file_path), value.position),
            deprecation: DeprecationState::from(value.directives.as_slice()),
            name: value.name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
