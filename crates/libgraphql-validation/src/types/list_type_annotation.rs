use crate::types::TypeAnnotation;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_annotation: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
