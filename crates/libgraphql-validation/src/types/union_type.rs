use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    /// Names of the object types that are members of this union, in
    /// declaration order.
    pub fn members(&self) -> &[String] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
