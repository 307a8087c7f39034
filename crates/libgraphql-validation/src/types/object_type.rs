use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Names of the interfaces this type declares that it implements.
    pub fn interfaces(&self) -> &[String] {
        self.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
