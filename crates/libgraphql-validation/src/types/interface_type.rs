use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl InterfaceType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Names of the interfaces this interface itself implements.
    pub fn interfaces(&self) -> &[String] {
        self.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
