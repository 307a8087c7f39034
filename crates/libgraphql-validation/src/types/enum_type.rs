use crate::loc;
use crate::types::EnumValue;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
