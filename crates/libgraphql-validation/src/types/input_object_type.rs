use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::FilePosition,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::FilePosition {
        &self.def_location
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
