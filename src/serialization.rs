use super::Name;
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Name", 6)?;
        state.serialize_field("full", self.full())?;
        state.serialize_field("salutation", self.salutation())?;
        state.serialize_field("first", self.first())?;
        state.serialize_field("middle", self.middle())?;
        state.serialize_field("last", self.last())?;
        state.serialize_field("suffix", self.suffix())?;
        state.end()
    }
}
