use serde::{
    ser::{SerializeMap, SerializeSeq},
    Serialize,
};

use crate::read::{StringTable, Translation};

impl Serialize for StringTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for name in self.iter() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl Serialize for Translation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("subtitles", self.subtitles())?;
        map.serialize_entry("colours", self.colours())?;
        map.serialize_entry("metals", self.metals())?;
        map.serialize_entry("items", self.items())?;
        map.end()
    }
}
