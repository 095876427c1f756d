use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered label → content map for one day's sections.
///
/// Keys appear in the order their labels occur in the segment text, and
/// serialize as a JSON object in that order. A present key with an empty
/// value means the label was found but had no trailing content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap(Vec<(String, String)>);

impl SectionMap {
    pub fn new() -> Self {
        SectionMap(Vec::new())
    }

    /// Insert a label. An existing label keeps its position and gets the
    /// new content.
    pub fn insert(&mut self, label: impl Into<String>, content: impl Into<String>) {
        let label = label.into();
        let content = content.into();
        match self.0.iter_mut().find(|(k, _)| *k == label) {
            Some(entry) => entry.1 = content,
            None => self.0.push((label, content)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.0.iter().any(|(k, _)| k == label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionMapVisitor;

        impl<'de> Visitor<'de> for SectionMapVisitor {
            type Value = SectionMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of section label to content")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut sections = SectionMap::new();
                while let Some((label, content)) = access.next_entry::<String, String>()? {
                    sections.insert(label, content);
                }
                Ok(sections)
            }
        }

        deserializer.deserialize_map(SectionMapVisitor)
    }
}

/// The structured output unit for one day of the guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    /// ISO date (`YYYY-MM-DD`) when a date expression was found in the
    /// segment; serialized as null otherwise.
    pub date: Option<String>,
    /// First non-blank line of the segment; empty when the segment has none.
    pub title: String,
    pub sections: SectionMap,
    /// Full cleaned segment text.
    pub raw: String,
}

/// The assembled guide: day records keyed by day number (as a string),
/// in marker discovery order.
///
/// Inserting a record for an already-present day replaces the record but
/// keeps the original key position, so serialization never emits duplicate
/// keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideDocument {
    records: Vec<DayRecord>,
}

impl GuideDocument {
    pub fn new() -> Self {
        GuideDocument::default()
    }

    pub fn insert(&mut self, record: DayRecord) {
        match self.records.iter_mut().find(|r| r.day == record.day) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, day: u32) -> Option<&DayRecord> {
        self.records.iter().find(|r| r.day == day)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in discovery order.
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }
}

impl Serialize for GuideDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.day.to_string(), record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GuideDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GuideDocumentVisitor;

        impl<'de> Visitor<'de> for GuideDocumentVisitor {
            type Value = GuideDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of day number to day record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut doc = GuideDocument::new();
                while let Some((_, record)) = access.next_entry::<String, DayRecord>()? {
                    doc.insert(record);
                }
                Ok(doc)
            }
        }

        deserializer.deserialize_map(GuideDocumentVisitor)
    }
}
