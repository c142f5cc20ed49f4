use crate::error::{NoteError, Result};

pub const AUTHOR: &str = "author";
pub const DATE: &str = "date";
pub const CONTENT: &str = "content";

/// Element name → element text, in document order.
///
/// Inserting a name that is already present keeps its original position and
/// replaces the value, so the last occurrence in a document wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn require(&self, name: &'static str) -> Result<String> {
        self.get(name)
            .map(str::to_string)
            .ok_or(NoteError::MissingField(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A structured note: who wrote it, when, and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub author: String,
    pub date: String,
    pub content: String,
}

impl Note {
    pub fn new(
        author: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
            content: content.into(),
        }
    }

    /// Builds a note from parsed fields, failing on the first absent one
    /// (checked as author, date, content). Extra fields are ignored.
    pub fn from_fields(fields: &FieldMap) -> Result<Self> {
        Ok(Self {
            author: fields.require(AUTHOR)?,
            date: fields.require(DATE)?,
            content: fields.require(CONTENT)?,
        })
    }
}

impl TryFrom<&FieldMap> for Note {
    type Error = NoteError;

    fn try_from(fields: &FieldMap) -> Result<Self> {
        Note::from_fields(fields)
    }
}
