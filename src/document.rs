use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("section not found: {section}")]
    SectionNotFound { section: String },

    #[error("key not found in [{section}]: {key}")]
    KeyNotFound { section: String, key: String },
}

/// A named group of key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: BTreeMap<String, String>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed INI document: a mapping from section name to [`Section`].
///
/// Sections and keys iterate in sorted name order, so serialization output is
/// deterministic across runs. `set` creates missing sections and keys on
/// demand; `get` reports missing ones as errors, while `keys` treats an
/// absent section as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: BTreeMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Section names, sorted.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Key names of `section`, sorted. Empty if the section is absent.
    pub fn keys(&self, section: &str) -> impl Iterator<Item = &str> {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|s| s.keys())
    }

    pub fn get(&self, section: &str, key: &str) -> Result<&str, DocumentError> {
        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| DocumentError::SectionNotFound {
                section: section.to_string(),
            })?;
        entries.get(key).ok_or_else(|| DocumentError::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Insert or overwrite `key -> value` under `section`, creating the
    /// section if it does not exist yet.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .set(key, value);
    }

    /// Install a fresh empty section under `name`, discarding any existing
    /// content for that name.
    pub fn insert_section(&mut self, name: &str) {
        self.sections.insert(name.to_string(), Section::new());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_creates_section_and_key() {
        let mut doc = Document::new();
        doc.set("owner", "name", "John Doe");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("owner", "name").unwrap(), "John Doe");
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let mut doc = Document::new();
        doc.set("owner", "name", "John Doe");
        doc.set("owner", "name", "Jane Roe");
        assert_eq!(doc.get("owner", "name").unwrap(), "Jane Roe");
        assert_eq!(doc.keys("owner").count(), 1);
    }

    #[test]
    fn test_get_missing_section() {
        let doc = Document::new();
        assert!(matches!(
            doc.get("owner", "name"),
            Err(DocumentError::SectionNotFound { .. })
        ));
    }

    #[test]
    fn test_get_missing_key() {
        let mut doc = Document::new();
        doc.set("owner", "name", "John Doe");
        assert!(matches!(
            doc.get("owner", "organization"),
            Err(DocumentError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_keys_of_absent_section_is_empty() {
        let doc = Document::new();
        assert_eq!(doc.keys("missing").count(), 0);
    }

    #[test]
    fn test_sections_sorted() {
        let mut doc = Document::new();
        doc.set("owner", "name", "John Doe");
        doc.set("database", "port", "143");
        let names: Vec<&str> = doc.sections().collect();
        assert_eq!(names, vec!["database", "owner"]);
    }

    #[test]
    fn test_insert_section_discards_previous_content() {
        let mut doc = Document::new();
        doc.set("owner", "name", "John Doe");
        doc.insert_section("owner");
        assert_eq!(doc.keys("owner").count(), 0);
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_empty_value_allowed() {
        let mut doc = Document::new();
        doc.set("owner", "note", "");
        assert_eq!(doc.get("owner", "note").unwrap(), "");
    }
}
