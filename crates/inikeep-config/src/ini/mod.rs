//! Sectioned key/value (INI) documents.
//!
//! An [`IniDocument`] is an immutable snapshot of one file: sections and
//! their keys keep the order they had in the source text, and that order
//! survives a rewrite. Mutation goes through [`IniDocument::with_value`],
//! which returns a new snapshot instead of editing in place.

mod parse;
mod write;

#[cfg(test)]
mod tests;

use inikeep_common::IniError;

/// One `[name]` block and its ordered `key = value` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate `(key, value)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the value of an existing key in place, or append a new key.
    fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }
}

/// A parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl IniDocument {
    /// Section names in file order.
    pub fn sections(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Iterate sections in file order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Look up a single value.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, IniError> {
        let found = self
            .section(section)
            .ok_or_else(|| IniError::NoSection(section.to_string()))?;
        found.get(key).ok_or_else(|| IniError::NoOption {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Return a copy of this document with `section[key] = value`.
    ///
    /// The section must already exist; keys are replaced in place so the
    /// surrounding order is kept, and new keys go to the end of the section.
    /// Pairs the writer could not express so that [`parse`](Self::parse)
    /// reads them back unchanged are rejected with
    /// [`IniError::InvalidOption`].
    pub fn with_value(&self, section: &str, key: &str, value: &str) -> Result<Self, IniError> {
        write::check_option(key, value)?;
        let mut updated = self.clone();
        let target = updated
            .sections
            .iter_mut()
            .find(|s| s.name == section)
            .ok_or_else(|| IniError::NoSection(section.to_string()))?;
        target.set(key, value);
        Ok(updated)
    }
}
