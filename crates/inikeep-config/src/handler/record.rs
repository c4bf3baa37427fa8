//! The four-field channel record and how it is found in a document.

use std::collections::BTreeMap;

use inikeep_common::ConfigError;
use serde::Serialize;

use crate::ini::{IniDocument, Section};

const RECORD_KEYS: [&str; 4] = ["id", "type", "name", "level"];

/// Snapshot of the record block of a config file.
///
/// All values are copied verbatim as strings; `level` and `id` are not
/// converted to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub level: String,
}

impl Record {
    /// Build a record from a flattened mapping. Every field must be present.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let field = |key: &'static str| {
            map.get(key)
                .cloned()
                .ok_or(ConfigError::IncompleteRecord(key))
        };
        Ok(Self {
            id: field("id")?,
            kind: field("type")?,
            name: field("name")?,
            level: field("level")?,
        })
    }
}

/// The first section carrying all record keys, else the first carrying any.
fn record_section(document: &IniDocument) -> Option<&Section> {
    document
        .iter()
        .find(|s| RECORD_KEYS.iter().all(|k| s.contains_key(k)))
        .or_else(|| {
            document
                .iter()
                .find(|s| RECORD_KEYS.iter().any(|k| s.contains_key(k)))
        })
}

/// Flatten the record section into a plain string map.
pub(super) fn flatten(document: &IniDocument) -> BTreeMap<String, String> {
    record_section(document)
        .map(|section| {
            section
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .unwrap_or_default()
}
