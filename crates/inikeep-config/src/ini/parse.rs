//! Text → [`IniDocument`] parsing.

use std::path::Path;
use std::sync::LazyLock;

use inikeep_common::IniError;
use regex::Regex;

use super::{IniDocument, Section};

/// `[name]`, anything but a closing bracket inside.
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<name>[^\]]+)\]$").unwrap());

/// `key = value` or `key: value`; the first delimiter wins.
static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<key>[^=:]*?)\s*[=:]\s*(?P<value>.*)$").unwrap());

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

impl IniDocument {
    /// Parse INI text.
    ///
    /// `origin` is only used to label errors, nothing is read from it.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, IniError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut sections: Vec<Section> = Vec::new();
        // Set while the last line was a key, so indented lines can extend it.
        let mut open_value = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.is_empty() {
                open_value = false;
                continue;
            }
            if is_comment(line) {
                continue;
            }

            let indented = raw.starts_with(char::is_whitespace);
            if indented && open_value {
                if let Some((_, value)) = sections.last_mut().and_then(|s| s.entries.last_mut()) {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(line);
                    continue;
                }
            }

            if let Some(caps) = SECTION_RE.captures(line) {
                let name = caps["name"].trim();
                if sections.iter().any(|s| s.name == name) {
                    return Err(IniError::DuplicateSection {
                        section: name.to_string(),
                        line: line_no,
                    });
                }
                sections.push(Section::new(name));
                open_value = false;
                continue;
            }

            let Some(current) = sections.last_mut() else {
                return Err(IniError::MissingSectionHeader {
                    path: origin.to_path_buf(),
                    line: line_no,
                    content: raw.to_string(),
                });
            };

            let caps = OPTION_RE.captures(line).ok_or_else(|| IniError::Malformed {
                line: line_no,
                content: raw.to_string(),
            })?;
            let key = &caps["key"];
            if key.is_empty() {
                return Err(IniError::Malformed {
                    line: line_no,
                    content: raw.to_string(),
                });
            }
            if current.contains_key(key) {
                return Err(IniError::DuplicateOption {
                    section: current.name.clone(),
                    key: key.to_string(),
                    line: line_no,
                });
            }
            current
                .entries
                .push((key.to_string(), caps["value"].to_string()));
            open_value = true;
        }

        Ok(Self { sections })
    }
}
