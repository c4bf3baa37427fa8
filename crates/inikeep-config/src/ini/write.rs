//! [`IniDocument`] → text.

use std::fmt;

use inikeep_common::IniError;

use super::IniDocument;

impl fmt::Display for IniDocument {
    /// Each section as `[name]` followed by `key = value` lines and a blank
    /// line. Multi-line values continue on tab-indented lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in section.iter() {
                writeln!(f, "{key} = {}", value.replace('\n', "\n\t"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn is_trimmed(s: &str) -> bool {
    s.trim() == s
}

/// Check that `key = value` survives a write and a re-parse unchanged.
pub(super) fn check_option(key: &str, value: &str) -> Result<(), IniError> {
    let invalid = |reason| {
        Err(IniError::InvalidOption {
            key: key.to_string(),
            reason,
        })
    };

    if key.is_empty() {
        return invalid("key is empty");
    }
    if !is_trimmed(key) {
        return invalid("key has leading or trailing whitespace");
    }
    if key.contains(['\n', '\r']) {
        return invalid("key spans lines");
    }
    if key.contains(['=', ':']) {
        return invalid("key contains a delimiter");
    }
    if key.contains('[') {
        return invalid("key contains '['");
    }
    if key.starts_with(['#', ';']) {
        return invalid("key would read as a comment");
    }

    if value.contains('\r') {
        return invalid("value contains a carriage return");
    }
    let mut lines = value.split('\n');
    let first = lines.next().unwrap_or_default();
    if !is_trimmed(first) {
        return invalid("value has leading or trailing whitespace");
    }
    let mut continued = false;
    for line in lines {
        continued = true;
        if line.is_empty() {
            return invalid("value contains an empty line");
        }
        if !is_trimmed(line) {
            return invalid("value line has leading or trailing whitespace");
        }
        if line.starts_with(['#', ';']) {
            return invalid("value line would read as a comment");
        }
    }
    if continued && first.is_empty() {
        return invalid("value starts with a line break");
    }
    Ok(())
}
