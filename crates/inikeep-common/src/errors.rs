use std::path::PathBuf;

/// Failures raised by the INI codec itself.
///
/// These are surfaced to callers unwrapped (through
/// [`ConfigError::Parse`]), so a malformed file reads as a parse problem
/// rather than as one of the handler's stage-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum IniError {
    #[error("file contains no section headers.\nfile: {path}, line: {line}\n{content:?}")]
    MissingSectionHeader {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("section {section:?} already exists (line {line})")]
    DuplicateSection { section: String, line: usize },

    #[error("option {key:?} in section {section:?} already exists (line {line})")]
    DuplicateOption {
        section: String,
        key: String,
        line: usize,
    },

    #[error("malformed line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("no section: {0:?}")]
    NoSection(String),

    #[error("no option {key:?} in section {section:?}")]
    NoOption { section: String, key: String },

    #[error("cannot store option {key:?}: {reason}")]
    InvalidOption { key: String, reason: &'static str },
}

/// Every way a `ConfigHandler` operation can fail, one variant per stage.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no access to config file {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to back up config file {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rebuild config file {path}: {source}")]
    Rebuild {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no config file named {name:?} at {path}")]
    Name { name: String, path: PathBuf },

    #[error("config file {path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {src} to {dst}: {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config record is missing field {0:?}")]
    IncompleteRecord(&'static str),

    #[error("could not determine base directory: {0}")]
    BaseDir(String),

    #[error(transparent)]
    Parse(#[from] IniError),
}

impl ConfigError {
    /// The underlying I/O error, for the variants that carry one.
    pub fn io_source(&self) -> Option<&std::io::Error> {
        match self {
            Self::Access { source, .. }
            | Self::Backup { source, .. }
            | Self::Rebuild { source, .. }
            | Self::Copy { source, .. }
            | Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn ini_error_display() {
        let err = IniError::MissingSectionHeader {
            path: PathBuf::from("/tmp/wrong_config.ini"),
            line: 1,
            content: "id = 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("no section headers"));
        assert!(msg.contains("/tmp/wrong_config.ini"));
        assert!(msg.contains("line: 1"));

        let err = IniError::NoSection("database".into());
        assert_eq!(err.to_string(), "no section: \"database\"");

        let err = IniError::InvalidOption {
            key: "a=b".into(),
            reason: "key contains a delimiter",
        };
        assert_eq!(
            err.to_string(),
            "cannot store option \"a=b\": key contains a delimiter"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Name {
            name: "example_config.ini".into(),
            path: PathBuf::from("/tmp/fixtures/example_config.ini"),
        };
        assert_eq!(
            err.to_string(),
            "no config file named \"example_config.ini\" at /tmp/fixtures/example_config.ini"
        );

        let err = ConfigError::IncompleteRecord("level");
        assert_eq!(err.to_string(), "config record is missing field \"level\"");
    }

    #[test]
    fn config_error_from_ini_is_transparent() {
        let ini = IniError::NoSection("database".into());
        let expected = ini.to_string();
        let err: ConfigError = ini.into();
        assert!(matches!(err, ConfigError::Parse(IniError::NoSection(_))));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn io_source_only_on_io_variants() {
        let err = ConfigError::Access {
            path: PathBuf::from("config.ini"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.io_source().map(io::Error::kind),
            Some(io::ErrorKind::PermissionDenied)
        );
        assert!(err.to_string().contains("denied"));

        let err = ConfigError::Decode {
            path: PathBuf::from("config.ini"),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert_eq!(
            err.io_source().map(io::Error::kind),
            Some(io::ErrorKind::InvalidData)
        );

        let err = ConfigError::IncompleteRecord("id");
        assert!(err.io_source().is_none());
    }
}
