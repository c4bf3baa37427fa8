//! Core [`ConfigHandler`] implementation.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use inikeep_common::ConfigError;
use tracing::{debug, info};

use super::files::{copy_text, read_for_update, write_atomic};
use super::paths::{backup_path, default_base_dir, resolve};
use super::record::{flatten, Record};
use super::{
    COPY_SUCCESS, DEFAULT_CONFIG_NAME, REBUILD_SUCCESS, TEMPLATE_NAME, WRITE_COMPLETED,
};
use crate::ini::IniDocument;
use crate::template::default_template;

/// Handles one INI config file.
///
/// The file lives at `root_directory/config_name`, where a missing or
/// relative `root_directory` is resolved against the handler's base
/// directory. Nothing is cached between calls: every read parses the file
/// again and every write serializes a fresh snapshot.
#[derive(Debug, Clone)]
pub struct ConfigHandler {
    base_dir: PathBuf,
    root_directory: Option<PathBuf>,
    config_name: String,
    file_path: PathBuf,
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl ConfigHandler {
    /// Handler rooted at [`default_base_dir`].
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::with_base_dir(default_base_dir()?))
    }

    /// Handler rooted at `base_dir`. Does not touch the disk.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let file_path = resolve(&base_dir, DEFAULT_CONFIG_NAME, None);
        Self {
            base_dir,
            root_directory: None,
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            file_path,
        }
    }

    /// Aim the handler at `root_directory/config_name` without reading it.
    ///
    /// Unlike the setters this accepts a missing or corrupt file, which is
    /// what [`rebuild_config`](Self::rebuild_config) is for.
    pub fn with_target(
        mut self,
        root_directory: Option<PathBuf>,
        config_name: impl Into<String>,
    ) -> Self {
        self.config_name = config_name.into();
        self.file_path = resolve(&self.base_dir, &self.config_name, root_directory.as_deref());
        self.root_directory = root_directory;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn root_directory(&self) -> Option<&Path> {
        self.root_directory.as_deref()
    }

    /// Point the handler at another directory.
    ///
    /// The config file is re-resolved and parsed before anything changes;
    /// if that fails the handler keeps its previous directory.
    pub fn set_root_directory(&mut self, directory: Option<PathBuf>) -> Result<(), ConfigError> {
        self.set_configparser(&self.config_name, directory.as_deref())?;
        self.file_path = self.search_config(&self.config_name, directory.as_deref());
        self.root_directory = directory;
        Ok(())
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// Switch to another file name in the current directory.
    ///
    /// Same contract as [`set_root_directory`](Self::set_root_directory):
    /// parse errors for the new file are returned and the handler stays as
    /// it was.
    pub fn set_config_name(&mut self, name: impl Into<String>) -> Result<(), ConfigError> {
        let name = name.into();
        self.set_configparser(&name, self.root_directory())?;
        self.file_path = self.search_config(&name, self.root_directory());
        self.config_name = name;
        Ok(())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Full path of `name` inside `directory`, or inside the base
    /// directory when `directory` is `None`.
    pub fn search_config(&self, name: &str, directory: Option<&Path>) -> PathBuf {
        let path = resolve(&self.base_dir, name, directory);
        debug!(name, path = %path.display(), "resolved config path");
        path
    }

    /// Resolve and parse `name` in `directory`.
    ///
    /// No file under that name (or something that is not a file) is a
    /// [`ConfigError::Name`]. A file that exists but cannot be opened is
    /// [`ConfigError::Access`], and one that is not UTF-8 is
    /// [`ConfigError::Decode`]. Content errors come back as
    /// [`ConfigError::Parse`] with the codec's own error inside.
    pub fn set_configparser(
        &self,
        name: &str,
        directory: Option<&Path>,
    ) -> Result<IniDocument, ConfigError> {
        let path = self.search_config(name, directory);
        let missing = || ConfigError::Name {
            name: name.to_string(),
            path: path.clone(),
        };
        if path.exists() && !path.is_file() {
            debug!(path = %path.display(), "config path is not a file");
            return Err(missing());
        }

        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => missing(),
            io::ErrorKind::InvalidData => ConfigError::Decode {
                path: path.clone(),
                source: e,
            },
            _ => ConfigError::Access {
                path: path.clone(),
                source: e,
            },
        })?;
        let document = IniDocument::parse(&text, &path)?;
        info!("loaded config from {}", path.display());
        Ok(document)
    }

    /// Parse the current config file.
    pub fn load(&self) -> Result<IniDocument, ConfigError> {
        self.set_configparser(&self.config_name, self.root_directory())
    }

    /// Section names of the current file in file order.
    pub fn sections(&self) -> Result<Vec<String>, ConfigError> {
        let document = self.load()?;
        Ok(document.sections().into_iter().map(String::from).collect())
    }

    /// One value from the current file.
    pub fn get(&self, section: &str, key: &str) -> Result<String, ConfigError> {
        let document = self.load()?;
        Ok(document.get(section, key)?.to_string())
    }

    /// The record section of the current file as a plain map.
    ///
    /// The record section is the first one holding all of `id`, `type`,
    /// `name` and `level`; failing that, the first holding any of them.
    /// Empty when no section qualifies.
    pub fn to_dict(&self) -> Result<BTreeMap<String, String>, ConfigError> {
        let document = self.load()?;
        Ok(flatten(&document))
    }

    /// Read the record from the current file.
    pub fn read(&self) -> Result<Record, ConfigError> {
        Record::from_map(&self.to_dict()?)
    }

    /// Set `section[key] = value` in the current file and rewrite it.
    ///
    /// With `backup`, the untouched file is copied aside first and the
    /// backup path is returned. The section has to exist already.
    pub fn write(
        &self,
        section: &str,
        key: &str,
        value: &str,
        backup: bool,
    ) -> Result<(&'static str, Option<PathBuf>), ConfigError> {
        let path = self.search_config(&self.config_name, self.root_directory());
        let access = |source: io::Error| ConfigError::Access {
            path: path.clone(),
            source,
        };

        let text = read_for_update(&path).map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => ConfigError::Decode {
                path: path.clone(),
                source,
            },
            _ => access(source),
        })?;
        let updated = IniDocument::parse(&text, &path)?.with_value(section, key, value)?;

        let backup_file = if backup {
            let (_, file) = self.backup_config_file()?;
            Some(file)
        } else {
            None
        };

        write_atomic(&path, &updated.to_string()).map_err(access)?;
        info!(section, key, "updated {}", path.display());
        Ok((WRITE_COMPLETED, backup_file))
    }

    /// Copy the current file to `<name>.BAK<timestamp>` next to it.
    ///
    /// Returns a status line and the backup path. The handler does not
    /// remove backups.
    pub fn backup_config_file(&self) -> Result<(String, PathBuf), ConfigError> {
        let source = self.file_path();
        let destination = backup_path(source);

        copy_text(source, &destination).map_err(|e| ConfigError::Backup {
            path: source.to_path_buf(),
            source: e,
        })?;

        let message = format!(
            "Backup {} to: {}",
            self.config_name,
            destination.display()
        );
        info!("{message}");
        Ok((message, destination))
    }

    /// Copy the text of `src` into `dst`.
    pub fn copy_string(src: &Path, dst: &Path) -> Result<&'static str, ConfigError> {
        copy_text(src, dst).map_err(|source| ConfigError::Copy {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source,
        })?;
        debug!(src = %src.display(), dst = %dst.display(), "copied config text");
        Ok(COPY_SUCCESS)
    }

    /// Overwrite the current file with the bundled template from the base
    /// directory.
    pub fn rebuild_config(&self) -> Result<&'static str, ConfigError> {
        let template = self.search_config(TEMPLATE_NAME, None);
        let target = self.file_path();
        let rebuild = |source: io::Error| ConfigError::Rebuild {
            path: target.to_path_buf(),
            source,
        };

        if template.as_path() == target {
            return Err(rebuild(io::Error::new(
                io::ErrorKind::InvalidInput,
                "config file is the template itself",
            )));
        }

        copy_text(&template, target).map_err(rebuild)?;
        info!(
            "rebuilt {} from {}",
            target.display(),
            template.display()
        );
        Ok(REBUILD_SUCCESS)
    }

    /// Write the bundled template into the base directory unless one is
    /// already there. Returns the template path.
    pub fn install_template(&self) -> Result<PathBuf, ConfigError> {
        let path = self.search_config(TEMPLATE_NAME, None);
        if path.exists() {
            debug!(path = %path.display(), "template already present");
            return Ok(path);
        }

        let rebuild = |source: io::Error| ConfigError::Rebuild {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.base_dir).map_err(rebuild)?;
        fs::write(&path, default_template()).map_err(rebuild)?;

        info!("created template at {}", path.display());
        Ok(path)
    }
}

impl fmt::Display for ConfigHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config: {}", self.file_path.display())
    }
}
