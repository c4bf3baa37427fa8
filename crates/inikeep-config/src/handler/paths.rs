//! Path resolution for config, template and backup files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::Local;
use inikeep_common::ConfigError;

use super::BACKUP_SUFFIX;

/// Environment variable that overrides the default base directory.
pub const BASE_DIR_ENV: &str = "INIKEEP_HOME";

/// The base directory used when none is given explicitly.
///
/// `$INIKEEP_HOME` if set and non-empty, otherwise `inikeep/` under the
/// platform config directory (`~/.config/inikeep` on Linux).
pub fn default_base_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(BASE_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::BaseDir("could not determine config directory".into()))?;
    Ok(config_dir.join("inikeep"))
}

/// Join `name` onto `directory`, or onto `base` when no directory is given.
/// Relative directories are taken relative to `base`.
pub(super) fn resolve(base: &Path, name: &str, directory: Option<&Path>) -> PathBuf {
    match directory {
        None => base.join(name),
        Some(dir) if dir.is_absolute() => dir.join(name),
        Some(dir) => base.join(dir).join(name),
    }
}

/// Sibling of `path` named `<file name>.BAK<timestamp>`.
pub(super) fn backup_path(path: &Path) -> PathBuf {
    let token = Local::now().format("%Y%m%d%H%M%S%6f");
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(format!("{BACKUP_SUFFIX}{token}"));
    path.with_file_name(name)
}

/// Sibling of `path` used for atomic rewrites.
pub(super) fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
