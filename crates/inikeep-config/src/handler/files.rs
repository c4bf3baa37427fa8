//! Raw file operations shared by copy, backup, rebuild and write.
//!
//! Everything here returns plain `io::Result`; callers decide which
//! [`ConfigError`](inikeep_common::ConfigError) stage a failure belongs to.

use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use super::paths::tmp_path;

/// Copy the text of `src` into `dst`.
///
/// `src` is read completely before `dst` is opened, so a failed read
/// leaves the destination untouched.
pub(super) fn copy_text(src: &Path, dst: &Path) -> io::Result<()> {
    let content = fs::read_to_string(src)?;
    fs::write(dst, content)
}

/// Open `path` for read and write and return its text.
///
/// Opening with write access up front makes a read-only or unreadable file
/// fail here, before anything is backed up or rewritten.
pub(super) fn read_for_update(path: &Path) -> io::Result<String> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

/// Replace the contents of `path`: write a `.tmp` sibling carrying the
/// original's permissions, then rename it over the original.
///
/// Symlinks are written through so the link stays in place. When the
/// sibling cannot be staged (read-only directory) or renamed, the file is
/// rewritten in place instead.
pub(super) fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let is_symlink = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink {
        return fs::write(path, content);
    }

    let tmp = tmp_path(path);
    if let Err(e) = stage(&tmp, path, content) {
        tracing::warn!(
            "could not stage {} ({e}), falling back to direct write",
            tmp.display()
        );
        let _ = fs::remove_file(&tmp);
        return fs::write(path, content);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        // Rename failed, try direct write as fallback (Windows compat)
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = fs::remove_file(&tmp);
        fs::write(path, content)?;
    }
    Ok(())
}

fn stage(tmp: &Path, original: &Path, content: &str) -> io::Result<()> {
    fs::write(tmp, content)?;
    let permissions = fs::metadata(original)?.permissions();
    fs::set_permissions(tmp, permissions)
}
