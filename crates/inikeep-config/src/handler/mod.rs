//! The config file handler.
//!
//! [`ConfigHandler`] resolves one INI file on disk, reads it into a
//! [`Record`], writes single values back, and keeps backups and template
//! rebuilds next to the file it manages.

mod config_handler;
mod files;
mod paths;
mod record;


pub use config_handler::ConfigHandler;
pub use paths::{default_base_dir, BASE_DIR_ENV};
pub use record::Record;

/// File name the handler operates on unless told otherwise.
pub const DEFAULT_CONFIG_NAME: &str = "config.ini";

/// Bundled template used by rebuilds. Never written by the handler except
/// by [`ConfigHandler::install_template`] when it is missing.
pub const TEMPLATE_NAME: &str = "example_config.ini";

/// Inserted between the config file name and the backup token.
pub const BACKUP_SUFFIX: &str = ".BAK";

pub const WRITE_COMPLETED: &str = "Completed";
pub const COPY_SUCCESS: &str = "Copied string success";
pub const REBUILD_SUCCESS: &str = "Config rebuild success";
