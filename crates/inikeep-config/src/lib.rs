//! INI configuration file handling.
//!
//! Locates one sectioned key/value file, reads its channel record, writes
//! single values back with optional timestamped backups, and restores the
//! file from a bundled template.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inikeep_config::ConfigHandler;
//!
//! let handler = ConfigHandler::new().expect("no base directory");
//! let record = handler.read().expect("failed to read config");
//! println!("{} ({})", record.name, record.level);
//!
//! let (status, backup) = handler
//!     .write("database", "url", "www.test.ru", true)
//!     .expect("failed to write config");
//! println!("{status}, backup at {backup:?}");
//! ```

pub mod handler;
pub mod ini;
pub mod template;

pub use handler::{ConfigHandler, Record};
pub use ini::{IniDocument, Section};
pub use inikeep_common::{ConfigError, IniError};
