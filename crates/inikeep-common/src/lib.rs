pub mod errors;

pub use errors::{ConfigError, IniError};

pub type Result<T> = std::result::Result<T, ConfigError>;
