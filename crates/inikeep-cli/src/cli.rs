use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// inikeep: read, edit, back up and rebuild an INI config file.
#[derive(Parser, Debug)]
#[command(name = "inikeep", version, about)]
pub struct Args {
    /// Directory holding the template and the default config
    /// (defaults to $INIKEEP_HOME, then the platform config dir).
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Directory of the config file, relative to the base directory.
    #[arg(short = 'r', long)]
    pub root: Option<PathBuf>,

    /// Config file name.
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the channel record.
    Read {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print one value.
    Get { section: String, key: String },
    /// List section names in file order.
    Sections,
    /// Set one value and rewrite the file.
    Write {
        section: String,
        key: String,
        value: String,
        /// Back up the file before writing.
        #[arg(short = 'b', long)]
        backup: bool,
    },
    /// Copy the config file to a timestamped backup.
    Backup,
    /// Restore the config file from the template.
    Rebuild,
    /// Install the bundled template and build the config file from it.
    Init,
}

pub fn parse() -> Args {
    Args::parse()
}
