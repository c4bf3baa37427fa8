//! inikeep: command-line front end for the config handler.
//!
//! Every subcommand maps onto one `ConfigHandler` operation. Errors are
//! printed to stderr and turn into a non-zero exit status.

mod cli;

use std::process::ExitCode;

use inikeep_common::ConfigError;
use inikeep_config::handler::DEFAULT_CONFIG_NAME;
use inikeep_config::ConfigHandler;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

fn main() -> ExitCode {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("inikeep=warn");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "inikeep=warn".parse().unwrap()),
            ),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn handler_for(args: &Args) -> Result<ConfigHandler, ConfigError> {
    let handler = match &args.base_dir {
        Some(dir) => ConfigHandler::with_base_dir(dir),
        None => ConfigHandler::new()?,
    };
    let name = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_NAME);
    Ok(handler.with_target(args.root.clone(), name))
}

fn run(args: Args) -> Result<(), ConfigError> {
    let handler = handler_for(&args)?;
    tracing::info!("{handler}");

    match args.command {
        Command::Read { json } => {
            let record = handler.read()?;
            if json {
                let out = serde_json::to_string_pretty(&record)
                    .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize record: {e}\"}}"));
                println!("{out}");
            } else {
                println!("id = {}", record.id);
                println!("type = {}", record.kind);
                println!("name = {}", record.name);
                println!("level = {}", record.level);
            }
        }
        Command::Get { section, key } => {
            println!("{}", handler.get(&section, &key)?);
        }
        Command::Sections => {
            for name in handler.sections()? {
                println!("{name}");
            }
        }
        Command::Write {
            section,
            key,
            value,
            backup,
        } => {
            let (status, backup) = handler.write(&section, &key, &value, backup)?;
            match backup {
                Some(path) => println!("{status} (backup: {})", path.display()),
                None => println!("{status}"),
            }
        }
        Command::Backup => {
            let (message, _) = handler.backup_config_file()?;
            println!("{message}");
        }
        Command::Rebuild => {
            println!("{}", handler.rebuild_config()?);
        }
        Command::Init => {
            let template = handler.install_template()?;
            println!("Template: {}", template.display());
            if handler.file_path().exists() {
                println!("{} already exists, left as is", handler.file_path().display());
            } else {
                println!("{}", handler.rebuild_config()?);
            }
        }
    }
    Ok(())
}
