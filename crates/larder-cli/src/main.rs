//! Larder CLI
//!
//! Command-line front end for the Larder recipe store.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod config_handlers;
mod error;

use anyhow::Result;
use clap::Parser;
use larder_storage::{FileStorage, RecipeStore};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::LarderConfig;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = LarderConfig::load(args.config.as_deref())?;

    // Initialize logging
    let level = match args.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let open_store = || -> error::Result<RecipeStore<FileStorage>> {
        let storage = config.open_storage()?;
        tracing::debug!(path = %storage.path().display(), "Opened recipe storage");
        Ok(RecipeStore::new(storage))
    };

    match args.command {
        Command::List { json } => commands::cmd_list(&open_store()?, json, &mut out)?,
        Command::Show { id, json } => commands::cmd_show(&open_store()?, &id, json, &mut out)?,
        Command::Add(fields) => commands::cmd_add(&open_store()?, &fields.to_draft(), &mut out)?,
        Command::Edit { id, fields } => {
            commands::cmd_edit(&open_store()?, &id, &fields.to_draft(), &mut out)?
        }
        Command::Delete { id } => commands::cmd_delete(&open_store()?, &id, &mut out)?,
        Command::Reset { yes } => commands::cmd_reset(&open_store()?, yes, &mut out)?,
        Command::Config { action } => {
            config_handlers::handle_config_command(args.config.as_deref(), action, &mut out)?
        }
    }

    Ok(())
}
