//! Handler functions for `larder config` subcommands.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::LarderConfig;
use crate::error::{CliError, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => {
            let config = LarderConfig::load(config_path)?;
            cmd_config_show(&config, out)
        }
        ConfigAction::Get { key } => {
            let config = LarderConfig::load(config_path)?;
            cmd_config_get(&config, &key, out)
        }
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init(target, force, out)
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>, out: &mut impl Write) -> Result<()> {
    let path = LarderConfig::resolve_config_path(config_path).ok_or_else(|| {
        CliError::config("Could not determine config directory for this platform")
    })?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        tracing::info!(
            path = %path.display(),
            "Config file does not exist; run `larder config init` to create it"
        );
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn cmd_config_show(config: &LarderConfig, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Print one configuration value by dotted key.
pub fn cmd_config_get(config: &LarderConfig, key: &str, out: &mut impl Write) -> Result<()> {
    let value = toml::Value::try_from(config).map_err(|e| CliError::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(val) => {
            writeln!(out, "{}", format_toml_value(val))?;
            Ok(())
        }
        None => Err(CliError::config(format!(
            "Key '{key}' not found in configuration"
        ))),
    }
}

/// Write a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool, out: &mut impl Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => LarderConfig::default_config_path()
            .ok_or_else(|| CliError::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(CliError::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::io_with_path(e, parent))?;
    }

    let toml_str = LarderConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| CliError::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

// ============================================================================
// TOML helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
