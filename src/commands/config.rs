//! Configuration commands.
//!
//! - `config set`: Set a configuration value
//! - `config show`: Display current configuration

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, OutputOptions};
use crate::accordion::AccordionMode;
use crate::config::Config;
use crate::error::{Result, TicketDeskError};
use crate::paths::config_path;

/// Keys accepted by `config set`
pub const CONFIG_KEYS: &[&str] = &["mode", "query", "source.path", "source.latency_ms"];

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;

    let json_output = json!({
        "mode": config.mode,
        "query": config.query,
        "source": {
            "path": config.source.path,
            "latency_ms": config.source.latency_ms,
        },
        "config_file": config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}: {}\n", "mode".cyan(), config.mode));
    if config.query.is_empty() {
        text_output.push_str(&format!("{}: {}\n", "query".cyan(), "none".dimmed()));
    } else {
        text_output.push_str(&format!("{}: {}\n", "query".cyan(), config.query));
    }

    text_output.push_str(&format!("{}:\n", "source".cyan()));
    match &config.source.path {
        Some(path) => text_output.push_str(&format!("  path: {}\n", path.display())),
        None => text_output.push_str(&format!("  path: {}\n", "built-in demo tickets".dimmed())),
    }
    text_output.push_str(&format!("  latency_ms: {}\n", config.source.latency_ms));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    apply_config_value(&mut config, key, value)?;
    config.save()?;

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    });
    let text_output = format!("Set {} to {}", key.cyan(), value);

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

fn apply_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "mode" => config.mode = value.parse::<AccordionMode>()?,
        "query" => config.query = value.to_string(),
        "source.path" => {
            config.source.path = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        "source.latency_ms" => {
            config.source.latency_ms = value.parse().map_err(|_| {
                TicketDeskError::Config(format!(
                    "invalid value '{value}' for source.latency_ms. Expected a number of milliseconds"
                ))
            })?
        }
        _ => {
            return Err(TicketDeskError::Config(format!(
                "unknown config key '{key}'. Valid keys: {}",
                CONFIG_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}
