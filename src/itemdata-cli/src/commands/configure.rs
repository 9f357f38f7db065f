//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up itemdata CLI defaults.

use crate::cli::OutputFormat;
use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
pub fn handle(format: Option<OutputFormat>, log_level: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if !apply(&mut config, format, log_level) {
        show_usage();
        return Ok(());
    }

    let path = config.save()?;
    println!("Config saved to: {}", path.display());
    show_config(&config);

    Ok(())
}

/// Apply requested changes, returning false when nothing was requested
fn apply(config: &mut Config, format: Option<OutputFormat>, log_level: Option<String>) -> bool {
    let changed = format.is_some() || log_level.is_some();
    if let Some(format) = format {
        config.format = Some(format);
    }
    if let Some(level) = log_level {
        config.log_level = Some(level);
    }
    changed
}

fn show_config(config: &Config) {
    match config.format {
        Some(OutputFormat::Json) => println!("Format:    json"),
        Some(OutputFormat::Text) => println!("Format:    text"),
        None => println!("Format:    text (default)"),
    }
    match &config.log_level {
        Some(level) => println!("Log level: {}", level),
        None => println!("Log level: warn (default)"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

fn show_usage() {
    println!("Usage: itemdata configure --format json");
    println!("   or: itemdata configure --log-level info");
    println!("   or: itemdata configure --show");
    println!();
    println!("RUST_LOG overrides the configured log level.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_nothing() {
        let mut config = Config::default();
        assert!(!apply(&mut config, None, None));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut config = Config {
            format: Some(OutputFormat::Json),
            log_level: None,
        };
        assert!(apply(&mut config, None, Some("debug".to_string())));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }
}
