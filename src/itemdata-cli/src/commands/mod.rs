//! Command handlers for itemdata CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod classify;
pub mod configure;
pub mod lookup;
pub mod module;
pub mod ship;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a record as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
