//! Module lookup and listing command handlers

use anyhow::Result;
use itemdata::{all_module_types, modules_of_type, ship_module, ModuleRecord};

use super::print_json;
use crate::cli::OutputFormat;

/// Handle the module command
pub fn show(id: &str, format: OutputFormat) -> Result<()> {
    let record = ship_module(id);

    match format {
        OutputFormat::Json => print_json(&record),
        OutputFormat::Text => {
            print_record(&record);
            Ok(())
        }
    }
}

fn print_record(record: &ModuleRecord) {
    println!("{}", record.name);
    println!("  Category: {}", record.category);
    if record.id >= 0 {
        println!("  Id:       {}", record.id);
    }
    println!("  Mass:     {}t", record.mass);
    println!("  Power:    {}MW", record.power);
    if let Some(info) = &record.info {
        println!("  Info:     {}", info);
    }
    if !record.is_buyable() {
        println!("  (not sold at outfitting)");
    }
}

/// Handle the types command
pub fn types(all: bool, format: OutputFormat) -> Result<()> {
    let types = all_module_types(!all);

    match format {
        OutputFormat::Json => print_json(&types),
        OutputFormat::Text => {
            for name in types {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

/// Handle the list-modules command
pub fn list(category: &str, format: OutputFormat) -> Result<()> {
    let modules = modules_of_type(category);

    if modules.is_empty() {
        eprintln!("No modules in category '{}'", category);
        eprintln!("\nRun 'itemdata types --all' to see every category");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            let map: std::collections::BTreeMap<_, _> = modules.into_iter().collect();
            print_json(&map)
        }
        OutputFormat::Text => {
            let width = modules.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
            for (id, record) in &modules {
                println!("{:width$}  {}", id, record.name, width = width);
            }
            println!("\n{} modules", modules.len());
            Ok(())
        }
    }
}
