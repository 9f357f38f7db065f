//! Ship command handler

use anyhow::{bail, Result};
use itemdata::{ship_by_display_name, ship_properties, ShipProperty, ShipPropertySet};
use std::collections::BTreeMap;

use super::print_json;
use crate::cli::OutputFormat;

/// Resolve a journal id or a display name to a hull
fn resolve(name: &str) -> Option<&'static ShipPropertySet> {
    ship_properties(name).or_else(|| ship_by_display_name(name).and_then(ship_properties))
}

/// Handle the ship command
pub fn show(name: &str, property: Option<&str>, format: OutputFormat) -> Result<()> {
    let Some(set) = resolve(name) else {
        bail!("Unknown ship '{}'", name);
    };

    if let Some(property) = property {
        let property: ShipProperty = property.parse()?;
        let Some(value) = set.get(property) else {
            bail!("Ship '{}' has no {}", name, property);
        };
        return match format {
            OutputFormat::Json => print_json(&BTreeMap::from([(property.as_str(), value)])),
            OutputFormat::Text => {
                println!("{}", value);
                Ok(())
            }
        };
    }

    match format {
        OutputFormat::Json => print_json(set),
        OutputFormat::Text => {
            for (property, value) in set.iter() {
                println!("{:<14}{}", format!("{}:", property), value);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_id_or_display_name() {
        assert_eq!(resolve("krait_mkii"), resolve("Krait Mk II"));
        assert!(resolve("Krait Mk II").is_some());
        assert!(resolve("Millennium Falcon").is_none());
    }

    #[test]
    fn test_unknown_ship_is_an_error() {
        assert!(show("no_such_ship", None, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_unknown_property_is_an_error() {
        let err = show("adder", Some("wingspan"), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("wingspan"));
    }

    #[test]
    fn test_missing_property_is_an_error() {
        assert!(show("testbuggy", Some("hull_cost"), OutputFormat::Text).is_err());
        assert!(show("adder", Some("hull_cost"), OutputFormat::Json).is_ok());
    }
}
