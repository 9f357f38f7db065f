//! Classify command handler

use anyhow::Result;
use itemdata::{classify, is_fighter, is_ship, is_srv, is_suit, is_taxi, is_vanity, ItemKind};
use serde::Serialize;

use super::print_json;
use crate::cli::OutputFormat;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Serialize)]
struct Classification<'a> {
    id: &'a str,
    kind: ItemKind,
    ship: bool,
    srv: bool,
    fighter: bool,
    suit: bool,
    taxi: bool,
    vanity: bool,
}

impl<'a> Classification<'a> {
    fn of(id: &'a str) -> Self {
        Self {
            id,
            kind: classify(id),
            ship: is_ship(id),
            srv: is_srv(id),
            fighter: is_fighter(id),
            suit: is_suit(id),
            taxi: is_taxi(id),
            vanity: is_vanity(id),
        }
    }

    fn flags(&self) -> Vec<&'static str> {
        [
            (self.ship, "ship"),
            (self.srv, "srv"),
            (self.fighter, "fighter"),
            (self.suit, "suit"),
            (self.taxi, "taxi"),
            (self.vanity, "vanity"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Handle the classify command
pub fn handle(ids: &[String], format: OutputFormat) -> Result<()> {
    let results: Vec<Classification> = ids.iter().map(|id| Classification::of(id)).collect();

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            let width = ids.iter().map(String::len).max().unwrap_or(0);
            for c in &results {
                println!(
                    "{:width$}  {:<8} [{}]",
                    c.id,
                    c.kind.as_str(),
                    c.flags().join(", "),
                    width = width
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags() {
        assert_eq!(Classification::of("testbuggy").flags(), vec!["srv"]);
        assert_eq!(Classification::of("paintjob_adder_1").flags(), vec!["ship", "vanity"]);
        assert!(Classification::of("").flags().is_empty());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Classification::of("paintjob_adder_1").kind, ItemKind::Vanity);
        assert_eq!(Classification::of("flightsuit").kind, ItemKind::Suit);
    }
}
