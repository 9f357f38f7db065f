//! Identifier classification
//!
//! Journal ids carry enough structure to tell a ship from a suit, an SRV, a
//! ship-launched fighter, a taxi or a cosmetic item without consulting any
//! table. Every predicate here is case-insensitive and returns `false` for an
//! empty id.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Substrings that mark a cosmetic item
pub const VANITY_MARKERS: &[&str] = &[
    "bobble",
    "decal",
    "enginecustomisation",
    "nameplate",
    "paintjob",
    "shipkit",
    "weaponcustomisation",
    "voicepack",
    "lights",
];

/// Ship-launched fighters matched exactly; the Guardian hybrids are matched
/// by substring in [`is_fighter`].
pub const FIGHTER_IDS: &[&str] = &["federation_fighter", "empire_fighter", "independent_fighter"];

pub fn is_vanity(id: &str) -> bool {
    let id = id.to_ascii_lowercase();
    VANITY_MARKERS.iter().any(|marker| id.contains(marker))
}

pub fn is_suit(id: &str) -> bool {
    id.to_ascii_lowercase().contains("suit")
}

pub fn is_taxi(id: &str) -> bool {
    id.to_ascii_lowercase().contains("_taxi")
}

pub fn is_srv(id: &str) -> bool {
    let id = id.to_ascii_lowercase();
    id == "testbuggy" || id.contains("_srv")
}

pub fn is_fighter(id: &str) -> bool {
    let id = id.to_ascii_lowercase();
    FIGHTER_IDS.contains(&id.as_str()) || id.contains("hybrid_fighter")
}

pub fn is_srv_or_fighter(id: &str) -> bool {
    is_srv(id) || is_fighter(id)
}

/// True for any non-empty id that is not an SRV, fighter, suit or taxi.
pub fn is_ship(id: &str) -> bool {
    !id.is_empty() && !is_srv_or_fighter(id) && !is_suit(id) && !is_taxi(id)
}

pub fn is_ship_srv_or_fighter(id: &str) -> bool {
    !id.is_empty() && !is_suit(id) && !is_taxi(id)
}

/// Coarse kind of a journal id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Ship,
    Srv,
    Fighter,
    Suit,
    Taxi,
    Vanity,
    Unknown,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Ship,
        ItemKind::Srv,
        ItemKind::Fighter,
        ItemKind::Suit,
        ItemKind::Taxi,
        ItemKind::Vanity,
        ItemKind::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Ship => "ship",
            ItemKind::Srv => "srv",
            ItemKind::Fighter => "fighter",
            ItemKind::Suit => "suit",
            ItemKind::Taxi => "taxi",
            ItemKind::Vanity => "vanity",
            ItemKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::variant("item kind", s))
    }
}

/// Classify an id.
///
/// Suits and taxis are checked before SRVs and fighters, and cosmetic markers
/// before the residual ship kind, so `vanity` wins over `ship` for ids such as
/// `paintjob_adder_default`.
pub fn classify(id: &str) -> ItemKind {
    if id.is_empty() {
        ItemKind::Unknown
    } else if is_suit(id) {
        ItemKind::Suit
    } else if is_taxi(id) {
        ItemKind::Taxi
    } else if is_srv(id) {
        ItemKind::Srv
    } else if is_fighter(id) {
        ItemKind::Fighter
    } else if is_vanity(id) {
        ItemKind::Vanity
    } else {
        ItemKind::Ship
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanity() {
        assert!(is_vanity("decal_foo"));
        assert!(is_vanity("PaintJob_Adder_Default"));
        assert!(is_vanity("string_lights_coloured"));
        assert!(!is_vanity("hpt_beamlaser_fixed_small"));
        assert!(!is_vanity(""));
    }

    #[test]
    fn test_srv() {
        assert!(is_srv("TestBuggy"));
        assert!(is_srv("combat_multicrew_srv_01"));
        assert!(!is_srv("testbuggy_x"));
        assert!(!is_srv("federation_fighter"));
        assert!(!is_srv(""));
    }

    #[test]
    fn test_fighter() {
        assert!(is_fighter("federation_fighter"));
        assert!(is_fighter("Empire_Fighter"));
        assert!(is_fighter("gdn_hybrid_fighter_v2"));
        assert!(!is_fighter("federation_dropship"));
        assert!(!is_fighter(""));
    }

    #[test]
    fn test_suit_and_taxi() {
        assert!(is_suit("TacticalSuit_Class3"));
        assert!(!is_suit("cutter"));
        assert!(is_taxi("adder_taxi"));
        assert!(!is_taxi("adder"));
    }

    #[test]
    fn test_ship_is_residual() {
        assert!(is_ship("anaconda"));
        assert!(is_ship("some_future_hull"));
        assert!(!is_ship("testbuggy"));
        assert!(!is_ship("independent_fighter"));
        assert!(!is_ship("flightsuit"));
        assert!(!is_ship("adder_taxi"));
        assert!(!is_ship(""));
    }

    #[test]
    fn test_ship_srv_or_fighter() {
        assert!(is_ship_srv_or_fighter("anaconda"));
        assert!(is_ship_srv_or_fighter("testbuggy"));
        assert!(is_ship_srv_or_fighter("empire_fighter"));
        assert!(!is_ship_srv_or_fighter("utilitysuit_class1"));
        assert!(!is_ship_srv_or_fighter("adder_taxi"));
        assert!(!is_ship_srv_or_fighter(""));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), ItemKind::Unknown);
        assert_eq!(classify("explorationsuit_class2"), ItemKind::Suit);
        assert_eq!(classify("vulture_taxi"), ItemKind::Taxi);
        assert_eq!(classify("TESTBUGGY"), ItemKind::Srv);
        assert_eq!(classify("independent_fighter"), ItemKind::Fighter);
        assert_eq!(classify("voicepack_verity"), ItemKind::Vanity);
        assert_eq!(classify("python"), ItemKind::Ship);
    }

    #[test]
    fn test_item_kind_round_trip_names() {
        for kind in ItemKind::ALL {
            assert_eq!(kind.as_str().parse::<ItemKind>(), Ok(kind));
        }
        assert!("spaceship".parse::<ItemKind>().is_err());
        assert_eq!("SRV".parse::<ItemKind>(), Ok(ItemKind::Srv));
    }
}
