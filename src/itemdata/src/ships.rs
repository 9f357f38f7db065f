//! Ship hull properties
//!
//! Each known hull carries a fixed set of [`ShipProperty`] values. Lookups
//! are case-insensitive and check the shipyard table before the table of
//! fighters and SRVs. An unknown hull is an expected outcome and comes back
//! as `None`.

mod hulls;

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::humanize::humanize;
use hulls::{AUXILIARY, SHIPYARD};

/// Properties recorded for a hull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipProperty {
    Identifier,
    HullMass,
    DisplayName,
    Manufacturer,
    Speed,
    Boost,
    HullCost,
    Class,
}

impl ShipProperty {
    pub const ALL: [ShipProperty; 8] = [
        ShipProperty::Identifier,
        ShipProperty::HullMass,
        ShipProperty::DisplayName,
        ShipProperty::Manufacturer,
        ShipProperty::Speed,
        ShipProperty::Boost,
        ShipProperty::HullCost,
        ShipProperty::Class,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShipProperty::Identifier => "identifier",
            ShipProperty::HullMass => "hull_mass",
            ShipProperty::DisplayName => "display_name",
            ShipProperty::Manufacturer => "manufacturer",
            ShipProperty::Speed => "speed",
            ShipProperty::Boost => "boost",
            ShipProperty::HullCost => "hull_cost",
            ShipProperty::Class => "class",
        }
    }
}

impl fmt::Display for ShipProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipProperty {
    type Err = CatalogError;

    /// Accepts `hull_mass`, `hull-mass` and `HullMass` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        ShipProperty::ALL
            .into_iter()
            .find(|p| p.as_str().replace('_', "") == wanted)
            .ok_or_else(|| CatalogError::UnknownProperty(s.to_string()))
    }
}

impl Serialize for ShipProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single property value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipValue {
    Str(&'static str),
    Int(i64),
    Double(f64),
}

impl ShipValue {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ShipValue::Str(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ShipValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ShipValue::Double(d) => Some(*d),
            ShipValue::Int(i) => Some(*i as f64),
            ShipValue::Str(_) => None,
        }
    }
}

impl fmt::Display for ShipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipValue::Str(s) => f.write_str(s),
            ShipValue::Int(i) => write!(f, "{}", i),
            ShipValue::Double(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for ShipValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShipValue::Str(s) => serializer.serialize_str(s),
            ShipValue::Int(i) => serializer.serialize_i64(*i),
            ShipValue::Double(d) => serializer.serialize_f64(*d),
        }
    }
}

/// Property values for one hull, indexed by [`ShipProperty`]
#[derive(Debug, Clone, PartialEq)]
pub struct ShipPropertySet {
    values: [Option<ShipValue>; 8],
}

impl ShipPropertySet {
    pub(crate) const fn hull(
        identifier: &'static str,
        hull_mass: f64,
        name: &'static str,
        manufacturer: &'static str,
        speed: i64,
        boost: i64,
        cost: i64,
        class: i64,
    ) -> Self {
        Self {
            values: [
                Some(ShipValue::Str(identifier)),
                Some(ShipValue::Double(hull_mass)),
                Some(ShipValue::Str(name)),
                Some(ShipValue::Str(manufacturer)),
                Some(ShipValue::Int(speed)),
                Some(ShipValue::Int(boost)),
                Some(ShipValue::Int(cost)),
                Some(ShipValue::Int(class)),
            ],
        }
    }

    /// A fighter or SRV: same shape as a hull but never sold on its own.
    pub(crate) const fn auxiliary(
        identifier: &'static str,
        hull_mass: f64,
        name: &'static str,
        manufacturer: &'static str,
        speed: i64,
        boost: i64,
        class: i64,
    ) -> Self {
        Self {
            values: [
                Some(ShipValue::Str(identifier)),
                Some(ShipValue::Double(hull_mass)),
                Some(ShipValue::Str(name)),
                Some(ShipValue::Str(manufacturer)),
                Some(ShipValue::Int(speed)),
                Some(ShipValue::Int(boost)),
                None,
                Some(ShipValue::Int(class)),
            ],
        }
    }

    pub fn get(&self, property: ShipProperty) -> Option<&ShipValue> {
        self.values[property as usize].as_ref()
    }

    /// Populated properties in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ShipProperty, &ShipValue)> + '_ {
        ShipProperty::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|v| (p, v)))
    }

    pub fn display_name(&self) -> Option<&'static str> {
        self.get(ShipProperty::DisplayName).and_then(ShipValue::as_str)
    }
}

impl Serialize for ShipPropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (property, value) in self.iter() {
            map.serialize_entry(property.as_str(), value)?;
        }
        map.end()
    }
}

/// Look up a hull by journal id, case-insensitively.
pub fn ship_properties(name: &str) -> Option<&'static ShipPropertySet> {
    let key = name.to_ascii_lowercase();
    SHIPYARD
        .get(key.as_str())
        .or_else(|| AUXILIARY.get(key.as_str()))
}

/// One property of a hull, `None` when the hull or the property is absent.
pub fn ship_property(name: &str, property: ShipProperty) -> Option<&'static ShipValue> {
    ship_properties(name).and_then(|set| set.get(property))
}

/// Display name of a hull, or the humanized id when the hull is unknown.
pub fn ship_display_name(name: &str) -> String {
    ship_properties(name)
        .and_then(ShipPropertySet::display_name)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(name))
}

/// Reverse lookup: journal id for a display name such as `"Krait Mk II"`.
pub fn ship_by_display_name(display: &str) -> Option<&'static str> {
    SHIPYARD
        .entries()
        .chain(AUXILIARY.entries())
        .find(|(_, set)| {
            set.display_name()
                .is_some_and(|n| n.eq_ignore_ascii_case(display))
        })
        .map(|(key, _)| *key)
}

/// All shipyard hulls sorted by journal id.
pub fn all_ships() -> Vec<(&'static str, &'static ShipPropertySet)> {
    let mut ships: Vec<_> = SHIPYARD.entries().map(|(k, v)| (*k, v)).collect();
    ships.sort_by_key(|(k, _)| *k);
    ships
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(ship_properties("ADDER"), ship_properties("adder"));
        assert!(ship_properties("Adder").is_some());
        assert!(ship_properties("no_such_ship").is_none());
        assert!(ship_properties("").is_none());
    }

    #[test]
    fn test_adder_values() {
        let adder = ship_properties("adder").unwrap();
        assert_eq!(adder.get(ShipProperty::DisplayName), Some(&ShipValue::Str("Adder")));
        assert_eq!(
            adder.get(ShipProperty::Manufacturer).and_then(ShipValue::as_str),
            Some("Zorgon Peterson")
        );
        assert_eq!(adder.get(ShipProperty::HullMass).and_then(ShipValue::as_f64), Some(35.0));
        assert_eq!(adder.get(ShipProperty::Speed).and_then(ShipValue::as_int), Some(220));
        assert_eq!(adder.get(ShipProperty::Class).and_then(ShipValue::as_int), Some(1));
    }

    #[test]
    fn test_auxiliary_table_has_no_cost() {
        let srv = ship_properties("TestBuggy").unwrap();
        assert_eq!(srv.display_name(), Some("Scarab SRV"));
        assert!(srv.get(ShipProperty::HullCost).is_none());
        assert!(ship_property("federation_fighter", ShipProperty::HullCost).is_none());
        assert!(ship_property("federation_fighter", ShipProperty::Speed).is_some());
    }

    #[test]
    fn test_ship_property() {
        assert_eq!(
            ship_property("anaconda", ShipProperty::HullCost).and_then(ShipValue::as_int),
            Some(146_969_450)
        );
        assert!(ship_property("no_such_ship", ShipProperty::Speed).is_none());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(ship_display_name("empire_trader"), "Imperial Clipper");
        assert_eq!(ship_display_name("mystery_hull"), "Mystery Hull");
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(ship_by_display_name("Krait Mk II"), Some("krait_mkii"));
        assert_eq!(ship_by_display_name("type-10 defender"), Some("type9_military"));
        assert_eq!(ship_by_display_name("Scarab SRV"), Some("testbuggy"));
        assert_eq!(ship_by_display_name("Millennium Falcon"), None);
    }

    #[test]
    fn test_property_parsing() {
        assert_eq!("hull_mass".parse(), Ok(ShipProperty::HullMass));
        assert_eq!("hull-cost".parse(), Ok(ShipProperty::HullCost));
        assert_eq!("DisplayName".parse(), Ok(ShipProperty::DisplayName));
        assert_eq!(
            "wingspan".parse::<ShipProperty>(),
            Err(CatalogError::UnknownProperty("wingspan".into()))
        );
    }

    #[test]
    fn test_iter_skips_missing() {
        let fighter = ship_properties("empire_fighter").unwrap();
        assert_eq!(fighter.iter().count(), 7);
        let hull = ship_properties("python").unwrap();
        assert_eq!(hull.iter().count(), 8);
    }

    #[test]
    fn test_all_ships_sorted_and_classified() {
        let ships = all_ships();
        assert!(ships.len() >= 40);
        assert!(ships.windows(2).all(|w| w[0].0 < w[1].0));
        for (id, _) in ships {
            assert!(crate::is_ship(id), "{} should classify as a ship", id);
        }
    }

    #[test]
    fn test_serialize_as_map() {
        let json = serde_json::to_value(ship_properties("hauler").unwrap()).unwrap();
        assert_eq!(json["display_name"], "Hauler");
        assert_eq!(json["hull_cost"], 8160);
        let json = serde_json::to_value(ship_properties("testbuggy").unwrap()).unwrap();
        assert!(json.get("hull_cost").is_none());
    }
}
