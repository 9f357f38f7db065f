//! Ship module lookup
//!
//! Two static tables answer most queries: the outfitting table and a curated
//! table of items outfitting never lists. Anything else is synthesized from
//! its journal id and remembered in a process-wide cache, so every id maps
//! to exactly one record for the life of the process.

mod curated;
mod outfitting;

use dashmap::DashMap;
use log::{info, trace};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::classify::is_vanity;
use crate::humanize::humanize;
use curated::CURATED;
use outfitting::OUTFITTING;

/// Category given to ids no table knows
pub const UNKNOWN_MODULE: &str = "Unknown Module";

/// Category given to cosmetic items
pub const VANITY_ITEM: &str = "Vanity Item";

/// Categories that cannot be bought from an outfitting service
pub const NON_BUYABLE: &[&str] = &[VANITY_ITEM, "Cockpit", "Cargo Bay Door", "Wear and Tear"];

/// A ship module
///
/// `id` is the numeric outfitting id, or -1 when the module has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRecord {
    pub id: i64,
    pub mass: f64,
    pub power: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Cow<'static, str>>,
    pub name: Cow<'static, str>,
    pub category: Cow<'static, str>,
}

impl ModuleRecord {
    pub(crate) const fn fixed(
        id: i64,
        mass: f64,
        power: f64,
        info: Option<&'static str>,
        name: &'static str,
        category: &'static str,
    ) -> Self {
        let info = match info {
            Some(s) => Some(Cow::Borrowed(s)),
            None => None,
        };
        Self {
            id,
            mass,
            power,
            info,
            name: Cow::Borrowed(name),
            category: Cow::Borrowed(category),
        }
    }

    pub fn is_buyable(&self) -> bool {
        !NON_BUYABLE.contains(&self.category.as_ref())
    }
}

static SYNTHESIZED: Lazy<DashMap<String, ModuleRecord>> = Lazy::new(DashMap::new);

/// Build a record for an id no table knows.
fn synthesize(key: &str) -> ModuleRecord {
    let label = key
        .replace("weaponcustomisation", "WeaponCustomisation")
        .replace("enginecustomisation", "EngineCustomisation")
        .replace("testbuggy", "SRV");
    let category = if is_vanity(key) { VANITY_ITEM } else { UNKNOWN_MODULE };

    info!("unknown module {:?}, synthesized as {}", key, category);

    ModuleRecord {
        id: -1,
        mass: 0.0,
        power: 0.0,
        info: None,
        name: Cow::Owned(humanize(&label)),
        category: Cow::Borrowed(category),
    }
}

/// Look up a module in the static tables only.
pub fn try_ship_module(id: &str) -> Option<&'static ModuleRecord> {
    let key = id.to_ascii_lowercase();
    OUTFITTING
        .get(key.as_str())
        .or_else(|| CURATED.get(key.as_str()))
}

/// Look up a module by journal id, case-insensitively.
///
/// Never fails. Unknown ids get a synthesized record which is cached, so
/// repeated and concurrent queries for the same id return equal records.
pub fn ship_module(id: &str) -> ModuleRecord {
    if let Some(record) = try_ship_module(id) {
        return record.clone();
    }

    let key = id.to_ascii_lowercase();
    if let Some(hit) = SYNTHESIZED.get(&key) {
        trace!("synthesized module cache hit for {:?}", key);
        return hit.value().clone();
    }

    SYNTHESIZED
        .entry(key.clone())
        .or_insert_with(|| synthesize(&key))
        .value()
        .clone()
}

/// Number of ids synthesized so far in this process.
pub fn synthesized_count() -> usize {
    SYNTHESIZED.len()
}

fn static_records() -> impl Iterator<Item = (&'static str, &'static ModuleRecord)> {
    OUTFITTING
        .entries()
        .chain(CURATED.entries())
        .map(|(k, v)| (*k, v))
}

/// Every module category, sorted, with [`UNKNOWN_MODULE`] last.
///
/// With `remove_non_buyable` the [`NON_BUYABLE`] categories are dropped.
pub fn all_module_types(remove_non_buyable: bool) -> Vec<&'static str> {
    let categories: BTreeSet<&'static str> = static_records()
        .filter_map(|(_, record)| match &record.category {
            Cow::Borrowed(c) => Some(*c),
            Cow::Owned(_) => None,
        })
        .filter(|c| *c != UNKNOWN_MODULE)
        .collect();

    let mut types: Vec<&'static str> = categories.into_iter().collect();
    types.push(UNKNOWN_MODULE);

    if remove_non_buyable {
        types.retain(|c| !NON_BUYABLE.contains(c));
    }
    types
}

/// Static modules in a category, sorted by journal id.
pub fn modules_of_type(category: &str) -> Vec<(&'static str, &'static ModuleRecord)> {
    let mut modules: Vec<_> = static_records()
        .filter(|(_, record)| record.category.eq_ignore_ascii_case(category))
        .collect();
    modules.sort_by_key(|(key, _)| *key);
    modules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outfitting_lookup() {
        let mc = ship_module("hpt_multicannon_fixed_medium");
        assert_eq!(mc.id, 128049456);
        assert_eq!(mc.mass, 4.0);
        assert_eq!(mc.power, 0.46);
        assert_eq!(mc.name, "Multi Cannon Fixed Medium");
        assert_eq!(mc.category, "Multi Cannon");
        assert_eq!(mc.info.as_deref(), Some("Damage:2.19, DPS:15.58/s, Range:4000m"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            ship_module("Int_PowerPlant_Size2_Class1"),
            ship_module("int_powerplant_size2_class1")
        );
        assert!(try_ship_module("HPT_MULTICANNON_FIXED_MEDIUM").is_some());
    }

    #[test]
    fn test_curated_lookup() {
        let cockpit = ship_module("adder_cockpit");
        assert_eq!(cockpit.id, -1);
        assert_eq!(cockpit.category, "Cockpit");
        assert!(!cockpit.is_buyable());

        let approach = ship_module("int_planetapproachsuite");
        assert_eq!(approach.category, "Planetary Approach Suite");
        assert!(approach.is_buyable());
    }

    #[test]
    fn test_tables_do_not_overlap() {
        for (key, _) in CURATED.entries() {
            assert!(OUTFITTING.get(*key).is_none(), "{} is in both tables", key);
        }
    }

    #[test]
    fn test_keys_are_lowercase() {
        for (key, _) in static_records() {
            assert_eq!(key, key.to_ascii_lowercase());
        }
    }

    #[test]
    fn test_synthesize_unknown() {
        let record = ship_module("int_modules_test_frobnicator");
        assert_eq!(record.id, -1);
        assert_eq!(record.mass, 0.0);
        assert_eq!(record.power, 0.0);
        assert!(record.info.is_none());
        assert_eq!(record.name, "Int Modules Test Frobnicator");
        assert_eq!(record.category, UNKNOWN_MODULE);
        assert!(try_ship_module("int_modules_test_frobnicator").is_none());
    }

    #[test]
    fn test_synthesize_vanity_and_srv() {
        let paint = ship_module("weaponcustomisation_modules_test");
        assert_eq!(paint.name, "Weapon Customisation Modules Test");
        assert_eq!(paint.category, VANITY_ITEM);

        let engine = ship_module("EngineCustomisation_Modules_Test");
        assert_eq!(engine.name, "Engine Customisation Modules Test");
        assert_eq!(engine.category, VANITY_ITEM);

        let srv = ship_module("testbuggy_modules_test");
        assert_eq!(srv.name, "SRV Modules Test");
        assert_eq!(srv.category, UNKNOWN_MODULE);
    }

    #[test]
    fn test_synthesized_is_cached() {
        let first = ship_module("modules_test_cached");
        let again = ship_module("MODULES_TEST_CACHED");
        assert_eq!(first, again);
        assert!(SYNTHESIZED.contains_key("modules_test_cached"));
        assert!(!SYNTHESIZED.contains_key("MODULES_TEST_CACHED"));
        assert_eq!(SYNTHESIZED.get("modules_test_cached").map(|r| r.clone()), Some(first));
    }

    #[test]
    fn test_cache_hit_is_not_resynthesized() {
        let mut marked = synthesize("modules_test_marked");
        marked.name = Cow::Borrowed("Marked Entry");
        SYNTHESIZED.insert("modules_test_marked".to_string(), marked.clone());

        assert_eq!(ship_module("modules_test_marked"), marked);
        assert_eq!(ship_module("Modules_Test_Marked").name, "Marked Entry");
    }

    #[test]
    fn test_all_module_types() {
        let all = all_module_types(false);
        assert_eq!(all.last(), Some(&UNKNOWN_MODULE));
        assert!(all.contains(&"Cockpit"));
        assert!(all.contains(&VANITY_ITEM));
        let (sorted, last) = all.split_at(all.len() - 1);
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        assert!(!sorted.contains(&last[0]));

        let buyable = all_module_types(true);
        for excluded in NON_BUYABLE {
            assert!(!buyable.contains(excluded));
        }
        assert_eq!(buyable.last(), Some(&UNKNOWN_MODULE));
        assert_eq!(all.len(), buyable.len() + NON_BUYABLE.len());
    }

    #[test]
    fn test_modules_of_type() {
        let scoops = modules_of_type("fuel scoop");
        assert_eq!(scoops.len(), 40);
        assert!(scoops.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(modules_of_type("Teleporter").is_empty());
    }

    #[test]
    fn test_serialize_skips_empty_info() {
        let json = serde_json::to_value(ship_module("adder_cockpit")).unwrap();
        assert_eq!(json["id"], -1);
        assert!(json.get("info").is_none());
        let json = serde_json::to_value(ship_module("int_fuelscoop_size1_class1")).unwrap();
        assert_eq!(json["info"], "Rate:18kg/s");
    }
}
