//! # itemdata
//!
//! Static reference data for ships, ship modules, on-foot suits, weapons and
//! actors, keyed by the lowercase identifiers game journals use.
//!
//! This library provides:
//! - Classification of raw ids into ships, SRVs, fighters, suits and taxis
//! - Hull properties and display names
//! - Module lookup that never fails, synthesizing records for unknown ids
//! - Suit, weapon and actor tables
//!
//! ## Example
//!
//! ```
//! use itemdata::{ship_module, ship_property, ShipProperty, ShipValue};
//!
//! let mc = ship_module("Hpt_MultiCannon_Fixed_Medium");
//! assert_eq!(mc.category, "Multi Cannon");
//!
//! let unknown = ship_module("weaponcustomisation_teal");
//! assert_eq!(unknown.name, "Weapon Customisation Teal");
//! assert_eq!(unknown.id, -1);
//!
//! assert_eq!(
//!     ship_property("adder", ShipProperty::Manufacturer),
//!     Some(&ShipValue::Str("Zorgon Peterson"))
//! );
//! ```

pub mod actors;
pub mod classify;
pub mod error;
pub mod humanize;
pub mod modules;
pub mod ships;
pub mod suits;
pub mod weapons;

#[cfg(feature = "wasm")]
pub mod wasm;

#[doc(inline)]
pub use error::CatalogError;
#[doc(inline)]
pub use humanize::humanize;

#[doc(inline)]
pub use classify::{
    classify, is_fighter, is_ship, is_ship_srv_or_fighter, is_srv, is_srv_or_fighter, is_suit,
    is_taxi, is_vanity, ItemKind,
};

#[doc(inline)]
pub use ships::{
    all_ships, ship_by_display_name, ship_display_name, ship_properties, ship_property,
    ShipProperty, ShipPropertySet, ShipValue,
};

#[doc(inline)]
pub use modules::{
    all_module_types, modules_of_type, ship_module, synthesized_count, try_ship_module,
    ModuleRecord, NON_BUYABLE, UNKNOWN_MODULE, VANITY_ITEM,
};

// On-foot tables
#[doc(inline)]
pub use actors::{actor, Actor};
#[doc(inline)]
pub use suits::{all_suits, suit, Suit, SuitStats};
#[doc(inline)]
pub use weapons::{all_weapons, weapon, DamageType, FireMode, Weapon, WeaponClass, WeaponStats};
