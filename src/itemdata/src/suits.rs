//! On-foot suit definitions

use log::info;
use phf::phf_map;
use serde::Serialize;

use crate::humanize::unknown_label;

/// Suit protection and capacity figures
///
/// Health and shield multipliers scale incoming damage of each type.
/// Battery capacity is in MW, oxygen time in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitStats {
    pub health_kinetic: f64,
    pub health_thermal: f64,
    pub health_plasma: f64,
    pub health_explosive: f64,
    pub shield_kinetic: f64,
    pub shield_thermal: f64,
    pub shield_plasma: f64,
    pub shield_explosive: f64,
    pub shield_regen: f64,
    pub shield_total: f64,
    pub battery: f64,
    pub oxygen_time: f64,
    pub item_capacity: u32,
    pub component_capacity: u32,
    pub data_capacity: u32,
}

/// A suit at one class tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suit {
    pub name: &'static str,
    pub class: u8,
    pub primary_weapons: u8,
    pub secondary_weapons: u8,
    pub utility: [Option<&'static str>; 3],
    pub stats: SuitStats,
}

impl Suit {
    pub fn weapon_slots(&self) -> u8 {
        self.primary_weapons + self.secondary_weapons
    }
}

/// One table row. Multiplier arrays are kinetic, thermal, plasma, explosive;
/// capacity is items, components, data.
#[allow(clippy::too_many_arguments)]
const fn row(
    name: &'static str,
    class: u8,
    primary: u8,
    secondary: u8,
    utility: [Option<&'static str>; 3],
    health: [f64; 4],
    shield: [f64; 4],
    shield_regen: f64,
    shield_total: f64,
    battery: f64,
    oxygen_time: f64,
    capacity: [u32; 3],
) -> Suit {
    Suit {
        name,
        class,
        primary_weapons: primary,
        secondary_weapons: secondary,
        utility,
        stats: SuitStats {
            health_kinetic: health[0],
            health_thermal: health[1],
            health_plasma: health[2],
            health_explosive: health[3],
            shield_kinetic: shield[0],
            shield_thermal: shield[1],
            shield_plasma: shield[2],
            shield_explosive: shield[3],
            shield_regen,
            shield_total,
            battery,
            oxygen_time,
            item_capacity: capacity[0],
            component_capacity: capacity[1],
            data_capacity: capacity[2],
        },
    }
}

#[rustfmt::skip]
static SUITS: phf::Map<&'static str, Suit> = phf_map! {
    "flightsuit"              => row("Flight Suit", 0, 0, 1, [Some("Energy Link"), Some("Profile Analyser"), None], [1.0, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, 1.0], 0.55, 9.4, 10.0, 60.0, [5, 10, 5]),
    "utilitysuit_class1"      => row("Maverick", 1, 1, 1, [Some("Arc Cutter"), Some("Genetic Sampler"), Some("Profile Analyser")], [0.6, 1.5, 1.0, 0.5], [0.6, 1.5, 0.9, 0.5], 0.79, 13.5, 13.5, 60.0, [15, 40, 10]),
    "utilitysuit_class2"      => row("Maverick", 2, 1, 1, [Some("Arc Cutter"), Some("Genetic Sampler"), Some("Profile Analyser")], [0.49, 1.5, 1.0, 0.41], [0.6, 1.5, 0.9, 0.5], 1.01, 17.3, 13.5, 60.0, [15, 40, 10]),
    "utilitysuit_class3"      => row("Maverick", 3, 1, 1, [Some("Arc Cutter"), Some("Genetic Sampler"), Some("Profile Analyser")], [0.4, 1.5, 1.0, 0.34], [0.6, 1.5, 0.9, 0.5], 1.3, 22.1, 13.5, 60.0, [15, 40, 10]),
    "utilitysuit_class4"      => row("Maverick", 4, 1, 1, [Some("Arc Cutter"), Some("Genetic Sampler"), Some("Profile Analyser")], [0.33, 1.5, 1.0, 0.27], [0.6, 1.5, 0.9, 0.5], 1.66, 28.4, 13.5, 60.0, [15, 40, 10]),
    "utilitysuit_class5"      => row("Maverick", 5, 1, 1, [Some("Arc Cutter"), Some("Genetic Sampler"), Some("Profile Analyser")], [0.27, 1.5, 1.0, 0.23], [0.6, 1.5, 0.9, 0.5], 2.12, 36.3, 13.5, 60.0, [15, 40, 10]),
    "explorationsuit_class1"  => row("Artemis", 1, 1, 1, [Some("Genetic Sampler"), Some("Profile Analyser"), None], [0.8, 1.5, 1.0, 0.7], [0.6, 1.5, 0.9, 0.5], 0.7, 12.0, 17.0, 60.0, [10, 20, 10]),
    "explorationsuit_class2"  => row("Artemis", 2, 1, 1, [Some("Genetic Sampler"), Some("Profile Analyser"), None], [0.66, 1.5, 1.0, 0.57], [0.6, 1.5, 0.9, 0.5], 0.9, 15.4, 17.0, 60.0, [10, 20, 10]),
    "explorationsuit_class3"  => row("Artemis", 3, 1, 1, [Some("Genetic Sampler"), Some("Profile Analyser"), None], [0.54, 1.5, 1.0, 0.47], [0.6, 1.5, 0.9, 0.5], 1.16, 19.7, 17.0, 60.0, [10, 20, 10]),
    "explorationsuit_class4"  => row("Artemis", 4, 1, 1, [Some("Genetic Sampler"), Some("Profile Analyser"), None], [0.44, 1.5, 1.0, 0.38], [0.6, 1.5, 0.9, 0.5], 1.48, 25.2, 17.0, 60.0, [10, 20, 10]),
    "explorationsuit_class5"  => row("Artemis", 5, 1, 1, [Some("Genetic Sampler"), Some("Profile Analyser"), None], [0.36, 1.5, 1.0, 0.32], [0.6, 1.5, 0.9, 0.5], 1.89, 32.3, 17.0, 60.0, [10, 20, 10]),
    "tacticalsuit_class1"     => row("Dominator", 1, 2, 1, [Some("Energy Link"), Some("Profile Analyser"), None], [0.4, 1.5, 1.0, 0.4], [0.6, 1.5, 0.9, 0.5], 0.88, 15.0, 10.0, 60.0, [10, 15, 10]),
    "tacticalsuit_class2"     => row("Dominator", 2, 2, 1, [Some("Energy Link"), Some("Profile Analyser"), None], [0.33, 1.5, 1.0, 0.33], [0.6, 1.5, 0.9, 0.5], 1.13, 19.2, 10.0, 60.0, [10, 15, 10]),
    "tacticalsuit_class3"     => row("Dominator", 3, 2, 1, [Some("Energy Link"), Some("Profile Analyser"), None], [0.27, 1.5, 1.0, 0.27], [0.6, 1.5, 0.9, 0.5], 1.44, 24.6, 10.0, 60.0, [10, 15, 10]),
    "tacticalsuit_class4"     => row("Dominator", 4, 2, 1, [Some("Energy Link"), Some("Profile Analyser"), None], [0.22, 1.5, 1.0, 0.22], [0.6, 1.5, 0.9, 0.5], 1.84, 31.5, 10.0, 60.0, [10, 15, 10]),
    "tacticalsuit_class5"     => row("Dominator", 5, 2, 1, [Some("Energy Link"), Some("Profile Analyser"), None], [0.18, 1.5, 1.0, 0.18], [0.6, 1.5, 0.9, 0.5], 2.36, 40.3, 10.0, 60.0, [10, 15, 10]),
};

/// Look up a suit by journal id.
///
/// A miss logs `fallback`, or the humanized id, and returns `None`.
pub fn suit(id: &str, fallback: Option<&str>) -> Option<&'static Suit> {
    let found = SUITS.get(id.to_ascii_lowercase().as_str());
    if found.is_none() {
        info!("unknown suit {:?} ({})", id, unknown_label(id, fallback));
    }
    found
}

/// Suit journal ids, sorted
pub fn all_suits() -> Vec<&'static str> {
    let mut ids: Vec<_> = SUITS.keys().copied().collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_lookup() {
        let s = suit("UtilitySuit_Class3", None).unwrap();
        assert_eq!(s.name, "Maverick");
        assert_eq!(s.class, 3);
        assert_eq!(s.stats.shield_total, 22.1);
        assert_eq!(s.stats.shield_regen, 1.3);

        let s = suit("tacticalsuit_class3", None).unwrap();
        assert_eq!(s.name, "Dominator");
        assert_eq!(s.stats.shield_total, 24.6);
        assert_eq!(s.stats.shield_regen, 1.44);
        assert_eq!(s.stats.health_kinetic, 0.27);
    }

    #[test]
    fn test_flight_suit() {
        let s = suit("flightsuit", None).unwrap();
        assert_eq!(s.class, 0);
        assert_eq!(s.primary_weapons, 0);
        assert_eq!(s.weapon_slots(), 1);
    }

    #[test]
    fn test_weapon_slots() {
        assert_eq!(suit("tacticalsuit_class1", None).map(Suit::weapon_slots), Some(3));
        assert_eq!(suit("explorationsuit_class5", None).map(Suit::weapon_slots), Some(2));
    }

    #[test]
    fn test_shield_grows_with_class() {
        for archetype in ["utilitysuit", "explorationsuit", "tacticalsuit"] {
            let shields: Vec<f64> = (1..=5)
                .map(|c| {
                    let id = format!("{}_class{}", archetype, c);
                    suit(&id, None).unwrap().stats.shield_total
                })
                .collect();
            assert!(shields.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_archetypes_differ() {
        let maverick = &suit("utilitysuit_class1", None).unwrap().stats;
        let artemis = &suit("explorationsuit_class1", None).unwrap().stats;
        let dominator = &suit("tacticalsuit_class1", None).unwrap().stats;
        assert!(dominator.health_kinetic < maverick.health_kinetic);
        assert!(maverick.health_kinetic < artemis.health_kinetic);
        assert!(artemis.battery > maverick.battery);
        assert!(maverick.battery > dominator.battery);
        assert!(maverick.component_capacity > dominator.component_capacity);
    }

    #[test]
    fn test_health_resistance_grows_with_class() {
        for archetype in ["utilitysuit", "explorationsuit", "tacticalsuit"] {
            let kinetic: Vec<f64> = (1..=5)
                .map(|c| {
                    let id = format!("{}_class{}", archetype, c);
                    suit(&id, None).unwrap().stats.health_kinetic
                })
                .collect();
            assert!(kinetic.windows(2).all(|w| w[0] > w[1]), "{}", archetype);
        }
    }

    #[test]
    fn test_unknown_suit() {
        assert!(suit("spacesuit_class9", None).is_none());
        assert!(suit("spacesuit_class9", Some("Mystery Suit")).is_none());
        assert!(suit("", None).is_none());
    }

    #[test]
    fn test_all_suits() {
        let ids = all_suits();
        assert_eq!(ids.len(), 16);
        assert!(ids.iter().all(|id| crate::is_suit(id)));
    }
}
