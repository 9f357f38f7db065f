//! On-foot actors: hostile suit AI, settlement defences, bystanders

use log::info;
use phf::phf_map;
use serde::Serialize;

use crate::humanize::unknown_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub name: &'static str,
}

const fn named(name: &'static str) -> Actor {
    Actor { name }
}

#[rustfmt::skip]
static ACTORS: phf::Map<&'static str, Actor> = phf_map! {
    "assaultsuitai_class1"         => named("Assault Suit AI Class 1"),
    "assaultsuitai_class2"         => named("Assault Suit AI Class 2"),
    "assaultsuitai_class3"         => named("Assault Suit AI Class 3"),
    "closesuitai_class1"           => named("Close Combat Suit AI Class 1"),
    "closesuitai_class2"           => named("Close Combat Suit AI Class 2"),
    "closesuitai_class3"           => named("Close Combat Suit AI Class 3"),
    "rangedsuitai_class1"          => named("Ranged Suit AI Class 1"),
    "rangedsuitai_class2"          => named("Ranged Suit AI Class 2"),
    "rangedsuitai_class3"          => named("Ranged Suit AI Class 3"),
    "heavysuitai_class1"           => named("Heavy Suit AI Class 1"),
    "heavysuitai_class2"           => named("Heavy Suit AI Class 2"),
    "heavysuitai_class3"           => named("Heavy Suit AI Class 3"),
    "citizen"                      => named("Citizen"),
    "skimmerdrone"                 => named("Skimmer Drone"),
    "ps_turretbasemedium02_6m"     => named("Settlement Defence Turret"),
    "ps_turretbasesmall_3m"        => named("Small Settlement Turret"),
};

/// Look up an actor by journal id.
///
/// A miss logs `fallback`, or the humanized id, and returns `None`.
pub fn actor(id: &str, fallback: Option<&str>) -> Option<&'static Actor> {
    let found = ACTORS.get(id.to_ascii_lowercase().as_str());
    if found.is_none() {
        info!("unknown actor {:?} ({})", id, unknown_label(id, fallback));
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_lookup() {
        assert_eq!(actor("Citizen", None).map(|a| a.name), Some("Citizen"));
        assert_eq!(
            actor("AssaultSuitAI_Class2", None).map(|a| a.name),
            Some("Assault Suit AI Class 2")
        );
        assert_eq!(
            actor("SkimmerDrone", Some("Drone")).map(|a| a.name),
            Some("Skimmer Drone")
        );
    }

    #[test]
    fn test_unknown_actor() {
        assert!(actor("thargoid_scout", None).is_none());
        assert!(actor("thargoid_scout", Some("Scout")).is_none());
        assert!(actor("", None).is_none());
    }
}
