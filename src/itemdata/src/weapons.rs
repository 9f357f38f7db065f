//! On-foot weapon definitions
//!
//! Each weapon carries stats for grades 1 through 5. Only grade 1 figures
//! are recorded; higher grades are zero until filled in.

use log::info;
use phf::phf_map;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::humanize::unknown_label;

/// Lowercase with separators removed, so `semi-automatic`, `Semi_Automatic`
/// and `SemiAutomatic` compare equal.
fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! named_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = fold(s);
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| fold(v.name()) == wanted)
                    .ok_or_else(|| CatalogError::variant($kind, s))
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Kinetic,
    Thermal,
    Plasma,
    Explosive,
}

named_enum!(DamageType, "damage type", {
    Kinetic => "Kinetic",
    Thermal => "Thermal",
    Plasma => "Plasma",
    Explosive => "Explosive",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponClass {
    Pistol,
    Rifle,
    Shotgun,
    Sniper,
    Launcher,
    Smg,
}

named_enum!(WeaponClass, "weapon class", {
    Pistol => "Pistol",
    Rifle => "Rifle",
    Shotgun => "Shotgun",
    Sniper => "Sniper",
    Launcher => "Launcher",
    Smg => "SMG",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FireMode {
    Automatic,
    SemiAutomatic,
    Burst,
    Charged,
}

named_enum!(FireMode, "fire mode", {
    Automatic => "Automatic",
    SemiAutomatic => "Semi-Automatic",
    Burst => "Burst",
    Charged => "Charged",
});

/// Figures for one grade. `range` is in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WeaponStats {
    pub dps: f64,
    pub rate_of_fire: f64,
    pub clip_size: u32,
    pub hopper_size: u32,
    pub range: f64,
}

impl WeaponStats {
    const ZERO: WeaponStats = WeaponStats {
        dps: 0.0,
        rate_of_fire: 0.0,
        clip_size: 0,
        hopper_size: 0,
        range: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weapon {
    pub name: &'static str,
    pub primary: bool,
    pub damage_type: DamageType,
    pub class: WeaponClass,
    pub fire_mode: FireMode,
    pub stats: [WeaponStats; 5],
}

impl Weapon {
    /// Stats for grade `n` (1-5).
    pub fn grade(&self, n: usize) -> Option<&WeaponStats> {
        n.checked_sub(1).and_then(|i| self.stats.get(i))
    }
}

#[allow(clippy::too_many_arguments)]
const fn weapon_g1(
    name: &'static str,
    primary: bool,
    damage_type: DamageType,
    class: WeaponClass,
    fire_mode: FireMode,
    dps: f64,
    rate_of_fire: f64,
    clip_size: u32,
    hopper_size: u32,
    range: f64,
) -> Weapon {
    let g1 = WeaponStats {
        dps,
        rate_of_fire,
        clip_size,
        hopper_size,
        range,
    };
    Weapon {
        name,
        primary,
        damage_type,
        class,
        fire_mode,
        stats: [g1, WeaponStats::ZERO, WeaponStats::ZERO, WeaponStats::ZERO, WeaponStats::ZERO],
    }
}

use DamageType::*;
use FireMode::*;
use WeaponClass::*;

#[rustfmt::skip]
static WEAPONS: phf::Map<&'static str, Weapon> = phf_map! {
    "wpn_m_assaultrifle_kinetic_fauto"    => weapon_g1("Karma AR-50",           true,  Kinetic,   Rifle,    Automatic,     0.9,  10.0, 40, 240,  50.0),
    "wpn_m_submachinegun_kinetic_fauto"   => weapon_g1("Karma C-44",            true,  Kinetic,   Smg,      Automatic,     0.65, 13.3, 60, 360,  25.0),
    "wpn_m_launcher_rocket_sauto"         => weapon_g1("Karma L-6",             true,  Explosive, Launcher, SemiAutomatic, 40.0,  1.0,  2,   8, 300.0),
    "wpn_s_pistol_kinetic_sauto"          => weapon_g1("Karma P-15",            false, Kinetic,   Pistol,   SemiAutomatic, 1.9,   5.7, 24, 240,  35.0),
    "wpn_m_assaultrifle_laser_fauto"      => weapon_g1("TK Aphelion",           true,  Thermal,   Rifle,    Automatic,     0.79,  5.7, 25, 150,  70.0),
    "wpn_m_submachinegun_laser_fauto"     => weapon_g1("TK Eclipse",            true,  Thermal,   Smg,      Automatic,     0.56, 10.0, 40, 240,  25.0),
    "wpn_s_pistol_laser_sauto"            => weapon_g1("TK Zenith",             false, Thermal,   Pistol,   Burst,         1.7,   1.7, 18, 180,  35.0),
    "wpn_m_assaultrifle_plasma_fauto"     => weapon_g1("Manticore Oppressor",   true,  Plasma,    Rifle,    Automatic,     0.82,  6.7, 50, 350,  35.0),
    "wpn_m_sniper_plasma_charged"         => weapon_g1("Manticore Executioner", true,  Plasma,    Sniper,   Charged,      15.0,   0.8,  3,  30, 100.0),
    "wpn_m_shotgun_plasma_doublebarrel"   => weapon_g1("Manticore Intimidator", true,  Plasma,    Shotgun,  SemiAutomatic, 1.01,  1.3,  2,  24,   7.0),
    "wpn_s_pistol_plasma_charged"         => weapon_g1("Manticore Tormentor",   false, Plasma,    Pistol,   Charged,       7.5,   1.4,  6,  72,  15.0),
};

/// Look up a weapon by journal id.
///
/// A miss logs `fallback`, or the humanized id, and returns `None`.
pub fn weapon(id: &str, fallback: Option<&str>) -> Option<&'static Weapon> {
    let found = WEAPONS.get(id.to_ascii_lowercase().as_str());
    if found.is_none() {
        info!("unknown weapon {:?} ({})", id, unknown_label(id, fallback));
    }
    found
}

/// Weapon journal ids, sorted
pub fn all_weapons() -> Vec<&'static str> {
    let mut ids: Vec<_> = WEAPONS.keys().copied().collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_karma_ar50() {
        let w = weapon("Wpn_M_AssaultRifle_Kinetic_FAuto", None).unwrap();
        assert_eq!(w.name, "Karma AR-50");
        assert!(w.primary);
        assert_eq!(w.damage_type, DamageType::Kinetic);
        assert_eq!(w.class, WeaponClass::Rifle);
        assert_eq!(w.fire_mode, FireMode::Automatic);

        let g1 = w.grade(1).unwrap();
        assert_eq!(g1.dps, 0.9);
        assert_eq!(g1.rate_of_fire, 10.0);
        assert_eq!(g1.clip_size, 40);
        assert_eq!(g1.hopper_size, 240);
        assert_eq!(g1.range, 50.0);
    }

    #[test]
    fn test_grade_bounds() {
        let w = weapon("wpn_s_pistol_plasma_charged", None).unwrap();
        assert!(w.grade(0).is_none());
        assert!(w.grade(6).is_none());
        assert!(w.grade(5).unwrap().is_zero());
        assert!(!w.grade(1).unwrap().is_zero());
    }

    #[test]
    fn test_secondaries_are_pistols() {
        for id in all_weapons() {
            let w = weapon(id, None).unwrap();
            assert_eq!(w.primary, w.class != WeaponClass::Pistol, "{}", id);
        }
    }

    #[test]
    fn test_unknown_weapon() {
        assert!(weapon("wpn_m_railgun_sonic", None).is_none());
        assert!(weapon("wpn_m_railgun_sonic", Some("Sonic Rail")).is_none());
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(FireMode::SemiAutomatic.to_string(), "Semi-Automatic");
        assert_eq!(WeaponClass::Smg.to_string(), "SMG");
        assert_eq!("semi_automatic".parse(), Ok(FireMode::SemiAutomatic));
        assert_eq!("smg".parse(), Ok(WeaponClass::Smg));
        assert_eq!("PLASMA".parse(), Ok(DamageType::Plasma));
        assert_eq!(
            "sonic".parse::<DamageType>(),
            Err(CatalogError::variant("damage type", "sonic"))
        );
    }

    #[test]
    fn test_all_weapons() {
        assert_eq!(all_weapons().len(), 11);
    }
}
