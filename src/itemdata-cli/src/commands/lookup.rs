//! Suit, weapon and actor command handlers

use anyhow::Result;
use itemdata::{actor, suit, weapon, Suit, Weapon};

use super::print_json;
use crate::cli::OutputFormat;

fn not_found(kind: &str, id: &str) -> Result<()> {
    println!("{} '{}' not found", kind, id);
    Ok(())
}

/// Handle the suit command
pub fn show_suit(id: &str, format: OutputFormat) -> Result<()> {
    let Some(found) = suit(id, None) else {
        return not_found("Suit", id);
    };

    match format {
        OutputFormat::Json => print_json(found),
        OutputFormat::Text => {
            print_suit(found);
            Ok(())
        }
    }
}

fn print_suit(suit: &Suit) {
    let stats = &suit.stats;
    println!("{} (class {})", suit.name, suit.class);
    println!(
        "  Weapons:  {} primary, {} secondary",
        suit.primary_weapons, suit.secondary_weapons
    );
    let utility: Vec<&str> = suit.utility.iter().flatten().copied().collect();
    if !utility.is_empty() {
        println!("  Utility:  {}", utility.join(", "));
    }
    println!("  Shield:   {} (regen {}/s)", stats.shield_total, stats.shield_regen);
    println!(
        "  Health x: kinetic {} thermal {} plasma {} explosive {}",
        stats.health_kinetic, stats.health_thermal, stats.health_plasma, stats.health_explosive
    );
    println!(
        "  Shield x: kinetic {} thermal {} plasma {} explosive {}",
        stats.shield_kinetic, stats.shield_thermal, stats.shield_plasma, stats.shield_explosive
    );
    println!("  Battery:  {}MW, oxygen {}s", stats.battery, stats.oxygen_time);
    println!(
        "  Backpack: {} items, {} components, {} data",
        stats.item_capacity, stats.component_capacity, stats.data_capacity
    );
}

/// Handle the weapon command
pub fn show_weapon(id: &str, format: OutputFormat) -> Result<()> {
    let Some(found) = weapon(id, None) else {
        return not_found("Weapon", id);
    };

    match format {
        OutputFormat::Json => print_json(found),
        OutputFormat::Text => {
            print_weapon(found);
            Ok(())
        }
    }
}

fn print_weapon(weapon: &Weapon) {
    let slot = if weapon.primary { "primary" } else { "secondary" };
    println!("{} ({}, {})", weapon.name, weapon.class, slot);
    println!("  Damage:   {}", weapon.damage_type);
    println!("  Fire:     {}", weapon.fire_mode);
    for grade in 1..=5 {
        if let Some(stats) = weapon.grade(grade).filter(|s| !s.is_zero()) {
            println!(
                "  Grade {}:  {} dps, {}/s, clip {}, hopper {}, {}m",
                grade,
                stats.dps,
                stats.rate_of_fire,
                stats.clip_size,
                stats.hopper_size,
                stats.range
            );
        }
    }
}

/// Handle the actor command
pub fn show_actor(id: &str, format: OutputFormat) -> Result<()> {
    let Some(found) = actor(id, None) else {
        return not_found("Actor", id);
    };

    match format {
        OutputFormat::Json => print_json(found),
        OutputFormat::Text => {
            println!("{}", found.name);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_are_not_errors() {
        assert!(show_suit("nosuit_class9", OutputFormat::Text).is_ok());
        assert!(show_weapon("wpn_nothing", OutputFormat::Json).is_ok());
        assert!(show_actor("nobody", OutputFormat::Text).is_ok());
    }

    #[test]
    fn test_known_ids() {
        assert!(show_suit("tacticalsuit_class3", OutputFormat::Json).is_ok());
        assert!(show_weapon("wpn_s_pistol_laser_sauto", OutputFormat::Text).is_ok());
        assert!(show_actor("citizen", OutputFormat::Json).is_ok());
    }
}
