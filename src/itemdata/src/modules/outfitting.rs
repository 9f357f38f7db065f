//! Outfitting table as published by the shipyard data feed
//!
//! Standard internals, optional internals, hardpoints, utility mounts and
//! armour for every hull in [`crate::ships`]. Keys are lowercase journal ids.

use phf::phf_map;

use super::ModuleRecord;

/// Modules keyed by journal id
#[rustfmt::skip]
pub(super) static OUTFITTING: phf::Map<&'static str, ModuleRecord> = phf_map! {
    "adder_armour_grade1"                           => ModuleRecord::fixed(128049268, 0.0, 0.0, None, "Adder Lightweight Armour", "Armour"),
    "adder_armour_grade2"                           => ModuleRecord::fixed(128049269, 3.0, 0.0, None, "Adder Reinforced Armour", "Armour"),
    "adder_armour_grade3"                           => ModuleRecord::fixed(128049270, 5.0, 0.0, None, "Adder Military Armour", "Armour"),
    "adder_armour_mirrored"                         => ModuleRecord::fixed(128049271, 5.0, 0.0, None, "Adder Mirrored Surface Composite Armour", "Armour"),
    "adder_armour_reactive"                         => ModuleRecord::fixed(128049272, 5.0, 0.0, None, "Adder Reactive Surface Composite Armour", "Armour"),
    "anaconda_armour_grade1"                        => ModuleRecord::fixed(128049364, 0.0, 0.0, None, "Anaconda Lightweight Armour", "Armour"),
    "anaconda_armour_grade2"                        => ModuleRecord::fixed(128049365, 30.0, 0.0, None, "Anaconda Reinforced Armour", "Armour"),
    "anaconda_armour_grade3"                        => ModuleRecord::fixed(128049366, 60.0, 0.0, None, "Anaconda Military Armour", "Armour"),
    "anaconda_armour_mirrored"                      => ModuleRecord::fixed(128049367, 60.0, 0.0, None, "Anaconda Mirrored Surface Composite Armour", "Armour"),
    "anaconda_armour_reactive"                      => ModuleRecord::fixed(128049368, 60.0, 0.0, None, "Anaconda Reactive Surface Composite Armour", "Armour"),
    "asp_armour_grade1"                             => ModuleRecord::fixed(128049304, 0.0, 0.0, None, "Asp Explorer Lightweight Armour", "Armour"),
    "asp_armour_grade2"                             => ModuleRecord::fixed(128049305, 21.0, 0.0, None, "Asp Explorer Reinforced Armour", "Armour"),
    "asp_armour_grade3"                             => ModuleRecord::fixed(128049306, 42.0, 0.0, None, "Asp Explorer Military Armour", "Armour"),
    "asp_armour_mirrored"                           => ModuleRecord::fixed(128049307, 42.0, 0.0, None, "Asp Explorer Mirrored Surface Composite Armour", "Armour"),
    "asp_armour_reactive"                           => ModuleRecord::fixed(128049308, 42.0, 0.0, None, "Asp Explorer Reactive Surface Composite Armour", "Armour"),
    "asp_scout_armour_grade1"                       => ModuleRecord::fixed(128672277, 0.0, 0.0, None, "Asp Scout Lightweight Armour", "Armour"),
    "asp_scout_armour_grade2"                       => ModuleRecord::fixed(128672278, 21.0, 0.0, None, "Asp Scout Reinforced Armour", "Armour"),
    "asp_scout_armour_grade3"                       => ModuleRecord::fixed(128672279, 42.0, 0.0, None, "Asp Scout Military Armour", "Armour"),
    "asp_scout_armour_mirrored"                     => ModuleRecord::fixed(128672280, 42.0, 0.0, None, "Asp Scout Mirrored Surface Composite Armour", "Armour"),
    "asp_scout_armour_reactive"                     => ModuleRecord::fixed(128672281, 42.0, 0.0, None, "Asp Scout Reactive Surface Composite Armour", "Armour"),
    "belugaliner_armour_grade1"                     => ModuleRecord::fixed(128049346, 0.0, 0.0, None, "Beluga Liner Lightweight Armour", "Armour"),
    "belugaliner_armour_grade2"                     => ModuleRecord::fixed(128049347, 83.0, 0.0, None, "Beluga Liner Reinforced Armour", "Armour"),
    "belugaliner_armour_grade3"                     => ModuleRecord::fixed(128049348, 165.0, 0.0, None, "Beluga Liner Military Armour", "Armour"),
    "belugaliner_armour_mirrored"                   => ModuleRecord::fixed(128049349, 165.0, 0.0, None, "Beluga Liner Mirrored Surface Composite Armour", "Armour"),
    "belugaliner_armour_reactive"                   => ModuleRecord::fixed(128049350, 165.0, 0.0, None, "Beluga Liner Reactive Surface Composite Armour", "Armour"),
    "cobramkiii_armour_grade1"                      => ModuleRecord::fixed(128049280, 0.0, 0.0, None, "Cobra Mk III Lightweight Armour", "Armour"),
    "cobramkiii_armour_grade2"                      => ModuleRecord::fixed(128049281, 14.0, 0.0, None, "Cobra Mk III Reinforced Armour", "Armour"),
    "cobramkiii_armour_grade3"                      => ModuleRecord::fixed(128049282, 27.0, 0.0, None, "Cobra Mk III Military Armour", "Armour"),
    "cobramkiii_armour_mirrored"                    => ModuleRecord::fixed(128049283, 27.0, 0.0, None, "Cobra Mk III Mirrored Surface Composite Armour", "Armour"),
    "cobramkiii_armour_reactive"                    => ModuleRecord::fixed(128049284, 27.0, 0.0, None, "Cobra Mk III Reactive Surface Composite Armour", "Armour"),
    "cobramkiv_armour_grade1"                       => ModuleRecord::fixed(128672263, 0.0, 0.0, None, "Cobra Mk IV Lightweight Armour", "Armour"),
    "cobramkiv_armour_grade2"                       => ModuleRecord::fixed(128672264, 14.0, 0.0, None, "Cobra Mk IV Reinforced Armour", "Armour"),
    "cobramkiv_armour_grade3"                       => ModuleRecord::fixed(128672265, 27.0, 0.0, None, "Cobra Mk IV Military Armour", "Armour"),
    "cobramkiv_armour_mirrored"                     => ModuleRecord::fixed(128672266, 27.0, 0.0, None, "Cobra Mk IV Mirrored Surface Composite Armour", "Armour"),
    "cobramkiv_armour_reactive"                     => ModuleRecord::fixed(128672267, 27.0, 0.0, None, "Cobra Mk IV Reactive Surface Composite Armour", "Armour"),
    "cutter_armour_grade1"                          => ModuleRecord::fixed(128049376, 0.0, 0.0, None, "Imperial Cutter Lightweight Armour", "Armour"),
    "cutter_armour_grade2"                          => ModuleRecord::fixed(128049377, 30.0, 0.0, None, "Imperial Cutter Reinforced Armour", "Armour"),
    "cutter_armour_grade3"                          => ModuleRecord::fixed(128049378, 60.0, 0.0, None, "Imperial Cutter Military Armour", "Armour"),
    "cutter_armour_mirrored"                        => ModuleRecord::fixed(128049379, 60.0, 0.0, None, "Imperial Cutter Mirrored Surface Composite Armour", "Armour"),
    "cutter_armour_reactive"                        => ModuleRecord::fixed(128049380, 60.0, 0.0, None, "Imperial Cutter Reactive Surface Composite Armour", "Armour"),
    "diamondback_armour_grade1"                     => ModuleRecord::fixed(128671218, 0.0, 0.0, None, "Diamondback Scout Lightweight Armour", "Armour"),
    "diamondback_armour_grade2"                     => ModuleRecord::fixed(128671219, 13.0, 0.0, None, "Diamondback Scout Reinforced Armour", "Armour"),
    "diamondback_armour_grade3"                     => ModuleRecord::fixed(128671220, 26.0, 0.0, None, "Diamondback Scout Military Armour", "Armour"),
    "diamondback_armour_mirrored"                   => ModuleRecord::fixed(128671221, 26.0, 0.0, None, "Diamondback Scout Mirrored Surface Composite Armour", "Armour"),
    "diamondback_armour_reactive"                   => ModuleRecord::fixed(128671222, 26.0, 0.0, None, "Diamondback Scout Reactive Surface Composite Armour", "Armour"),
    "diamondbackxl_armour_grade1"                   => ModuleRecord::fixed(128671832, 0.0, 0.0, None, "Diamondback Explorer Lightweight Armour", "Armour"),
    "diamondbackxl_armour_grade2"                   => ModuleRecord::fixed(128671833, 23.0, 0.0, None, "Diamondback Explorer Reinforced Armour", "Armour"),
    "diamondbackxl_armour_grade3"                   => ModuleRecord::fixed(128671834, 47.0, 0.0, None, "Diamondback Explorer Military Armour", "Armour"),
    "diamondbackxl_armour_mirrored"                 => ModuleRecord::fixed(128671835, 47.0, 0.0, None, "Diamondback Explorer Mirrored Surface Composite Armour", "Armour"),
    "diamondbackxl_armour_reactive"                 => ModuleRecord::fixed(128671836, 47.0, 0.0, None, "Diamondback Explorer Reactive Surface Composite Armour", "Armour"),
    "dolphin_armour_grade1"                         => ModuleRecord::fixed(128049292, 0.0, 0.0, None, "Dolphin Lightweight Armour", "Armour"),
    "dolphin_armour_grade2"                         => ModuleRecord::fixed(128049293, 32.0, 0.0, None, "Dolphin Reinforced Armour", "Armour"),
    "dolphin_armour_grade3"                         => ModuleRecord::fixed(128049294, 63.0, 0.0, None, "Dolphin Military Armour", "Armour"),
    "dolphin_armour_mirrored"                       => ModuleRecord::fixed(128049295, 63.0, 0.0, None, "Dolphin Mirrored Surface Composite Armour", "Armour"),
    "dolphin_armour_reactive"                       => ModuleRecord::fixed(128049296, 63.0, 0.0, None, "Dolphin Reactive Surface Composite Armour", "Armour"),
    "eagle_armour_grade1"                           => ModuleRecord::fixed(128049256, 0.0, 0.0, None, "Eagle Lightweight Armour", "Armour"),
    "eagle_armour_grade2"                           => ModuleRecord::fixed(128049257, 4.0, 0.0, None, "Eagle Reinforced Armour", "Armour"),
    "eagle_armour_grade3"                           => ModuleRecord::fixed(128049258, 8.0, 0.0, None, "Eagle Military Armour", "Armour"),
    "eagle_armour_mirrored"                         => ModuleRecord::fixed(128049259, 8.0, 0.0, None, "Eagle Mirrored Surface Composite Armour", "Armour"),
    "eagle_armour_reactive"                         => ModuleRecord::fixed(128049260, 8.0, 0.0, None, "Eagle Reactive Surface Composite Armour", "Armour"),
    "empire_courier_armour_grade1"                  => ModuleRecord::fixed(128671224, 0.0, 0.0, None, "Imperial Courier Lightweight Armour", "Armour"),
    "empire_courier_armour_grade2"                  => ModuleRecord::fixed(128671225, 4.0, 0.0, None, "Imperial Courier Reinforced Armour", "Armour"),
    "empire_courier_armour_grade3"                  => ModuleRecord::fixed(128671226, 8.0, 0.0, None, "Imperial Courier Military Armour", "Armour"),
    "empire_courier_armour_mirrored"                => ModuleRecord::fixed(128671227, 8.0, 0.0, None, "Imperial Courier Mirrored Surface Composite Armour", "Armour"),
    "empire_courier_armour_reactive"                => ModuleRecord::fixed(128671228, 8.0, 0.0, None, "Imperial Courier Reactive Surface Composite Armour", "Armour"),
    "empire_eagle_armour_grade1"                    => ModuleRecord::fixed(128672139, 0.0, 0.0, None, "Imperial Eagle Lightweight Armour", "Armour"),
    "empire_eagle_armour_grade2"                    => ModuleRecord::fixed(128672140, 4.0, 0.0, None, "Imperial Eagle Reinforced Armour", "Armour"),
    "empire_eagle_armour_grade3"                    => ModuleRecord::fixed(128672141, 8.0, 0.0, None, "Imperial Eagle Military Armour", "Armour"),
    "empire_eagle_armour_mirrored"                  => ModuleRecord::fixed(128672142, 8.0, 0.0, None, "Imperial Eagle Mirrored Surface Composite Armour", "Armour"),
    "empire_eagle_armour_reactive"                  => ModuleRecord::fixed(128672143, 8.0, 0.0, None, "Imperial Eagle Reactive Surface Composite Armour", "Armour"),
    "empire_trader_armour_grade1"                   => ModuleRecord::fixed(128049316, 0.0, 0.0, None, "Imperial Clipper Lightweight Armour", "Armour"),
    "empire_trader_armour_grade2"                   => ModuleRecord::fixed(128049317, 30.0, 0.0, None, "Imperial Clipper Reinforced Armour", "Armour"),
    "empire_trader_armour_grade3"                   => ModuleRecord::fixed(128049318, 60.0, 0.0, None, "Imperial Clipper Military Armour", "Armour"),
    "empire_trader_armour_mirrored"                 => ModuleRecord::fixed(128049319, 60.0, 0.0, None, "Imperial Clipper Mirrored Surface Composite Armour", "Armour"),
    "empire_trader_armour_reactive"                 => ModuleRecord::fixed(128049320, 60.0, 0.0, None, "Imperial Clipper Reactive Surface Composite Armour", "Armour"),
    "federation_corvette_armour_grade1"             => ModuleRecord::fixed(128049370, 0.0, 0.0, None, "Federal Corvette Lightweight Armour", "Armour"),
    "federation_corvette_armour_grade2"             => ModuleRecord::fixed(128049371, 30.0, 0.0, None, "Federal Corvette Reinforced Armour", "Armour"),
    "federation_corvette_armour_grade3"             => ModuleRecord::fixed(128049372, 60.0, 0.0, None, "Federal Corvette Military Armour", "Armour"),
    "federation_corvette_armour_mirrored"           => ModuleRecord::fixed(128049373, 60.0, 0.0, None, "Federal Corvette Mirrored Surface Composite Armour", "Armour"),
    "federation_corvette_armour_reactive"           => ModuleRecord::fixed(128049374, 60.0, 0.0, None, "Federal Corvette Reactive Surface Composite Armour", "Armour"),
    "federation_dropship_armour_grade1"             => ModuleRecord::fixed(128049322, 0.0, 0.0, None, "Federal Dropship Lightweight Armour", "Armour"),
    "federation_dropship_armour_grade2"             => ModuleRecord::fixed(128049323, 44.0, 0.0, None, "Federal Dropship Reinforced Armour", "Armour"),
    "federation_dropship_armour_grade3"             => ModuleRecord::fixed(128049324, 87.0, 0.0, None, "Federal Dropship Military Armour", "Armour"),
    "federation_dropship_armour_mirrored"           => ModuleRecord::fixed(128049325, 87.0, 0.0, None, "Federal Dropship Mirrored Surface Composite Armour", "Armour"),
    "federation_dropship_armour_reactive"           => ModuleRecord::fixed(128049326, 87.0, 0.0, None, "Federal Dropship Reactive Surface Composite Armour", "Armour"),
    "federation_dropship_mkii_armour_grade1"        => ModuleRecord::fixed(128672146, 0.0, 0.0, None, "Federal Assault Ship Lightweight Armour", "Armour"),
    "federation_dropship_mkii_armour_grade2"        => ModuleRecord::fixed(128672147, 44.0, 0.0, None, "Federal Assault Ship Reinforced Armour", "Armour"),
    "federation_dropship_mkii_armour_grade3"        => ModuleRecord::fixed(128672148, 87.0, 0.0, None, "Federal Assault Ship Military Armour", "Armour"),
    "federation_dropship_mkii_armour_mirrored"      => ModuleRecord::fixed(128672149, 87.0, 0.0, None, "Federal Assault Ship Mirrored Surface Composite Armour", "Armour"),
    "federation_dropship_mkii_armour_reactive"      => ModuleRecord::fixed(128672150, 87.0, 0.0, None, "Federal Assault Ship Reactive Surface Composite Armour", "Armour"),
    "federation_gunship_armour_grade1"              => ModuleRecord::fixed(128672153, 0.0, 0.0, None, "Federal Gunship Lightweight Armour", "Armour"),
    "federation_gunship_armour_grade2"              => ModuleRecord::fixed(128672154, 44.0, 0.0, None, "Federal Gunship Reinforced Armour", "Armour"),
    "federation_gunship_armour_grade3"              => ModuleRecord::fixed(128672155, 87.0, 0.0, None, "Federal Gunship Military Armour", "Armour"),
    "federation_gunship_armour_mirrored"            => ModuleRecord::fixed(128672156, 87.0, 0.0, None, "Federal Gunship Mirrored Surface Composite Armour", "Armour"),
    "federation_gunship_armour_reactive"            => ModuleRecord::fixed(128672157, 87.0, 0.0, None, "Federal Gunship Reactive Surface Composite Armour", "Armour"),
    "ferdelance_armour_grade1"                      => ModuleRecord::fixed(128049352, 0.0, 0.0, None, "Fer-de-Lance Lightweight Armour", "Armour"),
    "ferdelance_armour_grade2"                      => ModuleRecord::fixed(128049353, 19.0, 0.0, None, "Fer-de-Lance Reinforced Armour", "Armour"),
    "ferdelance_armour_grade3"                      => ModuleRecord::fixed(128049354, 38.0, 0.0, None, "Fer-de-Lance Military Armour", "Armour"),
    "ferdelance_armour_mirrored"                    => ModuleRecord::fixed(128049355, 38.0, 0.0, None, "Fer-de-Lance Mirrored Surface Composite Armour", "Armour"),
    "ferdelance_armour_reactive"                    => ModuleRecord::fixed(128049356, 38.0, 0.0, None, "Fer-de-Lance Reactive Surface Composite Armour", "Armour"),
    "hauler_armour_grade1"                          => ModuleRecord::fixed(128049262, 0.0, 0.0, None, "Hauler Lightweight Armour", "Armour"),
    "hauler_armour_grade2"                          => ModuleRecord::fixed(128049263, 1.0, 0.0, None, "Hauler Reinforced Armour", "Armour"),
    "hauler_armour_grade3"                          => ModuleRecord::fixed(128049264, 2.0, 0.0, None, "Hauler Military Armour", "Armour"),
    "hauler_armour_mirrored"                        => ModuleRecord::fixed(128049265, 2.0, 0.0, None, "Hauler Mirrored Surface Composite Armour", "Armour"),
    "hauler_armour_reactive"                        => ModuleRecord::fixed(128049266, 2.0, 0.0, None, "Hauler Reactive Surface Composite Armour", "Armour"),
    "hpt_advancedtorppylon_fixed_large"             => ModuleRecord::fixed(128049511, 8.0, 0.6, Some("Damage:120.0, DPS:120.0/s, Range:10000m"), "Torpedo Pylon Fixed Large", "Torpedo Pylon"),
    "hpt_advancedtorppylon_fixed_medium"            => ModuleRecord::fixed(128049510, 4.0, 0.4, Some("Damage:120.0, DPS:120.0/s, Range:10000m"), "Torpedo Pylon Fixed Medium", "Torpedo Pylon"),
    "hpt_advancedtorppylon_fixed_small"             => ModuleRecord::fixed(128049509, 2.0, 0.4, Some("Damage:120.0, DPS:120.0/s, Range:10000m"), "Torpedo Pylon Fixed Small", "Torpedo Pylon"),
    "hpt_antiunknownshutdown_tiny"                  => ModuleRecord::fixed(128771884, 1.3, 0.2, Some("Range:3000m"), "Shutdown Field Neutraliser", "Shutdown Field Neutraliser"),
    "hpt_atdumbfiremissile_fixed_large"             => ModuleRecord::fixed(128788700, 8.0, 1.62, Some("Damage:64.0, DPS:32.0/s, Range:5000m"), "AX Missile Rack Fixed Large", "AX Missile Rack"),
    "hpt_atdumbfiremissile_fixed_medium"            => ModuleRecord::fixed(128788699, 4.0, 1.2, Some("Damage:64.0, DPS:32.0/s, Range:5000m"), "AX Missile Rack Fixed Medium", "AX Missile Rack"),
    "hpt_atdumbfiremissile_turret_large"            => ModuleRecord::fixed(128788705, 8.0, 1.75, Some("Damage:50.0, DPS:25.0/s, Range:5000m"), "AX Missile Rack Turret Large", "AX Missile Rack"),
    "hpt_atdumbfiremissile_turret_medium"           => ModuleRecord::fixed(128788704, 4.0, 1.2, Some("Damage:50.0, DPS:25.0/s, Range:5000m"), "AX Missile Rack Turret Medium", "AX Missile Rack"),
    "hpt_atmulticannon_fixed_large"                 => ModuleRecord::fixed(128788702, 8.0, 0.64, Some("Damage:6.12, DPS:28.35/s, Range:4000m"), "AX Multi Cannon Fixed Large", "AX Multi Cannon"),
    "hpt_atmulticannon_fixed_medium"                => ModuleRecord::fixed(128788701, 4.0, 0.46, Some("Damage:3.31, DPS:20.29/s, Range:4000m"), "AX Multi Cannon Fixed Medium", "AX Multi Cannon"),
    "hpt_atmulticannon_gimbal_large"                => ModuleRecord::fixed(129030701, 8.0, 0.97, Some("Damage:4.89, DPS:22.68/s, Range:4000m"), "AX Multi Cannon Gimbal Large", "AX Multi Cannon"),
    "hpt_atmulticannon_gimbal_medium"               => ModuleRecord::fixed(129030700, 4.0, 0.64, Some("Damage:2.65, DPS:16.22/s, Range:4000m"), "AX Multi Cannon Gimbal Medium", "AX Multi Cannon"),
    "hpt_atmulticannon_turret_large"                => ModuleRecord::fixed(128793060, 8.0, 0.64, Some("Damage:3.31, DPS:17.26/s, Range:4000m"), "AX Multi Cannon Turret Large", "AX Multi Cannon"),
    "hpt_atmulticannon_turret_medium"               => ModuleRecord::fixed(128793059, 4.0, 0.5, Some("Damage:1.7, DPS:10.91/s, Range:4000m"), "AX Multi Cannon Turret Medium", "AX Multi Cannon"),
    "hpt_basicmissilerack_fixed_large"              => ModuleRecord::fixed(128049494, 8.0, 1.62, Some("Damage:40.0, DPS:13.33/s, Range:5000m"), "Seeker Missile Rack Fixed Large", "Seeker Missile Rack"),
    "hpt_basicmissilerack_fixed_medium"             => ModuleRecord::fixed(128049493, 4.0, 1.2, Some("Damage:40.0, DPS:13.33/s, Range:5000m"), "Seeker Missile Rack Fixed Medium", "Seeker Missile Rack"),
    "hpt_basicmissilerack_fixed_small"              => ModuleRecord::fixed(128049492, 2.0, 0.6, Some("Damage:40.0, DPS:13.33/s, Range:5000m"), "Seeker Missile Rack Fixed Small", "Seeker Missile Rack"),
    "hpt_beamlaser_fixed_huge"                      => ModuleRecord::fixed(128049431, 16.0, 2.61, Some("Damage:41.38, DPS:41.38/s, Range:3000m"), "Beam Laser Fixed Huge", "Beam Laser"),
    "hpt_beamlaser_fixed_large"                     => ModuleRecord::fixed(128049430, 8.0, 1.62, Some("Damage:25.78, DPS:25.78/s, Range:3000m"), "Beam Laser Fixed Large", "Beam Laser"),
    "hpt_beamlaser_fixed_medium"                    => ModuleRecord::fixed(128049429, 4.0, 1.01, Some("Damage:15.96, DPS:15.96/s, Range:3000m"), "Beam Laser Fixed Medium", "Beam Laser"),
    "hpt_beamlaser_fixed_small"                     => ModuleRecord::fixed(128049428, 2.0, 0.62, Some("Damage:9.82, DPS:9.82/s, Range:3000m"), "Beam Laser Fixed Small", "Beam Laser"),
    "hpt_beamlaser_gimbal_huge"                     => ModuleRecord::fixed(128681994, 16.0, 2.57, Some("Damage:32.68, DPS:32.68/s, Range:3000m"), "Beam Laser Gimbal Huge", "Beam Laser"),
    "hpt_beamlaser_gimbal_large"                    => ModuleRecord::fixed(128049434, 8.0, 1.6, Some("Damage:20.3, DPS:20.3/s, Range:3000m"), "Beam Laser Gimbal Large", "Beam Laser"),
    "hpt_beamlaser_gimbal_medium"                   => ModuleRecord::fixed(128049433, 4.0, 1.0, Some("Damage:12.52, DPS:12.52/s, Range:3000m"), "Beam Laser Gimbal Medium", "Beam Laser"),
    "hpt_beamlaser_gimbal_small"                    => ModuleRecord::fixed(128049432, 2.0, 0.6, Some("Damage:7.68, DPS:7.68/s, Range:3000m"), "Beam Laser Gimbal Small", "Beam Laser"),
    "hpt_beamlaser_turret_large"                    => ModuleRecord::fixed(128049437, 8.0, 1.51, Some("Damage:14.36, DPS:14.36/s, Range:3000m"), "Beam Laser Turret Large", "Beam Laser"),
    "hpt_beamlaser_turret_medium"                   => ModuleRecord::fixed(128049436, 4.0, 0.93, Some("Damage:8.83, DPS:8.83/s, Range:3000m"), "Beam Laser Turret Medium", "Beam Laser"),
    "hpt_beamlaser_turret_small"                    => ModuleRecord::fixed(128049435, 2.0, 0.57, Some("Damage:5.4, DPS:5.4/s, Range:3000m"), "Beam Laser Turret Small", "Beam Laser"),
    "hpt_cannon_fixed_huge"                         => ModuleRecord::fixed(128049441, 16.0, 0.92, Some("Damage:82.1, DPS:31.3/s, Range:4500m"), "Cannon Fixed Huge", "Cannon"),
    "hpt_cannon_fixed_large"                        => ModuleRecord::fixed(128049440, 8.0, 0.67, Some("Damage:54.94, DPS:23.1/s, Range:4000m"), "Cannon Fixed Large", "Cannon"),
    "hpt_cannon_fixed_medium"                       => ModuleRecord::fixed(128049439, 4.0, 0.49, Some("Damage:36.5, DPS:16.98/s, Range:3500m"), "Cannon Fixed Medium", "Cannon"),
    "hpt_cannon_fixed_small"                        => ModuleRecord::fixed(128049438, 2.0, 0.34, Some("Damage:22.5, DPS:11.25/s, Range:3000m"), "Cannon Fixed Small", "Cannon"),
    "hpt_cannon_gimbal_huge"                        => ModuleRecord::fixed(128049444, 16.0, 1.03, Some("Damage:56.59, DPS:22.28/s, Range:4500m"), "Cannon Gimbal Huge", "Cannon"),
    "hpt_cannon_gimbal_large"                       => ModuleRecord::fixed(128671120, 8.0, 0.75, Some("Damage:37.42, DPS:16.7/s, Range:4000m"), "Cannon Gimbal Large", "Cannon"),
    "hpt_cannon_gimbal_medium"                      => ModuleRecord::fixed(128049443, 4.0, 0.54, Some("Damage:24.5, DPS:11.96/s, Range:3500m"), "Cannon Gimbal Medium", "Cannon"),
    "hpt_cannon_gimbal_small"                       => ModuleRecord::fixed(128049442, 2.0, 0.38, Some("Damage:16.0, DPS:8.42/s, Range:3000m"), "Cannon Gimbal Small", "Cannon"),
    "hpt_cannon_turret_large"                       => ModuleRecord::fixed(128049447, 8.0, 0.64, Some("Damage:30.4, DPS:11.38/s, Range:4000m"), "Cannon Turret Large", "Cannon"),
    "hpt_cannon_turret_medium"                      => ModuleRecord::fixed(128049446, 4.0, 0.45, Some("Damage:19.8, DPS:8.17/s, Range:3500m"), "Cannon Turret Medium", "Cannon"),
    "hpt_cannon_turret_small"                       => ModuleRecord::fixed(128049445, 2.0, 0.32, Some("Damage:12.77, DPS:5.8/s, Range:3000m"), "Cannon Turret Small", "Cannon"),
    "hpt_cargoscanner_size0_class1"                 => ModuleRecord::fixed(128662520, 1.3, 0.2, Some("Range:2000m"), "Manifest Scanner Rating E", "Manifest Scanner"),
    "hpt_cargoscanner_size0_class2"                 => ModuleRecord::fixed(128662521, 1.3, 0.4, Some("Range:2500m"), "Manifest Scanner Rating D", "Manifest Scanner"),
    "hpt_cargoscanner_size0_class3"                 => ModuleRecord::fixed(128662522, 1.3, 0.8, Some("Range:3000m"), "Manifest Scanner Rating C", "Manifest Scanner"),
    "hpt_cargoscanner_size0_class4"                 => ModuleRecord::fixed(128662523, 1.3, 1.6, Some("Range:3500m"), "Manifest Scanner Rating B", "Manifest Scanner"),
    "hpt_cargoscanner_size0_class5"                 => ModuleRecord::fixed(128662524, 1.3, 3.2, Some("Range:4000m"), "Manifest Scanner Rating A", "Manifest Scanner"),
    "hpt_causticsinklauncher_turret_tiny"           => ModuleRecord::fixed(129019262, 1.7, 0.6, Some("Ammo:2"), "Caustic Sink Launcher", "Caustic Sink Launcher"),
    "hpt_chafflauncher_tiny"                        => ModuleRecord::fixed(128049513, 1.3, 0.2, Some("Ammo:10"), "Chaff Launcher", "Chaff Launcher"),
    "hpt_cloudscanner_size0_class1"                 => ModuleRecord::fixed(128662525, 1.3, 0.2, Some("Range:2000m"), "Frame Shift Wake Scanner Rating E", "Frame Shift Wake Scanner"),
    "hpt_cloudscanner_size0_class2"                 => ModuleRecord::fixed(128662526, 1.3, 0.4, Some("Range:2500m"), "Frame Shift Wake Scanner Rating D", "Frame Shift Wake Scanner"),
    "hpt_cloudscanner_size0_class3"                 => ModuleRecord::fixed(128662527, 1.3, 0.8, Some("Range:3000m"), "Frame Shift Wake Scanner Rating C", "Frame Shift Wake Scanner"),
    "hpt_cloudscanner_size0_class4"                 => ModuleRecord::fixed(128662528, 1.3, 1.6, Some("Range:3500m"), "Frame Shift Wake Scanner Rating B", "Frame Shift Wake Scanner"),
    "hpt_cloudscanner_size0_class5"                 => ModuleRecord::fixed(128662529, 1.3, 3.2, Some("Range:4000m"), "Frame Shift Wake Scanner Rating A", "Frame Shift Wake Scanner"),
    "hpt_crimescanner_size0_class1"                 => ModuleRecord::fixed(128662530, 1.3, 0.2, Some("Range:2000m"), "Kill Warrant Scanner Rating E", "Kill Warrant Scanner"),
    "hpt_crimescanner_size0_class2"                 => ModuleRecord::fixed(128662531, 1.3, 0.4, Some("Range:2500m"), "Kill Warrant Scanner Rating D", "Kill Warrant Scanner"),
    "hpt_crimescanner_size0_class3"                 => ModuleRecord::fixed(128662532, 1.3, 0.8, Some("Range:3000m"), "Kill Warrant Scanner Rating C", "Kill Warrant Scanner"),
    "hpt_crimescanner_size0_class4"                 => ModuleRecord::fixed(128662533, 1.3, 1.6, Some("Range:3500m"), "Kill Warrant Scanner Rating B", "Kill Warrant Scanner"),
    "hpt_crimescanner_size0_class5"                 => ModuleRecord::fixed(128662534, 1.3, 3.2, Some("Range:4000m"), "Kill Warrant Scanner Rating A", "Kill Warrant Scanner"),
    "hpt_dumbfiremissilerack_fixed_large"           => ModuleRecord::fixed(128891602, 8.0, 1.62, Some("Damage:50.0, DPS:25.0/s, Range:5000m"), "Missile Rack Fixed Large", "Missile Rack"),
    "hpt_dumbfiremissilerack_fixed_medium"          => ModuleRecord::fixed(128666725, 4.0, 1.2, Some("Damage:50.0, DPS:25.0/s, Range:5000m"), "Missile Rack Fixed Medium", "Missile Rack"),
    "hpt_dumbfiremissilerack_fixed_small"           => ModuleRecord::fixed(128666724, 2.0, 0.4, Some("Damage:50.0, DPS:25.0/s, Range:5000m"), "Missile Rack Fixed Small", "Missile Rack"),
    "hpt_electroniccountermeasure_tiny"             => ModuleRecord::fixed(128049516, 1.3, 0.2, Some("Range:3000m"), "Electronic Countermeasure", "Electronic Countermeasure"),
    "hpt_flakmortar_fixed_medium"                   => ModuleRecord::fixed(128785626, 4.0, 1.2, Some("Damage:34.0, DPS:17.0/s, Range:1000m"), "Remote Release Flak Launcher Fixed Medium", "Remote Release Flak Launcher"),
    "hpt_flakmortar_turret_medium"                  => ModuleRecord::fixed(128793058, 4.0, 1.2, Some("Damage:34.0, DPS:17.0/s, Range:1000m"), "Remote Release Flak Launcher Turret Medium", "Remote Release Flak Launcher"),
    "hpt_guardian_gausscannon_fixed_medium"         => ModuleRecord::fixed(128833687, 4.0, 2.61, Some("Damage:70.0, DPS:42.7/s, Range:3000m"), "Guardian Gauss Cannon Fixed Medium", "Guardian Gauss Cannon"),
    "hpt_guardian_gausscannon_fixed_small"          => ModuleRecord::fixed(128891610, 2.0, 1.91, Some("Damage:40.0, DPS:34.3/s, Range:3000m"), "Guardian Gauss Cannon Fixed Small", "Guardian Gauss Cannon"),
    "hpt_guardian_plasmalauncher_fixed_large"       => ModuleRecord::fixed(128834783, 8.0, 3.1, Some("Damage:7.0, DPS:35.0/s, Range:3000m"), "Guardian Plasma Charger Fixed Large", "Guardian Plasma Charger"),
    "hpt_guardian_plasmalauncher_fixed_medium"      => ModuleRecord::fixed(128833998, 4.0, 2.13, Some("Damage:5.0, DPS:25.0/s, Range:3000m"), "Guardian Plasma Charger Fixed Medium", "Guardian Plasma Charger"),
    "hpt_guardian_plasmalauncher_fixed_small"       => ModuleRecord::fixed(128891607, 2.0, 1.4, Some("Damage:3.0, DPS:15.0/s, Range:3000m"), "Guardian Plasma Charger Fixed Small", "Guardian Plasma Charger"),
    "hpt_guardian_plasmalauncher_turret_large"      => ModuleRecord::fixed(128834784, 8.0, 2.53, Some("Damage:6.0, DPS:30.0/s, Range:3000m"), "Guardian Plasma Charger Turret Large", "Guardian Plasma Charger"),
    "hpt_guardian_plasmalauncher_turret_medium"     => ModuleRecord::fixed(128833999, 4.0, 2.01, Some("Damage:4.0, DPS:20.0/s, Range:3000m"), "Guardian Plasma Charger Turret Medium", "Guardian Plasma Charger"),
    "hpt_guardian_plasmalauncher_turret_small"      => ModuleRecord::fixed(128891606, 2.0, 1.6, Some("Damage:2.0, DPS:10.0/s, Range:3000m"), "Guardian Plasma Charger Turret Small", "Guardian Plasma Charger"),
    "hpt_guardian_shardcannon_fixed_large"          => ModuleRecord::fixed(128834778, 8.0, 1.68, Some("Damage:5.2, DPS:84.24/s, Range:1700m"), "Guardian Shard Cannon Fixed Large", "Guardian Shard Cannon"),
    "hpt_guardian_shardcannon_fixed_medium"         => ModuleRecord::fixed(128834000, 4.0, 1.21, Some("Damage:3.7, DPS:59.94/s, Range:1700m"), "Guardian Shard Cannon Fixed Medium", "Guardian Shard Cannon"),
    "hpt_guardian_shardcannon_fixed_small"          => ModuleRecord::fixed(128891609, 2.0, 0.87, Some("Damage:2.0, DPS:32.4/s, Range:1700m"), "Guardian Shard Cannon Fixed Small", "Guardian Shard Cannon"),
    "hpt_guardian_shardcannon_turret_large"         => ModuleRecord::fixed(128834779, 8.0, 1.39, Some("Damage:3.5, DPS:56.7/s, Range:1700m"), "Guardian Shard Cannon Turret Large", "Guardian Shard Cannon"),
    "hpt_guardian_shardcannon_turret_medium"        => ModuleRecord::fixed(128834001, 4.0, 1.16, Some("Damage:2.1, DPS:34.02/s, Range:1700m"), "Guardian Shard Cannon Turret Medium", "Guardian Shard Cannon"),
    "hpt_guardian_shardcannon_turret_small"         => ModuleRecord::fixed(128891608, 2.0, 0.72, Some("Damage:1.1, DPS:17.82/s, Range:1700m"), "Guardian Shard Cannon Turret Small", "Guardian Shard Cannon"),
    "hpt_heatsinklauncher_turret_tiny"              => ModuleRecord::fixed(128049519, 1.3, 0.0, Some("Ammo:2"), "Heat Sink Launcher", "Heat Sink Launcher"),
    "hpt_minelauncher_fixed_medium"                 => ModuleRecord::fixed(128049501, 4.0, 0.4, Some("Damage:44.0, DPS:44.0/s, Range:3000m"), "Mine Launcher Fixed Medium", "Mine Launcher"),
    "hpt_minelauncher_fixed_small"                  => ModuleRecord::fixed(128049500, 2.0, 0.4, Some("Damage:44.0, DPS:44.0/s, Range:3000m"), "Mine Launcher Fixed Small", "Mine Launcher"),
    "hpt_minelauncher_fixed_small_impulse"          => ModuleRecord::fixed(128671448, 2.0, 0.4, Some("Damage:32, DPS:32/s, Range:3000m"), "Shock Mine Launcher Fixed Small", "Mine Launcher"),
    "hpt_mining_abrblstr_fixed_small"               => ModuleRecord::fixed(128915458, 2.0, 0.34, Some("Damage:4, Range:1000m"), "Abrasion Blaster Fixed Small", "Abrasion Blaster"),
    "hpt_mining_abrblstr_turret_small"              => ModuleRecord::fixed(128915459, 2.0, 0.47, Some("Damage:4, Range:1000m"), "Abrasion Blaster Turret Small", "Abrasion Blaster"),
    "hpt_mining_seismchrgwarhd_fixed_medium"        => ModuleRecord::fixed(128915460, 4.0, 1.2, Some("Damage:15, Range:1500m"), "Seismic Charge Launcher Fixed Medium", "Seismic Charge Launcher"),
    "hpt_mining_seismchrgwarhd_turret_medium"       => ModuleRecord::fixed(128915461, 4.0, 1.2, Some("Damage:15, Range:1500m"), "Seismic Charge Launcher Turret Medium", "Seismic Charge Launcher"),
    "hpt_mining_subsurfdispmisle_fixed_medium"      => ModuleRecord::fixed(128915456, 4.0, 1.01, Some("Damage:5, Range:3000m"), "Sub-Surface Displacement Missile Fixed Medium", "Sub-Surface Displacement Missile"),
    "hpt_mining_subsurfdispmisle_fixed_small"       => ModuleRecord::fixed(128915454, 2.0, 0.42, Some("Damage:5, Range:3000m"), "Sub-Surface Displacement Missile Fixed Small", "Sub-Surface Displacement Missile"),
    "hpt_mining_subsurfdispmisle_turret_medium"     => ModuleRecord::fixed(128915457, 4.0, 0.93, Some("Damage:5, Range:3000m"), "Sub-Surface Displacement Missile Turret Medium", "Sub-Surface Displacement Missile"),
    "hpt_mining_subsurfdispmisle_turret_small"      => ModuleRecord::fixed(128915455, 2.0, 0.53, Some("Damage:5, Range:3000m"), "Sub-Surface Displacement Missile Turret Small", "Sub-Surface Displacement Missile"),
    "hpt_mininglaser_fixed_medium"                  => ModuleRecord::fixed(128049526, 2.0, 0.75, Some("Damage:4.0, DPS:8.0/s, Range:500m"), "Mining Laser Fixed Medium", "Mining Laser"),
    "hpt_mininglaser_fixed_small"                   => ModuleRecord::fixed(128049525, 2.0, 0.5, Some("Damage:2.0, DPS:4.0/s, Range:500m"), "Mining Laser Fixed Small", "Mining Laser"),
    "hpt_mininglaser_turret_medium"                 => ModuleRecord::fixed(128740820, 2.0, 0.75, Some("Damage:4.0, DPS:8.0/s, Range:500m"), "Mining Laser Turret Medium", "Mining Laser"),
    "hpt_mininglaser_turret_small"                  => ModuleRecord::fixed(128740819, 2.0, 0.5, Some("Damage:2.0, DPS:4.0/s, Range:500m"), "Mining Laser Turret Small", "Mining Laser"),
    "hpt_mrascanner_size0_class1"                   => ModuleRecord::fixed(128915718, 1.3, 0.2, Some("Range:2000m"), "Pulse Wave Analyser Rating E", "Pulse Wave Analyser"),
    "hpt_mrascanner_size0_class2"                   => ModuleRecord::fixed(128915719, 1.3, 0.4, Some("Range:2500m"), "Pulse Wave Analyser Rating D", "Pulse Wave Analyser"),
    "hpt_mrascanner_size0_class3"                   => ModuleRecord::fixed(128915720, 1.3, 0.8, Some("Range:3000m"), "Pulse Wave Analyser Rating C", "Pulse Wave Analyser"),
    "hpt_mrascanner_size0_class4"                   => ModuleRecord::fixed(128915721, 1.3, 1.6, Some("Range:3500m"), "Pulse Wave Analyser Rating B", "Pulse Wave Analyser"),
    "hpt_mrascanner_size0_class5"                   => ModuleRecord::fixed(128915722, 1.3, 3.2, Some("Range:4000m"), "Pulse Wave Analyser Rating A", "Pulse Wave Analyser"),
    "hpt_multicannon_fixed_huge"                    => ModuleRecord::fixed(128049458, 16.0, 0.73, Some("Damage:4.61, DPS:28.37/s, Range:4000m"), "Multi Cannon Fixed Huge", "Multi Cannon"),
    "hpt_multicannon_fixed_large"                   => ModuleRecord::fixed(128049457, 8.0, 0.64, Some("Damage:3.95, DPS:23.26/s, Range:4000m"), "Multi Cannon Fixed Large", "Multi Cannon"),
    "hpt_multicannon_fixed_medium"                  => ModuleRecord::fixed(128049456, 4.0, 0.46, Some("Damage:2.19, DPS:15.58/s, Range:4000m"), "Multi Cannon Fixed Medium", "Multi Cannon"),
    "hpt_multicannon_fixed_small"                   => ModuleRecord::fixed(128049455, 2.0, 0.28, Some("Damage:1.12, DPS:8.63/s, Range:4000m"), "Multi Cannon Fixed Small", "Multi Cannon"),
    "hpt_multicannon_gimbal_huge"                   => ModuleRecord::fixed(128681996, 16.0, 1.22, Some("Damage:3.46, DPS:26.08/s, Range:4000m"), "Multi Cannon Gimbal Huge", "Multi Cannon"),
    "hpt_multicannon_gimbal_large"                  => ModuleRecord::fixed(128049461, 8.0, 0.97, Some("Damage:2.98, DPS:18.46/s, Range:4000m"), "Multi Cannon Gimbal Large", "Multi Cannon"),
    "hpt_multicannon_gimbal_medium"                 => ModuleRecord::fixed(128049460, 4.0, 0.64, Some("Damage:1.64, DPS:12.81/s, Range:4000m"), "Multi Cannon Gimbal Medium", "Multi Cannon"),
    "hpt_multicannon_gimbal_small"                  => ModuleRecord::fixed(128049459, 2.0, 0.37, Some("Damage:0.82, DPS:6.82/s, Range:4000m"), "Multi Cannon Gimbal Small", "Multi Cannon"),
    "hpt_multicannon_turret_large"                  => ModuleRecord::fixed(128049464, 8.0, 0.86, Some("Damage:2.23, DPS:12.76/s, Range:4000m"), "Multi Cannon Turret Large", "Multi Cannon"),
    "hpt_multicannon_turret_medium"                 => ModuleRecord::fixed(128049463, 4.0, 0.5, Some("Damage:1.17, DPS:7.31/s, Range:4000m"), "Multi Cannon Turret Medium", "Multi Cannon"),
    "hpt_multicannon_turret_small"                  => ModuleRecord::fixed(128049462, 2.0, 0.26, Some("Damage:0.56, DPS:4.0/s, Range:4000m"), "Multi Cannon Turret Small", "Multi Cannon"),
    "hpt_plasmaaccelerator_fixed_huge"              => ModuleRecord::fixed(128049467, 16.0, 2.63, Some("Damage:125.25, DPS:34.06/s, Range:3500m"), "Plasma Accelerator Fixed Huge", "Plasma Accelerator"),
    "hpt_plasmaaccelerator_fixed_large"             => ModuleRecord::fixed(128049466, 8.0, 1.97, Some("Damage:83.4, DPS:26.79/s, Range:3500m"), "Plasma Accelerator Fixed Large", "Plasma Accelerator"),
    "hpt_plasmaaccelerator_fixed_medium"            => ModuleRecord::fixed(128049465, 4.0, 1.43, Some("Damage:54.0, DPS:18.79/s, Range:3500m"), "Plasma Accelerator Fixed Medium", "Plasma Accelerator"),
    "hpt_plasmapointdefence_turret_tiny"            => ModuleRecord::fixed(128049522, 0.5, 0.2, Some("Ammo:10000"), "Point Defence", "Point Defence"),
    "hpt_plasmashockcannon_fixed_large"             => ModuleRecord::fixed(128834781, 8.0, 0.89, Some("Damage:1.73, DPS:17.3/s, Range:3000m"), "Shock Cannon Fixed Large", "Shock Cannon"),
    "hpt_plasmashockcannon_fixed_medium"            => ModuleRecord::fixed(128834002, 4.0, 0.57, Some("Damage:1.29, DPS:12.9/s, Range:3000m"), "Shock Cannon Fixed Medium", "Shock Cannon"),
    "hpt_plasmashockcannon_fixed_small"             => ModuleRecord::fixed(128834780, 2.0, 0.41, Some("Damage:0.86, DPS:8.6/s, Range:3000m"), "Shock Cannon Fixed Small", "Shock Cannon"),
    "hpt_plasmashockcannon_gimbal_large"            => ModuleRecord::fixed(128834004, 8.0, 0.89, Some("Damage:1.37, DPS:13.7/s, Range:3000m"), "Shock Cannon Gimbal Large", "Shock Cannon"),
    "hpt_plasmashockcannon_gimbal_medium"           => ModuleRecord::fixed(128834003, 4.0, 0.61, Some("Damage:1.03, DPS:10.3/s, Range:3000m"), "Shock Cannon Gimbal Medium", "Shock Cannon"),
    "hpt_plasmashockcannon_gimbal_small"            => ModuleRecord::fixed(128891604, 2.0, 0.47, Some("Damage:0.6, DPS:6.7/s, Range:3000m"), "Shock Cannon Gimbal Small", "Shock Cannon"),
    "hpt_plasmashockcannon_turret_large"            => ModuleRecord::fixed(128834006, 8.0, 0.66, Some("Damage:0.82, DPS:8.2/s, Range:3000m"), "Shock Cannon Turret Large", "Shock Cannon"),
    "hpt_plasmashockcannon_turret_medium"           => ModuleRecord::fixed(128834005, 4.0, 0.5, Some("Damage:0.61, DPS:6.1/s, Range:3000m"), "Shock Cannon Turret Medium", "Shock Cannon"),
    "hpt_plasmashockcannon_turret_small"            => ModuleRecord::fixed(128891603, 2.0, 0.54, Some("Damage:0.45, DPS:4.5/s, Range:3000m"), "Shock Cannon Turret Small", "Shock Cannon"),
    "hpt_pulselaser_fixed_huge"                     => ModuleRecord::fixed(128049384, 16.0, 1.33, Some("Damage:10.24, DPS:26.3/s, Range:3000m"), "Pulse Laser Fixed Huge", "Pulse Laser"),
    "hpt_pulselaser_fixed_large"                    => ModuleRecord::fixed(128049383, 8.0, 0.9, Some("Damage:5.98, DPS:18.04/s, Range:3000m"), "Pulse Laser Fixed Large", "Pulse Laser"),
    "hpt_pulselaser_fixed_medium"                   => ModuleRecord::fixed(128049382, 4.0, 0.6, Some("Damage:3.5, DPS:12.07/s, Range:3000m"), "Pulse Laser Fixed Medium", "Pulse Laser"),
    "hpt_pulselaser_fixed_small"                    => ModuleRecord::fixed(128049381, 2.0, 0.39, Some("Damage:2.05, DPS:7.88/s, Range:3000m"), "Pulse Laser Fixed Small", "Pulse Laser"),
    "hpt_pulselaser_gimbal_huge"                    => ModuleRecord::fixed(128681995, 16.0, 1.37, Some("Damage:7.82, DPS:21.05/s, Range:3000m"), "Pulse Laser Gimbal Huge", "Pulse Laser"),
    "hpt_pulselaser_gimbal_large"                   => ModuleRecord::fixed(128049387, 8.0, 0.92, Some("Damage:4.58, DPS:15.65/s, Range:3000m"), "Pulse Laser Gimbal Large", "Pulse Laser"),
    "hpt_pulselaser_gimbal_medium"                  => ModuleRecord::fixed(128049386, 4.0, 0.6, Some("Damage:2.68, DPS:9.93/s, Range:3000m"), "Pulse Laser Gimbal Medium", "Pulse Laser"),
    "hpt_pulselaser_gimbal_small"                   => ModuleRecord::fixed(128049385, 2.0, 0.39, Some("Damage:1.56, DPS:6.24/s, Range:3000m"), "Pulse Laser Gimbal Small", "Pulse Laser"),
    "hpt_pulselaser_turret_large"                   => ModuleRecord::fixed(128049390, 8.0, 0.89, Some("Damage:3.5, DPS:9.66/s, Range:3000m"), "Pulse Laser Turret Large", "Pulse Laser"),
    "hpt_pulselaser_turret_medium"                  => ModuleRecord::fixed(128049389, 4.0, 0.58, Some("Damage:2.05, DPS:6.24/s, Range:3000m"), "Pulse Laser Turret Medium", "Pulse Laser"),
    "hpt_pulselaser_turret_small"                   => ModuleRecord::fixed(128049388, 2.0, 0.38, Some("Damage:1.19, DPS:3.97/s, Range:3000m"), "Pulse Laser Turret Small", "Pulse Laser"),
    "hpt_pulselaserburst_fixed_huge"                => ModuleRecord::fixed(128727920, 16.0, 2.58, Some("Damage:20.61, DPS:28.5/s, Range:3000m"), "Burst Laser Fixed Huge", "Burst Laser"),
    "hpt_pulselaserburst_fixed_large"               => ModuleRecord::fixed(128049402, 8.0, 1.66, Some("Damage:7.73, DPS:20.61/s, Range:3000m"), "Burst Laser Fixed Large", "Burst Laser"),
    "hpt_pulselaserburst_fixed_medium"              => ModuleRecord::fixed(128049401, 4.0, 1.05, Some("Damage:3.53, DPS:13.31/s, Range:3000m"), "Burst Laser Fixed Medium", "Burst Laser"),
    "hpt_pulselaserburst_fixed_small"               => ModuleRecord::fixed(128049400, 2.0, 0.65, Some("Damage:1.72, DPS:8.15/s, Range:3000m"), "Burst Laser Fixed Small", "Burst Laser"),
    "hpt_pulselaserburst_gimbal_large"              => ModuleRecord::fixed(128049405, 8.0, 1.65, Some("Damage:5.16, DPS:18.87/s, Range:3000m"), "Burst Laser Gimbal Large", "Burst Laser"),
    "hpt_pulselaserburst_gimbal_medium"             => ModuleRecord::fixed(128049404, 4.0, 1.04, Some("Damage:2.45, DPS:11.84/s, Range:3000m"), "Burst Laser Gimbal Medium", "Burst Laser"),
    "hpt_pulselaserburst_gimbal_small"              => ModuleRecord::fixed(128049403, 2.0, 0.64, Some("Damage:1.22, DPS:7.34/s, Range:3000m"), "Burst Laser Gimbal Small", "Burst Laser"),
    "hpt_pulselaserburst_turret_large"              => ModuleRecord::fixed(128049408, 8.0, 1.57, Some("Damage:3.53, DPS:9.23/s, Range:3000m"), "Burst Laser Turret Large", "Burst Laser"),
    "hpt_pulselaserburst_turret_medium"             => ModuleRecord::fixed(128049407, 4.0, 0.98, Some("Damage:1.72, DPS:5.59/s, Range:3000m"), "Burst Laser Turret Medium", "Burst Laser"),
    "hpt_pulselaserburst_turret_small"              => ModuleRecord::fixed(128049406, 2.0, 0.6, Some("Damage:0.87, DPS:3.29/s, Range:3000m"), "Burst Laser Turret Small", "Burst Laser"),
    "hpt_railgun_fixed_medium"                      => ModuleRecord::fixed(128049489, 4.0, 1.63, Some("Damage:41.53, DPS:50.04/s, Range:3000m"), "Rail Gun Fixed Medium", "Rail Gun"),
    "hpt_railgun_fixed_medium_burst"                => ModuleRecord::fixed(128671341, 4.0, 1.63, Some("Damage:15, DPS:59.01/s, Range:3000m"), "Imperial Hammer Rail Gun Fixed Medium", "Rail Gun"),
    "hpt_railgun_fixed_small"                       => ModuleRecord::fixed(128049488, 2.0, 1.15, Some("Damage:23.34, DPS:37.54/s, Range:3000m"), "Rail Gun Fixed Small", "Rail Gun"),
    "hpt_shieldbooster_size0_class1"                => ModuleRecord::fixed(128668532, 0.5, 0.2, Some("Boost:4%"), "Shield Booster Rating E", "Shield Booster"),
    "hpt_shieldbooster_size0_class2"                => ModuleRecord::fixed(128668533, 1.0, 0.5, Some("Boost:8%"), "Shield Booster Rating D", "Shield Booster"),
    "hpt_shieldbooster_size0_class3"                => ModuleRecord::fixed(128668534, 2.0, 0.7, Some("Boost:12%"), "Shield Booster Rating C", "Shield Booster"),
    "hpt_shieldbooster_size0_class4"                => ModuleRecord::fixed(128668535, 3.0, 1.0, Some("Boost:16%"), "Shield Booster Rating B", "Shield Booster"),
    "hpt_shieldbooster_size0_class5"                => ModuleRecord::fixed(128668536, 3.5, 1.2, Some("Boost:20%"), "Shield Booster Rating A", "Shield Booster"),
    "hpt_slugshot_fixed_large"                      => ModuleRecord::fixed(128049453, 8.0, 1.02, Some("Damage:4.55, DPS:57.78/s, Range:2000m"), "Fragment Cannon Fixed Large", "Fragment Cannon"),
    "hpt_slugshot_fixed_medium"                     => ModuleRecord::fixed(128049451, 4.0, 0.74, Some("Damage:2.79, DPS:41.8/s, Range:2000m"), "Fragment Cannon Fixed Medium", "Fragment Cannon"),
    "hpt_slugshot_fixed_small"                      => ModuleRecord::fixed(128049448, 2.0, 0.45, Some("Damage:1.43, DPS:24.06/s, Range:2000m"), "Fragment Cannon Fixed Small", "Fragment Cannon"),
    "hpt_slugshot_gimbal_large"                     => ModuleRecord::fixed(128671321, 8.0, 1.55, Some("Damage:3.23, DPS:39.05/s, Range:2000m"), "Fragment Cannon Gimbal Large", "Fragment Cannon"),
    "hpt_slugshot_gimbal_medium"                    => ModuleRecord::fixed(128049452, 4.0, 1.03, Some("Damage:1.97, DPS:26.83/s, Range:2000m"), "Fragment Cannon Gimbal Medium", "Fragment Cannon"),
    "hpt_slugshot_gimbal_small"                     => ModuleRecord::fixed(128049449, 2.0, 0.59, Some("Damage:1.01, DPS:15.24/s, Range:2000m"), "Fragment Cannon Gimbal Small", "Fragment Cannon"),
    "hpt_slugshot_turret_large"                     => ModuleRecord::fixed(128671322, 8.0, 1.29, Some("Damage:2.29, DPS:28.61/s, Range:2000m"), "Fragment Cannon Turret Large", "Fragment Cannon"),
    "hpt_slugshot_turret_medium"                    => ModuleRecord::fixed(128049454, 4.0, 0.79, Some("Damage:1.39, DPS:19.53/s, Range:2000m"), "Fragment Cannon Turret Medium", "Fragment Cannon"),
    "hpt_slugshot_turret_small"                     => ModuleRecord::fixed(128049450, 2.0, 0.42, Some("Damage:0.69, DPS:10.83/s, Range:2000m"), "Fragment Cannon Turret Small", "Fragment Cannon"),
    "hpt_xenoscanner_advanced_tiny"                 => ModuleRecord::fixed(129022952, 1.3, 1.0, Some("Range:2000m"), "Pulse Wave Xeno Scanner", "Xeno Scanner"),
    "hpt_xenoscanner_basic_tiny"                    => ModuleRecord::fixed(128793115, 1.3, 0.2, Some("Range:500m"), "Xeno Scanner", "Xeno Scanner"),
    "hpt_xenoscannermk2_basic_tiny"                 => ModuleRecord::fixed(128808878, 1.3, 0.8, Some("Range:2000m"), "Enhanced Xeno Scanner", "Xeno Scanner"),
    "independant_trader_armour_grade1"              => ModuleRecord::fixed(128672270, 0.0, 0.0, None, "Keelback Lightweight Armour", "Armour"),
    "independant_trader_armour_grade2"              => ModuleRecord::fixed(128672271, 12.0, 0.0, None, "Keelback Reinforced Armour", "Armour"),
    "independant_trader_armour_grade3"              => ModuleRecord::fixed(128672272, 23.0, 0.0, None, "Keelback Military Armour", "Armour"),
    "independant_trader_armour_mirrored"            => ModuleRecord::fixed(128672273, 23.0, 0.0, None, "Keelback Mirrored Surface Composite Armour", "Armour"),
    "independant_trader_armour_reactive"            => ModuleRecord::fixed(128672274, 23.0, 0.0, None, "Keelback Reactive Surface Composite Armour", "Armour"),
    "int_buggybay_size2_class1"                     => ModuleRecord::fixed(128672288, 12.0, 0.25, Some("Vehicles:1"), "Planetary Vehicle Hangar Class 2 Rating H", "Planetary Vehicle Hangar"),
    "int_buggybay_size2_class2"                     => ModuleRecord::fixed(128672289, 6.0, 0.75, Some("Vehicles:1"), "Planetary Vehicle Hangar Class 2 Rating G", "Planetary Vehicle Hangar"),
    "int_buggybay_size4_class1"                     => ModuleRecord::fixed(128672290, 20.0, 0.4, Some("Vehicles:2"), "Planetary Vehicle Hangar Class 4 Rating H", "Planetary Vehicle Hangar"),
    "int_buggybay_size4_class2"                     => ModuleRecord::fixed(128672291, 10.0, 1.2, Some("Vehicles:2"), "Planetary Vehicle Hangar Class 4 Rating G", "Planetary Vehicle Hangar"),
    "int_buggybay_size6_class1"                     => ModuleRecord::fixed(128672292, 34.0, 0.6, Some("Vehicles:4"), "Planetary Vehicle Hangar Class 6 Rating H", "Planetary Vehicle Hangar"),
    "int_buggybay_size6_class2"                     => ModuleRecord::fixed(128672293, 17.0, 1.8, Some("Vehicles:4"), "Planetary Vehicle Hangar Class 6 Rating G", "Planetary Vehicle Hangar"),
    "int_cargorack_size1_class1"                    => ModuleRecord::fixed(128064338, 0.0, 0.0, Some("Size:2t"), "Cargo Rack Class 1 Rating E", "Cargo Rack"),
    "int_cargorack_size2_class1"                    => ModuleRecord::fixed(128064339, 0.0, 0.0, Some("Size:4t"), "Cargo Rack Class 2 Rating E", "Cargo Rack"),
    "int_cargorack_size3_class1"                    => ModuleRecord::fixed(128064340, 0.0, 0.0, Some("Size:8t"), "Cargo Rack Class 3 Rating E", "Cargo Rack"),
    "int_cargorack_size4_class1"                    => ModuleRecord::fixed(128064341, 0.0, 0.0, Some("Size:16t"), "Cargo Rack Class 4 Rating E", "Cargo Rack"),
    "int_cargorack_size5_class1"                    => ModuleRecord::fixed(128064342, 0.0, 0.0, Some("Size:32t"), "Cargo Rack Class 5 Rating E", "Cargo Rack"),
    "int_cargorack_size6_class1"                    => ModuleRecord::fixed(128064343, 0.0, 0.0, Some("Size:64t"), "Cargo Rack Class 6 Rating E", "Cargo Rack"),
    "int_cargorack_size7_class1"                    => ModuleRecord::fixed(128064344, 0.0, 0.0, Some("Size:128t"), "Cargo Rack Class 7 Rating E", "Cargo Rack"),
    "int_cargorack_size8_class1"                    => ModuleRecord::fixed(128064345, 0.0, 0.0, Some("Size:256t"), "Cargo Rack Class 8 Rating E", "Cargo Rack"),
    "int_corrosionproofcargorack_size1_class1"      => ModuleRecord::fixed(128681641, 0.0, 0.0, Some("Size:2t"), "Corrosion Resistant Cargo Rack Class 1 Rating E", "Corrosion Resistant Cargo Rack"),
    "int_corrosionproofcargorack_size1_class2"      => ModuleRecord::fixed(128681992, 0.0, 0.0, Some("Size:4t"), "Corrosion Resistant Cargo Rack Class 1 Rating F", "Corrosion Resistant Cargo Rack"),
    "int_corrosionproofcargorack_size4_class1"      => ModuleRecord::fixed(128833944, 0.0, 0.0, Some("Size:16t"), "Corrosion Resistant Cargo Rack Class 4 Rating E", "Corrosion Resistant Cargo Rack"),
    "int_corrosionproofcargorack_size5_class1"      => ModuleRecord::fixed(128957069, 0.0, 0.0, Some("Size:32t"), "Corrosion Resistant Cargo Rack Class 5 Rating E", "Corrosion Resistant Cargo Rack"),
    "int_corrosionproofcargorack_size6_class1"      => ModuleRecord::fixed(999999906, 0.0, 0.0, Some("Size:64t"), "Corrosion Resistant Cargo Rack Class 6 Rating E", "Corrosion Resistant Cargo Rack"),
    "int_detailedsurfacescanner_tiny"               => ModuleRecord::fixed(128666634, 1.3, 0.0, None, "Detailed Surface Scanner", "Detailed Surface Scanner"),
    "int_dockingcomputer_advanced"                  => ModuleRecord::fixed(128935155, 0.0, 0.45, None, "Advanced Docking Computer", "Docking Computer"),
    "int_dockingcomputer_standard"                  => ModuleRecord::fixed(128049549, 0.0, 0.39, None, "Standard Docking Computer", "Docking Computer"),
    "int_dronecontrol_collection_size1_class1"      => ModuleRecord::fixed(128671229, 0.5, 0.14, Some("Limpets:1"), "Collector Limpet Controller Class 1 Rating E", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size1_class2"      => ModuleRecord::fixed(128671230, 0.5, 0.18, Some("Limpets:1"), "Collector Limpet Controller Class 1 Rating D", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size1_class3"      => ModuleRecord::fixed(128671231, 1.3, 0.23, Some("Limpets:1"), "Collector Limpet Controller Class 1 Rating C", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size1_class4"      => ModuleRecord::fixed(128671232, 2.0, 0.28, Some("Limpets:1"), "Collector Limpet Controller Class 1 Rating B", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size1_class5"      => ModuleRecord::fixed(128671233, 1.3, 0.32, Some("Limpets:1"), "Collector Limpet Controller Class 1 Rating A", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size3_class1"      => ModuleRecord::fixed(128671234, 2.0, 0.2, Some("Limpets:2"), "Collector Limpet Controller Class 3 Rating E", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size3_class2"      => ModuleRecord::fixed(128671235, 2.0, 0.27, Some("Limpets:2"), "Collector Limpet Controller Class 3 Rating D", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size3_class3"      => ModuleRecord::fixed(128671236, 5.0, 0.34, Some("Limpets:2"), "Collector Limpet Controller Class 3 Rating C", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size3_class4"      => ModuleRecord::fixed(128671237, 8.0, 0.41, Some("Limpets:2"), "Collector Limpet Controller Class 3 Rating B", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size3_class5"      => ModuleRecord::fixed(128671238, 5.0, 0.48, Some("Limpets:2"), "Collector Limpet Controller Class 3 Rating A", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size5_class1"      => ModuleRecord::fixed(128671239, 8.0, 0.3, Some("Limpets:3"), "Collector Limpet Controller Class 5 Rating E", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size5_class2"      => ModuleRecord::fixed(128671240, 8.0, 0.4, Some("Limpets:3"), "Collector Limpet Controller Class 5 Rating D", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size5_class3"      => ModuleRecord::fixed(128671241, 20.0, 0.5, Some("Limpets:3"), "Collector Limpet Controller Class 5 Rating C", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size5_class4"      => ModuleRecord::fixed(128671242, 32.0, 0.6, Some("Limpets:3"), "Collector Limpet Controller Class 5 Rating B", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size5_class5"      => ModuleRecord::fixed(128671243, 20.0, 0.7, Some("Limpets:3"), "Collector Limpet Controller Class 5 Rating A", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size7_class1"      => ModuleRecord::fixed(128671244, 32.0, 0.41, Some("Limpets:4"), "Collector Limpet Controller Class 7 Rating E", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size7_class2"      => ModuleRecord::fixed(128671245, 32.0, 0.55, Some("Limpets:4"), "Collector Limpet Controller Class 7 Rating D", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size7_class3"      => ModuleRecord::fixed(128671246, 80.0, 0.69, Some("Limpets:4"), "Collector Limpet Controller Class 7 Rating C", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size7_class4"      => ModuleRecord::fixed(128671247, 128.0, 0.83, Some("Limpets:4"), "Collector Limpet Controller Class 7 Rating B", "Collector Limpet Controller"),
    "int_dronecontrol_collection_size7_class5"      => ModuleRecord::fixed(128671248, 80.0, 0.97, Some("Limpets:4"), "Collector Limpet Controller Class 7 Rating A", "Collector Limpet Controller"),
    "int_dronecontrol_decontamination_size1_class1" => ModuleRecord::fixed(128793941, 1.3, 0.18, Some("Limpets:1"), "Decontamination Limpet Controller Class 1 Rating E", "Decontamination Limpet Controller"),
    "int_dronecontrol_decontamination_size3_class1" => ModuleRecord::fixed(128793942, 5.2, 0.2, Some("Limpets:2"), "Decontamination Limpet Controller Class 3 Rating E", "Decontamination Limpet Controller"),
    "int_dronecontrol_decontamination_size5_class1" => ModuleRecord::fixed(128793943, 20.8, 0.5, Some("Limpets:3"), "Decontamination Limpet Controller Class 5 Rating E", "Decontamination Limpet Controller"),
    "int_dronecontrol_decontamination_size7_class1" => ModuleRecord::fixed(128793944, 83.2, 0.97, Some("Limpets:4"), "Decontamination Limpet Controller Class 7 Rating E", "Decontamination Limpet Controller"),
    "int_dronecontrol_fueltransfer_size1_class1"    => ModuleRecord::fixed(128671249, 0.5, 0.14, Some("Limpets:1"), "Fuel Transfer Limpet Controller Class 1 Rating E", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size1_class2"    => ModuleRecord::fixed(128671250, 0.5, 0.18, Some("Limpets:1"), "Fuel Transfer Limpet Controller Class 1 Rating D", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size1_class3"    => ModuleRecord::fixed(128671251, 1.3, 0.23, Some("Limpets:1"), "Fuel Transfer Limpet Controller Class 1 Rating C", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size1_class4"    => ModuleRecord::fixed(128671252, 2.0, 0.28, Some("Limpets:1"), "Fuel Transfer Limpet Controller Class 1 Rating B", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size1_class5"    => ModuleRecord::fixed(128671253, 1.3, 0.32, Some("Limpets:1"), "Fuel Transfer Limpet Controller Class 1 Rating A", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size3_class1"    => ModuleRecord::fixed(128671254, 2.0, 0.2, Some("Limpets:2"), "Fuel Transfer Limpet Controller Class 3 Rating E", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size3_class2"    => ModuleRecord::fixed(128671255, 2.0, 0.27, Some("Limpets:2"), "Fuel Transfer Limpet Controller Class 3 Rating D", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size3_class3"    => ModuleRecord::fixed(128671256, 5.0, 0.34, Some("Limpets:2"), "Fuel Transfer Limpet Controller Class 3 Rating C", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size3_class4"    => ModuleRecord::fixed(128671257, 8.0, 0.41, Some("Limpets:2"), "Fuel Transfer Limpet Controller Class 3 Rating B", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size3_class5"    => ModuleRecord::fixed(128671258, 5.0, 0.48, Some("Limpets:2"), "Fuel Transfer Limpet Controller Class 3 Rating A", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size5_class1"    => ModuleRecord::fixed(128671259, 8.0, 0.3, Some("Limpets:3"), "Fuel Transfer Limpet Controller Class 5 Rating E", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size5_class2"    => ModuleRecord::fixed(128671260, 8.0, 0.4, Some("Limpets:3"), "Fuel Transfer Limpet Controller Class 5 Rating D", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size5_class3"    => ModuleRecord::fixed(128671261, 20.0, 0.5, Some("Limpets:3"), "Fuel Transfer Limpet Controller Class 5 Rating C", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size5_class4"    => ModuleRecord::fixed(128671262, 32.0, 0.6, Some("Limpets:3"), "Fuel Transfer Limpet Controller Class 5 Rating B", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size5_class5"    => ModuleRecord::fixed(128671263, 20.0, 0.7, Some("Limpets:3"), "Fuel Transfer Limpet Controller Class 5 Rating A", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size7_class1"    => ModuleRecord::fixed(128671264, 32.0, 0.41, Some("Limpets:4"), "Fuel Transfer Limpet Controller Class 7 Rating E", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size7_class2"    => ModuleRecord::fixed(128671265, 32.0, 0.55, Some("Limpets:4"), "Fuel Transfer Limpet Controller Class 7 Rating D", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size7_class3"    => ModuleRecord::fixed(128671266, 80.0, 0.69, Some("Limpets:4"), "Fuel Transfer Limpet Controller Class 7 Rating C", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size7_class4"    => ModuleRecord::fixed(128671267, 128.0, 0.83, Some("Limpets:4"), "Fuel Transfer Limpet Controller Class 7 Rating B", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_fueltransfer_size7_class5"    => ModuleRecord::fixed(128671268, 80.0, 0.97, Some("Limpets:4"), "Fuel Transfer Limpet Controller Class 7 Rating A", "Fuel Transfer Limpet Controller"),
    "int_dronecontrol_prospector_size1_class1"      => ModuleRecord::fixed(128671269, 0.5, 0.14, Some("Limpets:1"), "Prospector Limpet Controller Class 1 Rating E", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size1_class2"      => ModuleRecord::fixed(128671270, 0.5, 0.18, Some("Limpets:1"), "Prospector Limpet Controller Class 1 Rating D", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size1_class3"      => ModuleRecord::fixed(128671271, 1.3, 0.23, Some("Limpets:1"), "Prospector Limpet Controller Class 1 Rating C", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size1_class4"      => ModuleRecord::fixed(128671272, 2.0, 0.28, Some("Limpets:1"), "Prospector Limpet Controller Class 1 Rating B", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size1_class5"      => ModuleRecord::fixed(128671273, 1.3, 0.32, Some("Limpets:1"), "Prospector Limpet Controller Class 1 Rating A", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size3_class1"      => ModuleRecord::fixed(128671274, 2.0, 0.2, Some("Limpets:2"), "Prospector Limpet Controller Class 3 Rating E", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size3_class2"      => ModuleRecord::fixed(128671275, 2.0, 0.27, Some("Limpets:2"), "Prospector Limpet Controller Class 3 Rating D", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size3_class3"      => ModuleRecord::fixed(128671276, 5.0, 0.34, Some("Limpets:2"), "Prospector Limpet Controller Class 3 Rating C", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size3_class4"      => ModuleRecord::fixed(128671277, 8.0, 0.41, Some("Limpets:2"), "Prospector Limpet Controller Class 3 Rating B", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size3_class5"      => ModuleRecord::fixed(128671278, 5.0, 0.48, Some("Limpets:2"), "Prospector Limpet Controller Class 3 Rating A", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size5_class1"      => ModuleRecord::fixed(128671279, 8.0, 0.3, Some("Limpets:3"), "Prospector Limpet Controller Class 5 Rating E", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size5_class2"      => ModuleRecord::fixed(128671280, 8.0, 0.4, Some("Limpets:3"), "Prospector Limpet Controller Class 5 Rating D", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size5_class3"      => ModuleRecord::fixed(128671281, 20.0, 0.5, Some("Limpets:3"), "Prospector Limpet Controller Class 5 Rating C", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size5_class4"      => ModuleRecord::fixed(128671282, 32.0, 0.6, Some("Limpets:3"), "Prospector Limpet Controller Class 5 Rating B", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size5_class5"      => ModuleRecord::fixed(128671283, 20.0, 0.7, Some("Limpets:3"), "Prospector Limpet Controller Class 5 Rating A", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size7_class1"      => ModuleRecord::fixed(128671284, 32.0, 0.41, Some("Limpets:4"), "Prospector Limpet Controller Class 7 Rating E", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size7_class2"      => ModuleRecord::fixed(128671285, 32.0, 0.55, Some("Limpets:4"), "Prospector Limpet Controller Class 7 Rating D", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size7_class3"      => ModuleRecord::fixed(128671286, 80.0, 0.69, Some("Limpets:4"), "Prospector Limpet Controller Class 7 Rating C", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size7_class4"      => ModuleRecord::fixed(128671287, 128.0, 0.83, Some("Limpets:4"), "Prospector Limpet Controller Class 7 Rating B", "Prospector Limpet Controller"),
    "int_dronecontrol_prospector_size7_class5"      => ModuleRecord::fixed(128671288, 80.0, 0.97, Some("Limpets:4"), "Prospector Limpet Controller Class 7 Rating A", "Prospector Limpet Controller"),
    "int_dronecontrol_recon_size1_class1"           => ModuleRecord::fixed(128837858, 1.3, 0.18, Some("Limpets:1"), "Recon Limpet Controller Class 1 Rating E", "Recon Limpet Controller"),
    "int_dronecontrol_recon_size3_class1"           => ModuleRecord::fixed(128837859, 5.2, 0.2, Some("Limpets:2"), "Recon Limpet Controller Class 3 Rating E", "Recon Limpet Controller"),
    "int_dronecontrol_recon_size5_class1"           => ModuleRecord::fixed(128837860, 20.8, 0.5, Some("Limpets:3"), "Recon Limpet Controller Class 5 Rating E", "Recon Limpet Controller"),
    "int_dronecontrol_recon_size7_class1"           => ModuleRecord::fixed(128837861, 83.2, 0.97, Some("Limpets:4"), "Recon Limpet Controller Class 7 Rating E", "Recon Limpet Controller"),
    "int_dronecontrol_repair_size1_class1"          => ModuleRecord::fixed(128777327, 0.5, 0.14, Some("Limpets:1"), "Repair Limpet Controller Class 1 Rating E", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size1_class2"          => ModuleRecord::fixed(128777328, 0.5, 0.18, Some("Limpets:1"), "Repair Limpet Controller Class 1 Rating D", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size1_class3"          => ModuleRecord::fixed(128777329, 1.3, 0.23, Some("Limpets:1"), "Repair Limpet Controller Class 1 Rating C", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size1_class4"          => ModuleRecord::fixed(128777330, 2.0, 0.28, Some("Limpets:1"), "Repair Limpet Controller Class 1 Rating B", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size1_class5"          => ModuleRecord::fixed(128777331, 1.3, 0.32, Some("Limpets:1"), "Repair Limpet Controller Class 1 Rating A", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size3_class1"          => ModuleRecord::fixed(128777332, 2.0, 0.2, Some("Limpets:2"), "Repair Limpet Controller Class 3 Rating E", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size3_class2"          => ModuleRecord::fixed(128777333, 2.0, 0.27, Some("Limpets:2"), "Repair Limpet Controller Class 3 Rating D", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size3_class3"          => ModuleRecord::fixed(128777334, 5.0, 0.34, Some("Limpets:2"), "Repair Limpet Controller Class 3 Rating C", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size3_class4"          => ModuleRecord::fixed(128777335, 8.0, 0.41, Some("Limpets:2"), "Repair Limpet Controller Class 3 Rating B", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size3_class5"          => ModuleRecord::fixed(128777336, 5.0, 0.48, Some("Limpets:2"), "Repair Limpet Controller Class 3 Rating A", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size5_class1"          => ModuleRecord::fixed(128777337, 8.0, 0.3, Some("Limpets:3"), "Repair Limpet Controller Class 5 Rating E", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size5_class2"          => ModuleRecord::fixed(128777338, 8.0, 0.4, Some("Limpets:3"), "Repair Limpet Controller Class 5 Rating D", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size5_class3"          => ModuleRecord::fixed(128777339, 20.0, 0.5, Some("Limpets:3"), "Repair Limpet Controller Class 5 Rating C", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size5_class4"          => ModuleRecord::fixed(128777340, 32.0, 0.6, Some("Limpets:3"), "Repair Limpet Controller Class 5 Rating B", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size5_class5"          => ModuleRecord::fixed(128777341, 20.0, 0.7, Some("Limpets:3"), "Repair Limpet Controller Class 5 Rating A", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size7_class1"          => ModuleRecord::fixed(128777342, 32.0, 0.41, Some("Limpets:4"), "Repair Limpet Controller Class 7 Rating E", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size7_class2"          => ModuleRecord::fixed(128777343, 32.0, 0.55, Some("Limpets:4"), "Repair Limpet Controller Class 7 Rating D", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size7_class3"          => ModuleRecord::fixed(128777344, 80.0, 0.69, Some("Limpets:4"), "Repair Limpet Controller Class 7 Rating C", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size7_class4"          => ModuleRecord::fixed(128777345, 128.0, 0.83, Some("Limpets:4"), "Repair Limpet Controller Class 7 Rating B", "Repair Limpet Controller"),
    "int_dronecontrol_repair_size7_class5"          => ModuleRecord::fixed(128777346, 80.0, 0.97, Some("Limpets:4"), "Repair Limpet Controller Class 7 Rating A", "Repair Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size1_class1"  => ModuleRecord::fixed(128066532, 0.5, 0.14, Some("Limpets:1"), "Hatch Breaker Limpet Controller Class 1 Rating E", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size1_class2"  => ModuleRecord::fixed(128066533, 0.5, 0.18, Some("Limpets:1"), "Hatch Breaker Limpet Controller Class 1 Rating D", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size1_class3"  => ModuleRecord::fixed(128066534, 1.3, 0.23, Some("Limpets:1"), "Hatch Breaker Limpet Controller Class 1 Rating C", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size1_class4"  => ModuleRecord::fixed(128066535, 2.0, 0.28, Some("Limpets:1"), "Hatch Breaker Limpet Controller Class 1 Rating B", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size1_class5"  => ModuleRecord::fixed(128066536, 1.3, 0.32, Some("Limpets:1"), "Hatch Breaker Limpet Controller Class 1 Rating A", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size3_class1"  => ModuleRecord::fixed(128066537, 2.0, 0.2, Some("Limpets:2"), "Hatch Breaker Limpet Controller Class 3 Rating E", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size3_class2"  => ModuleRecord::fixed(128066538, 2.0, 0.27, Some("Limpets:2"), "Hatch Breaker Limpet Controller Class 3 Rating D", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size3_class3"  => ModuleRecord::fixed(128066539, 5.0, 0.34, Some("Limpets:2"), "Hatch Breaker Limpet Controller Class 3 Rating C", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size3_class4"  => ModuleRecord::fixed(128066540, 8.0, 0.41, Some("Limpets:2"), "Hatch Breaker Limpet Controller Class 3 Rating B", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size3_class5"  => ModuleRecord::fixed(128066541, 5.0, 0.48, Some("Limpets:2"), "Hatch Breaker Limpet Controller Class 3 Rating A", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size5_class1"  => ModuleRecord::fixed(128066542, 8.0, 0.3, Some("Limpets:3"), "Hatch Breaker Limpet Controller Class 5 Rating E", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size5_class2"  => ModuleRecord::fixed(128066543, 8.0, 0.4, Some("Limpets:3"), "Hatch Breaker Limpet Controller Class 5 Rating D", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size5_class3"  => ModuleRecord::fixed(128066544, 20.0, 0.5, Some("Limpets:3"), "Hatch Breaker Limpet Controller Class 5 Rating C", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size5_class4"  => ModuleRecord::fixed(128066545, 32.0, 0.6, Some("Limpets:3"), "Hatch Breaker Limpet Controller Class 5 Rating B", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size5_class5"  => ModuleRecord::fixed(128066546, 20.0, 0.7, Some("Limpets:3"), "Hatch Breaker Limpet Controller Class 5 Rating A", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size7_class1"  => ModuleRecord::fixed(128066547, 32.0, 0.41, Some("Limpets:4"), "Hatch Breaker Limpet Controller Class 7 Rating E", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size7_class2"  => ModuleRecord::fixed(128066548, 32.0, 0.55, Some("Limpets:4"), "Hatch Breaker Limpet Controller Class 7 Rating D", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size7_class3"  => ModuleRecord::fixed(128066549, 80.0, 0.69, Some("Limpets:4"), "Hatch Breaker Limpet Controller Class 7 Rating C", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size7_class4"  => ModuleRecord::fixed(128066550, 128.0, 0.83, Some("Limpets:4"), "Hatch Breaker Limpet Controller Class 7 Rating B", "Hatch Breaker Limpet Controller"),
    "int_dronecontrol_resourcesiphon_size7_class5"  => ModuleRecord::fixed(128066551, 80.0, 0.97, Some("Limpets:4"), "Hatch Breaker Limpet Controller Class 7 Rating A", "Hatch Breaker Limpet Controller"),
    "int_engine_size2_class1"                       => ModuleRecord::fixed(128064068, 2.5, 2.0, Some("OptMass:48t"), "Thrusters Class 2 Rating E", "Thrusters"),
    "int_engine_size2_class2"                       => ModuleRecord::fixed(128064069, 1.0, 2.25, Some("OptMass:54t"), "Thrusters Class 2 Rating D", "Thrusters"),
    "int_engine_size2_class3"                       => ModuleRecord::fixed(128064070, 2.5, 2.5, Some("OptMass:60t"), "Thrusters Class 2 Rating C", "Thrusters"),
    "int_engine_size2_class4"                       => ModuleRecord::fixed(128064071, 4.0, 2.75, Some("OptMass:65t"), "Thrusters Class 2 Rating B", "Thrusters"),
    "int_engine_size2_class5"                       => ModuleRecord::fixed(128064072, 2.5, 3.0, Some("OptMass:72t"), "Thrusters Class 2 Rating A", "Thrusters"),
    "int_engine_size3_class1"                       => ModuleRecord::fixed(128064073, 5.0, 2.48, Some("OptMass:80t"), "Thrusters Class 3 Rating E", "Thrusters"),
    "int_engine_size3_class2"                       => ModuleRecord::fixed(128064074, 2.0, 2.79, Some("OptMass:90t"), "Thrusters Class 3 Rating D", "Thrusters"),
    "int_engine_size3_class3"                       => ModuleRecord::fixed(128064075, 5.0, 3.1, Some("OptMass:100t"), "Thrusters Class 3 Rating C", "Thrusters"),
    "int_engine_size3_class4"                       => ModuleRecord::fixed(128064076, 8.0, 3.41, Some("OptMass:110t"), "Thrusters Class 3 Rating B", "Thrusters"),
    "int_engine_size3_class5"                       => ModuleRecord::fixed(128064077, 5.0, 3.72, Some("OptMass:120t"), "Thrusters Class 3 Rating A", "Thrusters"),
    "int_engine_size4_class1"                       => ModuleRecord::fixed(128064078, 10.0, 3.28, Some("OptMass:280t"), "Thrusters Class 4 Rating E", "Thrusters"),
    "int_engine_size4_class2"                       => ModuleRecord::fixed(128064079, 4.0, 3.69, Some("OptMass:315t"), "Thrusters Class 4 Rating D", "Thrusters"),
    "int_engine_size4_class3"                       => ModuleRecord::fixed(128064080, 10.0, 4.1, Some("OptMass:350t"), "Thrusters Class 4 Rating C", "Thrusters"),
    "int_engine_size4_class4"                       => ModuleRecord::fixed(128064081, 16.0, 4.51, Some("OptMass:385t"), "Thrusters Class 4 Rating B", "Thrusters"),
    "int_engine_size4_class5"                       => ModuleRecord::fixed(128064082, 10.0, 4.92, Some("OptMass:420t"), "Thrusters Class 4 Rating A", "Thrusters"),
    "int_engine_size5_class1"                       => ModuleRecord::fixed(128064083, 20.0, 4.08, Some("OptMass:560t"), "Thrusters Class 5 Rating E", "Thrusters"),
    "int_engine_size5_class2"                       => ModuleRecord::fixed(128064084, 8.0, 4.59, Some("OptMass:630t"), "Thrusters Class 5 Rating D", "Thrusters"),
    "int_engine_size5_class3"                       => ModuleRecord::fixed(128064085, 20.0, 5.1, Some("OptMass:700t"), "Thrusters Class 5 Rating C", "Thrusters"),
    "int_engine_size5_class4"                       => ModuleRecord::fixed(128064086, 32.0, 5.61, Some("OptMass:770t"), "Thrusters Class 5 Rating B", "Thrusters"),
    "int_engine_size5_class5"                       => ModuleRecord::fixed(128064087, 20.0, 6.12, Some("OptMass:840t"), "Thrusters Class 5 Rating A", "Thrusters"),
    "int_engine_size6_class1"                       => ModuleRecord::fixed(128064088, 40.0, 5.04, Some("OptMass:960t"), "Thrusters Class 6 Rating E", "Thrusters"),
    "int_engine_size6_class2"                       => ModuleRecord::fixed(128064089, 16.0, 5.67, Some("OptMass:1080t"), "Thrusters Class 6 Rating D", "Thrusters"),
    "int_engine_size6_class3"                       => ModuleRecord::fixed(128064090, 40.0, 6.3, Some("OptMass:1200t"), "Thrusters Class 6 Rating C", "Thrusters"),
    "int_engine_size6_class4"                       => ModuleRecord::fixed(128064091, 64.0, 6.93, Some("OptMass:1320t"), "Thrusters Class 6 Rating B", "Thrusters"),
    "int_engine_size6_class5"                       => ModuleRecord::fixed(128064092, 40.0, 7.56, Some("OptMass:1440t"), "Thrusters Class 6 Rating A", "Thrusters"),
    "int_engine_size7_class1"                       => ModuleRecord::fixed(128064093, 80.0, 6.08, Some("OptMass:1440t"), "Thrusters Class 7 Rating E", "Thrusters"),
    "int_engine_size7_class2"                       => ModuleRecord::fixed(128064094, 32.0, 6.84, Some("OptMass:1620t"), "Thrusters Class 7 Rating D", "Thrusters"),
    "int_engine_size7_class3"                       => ModuleRecord::fixed(128064095, 80.0, 7.6, Some("OptMass:1800t"), "Thrusters Class 7 Rating C", "Thrusters"),
    "int_engine_size7_class4"                       => ModuleRecord::fixed(128064096, 128.0, 8.36, Some("OptMass:1980t"), "Thrusters Class 7 Rating B", "Thrusters"),
    "int_engine_size7_class5"                       => ModuleRecord::fixed(128064097, 80.0, 9.12, Some("OptMass:2160t"), "Thrusters Class 7 Rating A", "Thrusters"),
    "int_engine_size8_class1"                       => ModuleRecord::fixed(128064098, 160.0, 7.2, Some("OptMass:2240t"), "Thrusters Class 8 Rating E", "Thrusters"),
    "int_engine_size8_class2"                       => ModuleRecord::fixed(128064099, 64.0, 8.1, Some("OptMass:2520t"), "Thrusters Class 8 Rating D", "Thrusters"),
    "int_engine_size8_class3"                       => ModuleRecord::fixed(128064100, 160.0, 9.0, Some("OptMass:2800t"), "Thrusters Class 8 Rating C", "Thrusters"),
    "int_engine_size8_class4"                       => ModuleRecord::fixed(128064101, 256.0, 9.9, Some("OptMass:3080t"), "Thrusters Class 8 Rating B", "Thrusters"),
    "int_engine_size8_class5"                       => ModuleRecord::fixed(128064102, 160.0, 10.8, Some("OptMass:3360t"), "Thrusters Class 8 Rating A", "Thrusters"),
    "int_expmodulestabiliser_size3_class3"          => ModuleRecord::fixed(129019260, 8.0, 1.5, Some("Supports:2 experimental weapons"), "Experimental Weapon Stabiliser Class 3 Rating F", "Experimental Weapon Stabiliser"),
    "int_expmodulestabiliser_size5_class3"          => ModuleRecord::fixed(129019261, 20.0, 3.0, Some("Supports:4 experimental weapons"), "Experimental Weapon Stabiliser Class 5 Rating F", "Experimental Weapon Stabiliser"),
    "int_fighterbay_size5_class1"                   => ModuleRecord::fixed(128727930, 20.0, 0.25, Some("Bays:1, Fighters:6"), "Fighter Hangar Class 5 Rating E", "Fighter Hangar"),
    "int_fighterbay_size6_class1"                   => ModuleRecord::fixed(128727931, 40.0, 0.35, Some("Bays:2, Fighters:8"), "Fighter Hangar Class 6 Rating E", "Fighter Hangar"),
    "int_fighterbay_size7_class1"                   => ModuleRecord::fixed(128727932, 60.0, 0.35, Some("Bays:2, Fighters:15"), "Fighter Hangar Class 7 Rating E", "Fighter Hangar"),
    "int_fsdinterdictor_size1_class1"               => ModuleRecord::fixed(128666704, 1.3, 0.14, None, "Frame Shift Drive Interdictor Class 1 Rating E", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size1_class2"               => ModuleRecord::fixed(128666705, 0.5, 0.18, None, "Frame Shift Drive Interdictor Class 1 Rating D", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size1_class3"               => ModuleRecord::fixed(128666706, 1.3, 0.23, None, "Frame Shift Drive Interdictor Class 1 Rating C", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size1_class4"               => ModuleRecord::fixed(128666707, 2.0, 0.28, None, "Frame Shift Drive Interdictor Class 1 Rating B", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size1_class5"               => ModuleRecord::fixed(128666708, 1.3, 0.32, None, "Frame Shift Drive Interdictor Class 1 Rating A", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size2_class1"               => ModuleRecord::fixed(128666709, 2.5, 0.17, None, "Frame Shift Drive Interdictor Class 2 Rating E", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size2_class2"               => ModuleRecord::fixed(128666710, 1.0, 0.22, None, "Frame Shift Drive Interdictor Class 2 Rating D", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size2_class3"               => ModuleRecord::fixed(128666711, 2.5, 0.28, None, "Frame Shift Drive Interdictor Class 2 Rating C", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size2_class4"               => ModuleRecord::fixed(128666712, 4.0, 0.34, None, "Frame Shift Drive Interdictor Class 2 Rating B", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size2_class5"               => ModuleRecord::fixed(128666713, 2.5, 0.39, None, "Frame Shift Drive Interdictor Class 2 Rating A", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size3_class1"               => ModuleRecord::fixed(128666714, 5.0, 0.2, None, "Frame Shift Drive Interdictor Class 3 Rating E", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size3_class2"               => ModuleRecord::fixed(128666715, 2.0, 0.27, None, "Frame Shift Drive Interdictor Class 3 Rating D", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size3_class3"               => ModuleRecord::fixed(128666716, 5.0, 0.34, None, "Frame Shift Drive Interdictor Class 3 Rating C", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size3_class4"               => ModuleRecord::fixed(128666717, 8.0, 0.41, None, "Frame Shift Drive Interdictor Class 3 Rating B", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size3_class5"               => ModuleRecord::fixed(128666718, 5.0, 0.48, None, "Frame Shift Drive Interdictor Class 3 Rating A", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size4_class1"               => ModuleRecord::fixed(128666719, 10.0, 0.25, None, "Frame Shift Drive Interdictor Class 4 Rating E", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size4_class2"               => ModuleRecord::fixed(128666720, 4.0, 0.33, None, "Frame Shift Drive Interdictor Class 4 Rating D", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size4_class3"               => ModuleRecord::fixed(128666721, 10.0, 0.41, None, "Frame Shift Drive Interdictor Class 4 Rating C", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size4_class4"               => ModuleRecord::fixed(128666722, 16.0, 0.49, None, "Frame Shift Drive Interdictor Class 4 Rating B", "Frame Shift Drive Interdictor"),
    "int_fsdinterdictor_size4_class5"               => ModuleRecord::fixed(128666723, 10.0, 0.57, None, "Frame Shift Drive Interdictor Class 4 Rating A", "Frame Shift Drive Interdictor"),
    "int_fuelscoop_size1_class1"                    => ModuleRecord::fixed(128666644, 0.0, 0.14, Some("Rate:18kg/s"), "Fuel Scoop Class 1 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size1_class2"                    => ModuleRecord::fixed(128666645, 0.0, 0.18, Some("Rate:24kg/s"), "Fuel Scoop Class 1 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size1_class3"                    => ModuleRecord::fixed(128666646, 0.0, 0.23, Some("Rate:30kg/s"), "Fuel Scoop Class 1 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size1_class4"                    => ModuleRecord::fixed(128666647, 0.0, 0.28, Some("Rate:36kg/s"), "Fuel Scoop Class 1 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size1_class5"                    => ModuleRecord::fixed(128666648, 0.0, 0.32, Some("Rate:42kg/s"), "Fuel Scoop Class 1 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size2_class1"                    => ModuleRecord::fixed(128666649, 0.0, 0.17, Some("Rate:32kg/s"), "Fuel Scoop Class 2 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size2_class2"                    => ModuleRecord::fixed(128666650, 0.0, 0.22, Some("Rate:43kg/s"), "Fuel Scoop Class 2 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size2_class3"                    => ModuleRecord::fixed(128666651, 0.0, 0.28, Some("Rate:54kg/s"), "Fuel Scoop Class 2 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size2_class4"                    => ModuleRecord::fixed(128666652, 0.0, 0.34, Some("Rate:65kg/s"), "Fuel Scoop Class 2 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size2_class5"                    => ModuleRecord::fixed(128666653, 0.0, 0.39, Some("Rate:75kg/s"), "Fuel Scoop Class 2 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size3_class1"                    => ModuleRecord::fixed(128666654, 0.0, 0.2, Some("Rate:75kg/s"), "Fuel Scoop Class 3 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size3_class2"                    => ModuleRecord::fixed(128666655, 0.0, 0.27, Some("Rate:100kg/s"), "Fuel Scoop Class 3 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size3_class3"                    => ModuleRecord::fixed(128666656, 0.0, 0.34, Some("Rate:126kg/s"), "Fuel Scoop Class 3 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size3_class4"                    => ModuleRecord::fixed(128666657, 0.0, 0.41, Some("Rate:151kg/s"), "Fuel Scoop Class 3 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size3_class5"                    => ModuleRecord::fixed(128666658, 0.0, 0.48, Some("Rate:176kg/s"), "Fuel Scoop Class 3 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size4_class1"                    => ModuleRecord::fixed(128666659, 0.0, 0.25, Some("Rate:147kg/s"), "Fuel Scoop Class 4 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size4_class2"                    => ModuleRecord::fixed(128666660, 0.0, 0.33, Some("Rate:196kg/s"), "Fuel Scoop Class 4 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size4_class3"                    => ModuleRecord::fixed(128666661, 0.0, 0.41, Some("Rate:245kg/s"), "Fuel Scoop Class 4 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size4_class4"                    => ModuleRecord::fixed(128666662, 0.0, 0.49, Some("Rate:294kg/s"), "Fuel Scoop Class 4 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size4_class5"                    => ModuleRecord::fixed(128666663, 0.0, 0.57, Some("Rate:342kg/s"), "Fuel Scoop Class 4 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size5_class1"                    => ModuleRecord::fixed(128666664, 0.0, 0.3, Some("Rate:247kg/s"), "Fuel Scoop Class 5 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size5_class2"                    => ModuleRecord::fixed(128666665, 0.0, 0.4, Some("Rate:330kg/s"), "Fuel Scoop Class 5 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size5_class3"                    => ModuleRecord::fixed(128666666, 0.0, 0.5, Some("Rate:412kg/s"), "Fuel Scoop Class 5 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size5_class4"                    => ModuleRecord::fixed(128666667, 0.0, 0.6, Some("Rate:494kg/s"), "Fuel Scoop Class 5 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size5_class5"                    => ModuleRecord::fixed(128666668, 0.0, 0.7, Some("Rate:577kg/s"), "Fuel Scoop Class 5 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size6_class1"                    => ModuleRecord::fixed(128666669, 0.0, 0.35, Some("Rate:376kg/s"), "Fuel Scoop Class 6 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size6_class2"                    => ModuleRecord::fixed(128666670, 0.0, 0.47, Some("Rate:502kg/s"), "Fuel Scoop Class 6 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size6_class3"                    => ModuleRecord::fixed(128666671, 0.0, 0.59, Some("Rate:627kg/s"), "Fuel Scoop Class 6 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size6_class4"                    => ModuleRecord::fixed(128666672, 0.0, 0.71, Some("Rate:752kg/s"), "Fuel Scoop Class 6 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size6_class5"                    => ModuleRecord::fixed(128666673, 0.0, 0.83, Some("Rate:878kg/s"), "Fuel Scoop Class 6 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size7_class1"                    => ModuleRecord::fixed(128666674, 0.0, 0.41, Some("Rate:534kg/s"), "Fuel Scoop Class 7 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size7_class2"                    => ModuleRecord::fixed(128666675, 0.0, 0.55, Some("Rate:712kg/s"), "Fuel Scoop Class 7 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size7_class3"                    => ModuleRecord::fixed(128666676, 0.0, 0.69, Some("Rate:890kg/s"), "Fuel Scoop Class 7 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size7_class4"                    => ModuleRecord::fixed(128666677, 0.0, 0.83, Some("Rate:1068kg/s"), "Fuel Scoop Class 7 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size7_class5"                    => ModuleRecord::fixed(128666678, 0.0, 0.97, Some("Rate:1245kg/s"), "Fuel Scoop Class 7 Rating A", "Fuel Scoop"),
    "int_fuelscoop_size8_class1"                    => ModuleRecord::fixed(128666679, 0.0, 0.48, Some("Rate:720kg/s"), "Fuel Scoop Class 8 Rating E", "Fuel Scoop"),
    "int_fuelscoop_size8_class2"                    => ModuleRecord::fixed(128666680, 0.0, 0.64, Some("Rate:960kg/s"), "Fuel Scoop Class 8 Rating D", "Fuel Scoop"),
    "int_fuelscoop_size8_class3"                    => ModuleRecord::fixed(128666681, 0.0, 0.8, Some("Rate:1200kg/s"), "Fuel Scoop Class 8 Rating C", "Fuel Scoop"),
    "int_fuelscoop_size8_class4"                    => ModuleRecord::fixed(128666682, 0.0, 0.96, Some("Rate:1440kg/s"), "Fuel Scoop Class 8 Rating B", "Fuel Scoop"),
    "int_fuelscoop_size8_class5"                    => ModuleRecord::fixed(128666683, 0.0, 1.12, Some("Rate:1680kg/s"), "Fuel Scoop Class 8 Rating A", "Fuel Scoop"),
    "int_fueltank_size1_class3"                     => ModuleRecord::fixed(128064346, 0.0, 0.0, Some("Size:2t"), "Fuel Tank Class 1 Rating C", "Fuel Tank"),
    "int_fueltank_size2_class3"                     => ModuleRecord::fixed(128064347, 0.0, 0.0, Some("Size:4t"), "Fuel Tank Class 2 Rating C", "Fuel Tank"),
    "int_fueltank_size3_class3"                     => ModuleRecord::fixed(128064348, 0.0, 0.0, Some("Size:8t"), "Fuel Tank Class 3 Rating C", "Fuel Tank"),
    "int_fueltank_size4_class3"                     => ModuleRecord::fixed(128064349, 0.0, 0.0, Some("Size:16t"), "Fuel Tank Class 4 Rating C", "Fuel Tank"),
    "int_fueltank_size5_class3"                     => ModuleRecord::fixed(128064350, 0.0, 0.0, Some("Size:32t"), "Fuel Tank Class 5 Rating C", "Fuel Tank"),
    "int_fueltank_size6_class3"                     => ModuleRecord::fixed(128064351, 0.0, 0.0, Some("Size:64t"), "Fuel Tank Class 6 Rating C", "Fuel Tank"),
    "int_fueltank_size7_class3"                     => ModuleRecord::fixed(128064352, 0.0, 0.0, Some("Size:128t"), "Fuel Tank Class 7 Rating C", "Fuel Tank"),
    "int_fueltank_size8_class3"                     => ModuleRecord::fixed(128064353, 0.0, 0.0, Some("Size:256t"), "Fuel Tank Class 8 Rating C", "Fuel Tank"),
    "int_guardianfsdbooster_size1"                  => ModuleRecord::fixed(128833975, 1.3, 0.75, Some("JumpRange:+4.0ly"), "Guardian FSD Booster Class 1", "Guardian FSD Booster"),
    "int_guardianfsdbooster_size2"                  => ModuleRecord::fixed(128833976, 1.3, 0.98, Some("JumpRange:+6.0ly"), "Guardian FSD Booster Class 2", "Guardian FSD Booster"),
    "int_guardianfsdbooster_size3"                  => ModuleRecord::fixed(128833977, 1.3, 1.27, Some("JumpRange:+7.75ly"), "Guardian FSD Booster Class 3", "Guardian FSD Booster"),
    "int_guardianfsdbooster_size4"                  => ModuleRecord::fixed(128833978, 1.3, 1.65, Some("JumpRange:+9.25ly"), "Guardian FSD Booster Class 4", "Guardian FSD Booster"),
    "int_guardianfsdbooster_size5"                  => ModuleRecord::fixed(128833979, 1.3, 2.14, Some("JumpRange:+10.5ly"), "Guardian FSD Booster Class 5", "Guardian FSD Booster"),
    "int_guardianhullreinforcement_size1_class1"    => ModuleRecord::fixed(128833955, 2.0, 0.45, None, "Guardian Hull Reinforcement Package Class 1 Rating E", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size1_class2"    => ModuleRecord::fixed(128833956, 1.0, 0.45, None, "Guardian Hull Reinforcement Package Class 1 Rating D", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size2_class1"    => ModuleRecord::fixed(128833957, 4.0, 0.56, None, "Guardian Hull Reinforcement Package Class 2 Rating E", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size2_class2"    => ModuleRecord::fixed(128833958, 2.0, 0.56, None, "Guardian Hull Reinforcement Package Class 2 Rating D", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size3_class1"    => ModuleRecord::fixed(128833959, 8.0, 0.67, None, "Guardian Hull Reinforcement Package Class 3 Rating E", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size3_class2"    => ModuleRecord::fixed(128833960, 4.0, 0.67, None, "Guardian Hull Reinforcement Package Class 3 Rating D", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size4_class1"    => ModuleRecord::fixed(128833961, 16.0, 0.78, None, "Guardian Hull Reinforcement Package Class 4 Rating E", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size4_class2"    => ModuleRecord::fixed(128833962, 8.0, 0.78, None, "Guardian Hull Reinforcement Package Class 4 Rating D", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size5_class1"    => ModuleRecord::fixed(128833963, 32.0, 0.89, None, "Guardian Hull Reinforcement Package Class 5 Rating E", "Guardian Hull Reinforcement Package"),
    "int_guardianhullreinforcement_size5_class2"    => ModuleRecord::fixed(128833964, 16.0, 0.89, None, "Guardian Hull Reinforcement Package Class 5 Rating D", "Guardian Hull Reinforcement Package"),
    "int_guardianmodulereinforcement_size1_class1"  => ModuleRecord::fixed(128833965, 2.0, 0.27, None, "Guardian Module Reinforcement Package Class 1 Rating E", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size1_class2"  => ModuleRecord::fixed(128833966, 1.0, 0.27, None, "Guardian Module Reinforcement Package Class 1 Rating D", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size2_class1"  => ModuleRecord::fixed(128833967, 4.0, 0.34, None, "Guardian Module Reinforcement Package Class 2 Rating E", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size2_class2"  => ModuleRecord::fixed(128833968, 2.0, 0.34, None, "Guardian Module Reinforcement Package Class 2 Rating D", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size3_class1"  => ModuleRecord::fixed(128833969, 8.0, 0.41, None, "Guardian Module Reinforcement Package Class 3 Rating E", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size3_class2"  => ModuleRecord::fixed(128833970, 4.0, 0.41, None, "Guardian Module Reinforcement Package Class 3 Rating D", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size4_class1"  => ModuleRecord::fixed(128833971, 16.0, 0.48, None, "Guardian Module Reinforcement Package Class 4 Rating E", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size4_class2"  => ModuleRecord::fixed(128833972, 8.0, 0.48, None, "Guardian Module Reinforcement Package Class 4 Rating D", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size5_class1"  => ModuleRecord::fixed(128833973, 32.0, 0.55, None, "Guardian Module Reinforcement Package Class 5 Rating E", "Guardian Module Reinforcement Package"),
    "int_guardianmodulereinforcement_size5_class2"  => ModuleRecord::fixed(128833974, 16.0, 0.55, None, "Guardian Module Reinforcement Package Class 5 Rating D", "Guardian Module Reinforcement Package"),
    "int_guardianpowerdistributor_size1"            => ModuleRecord::fixed(128833980, 1.4, 0.62, None, "Guardian Hybrid Power Distributor Class 1", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size2"            => ModuleRecord::fixed(128833981, 2.6, 0.73, None, "Guardian Hybrid Power Distributor Class 2", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size3"            => ModuleRecord::fixed(128833982, 5.25, 0.78, None, "Guardian Hybrid Power Distributor Class 3", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size4"            => ModuleRecord::fixed(128833983, 10.5, 0.87, None, "Guardian Hybrid Power Distributor Class 4", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size5"            => ModuleRecord::fixed(128833984, 21.0, 0.96, None, "Guardian Hybrid Power Distributor Class 5", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size6"            => ModuleRecord::fixed(128833985, 42.0, 1.07, None, "Guardian Hybrid Power Distributor Class 6", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size7"            => ModuleRecord::fixed(128833986, 84.0, 1.16, None, "Guardian Hybrid Power Distributor Class 7", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerdistributor_size8"            => ModuleRecord::fixed(128833987, 168.0, 1.25, None, "Guardian Hybrid Power Distributor Class 8", "Guardian Hybrid Power Distributor"),
    "int_guardianpowerplant_size2"                  => ModuleRecord::fixed(128833988, 1.5, 0.0, Some("Power:12.7MW"), "Guardian Hybrid Power Plant Class 2", "Guardian Hybrid Power Plant"),
    "int_guardianpowerplant_size3"                  => ModuleRecord::fixed(128833989, 2.9, 0.0, Some("Power:15.8MW"), "Guardian Hybrid Power Plant Class 3", "Guardian Hybrid Power Plant"),
    "int_guardianpowerplant_size4"                  => ModuleRecord::fixed(128833990, 5.9, 0.0, Some("Power:20.6MW"), "Guardian Hybrid Power Plant Class 4", "Guardian Hybrid Power Plant"),
    "int_guardianpowerplant_size5"                  => ModuleRecord::fixed(128833991, 11.7, 0.0, Some("Power:26.5MW"), "Guardian Hybrid Power Plant Class 5", "Guardian Hybrid Power Plant"),
    "int_guardianpowerplant_size6"                  => ModuleRecord::fixed(128833992, 23.4, 0.0, Some("Power:32.5MW"), "Guardian Hybrid Power Plant Class 6", "Guardian Hybrid Power Plant"),
    "int_guardianpowerplant_size7"                  => ModuleRecord::fixed(128833993, 46.8, 0.0, Some("Power:37.7MW"), "Guardian Hybrid Power Plant Class 7", "Guardian Hybrid Power Plant"),
    "int_guardianpowerplant_size8"                  => ModuleRecord::fixed(128833994, 93.6, 0.0, Some("Power:43.7MW"), "Guardian Hybrid Power Plant Class 8", "Guardian Hybrid Power Plant"),
    "int_guardianshieldreinforcement_size1_class1"  => ModuleRecord::fixed(128834010, 2.0, 0.35, None, "Guardian Shield Reinforcement Package Class 1 Rating E", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size1_class2"  => ModuleRecord::fixed(128834011, 1.0, 0.35, None, "Guardian Shield Reinforcement Package Class 1 Rating D", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size2_class1"  => ModuleRecord::fixed(128834012, 4.0, 0.46, None, "Guardian Shield Reinforcement Package Class 2 Rating E", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size2_class2"  => ModuleRecord::fixed(128834013, 2.0, 0.46, None, "Guardian Shield Reinforcement Package Class 2 Rating D", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size3_class1"  => ModuleRecord::fixed(128834014, 8.0, 0.56, None, "Guardian Shield Reinforcement Package Class 3 Rating E", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size3_class2"  => ModuleRecord::fixed(128834015, 4.0, 0.56, None, "Guardian Shield Reinforcement Package Class 3 Rating D", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size4_class1"  => ModuleRecord::fixed(128834016, 16.0, 0.67, None, "Guardian Shield Reinforcement Package Class 4 Rating E", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size4_class2"  => ModuleRecord::fixed(128834017, 8.0, 0.67, None, "Guardian Shield Reinforcement Package Class 4 Rating D", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size5_class1"  => ModuleRecord::fixed(128834018, 32.0, 0.74, None, "Guardian Shield Reinforcement Package Class 5 Rating E", "Guardian Shield Reinforcement Package"),
    "int_guardianshieldreinforcement_size5_class2"  => ModuleRecord::fixed(128834019, 16.0, 0.74, None, "Guardian Shield Reinforcement Package Class 5 Rating D", "Guardian Shield Reinforcement Package"),
    "int_hullreinforcement_size1_class1"            => ModuleRecord::fixed(128668537, 2.0, 0.0, Some("Hull:80"), "Hull Reinforcement Package Class 1 Rating E", "Hull Reinforcement Package"),
    "int_hullreinforcement_size1_class2"            => ModuleRecord::fixed(128668538, 1.0, 0.0, Some("Hull:90"), "Hull Reinforcement Package Class 1 Rating D", "Hull Reinforcement Package"),
    "int_hullreinforcement_size2_class1"            => ModuleRecord::fixed(128668539, 4.0, 0.0, Some("Hull:120"), "Hull Reinforcement Package Class 2 Rating E", "Hull Reinforcement Package"),
    "int_hullreinforcement_size2_class2"            => ModuleRecord::fixed(128668540, 2.0, 0.0, Some("Hull:135"), "Hull Reinforcement Package Class 2 Rating D", "Hull Reinforcement Package"),
    "int_hullreinforcement_size3_class1"            => ModuleRecord::fixed(128668541, 8.0, 0.0, Some("Hull:160"), "Hull Reinforcement Package Class 3 Rating E", "Hull Reinforcement Package"),
    "int_hullreinforcement_size3_class2"            => ModuleRecord::fixed(128668542, 4.0, 0.0, Some("Hull:180"), "Hull Reinforcement Package Class 3 Rating D", "Hull Reinforcement Package"),
    "int_hullreinforcement_size4_class1"            => ModuleRecord::fixed(128668543, 16.0, 0.0, Some("Hull:200"), "Hull Reinforcement Package Class 4 Rating E", "Hull Reinforcement Package"),
    "int_hullreinforcement_size4_class2"            => ModuleRecord::fixed(128668544, 8.0, 0.0, Some("Hull:225"), "Hull Reinforcement Package Class 4 Rating D", "Hull Reinforcement Package"),
    "int_hullreinforcement_size5_class1"            => ModuleRecord::fixed(128668545, 32.0, 0.0, Some("Hull:240"), "Hull Reinforcement Package Class 5 Rating E", "Hull Reinforcement Package"),
    "int_hullreinforcement_size5_class2"            => ModuleRecord::fixed(128668546, 16.0, 0.0, Some("Hull:270"), "Hull Reinforcement Package Class 5 Rating D", "Hull Reinforcement Package"),
    "int_hyperdrive_overcharge_size2_class1"        => ModuleRecord::fixed(129030600, 2.5, 0.2, Some("OptMass:48t, MaxFuelPerJump:0.6t"), "Frame Shift Drive (SCO) Class 2 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size2_class2"        => ModuleRecord::fixed(129030601, 1.0, 0.22, Some("OptMass:54t, MaxFuelPerJump:0.6t"), "Frame Shift Drive (SCO) Class 2 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size2_class3"        => ModuleRecord::fixed(129030602, 2.5, 0.25, Some("OptMass:60t, MaxFuelPerJump:0.6t"), "Frame Shift Drive (SCO) Class 2 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size2_class4"        => ModuleRecord::fixed(129030603, 4.0, 0.31, Some("OptMass:75t, MaxFuelPerJump:0.8t"), "Frame Shift Drive (SCO) Class 2 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size2_class5"        => ModuleRecord::fixed(129030604, 2.5, 0.38, Some("OptMass:90t, MaxFuelPerJump:0.9t"), "Frame Shift Drive (SCO) Class 2 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size3_class1"        => ModuleRecord::fixed(129030605, 5.0, 0.3, Some("OptMass:80t, MaxFuelPerJump:1.2t"), "Frame Shift Drive (SCO) Class 3 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size3_class2"        => ModuleRecord::fixed(129030606, 2.0, 0.34, Some("OptMass:90t, MaxFuelPerJump:1.2t"), "Frame Shift Drive (SCO) Class 3 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size3_class3"        => ModuleRecord::fixed(129030607, 5.0, 0.38, Some("OptMass:100t, MaxFuelPerJump:1.2t"), "Frame Shift Drive (SCO) Class 3 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size3_class4"        => ModuleRecord::fixed(129030608, 8.0, 0.47, Some("OptMass:125t, MaxFuelPerJump:1.5t"), "Frame Shift Drive (SCO) Class 3 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size3_class5"        => ModuleRecord::fixed(129030609, 5.0, 0.56, Some("OptMass:150t, MaxFuelPerJump:1.8t"), "Frame Shift Drive (SCO) Class 3 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size4_class1"        => ModuleRecord::fixed(129030610, 10.0, 0.3, Some("OptMass:280t, MaxFuelPerJump:2.0t"), "Frame Shift Drive (SCO) Class 4 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size4_class2"        => ModuleRecord::fixed(129030611, 4.0, 0.34, Some("OptMass:315t, MaxFuelPerJump:2.0t"), "Frame Shift Drive (SCO) Class 4 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size4_class3"        => ModuleRecord::fixed(129030612, 10.0, 0.38, Some("OptMass:350t, MaxFuelPerJump:2.0t"), "Frame Shift Drive (SCO) Class 4 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size4_class4"        => ModuleRecord::fixed(129030613, 16.0, 0.47, Some("OptMass:438t, MaxFuelPerJump:2.5t"), "Frame Shift Drive (SCO) Class 4 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size4_class5"        => ModuleRecord::fixed(129030614, 10.0, 0.56, Some("OptMass:525t, MaxFuelPerJump:3.0t"), "Frame Shift Drive (SCO) Class 4 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size5_class1"        => ModuleRecord::fixed(129030615, 20.0, 0.4, Some("OptMass:560t, MaxFuelPerJump:3.3t"), "Frame Shift Drive (SCO) Class 5 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size5_class2"        => ModuleRecord::fixed(129030616, 8.0, 0.45, Some("OptMass:630t, MaxFuelPerJump:3.3t"), "Frame Shift Drive (SCO) Class 5 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size5_class3"        => ModuleRecord::fixed(129030617, 20.0, 0.5, Some("OptMass:700t, MaxFuelPerJump:3.3t"), "Frame Shift Drive (SCO) Class 5 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size5_class4"        => ModuleRecord::fixed(129030618, 32.0, 0.62, Some("OptMass:875t, MaxFuelPerJump:4.1t"), "Frame Shift Drive (SCO) Class 5 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size5_class5"        => ModuleRecord::fixed(129030619, 20.0, 0.75, Some("OptMass:1050t, MaxFuelPerJump:5.0t"), "Frame Shift Drive (SCO) Class 5 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size6_class1"        => ModuleRecord::fixed(129030620, 40.0, 0.5, Some("OptMass:960t, MaxFuelPerJump:5.3t"), "Frame Shift Drive (SCO) Class 6 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size6_class2"        => ModuleRecord::fixed(129030621, 16.0, 0.56, Some("OptMass:1080t, MaxFuelPerJump:5.3t"), "Frame Shift Drive (SCO) Class 6 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size6_class3"        => ModuleRecord::fixed(129030622, 40.0, 0.62, Some("OptMass:1200t, MaxFuelPerJump:5.3t"), "Frame Shift Drive (SCO) Class 6 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size6_class4"        => ModuleRecord::fixed(129030623, 64.0, 0.79, Some("OptMass:1500t, MaxFuelPerJump:6.6t"), "Frame Shift Drive (SCO) Class 6 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size6_class5"        => ModuleRecord::fixed(129030624, 40.0, 0.94, Some("OptMass:1800t, MaxFuelPerJump:8.0t"), "Frame Shift Drive (SCO) Class 6 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size7_class1"        => ModuleRecord::fixed(129030625, 80.0, 0.6, Some("OptMass:1440t, MaxFuelPerJump:8.5t"), "Frame Shift Drive (SCO) Class 7 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size7_class2"        => ModuleRecord::fixed(129030626, 32.0, 0.68, Some("OptMass:1620t, MaxFuelPerJump:8.5t"), "Frame Shift Drive (SCO) Class 7 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size7_class3"        => ModuleRecord::fixed(129030627, 80.0, 0.75, Some("OptMass:1800t, MaxFuelPerJump:8.5t"), "Frame Shift Drive (SCO) Class 7 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size7_class4"        => ModuleRecord::fixed(129030628, 128.0, 0.94, Some("OptMass:2250t, MaxFuelPerJump:10.6t"), "Frame Shift Drive (SCO) Class 7 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_overcharge_size7_class5"        => ModuleRecord::fixed(129030629, 80.0, 1.12, Some("OptMass:2700t, MaxFuelPerJump:12.8t"), "Frame Shift Drive (SCO) Class 7 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_size2_class1"                   => ModuleRecord::fixed(128064103, 2.5, 0.16, Some("OptMass:48t, MaxFuelPerJump:0.6t"), "Frame Shift Drive Class 2 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_size2_class2"                   => ModuleRecord::fixed(128064104, 1.0, 0.18, Some("OptMass:54t, MaxFuelPerJump:0.6t"), "Frame Shift Drive Class 2 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_size2_class3"                   => ModuleRecord::fixed(128064105, 2.5, 0.2, Some("OptMass:60t, MaxFuelPerJump:0.6t"), "Frame Shift Drive Class 2 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_size2_class4"                   => ModuleRecord::fixed(128064106, 4.0, 0.25, Some("OptMass:75t, MaxFuelPerJump:0.8t"), "Frame Shift Drive Class 2 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_size2_class5"                   => ModuleRecord::fixed(128064107, 2.5, 0.3, Some("OptMass:90t, MaxFuelPerJump:0.9t"), "Frame Shift Drive Class 2 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_size3_class1"                   => ModuleRecord::fixed(128064108, 5.0, 0.24, Some("OptMass:80t, MaxFuelPerJump:1.2t"), "Frame Shift Drive Class 3 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_size3_class2"                   => ModuleRecord::fixed(128064109, 2.0, 0.27, Some("OptMass:90t, MaxFuelPerJump:1.2t"), "Frame Shift Drive Class 3 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_size3_class3"                   => ModuleRecord::fixed(128064110, 5.0, 0.3, Some("OptMass:100t, MaxFuelPerJump:1.2t"), "Frame Shift Drive Class 3 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_size3_class4"                   => ModuleRecord::fixed(128064111, 8.0, 0.38, Some("OptMass:125t, MaxFuelPerJump:1.5t"), "Frame Shift Drive Class 3 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_size3_class5"                   => ModuleRecord::fixed(128064112, 5.0, 0.45, Some("OptMass:150t, MaxFuelPerJump:1.8t"), "Frame Shift Drive Class 3 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_size4_class1"                   => ModuleRecord::fixed(128064113, 10.0, 0.24, Some("OptMass:280t, MaxFuelPerJump:2.0t"), "Frame Shift Drive Class 4 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_size4_class2"                   => ModuleRecord::fixed(128064114, 4.0, 0.27, Some("OptMass:315t, MaxFuelPerJump:2.0t"), "Frame Shift Drive Class 4 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_size4_class3"                   => ModuleRecord::fixed(128064115, 10.0, 0.3, Some("OptMass:350t, MaxFuelPerJump:2.0t"), "Frame Shift Drive Class 4 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_size4_class4"                   => ModuleRecord::fixed(128064116, 16.0, 0.38, Some("OptMass:438t, MaxFuelPerJump:2.5t"), "Frame Shift Drive Class 4 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_size4_class5"                   => ModuleRecord::fixed(128064117, 10.0, 0.45, Some("OptMass:525t, MaxFuelPerJump:3.0t"), "Frame Shift Drive Class 4 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_size5_class1"                   => ModuleRecord::fixed(128064118, 20.0, 0.32, Some("OptMass:560t, MaxFuelPerJump:3.3t"), "Frame Shift Drive Class 5 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_size5_class2"                   => ModuleRecord::fixed(128064119, 8.0, 0.36, Some("OptMass:630t, MaxFuelPerJump:3.3t"), "Frame Shift Drive Class 5 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_size5_class3"                   => ModuleRecord::fixed(128064120, 20.0, 0.4, Some("OptMass:700t, MaxFuelPerJump:3.3t"), "Frame Shift Drive Class 5 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_size5_class4"                   => ModuleRecord::fixed(128064121, 32.0, 0.5, Some("OptMass:875t, MaxFuelPerJump:4.1t"), "Frame Shift Drive Class 5 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_size5_class5"                   => ModuleRecord::fixed(128064122, 20.0, 0.6, Some("OptMass:1050t, MaxFuelPerJump:5.0t"), "Frame Shift Drive Class 5 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_size6_class1"                   => ModuleRecord::fixed(128064123, 40.0, 0.4, Some("OptMass:960t, MaxFuelPerJump:5.3t"), "Frame Shift Drive Class 6 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_size6_class2"                   => ModuleRecord::fixed(128064124, 16.0, 0.45, Some("OptMass:1080t, MaxFuelPerJump:5.3t"), "Frame Shift Drive Class 6 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_size6_class3"                   => ModuleRecord::fixed(128064125, 40.0, 0.5, Some("OptMass:1200t, MaxFuelPerJump:5.3t"), "Frame Shift Drive Class 6 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_size6_class4"                   => ModuleRecord::fixed(128064126, 64.0, 0.63, Some("OptMass:1500t, MaxFuelPerJump:6.6t"), "Frame Shift Drive Class 6 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_size6_class5"                   => ModuleRecord::fixed(128064127, 40.0, 0.75, Some("OptMass:1800t, MaxFuelPerJump:8.0t"), "Frame Shift Drive Class 6 Rating A", "Frame Shift Drive"),
    "int_hyperdrive_size7_class1"                   => ModuleRecord::fixed(128064128, 80.0, 0.48, Some("OptMass:1440t, MaxFuelPerJump:8.5t"), "Frame Shift Drive Class 7 Rating E", "Frame Shift Drive"),
    "int_hyperdrive_size7_class2"                   => ModuleRecord::fixed(128064129, 32.0, 0.54, Some("OptMass:1620t, MaxFuelPerJump:8.5t"), "Frame Shift Drive Class 7 Rating D", "Frame Shift Drive"),
    "int_hyperdrive_size7_class3"                   => ModuleRecord::fixed(128064130, 80.0, 0.6, Some("OptMass:1800t, MaxFuelPerJump:8.5t"), "Frame Shift Drive Class 7 Rating C", "Frame Shift Drive"),
    "int_hyperdrive_size7_class4"                   => ModuleRecord::fixed(128064131, 128.0, 0.75, Some("OptMass:2250t, MaxFuelPerJump:10.6t"), "Frame Shift Drive Class 7 Rating B", "Frame Shift Drive"),
    "int_hyperdrive_size7_class5"                   => ModuleRecord::fixed(128064132, 80.0, 0.9, Some("OptMass:2700t, MaxFuelPerJump:12.8t"), "Frame Shift Drive Class 7 Rating A", "Frame Shift Drive"),
    "int_lifesupport_size1_class1"                  => ModuleRecord::fixed(128064138, 1.3, 0.32, Some("Time:300s"), "Life Support Class 1 Rating E", "Life Support"),
    "int_lifesupport_size1_class2"                  => ModuleRecord::fixed(128064139, 0.5, 0.36, Some("Time:450s"), "Life Support Class 1 Rating D", "Life Support"),
    "int_lifesupport_size1_class3"                  => ModuleRecord::fixed(128064140, 1.3, 0.4, Some("Time:600s"), "Life Support Class 1 Rating C", "Life Support"),
    "int_lifesupport_size1_class4"                  => ModuleRecord::fixed(128064141, 2.0, 0.44, Some("Time:900s"), "Life Support Class 1 Rating B", "Life Support"),
    "int_lifesupport_size1_class5"                  => ModuleRecord::fixed(128064142, 1.3, 0.48, Some("Time:1500s"), "Life Support Class 1 Rating A", "Life Support"),
    "int_lifesupport_size2_class1"                  => ModuleRecord::fixed(128064143, 2.5, 0.37, Some("Time:300s"), "Life Support Class 2 Rating E", "Life Support"),
    "int_lifesupport_size2_class2"                  => ModuleRecord::fixed(128064144, 1.0, 0.41, Some("Time:450s"), "Life Support Class 2 Rating D", "Life Support"),
    "int_lifesupport_size2_class3"                  => ModuleRecord::fixed(128064145, 2.5, 0.46, Some("Time:600s"), "Life Support Class 2 Rating C", "Life Support"),
    "int_lifesupport_size2_class4"                  => ModuleRecord::fixed(128064146, 4.0, 0.51, Some("Time:900s"), "Life Support Class 2 Rating B", "Life Support"),
    "int_lifesupport_size2_class5"                  => ModuleRecord::fixed(128064147, 2.5, 0.55, Some("Time:1500s"), "Life Support Class 2 Rating A", "Life Support"),
    "int_lifesupport_size3_class1"                  => ModuleRecord::fixed(128064148, 5.0, 0.42, Some("Time:300s"), "Life Support Class 3 Rating E", "Life Support"),
    "int_lifesupport_size3_class2"                  => ModuleRecord::fixed(128064149, 2.0, 0.47, Some("Time:450s"), "Life Support Class 3 Rating D", "Life Support"),
    "int_lifesupport_size3_class3"                  => ModuleRecord::fixed(128064150, 5.0, 0.52, Some("Time:600s"), "Life Support Class 3 Rating C", "Life Support"),
    "int_lifesupport_size3_class4"                  => ModuleRecord::fixed(128064151, 8.0, 0.57, Some("Time:900s"), "Life Support Class 3 Rating B", "Life Support"),
    "int_lifesupport_size3_class5"                  => ModuleRecord::fixed(128064152, 5.0, 0.62, Some("Time:1500s"), "Life Support Class 3 Rating A", "Life Support"),
    "int_lifesupport_size4_class1"                  => ModuleRecord::fixed(128064153, 10.0, 0.5, Some("Time:300s"), "Life Support Class 4 Rating E", "Life Support"),
    "int_lifesupport_size4_class2"                  => ModuleRecord::fixed(128064154, 4.0, 0.56, Some("Time:450s"), "Life Support Class 4 Rating D", "Life Support"),
    "int_lifesupport_size4_class3"                  => ModuleRecord::fixed(128064155, 10.0, 0.62, Some("Time:600s"), "Life Support Class 4 Rating C", "Life Support"),
    "int_lifesupport_size4_class4"                  => ModuleRecord::fixed(128064156, 16.0, 0.68, Some("Time:900s"), "Life Support Class 4 Rating B", "Life Support"),
    "int_lifesupport_size4_class5"                  => ModuleRecord::fixed(128064157, 10.0, 0.74, Some("Time:1500s"), "Life Support Class 4 Rating A", "Life Support"),
    "int_lifesupport_size5_class1"                  => ModuleRecord::fixed(128064158, 20.0, 0.57, Some("Time:300s"), "Life Support Class 5 Rating E", "Life Support"),
    "int_lifesupport_size5_class2"                  => ModuleRecord::fixed(128064159, 8.0, 0.64, Some("Time:450s"), "Life Support Class 5 Rating D", "Life Support"),
    "int_lifesupport_size5_class3"                  => ModuleRecord::fixed(128064160, 20.0, 0.71, Some("Time:600s"), "Life Support Class 5 Rating C", "Life Support"),
    "int_lifesupport_size5_class4"                  => ModuleRecord::fixed(128064161, 32.0, 0.78, Some("Time:900s"), "Life Support Class 5 Rating B", "Life Support"),
    "int_lifesupport_size5_class5"                  => ModuleRecord::fixed(128064162, 20.0, 0.85, Some("Time:1500s"), "Life Support Class 5 Rating A", "Life Support"),
    "int_lifesupport_size6_class1"                  => ModuleRecord::fixed(128064163, 40.0, 0.64, Some("Time:300s"), "Life Support Class 6 Rating E", "Life Support"),
    "int_lifesupport_size6_class2"                  => ModuleRecord::fixed(128064164, 16.0, 0.72, Some("Time:450s"), "Life Support Class 6 Rating D", "Life Support"),
    "int_lifesupport_size6_class3"                  => ModuleRecord::fixed(128064165, 40.0, 0.8, Some("Time:600s"), "Life Support Class 6 Rating C", "Life Support"),
    "int_lifesupport_size6_class4"                  => ModuleRecord::fixed(128064166, 64.0, 0.88, Some("Time:900s"), "Life Support Class 6 Rating B", "Life Support"),
    "int_lifesupport_size6_class5"                  => ModuleRecord::fixed(128064167, 40.0, 0.96, Some("Time:1500s"), "Life Support Class 6 Rating A", "Life Support"),
    "int_lifesupport_size7_class1"                  => ModuleRecord::fixed(128064168, 80.0, 0.72, Some("Time:300s"), "Life Support Class 7 Rating E", "Life Support"),
    "int_lifesupport_size7_class2"                  => ModuleRecord::fixed(128064169, 32.0, 0.81, Some("Time:450s"), "Life Support Class 7 Rating D", "Life Support"),
    "int_lifesupport_size7_class3"                  => ModuleRecord::fixed(128064170, 80.0, 0.9, Some("Time:600s"), "Life Support Class 7 Rating C", "Life Support"),
    "int_lifesupport_size7_class4"                  => ModuleRecord::fixed(128064171, 128.0, 0.99, Some("Time:900s"), "Life Support Class 7 Rating B", "Life Support"),
    "int_lifesupport_size7_class5"                  => ModuleRecord::fixed(128064172, 80.0, 1.08, Some("Time:1500s"), "Life Support Class 7 Rating A", "Life Support"),
    "int_lifesupport_size8_class1"                  => ModuleRecord::fixed(128064173, 160.0, 0.8, Some("Time:300s"), "Life Support Class 8 Rating E", "Life Support"),
    "int_lifesupport_size8_class2"                  => ModuleRecord::fixed(128064174, 64.0, 0.9, Some("Time:450s"), "Life Support Class 8 Rating D", "Life Support"),
    "int_lifesupport_size8_class3"                  => ModuleRecord::fixed(128064175, 160.0, 1.0, Some("Time:600s"), "Life Support Class 8 Rating C", "Life Support"),
    "int_lifesupport_size8_class4"                  => ModuleRecord::fixed(128064176, 256.0, 1.1, Some("Time:900s"), "Life Support Class 8 Rating B", "Life Support"),
    "int_lifesupport_size8_class5"                  => ModuleRecord::fixed(128064177, 160.0, 1.2, Some("Time:1500s"), "Life Support Class 8 Rating A", "Life Support"),
    "int_metaalloyhullreinforcement_size1_class1"   => ModuleRecord::fixed(128833945, 2.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 1 Rating E", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size1_class2"   => ModuleRecord::fixed(128833946, 1.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 1 Rating D", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size2_class1"   => ModuleRecord::fixed(128833947, 4.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 2 Rating E", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size2_class2"   => ModuleRecord::fixed(128833948, 2.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 2 Rating D", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size3_class1"   => ModuleRecord::fixed(128833949, 8.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 3 Rating E", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size3_class2"   => ModuleRecord::fixed(128833950, 4.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 3 Rating D", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size4_class1"   => ModuleRecord::fixed(128833951, 16.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 4 Rating E", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size4_class2"   => ModuleRecord::fixed(128833952, 8.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 4 Rating D", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size5_class1"   => ModuleRecord::fixed(128833953, 32.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 5 Rating E", "Meta Alloy Hull Reinforcement"),
    "int_metaalloyhullreinforcement_size5_class2"   => ModuleRecord::fixed(128833954, 16.0, 0.0, None, "Meta Alloy Hull Reinforcement Class 5 Rating D", "Meta Alloy Hull Reinforcement"),
    "int_modulereinforcement_size1_class1"          => ModuleRecord::fixed(128737270, 2.0, 0.0, Some("Protection:30%"), "Module Reinforcement Package Class 1 Rating E", "Module Reinforcement Package"),
    "int_modulereinforcement_size1_class2"          => ModuleRecord::fixed(128737271, 1.0, 0.0, Some("Protection:60%"), "Module Reinforcement Package Class 1 Rating D", "Module Reinforcement Package"),
    "int_modulereinforcement_size2_class1"          => ModuleRecord::fixed(128737272, 4.0, 0.0, Some("Protection:30%"), "Module Reinforcement Package Class 2 Rating E", "Module Reinforcement Package"),
    "int_modulereinforcement_size2_class2"          => ModuleRecord::fixed(128737273, 2.0, 0.0, Some("Protection:60%"), "Module Reinforcement Package Class 2 Rating D", "Module Reinforcement Package"),
    "int_modulereinforcement_size3_class1"          => ModuleRecord::fixed(128737274, 8.0, 0.0, Some("Protection:30%"), "Module Reinforcement Package Class 3 Rating E", "Module Reinforcement Package"),
    "int_modulereinforcement_size3_class2"          => ModuleRecord::fixed(128737275, 4.0, 0.0, Some("Protection:60%"), "Module Reinforcement Package Class 3 Rating D", "Module Reinforcement Package"),
    "int_modulereinforcement_size4_class1"          => ModuleRecord::fixed(128737276, 16.0, 0.0, Some("Protection:30%"), "Module Reinforcement Package Class 4 Rating E", "Module Reinforcement Package"),
    "int_modulereinforcement_size4_class2"          => ModuleRecord::fixed(128737277, 8.0, 0.0, Some("Protection:60%"), "Module Reinforcement Package Class 4 Rating D", "Module Reinforcement Package"),
    "int_modulereinforcement_size5_class1"          => ModuleRecord::fixed(128737278, 32.0, 0.0, Some("Protection:30%"), "Module Reinforcement Package Class 5 Rating E", "Module Reinforcement Package"),
    "int_modulereinforcement_size5_class2"          => ModuleRecord::fixed(128737279, 16.0, 0.0, Some("Protection:60%"), "Module Reinforcement Package Class 5 Rating D", "Module Reinforcement Package"),
    "int_multidronecontrol_mining_size3_class1"     => ModuleRecord::fixed(129001921, 12.0, 0.5, Some("Limpets:3"), "Mining Multi Limpet Controller Class 3 Rating E", "Multi Limpet Controller"),
    "int_multidronecontrol_mining_size3_class3"     => ModuleRecord::fixed(129001922, 10.0, 0.35, Some("Limpets:3"), "Mining Multi Limpet Controller Class 3 Rating C", "Multi Limpet Controller"),
    "int_multidronecontrol_operations_size3_class3" => ModuleRecord::fixed(129001923, 10.0, 0.35, Some("Limpets:4"), "Operations Multi Limpet Controller Class 3 Rating C", "Multi Limpet Controller"),
    "int_multidronecontrol_operations_size3_class4" => ModuleRecord::fixed(129001924, 15.0, 0.3, Some("Limpets:4"), "Operations Multi Limpet Controller Class 3 Rating B", "Multi Limpet Controller"),
    "int_multidronecontrol_rescue_size3_class2"     => ModuleRecord::fixed(129001925, 8.0, 0.4, Some("Limpets:4"), "Rescue Multi Limpet Controller Class 3 Rating D", "Multi Limpet Controller"),
    "int_multidronecontrol_rescue_size3_class3"     => ModuleRecord::fixed(129001926, 10.0, 0.35, Some("Limpets:4"), "Rescue Multi Limpet Controller Class 3 Rating C", "Multi Limpet Controller"),
    "int_multidronecontrol_universal_size7_class3"  => ModuleRecord::fixed(129001929, 125.0, 0.8, Some("Limpets:8"), "Universal Multi Limpet Controller Class 7 Rating C", "Multi Limpet Controller"),
    "int_multidronecontrol_universal_size7_class5"  => ModuleRecord::fixed(129001930, 140.0, 1.1, Some("Limpets:8"), "Universal Multi Limpet Controller Class 7 Rating A", "Multi Limpet Controller"),
    "int_multidronecontrol_xeno_size3_class3"       => ModuleRecord::fixed(129001927, 10.0, 0.35, Some("Limpets:4"), "Xeno Multi Limpet Controller Class 3 Rating C", "Multi Limpet Controller"),
    "int_multidronecontrol_xeno_size3_class4"       => ModuleRecord::fixed(129001928, 15.0, 0.3, Some("Limpets:4"), "Xeno Multi Limpet Controller Class 3 Rating B", "Multi Limpet Controller"),
    "int_passengercabin_size2_class1"               => ModuleRecord::fixed(128734690, 2.5, 0.0, Some("Passengers:2"), "Economy Passenger Cabin Class 2 Rating E", "Passenger Cabin"),
    "int_passengercabin_size3_class1"               => ModuleRecord::fixed(128734691, 5.0, 0.0, Some("Passengers:4"), "Economy Passenger Cabin Class 3 Rating E", "Passenger Cabin"),
    "int_passengercabin_size3_class2"               => ModuleRecord::fixed(128734692, 5.0, 0.0, Some("Passengers:3"), "Business Passenger Cabin Class 3 Rating D", "Passenger Cabin"),
    "int_passengercabin_size3_class3"               => ModuleRecord::fixed(128734693, 5.0, 0.0, Some("Passengers:2"), "First Class Passenger Cabin Class 3 Rating C", "Passenger Cabin"),
    "int_passengercabin_size4_class1"               => ModuleRecord::fixed(128734694, 10.0, 0.0, Some("Passengers:8"), "Economy Passenger Cabin Class 4 Rating E", "Passenger Cabin"),
    "int_passengercabin_size4_class2"               => ModuleRecord::fixed(128734695, 10.0, 0.0, Some("Passengers:6"), "Business Passenger Cabin Class 4 Rating D", "Passenger Cabin"),
    "int_passengercabin_size4_class3"               => ModuleRecord::fixed(128734696, 10.0, 0.0, Some("Passengers:3"), "First Class Passenger Cabin Class 4 Rating C", "Passenger Cabin"),
    "int_passengercabin_size5_class1"               => ModuleRecord::fixed(128734697, 20.0, 0.0, Some("Passengers:16"), "Economy Passenger Cabin Class 5 Rating E", "Passenger Cabin"),
    "int_passengercabin_size5_class2"               => ModuleRecord::fixed(128734698, 20.0, 0.0, Some("Passengers:10"), "Business Passenger Cabin Class 5 Rating D", "Passenger Cabin"),
    "int_passengercabin_size5_class3"               => ModuleRecord::fixed(128734699, 20.0, 0.0, Some("Passengers:6"), "First Class Passenger Cabin Class 5 Rating C", "Passenger Cabin"),
    "int_passengercabin_size5_class4"               => ModuleRecord::fixed(128734700, 20.0, 0.0, Some("Passengers:4"), "Luxury Passenger Cabin Class 5 Rating B", "Passenger Cabin"),
    "int_passengercabin_size6_class1"               => ModuleRecord::fixed(128734701, 40.0, 0.0, Some("Passengers:32"), "Economy Passenger Cabin Class 6 Rating E", "Passenger Cabin"),
    "int_passengercabin_size6_class2"               => ModuleRecord::fixed(128734702, 40.0, 0.0, Some("Passengers:16"), "Business Passenger Cabin Class 6 Rating D", "Passenger Cabin"),
    "int_passengercabin_size6_class3"               => ModuleRecord::fixed(128734703, 40.0, 0.0, Some("Passengers:12"), "First Class Passenger Cabin Class 6 Rating C", "Passenger Cabin"),
    "int_passengercabin_size6_class4"               => ModuleRecord::fixed(128734704, 40.0, 0.0, Some("Passengers:8"), "Luxury Passenger Cabin Class 6 Rating B", "Passenger Cabin"),
    "int_powerdistributor_size1_class1"             => ModuleRecord::fixed(128064178, 1.3, 0.32, Some("WepCap:12MW"), "Power Distributor Class 1 Rating E", "Power Distributor"),
    "int_powerdistributor_size1_class2"             => ModuleRecord::fixed(128064179, 0.5, 0.36, Some("WepCap:12MW"), "Power Distributor Class 1 Rating D", "Power Distributor"),
    "int_powerdistributor_size1_class3"             => ModuleRecord::fixed(128064180, 1.3, 0.4, Some("WepCap:12MW"), "Power Distributor Class 1 Rating C", "Power Distributor"),
    "int_powerdistributor_size1_class4"             => ModuleRecord::fixed(128064181, 2.0, 0.44, Some("WepCap:12MW"), "Power Distributor Class 1 Rating B", "Power Distributor"),
    "int_powerdistributor_size1_class5"             => ModuleRecord::fixed(128064182, 1.3, 0.48, Some("WepCap:12MW"), "Power Distributor Class 1 Rating A", "Power Distributor"),
    "int_powerdistributor_size2_class1"             => ModuleRecord::fixed(128064183, 2.5, 0.36, Some("WepCap:13MW"), "Power Distributor Class 2 Rating E", "Power Distributor"),
    "int_powerdistributor_size2_class2"             => ModuleRecord::fixed(128064184, 1.0, 0.41, Some("WepCap:14MW"), "Power Distributor Class 2 Rating D", "Power Distributor"),
    "int_powerdistributor_size2_class3"             => ModuleRecord::fixed(128064185, 2.5, 0.45, Some("WepCap:15MW"), "Power Distributor Class 2 Rating C", "Power Distributor"),
    "int_powerdistributor_size2_class4"             => ModuleRecord::fixed(128064186, 4.0, 0.5, Some("WepCap:16MW"), "Power Distributor Class 2 Rating B", "Power Distributor"),
    "int_powerdistributor_size2_class5"             => ModuleRecord::fixed(128064187, 2.5, 0.54, Some("WepCap:17MW"), "Power Distributor Class 2 Rating A", "Power Distributor"),
    "int_powerdistributor_size3_class1"             => ModuleRecord::fixed(128064188, 5.0, 0.4, Some("WepCap:14MW"), "Power Distributor Class 3 Rating E", "Power Distributor"),
    "int_powerdistributor_size3_class2"             => ModuleRecord::fixed(128064189, 2.0, 0.45, Some("WepCap:16MW"), "Power Distributor Class 3 Rating D", "Power Distributor"),
    "int_powerdistributor_size3_class3"             => ModuleRecord::fixed(128064190, 5.0, 0.5, Some("WepCap:18MW"), "Power Distributor Class 3 Rating C", "Power Distributor"),
    "int_powerdistributor_size3_class4"             => ModuleRecord::fixed(128064191, 8.0, 0.55, Some("WepCap:20MW"), "Power Distributor Class 3 Rating B", "Power Distributor"),
    "int_powerdistributor_size3_class5"             => ModuleRecord::fixed(128064192, 5.0, 0.6, Some("WepCap:22MW"), "Power Distributor Class 3 Rating A", "Power Distributor"),
    "int_powerdistributor_size4_class1"             => ModuleRecord::fixed(128064193, 10.0, 0.45, Some("WepCap:17MW"), "Power Distributor Class 4 Rating E", "Power Distributor"),
    "int_powerdistributor_size4_class2"             => ModuleRecord::fixed(128064194, 4.0, 0.5, Some("WepCap:19MW"), "Power Distributor Class 4 Rating D", "Power Distributor"),
    "int_powerdistributor_size4_class3"             => ModuleRecord::fixed(128064195, 10.0, 0.56, Some("WepCap:21MW"), "Power Distributor Class 4 Rating C", "Power Distributor"),
    "int_powerdistributor_size4_class4"             => ModuleRecord::fixed(128064196, 16.0, 0.62, Some("WepCap:23MW"), "Power Distributor Class 4 Rating B", "Power Distributor"),
    "int_powerdistributor_size4_class5"             => ModuleRecord::fixed(128064197, 10.0, 0.67, Some("WepCap:25MW"), "Power Distributor Class 4 Rating A", "Power Distributor"),
    "int_powerdistributor_size5_class1"             => ModuleRecord::fixed(128064198, 20.0, 0.5, Some("WepCap:22MW"), "Power Distributor Class 5 Rating E", "Power Distributor"),
    "int_powerdistributor_size5_class2"             => ModuleRecord::fixed(128064199, 8.0, 0.56, Some("WepCap:24MW"), "Power Distributor Class 5 Rating D", "Power Distributor"),
    "int_powerdistributor_size5_class3"             => ModuleRecord::fixed(128064200, 20.0, 0.62, Some("WepCap:26MW"), "Power Distributor Class 5 Rating C", "Power Distributor"),
    "int_powerdistributor_size5_class4"             => ModuleRecord::fixed(128064201, 32.0, 0.68, Some("WepCap:28MW"), "Power Distributor Class 5 Rating B", "Power Distributor"),
    "int_powerdistributor_size5_class5"             => ModuleRecord::fixed(128064202, 20.0, 0.74, Some("WepCap:30MW"), "Power Distributor Class 5 Rating A", "Power Distributor"),
    "int_powerdistributor_size6_class1"             => ModuleRecord::fixed(128064203, 40.0, 0.54, Some("WepCap:26MW"), "Power Distributor Class 6 Rating E", "Power Distributor"),
    "int_powerdistributor_size6_class2"             => ModuleRecord::fixed(128064204, 16.0, 0.61, Some("WepCap:29MW"), "Power Distributor Class 6 Rating D", "Power Distributor"),
    "int_powerdistributor_size6_class3"             => ModuleRecord::fixed(128064205, 40.0, 0.68, Some("WepCap:32MW"), "Power Distributor Class 6 Rating C", "Power Distributor"),
    "int_powerdistributor_size6_class4"             => ModuleRecord::fixed(128064206, 64.0, 0.75, Some("WepCap:35MW"), "Power Distributor Class 6 Rating B", "Power Distributor"),
    "int_powerdistributor_size6_class5"             => ModuleRecord::fixed(128064207, 40.0, 0.82, Some("WepCap:38MW"), "Power Distributor Class 6 Rating A", "Power Distributor"),
    "int_powerdistributor_size7_class1"             => ModuleRecord::fixed(128064208, 80.0, 0.59, Some("WepCap:31MW"), "Power Distributor Class 7 Rating E", "Power Distributor"),
    "int_powerdistributor_size7_class2"             => ModuleRecord::fixed(128064209, 32.0, 0.67, Some("WepCap:34MW"), "Power Distributor Class 7 Rating D", "Power Distributor"),
    "int_powerdistributor_size7_class3"             => ModuleRecord::fixed(128064210, 80.0, 0.74, Some("WepCap:38MW"), "Power Distributor Class 7 Rating C", "Power Distributor"),
    "int_powerdistributor_size7_class4"             => ModuleRecord::fixed(128064211, 128.0, 0.81, Some("WepCap:42MW"), "Power Distributor Class 7 Rating B", "Power Distributor"),
    "int_powerdistributor_size7_class5"             => ModuleRecord::fixed(128064212, 80.0, 0.89, Some("WepCap:46MW"), "Power Distributor Class 7 Rating A", "Power Distributor"),
    "int_powerdistributor_size8_class1"             => ModuleRecord::fixed(128064213, 160.0, 0.64, Some("WepCap:35MW"), "Power Distributor Class 8 Rating E", "Power Distributor"),
    "int_powerdistributor_size8_class2"             => ModuleRecord::fixed(128064214, 64.0, 0.72, Some("WepCap:40MW"), "Power Distributor Class 8 Rating D", "Power Distributor"),
    "int_powerdistributor_size8_class3"             => ModuleRecord::fixed(128064215, 160.0, 0.8, Some("WepCap:45MW"), "Power Distributor Class 8 Rating C", "Power Distributor"),
    "int_powerdistributor_size8_class4"             => ModuleRecord::fixed(128064216, 256.0, 0.88, Some("WepCap:50MW"), "Power Distributor Class 8 Rating B", "Power Distributor"),
    "int_powerdistributor_size8_class5"             => ModuleRecord::fixed(128064217, 160.0, 0.96, Some("WepCap:55MW"), "Power Distributor Class 8 Rating A", "Power Distributor"),
    "int_powerplant_size2_class1"                   => ModuleRecord::fixed(128064033, 1.3, 0.0, Some("Power:6.4MW"), "Power Plant Class 2 Rating E", "Power Plant"),
    "int_powerplant_size2_class2"                   => ModuleRecord::fixed(128064034, 0.5, 0.0, Some("Power:7.2MW"), "Power Plant Class 2 Rating D", "Power Plant"),
    "int_powerplant_size2_class3"                   => ModuleRecord::fixed(128064035, 1.3, 0.0, Some("Power:8.0MW"), "Power Plant Class 2 Rating C", "Power Plant"),
    "int_powerplant_size2_class4"                   => ModuleRecord::fixed(128064036, 2.0, 0.0, Some("Power:8.8MW"), "Power Plant Class 2 Rating B", "Power Plant"),
    "int_powerplant_size2_class5"                   => ModuleRecord::fixed(128064037, 1.3, 0.0, Some("Power:9.6MW"), "Power Plant Class 2 Rating A", "Power Plant"),
    "int_powerplant_size3_class1"                   => ModuleRecord::fixed(128064038, 2.5, 0.0, Some("Power:8.0MW"), "Power Plant Class 3 Rating E", "Power Plant"),
    "int_powerplant_size3_class2"                   => ModuleRecord::fixed(128064039, 1.0, 0.0, Some("Power:9.0MW"), "Power Plant Class 3 Rating D", "Power Plant"),
    "int_powerplant_size3_class3"                   => ModuleRecord::fixed(128064040, 2.5, 0.0, Some("Power:10.0MW"), "Power Plant Class 3 Rating C", "Power Plant"),
    "int_powerplant_size3_class4"                   => ModuleRecord::fixed(128064041, 4.0, 0.0, Some("Power:11.0MW"), "Power Plant Class 3 Rating B", "Power Plant"),
    "int_powerplant_size3_class5"                   => ModuleRecord::fixed(128064042, 2.5, 0.0, Some("Power:12.0MW"), "Power Plant Class 3 Rating A", "Power Plant"),
    "int_powerplant_size4_class1"                   => ModuleRecord::fixed(128064043, 5.0, 0.0, Some("Power:10.4MW"), "Power Plant Class 4 Rating E", "Power Plant"),
    "int_powerplant_size4_class2"                   => ModuleRecord::fixed(128064044, 2.0, 0.0, Some("Power:11.7MW"), "Power Plant Class 4 Rating D", "Power Plant"),
    "int_powerplant_size4_class3"                   => ModuleRecord::fixed(128064045, 5.0, 0.0, Some("Power:13.0MW"), "Power Plant Class 4 Rating C", "Power Plant"),
    "int_powerplant_size4_class4"                   => ModuleRecord::fixed(128064046, 8.0, 0.0, Some("Power:14.3MW"), "Power Plant Class 4 Rating B", "Power Plant"),
    "int_powerplant_size4_class5"                   => ModuleRecord::fixed(128064047, 5.0, 0.0, Some("Power:15.6MW"), "Power Plant Class 4 Rating A", "Power Plant"),
    "int_powerplant_size5_class1"                   => ModuleRecord::fixed(128064048, 10.0, 0.0, Some("Power:13.6MW"), "Power Plant Class 5 Rating E", "Power Plant"),
    "int_powerplant_size5_class2"                   => ModuleRecord::fixed(128064049, 4.0, 0.0, Some("Power:15.3MW"), "Power Plant Class 5 Rating D", "Power Plant"),
    "int_powerplant_size5_class3"                   => ModuleRecord::fixed(128064050, 10.0, 0.0, Some("Power:17.0MW"), "Power Plant Class 5 Rating C", "Power Plant"),
    "int_powerplant_size5_class4"                   => ModuleRecord::fixed(128064051, 16.0, 0.0, Some("Power:18.7MW"), "Power Plant Class 5 Rating B", "Power Plant"),
    "int_powerplant_size5_class5"                   => ModuleRecord::fixed(128064052, 10.0, 0.0, Some("Power:20.4MW"), "Power Plant Class 5 Rating A", "Power Plant"),
    "int_powerplant_size6_class1"                   => ModuleRecord::fixed(128064053, 20.0, 0.0, Some("Power:16.8MW"), "Power Plant Class 6 Rating E", "Power Plant"),
    "int_powerplant_size6_class2"                   => ModuleRecord::fixed(128064054, 8.0, 0.0, Some("Power:18.9MW"), "Power Plant Class 6 Rating D", "Power Plant"),
    "int_powerplant_size6_class3"                   => ModuleRecord::fixed(128064055, 20.0, 0.0, Some("Power:21.0MW"), "Power Plant Class 6 Rating C", "Power Plant"),
    "int_powerplant_size6_class4"                   => ModuleRecord::fixed(128064056, 32.0, 0.0, Some("Power:23.1MW"), "Power Plant Class 6 Rating B", "Power Plant"),
    "int_powerplant_size6_class5"                   => ModuleRecord::fixed(128064057, 20.0, 0.0, Some("Power:25.2MW"), "Power Plant Class 6 Rating A", "Power Plant"),
    "int_powerplant_size7_class1"                   => ModuleRecord::fixed(128064058, 40.0, 0.0, Some("Power:20.0MW"), "Power Plant Class 7 Rating E", "Power Plant"),
    "int_powerplant_size7_class2"                   => ModuleRecord::fixed(128064059, 16.0, 0.0, Some("Power:22.5MW"), "Power Plant Class 7 Rating D", "Power Plant"),
    "int_powerplant_size7_class3"                   => ModuleRecord::fixed(128064060, 40.0, 0.0, Some("Power:25.0MW"), "Power Plant Class 7 Rating C", "Power Plant"),
    "int_powerplant_size7_class4"                   => ModuleRecord::fixed(128064061, 64.0, 0.0, Some("Power:27.5MW"), "Power Plant Class 7 Rating B", "Power Plant"),
    "int_powerplant_size7_class5"                   => ModuleRecord::fixed(128064062, 40.0, 0.0, Some("Power:30.0MW"), "Power Plant Class 7 Rating A", "Power Plant"),
    "int_powerplant_size8_class1"                   => ModuleRecord::fixed(128064063, 80.0, 0.0, Some("Power:24.0MW"), "Power Plant Class 8 Rating E", "Power Plant"),
    "int_powerplant_size8_class2"                   => ModuleRecord::fixed(128064064, 32.0, 0.0, Some("Power:27.0MW"), "Power Plant Class 8 Rating D", "Power Plant"),
    "int_powerplant_size8_class3"                   => ModuleRecord::fixed(128064065, 80.0, 0.0, Some("Power:30.0MW"), "Power Plant Class 8 Rating C", "Power Plant"),
    "int_powerplant_size8_class4"                   => ModuleRecord::fixed(128064066, 128.0, 0.0, Some("Power:33.0MW"), "Power Plant Class 8 Rating B", "Power Plant"),
    "int_powerplant_size8_class5"                   => ModuleRecord::fixed(128064067, 80.0, 0.0, Some("Power:36.0MW"), "Power Plant Class 8 Rating A", "Power Plant"),
    "int_refinery_size1_class1"                     => ModuleRecord::fixed(128666684, 0.0, 0.14, Some("Bins:1"), "Refinery Class 1 Rating E", "Refinery"),
    "int_refinery_size1_class2"                     => ModuleRecord::fixed(128666685, 0.0, 0.18, Some("Bins:1"), "Refinery Class 1 Rating D", "Refinery"),
    "int_refinery_size1_class3"                     => ModuleRecord::fixed(128666686, 0.0, 0.23, Some("Bins:2"), "Refinery Class 1 Rating C", "Refinery"),
    "int_refinery_size1_class4"                     => ModuleRecord::fixed(128666687, 0.0, 0.28, Some("Bins:3"), "Refinery Class 1 Rating B", "Refinery"),
    "int_refinery_size1_class5"                     => ModuleRecord::fixed(128666688, 0.0, 0.32, Some("Bins:4"), "Refinery Class 1 Rating A", "Refinery"),
    "int_refinery_size2_class1"                     => ModuleRecord::fixed(128666689, 0.0, 0.17, Some("Bins:1"), "Refinery Class 2 Rating E", "Refinery"),
    "int_refinery_size2_class2"                     => ModuleRecord::fixed(128666690, 0.0, 0.22, Some("Bins:2"), "Refinery Class 2 Rating D", "Refinery"),
    "int_refinery_size2_class3"                     => ModuleRecord::fixed(128666691, 0.0, 0.28, Some("Bins:3"), "Refinery Class 2 Rating C", "Refinery"),
    "int_refinery_size2_class4"                     => ModuleRecord::fixed(128666692, 0.0, 0.34, Some("Bins:4"), "Refinery Class 2 Rating B", "Refinery"),
    "int_refinery_size2_class5"                     => ModuleRecord::fixed(128666693, 0.0, 0.39, Some("Bins:6"), "Refinery Class 2 Rating A", "Refinery"),
    "int_refinery_size3_class1"                     => ModuleRecord::fixed(128666694, 0.0, 0.2, Some("Bins:1"), "Refinery Class 3 Rating E", "Refinery"),
    "int_refinery_size3_class2"                     => ModuleRecord::fixed(128666695, 0.0, 0.27, Some("Bins:3"), "Refinery Class 3 Rating D", "Refinery"),
    "int_refinery_size3_class3"                     => ModuleRecord::fixed(128666696, 0.0, 0.34, Some("Bins:4"), "Refinery Class 3 Rating C", "Refinery"),
    "int_refinery_size3_class4"                     => ModuleRecord::fixed(128666697, 0.0, 0.41, Some("Bins:5"), "Refinery Class 3 Rating B", "Refinery"),
    "int_refinery_size3_class5"                     => ModuleRecord::fixed(128666698, 0.0, 0.48, Some("Bins:8"), "Refinery Class 3 Rating A", "Refinery"),
    "int_refinery_size4_class1"                     => ModuleRecord::fixed(128666699, 0.0, 0.25, Some("Bins:1"), "Refinery Class 4 Rating E", "Refinery"),
    "int_refinery_size4_class2"                     => ModuleRecord::fixed(128666700, 0.0, 0.33, Some("Bins:4"), "Refinery Class 4 Rating D", "Refinery"),
    "int_refinery_size4_class3"                     => ModuleRecord::fixed(128666701, 0.0, 0.41, Some("Bins:5"), "Refinery Class 4 Rating C", "Refinery"),
    "int_refinery_size4_class4"                     => ModuleRecord::fixed(128666702, 0.0, 0.49, Some("Bins:6"), "Refinery Class 4 Rating B", "Refinery"),
    "int_refinery_size4_class5"                     => ModuleRecord::fixed(128666703, 0.0, 0.57, Some("Bins:10"), "Refinery Class 4 Rating A", "Refinery"),
    "int_repairer_size1_class1"                     => ModuleRecord::fixed(128667598, 0.0, 0.54, None, "Auto Field-Maintenance Unit Class 1 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size1_class2"                     => ModuleRecord::fixed(128667599, 0.0, 0.72, None, "Auto Field-Maintenance Unit Class 1 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size1_class3"                     => ModuleRecord::fixed(128667600, 0.0, 0.9, None, "Auto Field-Maintenance Unit Class 1 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size1_class4"                     => ModuleRecord::fixed(128667601, 0.0, 1.04, None, "Auto Field-Maintenance Unit Class 1 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size1_class5"                     => ModuleRecord::fixed(128667602, 0.0, 1.26, None, "Auto Field-Maintenance Unit Class 1 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size2_class1"                     => ModuleRecord::fixed(128667603, 0.0, 0.62, None, "Auto Field-Maintenance Unit Class 2 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size2_class2"                     => ModuleRecord::fixed(128667604, 0.0, 0.83, None, "Auto Field-Maintenance Unit Class 2 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size2_class3"                     => ModuleRecord::fixed(128667605, 0.0, 1.03, None, "Auto Field-Maintenance Unit Class 2 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size2_class4"                     => ModuleRecord::fixed(128667606, 0.0, 1.2, None, "Auto Field-Maintenance Unit Class 2 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size2_class5"                     => ModuleRecord::fixed(128667607, 0.0, 1.45, None, "Auto Field-Maintenance Unit Class 2 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size3_class1"                     => ModuleRecord::fixed(128667608, 0.0, 0.73, None, "Auto Field-Maintenance Unit Class 3 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size3_class2"                     => ModuleRecord::fixed(128667609, 0.0, 0.97, None, "Auto Field-Maintenance Unit Class 3 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size3_class3"                     => ModuleRecord::fixed(128667610, 0.0, 1.22, None, "Auto Field-Maintenance Unit Class 3 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size3_class4"                     => ModuleRecord::fixed(128667611, 0.0, 1.4, None, "Auto Field-Maintenance Unit Class 3 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size3_class5"                     => ModuleRecord::fixed(128667612, 0.0, 1.7, None, "Auto Field-Maintenance Unit Class 3 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size4_class1"                     => ModuleRecord::fixed(128667613, 0.0, 0.86, None, "Auto Field-Maintenance Unit Class 4 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size4_class2"                     => ModuleRecord::fixed(128667614, 0.0, 1.15, None, "Auto Field-Maintenance Unit Class 4 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size4_class3"                     => ModuleRecord::fixed(128667615, 0.0, 1.44, None, "Auto Field-Maintenance Unit Class 4 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size4_class4"                     => ModuleRecord::fixed(128667616, 0.0, 1.66, None, "Auto Field-Maintenance Unit Class 4 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size4_class5"                     => ModuleRecord::fixed(128667617, 0.0, 2.02, None, "Auto Field-Maintenance Unit Class 4 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size5_class1"                     => ModuleRecord::fixed(128667618, 0.0, 1.0, None, "Auto Field-Maintenance Unit Class 5 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size5_class2"                     => ModuleRecord::fixed(128667619, 0.0, 1.33, None, "Auto Field-Maintenance Unit Class 5 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size5_class3"                     => ModuleRecord::fixed(128667620, 0.0, 1.67, None, "Auto Field-Maintenance Unit Class 5 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size5_class4"                     => ModuleRecord::fixed(128667621, 0.0, 1.92, None, "Auto Field-Maintenance Unit Class 5 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size5_class5"                     => ModuleRecord::fixed(128667622, 0.0, 2.33, None, "Auto Field-Maintenance Unit Class 5 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size6_class1"                     => ModuleRecord::fixed(128667623, 0.0, 1.13, None, "Auto Field-Maintenance Unit Class 6 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size6_class2"                     => ModuleRecord::fixed(128667624, 0.0, 1.51, None, "Auto Field-Maintenance Unit Class 6 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size6_class3"                     => ModuleRecord::fixed(128667625, 0.0, 1.89, None, "Auto Field-Maintenance Unit Class 6 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size6_class4"                     => ModuleRecord::fixed(128667626, 0.0, 2.18, None, "Auto Field-Maintenance Unit Class 6 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size6_class5"                     => ModuleRecord::fixed(128667627, 0.0, 2.65, None, "Auto Field-Maintenance Unit Class 6 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size7_class1"                     => ModuleRecord::fixed(128667628, 0.0, 1.3, None, "Auto Field-Maintenance Unit Class 7 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size7_class2"                     => ModuleRecord::fixed(128667629, 0.0, 1.73, None, "Auto Field-Maintenance Unit Class 7 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size7_class3"                     => ModuleRecord::fixed(128667630, 0.0, 2.16, None, "Auto Field-Maintenance Unit Class 7 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size7_class4"                     => ModuleRecord::fixed(128667631, 0.0, 2.5, None, "Auto Field-Maintenance Unit Class 7 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size7_class5"                     => ModuleRecord::fixed(128667632, 0.0, 3.02, None, "Auto Field-Maintenance Unit Class 7 Rating A", "Auto Field-Maintenance Unit"),
    "int_repairer_size8_class1"                     => ModuleRecord::fixed(128667633, 0.0, 1.46, None, "Auto Field-Maintenance Unit Class 8 Rating E", "Auto Field-Maintenance Unit"),
    "int_repairer_size8_class2"                     => ModuleRecord::fixed(128667634, 0.0, 1.94, None, "Auto Field-Maintenance Unit Class 8 Rating D", "Auto Field-Maintenance Unit"),
    "int_repairer_size8_class3"                     => ModuleRecord::fixed(128667635, 0.0, 2.43, None, "Auto Field-Maintenance Unit Class 8 Rating C", "Auto Field-Maintenance Unit"),
    "int_repairer_size8_class4"                     => ModuleRecord::fixed(128667636, 0.0, 2.81, None, "Auto Field-Maintenance Unit Class 8 Rating B", "Auto Field-Maintenance Unit"),
    "int_repairer_size8_class5"                     => ModuleRecord::fixed(128667637, 0.0, 3.4, None, "Auto Field-Maintenance Unit Class 8 Rating A", "Auto Field-Maintenance Unit"),
    "int_sensors_size1_class1"                      => ModuleRecord::fixed(128064218, 1.3, 0.16, Some("Range:4.0km"), "Sensors Class 1 Rating E", "Sensors"),
    "int_sensors_size1_class2"                      => ModuleRecord::fixed(128064219, 0.5, 0.18, Some("Range:4.5km"), "Sensors Class 1 Rating D", "Sensors"),
    "int_sensors_size1_class3"                      => ModuleRecord::fixed(128064220, 1.3, 0.2, Some("Range:5.0km"), "Sensors Class 1 Rating C", "Sensors"),
    "int_sensors_size1_class4"                      => ModuleRecord::fixed(128064221, 2.0, 0.33, Some("Range:5.5km"), "Sensors Class 1 Rating B", "Sensors"),
    "int_sensors_size1_class5"                      => ModuleRecord::fixed(128064222, 1.3, 0.6, Some("Range:6.0km"), "Sensors Class 1 Rating A", "Sensors"),
    "int_sensors_size2_class1"                      => ModuleRecord::fixed(128064223, 2.5, 0.18, Some("Range:4.16km"), "Sensors Class 2 Rating E", "Sensors"),
    "int_sensors_size2_class2"                      => ModuleRecord::fixed(128064224, 1.0, 0.21, Some("Range:4.68km"), "Sensors Class 2 Rating D", "Sensors"),
    "int_sensors_size2_class3"                      => ModuleRecord::fixed(128064225, 2.5, 0.23, Some("Range:5.2km"), "Sensors Class 2 Rating C", "Sensors"),
    "int_sensors_size2_class4"                      => ModuleRecord::fixed(128064226, 4.0, 0.38, Some("Range:5.72km"), "Sensors Class 2 Rating B", "Sensors"),
    "int_sensors_size2_class5"                      => ModuleRecord::fixed(128064227, 2.5, 0.69, Some("Range:6.24km"), "Sensors Class 2 Rating A", "Sensors"),
    "int_sensors_size3_class1"                      => ModuleRecord::fixed(128064228, 5.0, 0.22, Some("Range:4.32km"), "Sensors Class 3 Rating E", "Sensors"),
    "int_sensors_size3_class2"                      => ModuleRecord::fixed(128064229, 2.0, 0.25, Some("Range:4.86km"), "Sensors Class 3 Rating D", "Sensors"),
    "int_sensors_size3_class3"                      => ModuleRecord::fixed(128064230, 5.0, 0.28, Some("Range:5.4km"), "Sensors Class 3 Rating C", "Sensors"),
    "int_sensors_size3_class4"                      => ModuleRecord::fixed(128064231, 8.0, 0.46, Some("Range:5.94km"), "Sensors Class 3 Rating B", "Sensors"),
    "int_sensors_size3_class5"                      => ModuleRecord::fixed(128064232, 5.0, 0.84, Some("Range:6.48km"), "Sensors Class 3 Rating A", "Sensors"),
    "int_sensors_size4_class1"                      => ModuleRecord::fixed(128064233, 10.0, 0.27, Some("Range:4.48km"), "Sensors Class 4 Rating E", "Sensors"),
    "int_sensors_size4_class2"                      => ModuleRecord::fixed(128064234, 4.0, 0.31, Some("Range:5.04km"), "Sensors Class 4 Rating D", "Sensors"),
    "int_sensors_size4_class3"                      => ModuleRecord::fixed(128064235, 10.0, 0.34, Some("Range:5.6km"), "Sensors Class 4 Rating C", "Sensors"),
    "int_sensors_size4_class4"                      => ModuleRecord::fixed(128064236, 16.0, 0.56, Some("Range:6.16km"), "Sensors Class 4 Rating B", "Sensors"),
    "int_sensors_size4_class5"                      => ModuleRecord::fixed(128064237, 10.0, 1.02, Some("Range:6.72km"), "Sensors Class 4 Rating A", "Sensors"),
    "int_sensors_size5_class1"                      => ModuleRecord::fixed(128064238, 20.0, 0.33, Some("Range:4.64km"), "Sensors Class 5 Rating E", "Sensors"),
    "int_sensors_size5_class2"                      => ModuleRecord::fixed(128064239, 8.0, 0.37, Some("Range:5.22km"), "Sensors Class 5 Rating D", "Sensors"),
    "int_sensors_size5_class3"                      => ModuleRecord::fixed(128064240, 20.0, 0.41, Some("Range:5.8km"), "Sensors Class 5 Rating C", "Sensors"),
    "int_sensors_size5_class4"                      => ModuleRecord::fixed(128064241, 32.0, 0.68, Some("Range:6.38km"), "Sensors Class 5 Rating B", "Sensors"),
    "int_sensors_size5_class5"                      => ModuleRecord::fixed(128064242, 20.0, 1.23, Some("Range:6.96km"), "Sensors Class 5 Rating A", "Sensors"),
    "int_sensors_size6_class1"                      => ModuleRecord::fixed(128064243, 40.0, 0.4, Some("Range:4.8km"), "Sensors Class 6 Rating E", "Sensors"),
    "int_sensors_size6_class2"                      => ModuleRecord::fixed(128064244, 16.0, 0.45, Some("Range:5.4km"), "Sensors Class 6 Rating D", "Sensors"),
    "int_sensors_size6_class3"                      => ModuleRecord::fixed(128064245, 40.0, 0.5, Some("Range:6.0km"), "Sensors Class 6 Rating C", "Sensors"),
    "int_sensors_size6_class4"                      => ModuleRecord::fixed(128064246, 64.0, 0.83, Some("Range:6.6km"), "Sensors Class 6 Rating B", "Sensors"),
    "int_sensors_size6_class5"                      => ModuleRecord::fixed(128064247, 40.0, 1.5, Some("Range:7.2km"), "Sensors Class 6 Rating A", "Sensors"),
    "int_sensors_size7_class1"                      => ModuleRecord::fixed(128064248, 80.0, 0.47, Some("Range:4.96km"), "Sensors Class 7 Rating E", "Sensors"),
    "int_sensors_size7_class2"                      => ModuleRecord::fixed(128064249, 32.0, 0.53, Some("Range:5.58km"), "Sensors Class 7 Rating D", "Sensors"),
    "int_sensors_size7_class3"                      => ModuleRecord::fixed(128064250, 80.0, 0.59, Some("Range:6.2km"), "Sensors Class 7 Rating C", "Sensors"),
    "int_sensors_size7_class4"                      => ModuleRecord::fixed(128064251, 128.0, 0.97, Some("Range:6.82km"), "Sensors Class 7 Rating B", "Sensors"),
    "int_sensors_size7_class5"                      => ModuleRecord::fixed(128064252, 80.0, 1.77, Some("Range:7.44km"), "Sensors Class 7 Rating A", "Sensors"),
    "int_sensors_size8_class1"                      => ModuleRecord::fixed(128064253, 160.0, 0.55, Some("Range:5.12km"), "Sensors Class 8 Rating E", "Sensors"),
    "int_sensors_size8_class2"                      => ModuleRecord::fixed(128064254, 64.0, 0.62, Some("Range:5.76km"), "Sensors Class 8 Rating D", "Sensors"),
    "int_sensors_size8_class3"                      => ModuleRecord::fixed(128064255, 160.0, 0.69, Some("Range:6.4km"), "Sensors Class 8 Rating C", "Sensors"),
    "int_sensors_size8_class4"                      => ModuleRecord::fixed(128064256, 256.0, 1.14, Some("Range:7.04km"), "Sensors Class 8 Rating B", "Sensors"),
    "int_sensors_size8_class5"                      => ModuleRecord::fixed(128064257, 160.0, 2.07, Some("Range:7.68km"), "Sensors Class 8 Rating A", "Sensors"),
    "int_shieldcellbank_size1_class1"               => ModuleRecord::fixed(128064298, 1.3, 0.41, None, "Shield Cell Bank Class 1 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size1_class2"               => ModuleRecord::fixed(128064299, 0.5, 0.55, None, "Shield Cell Bank Class 1 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size1_class3"               => ModuleRecord::fixed(128064300, 1.3, 0.69, None, "Shield Cell Bank Class 1 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size1_class4"               => ModuleRecord::fixed(128064301, 2.0, 0.83, None, "Shield Cell Bank Class 1 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size1_class5"               => ModuleRecord::fixed(128064302, 1.3, 0.97, None, "Shield Cell Bank Class 1 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size2_class1"               => ModuleRecord::fixed(128064303, 2.5, 0.5, None, "Shield Cell Bank Class 2 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size2_class2"               => ModuleRecord::fixed(128064304, 1.0, 0.67, None, "Shield Cell Bank Class 2 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size2_class3"               => ModuleRecord::fixed(128064305, 2.5, 0.84, None, "Shield Cell Bank Class 2 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size2_class4"               => ModuleRecord::fixed(128064306, 4.0, 1.01, None, "Shield Cell Bank Class 2 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size2_class5"               => ModuleRecord::fixed(128064307, 2.5, 1.18, None, "Shield Cell Bank Class 2 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size3_class1"               => ModuleRecord::fixed(128064308, 5.0, 0.61, None, "Shield Cell Bank Class 3 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size3_class2"               => ModuleRecord::fixed(128064309, 2.0, 0.82, None, "Shield Cell Bank Class 3 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size3_class3"               => ModuleRecord::fixed(128064310, 5.0, 1.02, None, "Shield Cell Bank Class 3 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size3_class4"               => ModuleRecord::fixed(128064311, 8.0, 1.22, None, "Shield Cell Bank Class 3 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size3_class5"               => ModuleRecord::fixed(128064312, 5.0, 1.43, None, "Shield Cell Bank Class 3 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size4_class1"               => ModuleRecord::fixed(128064313, 10.0, 0.74, None, "Shield Cell Bank Class 4 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size4_class2"               => ModuleRecord::fixed(128064314, 4.0, 0.98, None, "Shield Cell Bank Class 4 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size4_class3"               => ModuleRecord::fixed(128064315, 10.0, 1.23, None, "Shield Cell Bank Class 4 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size4_class4"               => ModuleRecord::fixed(128064316, 16.0, 1.48, None, "Shield Cell Bank Class 4 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size4_class5"               => ModuleRecord::fixed(128064317, 10.0, 1.72, None, "Shield Cell Bank Class 4 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size5_class1"               => ModuleRecord::fixed(128064318, 20.0, 0.9, None, "Shield Cell Bank Class 5 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size5_class2"               => ModuleRecord::fixed(128064319, 8.0, 1.2, None, "Shield Cell Bank Class 5 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size5_class3"               => ModuleRecord::fixed(128064320, 20.0, 1.5, None, "Shield Cell Bank Class 5 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size5_class4"               => ModuleRecord::fixed(128064321, 32.0, 1.8, None, "Shield Cell Bank Class 5 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size5_class5"               => ModuleRecord::fixed(128064322, 20.0, 2.1, None, "Shield Cell Bank Class 5 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size6_class1"               => ModuleRecord::fixed(128064323, 40.0, 1.06, None, "Shield Cell Bank Class 6 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size6_class2"               => ModuleRecord::fixed(128064324, 16.0, 1.42, None, "Shield Cell Bank Class 6 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size6_class3"               => ModuleRecord::fixed(128064325, 40.0, 1.77, None, "Shield Cell Bank Class 6 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size6_class4"               => ModuleRecord::fixed(128064326, 64.0, 2.12, None, "Shield Cell Bank Class 6 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size6_class5"               => ModuleRecord::fixed(128064327, 40.0, 2.48, None, "Shield Cell Bank Class 6 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size7_class1"               => ModuleRecord::fixed(128064328, 80.0, 1.24, None, "Shield Cell Bank Class 7 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size7_class2"               => ModuleRecord::fixed(128064329, 32.0, 1.66, None, "Shield Cell Bank Class 7 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size7_class3"               => ModuleRecord::fixed(128064330, 80.0, 2.07, None, "Shield Cell Bank Class 7 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size7_class4"               => ModuleRecord::fixed(128064331, 128.0, 2.48, None, "Shield Cell Bank Class 7 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size7_class5"               => ModuleRecord::fixed(128064332, 80.0, 2.9, None, "Shield Cell Bank Class 7 Rating A", "Shield Cell Bank"),
    "int_shieldcellbank_size8_class1"               => ModuleRecord::fixed(128064333, 160.0, 1.44, None, "Shield Cell Bank Class 8 Rating E", "Shield Cell Bank"),
    "int_shieldcellbank_size8_class2"               => ModuleRecord::fixed(128064334, 64.0, 1.92, None, "Shield Cell Bank Class 8 Rating D", "Shield Cell Bank"),
    "int_shieldcellbank_size8_class3"               => ModuleRecord::fixed(128064335, 160.0, 2.4, None, "Shield Cell Bank Class 8 Rating C", "Shield Cell Bank"),
    "int_shieldcellbank_size8_class4"               => ModuleRecord::fixed(128064336, 256.0, 2.88, None, "Shield Cell Bank Class 8 Rating B", "Shield Cell Bank"),
    "int_shieldcellbank_size8_class5"               => ModuleRecord::fixed(128064337, 160.0, 3.36, None, "Shield Cell Bank Class 8 Rating A", "Shield Cell Bank"),
    "int_shieldgenerator_size1_class1"              => ModuleRecord::fixed(128064258, 1.3, 0.72, Some("OptMass:25t"), "Shield Generator Class 1 Rating E", "Shield Generator"),
    "int_shieldgenerator_size1_class2"              => ModuleRecord::fixed(128064259, 0.5, 0.96, Some("OptMass:25t"), "Shield Generator Class 1 Rating D", "Shield Generator"),
    "int_shieldgenerator_size1_class3"              => ModuleRecord::fixed(128064260, 1.3, 1.2, Some("OptMass:25t"), "Shield Generator Class 1 Rating C", "Shield Generator"),
    "int_shieldgenerator_size1_class3_fast"         => ModuleRecord::fixed(128671331, 1.3, 1.32, Some("OptMass:25t"), "Bi-Weave Shield Generator Class 1 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size1_class4"              => ModuleRecord::fixed(128064261, 2.0, 1.44, Some("OptMass:25t"), "Shield Generator Class 1 Rating B", "Shield Generator"),
    "int_shieldgenerator_size1_class5"              => ModuleRecord::fixed(128064262, 1.3, 1.68, Some("OptMass:25t"), "Shield Generator Class 1 Rating A", "Shield Generator"),
    "int_shieldgenerator_size1_class5_strong"       => ModuleRecord::fixed(128671323, 2.6, 2.52, Some("OptMass:25t"), "Prismatic Shield Generator Class 1 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size2_class1"              => ModuleRecord::fixed(128064263, 2.5, 0.9, Some("OptMass:55t"), "Shield Generator Class 2 Rating E", "Shield Generator"),
    "int_shieldgenerator_size2_class2"              => ModuleRecord::fixed(128064264, 1.0, 1.2, Some("OptMass:55t"), "Shield Generator Class 2 Rating D", "Shield Generator"),
    "int_shieldgenerator_size2_class3"              => ModuleRecord::fixed(128064265, 2.5, 1.5, Some("OptMass:55t"), "Shield Generator Class 2 Rating C", "Shield Generator"),
    "int_shieldgenerator_size2_class3_fast"         => ModuleRecord::fixed(128671332, 2.5, 1.65, Some("OptMass:55t"), "Bi-Weave Shield Generator Class 2 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size2_class4"              => ModuleRecord::fixed(128064266, 4.0, 1.8, Some("OptMass:55t"), "Shield Generator Class 2 Rating B", "Shield Generator"),
    "int_shieldgenerator_size2_class5"              => ModuleRecord::fixed(128064267, 2.5, 2.1, Some("OptMass:55t"), "Shield Generator Class 2 Rating A", "Shield Generator"),
    "int_shieldgenerator_size2_class5_strong"       => ModuleRecord::fixed(128671324, 5.0, 3.15, Some("OptMass:55t"), "Prismatic Shield Generator Class 2 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size3_class1"              => ModuleRecord::fixed(128064268, 5.0, 1.08, Some("OptMass:165t"), "Shield Generator Class 3 Rating E", "Shield Generator"),
    "int_shieldgenerator_size3_class2"              => ModuleRecord::fixed(128064269, 2.0, 1.44, Some("OptMass:165t"), "Shield Generator Class 3 Rating D", "Shield Generator"),
    "int_shieldgenerator_size3_class3"              => ModuleRecord::fixed(128064270, 5.0, 1.8, Some("OptMass:165t"), "Shield Generator Class 3 Rating C", "Shield Generator"),
    "int_shieldgenerator_size3_class3_fast"         => ModuleRecord::fixed(128671333, 5.0, 1.98, Some("OptMass:165t"), "Bi-Weave Shield Generator Class 3 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size3_class4"              => ModuleRecord::fixed(128064271, 8.0, 2.16, Some("OptMass:165t"), "Shield Generator Class 3 Rating B", "Shield Generator"),
    "int_shieldgenerator_size3_class5"              => ModuleRecord::fixed(128064272, 5.0, 2.52, Some("OptMass:165t"), "Shield Generator Class 3 Rating A", "Shield Generator"),
    "int_shieldgenerator_size3_class5_strong"       => ModuleRecord::fixed(128671325, 10.0, 3.78, Some("OptMass:165t"), "Prismatic Shield Generator Class 3 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size4_class1"              => ModuleRecord::fixed(128064273, 10.0, 1.32, Some("OptMass:285t"), "Shield Generator Class 4 Rating E", "Shield Generator"),
    "int_shieldgenerator_size4_class2"              => ModuleRecord::fixed(128064274, 4.0, 1.76, Some("OptMass:285t"), "Shield Generator Class 4 Rating D", "Shield Generator"),
    "int_shieldgenerator_size4_class3"              => ModuleRecord::fixed(128064275, 10.0, 2.2, Some("OptMass:285t"), "Shield Generator Class 4 Rating C", "Shield Generator"),
    "int_shieldgenerator_size4_class3_fast"         => ModuleRecord::fixed(128671334, 10.0, 2.42, Some("OptMass:285t"), "Bi-Weave Shield Generator Class 4 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size4_class4"              => ModuleRecord::fixed(128064276, 16.0, 2.64, Some("OptMass:285t"), "Shield Generator Class 4 Rating B", "Shield Generator"),
    "int_shieldgenerator_size4_class5"              => ModuleRecord::fixed(128064277, 10.0, 3.08, Some("OptMass:285t"), "Shield Generator Class 4 Rating A", "Shield Generator"),
    "int_shieldgenerator_size4_class5_strong"       => ModuleRecord::fixed(128671326, 20.0, 4.62, Some("OptMass:285t"), "Prismatic Shield Generator Class 4 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size5_class1"              => ModuleRecord::fixed(128064278, 20.0, 1.56, Some("OptMass:405t"), "Shield Generator Class 5 Rating E", "Shield Generator"),
    "int_shieldgenerator_size5_class2"              => ModuleRecord::fixed(128064279, 8.0, 2.08, Some("OptMass:405t"), "Shield Generator Class 5 Rating D", "Shield Generator"),
    "int_shieldgenerator_size5_class3"              => ModuleRecord::fixed(128064280, 20.0, 2.6, Some("OptMass:405t"), "Shield Generator Class 5 Rating C", "Shield Generator"),
    "int_shieldgenerator_size5_class3_fast"         => ModuleRecord::fixed(128671335, 20.0, 2.86, Some("OptMass:405t"), "Bi-Weave Shield Generator Class 5 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size5_class4"              => ModuleRecord::fixed(128064281, 32.0, 3.12, Some("OptMass:405t"), "Shield Generator Class 5 Rating B", "Shield Generator"),
    "int_shieldgenerator_size5_class5"              => ModuleRecord::fixed(128064282, 20.0, 3.64, Some("OptMass:405t"), "Shield Generator Class 5 Rating A", "Shield Generator"),
    "int_shieldgenerator_size5_class5_strong"       => ModuleRecord::fixed(128671327, 40.0, 5.46, Some("OptMass:405t"), "Prismatic Shield Generator Class 5 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size6_class1"              => ModuleRecord::fixed(128064283, 40.0, 1.86, Some("OptMass:540t"), "Shield Generator Class 6 Rating E", "Shield Generator"),
    "int_shieldgenerator_size6_class2"              => ModuleRecord::fixed(128064284, 16.0, 2.48, Some("OptMass:540t"), "Shield Generator Class 6 Rating D", "Shield Generator"),
    "int_shieldgenerator_size6_class3"              => ModuleRecord::fixed(128064285, 40.0, 3.1, Some("OptMass:540t"), "Shield Generator Class 6 Rating C", "Shield Generator"),
    "int_shieldgenerator_size6_class3_fast"         => ModuleRecord::fixed(128671336, 40.0, 3.41, Some("OptMass:540t"), "Bi-Weave Shield Generator Class 6 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size6_class4"              => ModuleRecord::fixed(128064286, 64.0, 3.72, Some("OptMass:540t"), "Shield Generator Class 6 Rating B", "Shield Generator"),
    "int_shieldgenerator_size6_class5"              => ModuleRecord::fixed(128064287, 40.0, 4.34, Some("OptMass:540t"), "Shield Generator Class 6 Rating A", "Shield Generator"),
    "int_shieldgenerator_size6_class5_strong"       => ModuleRecord::fixed(128671328, 80.0, 6.51, Some("OptMass:540t"), "Prismatic Shield Generator Class 6 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size7_class1"              => ModuleRecord::fixed(128064288, 80.0, 2.1, Some("OptMass:1060t"), "Shield Generator Class 7 Rating E", "Shield Generator"),
    "int_shieldgenerator_size7_class2"              => ModuleRecord::fixed(128064289, 32.0, 2.8, Some("OptMass:1060t"), "Shield Generator Class 7 Rating D", "Shield Generator"),
    "int_shieldgenerator_size7_class3"              => ModuleRecord::fixed(128064290, 80.0, 3.5, Some("OptMass:1060t"), "Shield Generator Class 7 Rating C", "Shield Generator"),
    "int_shieldgenerator_size7_class3_fast"         => ModuleRecord::fixed(128671337, 80.0, 3.85, Some("OptMass:1060t"), "Bi-Weave Shield Generator Class 7 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size7_class4"              => ModuleRecord::fixed(128064291, 128.0, 4.2, Some("OptMass:1060t"), "Shield Generator Class 7 Rating B", "Shield Generator"),
    "int_shieldgenerator_size7_class5"              => ModuleRecord::fixed(128064292, 80.0, 4.9, Some("OptMass:1060t"), "Shield Generator Class 7 Rating A", "Shield Generator"),
    "int_shieldgenerator_size7_class5_strong"       => ModuleRecord::fixed(128671329, 160.0, 7.35, Some("OptMass:1060t"), "Prismatic Shield Generator Class 7 Rating A", "Prismatic Shield Generator"),
    "int_shieldgenerator_size8_class1"              => ModuleRecord::fixed(128064293, 160.0, 2.4, Some("OptMass:1800t"), "Shield Generator Class 8 Rating E", "Shield Generator"),
    "int_shieldgenerator_size8_class2"              => ModuleRecord::fixed(128064294, 64.0, 3.2, Some("OptMass:1800t"), "Shield Generator Class 8 Rating D", "Shield Generator"),
    "int_shieldgenerator_size8_class3"              => ModuleRecord::fixed(128064295, 160.0, 4.0, Some("OptMass:1800t"), "Shield Generator Class 8 Rating C", "Shield Generator"),
    "int_shieldgenerator_size8_class3_fast"         => ModuleRecord::fixed(128671338, 160.0, 4.4, Some("OptMass:1800t"), "Bi-Weave Shield Generator Class 8 Rating C", "Bi-Weave Shield Generator"),
    "int_shieldgenerator_size8_class4"              => ModuleRecord::fixed(128064296, 256.0, 4.8, Some("OptMass:1800t"), "Shield Generator Class 8 Rating B", "Shield Generator"),
    "int_shieldgenerator_size8_class5"              => ModuleRecord::fixed(128064297, 160.0, 5.6, Some("OptMass:1800t"), "Shield Generator Class 8 Rating A", "Shield Generator"),
    "int_shieldgenerator_size8_class5_strong"       => ModuleRecord::fixed(128671330, 320.0, 8.4, Some("OptMass:1800t"), "Prismatic Shield Generator Class 8 Rating A", "Prismatic Shield Generator"),
    "int_supercruiseassist"                         => ModuleRecord::fixed(128932273, 0.0, 0.3, None, "Supercruise Assist", "Supercruise Assist"),
    "krait_light_armour_grade1"                     => ModuleRecord::fixed(128839282, 0.0, 0.0, None, "Krait Phantom Lightweight Armour", "Armour"),
    "krait_light_armour_grade2"                     => ModuleRecord::fixed(128839283, 26.0, 0.0, None, "Krait Phantom Reinforced Armour", "Armour"),
    "krait_light_armour_grade3"                     => ModuleRecord::fixed(128839284, 53.0, 0.0, None, "Krait Phantom Military Armour", "Armour"),
    "krait_light_armour_mirrored"                   => ModuleRecord::fixed(128839285, 53.0, 0.0, None, "Krait Phantom Mirrored Surface Composite Armour", "Armour"),
    "krait_light_armour_reactive"                   => ModuleRecord::fixed(128839286, 53.0, 0.0, None, "Krait Phantom Reactive Surface Composite Armour", "Armour"),
    "krait_mkii_armour_grade1"                      => ModuleRecord::fixed(128816568, 0.0, 0.0, None, "Krait Mk II Lightweight Armour", "Armour"),
    "krait_mkii_armour_grade2"                      => ModuleRecord::fixed(128816569, 36.0, 0.0, None, "Krait Mk II Reinforced Armour", "Armour"),
    "krait_mkii_armour_grade3"                      => ModuleRecord::fixed(128816570, 67.0, 0.0, None, "Krait Mk II Military Armour", "Armour"),
    "krait_mkii_armour_mirrored"                    => ModuleRecord::fixed(128816571, 67.0, 0.0, None, "Krait Mk II Mirrored Surface Composite Armour", "Armour"),
    "krait_mkii_armour_reactive"                    => ModuleRecord::fixed(128816572, 67.0, 0.0, None, "Krait Mk II Reactive Surface Composite Armour", "Armour"),
    "mamba_armour_grade1"                           => ModuleRecord::fixed(128915980, 0.0, 0.0, None, "Mamba Lightweight Armour", "Armour"),
    "mamba_armour_grade2"                           => ModuleRecord::fixed(128915981, 19.0, 0.0, None, "Mamba Reinforced Armour", "Armour"),
    "mamba_armour_grade3"                           => ModuleRecord::fixed(128915982, 38.0, 0.0, None, "Mamba Military Armour", "Armour"),
    "mamba_armour_mirrored"                         => ModuleRecord::fixed(128915983, 38.0, 0.0, None, "Mamba Mirrored Surface Composite Armour", "Armour"),
    "mamba_armour_reactive"                         => ModuleRecord::fixed(128915984, 38.0, 0.0, None, "Mamba Reactive Surface Composite Armour", "Armour"),
    "mandalay_armour_grade1"                        => ModuleRecord::fixed(129031239, 0.0, 0.0, None, "Mandalay Lightweight Armour", "Armour"),
    "mandalay_armour_grade2"                        => ModuleRecord::fixed(129031240, 16.0, 0.0, None, "Mandalay Reinforced Armour", "Armour"),
    "mandalay_armour_grade3"                        => ModuleRecord::fixed(129031241, 32.0, 0.0, None, "Mandalay Military Armour", "Armour"),
    "mandalay_armour_mirrored"                      => ModuleRecord::fixed(129031242, 32.0, 0.0, None, "Mandalay Mirrored Surface Composite Armour", "Armour"),
    "mandalay_armour_reactive"                      => ModuleRecord::fixed(129031243, 32.0, 0.0, None, "Mandalay Reactive Surface Composite Armour", "Armour"),
    "orca_armour_grade1"                            => ModuleRecord::fixed(128049328, 0.0, 0.0, None, "Orca Lightweight Armour", "Armour"),
    "orca_armour_grade2"                            => ModuleRecord::fixed(128049329, 21.0, 0.0, None, "Orca Reinforced Armour", "Armour"),
    "orca_armour_grade3"                            => ModuleRecord::fixed(128049330, 87.0, 0.0, None, "Orca Military Armour", "Armour"),
    "orca_armour_mirrored"                          => ModuleRecord::fixed(128049331, 87.0, 0.0, None, "Orca Mirrored Surface Composite Armour", "Armour"),
    "orca_armour_reactive"                          => ModuleRecord::fixed(128049332, 87.0, 0.0, None, "Orca Reactive Surface Composite Armour", "Armour"),
    "python_armour_grade1"                          => ModuleRecord::fixed(128049340, 0.0, 0.0, None, "Python Lightweight Armour", "Armour"),
    "python_armour_grade2"                          => ModuleRecord::fixed(128049341, 26.0, 0.0, None, "Python Reinforced Armour", "Armour"),
    "python_armour_grade3"                          => ModuleRecord::fixed(128049342, 53.0, 0.0, None, "Python Military Armour", "Armour"),
    "python_armour_mirrored"                        => ModuleRecord::fixed(128049343, 53.0, 0.0, None, "Python Mirrored Surface Composite Armour", "Armour"),
    "python_armour_reactive"                        => ModuleRecord::fixed(128049344, 53.0, 0.0, None, "Python Reactive Surface Composite Armour", "Armour"),
    "python_nx_armour_grade1"                       => ModuleRecord::fixed(129030471, 0.0, 0.0, None, "Python Mk II Lightweight Armour", "Armour"),
    "python_nx_armour_grade2"                       => ModuleRecord::fixed(129030472, 26.0, 0.0, None, "Python Mk II Reinforced Armour", "Armour"),
    "python_nx_armour_grade3"                       => ModuleRecord::fixed(129030473, 53.0, 0.0, None, "Python Mk II Military Armour", "Armour"),
    "python_nx_armour_mirrored"                     => ModuleRecord::fixed(129030474, 53.0, 0.0, None, "Python Mk II Mirrored Surface Composite Armour", "Armour"),
    "python_nx_armour_reactive"                     => ModuleRecord::fixed(129030475, 53.0, 0.0, None, "Python Mk II Reactive Surface Composite Armour", "Armour"),
    "sidewinder_armour_grade1"                      => ModuleRecord::fixed(128049250, 0.0, 0.0, None, "Sidewinder Lightweight Armour", "Armour"),
    "sidewinder_armour_grade2"                      => ModuleRecord::fixed(128049251, 4.0, 0.0, None, "Sidewinder Reinforced Armour", "Armour"),
    "sidewinder_armour_grade3"                      => ModuleRecord::fixed(128049252, 8.0, 0.0, None, "Sidewinder Military Armour", "Armour"),
    "sidewinder_armour_mirrored"                    => ModuleRecord::fixed(128049253, 8.0, 0.0, None, "Sidewinder Mirrored Surface Composite Armour", "Armour"),
    "sidewinder_armour_reactive"                    => ModuleRecord::fixed(128049254, 8.0, 0.0, None, "Sidewinder Reactive Surface Composite Armour", "Armour"),
    "type6_armour_grade1"                           => ModuleRecord::fixed(128049286, 0.0, 0.0, None, "Type-6 Transporter Lightweight Armour", "Armour"),
    "type6_armour_grade2"                           => ModuleRecord::fixed(128049287, 12.0, 0.0, None, "Type-6 Transporter Reinforced Armour", "Armour"),
    "type6_armour_grade3"                           => ModuleRecord::fixed(128049288, 23.0, 0.0, None, "Type-6 Transporter Military Armour", "Armour"),
    "type6_armour_mirrored"                         => ModuleRecord::fixed(128049289, 23.0, 0.0, None, "Type-6 Transporter Mirrored Surface Composite Armour", "Armour"),
    "type6_armour_reactive"                         => ModuleRecord::fixed(128049290, 23.0, 0.0, None, "Type-6 Transporter Reactive Surface Composite Armour", "Armour"),
    "type7_armour_grade1"                           => ModuleRecord::fixed(128049298, 0.0, 0.0, None, "Type-7 Transporter Lightweight Armour", "Armour"),
    "type7_armour_grade2"                           => ModuleRecord::fixed(128049299, 32.0, 0.0, None, "Type-7 Transporter Reinforced Armour", "Armour"),
    "type7_armour_grade3"                           => ModuleRecord::fixed(128049300, 63.0, 0.0, None, "Type-7 Transporter Military Armour", "Armour"),
    "type7_armour_mirrored"                         => ModuleRecord::fixed(128049301, 63.0, 0.0, None, "Type-7 Transporter Mirrored Surface Composite Armour", "Armour"),
    "type7_armour_reactive"                         => ModuleRecord::fixed(128049302, 63.0, 0.0, None, "Type-7 Transporter Reactive Surface Composite Armour", "Armour"),
    "type8_armour_grade1"                           => ModuleRecord::fixed(129022080, 0.0, 0.0, None, "Type-8 Transporter Lightweight Armour", "Armour"),
    "type8_armour_grade2"                           => ModuleRecord::fixed(129022081, 35.0, 0.0, None, "Type-8 Transporter Reinforced Armour", "Armour"),
    "type8_armour_grade3"                           => ModuleRecord::fixed(129022082, 70.0, 0.0, None, "Type-8 Transporter Military Armour", "Armour"),
    "type8_armour_mirrored"                         => ModuleRecord::fixed(129022083, 70.0, 0.0, None, "Type-8 Transporter Mirrored Surface Composite Armour", "Armour"),
    "type8_armour_reactive"                         => ModuleRecord::fixed(129022084, 70.0, 0.0, None, "Type-8 Transporter Reactive Surface Composite Armour", "Armour"),
    "type9_armour_grade1"                           => ModuleRecord::fixed(128049334, 0.0, 0.0, None, "Type-9 Heavy Lightweight Armour", "Armour"),
    "type9_armour_grade2"                           => ModuleRecord::fixed(128049335, 75.0, 0.0, None, "Type-9 Heavy Reinforced Armour", "Armour"),
    "type9_armour_grade3"                           => ModuleRecord::fixed(128049336, 150.0, 0.0, None, "Type-9 Heavy Military Armour", "Armour"),
    "type9_armour_mirrored"                         => ModuleRecord::fixed(128049337, 150.0, 0.0, None, "Type-9 Heavy Mirrored Surface Composite Armour", "Armour"),
    "type9_armour_reactive"                         => ModuleRecord::fixed(128049338, 150.0, 0.0, None, "Type-9 Heavy Reactive Surface Composite Armour", "Armour"),
    "type9_military_armour_grade1"                  => ModuleRecord::fixed(128785620, 0.0, 0.0, None, "Type-10 Defender Lightweight Armour", "Armour"),
    "type9_military_armour_grade2"                  => ModuleRecord::fixed(128785621, 75.0, 0.0, None, "Type-10 Defender Reinforced Armour", "Armour"),
    "type9_military_armour_grade3"                  => ModuleRecord::fixed(128785622, 150.0, 0.0, None, "Type-10 Defender Military Armour", "Armour"),
    "type9_military_armour_mirrored"                => ModuleRecord::fixed(128785623, 150.0, 0.0, None, "Type-10 Defender Mirrored Surface Composite Armour", "Armour"),
    "type9_military_armour_reactive"                => ModuleRecord::fixed(128785624, 150.0, 0.0, None, "Type-10 Defender Reactive Surface Composite Armour", "Armour"),
    "typex_2_armour_grade1"                         => ModuleRecord::fixed(128816582, 0.0, 0.0, None, "Alliance Crusader Lightweight Armour", "Armour"),
    "typex_2_armour_grade2"                         => ModuleRecord::fixed(128816583, 40.0, 0.0, None, "Alliance Crusader Reinforced Armour", "Armour"),
    "typex_2_armour_grade3"                         => ModuleRecord::fixed(128816584, 80.0, 0.0, None, "Alliance Crusader Military Armour", "Armour"),
    "typex_2_armour_mirrored"                       => ModuleRecord::fixed(128816585, 80.0, 0.0, None, "Alliance Crusader Mirrored Surface Composite Armour", "Armour"),
    "typex_2_armour_reactive"                       => ModuleRecord::fixed(128816586, 80.0, 0.0, None, "Alliance Crusader Reactive Surface Composite Armour", "Armour"),
    "typex_3_armour_grade1"                         => ModuleRecord::fixed(128816589, 0.0, 0.0, None, "Alliance Challenger Lightweight Armour", "Armour"),
    "typex_3_armour_grade2"                         => ModuleRecord::fixed(128816590, 40.0, 0.0, None, "Alliance Challenger Reinforced Armour", "Armour"),
    "typex_3_armour_grade3"                         => ModuleRecord::fixed(128816591, 80.0, 0.0, None, "Alliance Challenger Military Armour", "Armour"),
    "typex_3_armour_mirrored"                       => ModuleRecord::fixed(128816592, 80.0, 0.0, None, "Alliance Challenger Mirrored Surface Composite Armour", "Armour"),
    "typex_3_armour_reactive"                       => ModuleRecord::fixed(128816593, 80.0, 0.0, None, "Alliance Challenger Reactive Surface Composite Armour", "Armour"),
    "typex_armour_grade1"                           => ModuleRecord::fixed(128816575, 0.0, 0.0, None, "Alliance Chieftain Lightweight Armour", "Armour"),
    "typex_armour_grade2"                           => ModuleRecord::fixed(128816576, 40.0, 0.0, None, "Alliance Chieftain Reinforced Armour", "Armour"),
    "typex_armour_grade3"                           => ModuleRecord::fixed(128816577, 80.0, 0.0, None, "Alliance Chieftain Military Armour", "Armour"),
    "typex_armour_mirrored"                         => ModuleRecord::fixed(128816578, 80.0, 0.0, None, "Alliance Chieftain Mirrored Surface Composite Armour", "Armour"),
    "typex_armour_reactive"                         => ModuleRecord::fixed(128816579, 80.0, 0.0, None, "Alliance Chieftain Reactive Surface Composite Armour", "Armour"),
    "viper_armour_grade1"                           => ModuleRecord::fixed(128049274, 0.0, 0.0, None, "Viper Mk III Lightweight Armour", "Armour"),
    "viper_armour_grade2"                           => ModuleRecord::fixed(128049275, 5.0, 0.0, None, "Viper Mk III Reinforced Armour", "Armour"),
    "viper_armour_grade3"                           => ModuleRecord::fixed(128049276, 9.0, 0.0, None, "Viper Mk III Military Armour", "Armour"),
    "viper_armour_mirrored"                         => ModuleRecord::fixed(128049277, 9.0, 0.0, None, "Viper Mk III Mirrored Surface Composite Armour", "Armour"),
    "viper_armour_reactive"                         => ModuleRecord::fixed(128049278, 9.0, 0.0, None, "Viper Mk III Reactive Surface Composite Armour", "Armour"),
    "viper_mkiv_armour_grade1"                      => ModuleRecord::fixed(128672256, 0.0, 0.0, None, "Viper Mk IV Lightweight Armour", "Armour"),
    "viper_mkiv_armour_grade2"                      => ModuleRecord::fixed(128672257, 5.0, 0.0, None, "Viper Mk IV Reinforced Armour", "Armour"),
    "viper_mkiv_armour_grade3"                      => ModuleRecord::fixed(128672258, 9.0, 0.0, None, "Viper Mk IV Military Armour", "Armour"),
    "viper_mkiv_armour_mirrored"                    => ModuleRecord::fixed(128672259, 9.0, 0.0, None, "Viper Mk IV Mirrored Surface Composite Armour", "Armour"),
    "viper_mkiv_armour_reactive"                    => ModuleRecord::fixed(128672260, 9.0, 0.0, None, "Viper Mk IV Reactive Surface Composite Armour", "Armour"),
    "vulture_armour_grade1"                         => ModuleRecord::fixed(128049310, 0.0, 0.0, None, "Vulture Lightweight Armour", "Armour"),
    "vulture_armour_grade2"                         => ModuleRecord::fixed(128049311, 17.0, 0.0, None, "Vulture Reinforced Armour", "Armour"),
    "vulture_armour_grade3"                         => ModuleRecord::fixed(128049312, 35.0, 0.0, None, "Vulture Military Armour", "Armour"),
    "vulture_armour_mirrored"                       => ModuleRecord::fixed(128049313, 35.0, 0.0, None, "Vulture Mirrored Surface Composite Armour", "Armour"),
    "vulture_armour_reactive"                       => ModuleRecord::fixed(128049314, 35.0, 0.0, None, "Vulture Reactive Surface Composite Armour", "Armour"),
};
