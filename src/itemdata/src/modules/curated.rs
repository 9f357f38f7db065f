//! Hand-curated modules the outfitting feed does not carry
//!
//! Cockpits, cargo bay doors, fighter and SRV loadout parts, scanners that
//! ship fitted as standard, and a handful of cosmetic rows.

use phf::phf_map;

use super::ModuleRecord;

/// Modules missing from [`super::outfitting::OUTFITTING`]
#[rustfmt::skip]
pub(super) static CURATED: phf::Map<&'static str, ModuleRecord> = phf_map! {
    "adder_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Adder Cockpit", "Cockpit"),
    "anaconda_cockpit"                             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Anaconda Cockpit", "Cockpit"),
    "asp_cockpit"                                  => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Asp Explorer Cockpit", "Cockpit"),
    "asp_scout_cockpit"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Asp Scout Cockpit", "Cockpit"),
    "belugaliner_cockpit"                          => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Beluga Liner Cockpit", "Cockpit"),
    "bobble_ship_adder"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Bobble Ship Adder", "Vanity Item"),
    "buggycargobaydoor"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Cargo Bay Door", "Cargo Bay Door"),
    "cobramkiii_cockpit"                           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Cobra Mk III Cockpit", "Cockpit"),
    "cobramkiv_cockpit"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Cobra Mk IV Cockpit", "Cockpit"),
    "cutter_cockpit"                               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Imperial Cutter Cockpit", "Cockpit"),
    "decal_combat_elite"                           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Decal Combat Elite", "Vanity Item"),
    "decal_explorer_elite01"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Decal Explorer Elite 01", "Vanity Item"),
    "decal_trade_elite"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Decal Trade Elite", "Vanity Item"),
    "diamondback_cockpit"                          => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Diamondback Scout Cockpit", "Cockpit"),
    "diamondbackxl_cockpit"                        => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Diamondback Explorer Cockpit", "Cockpit"),
    "dolphin_cockpit"                              => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Dolphin Cockpit", "Cockpit"),
    "eagle_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Eagle Cockpit", "Cockpit"),
    "empire_courier_cockpit"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Imperial Courier Cockpit", "Cockpit"),
    "empire_eagle_cockpit"                         => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Imperial Eagle Cockpit", "Cockpit"),
    "empire_fighter_armour_standard"               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "GU-97 Armour", "Fighter Module"),
    "empire_fighter_cockpit"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "GU-97 Cockpit", "Cockpit"),
    "empire_trader_cockpit"                        => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Imperial Clipper Cockpit", "Cockpit"),
    "enginecustomisation_blue"                     => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Engine Customisation Blue", "Vanity Item"),
    "federation_corvette_cockpit"                  => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Federal Corvette Cockpit", "Cockpit"),
    "federation_dropship_cockpit"                  => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Federal Dropship Cockpit", "Cockpit"),
    "federation_dropship_mkii_cockpit"             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Federal Assault Ship Cockpit", "Cockpit"),
    "federation_fighter_armour_standard"           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "F63 Condor Armour", "Fighter Module"),
    "federation_fighter_cockpit"                   => ModuleRecord::fixed(-1, 0.0, 0.0, None, "F63 Condor Cockpit", "Cockpit"),
    "federation_gunship_cockpit"                   => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Federal Gunship Cockpit", "Cockpit"),
    "ferdelance_cockpit"                           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Fer-de-Lance Cockpit", "Cockpit"),
    "gdn_hybrid_fighter_v1_armour_standard"        => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Trident Armour", "Fighter Module"),
    "gdn_hybrid_fighter_v1_cockpit"                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Trident Cockpit", "Cockpit"),
    "gdn_hybrid_fighter_v2_armour_standard"        => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Javelin Armour", "Fighter Module"),
    "gdn_hybrid_fighter_v2_cockpit"                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Javelin Cockpit", "Cockpit"),
    "gdn_hybrid_fighter_v3_armour_standard"        => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Lance Armour", "Fighter Module"),
    "gdn_hybrid_fighter_v3_cockpit"                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Lance Cockpit", "Cockpit"),
    "hauler_cockpit"                               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Hauler Cockpit", "Cockpit"),
    "hpt_atmulticannon_fixed_indie_fighter"        => ModuleRecord::fixed(-1, 0.0, 1.0, None, "AX Multi Cannon Fixed Indie Fighter", "Fighter Module"),
    "hpt_beamlaser_fixed_empire_fighter"           => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Beam Laser Fixed Empire Fighter", "Fighter Module"),
    "hpt_beamlaser_fixed_fed_fighter"              => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Beam Laser Fixed Federation Fighter", "Fighter Module"),
    "hpt_beamlaser_fixed_indie_fighter"            => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Beam Laser Fixed Indie Fighter", "Fighter Module"),
    "hpt_beamlaser_gimbal_empire_fighter"          => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Beam Laser Gimbal Empire Fighter", "Fighter Module"),
    "hpt_beamlaser_gimbal_fed_fighter"             => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Beam Laser Gimbal Federation Fighter", "Fighter Module"),
    "hpt_beamlaser_gimbal_indie_fighter"           => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Beam Laser Gimbal Indie Fighter", "Fighter Module"),
    "hpt_buggymissilerack_turret"                  => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Missile Rack", "SRV Module"),
    "hpt_buggymulticannon_turret"                  => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Multi Cannon", "SRV Module"),
    "hpt_buggyplasmarepeater_turret"               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Plasma Repeater", "SRV Module"),
    "hpt_buggypulselaser_turret"                   => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Pulse Laser", "SRV Module"),
    "hpt_datalinkscanner"                          => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Data Link Scanner", "SRV Module"),
    "hpt_guardiangauss_fixed_gdn_fighter"          => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Guardian Gauss Fixed GDN Fighter", "Fighter Module"),
    "hpt_guardianplasma_fixed_gdn_fighter"         => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Guardian Plasma Fixed GDN Fighter", "Fighter Module"),
    "hpt_guardianshard_fixed_gdn_fighter"          => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Guardian Shard Fixed GDN Fighter", "Fighter Module"),
    "hpt_multicannon_fixed_empire_fighter"         => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Multi Cannon Fixed Empire Fighter", "Fighter Module"),
    "hpt_multicannon_fixed_fed_fighter"            => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Multi Cannon Fixed Federation Fighter", "Fighter Module"),
    "hpt_multicannon_fixed_indie_fighter"          => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Multi Cannon Fixed Indie Fighter", "Fighter Module"),
    "hpt_plasmarepeater_fixed_empire_fighter"      => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Plasma Repeater Fixed Empire Fighter", "Fighter Module"),
    "hpt_plasmarepeater_fixed_fed_fighter"         => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Plasma Repeater Fixed Federation Fighter", "Fighter Module"),
    "hpt_plasmarepeater_fixed_indie_fighter"       => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Plasma Repeater Fixed Indie Fighter", "Fighter Module"),
    "hpt_pulselaser_fixed_empire_fighter"          => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Pulse Laser Fixed Empire Fighter", "Fighter Module"),
    "hpt_pulselaser_fixed_fed_fighter"             => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Pulse Laser Fixed Federation Fighter", "Fighter Module"),
    "hpt_pulselaser_fixed_indie_fighter"           => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Pulse Laser Fixed Indie Fighter", "Fighter Module"),
    "hpt_pulselaser_gimbal_empire_fighter"         => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Pulse Laser Gimbal Empire Fighter", "Fighter Module"),
    "hpt_pulselaser_gimbal_fed_fighter"            => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Pulse Laser Gimbal Federation Fighter", "Fighter Module"),
    "hpt_pulselaser_gimbal_indie_fighter"          => ModuleRecord::fixed(-1, 0.0, 1.0, None, "Pulse Laser Gimbal Indie Fighter", "Fighter Module"),
    "hpt_shipdatalinkscanner"                      => ModuleRecord::fixed(999999940, 0.0, 0.0, None, "Data Link Scanner", "Data Link Scanner"),
    "independant_trader_cockpit"                   => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Keelback Cockpit", "Cockpit"),
    "independent_fighter_armour_standard"          => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Taipan Armour", "Fighter Module"),
    "independent_fighter_cockpit"                  => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Taipan Cockpit", "Cockpit"),
    "int_cargorack_size0_class1"                   => ModuleRecord::fixed(-1, 0.0, 0.0, Some("Size:2t"), "SRV Cargo Rack", "SRV Module"),
    "int_codexscanner"                             => ModuleRecord::fixed(128913661, 0.0, 0.0, None, "Codex Scanner", "Codex"),
    "int_dockingcomputer_standard_fdl"             => ModuleRecord::fixed(-1, 0.0, 0.39, None, "Standard Docking Computer", "Docking Computer"),
    "int_engine_buggy"                             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Engine", "SRV Module"),
    "int_engine_fighter_class1"                    => ModuleRecord::fixed(-1, 1.0, 1.0, None, "Fighter Engine Class 1", "Fighter Module"),
    "int_fueltank_size0_class3"                    => ModuleRecord::fixed(-1, 0.0, 0.0, Some("Size:0.45t"), "SRV Fuel Tank", "SRV Module"),
    "int_lifesupport_buggy"                        => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Life Support", "SRV Module"),
    "int_planetapproachsuite"                      => ModuleRecord::fixed(128672317, 0.0, 0.0, None, "Planetary Approach Suite", "Planetary Approach Suite"),
    "int_planetapproachsuite_advanced"             => ModuleRecord::fixed(128975719, 0.0, 0.0, None, "Advanced Planetary Approach Suite", "Planetary Approach Suite"),
    "int_powerdistributor_size0_class1"            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Power Distributor", "SRV Module"),
    "int_powerplant_buggy"                         => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Power Plant", "SRV Module"),
    "int_powerplant_fighter"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Fighter Power Plant", "Fighter Module"),
    "int_sensors_surface_size1_class1"             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Surface Scanner", "SRV Module"),
    "int_shieldgenerator_fighter_class1"           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Fighter Shield Generator", "Fighter Module"),
    "int_shieldgenerator_size0_class3"             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Shield", "SRV Module"),
    "int_sinewavescanner_size1_class1"             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "SRV Wave Scanner", "SRV Module"),
    "int_stellarbodydiscoveryscanner_advanced"     => ModuleRecord::fixed(128663561, 2.0, 0.0, Some("Range:Unlimited"), "Advanced Discovery Scanner", "Discovery Scanner"),
    "int_stellarbodydiscoveryscanner_intermediate" => ModuleRecord::fixed(128663560, 2.0, 0.0, Some("Range:1000ls"), "Intermediate Discovery Scanner", "Discovery Scanner"),
    "int_stellarbodydiscoveryscanner_standard"     => ModuleRecord::fixed(128662535, 2.0, 0.0, Some("Range:500ls"), "Basic Discovery Scanner", "Discovery Scanner"),
    "int_wear_and_tear"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Wear and Tear", "Wear and Tear"),
    "krait_light_cockpit"                          => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Krait Phantom Cockpit", "Cockpit"),
    "krait_mkii_cockpit"                           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Krait Mk II Cockpit", "Cockpit"),
    "mamba_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Mamba Cockpit", "Cockpit"),
    "mandalay_cockpit"                             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Mandalay Cockpit", "Cockpit"),
    "modularcargobaydoor"                          => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Cargo Bay Door", "Cargo Bay Door"),
    "modularcargobaydoorfdl"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Fer-de-Lance Cargo Bay Door", "Cargo Bay Door"),
    "nameplate_explorer01_white"                   => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Nameplate Explorer 01 White", "Vanity Item"),
    "nameplate_shipname_white"                     => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Nameplate Ship Name White", "Vanity Item"),
    "orca_cockpit"                                 => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Orca Cockpit", "Cockpit"),
    "paintjob_cobramkiii_default_52"               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Paint Job Cobra Mk III Default 52", "Vanity Item"),
    "python_cockpit"                               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Python Cockpit", "Cockpit"),
    "python_nx_cockpit"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Python Mk II Cockpit", "Cockpit"),
    "sidewinder_cockpit"                           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Sidewinder Cockpit", "Cockpit"),
    "string_lights_coloured"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "String Lights Coloured", "Vanity Item"),
    "type6_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Type-6 Transporter Cockpit", "Cockpit"),
    "type7_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Type-7 Transporter Cockpit", "Cockpit"),
    "type8_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Type-8 Transporter Cockpit", "Cockpit"),
    "type9_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Type-9 Heavy Cockpit", "Cockpit"),
    "type9_military_cockpit"                       => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Type-10 Defender Cockpit", "Cockpit"),
    "typex_2_cockpit"                              => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Alliance Crusader Cockpit", "Cockpit"),
    "typex_3_cockpit"                              => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Alliance Challenger Cockpit", "Cockpit"),
    "typex_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Alliance Chieftain Cockpit", "Cockpit"),
    "viper_cockpit"                                => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Viper Mk III Cockpit", "Cockpit"),
    "viper_mkiv_cockpit"                           => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Viper Mk IV Cockpit", "Cockpit"),
    "voicepack_celeste"                            => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Voice Pack Celeste", "Vanity Item"),
    "voicepack_eden"                               => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Voice Pack Eden", "Vanity Item"),
    "voicepack_verity"                             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Voice Pack Verity", "Vanity Item"),
    "voicepack_victor"                             => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Voice Pack Victor", "Vanity Item"),
    "vulture_cockpit"                              => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Vulture Cockpit", "Cockpit"),
    "weaponcustomisation_red"                      => ModuleRecord::fixed(-1, 0.0, 0.0, None, "Weapon Customisation Red", "Vanity Item"),
};
