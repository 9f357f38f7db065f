//! Hull tables
//!
//! [`SHIPYARD`] mirrors the shipyard data feed. [`AUXILIARY`] covers the
//! ship-launched fighters and surface vehicles the feed leaves out; those
//! cannot be bought on their own so they carry no hull cost.

use phf::phf_map;

use super::ShipPropertySet;

/// Player hulls keyed by lowercase journal id
#[rustfmt::skip]
pub(super) static SHIPYARD: phf::Map<&'static str, ShipPropertySet> = phf_map! {
    "adder"                    => ShipPropertySet::hull("Adder", 35.0, "Adder", "Zorgon Peterson", 220, 320, 18710, 1),
    "anaconda"                 => ShipPropertySet::hull("Anaconda", 400.0, "Anaconda", "Faulcon DeLacy", 180, 240, 146969450, 3),
    "asp"                      => ShipPropertySet::hull("Asp", 280.0, "Asp Explorer", "Lakon", 250, 340, 6135660, 2),
    "asp_scout"                => ShipPropertySet::hull("Asp_Scout", 150.0, "Asp Scout", "Lakon", 220, 300, 3818240, 2),
    "belugaliner"              => ShipPropertySet::hull("BelugaLiner", 950.0, "Beluga Liner", "Saud Kruger", 200, 280, 84532770, 3),
    "cobramkiii"               => ShipPropertySet::hull("CobraMkIII", 180.0, "Cobra Mk III", "Faulcon DeLacy", 280, 400, 205800, 1),
    "cobramkiv"                => ShipPropertySet::hull("CobraMkIV", 210.0, "Cobra Mk IV", "Faulcon DeLacy", 200, 300, 603740, 1),
    "cutter"                   => ShipPropertySet::hull("Cutter", 1100.0, "Imperial Cutter", "Gutamaya", 200, 320, 208969450, 3),
    "diamondback"              => ShipPropertySet::hull("DiamondBack", 170.0, "Diamondback Scout", "Lakon", 280, 380, 441800, 1),
    "diamondbackxl"            => ShipPropertySet::hull("DiamondBackXL", 260.0, "Diamondback Explorer", "Lakon", 260, 340, 1616160, 1),
    "dolphin"                  => ShipPropertySet::hull("Dolphin", 140.0, "Dolphin", "Saud Kruger", 250, 350, 1115330, 1),
    "eagle"                    => ShipPropertySet::hull("Eagle", 50.0, "Eagle", "Core Dynamics", 240, 350, 7490, 1),
    "empire_courier"           => ShipPropertySet::hull("Empire_Courier", 35.0, "Imperial Courier", "Gutamaya", 280, 380, 2462010, 1),
    "empire_eagle"             => ShipPropertySet::hull("Empire_Eagle", 50.0, "Imperial Eagle", "Gutamaya", 300, 400, 50890, 1),
    "empire_trader"            => ShipPropertySet::hull("Empire_Trader", 400.0, "Imperial Clipper", "Gutamaya", 300, 380, 22296860, 3),
    "federation_corvette"      => ShipPropertySet::hull("Federation_Corvette", 900.0, "Federal Corvette", "Core Dynamics", 200, 260, 187969450, 3),
    "federation_dropship"      => ShipPropertySet::hull("Federation_Dropship", 580.0, "Federal Dropship", "Core Dynamics", 180, 300, 14314210, 2),
    "federation_dropship_mkii" => ShipPropertySet::hull("Federation_Dropship_MkII", 480.0, "Federal Assault Ship", "Core Dynamics", 210, 350, 19072000, 2),
    "federation_gunship"       => ShipPropertySet::hull("Federation_Gunship", 580.0, "Federal Gunship", "Core Dynamics", 170, 280, 34774790, 2),
    "ferdelance"               => ShipPropertySet::hull("FerDeLance", 250.0, "Fer-de-Lance", "Zorgon Peterson", 260, 350, 51703780, 2),
    "hauler"                   => ShipPropertySet::hull("Hauler", 14.0, "Hauler", "Zorgon Peterson", 200, 300, 8160, 1),
    "independant_trader"       => ShipPropertySet::hull("Independant_Trader", 180.0, "Keelback", "Lakon", 200, 300, 2943870, 2),
    "krait_light"              => ShipPropertySet::hull("Krait_Light", 270.0, "Krait Phantom", "Faulcon DeLacy", 250, 350, 37472250, 2),
    "krait_mkii"               => ShipPropertySet::hull("Krait_MkII", 320.0, "Krait Mk II", "Faulcon DeLacy", 240, 330, 45814205, 2),
    "mamba"                    => ShipPropertySet::hull("Mamba", 250.0, "Mamba", "Zorgon Peterson", 310, 380, 55867040, 2),
    "mandalay"                 => ShipPropertySet::hull("Mandalay", 230.0, "Mandalay", "Zorgon Peterson", 280, 370, 17472252, 2),
    "orca"                     => ShipPropertySet::hull("Orca", 290.0, "Orca", "Saud Kruger", 300, 380, 48539890, 3),
    "python"                   => ShipPropertySet::hull("Python", 350.0, "Python", "Faulcon DeLacy", 230, 300, 56978180, 2),
    "python_nx"                => ShipPropertySet::hull("Python_NX", 450.0, "Python Mk II", "Faulcon DeLacy", 256, 345, 66161981, 2),
    "sidewinder"               => ShipPropertySet::hull("SideWinder", 25.0, "Sidewinder", "Faulcon DeLacy", 220, 320, 4070, 1),
    "type6"                    => ShipPropertySet::hull("Type6", 155.0, "Type-6 Transporter", "Lakon", 220, 350, 865790, 2),
    "type7"                    => ShipPropertySet::hull("Type7", 350.0, "Type-7 Transporter", "Lakon", 180, 300, 16780510, 3),
    "type8"                    => ShipPropertySet::hull("Type8", 400.0, "Type-8 Transporter", "Lakon", 190, 310, 38486215, 3),
    "type9"                    => ShipPropertySet::hull("Type9", 850.0, "Type-9 Heavy", "Lakon", 130, 200, 76555840, 3),
    "type9_military"           => ShipPropertySet::hull("Type9_Military", 1200.0, "Type-10 Defender", "Lakon", 179, 219, 124755500, 3),
    "typex"                    => ShipPropertySet::hull("TypeX", 400.0, "Alliance Chieftain", "Lakon", 230, 330, 18182880, 2),
    "typex_2"                  => ShipPropertySet::hull("TypeX_2", 500.0, "Alliance Crusader", "Lakon", 180, 300, 22466670, 2),
    "typex_3"                  => ShipPropertySet::hull("TypeX_3", 450.0, "Alliance Challenger", "Lakon", 200, 310, 29561170, 2),
    "viper"                    => ShipPropertySet::hull("Viper", 50.0, "Viper Mk III", "Faulcon DeLacy", 320, 400, 95900, 1),
    "viper_mkiv"               => ShipPropertySet::hull("Viper_MkIV", 190.0, "Viper Mk IV", "Faulcon DeLacy", 270, 340, 310220, 1),
    "vulture"                  => ShipPropertySet::hull("Vulture", 230.0, "Vulture", "Core Dynamics", 210, 340, 4689640, 1),
};

/// Fighters and SRVs
#[rustfmt::skip]
pub(super) static AUXILIARY: phf::Map<&'static str, ShipPropertySet> = phf_map! {
    "combat_multicrew_srv_01" => ShipPropertySet::auxiliary("Combat_Multicrew_SRV_01", 0.0, "Scorpion SRV", "Vodel", 32, 32, 1),
    "empire_fighter"          => ShipPropertySet::auxiliary("Empire_Fighter", 0.0, "GU-97 Fighter", "Gutamaya", 360, 540, 1),
    "federation_fighter"      => ShipPropertySet::auxiliary("Federation_Fighter", 0.0, "F63 Condor Fighter", "Core Dynamics", 316, 536, 1),
    "gdn_hybrid_fighter_v1"   => ShipPropertySet::auxiliary("GDN_Hybrid_Fighter_V1", 0.0, "Trident Fighter", "Guardian", 316, 536, 1),
    "gdn_hybrid_fighter_v2"   => ShipPropertySet::auxiliary("GDN_Hybrid_Fighter_V2", 0.0, "Javelin Fighter", "Guardian", 316, 536, 1),
    "gdn_hybrid_fighter_v3"   => ShipPropertySet::auxiliary("GDN_Hybrid_Fighter_V3", 0.0, "Lance Fighter", "Guardian", 316, 536, 1),
    "independent_fighter"     => ShipPropertySet::auxiliary("Independent_Fighter", 0.0, "Taipan Fighter", "Faulcon DeLacy", 316, 536, 1),
    "testbuggy"               => ShipPropertySet::auxiliary("TestBuggy", 0.0, "Scarab SRV", "Vodel", 38, 38, 1),
};
