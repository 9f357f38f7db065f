//! Behaviour across the whole catalog, through the public API only

use itemdata::*;

#[test]
fn test_every_static_module_resolves_without_synthesis() {
    for category in all_module_types(false) {
        for (id, record) in modules_of_type(category) {
            assert_eq!(try_ship_module(id), Some(record));
            assert_eq!(&ship_module(&id.to_ascii_uppercase()), record);
        }
    }
}

#[test]
fn test_module_ids_are_unique() {
    let mut seen = std::collections::HashMap::new();
    for category in all_module_types(false) {
        for (key, record) in modules_of_type(category) {
            if record.id == -1 {
                continue;
            }
            if let Some(other) = seen.insert(record.id, key) {
                panic!("{} and {} share id {}", other, key, record.id);
            }
        }
    }
}

#[test]
fn test_module_lookup_never_fails() {
    let widget = ship_module("nonexistent_widget_42");
    assert_eq!(widget.id, -1);
    assert_eq!(widget.mass, 0.0);
    assert_eq!(widget.category, UNKNOWN_MODULE);
    assert_eq!(widget.name, "Nonexistent Widget 42");

    for odd in ["", "   ", "___", "ÄÖÜ_module", "hpt_\u{1F680}"] {
        let record = ship_module(odd);
        assert_eq!(record.id, -1);
        assert_eq!(ship_module(odd), record);
    }
}

#[test]
fn test_synthesis_is_stable() {
    let first = ship_module("catalog_test_widget_size3");
    let spellings = [
        "catalog_test_widget_size3",
        "CATALOG_TEST_WIDGET_SIZE3",
        "Catalog_Test_Widget_Size3",
    ];
    for spelling in spellings {
        assert_eq!(ship_module(spelling), first);
    }
    assert_eq!(first.name, "Catalog Test Widget Size 3");
    assert_eq!(first.category, UNKNOWN_MODULE);
}

#[test]
fn test_concurrent_first_queries_converge() {
    let ids: Vec<String> = (0..8).map(|i| format!("catalog_test_concurrent_{}", i)).collect();

    let shared = &ids;
    let results: Vec<Vec<ModuleRecord>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(move |_| {
                scope.spawn(move || shared.iter().map(|id| ship_module(id)).collect::<Vec<_>>())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for per_thread in &results[1..] {
        assert_eq!(per_thread, &results[0]);
    }
    for id in &ids {
        assert!(try_ship_module(id).is_none());
    }
    assert!(synthesized_count() >= ids.len());
}

#[test]
fn test_vanity_synthesis() {
    for id in ["paintjob_catalog_test_01", "bobble_catalog_test", "nameplate_catalog_test"] {
        assert!(is_vanity(id));
        let record = ship_module(id);
        assert_eq!(record.category, VANITY_ITEM);
        assert!(!record.is_buyable());
    }
}

#[test]
fn test_classify_hulls_and_auxiliaries() {
    for (id, _) in all_ships() {
        assert_eq!(classify(id), ItemKind::Ship, "{}", id);
        assert!(is_ship_srv_or_fighter(id));
    }
    assert_eq!(classify("testbuggy"), ItemKind::Srv);
    assert_eq!(classify("combat_multicrew_srv_01"), ItemKind::Srv);
    assert_eq!(classify("gdn_hybrid_fighter_v2"), ItemKind::Fighter);
    assert_eq!(classify("independent_fighter"), ItemKind::Fighter);
    assert!(ship_properties("gdn_hybrid_fighter_v2").is_some());
}

#[test]
fn test_ship_display_names_round_trip() {
    for (id, set) in all_ships() {
        let name = ship_display_name(id);
        assert_eq!(set.display_name(), Some(name.as_str()));
        assert_eq!(ship_by_display_name(&name), Some(id), "{}", name);
    }
}

#[test]
fn test_suit_and_weapon_ids_classify_as_suit_or_not() {
    for id in all_suits() {
        assert_eq!(classify(id), ItemKind::Suit);
    }
    for id in all_weapons() {
        assert!(!is_suit(id));
        assert!(weapon(id, None).is_some());
    }
}

#[test]
fn test_json_shapes() {
    let module = serde_json::to_value(ship_module("int_planetapproachsuite")).unwrap();
    assert_eq!(module["name"], "Planetary Approach Suite");

    let ship = serde_json::to_value(ship_properties("anaconda")).unwrap();
    assert_eq!(ship["manufacturer"], "Faulcon DeLacy");

    let missing = serde_json::to_value(ship_properties("no_such_ship")).unwrap();
    assert!(missing.is_null());

    let weapon = serde_json::to_value(weapon("wpn_m_sniper_plasma_charged", None)).unwrap();
    assert_eq!(weapon["fire_mode"], "charged");
    assert_eq!(weapon["stats"].as_array().map(Vec::len), Some(5));

    assert_eq!(serde_json::to_value(classify("flightsuit")).unwrap(), "suit");
}

#[test]
fn test_predicate_examples() {
    assert!(is_vanity("decal_foo"));
    assert!(!is_vanity("hpt_beamlaser_fixed_small"));
    assert!(is_srv("TestBuggy"));
    assert!(!is_srv("federation_fighter"));
    assert!(is_fighter("federation_fighter"));
    assert!(!is_fighter("federation_dropship"));
    assert!(is_ship("federation_dropship"));
}

#[test]
fn test_karma_ar50_grades() {
    let ar50 = weapon("wpn_m_assaultrifle_kinetic_fauto", None).unwrap();
    assert_eq!(
        ar50.grade(1),
        Some(&WeaponStats {
            dps: 0.9,
            rate_of_fire: 10.0,
            clip_size: 40,
            hopper_size: 240,
            range: 50.0,
        })
    );
    for n in 2..=5 {
        assert_eq!(ar50.grade(n), Some(&WeaponStats::default()));
    }
}

#[test]
fn test_late_module_families_are_static() {
    for id in [
        "hpt_atmulticannon_fixed_medium",
        "hpt_atdumbfiremissile_turret_large",
        "hpt_causticsinklauncher_turret_tiny",
        "int_multidronecontrol_universal_size7_class5",
        "hpt_railgun_fixed_medium_burst",
        "int_hyperdrive_overcharge_size5_class5",
        "hpt_pulselaser_gimbal_huge",
    ] {
        let record = try_ship_module(id).unwrap_or_else(|| panic!("{} is not in the table", id));
        assert_ne!(record.id, -1, "{}", id);
        assert!(record.mass > 0.0, "{}", id);
        assert_ne!(record.category, UNKNOWN_MODULE, "{}", id);
        assert_eq!(&ship_module(&id.to_ascii_uppercase()), record);
    }
}
