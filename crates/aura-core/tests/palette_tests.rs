use std::collections::HashSet;

use aura_core::{AuraRng, Condition, Rgb};

#[test]
fn test_known_tags_round_trip() {
    for condition in Condition::ALL {
        assert_eq!(
            Condition::from_tag(condition.tag()),
            condition,
            "tag {:?} should resolve back to itself",
            condition.tag()
        );
    }
}

#[test]
fn test_unknown_tags_fall_back_to_default() {
    for tag in ["unknown-tag", "", "rain", "CLEAR", "Smoke", "Tornado"] {
        assert_eq!(Condition::from_tag(tag), Condition::Default, "tag {tag:?}");
    }
}

#[test]
fn test_palette_table_contents() {
    let hex = |c: Condition| -> Vec<String> { c.palette().iter().map(Rgb::to_string).collect() };

    assert_eq!(hex(Condition::Default), ["#ffffff", "#888888"]);
    assert_eq!(hex(Condition::Clear), ["#ffd700", "#ffa500", "#00bfff"]);
    assert_eq!(hex(Condition::Clouds), ["#b0c4de", "#778899", "#f0f8ff"]);
    assert_eq!(hex(Condition::Rain), ["#00008b", "#4b0082", "#00bfff"]);
    assert_eq!(hex(Condition::Snow), ["#ffffff", "#f0ffff", "#e0ffff"]);
    assert_eq!(hex(Condition::Thunderstorm), ["#4b0082", "#800080", "#ffd700"]);
    assert_eq!(hex(Condition::Drizzle), ["#add8e6", "#87ceeb"]);
    assert_eq!(hex(Condition::Mist), ["#d3d3d3", "#c0c0c0"]);
}

#[test]
fn test_palette_is_static() {
    // Same slice every call, not rebuilt per lookup.
    let a = Condition::Rain.palette();
    let b = Condition::Rain.palette();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_pick_color_covers_whole_palette() {
    let mut rng = AuraRng::from_seed_u64(99);
    for condition in Condition::ALL {
        let seen: HashSet<Rgb> = (0..500).map(|_| condition.pick_color(&mut rng.0)).collect();
        let expected: HashSet<Rgb> = condition.palette().iter().copied().collect();
        assert_eq!(seen, expected, "{condition} draws should hit every candidate");
    }
}

#[test]
fn test_display_uses_tag() {
    assert_eq!(Condition::Default.to_string(), "default");
    assert_eq!(Condition::Thunderstorm.to_string(), "Thunderstorm");
}
