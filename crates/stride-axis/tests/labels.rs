// File: crates/stride-axis/tests/labels.rs
// Purpose: Validate label formatting, decimal selection, and kind lookup.

use stride_axis::{compute, format_fixed, label_decimals, ValueKind};

#[test]
fn decimals_follow_the_step() {
    assert_eq!(label_decimals(2.0, ValueKind::Other), 0);
    assert_eq!(label_decimals(2.5, ValueKind::Other), 0);
    assert_eq!(label_decimals(1.0, ValueKind::Other), 0);
    assert_eq!(label_decimals(0.5, ValueKind::Other), 1);
    assert_eq!(label_decimals(0.2, ValueKind::Other), 1);
    assert_eq!(label_decimals(0.05, ValueKind::Other), 2);
    assert_eq!(label_decimals(0.002, ValueKind::Other), 3);
}

#[test]
fn weight_always_keeps_one_decimal() {
    assert_eq!(label_decimals(2.0, ValueKind::Weight), 1);
    assert_eq!(label_decimals(1.0, ValueKind::Weight), 1);
    // Finer steps already carry more precision than the floor
    assert_eq!(label_decimals(0.05, ValueKind::Weight), 2);
}

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(format_fixed(2.5, 0), "3");
    assert_eq!(format_fixed(-2.5, 0), "-3");
    assert_eq!(format_fixed(0.125, 2), "0.13");
    assert_eq!(format_fixed(-0.125, 2), "-0.13");
    assert_eq!(format_fixed(1.25, 1), "1.3");
    assert_eq!(format_fixed(-1.25, 1), "-1.3");
}

#[test]
fn fixed_width_output() {
    assert_eq!(format_fixed(7.0, 0), "7");
    assert_eq!(format_fixed(7.0, 2), "7.00");
    assert_eq!(format_fixed(80.6, 1), "80.6");
    assert_eq!(format_fixed(-3.0, 1), "-3.0");
}

#[test]
fn kind_lookup_is_case_insensitive() {
    assert_eq!(ValueKind::from_tag("weight"), ValueKind::Weight);
    assert_eq!(ValueKind::from_tag("Weight"), ValueKind::Weight);
    assert_eq!(ValueKind::from_tag("WEIGHT"), ValueKind::Weight);
    assert_eq!(ValueKind::from_tag("bodyfat"), ValueKind::Other);
    assert_eq!(ValueKind::from_tag("steps"), ValueKind::Other);
    assert_eq!(ValueKind::from_tag(""), ValueKind::Other);
}

#[test]
fn kind_decimal_floors() {
    assert_eq!(ValueKind::Weight.min_decimals(), 1);
    assert_eq!(ValueKind::Other.min_decimals(), 0);
}

#[test]
fn labels_match_tick_values() {
    let spec = compute(&[42.0, 58.0], ValueKind::Other).unwrap();
    let ticks = spec.tick_values();

    assert_eq!(ticks.len(), spec.ticks.len());
    for (label, value) in spec.ticks.iter().zip(&ticks) {
        let parsed: f64 = label.parse().unwrap();
        assert!(
            (parsed - value).abs() < 1e-9,
            "label {label} drifted from tick value {value}"
        );
    }
    assert_eq!(spec.ticks, vec!["40", "45", "50", "55", "60"]);
}

#[test]
fn band_crossing_zero_stays_clean() {
    let spec = compute(&[-1.0, 1.0], ValueKind::Other).unwrap();

    // The crossing tick formats as a plain zero, no stray sign
    assert_eq!(spec.ticks, vec!["-2", "-1", "0", "1", "2"]);
}

#[test]
fn contains_covers_both_endpoints() {
    let spec = compute(&[42.0, 58.0], ValueKind::Other).unwrap();

    assert!(spec.contains(spec.y_min));
    assert!(spec.contains(spec.y_max));
    assert!(!spec.contains(spec.y_min - 0.1));
    assert!(!spec.contains(spec.y_max + 0.1));
}
