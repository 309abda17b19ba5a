//! Tests for filter parameters and CSS formatting/parsing

use super::*;

fn approx(a: Option<f64>, b: f64) -> bool {
    a.map_or(false, |a| (a - b).abs() < 1e-9)
}

// ========================================================================
// fix()
// ========================================================================

#[test]
fn test_fix_clamps_non_hue_params() {
    assert_eq!(fix(-5.0, INVERT), 0.0);
    assert_eq!(fix(150.0, INVERT), 100.0);
    assert_eq!(fix(101.0, SEPIA), 100.0);
    assert_eq!(fix(8000.0, SATURATE), 7500.0);
    assert_eq!(fix(250.0, BRIGHTNESS), 200.0);
    assert_eq!(fix(-1.0, CONTRAST), 0.0);
    assert_eq!(fix(42.5, CONTRAST), 42.5);
}

#[test]
fn test_fix_wraps_hue() {
    assert!((fix(150.0, HUE_ROTATE) - 50.0).abs() < 1e-9);
    assert!((fix(-30.0, HUE_ROTATE) - 70.0).abs() < 1e-9);
    assert!((fix(-250.0, HUE_ROTATE) - 50.0).abs() < 1e-9);
    assert_eq!(fix(100.0, HUE_ROTATE), 0.0);
    assert_eq!(fix(-1e-18, HUE_ROTATE), 0.0);
    assert_eq!(fix(37.0, HUE_ROTATE), 37.0);
}

#[test]
fn test_fix_nan_is_zero() {
    for idx in 0..PARAM_COUNT {
        assert_eq!(fix(f64::NAN, idx), 0.0);
    }
}

#[test]
fn test_fixed_params_within_bounds() {
    let params = FilterParams([-1.0, 500.0, 1e6, -0.5, 1e3, -1e3]).fixed();
    for (idx, v) in params.values().iter().enumerate() {
        assert!(*v >= 0.0 && *v <= param_max(idx), "index {} out of range: {}", idx, v);
    }
    assert!(params.values()[HUE_ROTATE] < 100.0);
}

// ========================================================================
// Conversion and formatting
// ========================================================================

#[test]
fn test_to_filter_set_units() {
    let set = FilterParams([10.0, 20.0, 300.0, 25.0, 90.0, 110.0]).to_filter_set();
    assert!(approx(set.invert, 0.1));
    assert!(approx(set.sepia, 0.2));
    assert!(approx(set.saturate, 3.0));
    assert!(approx(set.hue_rotate, 90.0));
    assert!(approx(set.brightness, 0.9));
    assert!(approx(set.contrast, 1.1));
}

#[test]
fn test_css_format() {
    let params = FilterParams([50.4, 20.6, 3750.0, 50.0, 100.0, 99.5]);
    assert_eq!(
        params.css(),
        "invert(50%) sepia(21%) saturate(3750%) hue-rotate(180deg) brightness(100%) contrast(100%)"
    );
}

#[test]
fn test_css_hue_never_reaches_360() {
    let params = FilterParams([0.0, 0.0, 100.0, 99.9, 100.0, 100.0]);
    assert!(params.css().contains("hue-rotate(0deg)"), "got {}", params.css());
}

// ========================================================================
// Parsing
// ========================================================================

#[test]
fn test_parse_units() {
    let set = parse_filter_css("invert(50%) sepia(0.2) hue-rotate(0.5turn) brightness(120%)")
        .expect("valid filter");
    assert!(approx(set.invert, 0.5));
    assert!(approx(set.sepia, 0.2));
    assert!(approx(set.hue_rotate, 180.0));
    assert!(approx(set.brightness, 1.2));
    assert_eq!(set.saturate, None);
    assert_eq!(set.contrast, None);

    let rad = parse_filter_css("hue-rotate(3.141592653589793rad)").expect("valid filter");
    assert!(approx(rad.hue_rotate, 180.0));

    let bare = parse_filter_css("hue-rotate(45)").expect("valid filter");
    assert!(approx(bare.hue_rotate, 45.0));
}

#[test]
fn test_parse_none_is_empty() {
    assert!(parse_filter_css("none").expect("none parses").is_empty());
    assert!(parse_filter_css("  ").expect("blank parses").is_empty());
}

#[test]
fn test_parse_rejects_malformed() {
    let bad = [
        "blur(2px)",
        "invert(50%) invert(10%)",
        "invert(50%",
        "invert 50%",
        "invert(-1)",
        "invert(abc%)",
        "hue-rotate(90grad)",
        "contrast(inf)",
    ];
    for css in bad {
        assert!(parse_filter_css(css).is_err(), "expected error for {:?}", css);
    }
}

#[test]
fn test_format_then_parse_matches_rounded_values() {
    let params = FilterParams([12.3, 45.6, 789.0, 33.3, 95.2, 104.9]);
    let set = parse_filter_css(&params.css()).expect("formatted filter parses");

    assert!(approx(set.invert, 0.12));
    assert!(approx(set.sepia, 0.46));
    assert!(approx(set.saturate, 7.89));
    assert!(approx(set.hue_rotate, 120.0));
    assert!(approx(set.brightness, 0.95));
    assert!(approx(set.contrast, 1.05));
}
