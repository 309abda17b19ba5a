//! Tests for the color model

use super::*;
use crate::filters::{FilterSet, HueRotateMode};

fn assert_channels(color: Color, expected: [f64; 3], tol: f64) {
    let actual = color.channels();
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "channel {} mismatch: {} vs expected {} (color {:?})",
            i,
            a,
            e,
            color
        );
    }
}

fn assert_in_gamut(color: Color) {
    for c in color.channels() {
        assert!(c.is_finite(), "non-finite channel in {:?}", color);
        assert!((0.0..=255.0).contains(&c), "channel out of range in {:?}", color);
    }
}

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_new_clamps_channels() {
    let color = Color::new(-10.0, 300.0, 128.4);
    assert_channels(color, [0.0, 255.0, 128.4], 1e-12);
}

#[test]
fn test_nan_channel_becomes_zero() {
    let color = Color::new(f64::NAN, 10.0, f64::INFINITY);
    assert_channels(color, [0.0, 10.0, 255.0], 1e-12);
}

#[test]
fn test_rgb8_and_hex() {
    let color = Color::new(255.0, 128.4, 0.0);
    assert_eq!(color.to_rgb8(), [255, 128, 0]);
    assert_eq!(color.to_hex(), "#ff8000");
    assert_eq!(Color::from_rgb8([0, 255, 255]).to_hex(), "#00ffff");
}

#[test]
fn test_euclidean_loss() {
    let a = Color::new(0.0, 0.0, 0.0);
    let b = Color::new(3.0, 4.0, 0.0);
    assert!((a.loss(&b) - 5.0).abs() < 1e-12);
    assert_eq!(a.loss(&a), 0.0);
}

// ========================================================================
// HSL
// ========================================================================

#[test]
fn test_hsl_primaries() {
    let cases = [
        ([255, 0, 0], (0.0, 100.0, 50.0)),         // Red
        ([0, 255, 0], (100.0 / 3.0, 100.0, 50.0)), // Green
        ([0, 0, 255], (200.0 / 3.0, 100.0, 50.0)), // Blue
        ([255, 255, 255], (0.0, 0.0, 100.0)),      // White
        ([0, 0, 0], (0.0, 0.0, 0.0)),              // Black
    ];

    for (rgb, (h, s, l)) in cases {
        let hsl = Color::from_rgb8(rgb).hsl();
        assert!((hsl.h - h).abs() < 1e-6, "hue mismatch for {:?}: {}", rgb, hsl.h);
        assert!((hsl.s - s).abs() < 1e-6, "sat mismatch for {:?}: {}", rgb, hsl.s);
        assert!((hsl.l - l).abs() < 1e-6, "light mismatch for {:?}: {}", rgb, hsl.l);
    }
}

#[test]
fn test_hsl_hue_wraps_for_magenta() {
    // Red is the max channel and green < blue, so the sextant wraps to 5/6
    let hsl = Color::from_rgb8([255, 0, 255]).hsl();
    assert!((hsl.h - 500.0 / 6.0).abs() < 1e-6, "got {}", hsl.h);
}

#[test]
fn test_hsl_dark_and_light_saturation_branches() {
    // l < 0.5 uses delta / (max + min)
    let dark = rgb_to_hsl(100.0, 50.0, 50.0);
    assert!((dark.s - 50.0 / 150.0 * 100.0).abs() < 1e-6, "got {}", dark.s);

    // l > 0.5 uses delta / (2 - max - min)
    let light = rgb_to_hsl(255.0, 200.0, 200.0);
    let (max, min) = (1.0, 200.0 / 255.0);
    let expected = (max - min) / (2.0 - max - min) * 100.0;
    assert!((light.s - expected).abs() < 1e-6, "got {}", light.s);
}

// ========================================================================
// Filter primitives
// ========================================================================

#[test]
fn test_invert() {
    assert_channels(Color::WHITE.invert(0.0), [255.0; 3], 1e-12);
    assert_channels(Color::WHITE.invert(0.7), [76.5; 3], 1e-9);
    assert_channels(Color::BLACK.invert(0.5), [127.5; 3], 1e-12);
    assert_channels(
        Color::new(10.0, 20.0, 30.0).invert(1.0),
        [245.0, 235.0, 225.0],
        1e-12,
    );
}

#[test]
fn test_sepia_on_white() {
    let color = Color::WHITE.sepia(1.0);
    assert_channels(color, [255.0, 255.0, 0.937 * 255.0], 1e-9);

    let half = Color::WHITE.sepia(0.5);
    assert_channels(half, [255.0, 255.0, 0.5 * 0.937 * 255.0 + 127.5], 1e-9);
}

#[test]
fn test_saturate_zero_is_grayscale() {
    let color = Color::from_rgb8([255, 0, 0]).saturate(0.0);
    let gray = 0.2989 * 255.0;
    assert_channels(color, [gray, gray, gray], 1e-9);
}

#[test]
fn test_saturate_one_is_identity() {
    let original = Color::new(12.0, 200.0, 99.0);
    assert_channels(original.saturate(1.0), original.channels(), 1e-9);
}

#[test]
fn test_hue_rotate_zero_is_identity_in_both_modes() {
    let original = Color::new(200.0, 40.0, 90.0);
    for mode in [HueRotateMode::Sequential, HueRotateMode::Matrix] {
        assert_channels(original.hue_rotate(0.0, mode), original.channels(), 1e-9);
    }
}

#[test]
fn test_hue_rotate_preserves_gray() {
    // Every matrix row sums to 1 at any angle
    let gray = Color::new(128.0, 128.0, 128.0);
    for mode in [HueRotateMode::Sequential, HueRotateMode::Matrix] {
        for degrees in [37.0, 90.0, 180.0, 299.0] {
            assert_channels(gray.hue_rotate(degrees, mode), [128.0; 3], 1e-6);
        }
    }
}

#[test]
fn test_hue_rotate_modes_differ() {
    let red = Color::from_rgb8([255, 0, 0]);

    // Matrix: the green and blue rows see the original red
    let matrix = red.hue_rotate(180.0, HueRotateMode::Matrix);
    assert_channels(matrix, [0.0, 0.426 * 255.0, 0.426 * 255.0], 1e-6);

    // Sequential: the green and blue rows see the rotated (negative) red
    let sequential = red.hue_rotate(180.0, HueRotateMode::Sequential);
    assert_channels(sequential, [0.0, 0.0, 0.0], 1e-6);
}

#[test]
fn test_brightness_and_contrast() {
    let color = Color::new(100.0, 50.0, 200.0);
    assert_channels(color.brightness(0.5), [50.0, 25.0, 100.0], 1e-12);
    assert_channels(color.brightness(10.0), [255.0, 255.0, 255.0], 1e-12);
    assert_channels(color.contrast(0.0), [127.5; 3], 1e-12);
    assert_channels(color.contrast(2.0), [72.5, 0.0, 255.0], 1e-12);
}

#[test]
fn test_apply_filters_matches_primitive_chain() {
    let filters = FilterSet {
        invert: Some(0.2),
        sepia: Some(0.8),
        saturate: Some(3.0),
        hue_rotate: Some(90.0),
        brightness: Some(0.9),
        contrast: Some(1.1),
    };

    for mode in [HueRotateMode::Sequential, HueRotateMode::Matrix] {
        let chained = Color::WHITE
            .invert(0.2)
            .sepia(0.8)
            .saturate(3.0)
            .hue_rotate(90.0, mode)
            .brightness(0.9)
            .contrast(1.1);
        assert_eq!(Color::WHITE.apply_filters(&filters, mode), chained);
    }
}

#[test]
fn test_apply_empty_filter_set_is_identity() {
    let color = Color::new(10.0, 20.0, 30.0);
    assert_eq!(
        color.apply_filters(&FilterSet::default(), HueRotateMode::default()),
        color
    );
}

#[test]
fn test_extreme_filters_stay_in_gamut() {
    let extremes = [
        FilterSet {
            brightness: Some(1000.0),
            ..FilterSet::default()
        },
        FilterSet {
            invert: Some(1e9),
            sepia: Some(-50.0),
            saturate: Some(75.0),
            hue_rotate: Some(1e6),
            brightness: Some(1000.0),
            contrast: Some(1000.0),
        },
        FilterSet {
            saturate: Some(f64::MAX),
            contrast: Some(-1e12),
            ..FilterSet::default()
        },
    ];

    let bases = [
        Color::WHITE,
        Color::BLACK,
        Color::new(12.0, 200.0, 99.0),
    ];
    for filters in &extremes {
        for base in bases {
            for mode in [HueRotateMode::Sequential, HueRotateMode::Matrix] {
                assert_in_gamut(base.apply_filters(filters, mode));
            }
        }
    }
}

// ========================================================================
// Hex parsing
// ========================================================================

#[test]
fn test_parse_hex_forms() {
    assert_eq!(parse_hex("#00ffff"), [0, 255, 255]);
    assert_eq!(parse_hex("FF0080"), [255, 0, 128]);
    assert_eq!(parse_hex("00F"), [0, 0, 255]);
    assert_eq!(parse_hex("#abc"), [0xaa, 0xbb, 0xcc]);
}

#[test]
fn test_parse_hex_invalid_is_black() {
    for input in ["", "#", "zzzzzz", "#12345", "#1234567", "12 345", "#ggg"] {
        assert_eq!(parse_hex(input), [0, 0, 0], "input {:?}", input);
        assert_eq!(try_parse_hex(input), None, "input {:?}", input);
    }
}

#[test]
fn test_normalize_and_white_detection() {
    assert_eq!(normalize_hex("  #AbC "), "abc");
    assert!(is_white_hex("#FFF"));
    assert!(is_white_hex("ffffff"));
    assert!(!is_white_hex("#fffffe"));
    assert!(!is_white_hex("#ffff"));
}
