//! Parsing functions for CLI arguments.

use tinter_core::color::try_parse_hex;
use tinter_core::{Color, HueRotateMode};

/// Parse hue-rotate mode from string
///
/// Supported values:
/// - "sequential" / "seq": rows read the already rotated red channel
/// - "matrix" / "w3c": every row reads the original channels
pub fn parse_hue_rotate_mode(mode_str: Option<&str>) -> Result<Option<HueRotateMode>, String> {
    match mode_str {
        None => Ok(None), // Use default from config
        Some(s) => match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Some(HueRotateMode::Sequential)),
            "matrix" | "w3c" | "standard" => Ok(Some(HueRotateMode::Matrix)),
            _ => Err(format!(
                "Unknown hue-rotate mode: '{}'. Valid options: sequential (default), matrix",
                s
            )),
        },
    }
}

/// Parse a base color given as hex (`#rgb` / `#rrggbb`) or `R,G,B`.
pub fn parse_base_color(input: &str) -> Result<Color, String> {
    if input.contains(',') {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!("Base color must be R,G,B, got '{}'", input));
        }
        let mut rgb = [0u8; 3];
        for (slot, part) in rgb.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u8>()
                .map_err(|_| format!("Invalid channel value '{}' (expected 0-255)", part))?;
        }
        return Ok(Color::from_rgb8(rgb));
    }

    try_parse_hex(input)
        .map(Color::from_rgb8)
        .ok_or_else(|| format!("Invalid base color: '{}'", input))
}
