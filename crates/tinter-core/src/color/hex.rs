//! Hex color string handling

/// Normalize a hex color string: surrounding whitespace and one leading `#`
/// are removed and the digits are lowercased.
pub fn normalize_hex(hex: &str) -> String {
    let s = hex.trim();
    s.strip_prefix('#').unwrap_or(s).to_ascii_lowercase()
}

/// Whether the string names pure white in 6-digit or 3-digit form.
pub fn is_white_hex(hex: &str) -> bool {
    matches!(normalize_hex(hex).as_str(), "ffffff" | "fff")
}

/// Parse a hex color into RGB channels.
///
/// Accepts an optional leading `#` and the 3-digit shorthand (each nibble is
/// doubled). Anything that is not exactly six hex digits after expansion
/// parses as black.
pub fn parse_hex(hex: &str) -> [u8; 3] {
    try_parse_hex(hex).unwrap_or([0, 0, 0])
}

/// Strict variant of [`parse_hex`] returning `None` for malformed input.
pub fn try_parse_hex(hex: &str) -> Option<[u8; 3]> {
    let s = normalize_hex(hex);
    let expanded: String = if s.len() == 3 {
        s.chars().flat_map(|c| [c, c]).collect()
    } else {
        s
    };

    if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some([r, g, b])
}
