//! Color model
//!
//! Provides the RGB color used as both solver target and filter simulation
//! state, its HSL view, and hex string parsing.

mod hex;
mod hsl;
mod rgb;

#[cfg(test)]
mod tests;

// Re-export primary types
pub use hsl::{rgb_to_hsl, Hsl};
pub use rgb::Color;

// Re-export hex helpers
pub use hex::{is_white_hex, normalize_hex, parse_hex, try_parse_hex};
