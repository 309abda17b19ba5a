//! HSL (Hue-Saturation-Lightness) view of an RGB color

/// HSL color representation on a uniform percentage scale
/// - H (hue): 0.0-100.0 (100 = one full turn of 360 degrees)
/// - S (saturation): 0.0-100.0
/// - L (lightness): 0.0-100.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Sum of absolute component differences
    pub fn manhattan(&self, other: &Hsl) -> f64 {
        (self.h - other.h).abs() + (self.s - other.s).abs() + (self.l - other.l).abs()
    }
}

/// Convert RGB to HSL
///
/// Input: RGB channels in range 0.0-255.0
/// Output: HSL with every component scaled to 0.0-100.0
#[inline]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let r = r.clamp(0.0, 255.0) / 255.0;
    let g = g.clamp(0.0, 255.0) / 255.0;
    let b = b.clamp(0.0, 255.0) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Lightness
    let l = (max + min) / 2.0;

    // Achromatic case
    if delta == 0.0 {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    // Saturation
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Hue in sextants, then normalized to a single turn
    let sextant = if max == r {
        let mut h = (g - b) / delta;
        if g < b {
            h += 6.0;
        }
        h
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let h = sextant / 6.0;

    Hsl {
        h: h * 100.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}
