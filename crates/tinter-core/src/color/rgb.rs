//! RGB color model and CSS filter primitive simulation

use std::fmt;

use super::hsl::{rgb_to_hsl, Hsl};
use crate::filters::{FilterSet, HueRotateMode};

/// Clamp a channel into 0.0-255.0. NaN collapses to 0.0.
#[inline]
fn clamp_channel(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 255.0)
}

/// RGB color with channels held in 0.0-255.0.
///
/// Channels are kept as floats so the solver sees a continuous loss surface;
/// [`Color::to_rgb8`] gives the rounded 8-bit view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255.0,
        g: 255.0,
        b: 255.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64)
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    #[inline]
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    #[inline]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
        ]
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// HSL view with every component on a 0-100 scale.
    #[must_use]
    #[inline]
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space.
    #[must_use]
    pub fn loss(&self, target: &Color) -> f64 {
        let dr = self.r - target.r;
        let dg = self.g - target.g;
        let db = self.b - target.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Apply the filters present in `filters` in CSS order:
    /// invert, sepia, saturate, hue-rotate, brightness, contrast.
    #[must_use]
    pub fn apply_filters(&self, filters: &FilterSet, hue_mode: HueRotateMode) -> Color {
        let mut color = *self;
        if let Some(t) = filters.invert {
            color = color.invert(t);
        }
        if let Some(t) = filters.sepia {
            color = color.sepia(t);
        }
        if let Some(t) = filters.saturate {
            color = color.saturate(t);
        }
        if let Some(degrees) = filters.hue_rotate {
            color = color.hue_rotate(degrees, hue_mode);
        }
        if let Some(t) = filters.brightness {
            color = color.brightness(t);
        }
        if let Some(t) = filters.contrast {
            color = color.contrast(t);
        }
        color
    }

    /// Blend each channel toward its complement; `t = 1` is a full inversion.
    #[must_use]
    pub fn invert(&self, t: f64) -> Color {
        let inv = |c: f64| c + t * (255.0 - 2.0 * c);
        Color::new(inv(self.r), inv(self.g), inv(self.b))
    }

    #[must_use]
    pub fn sepia(&self, t: f64) -> Color {
        let (r, g, b) = (self.r, self.g, self.b);
        let tr = 0.393 * r + 0.769 * g + 0.189 * b;
        let tg = 0.349 * r + 0.686 * g + 0.168 * b;
        let tb = 0.272 * r + 0.534 * g + 0.131 * b;
        Color::new(
            t * tr + (1.0 - t) * r,
            t * tg + (1.0 - t) * g,
            t * tb + (1.0 - t) * b,
        )
    }

    #[must_use]
    pub fn saturate(&self, t: f64) -> Color {
        let gray = 0.2989 * self.r + 0.5870 * self.g + 0.1140 * self.b;
        let sat = |c: f64| gray + (c - gray) * t;
        Color::new(sat(self.r), sat(self.g), sat(self.b))
    }

    /// Rotate hue by `degrees` using the W3C filter-effects matrix.
    ///
    /// In [`HueRotateMode::Sequential`] the green and blue rows read the red
    /// channel after it has already been rotated.
    #[must_use]
    pub fn hue_rotate(&self, degrees: f64, mode: HueRotateMode) -> Color {
        let angle = degrees.to_radians();
        let (sin, cos) = angle.sin_cos();
        let m = [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ];

        let (tr, tg, tb) = (self.r, self.g, self.b);
        let r = tr * m[0] + tg * m[1] + tb * m[2];
        let red_source = match mode {
            HueRotateMode::Sequential => r,
            HueRotateMode::Matrix => tr,
        };
        let g = red_source * m[3] + tg * m[4] + tb * m[5];
        let b = red_source * m[6] + tg * m[7] + tb * m[8];
        Color::new(r, g, b)
    }

    #[must_use]
    pub fn brightness(&self, t: f64) -> Color {
        Color::new(self.r * t, self.g * t, self.b * t)
    }

    #[must_use]
    pub fn contrast(&self, t: f64) -> Color {
        let con = |c: f64| (c - 127.5) * t + 127.5;
        Color::new(con(self.r), con(self.g), con(self.b))
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::from_rgb8(rgb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "{} rgb({}, {}, {})", self.to_hex(), r, g, b)
    }
}
