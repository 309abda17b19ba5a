//! CSS filter parameters
//!
//! The solver searches over a 6-component parameter vector. This module owns
//! that vector, its per-component range policy, the conversion into filter
//! magnitudes, and the CSS `filter` string form.

mod css;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

pub use css::{format_filter_css, parse_filter_css};

/// Value returned when no filter should be applied.
pub const NO_FILTER: &str = "none";

/// How the hue-rotate matrix rows are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HueRotateMode {
    /// Red row first; green and blue rows then read the rotated red value
    /// alongside the original green and blue.
    #[default]
    Sequential,

    /// Every row reads the original channels (W3C filter-effects matrix).
    Matrix,
}

/// Optional filter magnitudes in application units.
///
/// `invert`, `sepia`, `saturate`, `brightness` and `contrast` are
/// multipliers (1.0 = 100%), `hue_rotate` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    pub invert: Option<f64>,
    pub sepia: Option<f64>,
    pub saturate: Option<f64>,
    pub hue_rotate: Option<f64>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.invert.is_none()
            && self.sepia.is_none()
            && self.saturate.is_none()
            && self.hue_rotate.is_none()
            && self.brightness.is_none()
            && self.contrast.is_none()
    }
}

/// Number of searched filter parameters.
pub const PARAM_COUNT: usize = 6;

pub const INVERT: usize = 0;
pub const SEPIA: usize = 1;
pub const SATURATE: usize = 2;
pub const HUE_ROTATE: usize = 3;
pub const BRIGHTNESS: usize = 4;
pub const CONTRAST: usize = 5;

/// Hue-rotate is encoded on 0-100; this converts to degrees.
pub const HUE_SCALE: f64 = 3.6;

/// Upper bound of parameter `idx`.
#[inline]
pub fn param_max(idx: usize) -> f64 {
    match idx {
        SATURATE => 7500.0,
        BRIGHTNESS | CONTRAST => 200.0,
        _ => 100.0,
    }
}

/// Bring a parameter back into its valid range.
///
/// Hue-rotate wraps modulo its maximum into `[0, max)`; every other index is
/// clamped to `[0, max]`.
#[inline]
pub fn fix(value: f64, idx: usize) -> f64 {
    let max = param_max(idx);
    if value.is_nan() {
        return 0.0;
    }

    if idx == HUE_ROTATE {
        let wrapped = value.rem_euclid(max);
        // rem_euclid can round up to `max` for tiny negative inputs
        if wrapped >= max {
            0.0
        } else {
            wrapped
        }
    } else {
        value.clamp(0.0, max)
    }
}

/// The searched 6-component filter vector, in index order
/// invert, sepia, saturate, hue-rotate, brightness, contrast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParams(pub [f64; PARAM_COUNT]);

impl FilterParams {
    pub fn new(values: [f64; PARAM_COUNT]) -> Self {
        Self(values)
    }

    /// Copy with every component passed through [`fix`].
    #[must_use]
    pub fn fixed(&self) -> Self {
        let mut out = self.0;
        for (i, v) in out.iter_mut().enumerate() {
            *v = fix(*v, i);
        }
        Self(out)
    }

    #[inline]
    pub fn values(&self) -> &[f64; PARAM_COUNT] {
        &self.0
    }

    /// Filter magnitudes: percentages become multipliers, the hue index
    /// becomes degrees.
    pub fn to_filter_set(&self) -> FilterSet {
        let v = &self.0;
        FilterSet {
            invert: Some(v[INVERT] / 100.0),
            sepia: Some(v[SEPIA] / 100.0),
            saturate: Some(v[SATURATE] / 100.0),
            hue_rotate: Some(v[HUE_ROTATE] * HUE_SCALE),
            brightness: Some(v[BRIGHTNESS] / 100.0),
            contrast: Some(v[CONTRAST] / 100.0),
        }
    }

    /// CSS `filter` value for these parameters.
    pub fn css(&self) -> String {
        format_filter_css(self)
    }
}

impl From<[f64; PARAM_COUNT]> for FilterParams {
    fn from(values: [f64; PARAM_COUNT]) -> Self {
        Self(values)
    }
}
