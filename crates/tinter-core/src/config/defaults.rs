//! Default solver hyperparameters and their validation/sanitization.

use serde::{Deserialize, Serialize};

use crate::filters::{HueRotateMode, PARAM_COUNT};

/// Wide (exploratory) search stage: several independent SPSA restarts from a
/// fixed starting vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WideSearch {
    /// Maximum number of independent SPSA attempts
    pub attempts: usize,
    /// SPSA iterations per attempt
    pub iterations: usize,
    /// Stability offset `A` in the step-size schedule
    pub stability: f64,
    /// Initial perturbation magnitude `c`
    pub perturbation: f64,
    /// Per-parameter step sizes `a`
    pub step_sizes: [f64; PARAM_COUNT],
    /// Starting parameter vector
    pub initial: [f64; PARAM_COUNT],
    /// Stop restarting once an attempt reaches this loss or lower
    pub accept_loss: f64,
    /// Run every attempt concurrently and keep the best
    pub parallel: bool,
}

impl Default for WideSearch {
    fn default() -> Self {
        Self {
            attempts: 3,
            iterations: 1000,
            stability: 5.0,
            perturbation: 15.0,
            step_sizes: [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2],
            initial: [50.0, 20.0, 3750.0, 50.0, 100.0, 100.0],
            accept_loss: 25.0,
            parallel: false,
        }
    }
}

/// Narrow (refinement) search stage seeded from the wide result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowSearch {
    pub iterations: usize,
    pub perturbation: f64,
    /// Step sizes are these multipliers times `wide_loss + 1`
    pub step_scale: [f64; PARAM_COUNT],
}

impl Default for NarrowSearch {
    fn default() -> Self {
        Self {
            iterations: 500,
            perturbation: 2.0,
            step_scale: [0.25, 0.25, 1.0, 0.25, 0.2, 0.2],
        }
    }
}

/// Complete solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SolverDefaults {
    pub wide: WideSearch,
    pub narrow: NarrowSearch,
    pub hue_rotate: HueRotateMode,
    /// Fixed seed for reproducible output; entropy when unset
    pub seed: Option<u64>,
}

impl SolverDefaults {
    pub(crate) fn sanitize(&mut self) {
        let wide_defaults = WideSearch::default();
        let narrow_defaults = NarrowSearch::default();

        self.wide.attempts = self.wide.attempts.clamp(1, 64);
        if self.wide.iterations == 0 {
            self.wide.iterations = wide_defaults.iterations;
        }
        if !self.wide.stability.is_finite() || self.wide.stability < 0.0 {
            self.wide.stability = wide_defaults.stability;
        }
        if !self.wide.perturbation.is_finite() || self.wide.perturbation <= 0.0 {
            self.wide.perturbation = wide_defaults.perturbation;
        }
        sanitize_vector(&mut self.wide.step_sizes, &wide_defaults.step_sizes);
        sanitize_vector(&mut self.wide.initial, &wide_defaults.initial);
        if !self.wide.accept_loss.is_finite() || self.wide.accept_loss < 0.0 {
            self.wide.accept_loss = wide_defaults.accept_loss;
        }

        if self.narrow.iterations == 0 {
            self.narrow.iterations = narrow_defaults.iterations;
        }
        if !self.narrow.perturbation.is_finite() || self.narrow.perturbation <= 0.0 {
            self.narrow.perturbation = narrow_defaults.perturbation;
        }
        sanitize_vector(&mut self.narrow.step_scale, &narrow_defaults.step_scale);
    }
}

/// Replace negative or non-finite components with their defaults.
fn sanitize_vector(values: &mut [f64; PARAM_COUNT], defaults: &[f64; PARAM_COUNT]) {
    for (v, d) in values.iter_mut().zip(defaults) {
        if !v.is_finite() || *v < 0.0 {
            *v = *d;
        }
    }
}
