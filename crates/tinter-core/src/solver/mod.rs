//! Color-to-filter solver
//!
//! Searches the six CSS filter parameters for values that turn white into a
//! target color. The search is SPSA (Simultaneous Perturbation Stochastic
//! Approximation) run in two stages: a wide stage of random restarts from a
//! fixed starting vector, then a narrow refinement of the best wide result.

mod search;
mod spsa;


use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsl};
use crate::config::SolverDefaults;
use crate::filters::FilterParams;

pub use spsa::{SpsaParams, ALPHA, GAMMA};

/// Best vector found by one SPSA run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpsaResult {
    pub values: FilterParams,
    pub loss: f64,
}

/// Final solver output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub loss: f64,
    /// CSS `filter` value
    pub filter: String,
    pub values: FilterParams,
}

/// Solver for a single target color.
#[derive(Debug, Clone)]
pub struct Solver {
    target: Color,
    target_hsl: Hsl,
    settings: SolverDefaults,
}

impl Solver {
    /// Solver with the built-in hyperparameters.
    pub fn new(target: Color) -> Self {
        Self::with_settings(target, SolverDefaults::default())
    }

    pub fn with_settings(target: Color, settings: SolverDefaults) -> Self {
        Self {
            target,
            target_hsl: target.hsl(),
            settings,
        }
    }

    pub fn target(&self) -> Color {
        self.target
    }

    pub fn settings(&self) -> &SolverDefaults {
        &self.settings
    }

    /// Color produced by applying `values` to white.
    pub fn simulate(&self, values: &FilterParams) -> Color {
        Color::WHITE.apply_filters(&values.to_filter_set(), self.settings.hue_rotate)
    }

    /// Objective: sum of absolute RGB and HSL differences between the
    /// filtered white and the target.
    pub fn loss(&self, values: &FilterParams) -> f64 {
        let color = self.simulate(values);
        let hsl = color.hsl();

        (color.r() - self.target.r()).abs()
            + (color.g() - self.target.g()).abs()
            + (color.b() - self.target.b()).abs()
            + (hsl.h - self.target_hsl.h).abs()
            + (hsl.s - self.target_hsl.s).abs()
            + (hsl.l - self.target_hsl.l).abs()
    }

    /// Wide search followed by narrow refinement.
    pub fn solve<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> SolveResult {
        let wide = self.solve_wide(&mut *rng);
        let narrow = self.solve_narrow(&mut *rng, &wide);
        crate::verbose_println!(
            "[tinter] {} solved: wide loss {:.3}, narrow loss {:.3}",
            self.target.to_hex(),
            wide.loss,
            narrow.loss
        );

        SolveResult {
            loss: narrow.loss,
            filter: narrow.values.css(),
            values: narrow.values,
        }
    }
}
