//! Simultaneous Perturbation Stochastic Approximation

use rand::Rng;

use super::{Solver, SpsaResult};
use crate::filters::{fix, FilterParams, PARAM_COUNT};

/// Step-size decay exponent: `a_k = a / (A + k + 1)^ALPHA`
pub const ALPHA: f64 = 1.0;
/// Perturbation decay exponent: `c_k = c / (k + 1)^GAMMA`
pub const GAMMA: f64 = 1.0 / 6.0;

/// Hyperparameters for one SPSA run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpsaParams {
    /// Stability offset `A`
    pub stability: f64,
    /// Per-parameter step sizes `a`
    pub step_sizes: [f64; PARAM_COUNT],
    /// Initial perturbation magnitude `c`
    pub perturbation: f64,
    pub iterations: usize,
}

impl Solver {
    /// Run SPSA from `initial`, returning the lowest-loss vector seen over all
    /// iterations (not necessarily the last one).
    ///
    /// Each iteration perturbs every parameter at once with independent ±1
    /// signs and estimates the gradient from the two resulting losses.
    pub fn spsa<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        params: &SpsaParams,
        initial: FilterParams,
    ) -> SpsaResult {
        let mut values = initial.0;
        let mut best = SpsaResult {
            values: initial,
            loss: f64::INFINITY,
        };

        let mut deltas = [0.0f64; PARAM_COUNT];
        let mut high = [0.0f64; PARAM_COUNT];
        let mut low = [0.0f64; PARAM_COUNT];

        for k in 0..params.iterations {
            let ck = params.perturbation / ((k + 1) as f64).powf(GAMMA);
            for i in 0..PARAM_COUNT {
                deltas[i] = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                high[i] = values[i] + ck * deltas[i];
                low[i] = values[i] - ck * deltas[i];
            }

            let loss_diff = self.loss(&FilterParams(high)) - self.loss(&FilterParams(low));
            for i in 0..PARAM_COUNT {
                let g = loss_diff / (2.0 * ck * deltas[i]);
                let ak = params.step_sizes[i] / (params.stability + (k + 1) as f64).powf(ALPHA);
                values[i] = fix(values[i] - ak * g, i);
            }

            let loss = self.loss(&FilterParams(values));
            if loss < best.loss {
                best = SpsaResult {
                    values: FilterParams(values),
                    loss,
                };
            }
        }

        // Zero iterations: report the starting point's own loss
        if !best.loss.is_finite() {
            best.loss = self.loss(&best.values);
        }
        best
    }
}
