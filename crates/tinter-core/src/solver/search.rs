//! Wide and narrow search stages

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::{Solver, SpsaParams, SpsaResult};
use crate::filters::{FilterParams, PARAM_COUNT};
use crate::verbose_println;

impl Solver {
    fn wide_params(&self) -> SpsaParams {
        let wide = &self.settings.wide;
        SpsaParams {
            stability: wide.stability,
            step_sizes: wide.step_sizes,
            perturbation: wide.perturbation,
            iterations: wide.iterations,
        }
    }

    /// Independent SPSA restarts from the configured starting vector.
    ///
    /// Sequentially, restarting stops once an attempt reaches the accept
    /// loss. In parallel mode every attempt runs, each on its own generator
    /// seeded from `rng`, and the best is kept.
    pub fn solve_wide<R: Rng + ?Sized>(&self, rng: &mut R) -> SpsaResult {
        let wide = &self.settings.wide;
        let params = self.wide_params();
        let initial = FilterParams(wide.initial).fixed();
        let attempts = wide.attempts.max(1);

        let mut best: Option<SpsaResult> = None;

        if wide.parallel {
            let seeds: Vec<u64> = (0..attempts).map(|_| rng.gen::<u64>()).collect();
            let results: Vec<SpsaResult> = seeds
                .par_iter()
                .map(|&seed| {
                    let mut attempt_rng = StdRng::seed_from_u64(seed);
                    self.spsa(&mut attempt_rng, &params, initial)
                })
                .collect();

            for (attempt, result) in results.into_iter().enumerate() {
                verbose_println!(
                    "[tinter] wide attempt {} loss {:.3}",
                    attempt + 1,
                    result.loss
                );
                if best.map_or(true, |b| result.loss < b.loss) {
                    best = Some(result);
                }
            }
        } else {
            for attempt in 0..attempts {
                let result = self.spsa(&mut *rng, &params, initial);
                verbose_println!(
                    "[tinter] wide attempt {} loss {:.3}",
                    attempt + 1,
                    result.loss
                );
                if best.map_or(true, |b| result.loss < b.loss) {
                    best = Some(result);
                }
                if best.map_or(false, |b| b.loss <= wide.accept_loss) {
                    break;
                }
            }
        }

        best.unwrap_or(SpsaResult {
            values: initial,
            loss: self.loss(&initial),
        })
    }

    /// Step sizes and stability offset for the narrow stage: `A` is the wide
    /// loss and each step size scales with `A + 1`.
    pub fn narrow_params(&self, wide: &SpsaResult) -> SpsaParams {
        let narrow = &self.settings.narrow;
        let stability = wide.loss;
        let scale = stability + 1.0;
        let mut step_sizes = [0.0; PARAM_COUNT];
        for (a, m) in step_sizes.iter_mut().zip(narrow.step_scale) {
            *a = m * scale;
        }

        SpsaParams {
            stability,
            step_sizes,
            perturbation: narrow.perturbation,
            iterations: narrow.iterations,
        }
    }

    /// Single refinement pass starting from the wide result.
    pub fn solve_narrow<R: Rng + ?Sized>(&self, rng: &mut R, wide: &SpsaResult) -> SpsaResult {
        let params = self.narrow_params(wide);
        self.spsa(rng, &params, wide.values)
    }
}
