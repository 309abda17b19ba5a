//! Public entry point: hex color in, CSS filter string out.
//!
//! None of these functions fail. Missing, malformed, white and black inputs
//! all yield [`NO_FILTER`], which leaves the white source artwork untouched.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::color::{is_white_hex, parse_hex, Color};
use crate::config::SolverDefaults;
use crate::filters::NO_FILTER;
use crate::solver::{SolveResult, Solver};

/// Random source for a solve: seeded when the settings carry a seed,
/// entropy otherwise.
pub fn solver_rng(settings: &SolverDefaults) -> StdRng {
    match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Target color for `hex`, or `None` when no filter is needed.
///
/// White needs no filter. Black, and every input that fails to parse (which
/// parses as black), also maps to `None`.
pub fn target_color(hex: &str) -> Option<Color> {
    if is_white_hex(hex) {
        return None;
    }
    let rgb = parse_hex(hex);
    if rgb == [0, 0, 0] {
        return None;
    }
    Some(Color::from_rgb8(rgb))
}

/// Solve `hex` with explicit settings and random source.
/// Returns `None` for inputs that need no filter.
pub fn solve_hex<R: Rng + ?Sized>(
    hex: Option<&str>,
    settings: &SolverDefaults,
    rng: &mut R,
) -> Option<SolveResult> {
    let target = target_color(hex?)?;
    let solver = Solver::with_settings(target, settings.clone());
    Some(solver.solve(rng))
}

/// CSS filter for `hex` with explicit settings and random source.
pub fn generate_color_filter_with<R: Rng + ?Sized>(
    hex: Option<&str>,
    settings: &SolverDefaults,
    rng: &mut R,
) -> String {
    solve_hex(hex, settings, rng)
        .map(|result| result.filter)
        .unwrap_or_else(|| NO_FILTER.to_string())
}

/// CSS filter that turns white into `hex` with the built-in settings.
///
/// Reads no configuration: every call solves independently with fresh
/// entropy. Use [`generate_color_filter_with`] for configured settings.
///
/// ```
/// use tinter_core::generate_color_filter;
///
/// assert_eq!(generate_color_filter(Some("#ffffff")), "none");
/// assert_eq!(generate_color_filter(None), "none");
/// assert!(generate_color_filter(Some("#00ffff")).starts_with("invert("));
/// ```
pub fn generate_color_filter(hex: Option<&str>) -> String {
    let mut rng = StdRng::from_entropy();
    generate_color_filter_with(hex, &SolverDefaults::default(), &mut rng)
}

/// Variant for dynamically typed input: anything other than a JSON string
/// yields [`NO_FILTER`].
pub fn generate_color_filter_value(value: &Value) -> String {
    generate_color_filter(value.as_str())
}
