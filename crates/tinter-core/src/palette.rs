//! Palette batches
//!
//! Load a list of brand colors from YAML or JSON, solve a filter for each,
//! and save the results.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SolverDefaults;
use crate::filters::NO_FILTER;
use crate::generate::solve_hex;
use crate::verbose_println;

/// One palette color. `color` may be any value; only strings are solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Value,
}

/// Palette file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Palette {
    #[serde(default)]
    pub colors: Vec<PaletteEntry>,
}

/// Solved filter for one palette entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: Value,
    pub filter: String,
    /// Solver loss; absent when no filter was needed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss: Option<f64>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Load a palette from a YAML (`.yml`/`.yaml`) or JSON file
pub fn load_palette<P: AsRef<Path>>(path: P) -> Result<Palette, String> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read palette file: {}", e))?;

    if is_yaml(path) {
        serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse palette YAML: {}", e))
    } else {
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse palette JSON: {}", e))
    }
}

/// Save solved filters as YAML or JSON, chosen by file extension
pub fn save_palette_filters<P: AsRef<Path>>(
    filters: &[PaletteFilter],
    path: P,
) -> Result<(), String> {
    let path = path.as_ref();
    let contents = if is_yaml(path) {
        serde_yaml::to_string(filters).map_err(|e| format!("Failed to serialize filters: {}", e))?
    } else {
        serde_json::to_string_pretty(filters)
            .map_err(|e| format!("Failed to serialize filters: {}", e))?
    };

    std::fs::write(path, contents).map_err(|e| format!("Failed to write filters file: {}", e))
}

/// Solve every palette entry in parallel.
///
/// With a seed, entry `i` uses `seed + i` so a batch is reproducible no
/// matter how rayon schedules it. The settings' own seed is used when `seed`
/// is `None`; entropy when neither is set.
pub fn solve_palette(
    palette: &Palette,
    settings: &SolverDefaults,
    seed: Option<u64>,
) -> Vec<PaletteFilter> {
    let seed = seed.or(settings.seed);

    palette
        .colors
        .par_iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s.wrapping_add(i as u64)),
                None => StdRng::from_entropy(),
            };
            let solved = solve_hex(entry.color.as_str(), settings, &mut rng);
            let label = entry.name.as_deref().unwrap_or("(unnamed)");
            match solved {
                Some(result) => {
                    verbose_println!(
                        "[tinter] palette {} {}: loss {:.3}",
                        label,
                        entry.color,
                        result.loss
                    );
                    PaletteFilter {
                        name: entry.name.clone(),
                        color: entry.color.clone(),
                        filter: result.filter,
                        loss: Some(result.loss),
                    }
                }
                None => {
                    verbose_println!("[tinter] palette {} {}: no filter", label, entry.color);
                    PaletteFilter {
                        name: entry.name.clone(),
                        color: entry.color.clone(),
                        filter: NO_FILTER.to_string(),
                        loss: None,
                    }
                }
            }
        })
        .collect()
}
