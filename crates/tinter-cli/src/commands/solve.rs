use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tinter_cli::{parse_hue_rotate_mode, resolve_settings};
use tinter_core::{solve_hex, PaletteFilter, NO_FILTER};

/// Solve a filter for each color given on the command line.
///
/// With a seed, color `i` is solved with `seed + i`, matching palette batches.
pub fn cmd_solve(
    colors: Vec<String>,
    seed: Option<u64>,
    json: bool,
    config: Option<PathBuf>,
    parallel: bool,
    hue_rotate: Option<String>,
    verbose: bool,
) -> Result<(), String> {
    if colors.is_empty() {
        return Err("No colors specified".to_string());
    }

    let mut settings = resolve_settings(config.as_deref(), verbose)?;
    if parallel {
        settings.wide.parallel = true;
    }
    if let Some(mode) = parse_hue_rotate_mode(hue_rotate.as_deref())? {
        settings.hue_rotate = mode;
    }
    let seed = seed.or(settings.seed);

    let mut results = Vec::with_capacity(colors.len());
    for (i, color) in colors.iter().enumerate() {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s.wrapping_add(i as u64)),
            None => StdRng::from_entropy(),
        };

        let solved = solve_hex(Some(color.as_str()), &settings, &mut rng);
        results.push(PaletteFilter {
            name: None,
            color: color.clone().into(),
            filter: solved
                .as_ref()
                .map_or_else(|| NO_FILTER.to_string(), |r| r.filter.clone()),
            loss: solved.map(|r| r.loss),
        });
    }

    if json {
        let out = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for result in &results {
        let color = result.color.as_str().unwrap_or_default();
        match result.loss {
            Some(loss) if verbose => println!("{}: {} (loss {:.3})", color, result.filter, loss),
            _ => println!("{}: {}", color, result.filter),
        }
    }

    Ok(())
}
