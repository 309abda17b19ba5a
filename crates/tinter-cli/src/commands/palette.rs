use std::path::PathBuf;

use tinter_cli::resolve_settings;
use tinter_core::{load_palette, save_palette_filters, solve_palette};

/// Solve every color of a palette file.
///
/// Results go to `out` (YAML or JSON by extension) or to stdout as JSON.
pub fn cmd_palette(
    file: PathBuf,
    out: Option<PathBuf>,
    seed: Option<u64>,
    threads: Option<usize>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    let settings = resolve_settings(config.as_deref(), verbose)?;

    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if verbose {
            eprintln!("Using {} threads for parallel solving", num_threads);
        }
    }

    let palette = load_palette(&file)?;
    if palette.colors.is_empty() {
        return Err(format!("Palette {} has no colors", file.display()));
    }

    let filters = solve_palette(&palette, &settings, seed);

    match out {
        Some(path) => {
            save_palette_filters(&filters, &path)?;
            println!(
                "Solved {} colors, written to {}",
                filters.len(),
                path.display()
            );
        }
        None => {
            let json = serde_json::to_string_pretty(&filters)
                .map_err(|e| format!("Failed to serialize filters: {}", e))?;
            println!("{}", json);
        }
    }

    Ok(())
}
