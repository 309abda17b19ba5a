//! Shared utilities for tinter-cli
//!
//! Argument parsers and settings resolution used by the command
//! implementations.

pub mod parsers;

use std::path::Path;

use tinter_core::config::{self, SolverDefaults};

pub use parsers::{parse_base_color, parse_hue_rotate_mode};

/// Resolve solver settings for a command.
///
/// An explicit `--config` file replaces the global search and must load;
/// a missing or invalid file is an error. Otherwise the process-wide config
/// (env var, working directory, `~/tinter`) is used. The config source and
/// any warnings are printed in verbose mode.
pub fn resolve_settings(
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<SolverDefaults, String> {
    config::set_verbose(verbose);

    let Some(path) = config_path else {
        config::log_config_usage();
        return Ok(config::solver_defaults());
    };

    let handle = config::load_solver_config(Some(path));
    let Some(source) = &handle.source else {
        return Err(handle
            .warnings
            .first()
            .cloned()
            .unwrap_or_else(|| format!("Failed to load solver config {}", path.display())));
    };

    if verbose {
        eprintln!("[tinter] Loaded solver config from {}", source.display());
    }
    Ok(handle.config.defaults)
}
