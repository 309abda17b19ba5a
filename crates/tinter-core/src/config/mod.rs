//! Solver configuration management.
//!
//! This module provides configuration loading, global verbose flag management,
//! and the solver configuration types.

mod defaults;


// Re-export public types
pub use defaults::{NarrowSearch, SolverDefaults, WideSearch};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, OnceLock};

use serde::{Deserialize, Serialize};

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Canonical list of candidate config file names we search for on disk.
pub const CONFIG_FILENAMES: &[&str] = &["solver.yml", "solver.yaml"];

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TINTER_CONFIG";

/// Public handle that stores the loaded configuration, its source path, and warnings.
pub struct SolverConfigHandle {
    pub config: SolverConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl SolverConfigHandle {
    fn with_config(config: SolverConfig, source: Option<PathBuf>, warnings: Vec<String>) -> Self {
        Self {
            config,
            source,
            warnings,
        }
    }
}

/// Complete configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub defaults: SolverDefaults,
}

impl SolverConfig {
    fn sanitize(mut self) -> Self {
        self.defaults.sanitize();
        self
    }

    /// Parse a YAML document into a sanitized config.
    pub fn from_yaml(contents: &str) -> Result<Self, String> {
        serde_yaml::from_str::<SolverConfig>(contents)
            .map(SolverConfig::sanitize)
            .map_err(|e| format!("Failed to parse solver config: {}", e))
    }

    /// Serialize to YAML (used to write a starter config file).
    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize solver config: {}", e))
    }
}

/// Load configuration from disk.
///
/// An explicit `custom_path` is the only file tried; when it cannot be read
/// or parsed the built-in defaults are used. Without one, the env var,
/// working directory and `~/tinter` candidates are searched in order.
/// Never fails: problems are recorded as warnings and defaults are used.
pub fn load_solver_config(custom_path: Option<&Path>) -> SolverConfigHandle {
    let mut warnings = Vec::new();

    if let Some(path) = custom_path {
        return match read_config_file(path) {
            Ok(config) => {
                let source = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
                SolverConfigHandle::with_config(config, Some(source), warnings)
            }
            Err(err) => {
                warnings.push(err);
                warnings.push("Using built-in defaults.".to_string());
                SolverConfigHandle::with_config(SolverConfig::default(), None, warnings)
            }
        };
    }

    for candidate in get_config_candidates() {
        if !candidate.is_file() {
            continue;
        }

        match read_config_file(&candidate) {
            Ok(config) => {
                let source = fs::canonicalize(&candidate).unwrap_or(candidate);
                return SolverConfigHandle::with_config(config, Some(source), warnings);
            }
            Err(err) => warnings.push(err),
        }
    }

    warnings.push("No solver config found; using built-in defaults.".to_string());
    SolverConfigHandle::with_config(SolverConfig::default(), None, warnings)
}

fn read_config_file(path: &Path) -> Result<SolverConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read solver config {}: {}", path.display(), e))?;
    SolverConfig::from_yaml(&contents).map_err(|e| format!("{} ({})", e, path.display()))
}

/// Get list of config file candidates to try
fn get_config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        candidates.push(PathBuf::from(env_path));
    }

    if let Ok(cwd) = std::env::current_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(cwd.join("config").join(name));
            candidates.push(cwd.join(name));
        }
    }

    if let Some(dir) = user_config_dir() {
        for name in CONFIG_FILENAMES {
            candidates.push(dir.join(name));
        }
    }

    candidates
}

/// Per-user config directory (`~/tinter`).
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("tinter"))
}

static SOLVER_CONFIG_HANDLE: OnceLock<SolverConfigHandle> = OnceLock::new();
static PRINT_CONFIG_ONCE: Once = Once::new();

/// Access the global solver configuration (loaded once per process).
pub fn solver_config_handle() -> &'static SolverConfigHandle {
    SOLVER_CONFIG_HANDLE.get_or_init(|| load_solver_config(None))
}

/// Settings from the global configuration.
pub fn solver_defaults() -> SolverDefaults {
    solver_config_handle().config.defaults.clone()
}

/// Print config source and warnings the first time it is requested (only in verbose mode).
pub fn log_config_usage() {
    PRINT_CONFIG_ONCE.call_once(|| {
        if !is_verbose() {
            return;
        }
        let handle = solver_config_handle();
        if let Some(source) = &handle.source {
            eprintln!("[tinter] Loaded solver config from {}", source.display());
        } else {
            eprintln!("[tinter] Using built-in solver defaults");
        }

        for warning in &handle.warnings {
            eprintln!("[tinter] Config warning: {}", warning);
        }
    });
}
