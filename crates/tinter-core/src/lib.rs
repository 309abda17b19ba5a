//! Tinter Core Library
//!
//! Finds CSS filter chains that tint white artwork to a target color.

pub mod color;
pub mod config;
pub mod filters;
pub mod generate;
pub mod palette;
pub mod solver;

// Re-export commonly used types
pub use color::{Color, Hsl};
pub use config::{SolverConfig, SolverDefaults};
pub use filters::{
    fix, format_filter_css, parse_filter_css, FilterParams, FilterSet, HueRotateMode, NO_FILTER,
};
pub use generate::{
    generate_color_filter, generate_color_filter_value, generate_color_filter_with, solve_hex,
    solver_rng,
};
pub use palette::{load_palette, save_palette_filters, solve_palette, Palette, PaletteFilter};
pub use solver::{SolveResult, Solver, SpsaResult};
