use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{cmd_apply, cmd_init, cmd_palette, cmd_solve};

#[derive(Parser)]
#[command(name = "tinter")]
#[command(version, about = "CSS filter solver for tinting white artwork", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the CSS filter that turns white into each color
    Solve {
        /// Target colors (#rgb or #rrggbb)
        #[arg(value_name = "COLOR", required = true)]
        colors: Vec<String>,

        /// Seed for reproducible output (color i uses seed + i)
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Solver config file (replaces the normal search; must exist and parse)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Run the wide-search attempts in parallel
        #[arg(long)]
        parallel: bool,

        /// Hue-rotate evaluation: "sequential" (default) or "matrix"
        #[arg(long, value_name = "MODE")]
        hue_rotate: Option<String>,

        /// Print solver progress and losses
        #[arg(short, long)]
        verbose: bool,
    },

    /// Simulate a CSS filter string on a base color
    Apply {
        /// CSS filter value, e.g. "invert(50%) sepia(20%)"
        #[arg(value_name = "FILTER")]
        filter: String,

        /// Base color as hex or R,G,B
        #[arg(long, value_name = "COLOR", default_value = "#ffffff")]
        base: String,

        /// Hue-rotate evaluation: "sequential" (default) or "matrix"
        #[arg(long, value_name = "MODE")]
        hue_rotate: Option<String>,
    },

    /// Solve every color in a YAML or JSON palette file
    Palette {
        /// Palette file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file (.yml/.yaml or .json); JSON to stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Seed for reproducible output (entry i uses seed + i)
        #[arg(long, value_name = "N")]
        seed: Option<u64>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Solver config file (replaces the normal search; must exist and parse)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print solver progress and losses
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write a default solver config to ~/tinter/
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            colors,
            seed,
            json,
            config,
            parallel,
            hue_rotate,
            verbose,
        } => cmd_solve(colors, seed, json, config, parallel, hue_rotate, verbose),

        Commands::Apply {
            filter,
            base,
            hue_rotate,
        } => cmd_apply(filter, base, hue_rotate),

        Commands::Palette {
            file,
            out,
            seed,
            threads,
            config,
            verbose,
        } => cmd_palette(file, out, seed, threads, config, verbose),

        Commands::Init { force } => cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
