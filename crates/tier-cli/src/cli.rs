use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tiergen", about = "1st-tier neighbor generator for radio networks", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show progress logs (info level; RUST_LOG overrides)
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logs, including warnings
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Options shared by the three analysis commands.
#[derive(Args)]
pub struct RunArgs {
    /// Sector table CSV (Site ID, Sector, Latitude, Longitude, Dir[, tilt])
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Comma-separated target site ids
    #[arg(long, short = 's')]
    pub sites: String,

    /// Result directory [default: ~/Documents/1st_tier_generator_HD]
    #[arg(long, short = 'o', env = "TIERGEN_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip invalid input rows instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// JSON parameter file; explicit flags take precedence over its values
    #[arg(long)]
    pub params: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Site-level Voronoi adjacency
    Voronoi {
        #[command(flatten)]
        run: RunArgs,

        /// Maximum neighbor distance in km [default: 10]
        #[arg(long)]
        max_radius: Option<f64>,
    },

    /// Sector-level nearest neighbor with bearing filter
    Balltree {
        #[command(flatten)]
        run: RunArgs,

        /// Candidates per sector [default: 1]
        #[arg(long)]
        candidates: Option<usize>,

        /// Maximum search radius in km [default: 7]
        #[arg(long)]
        max_radius: Option<f64>,

        /// Bearing tolerance in degrees [default: 60]
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Sector-level facing / Head-to-Head detection
    Facing {
        #[command(flatten)]
        run: RunArgs,

        /// Maximum search radius in km [default: 10]
        #[arg(long)]
        max_radius: Option<f64>,

        /// Sector beam width in degrees [default: 120]
        #[arg(long)]
        beam_width: Option<f64>,

        /// H2H angular threshold in degrees [default: 30]
        #[arg(long)]
        h2h_threshold: Option<f64>,

        /// H2H distance threshold in km [default: 1.5]
        #[arg(long)]
        h2h_distance: Option<f64>,
    },

    /// Print a summary of an input table
    Summary {
        #[arg(long, short = 'i')]
        input: PathBuf,

        #[arg(long)]
        lenient: bool,
    },

    /// Generate a synthetic sector table
    Sample {
        /// Output CSV path
        #[arg(long, short = 'o')]
        output: PathBuf,

        #[arg(long, default_value_t = 10)]
        sites: usize,

        /// Sectors per site
        #[arg(long, default_value_t = 3)]
        sectors: usize,

        /// Scatter radius around the centre, km
        #[arg(long, default_value_t = 5.0)]
        spread_km: f64,

        /// Fraction of sites generated as indoor
        #[arg(long, default_value_t = 0.0)]
        indoor_ratio: f64,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}
