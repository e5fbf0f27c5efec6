//! tiergen — 1st-tier neighbor generator.
//!
//! ```text
//! tiergen facing   --input sectors.csv --sites JKT001,JKT002 --beam-width 90
//! tiergen balltree --input sectors.csv --sites JKT001 --params balltree.json
//! tiergen summary  --input sectors.csv
//! tiergen sample   --output sectors.csv --sites 50 --seed 7
//! ```

mod cli;
mod run;


use anyhow::{Context, Result};
use clap::Parser;

use tier_analysis::{BallTreeMethod, FacingMethod, VoronoiMethod};
use tier_core::{BallTreeParams, FacingParams, SampleSpec, VoronoiParams, generate_network};
use tier_input::{DataSummary, load_sectors_csv};
use tier_output::write_sectors_csv;

use cli::{Cli, Commands};

fn init_tracing(cli: &Cli) {
    // --quiet   → off
    // --verbose → RUST_LOG if set, else info
    // default   → RUST_LOG if set, else warn (dropped rows, missing sites)
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else {
        let fallback = if cli.verbose { "info" } else { "warn" };
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command {
        Commands::Voronoi { run: args, max_radius } => {
            let mut params: VoronoiParams = run::load_params(args.params.as_deref())?;
            if let Some(v) = max_radius {
                params.max_radius_km = v;
            }
            let method = VoronoiMethod::new(params).context("invalid Voronoi parameters")?;
            tracing::info!(params = ?method.params(), "voronoi parameters");
            run::analyze(&args, &method)
        }

        Commands::Balltree { run: args, candidates, max_radius, tolerance } => {
            let mut params: BallTreeParams = run::load_params(args.params.as_deref())?;
            if let Some(v) = candidates {
                params.candidates_per_sector = v;
            }
            if let Some(v) = max_radius {
                params.max_radius_km = v;
            }
            if let Some(v) = tolerance {
                params.bearing_tolerance_deg = v;
            }
            let method = BallTreeMethod::new(params).context("invalid ball-tree parameters")?;
            tracing::info!(params = ?method.params(), "balltree parameters");
            run::analyze(&args, &method)
        }

        Commands::Facing { run: args, max_radius, beam_width, h2h_threshold, h2h_distance } => {
            let mut params: FacingParams = run::load_params(args.params.as_deref())?;
            if let Some(v) = max_radius {
                params.max_radius_km = v;
            }
            if let Some(v) = beam_width {
                params.beam_width_deg = v;
            }
            if let Some(v) = h2h_threshold {
                params.h2h_threshold_deg = v;
            }
            if let Some(v) = h2h_distance {
                params.h2h_distance_km = v;
            }
            let method = FacingMethod::new(params).context("invalid facing parameters")?;
            tracing::info!(params = ?method.params(), "facing parameters");
            run::analyze(&args, &method)
        }

        Commands::Summary { input, lenient } => {
            let loaded = load_sectors_csv(&input, run::mode(lenient))
                .with_context(|| format!("failed to load {}", input.display()))?;
            if let Some(summary) = DataSummary::from_table(&loaded.table) {
                println!("{summary}");
            }
            if loaded.report.rows_dropped > 0 {
                println!("dropped:      {} invalid row(s)", loaded.report.rows_dropped);
            }
            Ok(())
        }

        Commands::Sample { output, sites, sectors, spread_km, indoor_ratio, seed } => {
            let spec = SampleSpec {
                sites,
                sectors_per_site: sectors,
                spread_km,
                indoor_ratio,
                ..SampleSpec::default()
            };
            let rows = generate_network(&spec, seed);
            write_sectors_csv(&output, &rows)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("{} sectors over {} sites → {}", rows.len(), sites, output.display());
            Ok(())
        }
    }
}
