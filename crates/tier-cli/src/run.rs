//! Shared driver for the three analysis commands.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

use tier_analysis::{AnalysisContext, H2hReport, MethodKind, TierMethod, run_analysis};
use tier_input::{ValidationMode, load_sectors_csv, parse_site_ids, validate_site_ids};
use tier_output::{default_output_dir, write_results};

use crate::cli::RunArgs;

pub fn mode(lenient: bool) -> ValidationMode {
    if lenient { ValidationMode::Lenient } else { ValidationMode::Strict }
}

/// Method parameters from an optional JSON file; absent keys keep their
/// defaults.
pub fn load_params<P: DeserializeOwned + Default>(path: Option<&Path>) -> Result<P> {
    let Some(path) = path else {
        return Ok(P::default());
    };
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid parameter file {}", path.display()))
}

fn output_dir(args: &RunArgs) -> PathBuf {
    args.output_dir
        .clone()
        .or_else(default_output_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load, validate targets, run `method`, write the result file.
pub fn analyze<M: TierMethod>(args: &RunArgs, method: &M) -> Result<()> {
    let loaded = load_sectors_csv(&args.input, mode(args.lenient))
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let table = &loaded.table;

    let requested = parse_site_ids(&args.sites);
    if requested.is_empty() {
        bail!("no site ids given");
    }
    let (valid, missing) = validate_site_ids(table, &requested);
    if valid.is_empty() {
        bail!("none of the requested sites exist in the input: {}", missing.join(", "));
    }
    if !missing.is_empty() {
        tracing::warn!(count = missing.len(), sites = %missing.join(", "), "requested sites not found");
    }

    let ctx = AnalysisContext::new(table);
    let out = run_analysis(&ctx, method, &valid);

    let kind = method.kind();
    let dir = output_dir(args);
    let path = write_results(&dir, kind, &out.records, &chrono::Local::now())
        .with_context(|| format!("failed to write results to {}", dir.display()))?;

    println!(
        "{}: {} record(s) for {} site(s) ({} indoor) → {}",
        kind.label(),
        out.records.len(),
        out.outdoor_sites + out.indoor_sites,
        out.indoor_sites,
        path.display()
    );
    if kind == MethodKind::Facing {
        println!("{}", H2hReport::from_records(&out.records));
    }
    Ok(())
}
