//! Batch driver: classify targets, analyse, collect records in request order.

use tier_core::{SiteClass, SiteIdx};

use crate::{ALL_SECTORS, AnalysisContext, IndoorRecord, MethodKind, TierMethod, TierRecord};

/// Everything one analysis run produced.
#[derive(Clone, Debug, Default)]
pub struct RunOutput {
    /// Records for all present targets, grouped by target in request order.
    pub records:       Vec<TierRecord>,
    /// Requested ids absent from the table, in request order.
    pub missing:       Vec<String>,
    /// Outdoor targets that went through geometric analysis.
    pub outdoor_sites: usize,
    /// Targets answered with the fixed "Indoor" assignment.
    pub indoor_sites:  usize,
}

/// Work item assembled sequentially before the (possibly parallel) analysis.
enum Target {
    Outdoor(SiteIdx),
    Indoor(SiteIdx),
    Missing(String),
}

/// Run `method` over every id in `targets`.
///
/// Indoor sites skip geometric analysis and get [`IndoorRecord`]s instead:
/// one per site (sector `"ALL"`) for site-level methods, one per sector
/// otherwise.  Unknown ids are reported in [`RunOutput::missing`] and
/// logged, never an error.
///
/// With the `parallel` Cargo feature the per-site work runs on Rayon's thread
/// pool.  Record order is the same either way.
pub fn run_analysis<M: TierMethod + ?Sized>(
    ctx: &AnalysisContext<'_>,
    method: &M,
    targets: &[String],
) -> RunOutput {
    let table = ctx.table;
    let kind = method.kind();

    let work: Vec<Target> = targets
        .iter()
        .map(|id| match (table.site_idx(id), table.classify(id)) {
            (Some(site), SiteClass::Outdoor) => Target::Outdoor(site),
            (Some(site), SiteClass::Indoor) => Target::Indoor(site),
            _ => Target::Missing(id.clone()),
        })
        .collect();

    tracing::info!(
        method = kind.label(),
        targets = targets.len(),
        sectors = table.len(),
        sites = table.site_count(),
        "analysis started"
    );

    let per_target = analyze_all(ctx, method, kind, &work);

    let mut out = RunOutput::default();
    for (target, records) in work.into_iter().zip(per_target) {
        match target {
            Target::Outdoor(_) => out.outdoor_sites += 1,
            Target::Indoor(_) => out.indoor_sites += 1,
            Target::Missing(id) => {
                tracing::warn!(site = %id, "target site not found in input");
                out.missing.push(id);
            }
        }
        out.records.extend(records);
    }

    tracing::info!(
        method = kind.label(),
        records = out.records.len(),
        outdoor = out.outdoor_sites,
        indoor = out.indoor_sites,
        missing = out.missing.len(),
        "analysis finished"
    );
    out
}

fn analyze_all<M: TierMethod + ?Sized>(
    ctx: &AnalysisContext<'_>,
    method: &M,
    kind: MethodKind,
    work: &[Target],
) -> Vec<Vec<TierRecord>> {
    #[cfg(not(feature = "parallel"))]
    {
        work.iter().map(|t| analyze_one(ctx, method, kind, t)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Build the shared structures up front so workers never race to
        // initialise them.
        match kind {
            MethodKind::Voronoi => {
                ctx.site_graph();
            }
            MethodKind::BallTree | MethodKind::Facing => {
                ctx.index();
            }
        }

        // `collect` on an indexed parallel iterator keeps input order.
        work.par_iter().map(|t| analyze_one(ctx, method, kind, t)).collect()
    }
}

fn analyze_one<M: TierMethod + ?Sized>(
    ctx: &AnalysisContext<'_>,
    method: &M,
    kind: MethodKind,
    target: &Target,
) -> Vec<TierRecord> {
    match *target {
        Target::Outdoor(site) => {
            tracing::debug!(site = %ctx.table.site_at(site).id, "analysing site");
            method.analyze_site(ctx, site)
        }
        Target::Indoor(site) => indoor_records(ctx, kind, site),
        Target::Missing(_) => Vec::new(),
    }
}

fn indoor_records(ctx: &AnalysisContext<'_>, kind: MethodKind, site: SiteIdx) -> Vec<TierRecord> {
    let table = ctx.table;
    let s = table.site_at(site);
    if kind.is_site_level() {
        return vec![TierRecord::Indoor(IndoorRecord {
            site_id:   s.id.clone(),
            sector_id: ALL_SECTORS.to_owned(),
            facing:    false,
        })];
    }
    table
        .site_sectors(s)
        .map(|(_, sector)| {
            TierRecord::Indoor(IndoorRecord {
                site_id:   s.id.clone(),
                sector_id: sector.sector_id.clone(),
                facing:    kind == MethodKind::Facing,
            })
        })
        .collect()
}
