//! Site-level Voronoi adjacency.
//!
//! Two sites are 1st-tier neighbors when their Voronoi cells share an edge,
//! which is the same as the sites sharing an edge of the Delaunay
//! triangulation.  The tessellation is planar over (lon, lat); the radius cut
//! uses great-circle distance.

use tier_core::{SectorTable, SiteIdx, TierResult, VoronoiParams};

use crate::{
    AnalysisContext, MethodKind, NotFoundReason, Outcome, SiteNeighbors, SiteTierRecord,
    TierMethod, TierRecord, round2,
};

/// [`TierMethod`] wrapper around [`site_tier`].
#[derive(Clone, Debug, Default)]
pub struct VoronoiMethod {
    params: VoronoiParams,
}

impl VoronoiMethod {
    pub fn new(params: VoronoiParams) -> TierResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &VoronoiParams {
        &self.params
    }
}

impl TierMethod for VoronoiMethod {
    fn kind(&self) -> MethodKind {
        MethodKind::Voronoi
    }

    fn analyze_site(&self, ctx: &AnalysisContext<'_>, site: SiteIdx) -> Vec<TierRecord> {
        vec![site_tier(ctx, site, &self.params).into()]
    }
}

/// Voronoi neighbors of one site within `params.max_radius_km`.
///
/// Sites that could not be tessellated (fewer than three distinct positions,
/// or all collinear) have no neighbors and get the "No neighbors" record.
pub fn site_tier(ctx: &AnalysisContext<'_>, site: SiteIdx, params: &VoronoiParams) -> SiteTierRecord {
    let table = ctx.table;
    let target = table.site_at(site);

    let mut site_ids = Vec::new();
    let mut total_km = 0.0;
    for &n in ctx.site_graph().neighbors(site.index()) {
        let other = table.site_at(SiteIdx(n as u32));
        let d = target.position.distance_km(other.position);
        if d > 0.0 && d <= params.max_radius_km {
            site_ids.push(other.id.clone());
            total_km += d;
        }
    }

    let outcome = if site_ids.is_empty() {
        Outcome::NotFound(NotFoundReason::NoNeighbors)
    } else {
        let avg_distance_km = round2(total_km / site_ids.len() as f64);
        Outcome::Found(SiteNeighbors { site_ids, avg_distance_km })
    };

    tracing::trace!(site = %target.id, found = outcome.is_found(), "voronoi site done");
    SiteTierRecord { site_id: target.id.clone(), outcome }
}

/// Voronoi 1st tier for every target id present in `table`, in request
/// order.  Unknown ids are skipped.
pub fn voronoi_tiers<S: AsRef<str>>(
    table: &SectorTable,
    targets: &[S],
    params: &VoronoiParams,
) -> Vec<SiteTierRecord> {
    let ctx = AnalysisContext::new(table);
    targets
        .iter()
        .filter_map(|t| table.site_idx(t.as_ref()))
        .map(|site| site_tier(&ctx, site, params))
        .collect()
}
