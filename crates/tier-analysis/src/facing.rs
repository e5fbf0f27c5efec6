//! Sector-level facing / Head-to-Head detection.

use tier_core::{FacingParams, Sector, SectorIdx, SectorTable, SiteIdx, TierResult, angle_difference};

use crate::{
    AnalysisContext, FacingNeighbor, FacingTierRecord, MethodKind, NotFoundReason, Outcome,
    TierMethod, TierRecord, round2,
};

#[derive(Clone, Debug, Default)]
pub struct FacingMethod {
    params: FacingParams,
}

impl FacingMethod {
    pub fn new(params: FacingParams) -> TierResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FacingParams {
        &self.params
    }
}

impl TierMethod for FacingMethod {
    fn kind(&self) -> MethodKind {
        MethodKind::Facing
    }

    fn analyze_site(&self, ctx: &AnalysisContext<'_>, site: SiteIdx) -> Vec<TierRecord> {
        site_tiers(ctx, site, &self.params).into_iter().map(Into::into).collect()
    }
}

/// Mutual-facing test between sectors `a` and `b`, `distance_km` apart.
///
/// Holds iff the pair is closer than `h2h_distance_km`, `a` points at `b`
/// within `h2h_threshold_deg`, and `b` points back at `a` within the same
/// threshold.  Symmetric in `a` and `b`.
pub fn is_head_to_head(a: &Sector, b: &Sector, distance_km: f64, params: &FacingParams) -> bool {
    if distance_km.is_nan() || distance_km >= params.h2h_distance_km {
        return false;
    }
    let thr = params.h2h_threshold_deg;
    angle_difference(a.azimuth, a.position.bearing_to(b.position)) <= thr
        && angle_difference(b.azimuth, b.position.bearing_to(a.position)) <= thr
}

/// Facing 1st tier for one sector.
pub fn sector_tier(
    ctx: &AnalysisContext<'_>,
    query: SectorIdx,
    params: &FacingParams,
) -> FacingTierRecord {
    let table = ctx.table;
    let origin = table.sector(query);
    let own_site = table.site_of(query);

    let nearby: Vec<_> = ctx
        .index()
        .within_radius(origin.position, params.max_radius_km)
        .into_iter()
        .filter(|n| n.sector != query && n.distance_km > 0.0)
        .filter(|n| table.site_of(n.sector) != own_site)
        .collect();

    let outcome = if nearby.is_empty() {
        Outcome::NotFound(NotFoundReason::NoCandidatesWithinRadius)
    } else {
        let half_beam = params.half_beam_deg();
        let best = nearby
            .into_iter()
            .filter(|n| {
                let bearing = origin.position.bearing_to(table.sector(n.sector).position);
                angle_difference(origin.azimuth, bearing) <= half_beam
            })
            .map(|n| {
                let h2h = is_head_to_head(origin, table.sector(n.sector), n.distance_km, params);
                (n, h2h)
            })
            // H2H first, then closest; row order breaks exact ties.
            .min_by(|(a, a_h2h), (b, b_h2h)| {
                b_h2h
                    .cmp(a_h2h)
                    .then(a.distance_km.total_cmp(&b.distance_km))
                    .then(a.sector.cmp(&b.sector))
            });

        match best {
            None => Outcome::NotFound(NotFoundReason::NoCandidatesInBeamWidth),
            Some((n, head_to_head)) => {
                let hit = table.sector(n.sector);
                Outcome::Found(FacingNeighbor {
                    site_id: hit.site_id.clone(),
                    sector_id: hit.sector_id.clone(),
                    head_to_head,
                    distance_km: round2(n.distance_km),
                })
            }
        }
    };

    FacingTierRecord {
        site_id:   origin.site_id.clone(),
        sector_id: origin.sector_id.clone(),
        outcome,
    }
}

/// One record per sector of `site`, in the site's sector order.
pub fn site_tiers(
    ctx: &AnalysisContext<'_>,
    site: SiteIdx,
    params: &FacingParams,
) -> Vec<FacingTierRecord> {
    let target = ctx.table.site_at(site);
    let records: Vec<_> = target.sectors.iter().map(|&s| sector_tier(ctx, s, params)).collect();
    tracing::trace!(
        site = %target.id,
        h2h = records.iter().filter(|r| r.is_head_to_head()).count(),
        "facing site done"
    );
    records
}

/// Facing 1st tier for every target id present in `table`, in request
/// order.  Unknown ids produce no records.
pub fn facing_tiers<S: AsRef<str>>(
    table: &SectorTable,
    targets: &[S],
    params: &FacingParams,
) -> Vec<FacingTierRecord> {
    let ctx = AnalysisContext::new(table);
    targets
        .iter()
        .filter_map(|t| table.site_idx(t.as_ref()))
        .flat_map(|site| site_tiers(&ctx, site, params))
        .collect()
}
