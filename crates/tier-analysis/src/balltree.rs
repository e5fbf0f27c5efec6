//! Sector-level nearest neighbor with a bearing filter.
//!
//! For each sector of a target site:
//!
//! 1. Pull the `query_size()` nearest sectors from the index, skipping
//!    co-located points and stopping at `max_radius_km`.
//! 2. Keep candidates whose bearing lies within `bearing_tolerance_deg` of
//!    the sector azimuth.
//! 3. Drop candidates on the query sector's own site.
//! 4. Rank the rest by distance.
//!
//! A per-site pass then spreads the sectors over distinct neighbor sites
//! where the ranked lists allow it.

use rustc_hash::FxHashSet;

use tier_core::{BallTreeParams, SectorIdx, SectorTable, SiteIdx, TierResult, angle_difference};

use crate::{
    AnalysisContext, MethodKind, NotFoundReason, Outcome, SectorNeighbor, SectorTierRecord,
    TierMethod, TierRecord, round2,
};

#[derive(Clone, Debug, Default)]
pub struct BallTreeMethod {
    params: BallTreeParams,
}

impl BallTreeMethod {
    pub fn new(params: BallTreeParams) -> TierResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BallTreeParams {
        &self.params
    }
}

impl TierMethod for BallTreeMethod {
    fn kind(&self) -> MethodKind {
        MethodKind::BallTree
    }

    fn analyze_site(&self, ctx: &AnalysisContext<'_>, site: SiteIdx) -> Vec<TierRecord> {
        site_tiers(ctx, site, &self.params).into_iter().map(Into::into).collect()
    }
}

#[derive(Copy, Clone, Debug)]
struct Candidate {
    site:        SiteIdx,
    distance_km: f64,
}

/// Filtered candidates for one sector, closest first.  Never `Ok(empty)`.
fn rank_candidates(
    ctx: &AnalysisContext<'_>,
    query: SectorIdx,
    params: &BallTreeParams,
) -> Result<Vec<(SectorIdx, Candidate)>, NotFoundReason> {
    let table = ctx.table;
    let origin = table.sector(query);
    let own_site = table.site_of(query);

    let nearby: Vec<_> = ctx
        .index()
        .nearest_iter(origin.position)
        .filter(|n| n.distance_km > 0.0)
        .take_while(|n| n.distance_km <= params.max_radius_km)
        .take(params.query_size())
        .collect();
    if nearby.is_empty() {
        return Err(NotFoundReason::NoCandidatesWithinRadius);
    }

    let mut ranked: Vec<(SectorIdx, Candidate)> = nearby
        .into_iter()
        .filter(|n| {
            let bearing = origin.position.bearing_to(table.sector(n.sector).position);
            angle_difference(origin.azimuth, bearing) <= params.bearing_tolerance_deg
        })
        .filter(|n| table.site_of(n.sector) != own_site)
        .map(|n| (n.sector, Candidate { site: table.site_of(n.sector), distance_km: n.distance_km }))
        .collect();
    if ranked.is_empty() {
        return Err(NotFoundReason::NoCandidatesInBearingRange);
    }

    ranked.sort_by(|a, b| a.1.distance_km.total_cmp(&b.1.distance_km).then(a.0.cmp(&b.0)));
    Ok(ranked)
}

/// One record per sector of `site`, in the site's sector order.
pub fn site_tiers(
    ctx: &AnalysisContext<'_>,
    site: SiteIdx,
    params: &BallTreeParams,
) -> Vec<SectorTierRecord> {
    let table = ctx.table;
    let target = table.site_at(site);

    let ranked: Vec<_> = target
        .sectors
        .iter()
        .map(|&s| rank_candidates(ctx, s, params))
        .collect();

    // Provisional pick: each sector's nearest candidate.
    let mut picks: Vec<Outcome<Candidate>> = ranked
        .iter()
        .map(|r| Outcome::from(r.as_ref().map(|list| list[0].1).map_err(|&reason| reason)))
        .collect();

    // Distinctness pass: closest sectors claim their neighbor site first;
    // later sectors fall back to their next unclaimed candidate, or keep the
    // duplicate if every candidate is already claimed.
    let mut pending: Vec<(usize, &[(SectorIdx, Candidate)])> = ranked
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.as_ref().ok().map(|list| (i, list.as_slice())))
        .collect();
    pending.sort_by(|a, b| a.1[0].1.distance_km.total_cmp(&b.1[0].1.distance_km).then(a.0.cmp(&b.0)));

    let mut claimed: FxHashSet<SiteIdx> = FxHashSet::default();
    for (i, list) in pending {
        let chosen = list
            .iter()
            .map(|(_, c)| *c)
            .find(|c| !claimed.contains(&c.site))
            .unwrap_or(list[0].1);
        claimed.insert(chosen.site);
        picks[i] = Outcome::Found(chosen);
    }

    target
        .sectors
        .iter()
        .zip(picks)
        .map(|(&s, pick)| SectorTierRecord {
            site_id:   target.id.clone(),
            sector_id: table.sector(s).sector_id.clone(),
            outcome:   pick.map(|c| SectorNeighbor {
                site_id:     table.site_at(c.site).id.clone(),
                distance_km: round2(c.distance_km),
            }),
        })
        .collect()
}

/// Ball-tree 1st tier for every target id present in `table`, in request
/// order.  Unknown ids produce no records.
pub fn balltree_tiers<S: AsRef<str>>(
    table: &SectorTable,
    targets: &[S],
    params: &BallTreeParams,
) -> Vec<SectorTierRecord> {
    let ctx = AnalysisContext::new(table);
    targets
        .iter()
        .filter_map(|t| table.site_idx(t.as_ref()))
        .flat_map(|site| site_tiers(&ctx, site, params))
        .collect()
}
