//! Result records, one shape per method.
//!
//! Distances stored in records are already rounded to two decimals; a
//! not-found record reports distance `0.0`.

use crate::Outcome;

/// Sector label used by site-level records.
pub const ALL_SECTORS: &str = "ALL";

/// Neighbor label assigned to indoor sites.
pub const INDOOR: &str = "Indoor";

/// Round to two decimals (half away from zero).
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ── Voronoi (site level) ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SiteNeighbors {
    /// Neighbor site ids, in table order.
    pub site_ids:        Vec<String>,
    /// Mean distance to the neighbors, rounded.
    pub avg_distance_km: f64,
}

impl SiteNeighbors {
    /// Comma-joined neighbor ids, as persisted.
    pub fn joined(&self) -> String {
        self.site_ids.join(",")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteTierRecord {
    pub site_id: String,
    pub outcome: Outcome<SiteNeighbors>,
}

impl SiteTierRecord {
    pub fn distance_km(&self) -> f64 {
        self.outcome.found().map_or(0.0, |n| n.avg_distance_km)
    }
}

// ── Ball tree (sector level) ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SectorNeighbor {
    pub site_id:     String,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectorTierRecord {
    pub site_id:   String,
    pub sector_id: String,
    pub outcome:   Outcome<SectorNeighbor>,
}

impl SectorTierRecord {
    pub fn distance_km(&self) -> f64 {
        self.outcome.found().map_or(0.0, |n| n.distance_km)
    }

    /// Neighbor site id, if one was found.
    pub fn neighbor(&self) -> Option<&str> {
        self.outcome.found().map(|n| n.site_id.as_str())
    }
}

// ── Facing / H2H (sector level) ───────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct FacingNeighbor {
    pub site_id:      String,
    pub sector_id:    String,
    pub head_to_head: bool,
    pub distance_km:  f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FacingTierRecord {
    pub site_id:   String,
    pub sector_id: String,
    pub outcome:   Outcome<FacingNeighbor>,
}

impl FacingTierRecord {
    pub fn distance_km(&self) -> f64 {
        self.outcome.found().map_or(0.0, |n| n.distance_km)
    }

    /// `false` for not-found records.
    pub fn is_head_to_head(&self) -> bool {
        self.outcome.found().is_some_and(|n| n.head_to_head)
    }
}

// ── Indoor ────────────────────────────────────────────────────────────────────

/// Fixed assignment for a site excluded from geometric analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndoorRecord {
    pub site_id:   String,
    /// A sector id, or [`ALL_SECTORS`] for site-level output.
    pub sector_id: String,
    /// Emitted by the facing method (carries an H2H = No column).
    pub facing:    bool,
}

// ── TierRecord ────────────────────────────────────────────────────────────────

/// Any record a run can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum TierRecord {
    Site(SiteTierRecord),
    Sector(SectorTierRecord),
    Facing(FacingTierRecord),
    Indoor(IndoorRecord),
}

impl TierRecord {
    pub fn site_id(&self) -> &str {
        match self {
            TierRecord::Site(r)   => &r.site_id,
            TierRecord::Sector(r) => &r.site_id,
            TierRecord::Facing(r) => &r.site_id,
            TierRecord::Indoor(r) => &r.site_id,
        }
    }

    pub fn sector_id(&self) -> &str {
        match self {
            TierRecord::Site(_)   => ALL_SECTORS,
            TierRecord::Sector(r) => &r.sector_id,
            TierRecord::Facing(r) => &r.sector_id,
            TierRecord::Indoor(r) => &r.sector_id,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            TierRecord::Site(r)   => r.distance_km(),
            TierRecord::Sector(r) => r.distance_km(),
            TierRecord::Facing(r) => r.distance_km(),
            TierRecord::Indoor(_) => 0.0,
        }
    }
}

impl From<SiteTierRecord> for TierRecord {
    fn from(r: SiteTierRecord) -> Self {
        TierRecord::Site(r)
    }
}

impl From<SectorTierRecord> for TierRecord {
    fn from(r: SectorTierRecord) -> Self {
        TierRecord::Sector(r)
    }
}

impl From<FacingTierRecord> for TierRecord {
    fn from(r: FacingTierRecord) -> Self {
        TierRecord::Facing(r)
    }
}
