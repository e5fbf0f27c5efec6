//! Per-method analysis parameters.
//!
//! Defaults match the values the analysis tool has always shipped with.
//! Typically filled from CLI flags, optionally overlaid by a JSON parameter
//! file (with the `serde` feature), then passed to the matching method.

use crate::{TierError, TierResult};

/// Parameters for the site-level Voronoi method.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VoronoiParams {
    /// Voronoi neighbors further than this are dropped.  Default: 10 km.
    pub max_radius_km: f64,
}

impl Default for VoronoiParams {
    fn default() -> Self {
        Self { max_radius_km: 10.0 }
    }
}

impl VoronoiParams {
    pub fn validate(&self) -> TierResult<()> {
        positive("max_radius_km", self.max_radius_km)
    }
}

/// Parameters for the sector-level nearest-neighbor (ball tree) method.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BallTreeParams {
    /// Desired candidates per sector.  The index query is widened to
    /// `candidates_per_sector * CANDIDATE_WIDENING` before filtering.
    pub candidates_per_sector: usize,
    /// Default: 7 km.
    pub max_radius_km:         f64,
    /// Maximum |azimuth − bearing| for a candidate to count as "in front"
    /// of the sector.  Default: 60°.
    pub bearing_tolerance_deg: f64,
}

impl BallTreeParams {
    /// Multiplier applied to `candidates_per_sector` for the raw index query.
    pub const CANDIDATE_WIDENING: usize = 5;

    /// Number of nearest sectors pulled from the index per query sector.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.candidates_per_sector.max(1) * Self::CANDIDATE_WIDENING
    }

    pub fn validate(&self) -> TierResult<()> {
        if self.candidates_per_sector == 0 {
            return Err(TierError::Config("candidates_per_sector must be at least 1".into()));
        }
        positive("max_radius_km", self.max_radius_km)?;
        angle("bearing_tolerance_deg", self.bearing_tolerance_deg)
    }
}

impl Default for BallTreeParams {
    fn default() -> Self {
        Self {
            candidates_per_sector: 1,
            max_radius_km:         7.0,
            bearing_tolerance_deg: 60.0,
        }
    }
}

/// Parameters for the sector-level facing / Head-to-Head method.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FacingParams {
    /// Default: 10 km.
    pub max_radius_km:     f64,
    /// Full beam width; candidates must lie within half of it.  Default: 120°.
    pub beam_width_deg:    f64,
    /// Max angle between each sector's azimuth and the bearing to the other
    /// for a Head-to-Head pair.  Default: 30°.
    pub h2h_threshold_deg: f64,
    /// Pairs must be strictly closer than this to be Head-to-Head.
    /// Default: 1.5 km.
    pub h2h_distance_km:   f64,
}

impl Default for FacingParams {
    fn default() -> Self {
        Self {
            max_radius_km:     10.0,
            beam_width_deg:    120.0,
            h2h_threshold_deg: 30.0,
            h2h_distance_km:   1.5,
        }
    }
}

impl FacingParams {
    #[inline]
    pub fn half_beam_deg(&self) -> f64 {
        self.beam_width_deg / 2.0
    }

    pub fn validate(&self) -> TierResult<()> {
        positive("max_radius_km", self.max_radius_km)?;
        positive("h2h_distance_km", self.h2h_distance_km)?;
        if !(self.beam_width_deg.is_finite() && self.beam_width_deg > 0.0 && self.beam_width_deg <= 360.0) {
            return Err(TierError::Config(format!(
                "beam_width_deg must be in (0, 360], got {}",
                self.beam_width_deg
            )));
        }
        angle("h2h_threshold_deg", self.h2h_threshold_deg)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn positive(name: &str, v: f64) -> TierResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(TierError::Config(format!("{name} must be a positive number, got {v}")))
    }
}

fn angle(name: &str, v: f64) -> TierResult<()> {
    if v.is_finite() && (0.0..=180.0).contains(&v) {
        Ok(())
    } else {
        Err(TierError::Config(format!("{name} must be in [0, 180] degrees, got {v}")))
    }
}
