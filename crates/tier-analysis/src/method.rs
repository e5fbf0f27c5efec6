//! The `TierMethod` trait, the seam between the driver and the selectors.

use tier_core::SiteIdx;

use crate::{AnalysisContext, TierRecord};

/// Which of the three analyses a method implements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Voronoi,
    BallTree,
    Facing,
}

impl MethodKind {
    /// Prefix used for result file names.
    pub fn label(self) -> &'static str {
        match self {
            MethodKind::Voronoi  => "Site_Voronoi",
            MethodKind::BallTree => "Sector_BallTree",
            MethodKind::Facing   => "Sector_Facing_H2H",
        }
    }

    /// `true` if the method emits one record per site rather than per sector.
    #[inline]
    pub fn is_site_level(self) -> bool {
        matches!(self, MethodKind::Voronoi)
    }
}

/// A 1st-tier selection strategy.
///
/// Implementations hold only their parameters.  All run state lives in the
/// shared [`AnalysisContext`] or on the stack of `analyze_site`, so one
/// method value can be called for many sites at once from different threads.
pub trait TierMethod: Send + Sync {
    fn kind(&self) -> MethodKind;

    /// Analyse one outdoor site.  Site-level methods return exactly one
    /// record; sector-level methods return one record per sector, in the
    /// site's sector order.
    fn analyze_site(&self, ctx: &AnalysisContext<'_>, site: SiteIdx) -> Vec<TierRecord>;
}
