//! `AnalysisContext`: the read-only state shared by every per-site analysis.

use std::sync::OnceLock;

use tier_core::SectorTable;
use tier_spatial::{SectorIndex, Triangulation, triangulate};

/// Immutable per-run context.
///
/// The spatial index and the site tessellation are each built at most once,
/// on first use, and only read afterwards.  A single `&AnalysisContext` can
/// be shared across worker threads.
pub struct AnalysisContext<'a> {
    /// Every loaded sector, not just the target sites.
    pub table: &'a SectorTable,
    index:     OnceLock<SectorIndex>,
    sites:     OnceLock<Triangulation>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(table: &'a SectorTable) -> Self {
        Self { table, index: OnceLock::new(), sites: OnceLock::new() }
    }

    /// Spherical index over all sector positions (ids = `SectorIdx`).
    pub fn index(&self) -> &SectorIndex {
        self.index.get_or_init(|| SectorIndex::build(self.table))
    }

    /// Voronoi adjacency over one representative point per site; point `i`
    /// is `SiteIdx(i)`.
    pub fn site_graph(&self) -> &Triangulation {
        self.sites.get_or_init(|| {
            let points: Vec<_> = self.table.sites().iter().map(|s| s.position).collect();
            let graph = triangulate(&points);
            tracing::debug!(
                sites = points.len(),
                triangles = graph.triangle_count(),
                "site tessellation built"
            );
            graph
        })
    }
}
