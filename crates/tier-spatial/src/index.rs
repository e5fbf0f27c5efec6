//! Spherical proximity index over sector positions.
//!
//! # Layout
//!
//! Each point is stored in an R-tree (via `rstar`) as its 3-D unit-sphere
//! vector.  For two points separated by a central angle θ the Euclidean
//! chord between their vectors is `2·sin(θ/2)`, which increases strictly
//! with θ on `[0, π]`.  So:
//!
//! - ordering by chord length == ordering by great-circle distance, and
//! - "within `r` km" == "chord ≤ `2·sin(r / 2R)`".
//!
//! Neither holds for Euclidean distance in raw `(lat, lon)` degrees, which
//! is why the index does not simply store `[lat, lon]`.
//!
//! Distances handed back to callers are always recomputed with
//! [`GeoPoint::distance_km`] so they agree with every other component.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use tier_core::{EARTH_RADIUS_KM, GeoPoint, SectorIdx, SectorTable};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct PointEntry {
    point: [f64; 3],
    idx:   SectorIdx,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── Neighbor ──────────────────────────────────────────────────────────────────

/// One query hit: an indexed point and its great-circle distance from the
/// query origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub sector:      SectorIdx,
    pub distance_km: f64,
}

// ── SectorIndex ───────────────────────────────────────────────────────────────

/// Read-only nearest-neighbor / radius index over a fixed point set.
///
/// An index built over zero points is valid and answers every query with an
/// empty list.
pub struct SectorIndex {
    positions: Vec<GeoPoint>,
    tree:      RTree<PointEntry>,
}

impl SectorIndex {
    /// Index every sector of `table`; hit ids are the table's `SectorIdx`s.
    pub fn build(table: &SectorTable) -> Self {
        Self::from_points(table.positions())
    }

    /// Index arbitrary points; the i-th point is reported as `SectorIdx(i)`.
    ///
    /// Time complexity: O(N log N) bulk load.
    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        let positions: Vec<GeoPoint> = points.into_iter().collect();
        let entries: Vec<PointEntry> = positions
            .iter()
            .enumerate()
            .map(|(i, p)| PointEntry { point: p.to_unit_vector(), idx: SectorIdx(i as u32) })
            .collect();
        tracing::debug!(points = entries.len(), "building sector index");

        Self { tree: RTree::bulk_load(entries), positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Lazily yield every indexed point in ascending distance from `origin`.
    ///
    /// The origin itself (or any co-located point) comes out first with a
    /// distance of `0.0`; callers that want to skip self-matches filter on
    /// `distance_km > 0.0`.
    pub fn nearest_iter(&self, origin: GeoPoint) -> impl Iterator<Item = Neighbor> + '_ {
        self.tree
            .nearest_neighbor_iter(&origin.to_unit_vector())
            .map(move |e| Neighbor {
                sector:      e.idx,
                distance_km: origin.distance_km(self.positions[e.idx.index()]),
            })
    }

    /// Up to `k` nearest points to `origin`, ascending by distance.
    pub fn k_nearest(&self, origin: GeoPoint, k: usize) -> Vec<Neighbor> {
        let mut hits: Vec<Neighbor> = self.nearest_iter(origin).take(k).collect();
        sort_hits(&mut hits);
        hits
    }

    /// Every point with great-circle distance ≤ `radius_km` from `origin`.
    ///
    /// Results are sorted by `(distance, SectorIdx)`, so repeated queries
    /// return identical vectors.
    pub fn within_radius(&self, origin: GeoPoint, radius_km: f64) -> Vec<Neighbor> {
        if radius_km.is_nan() || radius_km < 0.0 {
            return Vec::new();
        }

        // Pad the chord bound slightly; the exact inclusive cut is applied on
        // the haversine distance below.
        let chord = chord_for_km(radius_km * (1.0 + 1e-9) + 1e-9);
        let mut hits: Vec<Neighbor> = self
            .tree
            .locate_within_distance(origin.to_unit_vector(), chord * chord)
            .map(|e| Neighbor {
                sector:      e.idx,
                distance_km: origin.distance_km(self.positions[e.idx.index()]),
            })
            .filter(|n| n.distance_km <= radius_km)
            .collect();
        sort_hits(&mut hits);
        hits
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Unit-sphere chord length spanning a great-circle arc of `km` kilometres.
fn chord_for_km(km: f64) -> f64 {
    let theta = (km / EARTH_RADIUS_KM).min(std::f64::consts::PI);
    2.0 * (theta * 0.5).sin()
}

fn sort_hits(hits: &mut [Neighbor]) {
    hits.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then(a.sector.cmp(&b.sector))
    });
}
