//! Planar Delaunay triangulation and the Voronoi adjacency it implies.
//!
//! Two sites are Voronoi neighbors exactly when their cells share a ridge,
//! and every ridge of the Voronoi diagram is dual to one Delaunay edge
//! (hull edges map to the unbounded ridges).  So the neighbor sets are read
//! straight off the triangulation's edge list; no Voronoi vertices are ever
//! materialised.
//!
//! # Plane
//!
//! Points are triangulated in raw `(lon, lat)` degrees.  This is a planar
//! approximation that is fine at metropolitan scale and distorts adjacency
//! towards the poles; no reprojection is done.
//!
//! # Algorithm
//!
//! Bowyer–Watson incremental insertion:
//!
//! 1. Collapse duplicate coordinates to one vertex.
//! 2. Normalise into the unit square and wrap it in a large super-triangle.
//! 3. Insert points one by one; remove every triangle whose circumcircle
//!    contains the point and re-fan the cavity boundary to it.
//! 4. Drop triangles touching a super-triangle vertex.
//!
//! Fewer than three distinct points, or an all-collinear set, has no
//! triangulation: every point gets an empty neighbor list.

use rustc_hash::{FxHashMap, FxHashSet};

use tier_core::GeoPoint;

/// Half-size of the super-triangle relative to the normalised unit square.
const SUPER_SCALE: f64 = 1.0e3;

/// Relative tolerance for the all-collinear check.
const COLLINEAR_EPS: f64 = 1.0e-12;

// ── Triangulation ─────────────────────────────────────────────────────────────

/// Voronoi (Delaunay-edge) adjacency over an input point list.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    /// Sorted neighbor indices per input point.
    neighbors:      Vec<Vec<usize>>,
    triangle_count: usize,
}

impl Triangulation {
    fn empty(n: usize) -> Self {
        Self { neighbors: vec![Vec::new(); n], triangle_count: 0 }
    }

    /// Number of input points (including duplicates).
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Number of finite Delaunay triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangle_count
    }

    /// `true` if the input could not be tessellated (too few distinct
    /// points, or all collinear).
    pub fn is_degenerate(&self) -> bool {
        self.triangle_count == 0
    }

    /// Input indices whose cells share a ridge with point `i`, ascending.
    ///
    /// Points sharing `i`'s exact coordinate are not reported.  Out-of-range
    /// indices yield an empty slice.
    pub fn neighbors(&self, i: usize) -> &[usize] {
        self.neighbors.get(i).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Triangulate `points` in the `(lon, lat)` plane.
pub fn triangulate(points: &[GeoPoint]) -> Triangulation {
    let n = points.len();

    // ── Collapse duplicates ───────────────────────────────────────────────
    let mut vertex_of: Vec<usize> = Vec::with_capacity(n);
    let mut unique: Vec<[f64; 2]> = Vec::new();
    let mut seen: FxHashMap<(u64, u64), usize> = FxHashMap::default();
    for p in points {
        // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
        let key = ((p.lon + 0.0).to_bits(), (p.lat + 0.0).to_bits());
        let v = *seen.entry(key).or_insert_with(|| {
            unique.push([p.lon, p.lat]);
            unique.len() - 1
        });
        vertex_of.push(v);
    }

    let Some((edges, triangle_count)) = bowyer_watson(&unique) else {
        tracing::debug!(points = n, distinct = unique.len(), "degenerate site set, no tessellation");
        return Triangulation::empty(n);
    };

    // ── Vertex adjacency → input-point adjacency ──────────────────────────
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); unique.len()];
    for (a, b) in edges {
        adj[a].push(b);
        adj[b].push(a);
    }

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); unique.len()];
    for (i, &v) in vertex_of.iter().enumerate() {
        members[v].push(i);
    }

    let neighbors = vertex_of
        .iter()
        .map(|&v| {
            let mut out: Vec<usize> = adj[v]
                .iter()
                .flat_map(|&w| members[w].iter().copied())
                .collect();
            out.sort_unstable();
            out
        })
        .collect();

    Triangulation { neighbors, triangle_count }
}

// ── Bowyer–Watson ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Triangle {
    v:  [usize; 3],
    cx: f64,
    cy: f64,
    r2: f64,
}

impl Triangle {
    fn new(v: [usize; 3], pts: &[[f64; 2]]) -> Self {
        let [a, b, c] = [pts[v[0]], pts[v[1]], pts[v[2]]];
        let d = 2.0 * (a[0] * (b[1] - c[1]) + b[0] * (c[1] - a[1]) + c[0] * (a[1] - b[1]));

        if d.abs() < f64::EPSILON {
            // Degenerate sliver: make it "contain" everything so the next
            // insertion carves it out.
            return Self { v, cx: a[0], cy: a[1], r2: f64::INFINITY };
        }

        let a2 = a[0] * a[0] + a[1] * a[1];
        let b2 = b[0] * b[0] + b[1] * b[1];
        let c2 = c[0] * c[0] + c[1] * c[1];
        let cx = (a2 * (b[1] - c[1]) + b2 * (c[1] - a[1]) + c2 * (a[1] - b[1])) / d;
        let cy = (a2 * (c[0] - b[0]) + b2 * (a[0] - c[0]) + c2 * (b[0] - a[0])) / d;
        let r2 = (a[0] - cx).powi(2) + (a[1] - cy).powi(2);
        Self { v, cx, cy, r2 }
    }

    #[inline]
    fn circumcircle_contains(&self, p: [f64; 2]) -> bool {
        (p[0] - self.cx).powi(2) + (p[1] - self.cy).powi(2) < self.r2
    }

    #[inline]
    fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)]
    }
}

#[inline]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// Returns the undirected Delaunay edges between input vertices plus the
/// finite triangle count, or `None` for a degenerate input.
fn bowyer_watson(input: &[[f64; 2]]) -> Option<(Vec<(usize, usize)>, usize)> {
    let n = input.len();
    if n < 3 {
        return None;
    }

    // ── Normalise into the unit square ────────────────────────────────────
    let (mut min_x, mut min_y, mut max_x, mut max_y) =
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in input {
        min_x = min_x.min(p[0]);
        min_y = min_y.min(p[1]);
        max_x = max_x.max(p[0]);
        max_y = max_y.max(p[1]);
    }
    let extent = (max_x - min_x).max(max_y - min_y);
    if !(extent.is_finite() && extent > 0.0) {
        return None;
    }

    let mut pts: Vec<[f64; 2]> = input
        .iter()
        .map(|p| [(p[0] - min_x) / extent, (p[1] - min_y) / extent])
        .collect();

    if all_collinear(&pts) {
        return None;
    }

    // ── Super-triangle (vertices n, n+1, n+2) ─────────────────────────────
    pts.push([-SUPER_SCALE, -SUPER_SCALE]);
    pts.push([SUPER_SCALE, -SUPER_SCALE]);
    pts.push([0.0, SUPER_SCALE]);

    let mut triangles: Vec<Triangle> = vec![Triangle::new([n, n + 1, n + 2], &pts)];
    let mut boundary: FxHashMap<(usize, usize), (usize, usize, u8)> = FxHashMap::default();

    for i in 0..n {
        let p = pts[i];
        boundary.clear();

        // Cavity: every triangle whose circumcircle holds `p`.  Edges seen
        // once are the cavity boundary; edges seen twice are interior.
        // TODO: walk triangle adjacency from the containing triangle instead
        // of scanning every triangle on each insert.
        triangles.retain(|t| {
            if !t.circumcircle_contains(p) {
                return true;
            }
            for (a, b) in t.edges() {
                boundary
                    .entry(edge_key(a, b))
                    .and_modify(|e| e.2 += 1)
                    .or_insert((a, b, 1));
            }
            false
        });

        for &(a, b, count) in boundary.values() {
            if count == 1 {
                triangles.push(Triangle::new([a, b, i], &pts));
            }
        }
    }

    // ── Strip super-triangle, collect edges ───────────────────────────────
    let mut edges: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut finite = 0;
    for t in triangles.iter().filter(|t| t.v.iter().all(|&v| v < n)) {
        finite += 1;
        for (a, b) in t.edges() {
            edges.insert(edge_key(a, b));
        }
    }

    if finite == 0 {
        return None;
    }

    let mut edges: Vec<(usize, usize)> = edges.into_iter().collect();
    edges.sort_unstable();
    Some((edges, finite))
}

fn all_collinear(pts: &[[f64; 2]]) -> bool {
    let p0 = pts[0];
    let far = pts
        .iter()
        .copied()
        .max_by(|a, b| dist2(p0, *a).total_cmp(&dist2(p0, *b)))
        .unwrap_or(p0);
    let len = dist2(p0, far).sqrt();
    if len == 0.0 {
        return true;
    }
    let (dx, dy) = (far[0] - p0[0], far[1] - p0[1]);
    pts.iter().all(|q| {
        let cross = dx * (q[1] - p0[1]) - dy * (q[0] - p0[0]);
        cross.abs() <= COLLINEAR_EPS * len
    })
}

#[inline]
fn dist2(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)
}
