//! Unit tests for tier-spatial.
//!
//! All fixtures are hand-placed points; nothing is loaded from disk.

#[cfg(test)]
mod index {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use tier_core::{GeoPoint, SectorIdx, SectorTable, generate_network, SampleSpec};

    use crate::SectorIndex;

    fn ring() -> (GeoPoint, Vec<GeoPoint>) {
        // Origin plus points due north at 1, 2, 3, 4 km.
        let o = GeoPoint::new(-6.2, 106.8);
        let mut pts = vec![o];
        pts.extend((1..=4).map(|k| o.destination(0.0, k as f64)));
        (o, pts)
    }

    #[test]
    fn empty_index_answers_empty() {
        let idx = SectorIndex::from_points(Vec::new());
        assert!(idx.is_empty());
        let o = GeoPoint::new(0.0, 0.0);
        assert!(idx.k_nearest(o, 5).is_empty());
        assert!(idx.within_radius(o, 100.0).is_empty());
        assert_eq!(idx.nearest_iter(o).count(), 0);
    }

    #[test]
    fn k_nearest_ascending_and_bounded() {
        let (o, pts) = ring();
        let idx = SectorIndex::from_points(pts);
        let hits = idx.k_nearest(o, 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].sector, SectorIdx(0));
        assert_eq!(hits[0].distance_km, 0.0);
        assert_eq!(hits[1].sector, SectorIdx(1));
        assert!((hits[2].distance_km - 2.0).abs() < 1e-6);

        assert_eq!(idx.k_nearest(o, 50).len(), 5);
    }

    #[test]
    fn radius_is_inclusive() {
        let (o, pts) = ring();
        let idx = SectorIndex::from_points(pts.clone());
        let exact = o.distance_km(pts[2]);
        let hits = idx.within_radius(o, exact);
        let ids: Vec<_> = hits.iter().map(|h| h.sector.0).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn radius_query_is_deterministic() {
        let rows = generate_network(&SampleSpec { sites: 200, ..Default::default() }, 9);
        let table = SectorTable::new(rows);
        let idx = SectorIndex::build(&table);
        let o = table.sectors()[17].position;
        let first = idx.within_radius(o, 2.0);
        for _ in 0..5 {
            assert_eq!(idx.within_radius(o, 2.0), first);
        }
    }

    #[test]
    fn matches_brute_force_at_high_latitude() {
        // Euclidean (lat, lon) ordering is badly wrong up here; the unit
        // sphere index must still agree with haversine.
        let mut rng = SmallRng::seed_from_u64(5);
        let pts: Vec<GeoPoint> = (0..400)
            .map(|_| GeoPoint::new(rng.gen_range(69.0..71.0), rng.gen_range(20.0..30.0)))
            .collect();
        let idx = SectorIndex::from_points(pts.clone());
        let o = GeoPoint::new(70.0, 25.0);

        let mut brute: Vec<(f64, u32)> = pts
            .iter()
            .enumerate()
            .map(|(i, p)| (o.distance_km(*p), i as u32))
            .collect();
        brute.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let knn: Vec<u32> = idx.k_nearest(o, 10).iter().map(|h| h.sector.0).collect();
        let expect: Vec<u32> = brute.iter().take(10).map(|b| b.1).collect();
        assert_eq!(knn, expect);

        let within: Vec<u32> = idx.within_radius(o, 40.0).iter().map(|h| h.sector.0).collect();
        let expect: Vec<u32> = brute.iter().filter(|b| b.0 <= 40.0).map(|b| b.1).collect();
        assert_eq!(within, expect);
    }

    #[test]
    fn negative_radius_is_empty() {
        let (o, pts) = ring();
        let idx = SectorIndex::from_points(pts);
        assert!(idx.within_radius(o, -1.0).is_empty());
        assert!(idx.within_radius(o, f64::NAN).is_empty());
    }

    #[test]
    fn build_uses_table_order() {
        let table = SectorTable::new(vec![
            tier_core::Sector::new("A", "1", 0.0, 0.0, 10.0),
            tier_core::Sector::new("B", "1", 0.0, 0.01, 10.0),
        ]);
        let idx = SectorIndex::build(&table);
        assert_eq!(idx.len(), 2);
        let hits = idx.k_nearest(GeoPoint::new(0.0, 0.011), 1);
        assert_eq!(hits[0].sector, SectorIdx(1));
    }
}

#[cfg(test)]
mod delaunay {
    use tier_core::GeoPoint;

    use crate::triangulate;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn triangle_everyone_adjacent() {
        let t = triangulate(&[p(0.0, 0.0), p(0.0, 0.02), p(0.02, 0.01)]);
        assert_eq!(t.triangle_count(), 1);
        assert_eq!(t.neighbors(0), [1, 2]);
        assert_eq!(t.neighbors(1), [0, 2]);
        assert_eq!(t.neighbors(2), [0, 1]);
    }

    #[test]
    fn centre_of_square_touches_all_corners() {
        let pts = [
            p(0.0, 0.0),
            p(0.0, 0.1),
            p(0.1, 0.1),
            p(0.1, 0.0),
            p(0.05, 0.05),
        ];
        let t = triangulate(&pts);
        assert_eq!(t.triangle_count(), 4);
        assert_eq!(t.neighbors(4), [0, 1, 2, 3]);
        // Corner 0 sees its two square neighbors and the centre, not the
        // opposite corner.
        assert_eq!(t.neighbors(0), [1, 3, 4]);
    }

    #[test]
    fn grid_adjacency_is_symmetric() {
        let mut pts = Vec::new();
        for r in 0..6 {
            for c in 0..6 {
                // Slight jitter keeps the grid out of cocircular ties.
                let j = ((r * 7 + c * 13) % 5) as f64 * 1e-4;
                pts.push(p(r as f64 * 0.01 + j, c as f64 * 0.01 - j));
            }
        }
        let t = triangulate(&pts);
        assert!(!t.is_degenerate());
        for i in 0..pts.len() {
            assert!(!t.neighbors(i).is_empty());
            for &j in t.neighbors(i) {
                assert!(t.neighbors(j).contains(&i), "{i}->{j} not mirrored");
            }
        }
        // Planar graph: at most 3n - 6 edges.
        let degree_sum: usize = (0..pts.len()).map(|i| t.neighbors(i).len()).sum();
        assert!(degree_sum / 2 <= 3 * pts.len() - 6);
    }

    #[test]
    fn fewer_than_three_points_is_degenerate() {
        assert!(triangulate(&[]).is_degenerate());
        let t = triangulate(&[p(0.0, 0.0), p(0.0, 0.01)]);
        assert!(t.is_degenerate());
        assert!(t.neighbors(0).is_empty());
        assert!(t.neighbors(9).is_empty());
    }

    #[test]
    fn collinear_is_degenerate() {
        let t = triangulate(&[p(0.0, 0.0), p(0.01, 0.01), p(0.02, 0.02), p(0.03, 0.03)]);
        assert!(t.is_degenerate());
        assert_eq!(t.len(), 4);
        assert!((0..4).all(|i| t.neighbors(i).is_empty()));
    }

    #[test]
    fn duplicates_share_adjacency() {
        let pts = [
            p(0.0, 0.0),
            p(0.0, 0.02),
            p(0.02, 0.01),
            p(0.0, 0.0), // same spot as 0
        ];
        let t = triangulate(&pts);
        assert_eq!(t.neighbors(0), [1, 2]);
        assert_eq!(t.neighbors(3), [1, 2]);
        assert_eq!(t.neighbors(1), [0, 2, 3]);
    }

    #[test]
    fn duplicates_alone_are_degenerate() {
        let t = triangulate(&[p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)]);
        assert!(t.is_degenerate());
    }

    /// Delaunay edges by definition: `(i, j)` is an edge when some triangle
    /// `(i, j, k)` has a circumcircle with no other point strictly inside.
    fn empty_circle_edges(pts: &[GeoPoint]) -> Vec<Vec<usize>> {
        let (cx, cy) = (pts[0].lon, pts[0].lat);
        let xy: Vec<(f64, f64)> = pts.iter().map(|q| (q.lon - cx, q.lat - cy)).collect();
        let n = xy.len();
        let mut adj = vec![std::collections::BTreeSet::new(); n];

        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    let (ax, ay) = xy[i];
                    let (bx, by) = xy[j];
                    let (qx, qy) = xy[k];
                    let d = 2.0 * (ax * (by - qy) + bx * (qy - ay) + qx * (ay - by));
                    if d.abs() < 1e-18 {
                        continue;
                    }
                    let a2 = ax * ax + ay * ay;
                    let b2 = bx * bx + by * by;
                    let q2 = qx * qx + qy * qy;
                    let ux = (a2 * (by - qy) + b2 * (qy - ay) + q2 * (ay - by)) / d;
                    let uy = (a2 * (qx - bx) + b2 * (ax - qx) + q2 * (bx - ax)) / d;
                    let r2 = (ax - ux).powi(2) + (ay - uy).powi(2);

                    let empty = (0..n).filter(|&m| m != i && m != j && m != k).all(|m| {
                        let (mx, my) = xy[m];
                        (mx - ux).powi(2) + (my - uy).powi(2) >= r2 * (1.0 - 1e-9)
                    });
                    if empty {
                        for (a, b) in [(i, j), (j, k), (i, k)] {
                            adj[a].insert(b);
                            adj[b].insert(a);
                        }
                    }
                }
            }
        }
        adj.into_iter().map(|set| set.into_iter().collect()).collect()
    }

    #[test]
    fn matches_empty_circumcircle_reference() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let pts: Vec<GeoPoint> = (0..40)
                .map(|_| p(rng.gen_range(-6.3..-6.1), rng.gen_range(106.7..106.9)))
                .collect();

            let t = triangulate(&pts);
            let expected = empty_circle_edges(&pts);
            for (i, want) in expected.iter().enumerate() {
                assert_eq!(t.neighbors(i), want.as_slice(), "seed {seed}, point {i}");
            }
        }
    }
}
