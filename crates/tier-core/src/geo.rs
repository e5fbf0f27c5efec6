//! Geographic coordinate type and bearing/angle primitives.
//!
//! Every distance in the toolkit goes through [`GeoPoint::distance_km`]
//! (haversine on a sphere of radius [`EARTH_RADIUS_KM`]).  The spatial index,
//! the Voronoi radius cut-off and the H2H distance check all agree on this
//! one model, so a candidate accepted by a radius query is never rejected by
//! a later distance comparison against the same radius.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Initial great-circle bearing from `self` towards `target`, in
    /// degrees clockwise from north, normalised into `[0, 360)`.
    ///
    /// The bearing of a point to itself is `0.0`; callers drop zero-distance
    /// matches before bearings are used for any decision.
    pub fn bearing_to(self, target: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = target.lat.to_radians();
        let d_lon = (target.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        normalize_azimuth(y.atan2(x).to_degrees())
    }

    /// The point reached by travelling `distance_km` along the great circle
    /// that leaves `self` at `bearing_deg`.
    ///
    /// Used by the synthetic network generator and by tests that need to
    /// place a site at an exact bearing/distance from another.
    pub fn destination(self, bearing_deg: f64, distance_km: f64) -> GeoPoint {
        let delta = distance_km / EARTH_RADIUS_KM;
        let theta = bearing_deg.to_radians();
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        // Wrap longitude back into [-180, 180).
        let lon_deg = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
        GeoPoint::new(lat2.to_degrees(), lon_deg)
    }

    /// Position on the unit sphere as `[x, y, z]`.
    ///
    /// Euclidean (chord) distance between two such vectors is monotonic in
    /// great-circle distance, which is what lets an ordinary R-tree answer
    /// spherical nearest/radius queries exactly.
    #[inline]
    pub fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Reduce an angle in degrees into `[0, 360)`.  `360.0` maps to `0.0`.
#[inline]
pub fn normalize_azimuth(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Smallest absolute separation between two directions, in `[0, 180]`.
///
/// ```
/// use tier_core::angle_difference;
///
/// assert_eq!(angle_difference(350.0, 10.0), 20.0);
/// assert_eq!(angle_difference(0.0, 360.0), 0.0);
/// ```
#[inline]
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = (normalize_azimuth(a) - normalize_azimuth(b)).abs();
    diff.min(360.0 - diff)
}
