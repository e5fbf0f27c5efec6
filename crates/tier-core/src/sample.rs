//! Deterministic synthetic site/sector networks.
//!
//! Produces realistic-looking input for demos, benchmarks and tests: sites
//! scattered uniformly over a disc around a centre point, each with evenly
//! spaced sector azimuths starting from a random offset.  A fraction of
//! sites can be marked indoor (all sectors at azimuth 0°).
//!
//! The same `(spec, seed)` always yields the same table.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{GeoPoint, Sector};

/// Shape of a generated network.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSpec {
    pub sites:            usize,
    pub sectors_per_site: usize,
    pub center:           GeoPoint,
    /// Radius of the disc the sites are scattered over.
    pub spread_km:        f64,
    /// Probability that a generated site is indoor.
    pub indoor_ratio:     f64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            sites:            10,
            sectors_per_site: 3,
            center:           GeoPoint::new(-6.2000, 106.8166),
            spread_km:        5.0,
            indoor_ratio:     0.0,
        }
    }
}

/// Generate `spec.sites` sites with `spec.sectors_per_site` sectors each.
///
/// Site ids are `SITE001`, `SITE002`, …; sector ids are `A`, `B`, … (falling
/// back to `S<n>` past `Z`).
pub fn generate_network(spec: &SampleSpec, seed: u64) -> Vec<Sector> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let sectors_per_site = spec.sectors_per_site.max(1);
    let mut out = Vec::with_capacity(spec.sites * sectors_per_site);

    for site_no in 1..=spec.sites {
        let site_id = format!("SITE{site_no:03}");

        // sqrt keeps the density uniform over the disc.
        let dist = spec.spread_km * rng.gen_range(0.0_f64..1.0).sqrt();
        let bearing = rng.gen_range(0.0..360.0);
        let pos = spec.center.destination(bearing, dist);
        let lat = round6(pos.lat);
        let lon = round6(pos.lon);

        let indoor = rng.gen_bool(spec.indoor_ratio.clamp(0.0, 1.0));
        let offset: f64 = rng.gen_range(0.0..360.0);
        let step = 360.0 / sectors_per_site as f64;

        for s in 0..sectors_per_site {
            let azimuth = if indoor {
                0.0
            } else {
                // Avoid generating an accidental 0° on an outdoor site.
                let az = (offset + s as f64 * step).rem_euclid(360.0).round();
                if az == 0.0 || az == 360.0 { 1.0 } else { az }
            };
            out.push(Sector::new(site_id.clone(), sector_label(s), lat, lon, azimuth));
        }
    }

    out
}

fn sector_label(i: usize) -> String {
    if i < 26 {
        char::from(b'A' + i as u8).to_string()
    } else {
        format!("S{}", i + 1)
    }
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
