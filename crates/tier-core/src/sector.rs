//! Sector rows, site grouping, and input classification.
//!
//! A [`SectorTable`] is built once per run from validated input rows and is
//! never mutated afterwards.  Sites are implicit: all rows sharing a
//! `site_id` form one [`Site`], kept in the order the site was first seen.
//! A site's coordinate is its first sector's coordinate.

use rustc_hash::FxHashMap;

use crate::{GeoPoint, SectorIdx, SiteIdx};

// ── Sector ────────────────────────────────────────────────────────────────────

/// One physical antenna sector (one input row).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    pub site_id:   String,
    pub sector_id: String,
    pub position:  GeoPoint,
    /// Antenna direction in degrees.  Interpreted modulo 360.
    pub azimuth:   f64,
    pub tilt:      Option<f64>,
}

impl Sector {
    pub fn new(
        site_id:   impl Into<String>,
        sector_id: impl Into<String>,
        lat:       f64,
        lon:       f64,
        azimuth:   f64,
    ) -> Self {
        Self {
            site_id:   site_id.into(),
            sector_id: sector_id.into(),
            position:  GeoPoint::new(lat, lon),
            azimuth,
            tilt:      None,
        }
    }

    pub fn with_tilt(mut self, tilt: f64) -> Self {
        self.tilt = Some(tilt);
        self
    }

    /// `true` when the azimuth is exactly 0° or exactly 360°, the marker the
    /// input data uses for omni/indoor antennas.
    #[inline]
    pub fn is_omni(&self) -> bool {
        self.azimuth == 0.0 || self.azimuth == 360.0
    }
}

// ── Site ──────────────────────────────────────────────────────────────────────

/// A group of sectors sharing one `site_id`.
#[derive(Clone, Debug)]
pub struct Site {
    pub id:       String,
    /// Representative coordinate (first sector's position).
    pub position: GeoPoint,
    /// Member sectors in input order.  Never empty.
    pub sectors:  Vec<SectorIdx>,
}

/// How a requested target site id relates to the loaded table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SiteClass {
    /// Present, and at least one sector has a real azimuth.
    Outdoor,
    /// Present, and every sector reports azimuth 0° or 360°.
    Indoor,
    /// Not present in the table.
    Missing,
}

// ── SectorTable ───────────────────────────────────────────────────────────────

/// Immutable, site-grouped view over all loaded sectors.
///
/// The whole table, not just the target sites, is what the spatial index and
/// the site tessellation are built over: a neighbor can be any site in the
/// input.
#[derive(Clone, Debug, Default)]
pub struct SectorTable {
    sectors:     Vec<Sector>,
    sector_site: Vec<SiteIdx>,
    sites:       Vec<Site>,
    site_lookup: FxHashMap<String, SiteIdx>,
}

impl SectorTable {
    /// Group `sectors` by `site_id`.  Row order is preserved.
    pub fn new(sectors: Vec<Sector>) -> Self {
        let mut sites: Vec<Site> = Vec::new();
        let mut site_lookup: FxHashMap<String, SiteIdx> = FxHashMap::default();
        let mut sector_site = Vec::with_capacity(sectors.len());

        for (i, sector) in sectors.iter().enumerate() {
            let sector_idx = SectorIdx(i as u32);
            let site_idx = *site_lookup.entry(sector.site_id.clone()).or_insert_with(|| {
                let idx = SiteIdx(sites.len() as u32);
                sites.push(Site {
                    id:       sector.site_id.clone(),
                    position: sector.position,
                    sectors:  Vec::new(),
                });
                idx
            });
            sites[site_idx.index()].sectors.push(sector_idx);
            sector_site.push(site_idx);
        }

        Self { sectors, sector_site, sites, site_lookup }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    // ── Sector access ─────────────────────────────────────────────────────

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    #[inline]
    pub fn sector(&self, idx: SectorIdx) -> &Sector {
        &self.sectors[idx.index()]
    }

    /// The site group a sector belongs to.
    #[inline]
    pub fn site_of(&self, idx: SectorIdx) -> SiteIdx {
        self.sector_site[idx.index()]
    }

    pub fn positions(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.sectors.iter().map(|s| s.position)
    }

    // ── Site access ───────────────────────────────────────────────────────

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    #[inline]
    pub fn site_at(&self, idx: SiteIdx) -> &Site {
        &self.sites[idx.index()]
    }

    pub fn site_idx(&self, site_id: &str) -> Option<SiteIdx> {
        self.site_lookup.get(site_id).copied()
    }

    pub fn site(&self, site_id: &str) -> Option<&Site> {
        self.site_idx(site_id).map(|i| self.site_at(i))
    }

    /// Representative coordinate of `site_id` (its first sector's position).
    pub fn site_position(&self, site_id: &str) -> Option<GeoPoint> {
        self.site(site_id).map(|s| s.position)
    }

    /// Iterate `(SectorIdx, &Sector)` for every sector of `site`.
    pub fn site_sectors<'a>(&'a self, site: &'a Site) -> impl Iterator<Item = (SectorIdx, &'a Sector)> + 'a {
        site.sectors.iter().map(move |&i| (i, self.sector(i)))
    }

    // ── Classification ────────────────────────────────────────────────────

    /// A site is indoor iff every one of its sectors has azimuth exactly 0°
    /// or 360°.  Unknown site ids are not indoor.
    pub fn is_indoor(&self, site_id: &str) -> bool {
        self.site(site_id)
            .is_some_and(|site| site.sectors.iter().all(|&i| self.sector(i).is_omni()))
    }

    pub fn classify(&self, site_id: &str) -> SiteClass {
        match self.site(site_id) {
            None => SiteClass::Missing,
            Some(_) if self.is_indoor(site_id) => SiteClass::Indoor,
            Some(_) => SiteClass::Outdoor,
        }
    }
}

impl From<Vec<Sector>> for SectorTable {
    fn from(sectors: Vec<Sector>) -> Self {
        Self::new(sectors)
    }
}
