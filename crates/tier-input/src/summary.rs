//! Descriptive statistics of a loaded sector table.

use std::fmt;

use tier_core::SectorTable;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AzimuthStats {
    pub min:  f64,
    pub max:  f64,
    pub mean: f64,
}

/// Shape of the input, shown before an analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSummary {
    pub total_rows:   usize,
    pub unique_sites: usize,
    pub indoor_sites: usize,
    /// `(min, max)` latitude.
    pub lat_range:    (f64, f64),
    /// `(min, max)` longitude.
    pub lon_range:    (f64, f64),
    pub azimuth:      AzimuthStats,
}

impl DataSummary {
    /// `None` for an empty table.
    pub fn from_table(table: &SectorTable) -> Option<Self> {
        let first = table.sectors().first()?;

        let mut lat_range = (first.position.lat, first.position.lat);
        let mut lon_range = (first.position.lon, first.position.lon);
        let mut az_min = first.azimuth;
        let mut az_max = first.azimuth;
        let mut az_sum = 0.0;

        for s in table.sectors() {
            lat_range.0 = lat_range.0.min(s.position.lat);
            lat_range.1 = lat_range.1.max(s.position.lat);
            lon_range.0 = lon_range.0.min(s.position.lon);
            lon_range.1 = lon_range.1.max(s.position.lon);
            az_min = az_min.min(s.azimuth);
            az_max = az_max.max(s.azimuth);
            az_sum += s.azimuth;
        }

        let indoor_sites = table.sites().iter().filter(|s| table.is_indoor(&s.id)).count();

        Some(Self {
            total_rows: table.len(),
            unique_sites: table.site_count(),
            indoor_sites,
            lat_range,
            lon_range,
            azimuth: AzimuthStats { min: az_min, max: az_max, mean: az_sum / table.len() as f64 },
        })
    }
}

impl fmt::Display for DataSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows:         {}", self.total_rows)?;
        writeln!(f, "sites:        {} ({} indoor)", self.unique_sites, self.indoor_sites)?;
        writeln!(f, "latitude:     {:.6} .. {:.6}", self.lat_range.0, self.lat_range.1)?;
        writeln!(f, "longitude:    {:.6} .. {:.6}", self.lon_range.0, self.lon_range.1)?;
        write!(
            f,
            "azimuth:      min {:.1}, max {:.1}, mean {:.1}",
            self.azimuth.min, self.azimuth.max, self.azimuth.mean
        )
    }
}
