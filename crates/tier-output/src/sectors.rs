//! Sector table export, readable back by the loader.

use std::path::Path;

use csv::Writer;

use tier_core::Sector;

use crate::OutputResult;

/// Write `sectors` as `Site ID,Sector,Latitude,Longitude,Dir,tilt`.
pub fn write_sectors_csv(path: &Path, sectors: &[Sector]) -> OutputResult<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(["Site ID", "Sector", "Latitude", "Longitude", "Dir", "tilt"])?;
    for s in sectors {
        writer.write_record(&[
            s.site_id.clone(),
            s.sector_id.clone(),
            format!("{:.6}", s.position.lat),
            format!("{:.6}", s.position.lon),
            s.azimuth.to_string(),
            s.tilt.map(|t| t.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    tracing::debug!(path = %path.display(), sectors = sectors.len(), "sector table written");
    Ok(())
}
