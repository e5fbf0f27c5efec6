//! Flat row type written by output backends.

use tier_analysis::{INDOOR, MethodKind, Outcome, TierRecord};

const SITE_COLUMNS: [&str; 5] =
    ["Site ID", "Sector", "1st_Tier", "Average of Distance", "Distance_Unit"];

const FACING_COLUMNS: [&str; 7] = [
    "Site ID",
    "Sector",
    "1st_Tier",
    "1st_Tier_Sector",
    "H2H_Status",
    "Average of Distance",
    "Distance_Unit",
];

const DISTANCE_UNIT: &str = "km";

/// Header row for `kind`'s result file.
pub fn headers(kind: MethodKind) -> &'static [&'static str] {
    match kind {
        MethodKind::Voronoi | MethodKind::BallTree => &SITE_COLUMNS,
        MethodKind::Facing => &FACING_COLUMNS,
    }
}

/// One result line, independent of the method that produced it.
///
/// Not-found records carry their reason text in `first_tier`; indoor records
/// carry `"Indoor"`.  Both have distance `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TierRow {
    pub site_id:           String,
    pub sector:            String,
    /// Neighbor site id(s), comma-joined for site-level rows.
    pub first_tier:        String,
    /// Empty unless a facing neighbor was found.
    pub first_tier_sector: String,
    pub head_to_head:      bool,
    pub distance_km:       f64,
}

impl TierRow {
    /// Field values in [`headers`] order for `kind`.
    pub fn fields(&self, kind: MethodKind) -> Vec<String> {
        let distance = format!("{:.2}", self.distance_km);
        match kind {
            MethodKind::Voronoi | MethodKind::BallTree => vec![
                self.site_id.clone(),
                self.sector.clone(),
                self.first_tier.clone(),
                distance,
                DISTANCE_UNIT.to_owned(),
            ],
            MethodKind::Facing => vec![
                self.site_id.clone(),
                self.sector.clone(),
                self.first_tier.clone(),
                self.first_tier_sector.clone(),
                if self.head_to_head { "Yes" } else { "No" }.to_owned(),
                distance,
                DISTANCE_UNIT.to_owned(),
            ],
        }
    }
}

impl From<&TierRecord> for TierRow {
    fn from(record: &TierRecord) -> Self {
        let mut row = TierRow {
            site_id:           record.site_id().to_owned(),
            sector:            record.sector_id().to_owned(),
            first_tier:        String::new(),
            first_tier_sector: String::new(),
            head_to_head:      false,
            distance_km:       record.distance_km(),
        };
        match record {
            TierRecord::Site(r) => {
                row.first_tier = match &r.outcome {
                    Outcome::Found(n) => n.joined(),
                    Outcome::NotFound(reason) => reason.to_string(),
                };
            }
            TierRecord::Sector(r) => {
                row.first_tier = match &r.outcome {
                    Outcome::Found(n) => n.site_id.clone(),
                    Outcome::NotFound(reason) => reason.to_string(),
                };
            }
            TierRecord::Facing(r) => match &r.outcome {
                Outcome::Found(n) => {
                    row.first_tier = n.site_id.clone();
                    row.first_tier_sector = n.sector_id.clone();
                    row.head_to_head = n.head_to_head;
                }
                Outcome::NotFound(reason) => row.first_tier = reason.to_string(),
            },
            TierRecord::Indoor(_) => row.first_tier = INDOOR.to_owned(),
        }
        row
    }
}
