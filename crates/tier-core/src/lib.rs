//! `tier-core` — foundational types for the `rust_tier` 1st-tier toolkit.
//!
//! This crate is a dependency of every other `tier-*` crate.  It has no
//! `tier-*` dependencies and only a handful of external ones (`rand`,
//! `rustc-hash`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, bearing, angle difference  |
//! | [`ids`]      | `SectorIdx`, `SiteIdx`                                     |
//! | [`sector`]   | `Sector`, `Site`, `SectorTable`, indoor classification     |
//! | [`params`]   | `VoronoiParams`, `BallTreeParams`, `FacingParams`          |
//! | [`sample`]   | Deterministic synthetic site/sector generator             |
//! | [`error`]    | `TierError`, `TierResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types.       |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod sample;
pub mod sector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TierError, TierResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, angle_difference, normalize_azimuth};
pub use ids::{SectorIdx, SiteIdx};
pub use params::{BallTreeParams, FacingParams, VoronoiParams};
pub use sample::{SampleSpec, generate_network};
pub use sector::{Sector, SectorTable, Site, SiteClass};
