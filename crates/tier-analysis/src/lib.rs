//! `tier-analysis` — the three 1st-tier selection methods.
//!
//! # Methods
//!
//! | Method                        | Scope  | Output per unit                          |
//! |-------------------------------|--------|------------------------------------------|
//! | [`VoronoiMethod`]             | site   | all Voronoi neighbors within radius      |
//! | [`BallTreeMethod`]            | sector | nearest in-bearing site, distinct per site |
//! | [`FacingMethod`]              | sector | best in-beam sector, Head-to-Head first  |
//!
//! Each method has a free-standing batch entry point ([`voronoi_tiers`],
//! [`balltree_tiers`], [`facing_tiers`]) taking the full sector table, the
//! target site ids, and its parameters.  [`run_analysis`] is the driver-level
//! entry point: it also sorts targets into indoor / outdoor / missing and
//! emits the fixed "Indoor" assignment for indoor sites.
//!
//! "Nothing found" is never an error.  It is carried in the records as
//! [`Outcome::NotFound`] with a [`NotFoundReason`], so one unlucky site never
//! blocks the rest of a batch.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                             |
//! |------------|----------------------------------------------------|
//! | `parallel` | Runs the per-site loop on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tier_analysis::{AnalysisContext, FacingMethod, run_analysis};
//!
//! let ctx = AnalysisContext::new(&table);
//! let method = FacingMethod::new(FacingParams::default())?;
//! let out = run_analysis(&ctx, &method, &targets);
//! ```

pub mod balltree;
pub mod context;
pub mod facing;
pub mod method;
pub mod outcome;
pub mod record;
pub mod report;
pub mod runner;
pub mod voronoi;


pub use balltree::{BallTreeMethod, balltree_tiers};
pub use context::AnalysisContext;
pub use facing::{FacingMethod, facing_tiers, is_head_to_head};
pub use method::{MethodKind, TierMethod};
pub use outcome::{NotFoundReason, Outcome};
pub use record::{
    ALL_SECTORS, FacingNeighbor, FacingTierRecord, INDOOR, IndoorRecord, SectorNeighbor,
    SectorTierRecord, SiteNeighbors, SiteTierRecord, TierRecord, round2,
};
pub use report::H2hReport;
pub use runner::{RunOutput, run_analysis};
pub use voronoi::{VoronoiMethod, voronoi_tiers};
