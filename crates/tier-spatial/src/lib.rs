//! `tier-spatial` — proximity queries and site adjacency.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`index`]    | `SectorIndex` (R-tree on the unit sphere), `Neighbor`       |
//! | [`delaunay`] | `triangulate`, `Triangulation` (Voronoi ridge adjacency)    |
//!
//! Both structures are built once per run and only read afterwards, so a
//! shared `&SectorIndex` / `&Triangulation` can be queried from any number
//! of threads without locking.

pub mod delaunay;
pub mod index;

#[cfg(test)]
mod tests;

pub use delaunay::{Triangulation, triangulate};
pub use index::{Neighbor, SectorIndex};
