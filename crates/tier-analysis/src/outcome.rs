//! Found / not-found result variant.

use std::fmt;

/// Why a site or sector ended up with no 1st-tier neighbor.
///
/// The [`as_str`](Self::as_str) text is what appears in the neighbor column
/// of persisted results.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NotFoundReason {
    /// Voronoi: no tessellation neighbor survived the radius cut.
    NoNeighbors,
    /// Nothing except the query point itself within the search radius.
    NoCandidatesWithinRadius,
    /// Ball tree: candidates existed but none in front of the sector.
    NoCandidatesInBearingRange,
    /// Facing: candidates existed but none inside the beam.
    NoCandidatesInBeamWidth,
}

impl NotFoundReason {
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundReason::NoNeighbors                => "No neighbors",
            NotFoundReason::NoCandidatesWithinRadius   => "No candidates within radius",
            NotFoundReason::NoCandidatesInBearingRange => "No candidates in bearing range",
            NotFoundReason::NoCandidatesInBeamWidth    => "No candidates in beam width",
        }
    }
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one selection: a neighbor, or the reason there is none.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    NotFound(NotFoundReason),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    #[inline]
    pub fn found(&self) -> Option<&T> {
        match self {
            Outcome::Found(v) => Some(v),
            Outcome::NotFound(_) => None,
        }
    }

    #[inline]
    pub fn reason(&self) -> Option<NotFoundReason> {
        match self {
            Outcome::Found(_) => None,
            Outcome::NotFound(r) => Some(*r),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Found(v) => Outcome::Found(f(v)),
            Outcome::NotFound(r) => Outcome::NotFound(r),
        }
    }
}

impl<T> From<Result<T, NotFoundReason>> for Outcome<T> {
    fn from(r: Result<T, NotFoundReason>) -> Self {
        match r {
            Ok(v) => Outcome::Found(v),
            Err(reason) => Outcome::NotFound(reason),
        }
    }
}
