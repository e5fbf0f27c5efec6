//! Strongly typed index wrappers.
//!
//! Site and sector identifiers in the input are free-form strings; once a
//! [`SectorTable`](crate::SectorTable) is built, everything downstream refers
//! to rows by position.  These wrappers keep sector rows and site groups from
//! being mixed up while staying `Copy` and directly usable as `Vec` indices.

use std::fmt;

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_idx {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_idx! {
    /// Row position of a sector in a `SectorTable`.
    pub struct SectorIdx(u32);
}

typed_idx! {
    /// Position of a site group in a `SectorTable`, in first-seen order.
    pub struct SiteIdx(u32);
}
