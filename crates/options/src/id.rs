//! Synthetic identifiers for series, points and axes.
//!
//! An [Id] is assigned when the option object is constructed and is only used
//! to find the object again inside an already built [Options] tree. It carries
//! no meaning for the charting library and is never written to the JSON
//! output.
//!
//! [Options]: crate::options::Options

use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// A synthetic, process-unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Id(u64);

impl Id {
    /// Returns the next process-unique identifier.
    pub fn next() -> Id {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<u64> for Id {
    fn from(id: u64) -> Id {
        Self(id)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_ids_are_unique() {
        let first = Id::next();
        let second = Id::next();

        assert_ne!(first, second);
    }
}
