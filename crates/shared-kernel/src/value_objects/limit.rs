// crates/shared-kernel/src/value_objects/limit.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::MatchCount;

/// Cap on the number of matches a limited scan may count.
///
/// The cap is only compared right after a match is recorded, so a count can
/// never equal a limit of zero there: `MatchLimit::new(0)` never stops a scan
/// early and the scan returns the full count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchLimit(usize);

impl MatchLimit {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// `true` when this limit can never end a scan early.
    #[inline]
    pub const fn is_uncapped(self) -> bool {
        self.0 == 0
    }

    /// Checks a count that was just incremented against the cap.
    #[inline]
    pub const fn is_reached_by(self, count: MatchCount) -> bool {
        count.value() == self.0
    }
}

impl From<usize> for MatchLimit {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MatchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
