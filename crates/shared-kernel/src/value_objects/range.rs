// crates/shared-kernel/src/value_objects/range.rs
use serde::{Deserialize, Serialize};

/// Inclusive, zero-based span of char positions `start..=end`.
///
/// Construction (including deserialization) guarantees `start <= end`;
/// whether the span fits a given text is checked against that text's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCharRange")]
pub struct CharRange {
    start: usize,
    end: usize,
}

#[derive(Deserialize)]
struct RawCharRange {
    start: usize,
    end: usize,
}

impl TryFrom<RawCharRange> for CharRange {
    type Error = String;

    fn try_from(raw: RawCharRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
            .ok_or_else(|| format!("range start {} is after end {}", raw.start, raw.end))
    }
}

impl CharRange {
    pub const fn new(start: usize, end: usize) -> Option<Self> {
        if start <= end { Some(Self { start, end }) } else { None }
    }

    /// Range covering every position of a text of `len` chars, `None` when empty.
    pub const fn full(len: usize) -> Option<Self> {
        match len.checked_sub(1) {
            Some(end) => Some(Self { start: 0, end }),
            None => None,
        }
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of positions covered; never zero. Saturates at `usize::MAX`
    /// for `0..=usize::MAX`, which no text can reach.
    #[inline]
    pub const fn width(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }

    /// `true` when every position lies inside a text of `len` chars.
    #[inline]
    pub const fn fits(&self, len: usize) -> bool {
        self.end < len
    }
}
