// crates/core/src/counter.rs
use chars_counter_shared_kernel::{CharRange, MatchCount, Result};
use tracing::{debug, trace};

use crate::validation::{validate_limited, validate_range};

/// Counts every position of `text` equal to some entry of `chars`.
///
/// Each entry of `chars` rescans the whole text, so an entry listed twice
/// contributes its occurrences twice. An empty `text` or `chars` yields zero.
///
/// ```
/// use chars_counter_core::count_chars;
/// assert_eq!(count_chars("hello", &['l', 'o']), 3usize);
/// assert_eq!(count_chars("aa", &['a', 'a']), 4usize);
/// ```
#[must_use]
pub fn count_chars(text: &str, chars: &[char]) -> MatchCount {
    let Some(range) = CharRange::full(text.chars().count()) else {
        return MatchCount::ZERO;
    };

    chars
        .iter()
        .map(|&target| {
            let found = occurrences(window(text, range), target);
            trace!(?target, %found, "full scan");
            found
        })
        .sum()
}

/// Counts matches within the inclusive char positions `start_index..=end_index`.
///
/// # Errors
///
/// Returns [`CharsCounterError::OutOfRange`](chars_counter_shared_kernel::CharsCounterError::OutOfRange)
/// when the start is negative, past the text, or after the end, or when the
/// end is not a valid position of the text.
pub fn count_chars_in_range(
    text: &str,
    chars: &[char],
    start_index: isize,
    end_index: isize,
) -> Result<MatchCount> {
    let range = validate_range(text.chars().count(), start_index, end_index)?;
    debug!(start = range.start(), end = range.end(), set = chars.len(), "range scan");

    Ok(chars
        .iter()
        .map(|&target| {
            let found = occurrences(window(text, range), target);
            trace!(?target, %found, "range scan");
            found
        })
        .sum())
}

/// Counts matches within `start_index..=end_index`, returning as soon as the
/// running total equals `limit`.
///
/// Entries of `chars` are the outer loop and positions the inner one, which
/// only matters for where the scan stops. The cap is compared after each
/// match, so `limit == 0` never stops the scan and the full count is returned.
///
/// ```
/// use chars_counter_core::count_chars_with_limit;
/// assert_eq!(count_chars_with_limit("aaaa", &['a'], 0, 3, 2).unwrap(), 2usize);
/// assert_eq!(count_chars_with_limit("aaaa", &['a'], 0, 3, 0).unwrap(), 4usize);
/// ```
///
/// # Errors
///
/// Same as [`count_chars_in_range`], plus an out-of-range error for a
/// negative `limit`.
pub fn count_chars_with_limit(
    text: &str,
    chars: &[char],
    start_index: isize,
    end_index: isize,
    limit: isize,
) -> Result<MatchCount> {
    let (range, limit) = validate_limited(text.chars().count(), start_index, end_index, limit)?;
    debug!(start = range.start(), end = range.end(), %limit, set = chars.len(), "limited scan");

    let mut count = MatchCount::ZERO;
    for &target in chars {
        for ch in window(text, range) {
            if ch == target {
                count.increment();
                if limit.is_reached_by(count) {
                    debug!(%count, "limit reached");
                    return Ok(count);
                }
            }
        }
    }
    Ok(count)
}

#[inline]
fn window(text: &str, range: CharRange) -> impl Iterator<Item = char> + '_ {
    text.chars().skip(range.start()).take(range.width())
}

#[inline]
fn occurrences(positions: impl Iterator<Item = char>, target: char) -> MatchCount {
    MatchCount::from(positions.filter(|&ch| ch == target).count())
}
