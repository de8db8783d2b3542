// crates/core/src/validation.rs
//! Argument checks for the ranged and limited scans.
//!
//! Every check runs before any position is inspected, and the first failing
//! check decides the reported error.

use chars_counter_shared_kernel::{
    CharRange, CharsCounterError, MatchLimit, Param, RangeViolation, Result,
};

/// Validates `start_index..=end_index` against a text of `len` chars.
///
/// Checks, in order: negative start, start past the text, start after end,
/// end past the last position. `end_index == len` is rejected, so an accepted
/// range always lies inside the text and no range fits an empty text.
///
/// # Errors
///
/// Returns [`CharsCounterError::OutOfRange`] naming the first offending argument.
pub fn validate_range(len: usize, start_index: isize, end_index: isize) -> Result<CharRange> {
    let start = non_negative_start(start_index)?;
    span(len, start, start_index, end_index)
}

/// Same as [`validate_range`], with the limit checked right after the start sign.
///
/// # Errors
///
/// Returns [`CharsCounterError::OutOfRange`] naming the first offending argument.
pub fn validate_limited(
    len: usize,
    start_index: isize,
    end_index: isize,
    limit: isize,
) -> Result<(CharRange, MatchLimit)> {
    let start = non_negative_start(start_index)?;
    let limit = non_negative_limit(limit)?;
    let range = span(len, start, start_index, end_index)?;
    Ok((range, limit))
}

fn non_negative_start(start_index: isize) -> Result<usize> {
    usize::try_from(start_index).map_err(|_| {
        CharsCounterError::out_of_range(Param::StartIndex, start_index, RangeViolation::Negative)
    })
}

fn non_negative_limit(limit: isize) -> Result<MatchLimit> {
    usize::try_from(limit)
        .map(MatchLimit::new)
        .map_err(|_| CharsCounterError::out_of_range(Param::Limit, limit, RangeViolation::Negative))
}

fn span(len: usize, start: usize, start_index: isize, end_index: isize) -> Result<CharRange> {
    if start > len {
        return Err(CharsCounterError::out_of_range(
            Param::StartIndex,
            start_index,
            RangeViolation::PastLength { len },
        ));
    }

    // start >= 0 here, so a negative end is caught as "start after end".
    let range = usize::try_from(end_index).ok().and_then(|end| CharRange::new(start, end));
    let Some(range) = range else {
        return Err(CharsCounterError::out_of_range(
            Param::StartIndex,
            start_index,
            RangeViolation::AfterEnd { end: end_index },
        ));
    };

    if !range.fits(len) {
        return Err(CharsCounterError::out_of_range(
            Param::EndIndex,
            end_index,
            RangeViolation::PastLength { len },
        ));
    }

    Ok(range)
}
