//! Counting of character-set occurrences within a string.
//!
//! Three operations share one accumulation rule: for every entry of the
//! character set, in order, scan the inspected positions and count each one
//! equal to that entry. Duplicated entries therefore count twice.
//!
//! * [`count_chars`] scans the whole text.
//! * [`count_chars_in_range`] scans an inclusive `start..=end` window.
//! * [`count_chars_with_limit`] scans a window and stops once a cap is hit.
//!
//! Positions are `char` indices, not byte offsets. Callers that may hold
//! absent inputs go through [`CountRequest`].
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod request;
pub mod validation;

pub use chars_counter_shared_kernel::{
    CharRange, CharsCounterError, MatchCount, MatchLimit, Param, RangeViolation, Result,
};
pub use counter::{count_chars, count_chars_in_range, count_chars_with_limit};
pub use request::{CountMode, CountRequest};
