// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{CharsCounterError, ErrorContext, Param, RangeViolation, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{CharRange, MatchCount, MatchLimit};
