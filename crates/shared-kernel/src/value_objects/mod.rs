// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod limit;
pub mod range;

pub use counts::MatchCount;
pub use limit::MatchLimit;
pub use range::CharRange;
