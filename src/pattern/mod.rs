// Fri Oct 16 2026 - Alex

pub mod error;
pub mod pattern;
pub mod wildcard;

pub use error::PatternError;
pub use pattern::{Pattern, PatternBuilder};
pub use wildcard::PatternByte;
