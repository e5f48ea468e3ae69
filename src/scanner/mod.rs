// Fri Oct 16 2026 - Alex

pub mod error;
pub mod policy;
pub mod scanner;

pub use error::ScanError;
pub use policy::TailPolicy;
pub use scanner::{Scanner, DEFAULT_RUN_LENGTH};
