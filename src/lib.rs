// Fri Oct 16 2026 - Alex

pub mod config;
pub mod memory;
pub mod pattern;
pub mod scanner;
pub mod utils;

pub use config::{ConfigError, OutputFormat, ScanConfig};
pub use memory::{HeapSnapshot, SharedHeap};
pub use pattern::{Pattern, PatternBuilder, PatternByte, PatternError};
pub use scanner::{ScanError, Scanner, TailPolicy, DEFAULT_RUN_LENGTH};
