// Fri Oct 16 2026 - Alex

pub mod logging;

pub use logging::{init_logger, scoped_timer, LoggingUtils, ScopedTimer};
