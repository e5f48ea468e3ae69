// Fri Oct 16 2026 - Alex

use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
