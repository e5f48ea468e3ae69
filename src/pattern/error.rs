// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,
    #[error("Invalid pattern token: {0}")]
    InvalidToken(String),
    #[error("Mask length {mask} does not match pattern length {bytes}")]
    MaskLength { bytes: usize, mask: usize },
}
