// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};

/// How a pattern scan treats wildcard positions that fall past the end of
/// the heap. Concrete bytes past the end never match under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailPolicy {
    /// A wildcard matches even when its position is past the end.
    #[default]
    Lenient,
    /// Every pattern position must lie inside the heap.
    Strict,
}

impl TailPolicy {
    pub fn wildcard_past_end(&self) -> bool {
        matches!(self, Self::Lenient)
    }
}
