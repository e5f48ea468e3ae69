// Fri Oct 16 2026 - Alex

pub mod shared;
pub mod snapshot;

pub use shared::SharedHeap;
pub use snapshot::HeapSnapshot;
