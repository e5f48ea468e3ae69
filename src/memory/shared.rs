// Fri Oct 16 2026 - Alex

use crate::scanner::{Scanner, TailPolicy};
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

/// A replaceable heap shared between threads. Scans hold the read lock for
/// their whole duration, so a replacement never lands mid-scan.
#[derive(Clone, Default)]
pub struct SharedHeap {
    inner: Arc<RwLock<Vec<u8>>>,
    tail_policy: TailPolicy,
}

impl SharedHeap {
    pub fn new(heap: Vec<u8>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(heap)),
            tail_policy: TailPolicy::default(),
        }
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    /// Swaps in a new heap and returns the previous one.
    pub fn replace(&self, heap: Vec<u8>) -> Vec<u8> {
        let mut guard = self.inner.write();
        debug!("replacing shared heap ({} -> {} bytes)", guard.len(), heap.len());
        std::mem::replace(&mut *guard, heap)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn scan<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Scanner<'_>) -> R,
    {
        let guard = self.inner.read();
        let scanner = Scanner::with_heap(&guard).with_tail_policy(self.tail_policy);
        f(&scanner)
    }
}
