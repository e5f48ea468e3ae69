// Fri Oct 16 2026 - Alex

use crate::pattern::Pattern;
use crate::scanner::{ScanError, TailPolicy};
use crate::utils::scoped_timer;
use log::{debug, trace};

pub const DEFAULT_RUN_LENGTH: usize = 8;

/// Scans a borrowed heap snapshot for repeated-value runs or byte patterns.
///
/// Matches are reported as start offsets, ascending and non-overlapping:
/// once a match is recorded the scan resumes right after it.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'h> {
    heap: &'h [u8],
    tail_policy: TailPolicy,
}

impl<'h> Scanner<'h> {
    pub fn new() -> Self {
        Self {
            heap: &[],
            tail_policy: TailPolicy::default(),
        }
    }

    pub fn with_heap(heap: &'h [u8]) -> Self {
        Self {
            heap,
            tail_policy: TailPolicy::default(),
        }
    }

    pub fn with_tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    pub fn set_heap(&mut self, heap: &'h [u8]) -> &mut Self {
        self.heap = heap;
        self
    }

    pub fn set_tail_policy(&mut self, policy: TailPolicy) -> &mut Self {
        self.tail_policy = policy;
        self
    }

    pub fn heap(&self) -> &'h [u8] {
        self.heap
    }

    pub fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `None` past the end of the heap.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.heap.get(offset).copied()
    }

    pub fn scan_repeating_value_default(&self, value: u8) -> Result<Vec<usize>, ScanError> {
        self.scan_repeating_value(value, DEFAULT_RUN_LENGTH)
    }

    /// Finds every run of `run_length` consecutive `value` bytes.
    pub fn scan_repeating_value(&self, value: u8, run_length: usize) -> Result<Vec<usize>, ScanError> {
        if run_length == 0 {
            return Err(ScanError::InvalidArgument("run length must be at least 1".to_string()));
        }

        let _timer = scoped_timer("scan_repeating_value");
        let mut found = Vec::new();
        let mut index = 0;

        while index < self.heap.len() {
            if self.is_run_at(index, value, run_length) {
                trace!("run of {} x 0x{:02x} at 0x{:x}", run_length, value, index);
                found.push(index);
                index += run_length;
                continue;
            }

            index += 1;
        }

        debug!(
            "repeating value 0x{:02x} x{}: {} matches in {} bytes",
            value,
            run_length,
            found.len(),
            self.heap.len()
        );

        Ok(found)
    }

    /// Finds every occurrence of `pattern`, honoring wildcards.
    pub fn scan_pattern(&self, pattern: &Pattern) -> Result<Vec<usize>, ScanError> {
        if pattern.is_empty() {
            return Err(ScanError::InvalidArgument("pattern must contain at least one element".to_string()));
        }

        let _timer = scoped_timer("scan_pattern");
        let mut found = Vec::new();
        let mut index = 0;

        while index < self.heap.len() {
            if self.is_pattern_at(index, pattern) {
                trace!("pattern match at 0x{:x}", index);
                found.push(index);
                index += pattern.len();
                continue;
            }

            index += 1;
        }

        debug!(
            "pattern [{}] ({:?} tail): {} matches in {} bytes",
            pattern,
            self.tail_policy,
            found.len(),
            self.heap.len()
        );

        Ok(found)
    }

    pub fn scan_pattern_str(&self, text: &str) -> Result<Vec<usize>, ScanError> {
        let pattern = Pattern::parse(text)?;
        self.scan_pattern(&pattern)
    }

    fn is_run_at(&self, index: usize, value: u8, run_length: usize) -> bool {
        (index..index.saturating_add(run_length)).all(|i| self.byte_at(i) == Some(value))
    }

    fn is_pattern_at(&self, index: usize, pattern: &Pattern) -> bool {
        let wildcard_past_end = self.tail_policy.wildcard_past_end();

        pattern.elements().iter().enumerate().all(|(k, element)| {
            let byte = index.checked_add(k).and_then(|i| self.byte_at(i));
            element.matches(byte, wildcard_past_end)
        })
    }
}

impl Default for Scanner<'_> {
    fn default() -> Self {
        Self::new()
    }
}
