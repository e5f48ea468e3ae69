// Fri Oct 16 2026 - Alex

use crate::scanner::{ScanError, Scanner};
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

enum SnapshotData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// A raw heap dump, either memory-mapped from disk or held in memory.
pub struct HeapSnapshot {
    data: SnapshotData,
    path: Option<PathBuf>,
}

impl HeapSnapshot {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        // Zero-length maps fail on some platforms.
        let data = if size == 0 {
            SnapshotData::Owned(Vec::new())
        } else {
            // SAFETY: the map is read-only; the dump must not be truncated while mapped.
            SnapshotData::Mapped(unsafe { Mmap::map(&file) }?)
        };

        debug!("opened heap snapshot {} ({} bytes)", path.display(), size);

        Ok(Self {
            data,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            data: SnapshotData::Owned(bytes),
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.data {
            SnapshotData::Mapped(mmap) => mmap.as_ref(),
            SnapshotData::Owned(bytes) => bytes.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::with_heap(self.as_slice())
    }
}

impl AsRef<[u8]> for HeapSnapshot {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn temp_path(tag: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!("heap_scanner_{}_{}_{}.bin", tag, std::process::id(), n))
    }

    #[test]
    fn test_open_maps_file_contents() {
        let path = temp_path("snapshot");
        fs::write(&path, [0xCC, 0xCC, 0xCC, 0xCC, 0x01, 0xCC, 0xCC]).unwrap();

        let snapshot = HeapSnapshot::open(&path).unwrap();
        assert_eq!(snapshot.len(), 7);
        assert_eq!(snapshot.path(), Some(path.as_path()));
        assert_eq!(snapshot.scanner().scan_repeating_value(0xCC, 2).unwrap(), vec![0, 2, 5]);

        drop(snapshot);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_empty_file() {
        let path = temp_path("empty");
        fs::write(&path, [0u8; 0]).unwrap();

        let snapshot = HeapSnapshot::open(&path).unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.scanner().scan_repeating_value(0, 1).unwrap().is_empty());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_open_missing_file() {
        let path = temp_path("missing");
        assert!(matches!(HeapSnapshot::open(&path), Err(ScanError::Io(_))));
    }

    #[test]
    fn test_from_vec() {
        let snapshot = HeapSnapshot::from_vec(vec![1, 2, 3]);
        assert_eq!(snapshot.as_slice(), &[1, 2, 3]);
        assert!(snapshot.path().is_none());
    }
}
