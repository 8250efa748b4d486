//! In-memory image for tests
//!
//! Carries an arbitrary fake base address and counts how many times the
//! bytes are handed out, so tests can assert a handle scans at most once.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::image::ImageSource;

pub struct MockImage {
    base: u64,
    bytes: Vec<u8>,
    reads: AtomicUsize,
}

impl MockImage {
    pub fn new(base: u64, bytes: Vec<u8>) -> Self {
        Self {
            base,
            bytes,
            reads: AtomicUsize::new(0),
        }
    }

    /// Number of times `bytes()` was called, i.e. how many scans touched
    /// this image.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ImageSource for MockImage {
    fn base_address(&self) -> u64 {
        self.base
    }

    fn image_size(&self) -> usize {
        self.bytes.len()
    }

    fn bytes(&self) -> &[u8] {
        self.reads.fetch_add(1, Ordering::SeqCst);
        &self.bytes
    }
}
