//! Access to the loaded executable image
//!
//! The subsystem only ever observes the scanned memory; nothing here writes
//! to the target image. On Windows the running executable's main module can
//! be queried directly; everything else supplies an [`ImageSource`] of its
//! own (tests use the in-memory mock).

#[cfg(target_os = "windows")]
mod process;

#[cfg(test)]
pub mod mock;

#[cfg(target_os = "windows")]
pub use process::main_module;

#[cfg(test)]
pub use mock::MockImage;

/// A readable view of a loaded binary image: its load address, its size,
/// and its bytes.
pub trait ImageSource {
    /// Runtime load address of the image.
    fn base_address(&self) -> u64;

    /// Size of the image in bytes.
    fn image_size(&self) -> usize;

    /// The image contents. Must be exactly `image_size()` bytes.
    fn bytes(&self) -> &[u8];
}

/// An image mapped into the current process.
pub struct LoadedImage {
    base: u64,
    bytes: &'static [u8],
}

impl LoadedImage {
    /// Build a view over `size` bytes starting at `base`.
    ///
    /// # Safety
    ///
    /// The range `[base, base + size)` must stay mapped and readable for
    /// the life of the process. For a main executable module this holds
    /// until process exit.
    pub unsafe fn from_raw(base: u64, size: usize) -> Self {
        let bytes = unsafe { std::slice::from_raw_parts(base as *const u8, size) };
        Self { base, bytes }
    }
}

impl ImageSource for LoadedImage {
    fn base_address(&self) -> u64 {
        self.base
    }

    fn image_size(&self) -> usize {
        self.bytes.len()
    }

    fn bytes(&self) -> &[u8] {
        self.bytes
    }
}
