//! Typed handles for signature-located functions
//!
//! A [`NativeFn`] pairs a byte pattern with a caller-declared function
//! pointer type. The image is scanned lazily on first use and the outcome
//! is cached for the life of the handle: a handle resolves at most once per
//! process run, whether it succeeds or fails. The declared type is trusted,
//! not verified; it comes from manual reverse engineering.
//!
//! Handles are meant to live in statics, one per target function:
//!
//! ```ignore
//! type GetNameFn = unsafe extern "C" fn(u32) -> *const c_char;
//!
//! static GET_NAME: LazyLock<NativeFn<GetNameFn>> = LazyLock::new(|| {
//!     NativeFn::new("getName", BytePattern::parse("55 8B EC 83 EC ?? A1").unwrap())
//! });
//!
//! let get_name = GET_NAME.resolved(&image)?;
//! let name = unsafe { get_name(id) };
//! ```

use std::marker::PhantomData;
use std::sync::OnceLock;

use tracing::{info, warn};

use crate::catalog::FnSignature;
use crate::error::{Error, Result};
use crate::image::ImageSource;
use crate::locate;
use crate::pattern::BytePattern;

/// Terminal result of the one-shot resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResolveOutcome {
    Found(u64),
    NotFound,
    BadStartOffset { offset: usize, size: usize },
}

/// A lazily-resolved handle to a native function of type `F`.
///
/// `F` must be a function pointer type (`unsafe extern "…" fn(…) -> …`)
/// declaring the target's calling convention, arguments, and return type.
pub struct NativeFn<F> {
    name: String,
    pattern: BytePattern,
    start_offset: usize,
    slot: OnceLock<ResolveOutcome>,
    _ty: PhantomData<F>,
}

impl<F: Copy> NativeFn<F> {
    pub fn new(name: impl Into<String>, pattern: BytePattern) -> Self {
        Self::with_start_offset(name, pattern, 0)
    }

    /// Like [`NativeFn::new`], skipping the first `start_offset` bytes of
    /// the image when scanning.
    pub fn with_start_offset(
        name: impl Into<String>,
        pattern: BytePattern,
        start_offset: usize,
    ) -> Self {
        Self {
            name: name.into(),
            pattern,
            start_offset,
            slot: OnceLock::new(),
            _ty: PhantomData,
        }
    }

    /// Build a handle from a catalog entry. Fails if the persisted pattern
    /// string does not parse.
    pub fn from_signature(signature: &FnSignature) -> Result<Self> {
        Ok(Self::with_start_offset(
            signature.name.clone(),
            signature.pattern_bytes()?,
            signature.start_offset,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the scan exactly once. `OnceLock` serializes racing first calls,
    /// so concurrent threads never trigger a duplicate scan or observe a
    /// partially-written cache.
    fn outcome(&self, image: &dyn ImageSource) -> ResolveOutcome {
        *self.slot.get_or_init(|| {
            match locate::resolve(image, &self.pattern, self.start_offset) {
                Ok(Some(addr)) => {
                    info!("resolved '{}' at 0x{:X}", self.name, addr);
                    ResolveOutcome::Found(addr)
                }
                Ok(None) => {
                    warn!(
                        "no match for '{}' (pattern {}); handle is dead for this run",
                        self.name, self.pattern
                    );
                    ResolveOutcome::NotFound
                }
                Err(Error::StartOffsetOutOfRange { offset, size }) => {
                    warn!(
                        "'{}' misconfigured: start offset {:#x} outside image of size {:#x}",
                        self.name, offset, size
                    );
                    ResolveOutcome::BadStartOffset { offset, size }
                }
                Err(e) => {
                    warn!("failed to resolve '{}': {}", self.name, e);
                    ResolveOutcome::NotFound
                }
            }
        })
    }

    /// Resolve (if not yet attempted) and return the absolute address.
    ///
    /// Once a handle has failed it stays failed; later calls return the
    /// same error without rescanning.
    pub fn address(&self, image: &dyn ImageSource) -> Result<u64> {
        match self.outcome(image) {
            ResolveOutcome::Found(addr) => Ok(addr),
            ResolveOutcome::NotFound => Err(Error::NotFound {
                name: self.name.clone(),
            }),
            ResolveOutcome::BadStartOffset { offset, size } => {
                Err(Error::StartOffsetOutOfRange { offset, size })
            }
        }
    }

    /// Eagerly resolve at startup instead of on first call, for callers
    /// that prefer to fail fast. Shares the one-shot slot with the lazy
    /// path, so a later call never rescans.
    pub fn resolve_now(&self, image: &dyn ImageSource) -> Result<u64> {
        self.address(image)
    }

    /// The invocation guard: yield the typed callable only when resolution
    /// succeeded. An unresolved or failed handle produces an error naming
    /// the function; the call never proceeds through a null or stale
    /// address.
    ///
    /// Calling the returned pointer is `unsafe`; argument and return types
    /// are established entirely by how `F` was declared.
    pub fn resolved(&self, image: &dyn ImageSource) -> Result<F> {
        assert!(
            std::mem::size_of::<F>() == std::mem::size_of::<usize>(),
            "F must be a function pointer type"
        );

        let addr = self.address(image).map_err(|e| match e {
            Error::NotFound { name } => Error::Unresolved { name },
            other => other,
        })?;

        let addr = addr as usize;
        Ok(unsafe { std::mem::transmute_copy::<usize, F>(&addr) })
    }
}
