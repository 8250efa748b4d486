//! # sigcall
//!
//! Locate undocumented native functions inside a loaded binary image by
//! byte signature, and call them through strongly-typed handles.
//!
//! This crate provides:
//! - Masked byte patterns (`"48 8D 0D ?? ?? ?? ??"` or bytes + `"x?x"` mask)
//! - A memchr-anchored scanner over the image
//! - A locator turning pattern + start offset into an absolute address
//! - [`NativeFn`], a typed handle that resolves once per process run and
//!   refuses to call through an unresolved address
//! - JSON signature catalogs for externally-authored pattern sets
//!
//! Scanning is read-only and happens at most once per handle; a handle that
//! fails to resolve stays failed until the process restarts, surfacing an
//! error that names the broken signature.

pub mod catalog;
pub mod error;
pub mod func;
pub mod image;
pub mod locate;
pub mod pattern;
pub mod scan;

pub use catalog::{FnSignature, SignatureCatalog, load_catalog, save_catalog};
pub use error::{Error, Result};
pub use func::NativeFn;
pub use image::{ImageSource, LoadedImage};
#[cfg(target_os = "windows")]
pub use image::main_module;
pub use pattern::BytePattern;
