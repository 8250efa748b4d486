//! Function locator
//!
//! Combines a byte pattern, the loaded image, and an optional start offset
//! into the absolute address of the match. The pattern is expected to begin
//! exactly at the target function's entry point; that contract belongs to
//! the pattern author and is not verified here.

use tracing::debug;

use crate::error::{Error, Result};
use crate::image::ImageSource;
use crate::pattern::BytePattern;
use crate::scan;

/// Scan `[base + start_offset, base + image_size)` for `pattern`.
///
/// Returns the absolute address of the first match, `Ok(None)` when the
/// pattern does not occur, or [`Error::StartOffsetOutOfRange`] when
/// `start_offset` does not fall inside the image.
pub fn resolve(
    image: &dyn ImageSource,
    pattern: &BytePattern,
    start_offset: usize,
) -> Result<Option<u64>> {
    let size = image.image_size();
    if start_offset >= size {
        return Err(Error::StartOffsetOutOfRange {
            offset: start_offset,
            size,
        });
    }

    let window = &image.bytes()[start_offset..];
    debug!(
        "scanning {:#x} bytes from 0x{:X} for pattern {}",
        window.len(),
        image.base_address() + start_offset as u64,
        pattern
    );

    Ok(scan::find(window, pattern)
        .map(|offset| image.base_address() + (start_offset + offset) as u64))
}
