//! Byte patterns with wildcard positions
//!
//! A pattern describes a function's instruction-stream fingerprint: a fixed
//! sequence of bytes where some positions must match exactly and others are
//! ignored. Two authoring formats are accepted:
//!
//! - token strings: `"48 8D 0D ?? ?? ?? ??"` (`??` or `?` is a wildcard)
//! - byte slice plus mask string: `&[0x48, 0x8D, 0x0D]` with `"xx?"`

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An immutable masked byte sequence. `Some` positions must match exactly,
/// `None` positions match any byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytePattern {
    bytes: Vec<Option<u8>>,
}

impl BytePattern {
    /// Parse a token string like `"48 8D 0D ?? ?? ?? ??"`.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        for token in pattern.split_whitespace() {
            if token == "??" || token == "?" {
                bytes.push(None);
                continue;
            }

            let value = u8::from_str_radix(token, 16)
                .map_err(|_| Error::InvalidToken(token.to_string()))?;
            bytes.push(Some(value));
        }

        if bytes.is_empty() {
            return Err(Error::EmptyPattern);
        }

        Ok(Self { bytes })
    }

    /// Build a pattern from expected bytes plus a parallel mask string over
    /// `{x, ?}`, where `x` marks a required byte and `?` a wildcard.
    ///
    /// The mask must have exactly one character per pattern byte; anything
    /// else is a configuration error.
    pub fn from_masked(bytes: &[u8], mask: &str) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyPattern);
        }
        if bytes.len() != mask.len() {
            return Err(Error::PatternMaskMismatch {
                pattern: bytes.len(),
                mask: mask.len(),
            });
        }

        let bytes = bytes
            .iter()
            .zip(mask.chars())
            .map(|(&b, m)| match m {
                'x' => Ok(Some(b)),
                '?' => Ok(None),
                other => Err(Error::InvalidMask(other)),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Patterns are never empty; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<u8>] {
        &self.bytes
    }

    /// First required position and its byte value, used by the scanner to
    /// anchor candidate generation. `None` for an all-wildcard pattern.
    pub fn anchor(&self) -> Option<(usize, u8)> {
        self.bytes
            .iter()
            .enumerate()
            .find_map(|(i, b)| b.map(|b| (i, b)))
    }

    /// Whether the pattern matches `window` starting at its first byte.
    /// `window` must be at least `len()` bytes.
    pub fn matches(&self, window: &[u8]) -> bool {
        self.bytes
            .iter()
            .zip(window)
            .all(|(p, b)| p.is_none_or(|p| p == *b))
    }
}

impl fmt::Display for BytePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match byte {
                Some(value) => write!(f, "{:02X}", value)?,
                None => f.write_str("??")?,
            }
        }
        Ok(())
    }
}

impl FromStr for BytePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
