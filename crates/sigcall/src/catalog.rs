//! Persisted signature catalogs
//!
//! Signatures are authored externally and checked in as data; a catalog
//! file carries one entry per target function plus a version tag so a
//! refreshed set can be told apart after a game update. Patterns persist in
//! token-string form and are parsed on demand.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::pattern::BytePattern;

/// One function's authored signature: diagnostic identifier, pattern
/// string, and optional scan-window lower bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FnSignature {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub start_offset: usize,
}

impl FnSignature {
    pub fn pattern_bytes(&self) -> Result<BytePattern> {
        BytePattern::parse(&self.pattern)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureCatalog {
    pub version: String,
    pub entries: Vec<FnSignature>,
}

impl SignatureCatalog {
    pub fn entry(&self, name: &str) -> Option<&FnSignature> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    /// Like [`SignatureCatalog::entry`], but a missing name is an error.
    pub fn require(&self, name: &str) -> Result<&FnSignature> {
        self.entry(name)
            .ok_or_else(|| crate::error::Error::UnknownSignature(name.to_string()))
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<SignatureCatalog> {
    let content = fs::read_to_string(&path)?;
    let catalog = serde_json::from_str(&content)?;
    Ok(catalog)
}

pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &SignatureCatalog) -> Result<()> {
    let content = serde_json::to_string_pretty(catalog)?;
    fs::write(&path, content)?;
    info!("saved signature catalog to {}", path.as_ref().display());
    Ok(())
}
