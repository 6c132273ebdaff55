//! Item sources - where the ordered list of descriptors comes from.

use crate::error::{SourceError, SourceResult};
use crate::types::ItemDescriptor;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Supplies the ordered descriptor list for one load cycle.
pub trait ItemSource {
    fn fetch(&self) -> SourceResult<Vec<ItemDescriptor>>;
}

impl ItemSource for Vec<ItemDescriptor> {
    fn fetch(&self) -> SourceResult<Vec<ItemDescriptor>> {
        ensure_unique(self)?;
        Ok(self.clone())
    }
}

/// A JSON manifest: an array of `{ "_id", "number", "url" }` records, the
/// same shape the image API serves.
#[derive(Clone, Debug)]
pub enum ManifestSource {
    File(PathBuf),
    Inline(String),
}

impl ManifestSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        Self::Inline(json.into())
    }

    /// Directory relative image references resolve against
    pub fn base_dir(&self) -> Option<&Path> {
        match self {
            Self::File(path) => path.parent(),
            Self::Inline(_) => None,
        }
    }

    pub fn parse(json: &str) -> SourceResult<Vec<ItemDescriptor>> {
        let descriptors: Vec<ItemDescriptor> = serde_json::from_str(json)?;
        ensure_unique(&descriptors)?;
        Ok(descriptors)
    }
}

impl ItemSource for ManifestSource {
    fn fetch(&self) -> SourceResult<Vec<ItemDescriptor>> {
        let descriptors = match self {
            Self::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::parse(&content)?
            }
            Self::Inline(json) => Self::parse(json)?,
        };
        tracing::debug!(count = descriptors.len(), "Fetched item descriptors");
        Ok(descriptors)
    }
}

fn ensure_unique(descriptors: &[ItemDescriptor]) -> SourceResult<()> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    for d in descriptors {
        if !seen.insert(&d.id) {
            return Err(SourceError::DuplicateId(d.id.clone()));
        }
    }
    Ok(())
}
