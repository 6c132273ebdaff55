//! Image reference resolution.

use crate::error::{LoadError, LoadResult};
use crate::types::ImageHandle;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::{Path, PathBuf};

/// Turns an image reference into a renderable handle. Called concurrently
/// from loader worker threads.
pub trait ImageResolver: Send + Sync {
    fn resolve(&self, image_ref: &str) -> LoadResult<ImageHandle>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> LoadResult<ImageHandle> + Send + Sync,
{
    fn resolve(&self, image_ref: &str) -> LoadResult<ImageHandle> {
        self(image_ref)
    }
}

/// Resolves local paths, `file://` URLs and base64 `data:` URIs. Remote
/// references are refused.
#[derive(Clone, Debug, Default)]
pub struct FsImageResolver {
    base_dir: Option<PathBuf>,
}

impl FsImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(dir.into()),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn load_file(&self, image_ref: &str, path: &Path) -> LoadResult<ImageHandle> {
        let path = self.resolve_path(path);
        let bytes = std::fs::read(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let image = image::load_from_memory(&bytes)?;
        Ok(ImageHandle::new(image_ref, image))
    }
}

/// Split `data:<mime>;base64,<payload>` and decode the payload.
fn decode_data_uri(uri: &str) -> LoadResult<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| LoadError::MalformedDataUri(truncate(uri)))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| LoadError::MalformedDataUri(truncate(uri)))?;
    if !meta.ends_with(";base64") {
        return Err(LoadError::MalformedDataUri(truncate(uri)));
    }
    Ok(STANDARD.decode(payload.trim())?)
}

/// Keep error messages short when a data URI carries a large payload
fn truncate(s: &str) -> String {
    const MAX: usize = 48;
    match s.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

impl ImageResolver for FsImageResolver {
    fn resolve(&self, image_ref: &str) -> LoadResult<ImageHandle> {
        if image_ref.starts_with("data:") {
            let bytes = decode_data_uri(image_ref)?;
            let image = image::load_from_memory(&bytes)?;
            return Ok(ImageHandle::new(truncate(image_ref), image));
        }

        if let Some(path) = image_ref.strip_prefix("file://") {
            return self.load_file(image_ref, Path::new(path));
        }

        if let Some((scheme, _)) = image_ref.split_once("://") {
            return Err(LoadError::UnsupportedScheme(scheme.to_string()));
        }

        self.load_file(image_ref, Path::new(image_ref))
    }
}
