//! Unit tests for item sources and image resolution against real files.

use crate::helpers::write_png;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use scatterboard::error::{LoadError, SourceError};
use scatterboard::loader::{
    FsImageResolver, ImageResolver, ItemSource, ManifestSource, ResourceLoader,
};
use scatterboard::types::ItemDescriptor;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_resolve_relative_path() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "one.png");

    let resolver = FsImageResolver::with_base_dir(dir.path());
    let handle = resolver.resolve("one.png").unwrap();

    assert_eq!(handle.dimensions(), (4, 3));
    assert_eq!(handle.image().width(), 4);
    assert_eq!(handle.source(), "one.png");
}

#[test]
fn test_resolve_file_url() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "two.png");

    let url = format!("file://{}", path.display());
    let handle = FsImageResolver::new().resolve(&url).unwrap();

    assert_eq!(handle.dimensions(), (4, 3));
}

#[test]
fn test_resolve_data_uri() {
    let dir = TempDir::new().unwrap();
    let bytes = fs::read(write_png(dir.path(), "inline.png")).unwrap();
    let uri = format!("data:image/png;base64,{}", STANDARD.encode(bytes));

    let handle = FsImageResolver::new().resolve(&uri).unwrap();

    assert_eq!(handle.dimensions(), (4, 3));
    assert!(handle.source().ends_with("..."));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let resolver = FsImageResolver::with_base_dir(dir.path());
    assert!(matches!(resolver.resolve("absent.png"), Err(LoadError::Io { .. })));
}

#[test]
fn test_garbage_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("junk.png"), b"definitely not a png").unwrap();

    let resolver = FsImageResolver::with_base_dir(dir.path());
    assert!(matches!(resolver.resolve("junk.png"), Err(LoadError::Image(_))));
}

#[test]
fn test_https_refused() {
    assert!(matches!(
        FsImageResolver::new().resolve("https://example.com/1.png"),
        Err(LoadError::UnsupportedScheme(s)) if s == "https"
    ));
}

#[test]
fn test_manifest_file_resolves_beside_itself() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "a.png");
    write_png(dir.path(), "c.png");
    let manifest = dir.path().join("manifest.json");
    fs::write(
        &manifest,
        r#"[
            {"_id": "a", "number": 1, "url": "a.png"},
            {"_id": "b", "number": 2, "url": "missing.png"},
            {"_id": "c", "number": "three", "url": "c.png"}
        ]"#,
    )
    .unwrap();

    let source = ManifestSource::from_path(&manifest);
    let loader = ResourceLoader::new(
        FsImageResolver::with_base_dir(source.base_dir().unwrap()),
        2,
    );
    let report = loader.load_all(source.fetch().unwrap());

    let ids: Vec<_> = report
        .loaded
        .iter()
        .map(|l| l.descriptor.id.as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].descriptor.id.as_str(), "b");
    assert_eq!(report.loaded[1].descriptor.number.to_string(), "three");
}

#[test]
fn test_missing_manifest_is_source_error() {
    let dir = TempDir::new().unwrap();
    let source = ManifestSource::from_path(dir.path().join("manifest.json"));
    assert!(matches!(source.fetch(), Err(SourceError::Io { .. })));
}

#[test]
fn test_vec_source_rejects_duplicates() {
    let source = vec![
        ItemDescriptor::new("x", 1, "1.png"),
        ItemDescriptor::new("x", 2, "2.png"),
    ];
    assert!(matches!(source.fetch(), Err(SourceError::DuplicateId(_))));
}
