//! Item sources and parallel image resolution.
//!
//! Each image reference resolves independently on a small pool of scoped
//! worker threads. Results arrive in completion order, tagged with their
//! source index, and are put back into source order before anything
//! downstream sees them. Failed references are logged and left out; they
//! never hold up the rest of the batch.
//!
//! ## Modules
//!
//! - `source` - `ItemSource` trait and the JSON manifest source
//! - `resolver` - `ImageResolver` trait and the filesystem resolver

mod resolver;
mod source;

pub use resolver::{FsImageResolver, ImageResolver};
pub use source::{ItemSource, ManifestSource};

use crate::error::LoadError;
use crate::profile_scope;
use crate::types::{ItemDescriptor, LoadedItem};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;

/// A descriptor whose image could not be resolved.
#[derive(Debug)]
pub struct LoadFailure {
    /// Position in the source list
    pub index: usize,
    pub descriptor: ItemDescriptor,
    pub error: LoadError,
}

/// Outcome of one load cycle: every resolved item in source order, plus the
/// failures.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedItem>,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn total(&self) -> usize {
        self.loaded.len() + self.failures.len()
    }
}

pub struct ResourceLoader<S> {
    resolver: S,
    workers: usize,
}

impl<S: ImageResolver> ResourceLoader<S> {
    pub fn new(resolver: S, workers: usize) -> Self {
        Self {
            resolver,
            workers: workers.max(1),
        }
    }

    /// Resolve every descriptor and wait for all of them.
    pub fn load_all(&self, descriptors: Vec<ItemDescriptor>) -> LoadReport {
        profile_scope!("load_all");

        let total = descriptors.len();
        if total == 0 {
            return LoadReport::default();
        }

        let jobs = Mutex::new(descriptors.into_iter().enumerate());
        let (tx, rx) = mpsc::channel();
        let workers = self.workers.min(total);

        thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let jobs = &jobs;
                let resolver = &self.resolver;
                scope.spawn(move || {
                    loop {
                        let Some((index, descriptor)) = jobs.lock().next() else {
                            break;
                        };
                        let result = panic::catch_unwind(AssertUnwindSafe(|| {
                            resolver.resolve(&descriptor.image_ref)
                        }))
                        .unwrap_or_else(|_| Err(LoadError::Panicked(descriptor.image_ref.clone())));

                        if tx.send((index, descriptor, result)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(tx);

        let mut loaded = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for (index, descriptor, result) in rx {
            match result {
                Ok(image) => loaded.push((index, LoadedItem { descriptor, image })),
                Err(error) => {
                    tracing::warn!(
                        id = %descriptor.id,
                        image_ref = %descriptor.image_ref,
                        error = %error,
                        "Failed to load image, skipping item"
                    );
                    failures.push(LoadFailure {
                        index,
                        descriptor,
                        error,
                    });
                }
            }
        }

        loaded.sort_unstable_by_key(|(index, _)| *index);
        failures.sort_unstable_by_key(|f| f.index);

        tracing::info!(
            total,
            loaded = loaded.len(),
            failed = failures.len(),
            workers,
            "Image loading finished"
        );

        LoadReport {
            loaded: loaded.into_iter().map(|(_, item)| item).collect(),
            failures,
        }
    }
}
