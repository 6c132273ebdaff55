//! Headless scatterboard runner.
//!
//! Loads a manifest, resolves its images, places them, optionally replays a
//! script of input events, and prints the resulting render views as JSON.
use anyhow::{Context, Result};
use clap::Parser;
use scatterboard::layout::Placement;
use scatterboard::loader::{FsImageResolver, ItemSource, ManifestSource, ResourceLoader};
use scatterboard::{Board, EventOutcome, InputEvent, ItemId, ItemView, Settings, logging};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "scatterboard", version, about = "Scatter numbered images on a canvas")]
struct Args {
    /// JSON manifest: an array of {"_id", "number", "url"} records
    manifest: PathBuf,
    /// Settings file (overrides the user config location)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,
    /// JSON array of input events to replay after placement
    #[arg(long)]
    events: Option<PathBuf>,
}

#[derive(Serialize)]
struct Output<'a> {
    items: Vec<ItemView>,
    placements: &'a [Placement],
    failed: Vec<ItemId>,
    outcomes: Vec<EventOutcome>,
}

fn read_events(path: &Path) -> Result<Vec<InputEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading event script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("parsing event script {}", path.display()))
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings {}", path.display()))?,
        None => Settings::load(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let source = ManifestSource::from_path(&args.manifest);
    let resolver = match source.base_dir() {
        Some(dir) => FsImageResolver::with_base_dir(dir),
        None => FsImageResolver::new(),
    };
    let loader = ResourceLoader::new(resolver, settings.load_workers);

    let descriptors = source
        .fetch()
        .with_context(|| format!("reading manifest {}", args.manifest.display()))?;
    let report = loader.load_all(descriptors);
    let failed = report
        .failures
        .iter()
        .map(|f| f.descriptor.id.clone())
        .collect();

    let mut board = Board::from_loaded(settings, report.loaded).context("building board")?;

    let outcomes = match &args.events {
        Some(path) => read_events(path)?
            .iter()
            .map(|event| board.handle_event(event))
            .collect(),
        None => Vec::new(),
    };

    let output = Output {
        items: board.render_items(),
        placements: board.placements(),
        failed,
        outcomes,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
