use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use libraw::{Library, OutputBps, Processor, SearchPath, sys};
use tracing::info;

use crate::cli::DevelopArgs;

/// Output path when none is given: the input with its extension replaced.
pub fn default_output(input: &Path, tiff: bool) -> PathBuf {
    input.with_extension(if tiff { "tiff" } else { "ppm" })
}

/// `--library` entries in order, ahead of `LIBRAW_PATH` and the defaults.
pub fn search_path(libraries: &[PathBuf]) -> SearchPath {
    let mut extra = SearchPath::new();
    for entry in libraries {
        extra.push(entry);
    }
    let mut search = SearchPath::from_env();
    search.prepend(extra);
    search
}

pub fn run(args: &DevelopArgs) -> Result<PathBuf> {
    let library = if args.libraries.is_empty() {
        Library::shared()
    } else {
        Library::with_search_path(&search_path(&args.libraries))
    }
    .context("Failed to load LibRaw")?;
    develop_with(library, args)
}

/// open → unpack → process → write, on an already loaded library.
pub fn develop_with(library: Library, args: &DevelopArgs) -> Result<PathBuf> {
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| default_output(&args.input, args.tiff));

    let mut raw = Processor::with_library(library, sys::LIBRAW_OPTIONS_NONE)?;
    raw.set_output_bps(if args.bps == 16 {
        OutputBps::Sixteen
    } else {
        OutputBps::Eight
    })?;
    raw.set_output_tif(args.tiff)?;
    raw.set_half_size(args.half_size);
    raw.set_use_camera_wb(args.camera_wb);

    info!(input = %args.input.display(), "Developing");
    raw.open_file(&args.input)
        .with_context(|| format!("Failed to open raw file {}", args.input.display()))?;
    raw.unpack()
        .with_context(|| format!("Failed to unpack {}", args.input.display()))?;
    raw.dcraw_process()
        .with_context(|| format!("Failed to process {}", args.input.display()))?;
    raw.dcraw_ppm_tiff_writer(&out)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    info!(output = %out.display(), "Developed");
    Ok(out)
}
