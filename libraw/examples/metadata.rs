use anyhow::{Context, Result};
use clap::Parser;
use libraw::{ColorDataViews, DngColorViews, Library, Processor, SearchPath, field_text, sys};
use std::path::PathBuf;

/// Print what LibRaw knows about a raw file without developing it.
#[derive(Debug, Parser)]
struct Args {
    /// Raw file to inspect.
    input: PathBuf,

    /// Extra LibRaw library file or directory, tried before the defaults.
    #[arg(long = "library")]
    libraries: Vec<PathBuf>,

    /// Also write the embedded thumbnail to this file.
    #[arg(long)]
    thumb: Option<PathBuf>,

    /// List every supported camera and exit.
    #[arg(long)]
    cameras: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut search = SearchPath::from_env();
    for entry in args.libraries.iter().rev() {
        search.prepend(SearchPath::new().with(entry));
    }
    let library = Library::with_search_path(&search).context("load LibRaw")?;
    println!("LibRaw {}", library.version()?);

    if args.cameras {
        for camera in library.camera_list()? {
            println!("{camera}");
        }
        return Ok(());
    }
    println!("{} cameras supported", library.camera_count()?);

    let mut raw = Processor::with_library(library, sys::LIBRAW_OPTIONS_NONE)?;
    raw.open_file(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    raw.adjust_sizes_info_only()?;

    let data = raw.imgdata();
    println!(
        "Camera: {} {}",
        field_text(&data.idata.make),
        field_text(&data.idata.model)
    );
    println!(
        "Raw size: {}x{}, output {}x{}, flip {}",
        data.sizes.raw_width, data.sizes.raw_height, data.sizes.width, data.sizes.height, data.sizes.flip
    );
    println!(
        "ISO {}, shutter {}s, f/{}, {}mm",
        data.other.iso_speed, data.other.shutter, data.other.aperture, data.other.focal_len
    );
    println!("Colors: {} ({})", data.idata.colors, field_text(&data.idata.cdesc));
    println!("cam_mul: {}", data.color.cam_mul_view());
    println!("rgb_cam:\n{}", data.color.rgb_cam_view());
    if data.idata.dng_version != 0 {
        let dng = &data.color.dng_color[0];
        println!("DNG color matrix:\n{}", dng.colormatrix_view());
        println!("DNG forward matrix:\n{}", dng.forwardmatrix_view());
    }

    let decoder = raw.get_decoder_info()?;
    println!("Decoder: {} (flags {:#x})", decoder.name, decoder.flags);

    if let Some(path) = &args.thumb {
        raw.unpack_thumb()?;
        raw.dcraw_thumb_writer(path)
            .with_context(|| format!("write {}", path.display()))?;
        println!("Thumbnail written to {}", path.display());
    }
    Ok(())
}
