use std::path::PathBuf;

use clap::{Parser, builder::ValueHint};

/// Command-line arguments for libraw-develop.
#[derive(Parser, Debug)]
#[command(
    name = "libraw-develop",
    about = "Develop a camera raw file into a PPM (or TIFF) image with LibRaw.",
    author,
    version
)]
pub struct Cli {
    /// Raw file to develop
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output path (defaults to the input with a .ppm or .tiff extension)
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// LibRaw shared library file or directory, tried before LIBRAW_PATH and the defaults
    #[arg(long = "library", short = 'L', value_hint = ValueHint::AnyPath, value_name = "PATH")]
    pub libraries: Vec<PathBuf>,

    /// Write TIFF instead of PPM
    #[arg(long)]
    pub tiff: bool,

    /// Half-size output, skipping demosaicing
    #[arg(long)]
    pub half_size: bool,

    /// Use the white balance recorded by the camera
    #[arg(long = "camera-wb", short = 'w')]
    pub camera_wb: bool,

    /// Bits per sample in the output
    #[arg(long, default_value_t = 8, value_name = "8|16", value_parser = parse_bps)]
    pub bps: u8,
}

fn parse_bps(value: &str) -> Result<u8, String> {
    match value {
        "8" => Ok(8),
        "16" => Ok(16),
        _ => Err(format!("{value} is not a supported bit depth (8 or 16)")),
    }
}

/// Everything needed to develop one file once the input is known.
#[derive(Debug, Clone)]
pub struct DevelopArgs {
    pub input: PathBuf,
    pub out: Option<PathBuf>,
    pub libraries: Vec<PathBuf>,
    pub tiff: bool,
    pub half_size: bool,
    pub camera_wb: bool,
    pub bps: u8,
}

impl Cli {
    /// `None` when no input was given.
    pub fn into_develop_args(self) -> Option<DevelopArgs> {
        let input = self.input?;
        Some(DevelopArgs {
            input,
            out: self.out,
            libraries: self.libraries,
            tiff: self.tiff,
            half_size: self.half_size,
            camera_wb: self.camera_wb,
            bps: self.bps,
        })
    }
}
