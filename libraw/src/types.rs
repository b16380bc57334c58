use crate::sys;
use std::ffi::{c_char, c_int, c_uint};
use std::fmt;

pub use sys::{
    libraw_colordata_t as ColorData, libraw_data_t as ImageData,
    libraw_dng_color_t as DngColor, libraw_image_sizes_t as ImageSizes,
    libraw_imgother_t as ImageOther, libraw_iparams_t as ImageParams,
    libraw_output_params_t as OutputParams, libraw_rawdata_t as RawData,
    libraw_thumbnail_t as Thumbnail,
};

/// Library version as reported by `libraw_versionNumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    /// The series the struct layouts in `libraw_sys` mirror.
    pub const SUPPORTED: Version = Version {
        major: sys::LIBRAW_MAJOR_VERSION as u8,
        minor: sys::LIBRAW_MINOR_VERSION as u8,
        patch: 0,
    };

    /// Decode LibRaw's packed `(major << 16) | (minor << 8) | patch`.
    pub fn from_number(number: c_int) -> Self {
        Self {
            major: ((number >> 16) & 0xff) as u8,
            minor: ((number >> 8) & 0xff) as u8,
            patch: (number & 0xff) as u8,
        }
    }

    pub fn number(self) -> c_int {
        (c_int::from(self.major) << 16) | (c_int::from(self.minor) << 8) | c_int::from(self.patch)
    }

    /// Whether the mirrored struct layouts match this version.
    pub fn is_supported(self) -> bool {
        self.major == Self::SUPPORTED.major && self.minor == Self::SUPPORTED.minor
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Result of `libraw_get_decoder_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderInfo {
    pub name: String,
    /// `LIBRAW_DECODER_*` flag bits.
    pub flags: c_uint,
}

/// Format of a memory image produced by `dcraw_make_mem_image` or
/// `dcraw_make_mem_thumb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Bitmap,
    Unknown(c_uint),
}

impl From<c_uint> for ImageKind {
    fn from(value: c_uint) -> Self {
        match value {
            sys::LIBRAW_IMAGE_JPEG => Self::Jpeg,
            sys::LIBRAW_IMAGE_BITMAP => Self::Bitmap,
            _ => Self::Unknown(value),
        }
    }
}

/// Output colorspace selector for `set_output_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum OutputColor {
    Raw = 0,
    #[default]
    Srgb = 1,
    Adobe = 2,
    WideGamut = 3,
    ProPhoto = 4,
    Xyz = 5,
    Aces = 6,
}

/// Bits per sample written by the dcraw writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputBps {
    #[default]
    Eight,
    Sixteen,
}

impl OutputBps {
    pub fn bits(self) -> c_int {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }
}

/// Decode a fixed-size C text field (make, model, ...) up to its first NUL.
pub fn field_text(field: &[c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}
