use std::ffi::{c_int, c_uint};

/// Major version the layouts in this crate were written against.
pub const LIBRAW_MAJOR_VERSION: c_int = 0;
/// Minor version the layouts in this crate were written against.
pub const LIBRAW_MINOR_VERSION: c_int = 20;

// LibRaw_errors
pub const LIBRAW_SUCCESS: c_int = 0;
pub const LIBRAW_UNSPECIFIED_ERROR: c_int = -1;
pub const LIBRAW_FILE_UNSUPPORTED: c_int = -2;
pub const LIBRAW_REQUEST_FOR_NONEXISTENT_IMAGE: c_int = -3;
pub const LIBRAW_OUT_OF_ORDER_CALL: c_int = -4;
pub const LIBRAW_NO_THUMBNAIL: c_int = -5;
pub const LIBRAW_UNSUPPORTED_THUMBNAIL: c_int = -6;
pub const LIBRAW_INPUT_CLOSED: c_int = -7;
pub const LIBRAW_NOT_IMPLEMENTED: c_int = -8;
pub const LIBRAW_UNSUFFICIENT_MEMORY: c_int = -100007;
pub const LIBRAW_DATA_ERROR: c_int = -100008;
pub const LIBRAW_IO_ERROR: c_int = -100009;
pub const LIBRAW_CANCELLED_BY_CALLBACK: c_int = -100010;
pub const LIBRAW_BAD_CROP: c_int = -100011;
pub const LIBRAW_TOO_BIG: c_int = -100012;
pub const LIBRAW_MEMPOOL_OVERFLOW: c_int = -100013;

/// Mirrors the `LIBRAW_FATAL_ERROR` macro: codes below this leave the
/// processor unusable until `libraw_recycle`.
pub const LIBRAW_FATAL_ERROR_THRESHOLD: c_int = -100000;

// libraw_init flags
pub const LIBRAW_OPTIONS_NONE: c_uint = 0;
pub const LIBRAW_OPIONS_NO_MEMERR_CALLBACK: c_uint = 1;
pub const LIBRAW_OPIONS_NO_DATAERR_CALLBACK: c_uint = 1 << 1;

// LibRaw_image_formats
pub const LIBRAW_IMAGE_JPEG: c_uint = 1;
pub const LIBRAW_IMAGE_BITMAP: c_uint = 2;

// LibRaw_thumbnail_formats
pub const LIBRAW_THUMBNAIL_UNKNOWN: c_uint = 0;
pub const LIBRAW_THUMBNAIL_JPEG: c_uint = 1;
pub const LIBRAW_THUMBNAIL_BITMAP: c_uint = 2;
pub const LIBRAW_THUMBNAIL_BITMAP16: c_uint = 3;
pub const LIBRAW_THUMBNAIL_LAYER: c_uint = 4;
pub const LIBRAW_THUMBNAIL_ROLLEI: c_uint = 5;

// LibRaw_runtime_capabilities
pub const LIBRAW_CAPS_RAWSPEED: c_uint = 1;
pub const LIBRAW_CAPS_DNGSDK: c_uint = 1 << 1;
pub const LIBRAW_CAPS_GPRSDK: c_uint = 1 << 2;
pub const LIBRAW_CAPS_UNICODEPATHS: c_uint = 1 << 3;
pub const LIBRAW_CAPS_X3FTOOLS: c_uint = 1 << 4;
pub const LIBRAW_CAPS_RPI6BY9: c_uint = 1 << 5;
