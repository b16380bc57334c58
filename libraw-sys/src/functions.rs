//! Signatures of the LibRaw C entry points.
//!
//! Symbols are looked up by name at runtime; each alias below is the type an
//! address must be cast to before calling it. The symbol each alias belongs
//! to is listed in its doc comment.

use crate::types::{libraw_data_t, libraw_decoder_info_t, libraw_processed_image_t};
use std::ffi::{c_char, c_float, c_int, c_uint, c_void};

/// `libraw_data_t *libraw_init(unsigned int flags);`
pub type InitFn = unsafe extern "C" fn(flags: c_uint) -> *mut libraw_data_t;

/// `void libraw_<op>(libraw_data_t *);`
///
/// `close`, `recycle`, `recycle_datastream`, `free_image`.
pub type VoidFn = unsafe extern "C" fn(data: *mut libraw_data_t);

/// `int libraw_<op>(libraw_data_t *);`
///
/// `unpack`, `unpack_thumb`, `raw2image`, `adjust_sizes_info_only`,
/// `subtract_black`, `dcraw_process`.
pub type StatusFn = unsafe extern "C" fn(data: *mut libraw_data_t) -> c_int;

/// `int libraw_<op>(libraw_data_t *, const char *);`
///
/// `open_file`, `dcraw_ppm_tiff_writer`, `dcraw_thumb_writer`.
pub type PathFn = unsafe extern "C" fn(data: *mut libraw_data_t, path: *const c_char) -> c_int;

/// `int libraw_open_buffer(libraw_data_t *, const void *buffer, size_t size);`
pub type OpenBufferFn =
    unsafe extern "C" fn(data: *mut libraw_data_t, buffer: *const c_void, size: usize) -> c_int;

/// `int libraw_get_decoder_info(libraw_data_t *, libraw_decoder_info_t *);`
pub type GetDecoderInfoFn =
    unsafe extern "C" fn(data: *mut libraw_data_t, info: *mut libraw_decoder_info_t) -> c_int;

/// `const char *libraw_unpack_function_name(libraw_data_t *);`
pub type UnpackFunctionNameFn = unsafe extern "C" fn(data: *mut libraw_data_t) -> *const c_char;

/// `int libraw_COLOR(libraw_data_t *, int row, int col);`
pub type ColorFn = unsafe extern "C" fn(data: *mut libraw_data_t, row: c_int, col: c_int) -> c_int;

/// `void libraw_set_<param>(libraw_data_t *, int value);`
pub type SetIntFn = unsafe extern "C" fn(data: *mut libraw_data_t, value: c_int);

/// `void libraw_set_bright(libraw_data_t *, float value);`
pub type SetFloatFn = unsafe extern "C" fn(data: *mut libraw_data_t, value: c_float);

/// `void libraw_set_<param>(libraw_data_t *, int index, float value);`
///
/// `set_user_mul`, `set_gamma`.
pub type SetIndexedFloatFn =
    unsafe extern "C" fn(data: *mut libraw_data_t, index: c_int, value: c_float);

/// `int libraw_get_<value>(libraw_data_t *);`
pub type GetIntFn = unsafe extern "C" fn(data: *mut libraw_data_t) -> c_int;

/// `float libraw_get_<value>(libraw_data_t *, int index);`
pub type GetIndexedFloatFn = unsafe extern "C" fn(data: *mut libraw_data_t, index: c_int) -> c_float;

/// `float libraw_get_rgb_cam(libraw_data_t *, int index1, int index2);`
pub type GetRgbCamFn =
    unsafe extern "C" fn(data: *mut libraw_data_t, index1: c_int, index2: c_int) -> c_float;

/// `libraw_processed_image_t *libraw_dcraw_make_mem_<image|thumb>(libraw_data_t *, int *errc);`
pub type MakeMemImageFn = unsafe extern "C" fn(
    data: *mut libraw_data_t,
    errc: *mut c_int,
) -> *mut libraw_processed_image_t;

/// `void libraw_dcraw_clear_mem(libraw_processed_image_t *);`
pub type ClearMemFn = unsafe extern "C" fn(image: *mut libraw_processed_image_t);

/// `const char *libraw_strerror(int errorcode);`
pub type StrErrorFn = unsafe extern "C" fn(code: c_int) -> *const c_char;

/// `const char *libraw_version(void);`
pub type VersionFn = unsafe extern "C" fn() -> *const c_char;

/// `int libraw_versionNumber(void);`
pub type VersionNumberFn = unsafe extern "C" fn() -> c_int;

/// `unsigned libraw_capabilities(void);`
pub type CapabilitiesFn = unsafe extern "C" fn() -> c_uint;

/// `int libraw_cameraCount(void);`
pub type CameraCountFn = unsafe extern "C" fn() -> c_int;

/// `const char **libraw_cameraList(void);`
pub type CameraListFn = unsafe extern "C" fn() -> *const *const c_char;
