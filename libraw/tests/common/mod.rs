//! A fake LibRaw made of `extern "C"` functions that record every call.
//!
//! State is thread-local; the test harness runs each test on its own thread.

#![allow(dead_code)]

use libraw::sys;
use libraw::{Error, Result, SymbolSource};
use std::alloc::{Layout, alloc_zeroed, dealloc};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::{CStr, c_char, c_float, c_int, c_uint, c_void};
use std::ptr::{self, NonNull};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(Vec<u8>),
    Int(c_int),
    Float(f32),
    Bytes(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: &'static str,
    /// Address of the `libraw_data_t` passed first, 0 for handle-less calls.
    pub handle: usize,
    pub args: Vec<Arg>,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static FAILURES: RefCell<HashMap<&'static str, c_int>> = RefCell::new(HashMap::new());
    static VERSION: Cell<c_int> = const { Cell::new(0x001402) };
    static THUMB_LENGTH: Cell<c_uint> = const { Cell::new(THUMB.len() as c_uint) };
    static MEM_BITS: Cell<u16> = const { Cell::new(8) };
}

/// Every call made on this thread so far.
pub fn calls() -> Vec<Call> {
    CALLS.with(|c| c.borrow().clone())
}

/// Operation names called so far, in order.
pub fn ops() -> Vec<&'static str> {
    CALLS.with(|c| c.borrow().iter().map(|call| call.op).collect())
}

/// Make `op` return `code` from now on.
pub fn fail(op: &'static str, code: c_int) {
    FAILURES.with(|f| f.borrow_mut().insert(op, code));
}

pub fn set_version(number: c_int) {
    VERSION.with(|v| v.set(number));
}

/// `tlength` reported by the next `unpack_thumb`.
pub fn set_thumb_length(length: c_uint) {
    THUMB_LENGTH.with(|l| l.set(length));
}

/// Sample depth of the next `dcraw_make_mem_image`, 8 or 16.
pub fn set_mem_bits(bits: u16) {
    MEM_BITS.with(|b| b.set(bits));
}

fn record(op: &'static str, handle: *mut sys::libraw_data_t, args: Vec<Arg>) -> c_int {
    CALLS.with(|c| {
        c.borrow_mut().push(Call {
            op,
            handle: handle as usize,
            args,
        })
    });
    FAILURES.with(|f| f.borrow().get(op).copied().unwrap_or(sys::LIBRAW_SUCCESS))
}

unsafe fn text(ptr: *const c_char) -> Arg {
    Arg::Text(unsafe { CStr::from_ptr(ptr) }.to_bytes().to_vec())
}

pub const DECODER_NAME: &CStr = c"unpacked_load_raw";

pub fn message_for(code: c_int) -> &'static CStr {
    match code {
        sys::LIBRAW_UNSPECIFIED_ERROR => c"Unspecified error",
        sys::LIBRAW_FILE_UNSUPPORTED => c"Unsupported file format or not RAW file",
        sys::LIBRAW_OUT_OF_ORDER_CALL => c"Out of order call of libraw function",
        sys::LIBRAW_NO_THUMBNAIL => c"No thumbnail in file",
        sys::LIBRAW_IO_ERROR => c"Input/output error",
        _ => c"Unknown error code",
    }
}

unsafe extern "C" fn init(flags: c_uint) -> *mut sys::libraw_data_t {
    // SAFETY: every field is numeric or a raw pointer; all-zero is valid.
    let data: Box<sys::libraw_data_t> = unsafe { Box::new_zeroed().assume_init() };
    let handle = Box::into_raw(data);
    record("init", handle, vec![Arg::Int(flags as c_int)]);
    handle
}

unsafe extern "C" fn close(handle: *mut sys::libraw_data_t) {
    record("close", handle, Vec::new());
    drop(unsafe { Box::from_raw(handle) });
}

unsafe extern "C" fn open_file(handle: *mut sys::libraw_data_t, path: *const c_char) -> c_int {
    let arg = unsafe { text(path) };
    let code = record("open_file", handle, vec![arg]);
    if code == sys::LIBRAW_SUCCESS {
        let sizes = unsafe { &mut (*handle).sizes };
        sizes.raw_height = 4;
        sizes.raw_width = 6;
        sizes.raw_pitch = 8 * 2;
        sizes.iheight = 2;
        sizes.iwidth = 3;
    }
    code
}

unsafe extern "C" fn open_buffer(
    handle: *mut sys::libraw_data_t,
    buffer: *const c_void,
    size: usize,
) -> c_int {
    let bytes = unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), size) };
    record("open_buffer", handle, vec![Arg::Bytes(bytes.to_vec())])
}

macro_rules! status_fns {
    ($($name:ident),* $(,)?) => {
        $(
            unsafe extern "C" fn $name(handle: *mut sys::libraw_data_t) -> c_int {
                record(stringify!($name), handle, Vec::new())
            }
        )*
    };
}

/// Thumbnail planted by the fake `unpack_thumb`: an empty JPEG.
pub static THUMB: [u8; 4] = [0xff, 0xd8, 0xff, 0xd9];

unsafe extern "C" fn unpack_thumb(handle: *mut sys::libraw_data_t) -> c_int {
    let code = record("unpack_thumb", handle, Vec::new());
    if code == sys::LIBRAW_SUCCESS {
        let thumbnail = unsafe { &mut (*handle).thumbnail };
        thumbnail.tformat = sys::LIBRAW_THUMBNAIL_JPEG;
        thumbnail.thumb = THUMB.as_ptr().cast_mut().cast();
        thumbnail.tlength = THUMB_LENGTH.with(Cell::get);
    }
    code
}

status_fns!(
    unpack,
    raw2image,
    adjust_sizes_info_only,
    subtract_black,
    dcraw_process,
);

macro_rules! void_fns {
    ($($name:ident),* $(,)?) => {
        $(
            unsafe extern "C" fn $name(handle: *mut sys::libraw_data_t) {
                record(stringify!($name), handle, Vec::new());
            }
        )*
    };
}

void_fns!(recycle, recycle_datastream, free_image);

macro_rules! path_fns {
    ($($name:ident),* $(,)?) => {
        $(
            unsafe extern "C" fn $name(handle: *mut sys::libraw_data_t, path: *const c_char) -> c_int {
                let arg = unsafe { text(path) };
                record(stringify!($name), handle, vec![arg])
            }
        )*
    };
}

path_fns!(dcraw_ppm_tiff_writer, dcraw_thumb_writer);

macro_rules! set_int_fns {
    ($($name:ident),* $(,)?) => {
        $(
            unsafe extern "C" fn $name(handle: *mut sys::libraw_data_t, value: c_int) {
                record(stringify!($name), handle, vec![Arg::Int(value)]);
            }
        )*
    };
}

set_int_fns!(
    set_demosaic,
    set_output_color,
    set_output_bps,
    set_no_auto_bright,
    set_highlight,
    set_fbdd_noiserd,
    set_output_tif,
);

unsafe extern "C" fn set_bright(handle: *mut sys::libraw_data_t, value: c_float) {
    record("set_bright", handle, vec![Arg::Float(value)]);
}

macro_rules! set_indexed_fns {
    ($($name:ident),* $(,)?) => {
        $(
            unsafe extern "C" fn $name(handle: *mut sys::libraw_data_t, index: c_int, value: c_float) {
                record(stringify!($name), handle, vec![Arg::Int(index), Arg::Float(value)]);
            }
        )*
    };
}

set_indexed_fns!(set_user_mul, set_gamma);

unsafe extern "C" fn get_raw_height(handle: *mut sys::libraw_data_t) -> c_int {
    record("get_raw_height", handle, Vec::new());
    c_int::from(unsafe { (*handle).sizes.raw_height })
}

unsafe extern "C" fn get_raw_width(handle: *mut sys::libraw_data_t) -> c_int {
    record("get_raw_width", handle, Vec::new());
    c_int::from(unsafe { (*handle).sizes.raw_width })
}

unsafe extern "C" fn get_iheight(handle: *mut sys::libraw_data_t) -> c_int {
    record("get_iheight", handle, Vec::new());
    c_int::from(unsafe { (*handle).sizes.iheight })
}

unsafe extern "C" fn get_iwidth(handle: *mut sys::libraw_data_t) -> c_int {
    record("get_iwidth", handle, Vec::new());
    c_int::from(unsafe { (*handle).sizes.iwidth })
}

unsafe extern "C" fn get_color_maximum(handle: *mut sys::libraw_data_t) -> c_int {
    record("get_color_maximum", handle, Vec::new());
    unsafe { (*handle).color.maximum as c_int }
}

unsafe extern "C" fn get_cam_mul(handle: *mut sys::libraw_data_t, index: c_int) -> c_float {
    record("get_cam_mul", handle, vec![Arg::Int(index)]);
    unsafe { (*handle).color.cam_mul[index as usize] }
}

unsafe extern "C" fn get_pre_mul(handle: *mut sys::libraw_data_t, index: c_int) -> c_float {
    record("get_pre_mul", handle, vec![Arg::Int(index)]);
    unsafe { (*handle).color.pre_mul[index as usize] }
}

unsafe extern "C" fn get_rgb_cam(handle: *mut sys::libraw_data_t, i: c_int, j: c_int) -> c_float {
    record("get_rgb_cam", handle, vec![Arg::Int(i), Arg::Int(j)]);
    unsafe { (*handle).color.rgb_cam[i as usize][j as usize] }
}

#[allow(non_snake_case)]
unsafe extern "C" fn COLOR(handle: *mut sys::libraw_data_t, row: c_int, col: c_int) -> c_int {
    record("COLOR", handle, vec![Arg::Int(row), Arg::Int(col)]);
    // RGGB
    ((row & 1) << 1) | (col & 1)
}

unsafe extern "C" fn unpack_function_name(handle: *mut sys::libraw_data_t) -> *const c_char {
    record("unpack_function_name", handle, Vec::new());
    DECODER_NAME.as_ptr()
}

unsafe extern "C" fn get_decoder_info(
    handle: *mut sys::libraw_data_t,
    info: *mut sys::libraw_decoder_info_t,
) -> c_int {
    let code = record("get_decoder_info", handle, Vec::new());
    if code == sys::LIBRAW_SUCCESS {
        unsafe {
            (*info).decoder_name = DECODER_NAME.as_ptr();
            (*info).decoder_flags = 0x4;
        }
    }
    code
}

/// Pixels produced by the fake `dcraw_make_mem_image`: 1 row, 2 RGB pixels.
pub const MEM_IMAGE: [u8; 6] = [10, 20, 30, 40, 50, 60];

const IMAGE_DATA_OFFSET: usize = 16;

fn mem_layout(data_size: usize) -> Layout {
    let size = (IMAGE_DATA_OFFSET + data_size).max(size_of::<sys::libraw_processed_image_t>());
    Layout::from_size_align(size, align_of::<sys::libraw_processed_image_t>()).unwrap()
}

/// Samples produced by the fake `dcraw_make_mem_image` at 16 bits.
pub const MEM_IMAGE16: [u16; 6] = [1000, 2000, 3000, 40000, 50000, 60000];

unsafe fn make_mem(
    op: &'static str,
    handle: *mut sys::libraw_data_t,
    errc: *mut c_int,
    type_: c_uint,
    bits: u16,
) -> *mut sys::libraw_processed_image_t {
    let code = record(op, handle, Vec::new());
    if !errc.is_null() {
        unsafe { *errc = code };
    }
    if code != sys::LIBRAW_SUCCESS {
        return ptr::null_mut();
    }
    let bytes: Vec<u8> = if bits == 16 {
        MEM_IMAGE16.iter().flat_map(|s| s.to_ne_bytes()).collect()
    } else {
        MEM_IMAGE.to_vec()
    };
    unsafe {
        let image = alloc_zeroed(mem_layout(bytes.len())).cast::<sys::libraw_processed_image_t>();
        (*image).type_ = type_;
        (*image).height = 1;
        (*image).width = 2;
        (*image).colors = 3;
        (*image).bits = bits;
        (*image).data_size = bytes.len() as c_uint;
        ptr::copy_nonoverlapping(
            bytes.as_ptr(),
            ptr::addr_of_mut!((*image).data).cast::<u8>(),
            bytes.len(),
        );
        image
    }
}

unsafe extern "C" fn dcraw_make_mem_image(
    handle: *mut sys::libraw_data_t,
    errc: *mut c_int,
) -> *mut sys::libraw_processed_image_t {
    unsafe { make_mem(
            "dcraw_make_mem_image",
            handle,
            errc,
            sys::LIBRAW_IMAGE_BITMAP,
            MEM_BITS.with(Cell::get),
        ) }
}

unsafe extern "C" fn dcraw_make_mem_thumb(
    handle: *mut sys::libraw_data_t,
    errc: *mut c_int,
) -> *mut sys::libraw_processed_image_t {
    unsafe { make_mem("dcraw_make_mem_thumb", handle, errc, sys::LIBRAW_IMAGE_JPEG, 8) }
}

unsafe extern "C" fn dcraw_clear_mem(image: *mut sys::libraw_processed_image_t) {
    CALLS.with(|c| {
        c.borrow_mut().push(Call {
            op: "dcraw_clear_mem",
            handle: 0,
            args: Vec::new(),
        })
    });
    let layout = mem_layout(unsafe { (*image).data_size } as usize);
    unsafe { dealloc(image.cast(), layout) };
}

unsafe extern "C" fn strerror(code: c_int) -> *const c_char {
    record("strerror", ptr::null_mut(), vec![Arg::Int(code)]);
    message_for(code).as_ptr()
}

pub const VERSION_TEXT: &CStr = c"0.20.2-Release";

unsafe extern "C" fn version() -> *const c_char {
    VERSION_TEXT.as_ptr()
}

#[allow(non_snake_case)]
unsafe extern "C" fn versionNumber() -> c_int {
    VERSION.with(Cell::get)
}

unsafe extern "C" fn capabilities() -> c_uint {
    sys::LIBRAW_CAPS_DNGSDK | sys::LIBRAW_CAPS_UNICODEPATHS
}

pub const CAMERAS: [&CStr; 3] = [c"Canon EOS R5", c"Fujifilm X-T4", c"Nikon Z 7"];

#[allow(non_snake_case)]
unsafe extern "C" fn cameraCount() -> c_int {
    CAMERAS.len() as c_int
}

#[allow(non_snake_case)]
unsafe extern "C" fn cameraList() -> *const *const c_char {
    let mut list: Vec<*const c_char> = CAMERAS.iter().map(|c| c.as_ptr()).collect();
    list.push(ptr::null());
    Box::leak(list.into_boxed_slice()).as_ptr()
}

/// Symbol table of the fake library. Counts how often each symbol is
/// resolved.
pub struct MockLibrary {
    symbols: HashMap<&'static str, usize>,
    resolutions: Mutex<HashMap<String, usize>>,
}

macro_rules! symbols {
    ($($name:ident),* $(,)?) => {
        HashMap::from([
            $((concat!("libraw_", stringify!($name)), $name as usize)),*
        ])
    };
}

impl MockLibrary {
    pub fn new() -> Self {
        let symbols = symbols!(
            init,
            close,
            open_file,
            open_buffer,
            unpack,
            unpack_thumb,
            raw2image,
            adjust_sizes_info_only,
            subtract_black,
            dcraw_process,
            recycle,
            recycle_datastream,
            free_image,
            dcraw_ppm_tiff_writer,
            dcraw_thumb_writer,
            set_demosaic,
            set_output_color,
            set_output_bps,
            set_no_auto_bright,
            set_highlight,
            set_fbdd_noiserd,
            set_output_tif,
            set_bright,
            set_user_mul,
            set_gamma,
            get_raw_height,
            get_raw_width,
            get_iheight,
            get_iwidth,
            get_color_maximum,
            get_cam_mul,
            get_pre_mul,
            get_rgb_cam,
            COLOR,
            unpack_function_name,
            get_decoder_info,
            dcraw_make_mem_image,
            dcraw_make_mem_thumb,
            dcraw_clear_mem,
            strerror,
            version,
            versionNumber,
            capabilities,
            cameraCount,
            cameraList,
        );
        Self {
            symbols,
            resolutions: Mutex::new(HashMap::new()),
        }
    }

    /// Drop `symbol` from the table, as if the library did not export it.
    pub fn without(mut self, symbol: &str) -> Self {
        self.symbols.remove(symbol);
        self
    }

    /// How many times `symbol` was resolved.
    pub fn resolutions(&self, symbol: &str) -> usize {
        self.resolutions.lock().unwrap().get(symbol).copied().unwrap_or(0)
    }
}

impl SymbolSource for MockLibrary {
    fn resolve(&self, symbol: &str) -> Result<NonNull<c_void>> {
        *self
            .resolutions
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_default() += 1;
        self.symbols
            .get(symbol)
            .and_then(|&address| NonNull::new(address as *mut c_void))
            .ok_or_else(|| Error::symbol_not_found(symbol, "not exported by mock"))
    }
}
