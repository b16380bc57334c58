use crate::binding::{native_path, owned_text};
use crate::error::{Error, Result};
use crate::library::Library;
use crate::processed::ProcessedImage;
use crate::sys;
use crate::types::{DecoderInfo, ImageData, OutputBps, OutputColor, OutputParams};
use crate::view;
use ndarray::{ArrayView2, ArrayView3, ArrayViewMut2, ArrayViewMut3};
use std::ffi::{c_int, c_uint};
use std::fmt;
use std::path::Path;
use std::ptr::NonNull;
use std::sync::Arc;

/// One LibRaw processing context (`libraw_data_t`).
///
/// Every method forwards to the matching `libraw_<op>` with the handle as
/// first argument. Entry points are resolved on first use and cached for the
/// life of the processor. Closed with `libraw_close` on drop.
pub struct Processor {
    library: Library,
    raw: NonNull<sys::libraw_data_t>,
    // Backing store for `open_buffer`; LibRaw reads it lazily.
    input: Option<Box<[u8]>>,
}

// SAFETY: a LibRaw context has no thread affinity; it only must not be used
// from two threads at once, which `!Sync` and `&mut self` guarantee.
unsafe impl Send for Processor {}

impl Processor {
    /// Processor on the process-wide library with default flags.
    pub fn new() -> Result<Self> {
        Self::with_flags(sys::LIBRAW_OPTIONS_NONE)
    }

    /// Processor on the process-wide library with `libraw_init` flags.
    pub fn with_flags(flags: c_uint) -> Result<Self> {
        Self::with_library(Library::shared()?, flags)
    }

    /// Processor on an explicit library. Fails before `libraw_init` if the
    /// library version does not match the mirrored layouts.
    pub fn with_library(library: Library, flags: c_uint) -> Result<Self> {
        let version = library.ensure_supported()?;
        let init: sys::InitFn = unsafe { library.table().bind("init")? };
        let raw = NonNull::new(unsafe { init(flags) }).ok_or(Error::InitFailed)?;
        tracing::debug!(%version, flags, "Created LibRaw processor");
        Ok(Self {
            library,
            raw,
            input: None,
        })
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// The native handle, for calls this type does not wrap.
    pub fn as_ptr(&self) -> *mut sys::libraw_data_t {
        self.raw.as_ptr()
    }

    fn status(&mut self, op: &'static str) -> Result<()> {
        let f: sys::StatusFn = unsafe { self.library.table().bind(op)? };
        let code = unsafe { f(self.raw.as_ptr()) };
        self.library.check(op, code)
    }

    fn with_path(&mut self, op: &'static str, path: &Path) -> Result<()> {
        let path = native_path(path)?;
        let f: sys::PathFn = unsafe { self.library.table().bind(op)? };
        let code = unsafe { f(self.raw.as_ptr(), path.as_ptr()) };
        self.library.check(op, code)
    }

    fn void(&mut self, op: &'static str) -> Result<()> {
        let f: sys::VoidFn = unsafe { self.library.table().bind(op)? };
        unsafe { f(self.raw.as_ptr()) };
        Ok(())
    }

    fn set_int(&mut self, op: &'static str, value: c_int) -> Result<()> {
        let f: sys::SetIntFn = unsafe { self.library.table().bind(op)? };
        unsafe { f(self.raw.as_ptr(), value) };
        Ok(())
    }

    fn set_indexed(&mut self, op: &'static str, index: c_int, value: f32) -> Result<()> {
        let f: sys::SetIndexedFloatFn = unsafe { self.library.table().bind(op)? };
        unsafe { f(self.raw.as_ptr(), index, value) };
        Ok(())
    }

    fn get_int(&self, op: &'static str) -> Result<c_int> {
        let f: sys::GetIntFn = unsafe { self.library.table().bind(op)? };
        Ok(unsafe { f(self.raw.as_ptr()) })
    }

    fn get_indexed(&self, op: &'static str, index: c_int) -> Result<f32> {
        let f: sys::GetIndexedFloatFn = unsafe { self.library.table().bind(op)? };
        Ok(unsafe { f(self.raw.as_ptr(), index) })
    }

    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Opening raw file");
        self.with_path("open_file", path)
    }

    /// Open an in-memory raw file. The processor keeps the bytes until the
    /// next `open_buffer`, `recycle` or drop.
    pub fn open_buffer(&mut self, data: impl Into<Box<[u8]>>) -> Result<()> {
        let data = data.into();
        let f: sys::OpenBufferFn = unsafe { self.library.table().bind("open_buffer")? };
        let code = unsafe { f(self.raw.as_ptr(), data.as_ptr().cast(), data.len()) };
        // The previous buffer is released only after LibRaw has dropped its
        // stream over it.
        let _previous = self.input.replace(data);
        self.library.check("open_buffer", code)
    }

    pub fn unpack(&mut self) -> Result<()> {
        self.status("unpack")
    }

    pub fn unpack_thumb(&mut self) -> Result<()> {
        self.status("unpack_thumb")
    }

    /// Populate `image` from the raw data.
    pub fn raw2image(&mut self) -> Result<()> {
        self.status("raw2image")
    }

    /// Fill `sizes` with the output dimensions without decoding.
    pub fn adjust_sizes_info_only(&mut self) -> Result<()> {
        self.status("adjust_sizes_info_only")
    }

    pub fn subtract_black(&mut self) -> Result<()> {
        self.status("subtract_black")
    }

    /// Run the dcraw emulation pipeline (demosaic, white balance, color).
    pub fn dcraw_process(&mut self) -> Result<()> {
        self.status("dcraw_process")
    }

    /// Write the processed image as PPM, or TIFF if `output_tiff` is set.
    pub fn dcraw_ppm_tiff_writer(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.with_path("dcraw_ppm_tiff_writer", path.as_ref())
    }

    pub fn dcraw_thumb_writer(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.with_path("dcraw_thumb_writer", path.as_ref())
    }

    pub fn get_decoder_info(&mut self) -> Result<DecoderInfo> {
        let f: sys::GetDecoderInfoFn = unsafe { self.library.table().bind("get_decoder_info")? };
        let mut info = sys::libraw_decoder_info_t {
            decoder_name: std::ptr::null(),
            decoder_flags: 0,
        };
        let code = unsafe { f(self.raw.as_ptr(), &mut info) };
        self.library.check("get_decoder_info", code)?;
        Ok(DecoderInfo {
            name: unsafe { owned_text(info.decoder_name) },
            flags: info.decoder_flags,
        })
    }

    /// Release everything tied to the current file so the processor can open
    /// another.
    pub fn recycle(&mut self) -> Result<()> {
        self.void("recycle")?;
        self.input = None;
        Ok(())
    }

    /// Close the input stream but keep decoded data.
    pub fn recycle_datastream(&mut self) -> Result<()> {
        self.void("recycle_datastream")?;
        self.input = None;
        Ok(())
    }

    pub fn free_image(&mut self) -> Result<()> {
        self.void("free_image")
    }

    /// Demosaic algorithm (`user_qual`): 0 linear, 1 VNG, 2 PPG, 3 AHD, ...
    pub fn set_demosaic(&mut self, quality: c_int) -> Result<()> {
        self.set_int("set_demosaic", quality)
    }

    pub fn set_output_color(&mut self, color: OutputColor) -> Result<()> {
        self.set_int("set_output_color", color as c_int)
    }

    pub fn set_user_mul(&mut self, index: c_int, value: f32) -> Result<()> {
        self.set_indexed("set_user_mul", index, value)
    }

    pub fn set_output_bps(&mut self, bps: OutputBps) -> Result<()> {
        self.set_int("set_output_bps", bps.bits())
    }

    /// Index 0 is the power, 1 the toe slope.
    pub fn set_gamma(&mut self, index: c_int, value: f32) -> Result<()> {
        self.set_indexed("set_gamma", index, value)
    }

    pub fn set_no_auto_bright(&mut self, disable: bool) -> Result<()> {
        self.set_int("set_no_auto_bright", c_int::from(disable))
    }

    pub fn set_bright(&mut self, value: f32) -> Result<()> {
        let f: sys::SetFloatFn = unsafe { self.library.table().bind("set_bright")? };
        unsafe { f(self.raw.as_ptr(), value) };
        Ok(())
    }

    pub fn set_highlight(&mut self, mode: c_int) -> Result<()> {
        self.set_int("set_highlight", mode)
    }

    pub fn set_fbdd_noiserd(&mut self, level: c_int) -> Result<()> {
        self.set_int("set_fbdd_noiserd", level)
    }

    pub fn set_output_tif(&mut self, tiff: bool) -> Result<()> {
        self.set_int("set_output_tif", c_int::from(tiff))
    }

    /// Name of the decoder LibRaw picked for the open file.
    pub fn unpack_function_name(&self) -> Result<String> {
        let f: sys::UnpackFunctionNameFn =
            unsafe { self.library.table().bind("unpack_function_name")? };
        Ok(unsafe { owned_text(f(self.raw.as_ptr())) })
    }

    /// CFA color index at `(row, col)` (`libraw_COLOR`).
    pub fn color(&self, row: c_int, col: c_int) -> Result<c_int> {
        let f: sys::ColorFn = unsafe { self.library.table().bind("COLOR")? };
        Ok(unsafe { f(self.raw.as_ptr(), row, col) })
    }

    pub fn get_raw_height(&self) -> Result<c_int> {
        self.get_int("get_raw_height")
    }

    pub fn get_raw_width(&self) -> Result<c_int> {
        self.get_int("get_raw_width")
    }

    pub fn get_iheight(&self) -> Result<c_int> {
        self.get_int("get_iheight")
    }

    pub fn get_iwidth(&self) -> Result<c_int> {
        self.get_int("get_iwidth")
    }

    pub fn get_cam_mul(&self, index: c_int) -> Result<f32> {
        self.get_indexed("get_cam_mul", index)
    }

    pub fn get_pre_mul(&self, index: c_int) -> Result<f32> {
        self.get_indexed("get_pre_mul", index)
    }

    pub fn get_rgb_cam(&self, index1: c_int, index2: c_int) -> Result<f32> {
        let f: sys::GetRgbCamFn = unsafe { self.library.table().bind("get_rgb_cam")? };
        Ok(unsafe { f(self.raw.as_ptr(), index1, index2) })
    }

    pub fn get_color_maximum(&self) -> Result<c_int> {
        self.get_int("get_color_maximum")
    }

    /// Render the processed image into memory instead of a file.
    pub fn dcraw_make_mem_image(&mut self) -> Result<ProcessedImage> {
        self.make_mem("dcraw_make_mem_image")
    }

    /// Render the unpacked thumbnail into memory.
    pub fn dcraw_make_mem_thumb(&mut self) -> Result<ProcessedImage> {
        self.make_mem("dcraw_make_mem_thumb")
    }

    fn make_mem(&mut self, op: &'static str) -> Result<ProcessedImage> {
        let table = self.library.table();
        let make: sys::MakeMemImageFn = unsafe { table.bind(op)? };
        let clear: sys::ClearMemFn = unsafe { table.bind("dcraw_clear_mem")? };
        let mut code: c_int = sys::LIBRAW_SUCCESS;
        let ptr = unsafe { make(self.raw.as_ptr(), &mut code) };
        // Take ownership first so a buffer returned alongside an error is
        // still freed.
        let image = NonNull::new(ptr).map(|raw| unsafe {
            ProcessedImage::from_raw(raw, clear, Arc::clone(table.source()))
        });
        self.library.check(op, code)?;
        image.ok_or_else(|| {
            Error::native(
                op,
                sys::LIBRAW_UNSPECIFIED_ERROR,
                self.library.strerror(sys::LIBRAW_UNSPECIFIED_ERROR),
            )
        })
    }

    /// The whole `imgdata` structure.
    pub fn imgdata(&self) -> &ImageData {
        // SAFETY: owned by this processor until `libraw_close`.
        unsafe { self.raw.as_ref() }
    }

    /// Mutable `imgdata`. Changes are seen by subsequent calls.
    ///
    /// # Safety
    ///
    /// The structure holds pointers LibRaw owns (`image`, `rawdata.raw_image`,
    /// `thumbnail.thumb`, `color.profile`, ...) together with the sizes that
    /// describe them. Callers must keep every pointer valid for the sizes
    /// stored next to it, since [`Processor::image`], [`Processor::raw_image`],
    /// [`Processor::thumbnail`] and the native library itself trust them.
    pub unsafe fn imgdata_mut(&mut self) -> &mut ImageData {
        // SAFETY: owned by this processor until `libraw_close`, and
        // `&mut self` excludes other borrows.
        unsafe { self.raw.as_mut() }
    }

    pub fn params(&self) -> &OutputParams {
        &self.imgdata().params
    }

    /// Mutable output parameters.
    ///
    /// # Safety
    ///
    /// Besides numbers, `libraw_output_params_t` carries C strings and
    /// buffers (`bad_pixels`, `dark_frame`, `output_profile`, ...) that
    /// `dcraw_process` dereferences. Any pointer stored here must stay valid
    /// and NUL-terminated for as long as LibRaw may read it.
    pub unsafe fn params_mut(&mut self) -> &mut OutputParams {
        // SAFETY: forwarded to the caller.
        unsafe { &mut self.imgdata_mut().params }
    }

    /// `params.half_size`: demosaic at half resolution.
    pub fn set_half_size(&mut self, value: bool) {
        // SAFETY: a plain integer field.
        unsafe { self.params_mut().half_size = i32::from(value) };
    }

    /// `params.use_camera_wb`: use the white balance recorded by the camera.
    pub fn set_use_camera_wb(&mut self, value: bool) {
        // SAFETY: a plain integer field.
        unsafe { self.params_mut().use_camera_wb = i32::from(value) };
    }

    fn image_shape(&self) -> (usize, usize, usize) {
        let sizes = &self.imgdata().sizes;
        (usize::from(sizes.iheight), usize::from(sizes.iwidth), 4)
    }

    /// `(iheight, iwidth, 4)` view of `image`, populated by `raw2image` or
    /// `dcraw_process`. `None` until then.
    pub fn image(&self) -> Result<Option<ArrayView3<'_, u16>>> {
        let ptr = self.imgdata().image;
        if ptr.is_null() {
            return Ok(None);
        }
        // SAFETY: LibRaw allocates iheight * iwidth pixels of 4 samples.
        unsafe { view::from_address(ptr.cast_const().cast(), self.image_shape()) }.map(Some)
    }

    pub fn image_mut(&mut self) -> Result<Option<ArrayViewMut3<'_, u16>>> {
        let shape = self.image_shape();
        let ptr = self.imgdata().image;
        if ptr.is_null() {
            return Ok(None);
        }
        // SAFETY: as in `image`; `&mut self` keeps it exclusive.
        unsafe { view::from_address_mut(ptr.cast(), shape) }.map(Some)
    }

    fn raw_layout(&self) -> Result<((usize, usize), (usize, usize))> {
        let sizes = &self.imgdata().sizes;
        let pitch = sizes.raw_pitch as usize / std::mem::size_of::<u16>();
        let (height, width) = (usize::from(sizes.raw_height), usize::from(sizes.raw_width));
        if height > 1 && pitch < width {
            return Err(Error::invalid_view(format!(
                "raw_pitch of {} bytes is shorter than a row of {width} pixels",
                sizes.raw_pitch
            )));
        }
        Ok(((height, width), (pitch, 1)))
    }

    /// `(raw_height, raw_width)` view of the Bayer data after `unpack`.
    /// Rows are `raw_pitch` bytes apart. `None` for non-Bayer sensors.
    pub fn raw_image(&self) -> Result<Option<ArrayView2<'_, u16>>> {
        let ptr = self.imgdata().rawdata.raw_image;
        if ptr.is_null() {
            return Ok(None);
        }
        let (shape, strides) = self.raw_layout()?;
        // SAFETY: LibRaw allocates raw_height rows of raw_pitch bytes.
        unsafe { view::from_address_strided(ptr.cast_const().cast(), shape, strides) }.map(Some)
    }

    pub fn raw_image_mut(&mut self) -> Result<Option<ArrayViewMut2<'_, u16>>> {
        let ptr = self.imgdata().rawdata.raw_image;
        if ptr.is_null() {
            return Ok(None);
        }
        let (shape, strides) = self.raw_layout()?;
        // SAFETY: as in `raw_image`.
        unsafe { view::from_address_strided_mut(ptr.cast(), shape, strides) }.map(Some)
    }

    /// Thumbnail bytes after `unpack_thumb`, in the format given by
    /// `thumbnail.tformat`.
    pub fn thumbnail(&self) -> Option<&[u8]> {
        let thumb = &self.imgdata().thumbnail;
        if thumb.thumb.is_null() || thumb.tlength == 0 {
            return None;
        }
        // SAFETY: LibRaw allocates tlength bytes for the thumbnail.
        Some(unsafe { std::slice::from_raw_parts(thumb.thumb.cast::<u8>(), thumb.tlength as usize) })
    }
}

impl Drop for Processor {
    fn drop(&mut self) {
        match unsafe { self.library.table().bind::<sys::VoidFn>("close") } {
            Ok(close) => unsafe { close(self.raw.as_ptr()) },
            Err(e) => tracing::warn!(error = %e, "Leaking LibRaw processor"),
        }
    }
}

impl fmt::Debug for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Processor")
            .field("raw", &self.raw)
            .field("library", &self.library)
            .field("buffered_input", &self.input.as_ref().map(|b| b.len()))
            .finish()
    }
}
