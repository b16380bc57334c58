use crate::error::{Error, Result};
use crate::loader::SymbolSource;
use crate::sys;
use crate::types::ImageKind;
use ndarray::ArrayView3;
use std::fmt;
use std::ptr::NonNull;
use std::sync::Arc;

/// Image rendered into memory by `dcraw_make_mem_image` or
/// `dcraw_make_mem_thumb`. Released with `libraw_dcraw_clear_mem` on drop.
pub struct ProcessedImage {
    raw: NonNull<sys::libraw_processed_image_t>,
    clear: sys::ClearMemFn,
    // Keeps the shared object mapped while `clear` may still be called.
    _source: Arc<dyn SymbolSource>,
}

// SAFETY: the buffer is exclusively owned and LibRaw frees it without
// touching any processor state.
unsafe impl Send for ProcessedImage {}

impl ProcessedImage {
    /// # Safety
    ///
    /// `raw` must come from a `libraw_dcraw_make_mem_*` call of the library
    /// behind `source`, and `clear` must be its `libraw_dcraw_clear_mem`.
    pub(crate) unsafe fn from_raw(
        raw: NonNull<sys::libraw_processed_image_t>,
        clear: sys::ClearMemFn,
        source: Arc<dyn SymbolSource>,
    ) -> Self {
        Self {
            raw,
            clear,
            _source: source,
        }
    }

    fn header(&self) -> &sys::libraw_processed_image_t {
        // SAFETY: valid until drop.
        unsafe { self.raw.as_ref() }
    }

    pub fn kind(&self) -> ImageKind {
        ImageKind::from(self.header().type_)
    }

    pub fn width(&self) -> u16 {
        self.header().width
    }

    pub fn height(&self) -> u16 {
        self.header().height
    }

    pub fn colors(&self) -> u16 {
        self.header().colors
    }

    pub fn bits(&self) -> u16 {
        self.header().bits
    }

    /// Encoded bytes for JPEG thumbnails, interleaved samples for bitmaps.
    pub fn data(&self) -> &[u8] {
        let len = self.header().data_size as usize;
        let raw = self.raw.as_ptr();
        // SAFETY: `data` is a flexible array member of `data_size` bytes,
        // addressed through the allocation pointer rather than the header.
        unsafe { std::slice::from_raw_parts(std::ptr::addr_of!((*raw).data).cast::<u8>(), len) }
    }

    /// Bitmap as `(height, width, colors)` 8-bit samples.
    pub fn pixels(&self) -> Result<ArrayView3<'_, u8>> {
        self.expect_bitmap(8)?;
        ArrayView3::from_shape(self.shape(), self.data())
            .map_err(|e| Error::invalid_view(e.to_string()))
    }

    /// Bitmap as `(height, width, colors)` 16-bit samples in native order.
    pub fn pixels16(&self) -> Result<ArrayView3<'_, u16>> {
        self.expect_bitmap(16)?;
        let data = self.data();
        let samples: &[u16] = bytemuck::try_cast_slice(data)
            .map_err(|e| Error::invalid_view(format!("16-bit samples: {e:?}")))?;
        ArrayView3::from_shape(self.shape(), samples)
            .map_err(|e| Error::invalid_view(e.to_string()))
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            usize::from(self.height()),
            usize::from(self.width()),
            usize::from(self.colors()),
        )
    }

    fn expect_bitmap(&self, bits: u16) -> Result<()> {
        if self.kind() != ImageKind::Bitmap || self.bits() != bits {
            return Err(Error::invalid_view(format!(
                "not a {bits}-bit bitmap ({:?}, {} bits)",
                self.kind(),
                self.bits()
            )));
        }
        Ok(())
    }
}

impl Drop for ProcessedImage {
    fn drop(&mut self) {
        // SAFETY: allocated by the matching make_mem call, freed once.
        unsafe { (self.clear)(self.raw.as_ptr()) };
    }
}

impl fmt::Debug for ProcessedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessedImage")
            .field("kind", &self.kind())
            .field("width", &self.width())
            .field("height", &self.height())
            .field("colors", &self.colors())
            .field("bits", &self.bits())
            .field("data_size", &self.header().data_size)
            .finish()
    }
}
