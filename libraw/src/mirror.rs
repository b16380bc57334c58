//! Matrix-shaped views over the fixed arrays inside the mirrored structs.
//!
//! These borrow the struct, so unlike [`crate::view`] they are safe: the
//! arrays are inline and their size is part of the type.

use crate::types::{ColorData, DngColor};
use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2};

/// Views over `libraw_dng_color_t`.
pub trait DngColorViews {
    /// `calibration`, 4x4.
    fn calibration_view(&self) -> ArrayView2<'_, f32>;
    fn calibration_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
    /// `colormatrix`, stored 4x3 and presented transposed as 3x4.
    fn colormatrix_view(&self) -> ArrayView2<'_, f32>;
    fn colormatrix_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
    /// `forwardmatrix`, 3x4.
    fn forwardmatrix_view(&self) -> ArrayView2<'_, f32>;
    fn forwardmatrix_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
}

impl DngColorViews for DngColor {
    fn calibration_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.calibration[..])
    }

    fn calibration_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.calibration[..])
    }

    fn colormatrix_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.colormatrix[..]).reversed_axes()
    }

    fn colormatrix_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.colormatrix[..]).reversed_axes()
    }

    fn forwardmatrix_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.forwardmatrix[..])
    }

    fn forwardmatrix_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.forwardmatrix[..])
    }
}

/// Views over `libraw_colordata_t`.
pub trait ColorDataViews {
    /// Tone curve, 0x10000 entries.
    fn curve_view(&self) -> ArrayView1<'_, u16>;
    fn curve_view_mut(&mut self) -> ArrayViewMut1<'_, u16>;
    /// Per-channel and pattern black levels, 4102 entries.
    fn cblack_view(&self) -> ArrayView1<'_, u32>;
    fn cblack_view_mut(&mut self) -> ArrayViewMut1<'_, u32>;
    fn cam_mul_view(&self) -> ArrayView1<'_, f32>;
    fn cam_mul_view_mut(&mut self) -> ArrayViewMut1<'_, f32>;
    fn pre_mul_view(&self) -> ArrayView1<'_, f32>;
    fn pre_mul_view_mut(&mut self) -> ArrayViewMut1<'_, f32>;
    fn cmatrix_view(&self) -> ArrayView2<'_, f32>;
    fn cmatrix_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
    fn ccm_view(&self) -> ArrayView2<'_, f32>;
    fn ccm_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
    fn rgb_cam_view(&self) -> ArrayView2<'_, f32>;
    fn rgb_cam_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
    /// `cam_xyz`, 4x3 as declared in the header (`float cam_xyz[4][3]`),
    /// one row per camera channel. Other LibRaw bindings expose the same
    /// twelve floats as 3x4; `into_shape_with_order((3, 4))` on this view
    /// gives that reading without a copy.
    fn cam_xyz_view(&self) -> ArrayView2<'_, f32>;
    fn cam_xyz_view_mut(&mut self) -> ArrayViewMut2<'_, f32>;
}

impl ColorDataViews for ColorData {
    fn curve_view(&self) -> ArrayView1<'_, u16> {
        ArrayView1::from(&self.curve[..])
    }

    fn curve_view_mut(&mut self) -> ArrayViewMut1<'_, u16> {
        ArrayViewMut1::from(&mut self.curve[..])
    }

    fn cblack_view(&self) -> ArrayView1<'_, u32> {
        ArrayView1::from(&self.cblack[..])
    }

    fn cblack_view_mut(&mut self) -> ArrayViewMut1<'_, u32> {
        ArrayViewMut1::from(&mut self.cblack[..])
    }

    fn cam_mul_view(&self) -> ArrayView1<'_, f32> {
        ArrayView1::from(&self.cam_mul[..])
    }

    fn cam_mul_view_mut(&mut self) -> ArrayViewMut1<'_, f32> {
        ArrayViewMut1::from(&mut self.cam_mul[..])
    }

    fn pre_mul_view(&self) -> ArrayView1<'_, f32> {
        ArrayView1::from(&self.pre_mul[..])
    }

    fn pre_mul_view_mut(&mut self) -> ArrayViewMut1<'_, f32> {
        ArrayViewMut1::from(&mut self.pre_mul[..])
    }

    fn cmatrix_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.cmatrix[..])
    }

    fn cmatrix_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.cmatrix[..])
    }

    fn ccm_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.ccm[..])
    }

    fn ccm_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.ccm[..])
    }

    fn rgb_cam_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.rgb_cam[..])
    }

    fn rgb_cam_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.rgb_cam[..])
    }

    fn cam_xyz_view(&self) -> ArrayView2<'_, f32> {
        ArrayView2::from(&self.cam_xyz[..])
    }

    fn cam_xyz_view_mut(&mut self) -> ArrayViewMut2<'_, f32> {
        ArrayViewMut2::from(&mut self.cam_xyz[..])
    }
}
