//! `ndarray` views over memory owned by LibRaw.
//!
//! Nothing here copies. The checks cover what can be checked from an
//! address alone: null, alignment, shape arithmetic and overlapping strides.
//! Whether the allocation is large enough is on the caller.

use crate::error::{Error, Result};
use bytemuck::Pod;
use ndarray::{ArrayView, ArrayViewMut, Dimension, IntoDimension, ShapeBuilder};
use std::ffi::c_void;
use std::mem;

/// Number of elements spanned by `shape` laid out with `strides`, i.e. one
/// past the furthest element reachable. `None` on overflow.
fn span<D: Dimension>(shape: &D, strides: &D) -> Option<usize> {
    if shape.slice().contains(&0) {
        return Some(0);
    }
    shape
        .slice()
        .iter()
        .zip(strides.slice())
        .try_fold(1usize, |end, (&len, &stride)| {
            (len - 1).checked_mul(stride)?.checked_add(end)
        })
}

/// Rejects strides under which two indices reach the same element.
fn check_disjoint<D: Dimension>(shape: &D, strides: &D) -> Result<()> {
    if shape.slice().contains(&0) {
        return Ok(());
    }
    let mut axes: Vec<(usize, usize)> = shape
        .slice()
        .iter()
        .zip(strides.slice())
        .filter(|&(&len, _)| len > 1)
        .map(|(&len, &stride)| (len, stride))
        .collect();
    axes.sort_unstable_by_key(|&(_, stride)| stride);
    // Furthest offset reachable through the axes seen so far.
    let mut reach = 0usize;
    for (len, stride) in axes {
        if stride <= reach {
            return Err(Error::invalid_view(format!(
                "strides {:?} overlap for shape {shape:?}",
                strides.slice()
            )));
        }
        reach = reach.saturating_add((len - 1).saturating_mul(stride));
    }
    Ok(())
}

fn check_address<T>(addr: *const c_void) -> Result<()> {
    if addr.is_null() {
        return Err(Error::invalid_view("null address"));
    }
    if (addr as usize) % mem::align_of::<T>() != 0 {
        return Err(Error::invalid_view(format!(
            "address {addr:p} is not aligned to {} bytes",
            mem::align_of::<T>()
        )));
    }
    Ok(())
}

fn check_extent<T, D: Dimension>(shape: &D, elements: Option<usize>) -> Result<()> {
    let bytes = elements
        .and_then(|n| n.checked_mul(mem::size_of::<T>()))
        .filter(|&b| b <= isize::MAX as usize)
        .ok_or_else(|| Error::invalid_view(format!("shape {shape:?} exceeds isize::MAX bytes")))?;
    tracing::trace!(?shape, bytes, "Creating view");
    Ok(())
}

/// Read-only C-order view of `shape` elements of `T` starting at `addr`.
///
/// # Safety
///
/// `addr` must point to at least `shape.size()` initialized elements that
/// stay valid and are not written through another path for `'a`.
pub unsafe fn from_address<'a, T, Sh>(addr: *const c_void, shape: Sh) -> Result<ArrayView<'a, T, Sh::Dim>>
where
    T: Pod,
    Sh: IntoDimension,
{
    let shape = shape.into_dimension();
    check_address::<T>(addr)?;
    check_extent::<T, _>(&shape, shape.size_checked())?;
    // SAFETY: checked above except for the extent, which the caller upholds.
    Ok(unsafe { ArrayView::from_shape_ptr(shape, addr.cast::<T>()) })
}

/// Writable counterpart of [`from_address`]. Writes land in native memory
/// and are seen by later LibRaw calls.
///
/// # Safety
///
/// As [`from_address`], and nothing else may access the memory for `'a`.
pub unsafe fn from_address_mut<'a, T, Sh>(
    addr: *mut c_void,
    shape: Sh,
) -> Result<ArrayViewMut<'a, T, Sh::Dim>>
where
    T: Pod,
    Sh: IntoDimension,
{
    let shape = shape.into_dimension();
    check_address::<T>(addr)?;
    check_extent::<T, _>(&shape, shape.size_checked())?;
    // SAFETY: as in `from_address`.
    Ok(unsafe { ArrayViewMut::from_shape_ptr(shape, addr.cast::<T>()) })
}

/// Read-only view with explicit element strides, for buffers whose rows are
/// padded (e.g. `raw_image`, whose pitch is given in bytes).
///
/// # Safety
///
/// As [`from_address`], over every element reachable through `strides`.
pub unsafe fn from_address_strided<'a, T, Sh>(
    addr: *const c_void,
    shape: Sh,
    strides: Sh,
) -> Result<ArrayView<'a, T, Sh::Dim>>
where
    T: Pod,
    Sh: IntoDimension,
{
    let shape = shape.into_dimension();
    let strides = strides.into_dimension();
    check_address::<T>(addr)?;
    check_extent::<T, _>(&shape, span(&shape, &strides))?;
    check_disjoint(&shape, &strides)?;
    // SAFETY: as in `from_address`.
    Ok(unsafe { ArrayView::from_shape_ptr(shape.strides(strides), addr.cast::<T>()) })
}

/// Writable counterpart of [`from_address_strided`].
///
/// # Safety
///
/// As [`from_address_mut`], over every element reachable through `strides`.
pub unsafe fn from_address_strided_mut<'a, T, Sh>(
    addr: *mut c_void,
    shape: Sh,
    strides: Sh,
) -> Result<ArrayViewMut<'a, T, Sh::Dim>>
where
    T: Pod,
    Sh: IntoDimension,
{
    let shape = shape.into_dimension();
    let strides = strides.into_dimension();
    check_address::<T>(addr)?;
    check_extent::<T, _>(&shape, span(&shape, &strides))?;
    check_disjoint(&shape, &strides)?;
    // SAFETY: as in `from_address`.
    Ok(unsafe { ArrayViewMut::from_shape_ptr(shape.strides(strides), addr.cast::<T>()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Ix2, array};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn reads_back_known_bytes() {
        let mut rng = SmallRng::seed_from_u64(7);
        let data: Vec<f32> = (0..12).map(|_| rng.r#gen()).collect();
        let view = unsafe { from_address::<f32, _>(data.as_ptr().cast(), (3, 4)) }.unwrap();
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(view[[i, j]].to_bits(), data[i * 4 + j].to_bits());
            }
        }
    }

    #[test]
    fn writes_are_visible_through_second_view() {
        let mut data = vec![0u16; 8];
        let addr = data.as_mut_ptr().cast::<c_void>();
        {
            let mut w = unsafe { from_address_mut::<u16, _>(addr, (2, 4)) }.unwrap();
            w[[1, 2]] = 0xbeef;
        }
        let r = unsafe { from_address::<u16, _>(addr, 8) }.unwrap();
        assert_eq!(r[6], 0xbeef);
        assert_eq!(data[6], 0xbeef);
    }

    #[test]
    fn strided_rows_skip_padding() {
        // 2 rows of 3 pixels, pitch of 5 elements.
        let data: Vec<u16> = vec![1, 2, 3, 99, 99, 4, 5, 6, 99, 99];
        let view =
            unsafe { from_address_strided::<u16, _>(data.as_ptr().cast(), (2, 3), (5, 1)) }.unwrap();
        assert_eq!(view, array![[1u16, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn overlapping_strides_are_rejected() {
        let mut data = vec![0u16; 12];
        // Rows 2 elements apart but 3 wide: row 1 starts inside row 0.
        let err = unsafe {
            from_address_strided_mut::<u16, _>(data.as_mut_ptr().cast(), (3, 3), (2, 1))
        }
        .unwrap_err();
        assert!(err.to_string().contains("overlap"));
        let err =
            unsafe { from_address_strided::<u16, _>(data.as_ptr().cast(), (4, 3), (0, 1)) }
                .unwrap_err();
        assert!(matches!(err, Error::InvalidView(_)));

        // Column-major and single-row layouts are disjoint.
        let view =
            unsafe { from_address_strided_mut::<u16, _>(data.as_mut_ptr().cast(), (3, 4), (1, 3)) }
                .unwrap();
        assert_eq!(view.dim(), (3, 4));
        let view =
            unsafe { from_address_strided::<u16, _>(data.as_ptr().cast(), (1, 5), (0, 1)) }.unwrap();
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn null_is_rejected() {
        let err = unsafe { from_address::<u16, _>(std::ptr::null(), (2, 2)) }.unwrap_err();
        assert!(matches!(err, Error::InvalidView(_)));
    }

    #[test]
    fn misaligned_is_rejected() {
        let data = [0u32; 4];
        let addr = unsafe { data.as_ptr().cast::<u8>().add(1) }.cast::<c_void>();
        let err = unsafe { from_address::<u32, _>(addr, 2) }.unwrap_err();
        assert!(err.to_string().contains("not aligned"));
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        let data = [0u64; 1];
        let err =
            unsafe { from_address::<u64, Ix2>(data.as_ptr().cast(), Ix2(usize::MAX / 2, 3)) }
                .unwrap_err();
        assert!(matches!(err, Error::InvalidView(_)));
    }

    #[test]
    fn empty_shape_is_allowed() {
        let data = [0u16; 1];
        let view = unsafe { from_address::<u16, _>(data.as_ptr().cast(), (0, 4)) }.unwrap();
        assert_eq!(view.len(), 0);
    }
}
