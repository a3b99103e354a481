//! shiftblur
//!
//! Color-shift and weighted 3x3 blur kernel for RGBA bitmaps, with Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Bitmaps are row-major RGBA u8 buffers, `width * height * 4` samples long.
//! The ndarray entry points take the same data shaped (height, width, 4).
//!
//! ## Kernel
//! 1. **Color shift**: red +100, green +50, blue +150, each mod 256.
//! 2. **Blur**: `[1 2 1; 2 4 2; 1 2 1] / 16` over the post-shift samples,
//!    skipping a 3 pixel border band.
//!
//! Alpha is never modified.

pub mod bitmap;
pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::bitmap::{Bitmap, CHANNELS};
pub use crate::error::InvalidBitmapError;
pub use crate::filters::shift_blur::{apply, apply_in_place, apply_to_slice, shift_blur_rgba_u8};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::prelude::*;

    use crate::filters::color_shift::color_shift_rgba_u8;
    use crate::filters::convolution::weighted_blur_rgba_u8;
    use crate::filters::shift_blur::shift_blur_rgba_u8;

    /// Apply color shift then weighted blur to an RGBA u8 image.
    ///
    /// Raises ValueError if the array is not (height, width, 4) with
    /// positive dimensions.
    #[pyfunction]
    pub fn shift_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        let result = shift_blur_rgba_u8(input)?;
        Ok(result.into_pyarray(py))
    }

    /// Apply only the color shift pass.
    #[pyfunction]
    pub fn color_shift<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        let result = color_shift_rgba_u8(input)?;
        Ok(result.into_pyarray(py))
    }

    /// Apply only the weighted blur pass.
    #[pyfunction]
    pub fn weighted_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        let result = weighted_blur_rgba_u8(input)?;
        Ok(result.into_pyarray(py))
    }

    #[pymodule]
    pub fn shiftblur(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(shift_blur, m)?)?;
        m.add_function(wrap_pyfunction!(color_shift, m)?)?;
        m.add_function(wrap_pyfunction!(weighted_blur, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::shiftblur;
