//! The shift-blur kernel: color shift followed by the weighted 3x3 blur.
//!
//! The passes are fixed and run in order. The blur reads a snapshot of the
//! post-shift samples, so pixels it writes never feed back into neighbors.
//! Every entry point validates the buffer before touching it; on error the
//! caller's samples are unchanged.

use log::{debug, trace, warn};
use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use super::color_shift::color_shift_rgba_u8_inplace;
use super::convolution::blur_interior;
use crate::bitmap::{validate_dims, Bitmap, CHANNELS};
use crate::error::InvalidBitmapError;

/// Run the kernel on a bitmap and return the filtered bitmap.
///
/// Width and height are preserved and alpha is byte-identical to the input.
pub fn apply(bitmap: Bitmap) -> Result<Bitmap, InvalidBitmapError> {
    let mut bitmap = bitmap;
    apply_in_place(&mut bitmap)?;
    Ok(bitmap)
}

/// Run the kernel, overwriting the bitmap's samples.
pub fn apply_in_place(bitmap: &mut Bitmap) -> Result<(), InvalidBitmapError> {
    apply_to_slice(&mut bitmap.pixels, bitmap.width, bitmap.height)
}

/// Run the kernel over a raw row-major RGBA buffer in place.
///
/// # Arguments
/// * `pixels` - RGBA samples, length `width * height * 4`
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
pub fn apply_to_slice(pixels: &mut [u8], width: usize, height: usize) -> Result<(), InvalidBitmapError> {
    if let Err(err) = validate_dims(width, height, pixels.len()) {
        warn!("rejecting {}x{} bitmap with {} samples: {}", width, height, pixels.len(), err);
        return Err(err);
    }
    debug!("shift-blur on {}x{} bitmap", width, height);

    color_shift_rgba_u8_inplace(ArrayViewMut3::from_shape(
        (height, width, CHANNELS),
        &mut *pixels,
    )?)?;
    trace!("color shift done");

    let shifted = pixels.to_vec();
    let source = ArrayView3::from_shape((height, width, CHANNELS), shifted.as_slice())?;
    blur_interior(source, pixels)?;
    trace!("blur done");

    Ok(())
}

/// Run the kernel on an RGBA u8 image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// New filtered image with the same dimensions
pub fn shift_blur_rgba_u8(input: ArrayView3<u8>) -> Result<Array3<u8>, InvalidBitmapError> {
    apply(Bitmap::from_array(input)?)?.into_array()
}
