//! Weighted 3x3 blur: second pass of the shift-blur kernel.
//!
//! Convolves the color channels with a center-weighted Gaussian
//! approximation and truncates the normalized sum. Only pixels at least
//! [`BLUR_MARGIN`] away from every edge are written; the border band keeps
//! its input values. Alpha is never written.
//!
//! ## Margin
//!
//! The kernel radius is 1 but the untouched band is 3 pixels wide. Output
//! from existing callers depends on this band, so it must not be narrowed.
//!
//! ## Performance
//!
//! Output rows are independent and processed in parallel with Rayon.

use std::ops::Range;

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::bitmap::CHANNELS;
use crate::error::InvalidBitmapError;

/// Blur weights, row-major, indexed `[dy + 1][dx + 1]`.
pub const BLUR_KERNEL: [[u32; 3]; 3] = [[1, 2, 1], [2, 4, 2], [1, 2, 1]];

/// Sum of [`BLUR_KERNEL`].
pub const BLUR_DIVISOR: u32 = 16;

/// Width of the border band left unblurred on each side.
pub const BLUR_MARGIN: usize = 3;

/// Color channels blurred per pixel; alpha is skipped.
const COLOR_CHANNELS: usize = 3;

/// Coordinates along an axis of length `len` that the blur writes.
///
/// Empty when `len <= 2 * BLUR_MARGIN`.
pub fn interior_range(len: usize) -> Range<usize> {
    BLUR_MARGIN..len.saturating_sub(BLUR_MARGIN).max(BLUR_MARGIN)
}

/// Blur an RGBA u8 image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8, read as the convolution source
///
/// # Returns
/// New image with the interior blurred and the border band copied from `input`
pub fn weighted_blur_rgba_u8(input: ArrayView3<u8>) -> Result<Array3<u8>, InvalidBitmapError> {
    let (height, width, channels) = input.dim();
    if channels != CHANNELS {
        return Err(InvalidBitmapError::ChannelCount(channels));
    }

    let mut output_flat: Vec<u8> = input.iter().copied().collect();
    blur_interior(input, &mut output_flat)?;

    Ok(Array3::from_shape_vec((height, width, CHANNELS), output_flat)?)
}

/// Write the blurred interior of `source` into `output`.
///
/// `output` is a row-major RGBA buffer of the same shape as `source`.
/// Samples outside the interior, and every alpha sample, are left as they are.
pub fn blur_interior(source: ArrayView3<u8>, output: &mut [u8]) -> Result<(), InvalidBitmapError> {
    let (height, width, channels) = source.dim();
    if channels != CHANNELS {
        return Err(InvalidBitmapError::ChannelCount(channels));
    }
    if output.len() != source.len() {
        return Err(InvalidBitmapError::DataLengthMismatch {
            expected: source.len(),
            actual: output.len(),
        });
    }

    let rows = interior_range(height);
    let cols = interior_range(width);
    if rows.is_empty() || cols.is_empty() {
        return Ok(());
    }

    output
        .par_chunks_mut(width * CHANNELS)
        .enumerate()
        .skip(rows.start)
        .take(rows.len())
        .for_each(|(y, row)| {
            for x in cols.clone() {
                for c in 0..COLOR_CHANNELS {
                    let mut sum = 0u32;
                    for (ky, weights) in BLUR_KERNEL.iter().enumerate() {
                        for (kx, weight) in weights.iter().enumerate() {
                            sum += source[[y + ky - 1, x + kx - 1, c]] as u32 * weight;
                        }
                    }
                    // At most 255 * 16 / 16, always fits
                    row[x * CHANNELS + c] = (sum / BLUR_DIVISOR) as u8;
                }
            }
        });

    Ok(())
}
