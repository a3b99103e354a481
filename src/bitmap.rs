//! RGBA bitmap buffer consumed and produced by the filter kernel.
//!
//! ## Layout
//!
//! Samples are stored row-major with 4 contiguous channels per pixel:
//!
//! | Offset | Channel |
//! |--------|---------|
//! | 0 | red |
//! | 1 | green |
//! | 2 | blue |
//! | 3 | alpha |
//!
//! This is the layout of a browser `ImageData` buffer and of a numpy array
//! of shape (height, width, 4), so both can be handed over without reordering.

use ndarray::{Array3, ArrayView3};

use crate::error::InvalidBitmapError;

/// Number of channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Index of the first sample of pixel `(x, y)` in a row-major RGBA buffer.
#[inline]
pub fn pixel_offset(width: usize, x: usize, y: usize) -> usize {
    (y * width + x) * CHANNELS
}

/// Check that `len` samples form a valid `width` x `height` RGBA buffer.
pub fn validate_dims(width: usize, height: usize, len: usize) -> Result<(), InvalidBitmapError> {
    if width == 0 || height == 0 {
        return Err(InvalidBitmapError::EmptyDimensions { width, height });
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(InvalidBitmapError::SizeOverflow { width, height })?;

    if expected != len {
        return Err(InvalidBitmapError::DataLengthMismatch {
            expected,
            actual: len,
        });
    }

    Ok(())
}

/// A decoded image held as raw RGBA samples.
///
/// Fields are public so callers can assemble a bitmap straight from a decoder
/// or canvas buffer; the kernel validates it on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Row-major RGBA samples, `width * height * 4` long.
    pub pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap, rejecting buffers that do not match the dimensions.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, InvalidBitmapError> {
        validate_dims(width, height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap with every pixel set to `rgba`.
    pub fn from_pixel(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, InvalidBitmapError> {
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(InvalidBitmapError::SizeOverflow { width, height })?;
        Self::new(width, height, rgba.repeat(len / CHANNELS))
    }

    /// Copy an ndarray image of shape (height, width, 4) into a bitmap.
    pub fn from_array(array: ArrayView3<u8>) -> Result<Self, InvalidBitmapError> {
        let (height, width, channels) = array.dim();
        if channels != CHANNELS {
            return Err(InvalidBitmapError::ChannelCount(channels));
        }
        // iter() walks in logical order, so non-standard layouts come out row-major
        Self::new(width, height, array.iter().copied().collect())
    }

    /// Re-check the buffer invariant.
    pub fn validate(&self) -> Result<(), InvalidBitmapError> {
        validate_dims(self.width, self.height, self.pixels.len())
    }

    /// Borrow the samples as a (height, width, 4) array view.
    pub fn view(&self) -> Result<ArrayView3<'_, u8>, InvalidBitmapError> {
        self.validate()?;
        Ok(ArrayView3::from_shape(
            (self.height, self.width, CHANNELS),
            self.pixels.as_slice(),
        )?)
    }

    /// Convert into an owned (height, width, 4) array without copying.
    pub fn into_array(self) -> Result<Array3<u8>, InvalidBitmapError> {
        self.validate()?;
        Ok(Array3::from_shape_vec(
            (self.height, self.width, CHANNELS),
            self.pixels,
        )?)
    }

    /// RGBA samples of pixel `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = pixel_offset(self.width, x, y);
        let px = self.pixels.get(i..i + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}
