//! Error type for bitmaps rejected by the filter kernel.

/// Raised when a bitmap violates the RGBA buffer invariants.
///
/// The kernel never repairs a bitmap: the check runs before any sample is
/// touched, so an error always means the caller's buffer is unchanged.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum InvalidBitmapError {
    /// Width or height is zero.
    #[error("Bitmap dimensions must be positive, got {width}x{height}")]
    EmptyDimensions {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },

    /// `width * height * 4` does not fit in `usize`.
    #[error("Bitmap size {width}x{height} overflows the addressable buffer length")]
    SizeOverflow {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },

    /// Buffer length is not `width * height * 4`.
    #[error("Data length ({actual}) does not match the bitmap size ({expected})")]
    DataLengthMismatch {
        /// Expected sample count.
        expected: usize,
        /// Sample count actually supplied.
        actual: usize,
    },

    /// Array input does not have exactly 4 channels.
    #[error("Expected 4 channels (RGBA), got {0}")]
    ChannelCount(usize),

    /// ndarray refused the shape.
    #[error("Invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),
}

#[cfg(feature = "python")]
impl From<InvalidBitmapError> for pyo3::PyErr {
    fn from(err: InvalidBitmapError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
