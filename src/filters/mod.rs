//! Filter passes of the shift-blur kernel.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//!
//! Array inputs with any other channel count are rejected with
//! [`InvalidBitmapError::ChannelCount`](crate::InvalidBitmapError::ChannelCount).
//!
//! ## Passes
//!
//! - **color_shift**: per-channel offset with 8-bit wraparound
//! - **convolution**: weighted 3x3 blur of the interior, border band untouched
//! - **shift_blur**: both passes in order over one buffer
//!
//! Alpha is preserved by every pass.

pub mod color_shift;
pub mod convolution;
pub mod shift_blur;
