//! Color shift: first pass of the shift-blur kernel.
//!
//! Adds a fixed offset to each color channel with 8-bit wraparound, so a
//! channel at 255 plus 1 becomes 0 rather than saturating. Alpha is
//! preserved unchanged. Only RGBA (height, width, 4) input is accepted.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use crate::bitmap::CHANNELS;
use crate::error::InvalidBitmapError;

/// Offset added to the red channel (mod 256).
pub const RED_SHIFT: u8 = 100;
/// Offset added to the green channel (mod 256).
pub const GREEN_SHIFT: u8 = 50;
/// Offset added to the blue channel (mod 256).
pub const BLUE_SHIFT: u8 = 150;

const SHIFTS: [u8; 3] = [RED_SHIFT, GREEN_SHIFT, BLUE_SHIFT];

/// Shift the color channels of an RGBA u8 image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// New image with shifted RGB channels, alpha preserved
pub fn color_shift_rgba_u8(input: ArrayView3<u8>) -> Result<Array3<u8>, InvalidBitmapError> {
    let mut output = input.to_owned();
    color_shift_rgba_u8_inplace(output.view_mut())?;
    Ok(output)
}

/// Shift the color channels of an RGBA u8 image in place.
pub fn color_shift_rgba_u8_inplace(mut image: ArrayViewMut3<u8>) -> Result<(), InvalidBitmapError> {
    let (height, width, channels) = image.dim();
    if channels != CHANNELS {
        return Err(InvalidBitmapError::ChannelCount(channels));
    }

    for y in 0..height {
        for x in 0..width {
            for (c, shift) in SHIFTS.iter().enumerate() {
                image[[y, x, c]] = image[[y, x, c]].wrapping_add(*shift);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_pixel(rgba: [u8; 4]) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        for (c, v) in rgba.iter().enumerate() {
            img[[0, 0, c]] = *v;
        }
        img
    }

    #[test]
    fn test_shift_no_wrap() {
        let img = single_pixel([10, 200, 5, 255]);
        let result = color_shift_rgba_u8(img.view()).unwrap();

        assert_eq!(result[[0, 0, 0]], 110);
        assert_eq!(result[[0, 0, 1]], 250);
        assert_eq!(result[[0, 0, 2]], 155);
        assert_eq!(result[[0, 0, 3]], 255);
    }

    #[test]
    fn test_shift_wraps_instead_of_clamping() {
        let img = single_pixel([200, 10, 255, 17]);
        let result = color_shift_rgba_u8(img.view()).unwrap();

        // (200+100)%256, (10+50)%256, (255+150)%256
        assert_eq!(result[[0, 0, 0]], 44);
        assert_eq!(result[[0, 0, 1]], 60);
        assert_eq!(result[[0, 0, 2]], 149);
        assert_eq!(result[[0, 0, 3]], 17); // Alpha preserved
    }

    #[test]
    fn test_shift_all_values_match_modular_sum() {
        let mut img = Array3::<u8>::zeros((16, 16, 4));
        for y in 0..16 {
            for x in 0..16 {
                let v = (y * 16 + x) as u8;
                for c in 0..4 {
                    img[[y, x, c]] = v;
                }
            }
        }

        let result = color_shift_rgba_u8(img.view()).unwrap();

        for y in 0..16 {
            for x in 0..16 {
                let v = (y * 16 + x) as u32;
                assert_eq!(result[[y, x, 0]] as u32, (v + 100) % 256);
                assert_eq!(result[[y, x, 1]] as u32, (v + 50) % 256);
                assert_eq!(result[[y, x, 2]] as u32, (v + 150) % 256);
                assert_eq!(result[[y, x, 3]] as u32, v);
            }
        }
    }

    #[test]
    fn test_shift_inplace_matches_copy() {
        let img = single_pixel([1, 2, 3, 4]);
        let copied = color_shift_rgba_u8(img.view()).unwrap();

        let mut inplace = img.clone();
        color_shift_rgba_u8_inplace(inplace.view_mut()).unwrap();

        assert_eq!(copied, inplace);
    }

    #[test]
    fn test_shift_rejects_rgb() {
        let img = Array3::<u8>::zeros((2, 2, 3));
        assert_eq!(
            color_shift_rgba_u8(img.view()).unwrap_err(),
            InvalidBitmapError::ChannelCount(3)
        );
    }
}
