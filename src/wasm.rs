//! WebAssembly exports for the shift-blur kernel.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and take the
//! flat RGBA buffer of a canvas `ImageData` (`imageData.data`).
//!
//! Invalid dimensions surface as a thrown JS `Error`.

use wasm_bindgen::prelude::*;

use crate::bitmap::Bitmap;
use crate::filters::shift_blur::{apply, apply_to_slice};

/// Apply color shift then weighted blur, returning a new buffer.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of filtered RGBA bytes
#[wasm_bindgen]
pub fn shift_blur_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsError> {
    let bitmap = Bitmap::new(width, height, data.to_vec())?;
    Ok(apply(bitmap)?.pixels)
}

/// Apply color shift then weighted blur to the caller's buffer in place.
///
/// wasm-bindgen copies the filtered samples back into the JS array.
#[wasm_bindgen]
pub fn shift_blur_rgba_inplace_wasm(
    data: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), JsError> {
    apply_to_slice(data, width, height)?;
    Ok(())
}
