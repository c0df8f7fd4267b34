//! Colour-keyed alpha extraction.
//!
//! Turns a two-tone launcher icon (light glyph on a coloured disc) into the
//! white-on-transparent silhouette Android expects for status bar icons.
//! Every pixel is classified on its own RGB values; neighbours are never
//! consulted and the input alpha is ignored.

use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

/// A channel must be strictly above this to count as "light".
pub const FOREGROUND_THRESHOLD: u8 = 200;

pub const KEYED_FOREGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Colour channels stay white so the output matches the reference PNGs byte for byte.
pub const KEYED_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[inline]
pub fn is_foreground(px: &Rgba<u8>) -> bool {
    let [r, g, b, _] = px.0;
    r > FOREGROUND_THRESHOLD && g > FOREGROUND_THRESHOLD && b > FOREGROUND_THRESHOLD
}

#[inline]
pub fn key_pixel(px: &Rgba<u8>) -> Rgba<u8> {
    if is_foreground(px) { KEYED_FOREGROUND } else { KEYED_BACKGROUND }
}

/// Build the keyed image. Dimensions always match the input.
pub fn extract_foreground(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    ImageBuffer::from_fn(w, h, |x, y| key_pixel(img.get_pixel(x, y)))
}

/// Same as [`extract_foreground`] for any decoded image; sources without an
/// alpha channel are treated as fully opaque.
pub fn extract_foreground_dynamic(img: &DynamicImage) -> RgbaImage {
    extract_foreground(&img.to_rgba8())
}
