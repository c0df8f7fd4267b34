use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::{CoreError, Result};

/// Centred square inside a `w x h` image: `(left, top, side)`.
pub fn centered_square(w: u32, h: u32) -> (u32, u32, u32) {
    let side = w.min(h);
    ((w - side) / 2, (h - side) / 2, side)
}

/// Crop to the largest centred square. Square input is returned unchanged.
pub fn crop_to_square(img: &RgbaImage) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == h {
        return img.clone();
    }
    let (left, top, side) = centered_square(w, h);
    imageops::crop_imm(img, left, top, side, side).to_image()
}

/// Centre-crop to a square, then scale to `size x size`.
pub fn fit_square(img: &RgbaImage, size: u32, filter: FilterType) -> Result<RgbaImage> {
    if size == 0 {
        return Err(CoreError::ZeroSize);
    }
    if img.width() == 0 || img.height() == 0 {
        return Err(CoreError::EmptySource);
    }

    let square = crop_to_square(img);
    if square.width() == size {
        return Ok(square);
    }
    Ok(imageops::resize(&square, size, size, filter))
}
