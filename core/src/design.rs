use image::{Rgba, RgbaImage};

use crate::color::{BRAND_BLUE, WHITE};
use crate::error::Result;
use crate::font;
use crate::raster::Canvas;

/// Label drawn under the walking figure.
pub const LABEL: &str = "SC";
/// Icons smaller than this never get a label.
pub const LABEL_MIN_SIZE: u32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self { background: BRAND_BLUE, foreground: WHITE }
    }
}

// Draw the step counter launcher icon: a filled disc with a walking figure and,
// on large icons, a short label.
pub fn step_counter_icon(size: u32, style: &IconStyle, with_label: bool) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size, size)?;
    let s = size as i32;
    let fg = style.foreground;

    canvas.fill_ellipse([0, 0, s - 1, s - 1], style.background);

    let c = s / 2;
    let head = s / 8;
    canvas.fill_ellipse([c - head, c - head * 3, c + head, c - head], fg);

    // body
    canvas.draw_line((c, c - head), (c, c + head), size / 15, fg);

    let limb = size / 20;
    let leg = s / 4;
    let hip = (c, c + head);
    canvas.draw_line(hip, (c - leg / 2, c + head + leg), limb, fg);
    canvas.draw_line(hip, (c + leg / 2, c + head + leg / 2), limb, fg);

    let arm = s / 3;
    canvas.draw_line((c, c), (c - arm / 2, c - arm / 3), limb, fg);
    canvas.draw_line((c, c), (c + arm / 2, c - arm / 4), limb, fg);

    if with_label && size >= LABEL_MIN_SIZE {
        let font_size = (size / 4).max(10);
        let (text_w, _) = font::text_size(LABEL, font_size);
        let origin = (c - text_w as i32 / 2, c + head * 2);
        canvas.draw_text(origin, LABEL, font_size, fg);
    }

    Ok(canvas.into_image())
}
