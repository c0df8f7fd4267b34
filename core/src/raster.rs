//! Minimal opaque rasteriser: shapes overwrite pixels, no blending.

use image::{Rgba, RgbaImage};

use crate::error::{CoreError, Result};
use crate::font;

pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::ZeroSize);
        }
        Ok(Self { img: RgbaImage::new(width, height) })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    #[inline]
    fn paint(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Filled ellipse inscribed in the inclusive box `[x0, y0, x1, y1]`.
    pub fn fill_ellipse(&mut self, bbox: [i32; 4], color: Rgba<u8>) {
        let (x0, x1) = (bbox[0].min(bbox[2]), bbox[0].max(bbox[2]));
        let (y0, y1) = (bbox[1].min(bbox[3]), bbox[1].max(bbox[3]));
        let cx = (x0 + x1 + 1) as f32 * 0.5;
        let cy = (y0 + y1 + 1) as f32 * 0.5;
        let rx = (x1 - x0 + 1) as f32 * 0.5;
        let ry = (y1 - y0 + 1) as f32 * 0.5;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.paint(x, y, color);
                }
            }
        }
    }

    /// Straight line with butt ends. Widths of 0 or 1 draw a 1px line.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Rgba<u8>) {
        if width <= 1 {
            self.draw_thin_line(from, to, color);
            return;
        }

        let half = width as f32 * 0.5;
        let (ax, ay) = (from.0 as f32, from.1 as f32);
        let (dx, dy) = ((to.0 - from.0) as f32, (to.1 - from.1) as f32);
        let len = (dx * dx + dy * dy).sqrt();
        let pad = half.ceil() as i32 + 1;

        let min_x = from.0.min(to.0) - pad;
        let max_x = from.0.max(to.0) + pad;
        let min_y = from.1.min(to.1) - pad;
        let max_y = from.1.max(to.1) + pad;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (vx, vy) = (x as f32 - ax, y as f32 - ay);
                let inside = if len == 0.0 {
                    (-half..half).contains(&vx) && (-half..half).contains(&vy)
                } else {
                    let along = (vx * dx + vy * dy) / len;
                    let across = cross(dx, dy, vx, vy) / len;
                    (0.0..=len).contains(&along) && (-half..half).contains(&across)
                };
                if inside {
                    self.paint(x, y, color);
                }
            }
        }
    }

    fn draw_thin_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.paint(x, y, color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Render `text` with the built-in bitmap font, top-left corner at `origin`.
    pub fn draw_text(&mut self, origin: (i32, i32), text: &str, font_size: u32, color: Rgba<u8>) {
        let scale = font::scale_for(font_size) as i32;
        let advance = (font::GLYPH_WIDTH + font::GLYPH_SPACING) as i32 * scale;

        for (i, c) in text.chars().enumerate() {
            let g = font::glyph(c);
            let gx = origin.0 + i as i32 * advance;
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if !font::glyph_bit(g, col, row) {
                        continue;
                    }
                    let px = gx + col as i32 * scale;
                    let py = origin.1 + row as i32 * scale;
                    for oy in 0..scale {
                        for ox in 0..scale {
                            self.paint(px + ox, py + oy, color);
                        }
                    }
                }
            }
        }
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{TRANSPARENT, WHITE};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn painted(c: &Canvas) -> usize {
        c.image().pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn zero_sized_canvas_is_an_error() {
        assert!(matches!(Canvas::new(0, 4), Err(CoreError::ZeroSize)));
    }

    #[test]
    fn ellipse_fills_centre_but_not_corners() {
        let mut c = Canvas::new(48, 48).unwrap();
        c.fill_ellipse([0, 0, 47, 47], RED);
        let img = c.image();
        assert_eq!(*img.get_pixel(24, 24), RED);
        assert_eq!(*img.get_pixel(24, 0), RED);
        assert_eq!(*img.get_pixel(0, 24), RED);
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
            assert_eq!(*img.get_pixel(x, y), TRANSPARENT, "corner {x},{y}");
        }
    }

    #[test]
    fn ellipse_is_clipped_to_canvas() {
        let mut c = Canvas::new(10, 10).unwrap();
        c.fill_ellipse([-10, -10, 9, 9], RED);
        assert_eq!(*c.image().get_pixel(0, 0), RED);
    }

    #[test]
    fn wide_horizontal_line_has_requested_thickness() {
        let mut c = Canvas::new(20, 20).unwrap();
        c.draw_line((2, 10), (17, 10), 4, WHITE);
        let column: Vec<u32> = (0..20).filter(|&y| c.image().get_pixel(8, y)[3] != 0).collect();
        assert_eq!(column, vec![8, 9, 10, 11]);
        // butt ends
        assert_eq!(c.image().get_pixel(1, 10)[3], 0);
        assert_eq!(c.image().get_pixel(18, 10)[3], 0);
    }

    #[test]
    fn thin_line_touches_both_endpoints() {
        let mut c = Canvas::new(10, 10).unwrap();
        c.draw_line((1, 1), (8, 5), 1, WHITE);
        assert_eq!(*c.image().get_pixel(1, 1), WHITE);
        assert_eq!(*c.image().get_pixel(8, 5), WHITE);
        assert_eq!(painted(&c), 8);
    }

    #[test]
    fn text_lands_inside_its_measured_box() {
        let mut c = Canvas::new(40, 20).unwrap();
        c.draw_text((2, 3), "SC", 16, WHITE);
        let (w, h) = font::text_size("SC", 16);
        for (x, y, p) in c.image().enumerate_pixels() {
            if p[3] != 0 {
                assert!(x >= 2 && x < 2 + w && y >= 3 && y < 3 + h, "stray pixel at {x},{y}");
            }
        }
        assert!(painted(&c) > 0);
    }
}
