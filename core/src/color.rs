use image::Rgba;

use crate::error::{CoreError, Result};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
/// Google blue, the launcher icon background.
pub const BRAND_BLUE: Rgba<u8> = Rgba([0x42, 0x85, 0xF4, 0xFF]);

/// Parse `#RRGGBB`, `#RRGGBBAA` or one of a handful of colour names.
pub fn parse_color(spec: &str) -> Result<Rgba<u8>> {
    let s = spec.trim();
    match s.to_ascii_lowercase().as_str() {
        "white" => return Ok(WHITE),
        "black" => return Ok(Rgba([0, 0, 0, 255])),
        "transparent" => return Ok(TRANSPARENT),
        _ => {}
    }

    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| CoreError::InvalidColor(spec.to_string()))?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(CoreError::InvalidColor(spec.to_string()));
    }

    let mut channels = [255u8; 4];
    for (i, channel) in channels.iter_mut().take(hex.len() / 2).enumerate() {
        *channel = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
            .map_err(|_| CoreError::InvalidColor(spec.to_string()))?;
    }
    Ok(Rgba(channels))
}
