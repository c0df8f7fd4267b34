use std::fs;
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

use crate::error::{IconError, Result};

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)?;
    Ok(buf)
}

/// Multi-resolution ICO, one PNG entry per image in the given order.
pub fn encode_ico(images: &[RgbaImage]) -> Result<Vec<u8>> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for img in images {
        let icon = IconImage::from_rgba_data(img.width(), img.height(), img.as_raw().clone());
        dir.add_entry(IconDirEntry::encode_as_png(&icon).map_err(IconError::Ico)?);
    }
    let mut buf = Vec::new();
    dir.write(&mut buf).map_err(IconError::Ico)?;
    Ok(buf)
}

/// Write via a sibling temp file and rename, creating parent directories.
/// The destination is never left half-written.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, bytes).map_err(|e| IconError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(IconError::io(path, e));
    }
    Ok(())
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<PathBuf> {
    let bytes = encode_png(img)?;
    write_atomic(path, &bytes)?;
    Ok(path.to_path_buf())
}

pub fn save_ico(images: &[RgbaImage], path: &Path) -> Result<PathBuf> {
    let bytes = encode_ico(images)?;
    write_atomic(path, &bytes)?;
    Ok(path.to_path_buf())
}
