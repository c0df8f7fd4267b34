use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_root: PathBuf,
    pub source_image: PathBuf,  // default ic_launcher.png
    pub resize_filter: ResizeFilter,
    pub background_color: String, // default #4285F4
    pub foreground_color: String, // default white
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            source_image: PathBuf::from("ic_launcher.png"),
            resize_filter: ResizeFilter::Lanczos3,
            background_color: "#4285F4".to_string(),
            foreground_color: "white".to_string(),
        }
    }
}

impl Config {
    /// Resolve a project-relative path.
    pub fn resolve(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.project_root.join(rel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Some(Self::Nearest),
            "triangle" | "bilinear" => Some(Self::Triangle),
            "catmullrom" | "bicubic" => Some(Self::CatmullRom),
            "gaussian" => Some(Self::Gaussian),
            "lanczos3" | "lanczos" => Some(Self::Lanczos3),
            _ => None,
        }
    }

    pub fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Android launcher density tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityBucket {
    pub folder: &'static str,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Idiom {
    Iphone,
    Ipad,
    IosMarketing,
}

/// One slot of the iOS AppIcon asset catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IosIcon {
    pub points: f32,
    pub scale: u32,
    pub idioms: &'static [Idiom],
}

impl IosIcon {
    pub fn pixels(&self) -> u32 {
        (self.points * self.scale as f32) as u32
    }

    /// `20x20`, `83.5x83.5`
    pub fn size_label(&self) -> String {
        format!("{}x{}", self.points, self.points)
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    pub fn filename(&self) -> String {
        format!("Icon-App-{}@{}.png", self.size_label(), self.scale_label())
    }
}

/// `Contents.json` of an `.appiconset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppIconContents {
    pub images: Vec<AppIconImage>,
    pub info: AssetInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppIconImage {
    pub size: String,
    pub idiom: Idiom,
    pub filename: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub version: u32,
    pub author: String,
}

impl Default for AssetInfo {
    fn default() -> Self {
        Self { version: 1, author: "xcode".to_string() }
    }
}

/// Outcome of a batch run. Failures don't stop the batch.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl GenerationReport {
    pub fn record<E: std::fmt::Display>(&mut self, path: PathBuf, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => self.written.push(path),
            Err(e) => self.failed.push((path, e.to_string())),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
