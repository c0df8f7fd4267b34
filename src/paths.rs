use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::models::Config;
use crate::targets::{ANDROID_RES_DIR, LAUNCHER_FILE, NOTIFICATION_SOURCE_ORDER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    pub path: PathBuf,
    /// False when the preferred candidate was missing and a later one was used.
    pub preferred: bool,
}

/// First existing path, in order. The error carries every probed path.
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Result<ResolvedSource> {
    for (i, c) in candidates.iter().enumerate() {
        if c.as_ref().is_file() {
            return Ok(ResolvedSource { path: c.as_ref().to_path_buf(), preferred: i == 0 });
        }
    }
    Err(IconError::SourceNotFound {
        tried: candidates.iter().map(|c| c.as_ref().to_path_buf()).collect(),
    })
}

/// Launcher icons to key the notification icon from, highest density first.
pub fn notification_source_candidates(cfg: &Config) -> Vec<PathBuf> {
    NOTIFICATION_SOURCE_ORDER
        .iter()
        .map(|folder| cfg.resolve(ANDROID_RES_DIR).join(folder).join(LAUNCHER_FILE))
        .collect()
}
