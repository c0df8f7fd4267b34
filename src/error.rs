use std::io;
use std::path::{Path, PathBuf};

use stepicons_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("source image not found (looked for {})", join_paths(.tried))]
    SourceNotFound { tried: Vec<PathBuf> },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ICO encoding failed: {0}")]
    Ico(#[source] io::Error),

    #[error("could not serialise asset catalog: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl IconError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        IconError::Io { path: path.to_path_buf(), source }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, IconError>;
