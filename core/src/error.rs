use thiserror::Error;

/// Errors raised by the pixel-level helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid colour {0:?} (expected #RRGGBB, #RRGGBBAA or a colour name)")]
    InvalidColor(String),
    #[error("target size must be greater than zero")]
    ZeroSize,
    #[error("source image has no pixels")]
    EmptySource,
}

pub type Result<T> = std::result::Result<T, CoreError>;
