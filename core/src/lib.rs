//! Pixel-level building blocks for the step counter icon tools.
//!
//! Nothing in here touches the filesystem; decoding, encoding and paths live
//! in the `stepicons` crate.

pub mod alpha_key;
pub mod color;
pub mod design;
pub mod error;
pub mod font;
pub mod raster;
pub mod square;

pub use alpha_key::{extract_foreground, extract_foreground_dynamic};
pub use color::parse_color;
pub use design::{step_counter_icon, IconStyle};
pub use error::CoreError;
pub use square::{crop_to_square, fit_square};
