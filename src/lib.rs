//! Icon asset generation for the step counter app.
//!
//! Three entry points, each shipped as its own binary:
//! - [`launcher::generate_launcher_icons`] draws the launcher icon for every
//!   Android density and packs the Windows ICO;
//! - [`from_source::generate_from_source`] resizes `ic_launcher.png` for
//!   Android and iOS;
//! - [`notification::create_notification_icon`] keys the launcher icon into a
//!   status bar icon.

pub mod config;
pub mod error;
pub mod from_source;
pub mod launcher;
pub mod logger;
pub mod models;
pub mod notification;
pub mod output;
pub mod paths;
pub mod targets;

pub use error::{IconError, Result};
pub use models::{Config, GenerationReport};

/// Log the outcome of a batch run.
pub fn log_report(report: &GenerationReport, done: &str) {
    if report.is_clean() {
        logger::log_line(done);
    } else {
        logger::log_line(&format!(
            "{} of {} outputs written, {} failed",
            report.written.len(),
            report.written.len() + report.failed.len(),
            report.failed.len()
        ));
    }
}
