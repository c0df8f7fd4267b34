//! Status bar icon derived from the launcher icon by colour keying.

use std::path::PathBuf;

use stepicons_core::extract_foreground_dynamic;

use crate::error::Result;
use crate::logger::{log_line, log_warn};
use crate::models::Config;
use crate::output::save_png;
use crate::paths::{first_existing, notification_source_candidates};
use crate::targets::NOTIFICATION_ICON;

/// Key the highest-density launcher icon available into a white-on-transparent
/// notification icon. Either the full PNG is written or nothing is.
pub fn create_notification_icon(cfg: &Config) -> Result<PathBuf> {
    let candidates = notification_source_candidates(cfg);
    let source = first_existing(&candidates)?;
    if !source.preferred {
        log_warn(&format!(
            "{} not found, using {}",
            candidates[0].display(),
            source.path.display()
        ));
    }

    log_line(&format!("Processing {}...", source.path.display()));
    let img = image::open(&source.path)?;
    let keyed = extract_foreground_dynamic(&img);
    save_png(&keyed, &cfg.resolve(NOTIFICATION_ICON))
}
