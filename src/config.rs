use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::logger::{log_line, log_warn};
use crate::models::{Config, ResizeFilter};

/// Optional overrides, looked up in the working directory.
pub const CONFIG_FILE: &str = "stepicons.txt";

/// Read `stepicons.txt`; a missing file just means defaults.
pub fn read_config() -> Config {
    match read_config_from(Path::new(CONFIG_FILE)) {
        Ok(cfg) => {
            log_line(&format!("Loaded settings from {}", CONFIG_FILE));
            cfg
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
        Err(e) => {
            log_warn(&format!("Ignoring {}: {}", CONFIG_FILE, e));
            Config::default()
        }
    }
}

pub fn read_config_from(path: &Path) -> Result<Config, io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(parse_config(&content))
}

/// `key=value` per line; `#` starts a comment, unknown keys are ignored.
pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else { continue };
        let v = v.trim();
        match k.trim() {
            "project_root" if !v.is_empty() => cfg.project_root = PathBuf::from(v),
            "source_image" if !v.is_empty() => cfg.source_image = PathBuf::from(v),
            "resize_filter" => match ResizeFilter::parse(v) {
                Some(f) => cfg.resize_filter = f,
                None => log_warn(&format!("Unknown resize_filter {:?}, keeping {:?}", v, cfg.resize_filter)),
            },
            "background_color" if !v.is_empty() => cfg.background_color = v.to_string(),
            "foreground_color" if !v.is_empty() => cfg.foreground_color = v.to_string(),
            _ => {}
        }
    }
    cfg
}
