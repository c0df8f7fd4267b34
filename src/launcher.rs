//! Procedurally drawn launcher icons: Android densities plus the Windows ICO.

use std::path::PathBuf;

use stepicons_core::{parse_color, step_counter_icon, IconStyle};

use crate::error::{IconError, Result};
use crate::logger::{log_error, log_line};
use crate::models::{Config, GenerationReport};
use crate::output::{save_ico, save_png};
use crate::targets::{launcher_path, ANDROID_DENSITIES, WINDOWS_ICO, WINDOWS_ICO_SIZES};

pub fn icon_style(cfg: &Config) -> Result<IconStyle> {
    Ok(IconStyle {
        background: parse_color(&cfg.background_color)?,
        foreground: parse_color(&cfg.foreground_color)?,
    })
}

/// Draw every Android density (with label) and pack the Windows ICO (without).
pub fn generate_launcher_icons(cfg: &Config) -> Result<GenerationReport> {
    let style = icon_style(cfg)?;
    let mut report = GenerationReport::default();

    for bucket in &ANDROID_DENSITIES {
        let path = cfg.resolve(launcher_path(bucket));
        let outcome = step_counter_icon(bucket.size, &style, true)
            .map_err(IconError::from)
            .and_then(|icon| save_png(&icon, &path));
        match &outcome {
            Ok(p) => log_line(&format!("Android icon created: {}", p.display())),
            Err(e) => log_error(&format!("Failed to create {}", path.display()), e),
        }
        report.record(path, outcome.map(|_| ()));
    }

    let ico_path = cfg.resolve(WINDOWS_ICO);
    let outcome = generate_windows_icon(&style, ico_path.clone());
    match &outcome {
        Ok(p) => log_line(&format!("Windows ICO file created: {}", p.display())),
        Err(e) => log_error(&format!("Failed to create {}", ico_path.display()), e),
    }
    report.record(ico_path, outcome.map(|_| ()));

    Ok(report)
}

pub fn generate_windows_icon(style: &IconStyle, path: PathBuf) -> Result<PathBuf> {
    let images = WINDOWS_ICO_SIZES
        .iter()
        .map(|&size| step_counter_icon(size, style, false))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    save_ico(&images, &path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ico::IconDir;
    use std::fs::File;

    #[test]
    fn writes_every_density_and_the_ico() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { project_root: dir.path().to_path_buf(), ..Config::default() };

        let report = generate_launcher_icons(&cfg).unwrap();
        assert!(report.is_clean(), "{:?}", report.failed);
        assert_eq!(report.written.len(), ANDROID_DENSITIES.len() + 1);

        for bucket in &ANDROID_DENSITIES {
            let img = image::open(cfg.resolve(launcher_path(bucket))).unwrap();
            assert_eq!((img.width(), img.height()), (bucket.size, bucket.size));
        }

        let ico = IconDir::read(File::open(cfg.resolve(WINDOWS_ICO)).unwrap()).unwrap();
        let sizes: Vec<u32> = ico.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, WINDOWS_ICO_SIZES.to_vec());
        assert!(ico.entries().iter().all(|e| e.is_png()));
    }

    #[test]
    fn one_failed_density_does_not_stop_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { project_root: dir.path().to_path_buf(), ..Config::default() };
        // a directory squatting on the mdpi output makes the rename fail
        let blocked = cfg.resolve(launcher_path(&ANDROID_DENSITIES[0]));
        std::fs::create_dir_all(&blocked).unwrap();

        let report = generate_launcher_icons(&cfg).unwrap();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, blocked);
        assert_eq!(report.written.len(), ANDROID_DENSITIES.len());
        for bucket in &ANDROID_DENSITIES[1..] {
            assert!(cfg.resolve(launcher_path(bucket)).is_file(), "{} missing", bucket.folder);
        }
        assert!(cfg.resolve(WINDOWS_ICO).is_file());
    }

    #[test]
    fn bad_colour_aborts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            project_root: dir.path().to_path_buf(),
            background_color: "nope".to_string(),
            ..Config::default()
        };
        assert!(matches!(generate_launcher_icons(&cfg), Err(IconError::Core(_))));
        assert!(!cfg.resolve("android").exists());
    }
}
