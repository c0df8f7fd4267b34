//! Android and iOS launcher icons resized from one square-ish source image.

use std::path::Path;

use image::RgbaImage;
use stepicons_core::{crop_to_square, fit_square};

use crate::error::{IconError, Result};
use crate::logger::{log_error, log_line};
use crate::models::{AppIconContents, AppIconImage, AssetInfo, Config, GenerationReport, Idiom};
use crate::output::{save_png, write_atomic};
use crate::targets::{launcher_path, ANDROID_DENSITIES, IOS_CONTENTS_FILE, IOS_ICONS, IOS_ICONSET_DIR};

/// Resize the configured source into every Android density and iOS slot,
/// then write the asset catalog's `Contents.json`.
///
/// A missing or undecodable source is an error and nothing is written.
/// Individual outputs that fail are logged and the rest carry on.
pub fn generate_from_source(cfg: &Config) -> Result<GenerationReport> {
    let source = cfg.resolve(&cfg.source_image);
    if !source.is_file() {
        return Err(IconError::SourceNotFound { tried: vec![source] });
    }
    let square = crop_to_square(&image::open(&source)?.to_rgba8());
    let mut report = GenerationReport::default();

    for bucket in &ANDROID_DENSITIES {
        let path = cfg.resolve(launcher_path(bucket));
        report.record(path.clone(), resize_and_save(cfg, &square, &path, bucket.size));
    }

    let iconset = cfg.resolve(IOS_ICONSET_DIR);
    for icon in &IOS_ICONS {
        let path = iconset.join(icon.filename());
        report.record(path.clone(), resize_and_save(cfg, &square, &path, icon.pixels()));
    }

    let contents_path = iconset.join(IOS_CONTENTS_FILE);
    let outcome = serde_json::to_vec_pretty(&app_icon_contents())
        .map_err(IconError::from)
        .and_then(|json| write_atomic(&contents_path, &json));
    if let Err(e) = &outcome {
        log_error(&format!("Error writing {}", contents_path.display()), e);
    }
    report.record(contents_path, outcome);

    Ok(report)
}

fn resize_and_save(cfg: &Config, square: &RgbaImage, path: &Path, size: u32) -> Result<()> {
    let outcome = fit_square(square, size, cfg.resize_filter.filter_type())
        .map_err(IconError::from)
        .and_then(|img| save_png(&img, path));
    match outcome {
        Ok(_) => {
            log_line(&format!("Generated {} ({}x{})", path.display(), size, size));
            Ok(())
        }
        Err(e) => {
            log_error(&format!("Error processing {}", path.display()), &e);
            Err(e)
        }
    }
}

/// Asset catalog listing, grouped by idiom the way Xcode writes it.
pub fn app_icon_contents() -> AppIconContents {
    let mut images = Vec::new();
    for idiom in [Idiom::Iphone, Idiom::Ipad, Idiom::IosMarketing] {
        for icon in IOS_ICONS.iter().filter(|i| i.idioms.contains(&idiom)) {
            images.push(AppIconImage {
                size: icon.size_label(),
                idiom,
                filename: icon.filename(),
                scale: icon.scale_label(),
            });
        }
    }
    AppIconContents { images, info: AssetInfo::default() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::collections::HashSet;
    use std::fs;

    fn project_with_source(w: u32, h: u32) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { project_root: dir.path().to_path_buf(), ..Config::default() };
        RgbaImage::from_fn(w, h, |x, _| if x < w / 2 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 255, 255]) })
            .save(cfg.resolve("ic_launcher.png"))
            .unwrap();
        (dir, cfg)
    }

    #[test]
    fn missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { project_root: dir.path().to_path_buf(), ..Config::default() };
        let err = generate_from_source(&cfg).unwrap_err();
        assert!(matches!(err, IconError::SourceNotFound { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn undecodable_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config { project_root: dir.path().to_path_buf(), ..Config::default() };
        fs::write(cfg.resolve("ic_launcher.png"), b"not a png").unwrap();
        assert!(matches!(generate_from_source(&cfg), Err(IconError::Image(_))));
        assert!(!cfg.resolve("android").exists());
    }

    #[test]
    fn non_square_source_fills_every_slot() {
        let (_dir, cfg) = project_with_source(120, 80);
        let report = generate_from_source(&cfg).unwrap();
        assert!(report.is_clean(), "{:?}", report.failed);
        assert_eq!(report.written.len(), ANDROID_DENSITIES.len() + IOS_ICONS.len() + 1);

        for bucket in &ANDROID_DENSITIES {
            let img = image::open(cfg.resolve(launcher_path(bucket))).unwrap();
            assert_eq!((img.width(), img.height()), (bucket.size, bucket.size));
        }
        let iconset = cfg.resolve(IOS_ICONSET_DIR);
        for icon in &IOS_ICONS {
            let img = image::open(iconset.join(icon.filename())).unwrap();
            assert_eq!(img.width(), icon.pixels());
            assert_eq!(img.height(), icon.pixels());
        }
    }

    #[test]
    fn one_failed_output_does_not_stop_the_rest() {
        let (_dir, cfg) = project_with_source(64, 64);
        let blocked = cfg.resolve(launcher_path(&ANDROID_DENSITIES[0]));
        fs::create_dir_all(&blocked).unwrap();

        let report = generate_from_source(&cfg).unwrap();
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, blocked);
        assert_eq!(report.written.len(), ANDROID_DENSITIES.len() - 1 + IOS_ICONS.len() + 1);
        for bucket in &ANDROID_DENSITIES[1..] {
            assert!(cfg.resolve(launcher_path(bucket)).is_file(), "{} missing", bucket.folder);
        }
        let iconset = cfg.resolve(IOS_ICONSET_DIR);
        for icon in &IOS_ICONS {
            assert!(iconset.join(icon.filename()).is_file());
        }
        assert!(iconset.join(IOS_CONTENTS_FILE).is_file());
    }

    #[test]
    fn contents_json_references_generated_files() {
        let (_dir, cfg) = project_with_source(64, 64);
        generate_from_source(&cfg).unwrap();

        let iconset = cfg.resolve(IOS_ICONSET_DIR);
        let raw = fs::read(iconset.join(IOS_CONTENTS_FILE)).unwrap();
        let contents: AppIconContents = serde_json::from_slice(&raw).unwrap();
        assert_eq!(contents, app_icon_contents());
        assert_eq!(contents.info, AssetInfo { version: 1, author: "xcode".into() });

        let expected: usize = IOS_ICONS.iter().map(|i| i.idioms.len()).sum();
        assert_eq!(contents.images.len(), expected);
        let files: HashSet<&str> = contents.images.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(files.len(), IOS_ICONS.len());
        for f in files {
            assert!(iconset.join(f).is_file(), "{f} listed but not written");
        }
        assert_eq!(contents.images.last().unwrap().idiom, Idiom::IosMarketing);
    }
}
