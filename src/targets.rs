//! Hardcoded output layout of the Flutter project.

use crate::models::{DensityBucket, Idiom, IosIcon};

pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";
pub const LAUNCHER_FILE: &str = "ic_launcher.png";
pub const NOTIFICATION_ICON: &str = "android/app/src/main/res/drawable/ic_notification.png";
pub const IOS_ICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
pub const IOS_CONTENTS_FILE: &str = "Contents.json";
pub const WINDOWS_ICO: &str = "windows/runner/resources/app_icon.ico";

// mdpi base is 48px
pub const ANDROID_DENSITIES: [DensityBucket; 5] = [
    DensityBucket { folder: "mipmap-mdpi", size: 48 },
    DensityBucket { folder: "mipmap-hdpi", size: 72 },
    DensityBucket { folder: "mipmap-xhdpi", size: 96 },
    DensityBucket { folder: "mipmap-xxhdpi", size: 144 },
    DensityBucket { folder: "mipmap-xxxhdpi", size: 192 },
];

/// Notification icon source, best first.
pub const NOTIFICATION_SOURCE_ORDER: [&str; 5] =
    ["mipmap-xxxhdpi", "mipmap-xxhdpi", "mipmap-xhdpi", "mipmap-hdpi", "mipmap-mdpi"];

const PHONE: &[Idiom] = &[Idiom::Iphone];
const PAD: &[Idiom] = &[Idiom::Ipad];
const BOTH: &[Idiom] = &[Idiom::Iphone, Idiom::Ipad];
const STORE: &[Idiom] = &[Idiom::IosMarketing];

const fn ios(points: f32, scale: u32, idioms: &'static [Idiom]) -> IosIcon {
    IosIcon { points, scale, idioms }
}

pub const IOS_ICONS: [IosIcon; 21] = [
    ios(20.0, 1, PAD),
    ios(20.0, 2, BOTH),
    ios(20.0, 3, PHONE),
    ios(29.0, 1, BOTH),
    ios(29.0, 2, BOTH),
    ios(29.0, 3, PHONE),
    ios(40.0, 1, PAD),
    ios(40.0, 2, BOTH),
    ios(40.0, 3, PHONE),
    ios(50.0, 1, PAD),
    ios(50.0, 2, PAD),
    ios(57.0, 1, PHONE),
    ios(57.0, 2, PHONE),
    ios(60.0, 2, PHONE),
    ios(60.0, 3, PHONE),
    ios(72.0, 1, PAD),
    ios(72.0, 2, PAD),
    ios(76.0, 1, PAD),
    ios(76.0, 2, PAD),
    ios(83.5, 2, PAD),
    ios(1024.0, 1, STORE),
];

pub const WINDOWS_ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

pub fn launcher_path(bucket: &DensityBucket) -> String {
    format!("{}/{}/{}", ANDROID_RES_DIR, bucket.folder, LAUNCHER_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn densities_scale_from_mdpi() {
        let base = ANDROID_DENSITIES[0].size;
        let factors: Vec<f32> = ANDROID_DENSITIES.iter().map(|b| b.size as f32 / base as f32).collect();
        assert_eq!(factors, vec![1.0, 1.5, 2.0, 3.0, 4.0]);
        assert_eq!(launcher_path(&ANDROID_DENSITIES[4]), "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png");
    }

    #[test]
    fn notification_sources_cover_every_density() {
        let folders: HashSet<_> = ANDROID_DENSITIES.iter().map(|b| b.folder).collect();
        let order: HashSet<_> = NOTIFICATION_SOURCE_ORDER.iter().copied().collect();
        assert_eq!(folders, order);
        assert_eq!(NOTIFICATION_SOURCE_ORDER[0], "mipmap-xxxhdpi");
    }

    #[test]
    fn ios_filenames_are_unique_and_sized() {
        let names: HashSet<String> = IOS_ICONS.iter().map(|i| i.filename()).collect();
        assert_eq!(names.len(), IOS_ICONS.len());

        let px: Vec<(String, u32)> = IOS_ICONS
            .iter()
            .filter(|i| i.points == 83.5 || i.points == 1024.0)
            .map(|i| (i.filename(), i.pixels()))
            .collect();
        assert_eq!(
            px,
            vec![
                ("Icon-App-83.5x83.5@2x.png".to_string(), 167),
                ("Icon-App-1024x1024@1x.png".to_string(), 1024),
            ]
        );
    }
}
