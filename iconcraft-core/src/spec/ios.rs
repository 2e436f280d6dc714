use super::IconTarget;
use serde::{Serialize, Serializer};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Idiom {
    Iphone,
    Ipad,
    Watch,
    Mac,
    IosMarketing,
}

impl Idiom {
    pub const ALL: [Idiom; 5] = [
        Idiom::Iphone,
        Idiom::Ipad,
        Idiom::Watch,
        Idiom::Mac,
        Idiom::IosMarketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::Watch => "watch",
            Idiom::Mac => "mac",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

impl Serialize for Idiom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Display for Idiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of the iOS app icon set.
///
/// `size` is the logical point size as it appears in `Contents.json`; the
/// rendered image is `size * scale` pixels square.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct IconSpec {
    pub size: f64,
    pub scale: u32,
    pub filename: &'static str,
    pub idiom: Idiom,
}

const fn icon(size: f64, scale: u32, filename: &'static str, idiom: Idiom) -> IconSpec {
    IconSpec {
        size,
        scale,
        filename,
        idiom,
    }
}

impl IconSpec {
    /// Logical size as `Contents.json` spells it, e.g. `60x60` or `83.5x83.5`.
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.size)
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

impl IconTarget for IconSpec {
    fn pixel_size(&self) -> u32 {
        (self.size * f64::from(self.scale)).round() as u32
    }

    fn filename(&self) -> &str {
        self.filename
    }
}

impl Display for IconSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}@{})",
            self.filename,
            self.idiom,
            self.size_label(),
            self.scale_label()
        )
    }
}

pub const ICONS: &[IconSpec] = &[
    // iPhone app
    icon(60.0, 2, "Icon-60@2x.png", Idiom::Iphone),
    icon(60.0, 3, "Icon-60@3x.png", Idiom::Iphone),
    // iPad app
    icon(76.0, 1, "Icon-76.png", Idiom::Ipad),
    icon(76.0, 2, "Icon-76@2x.png", Idiom::Ipad),
    icon(83.5, 2, "Icon-83.5@2x.png", Idiom::Ipad),
    // App Store
    icon(1024.0, 1, "Icon-1024.png", Idiom::IosMarketing),
    // settings
    icon(29.0, 1, "Icon-29.png", Idiom::Ipad),
    icon(29.0, 2, "Icon-29@2x.png", Idiom::Iphone),
    icon(29.0, 2, "Icon-29@2x.png", Idiom::Ipad),
    icon(29.0, 3, "Icon-29@3x.png", Idiom::Iphone),
    // spotlight
    icon(40.0, 1, "Icon-40.png", Idiom::Ipad),
    icon(40.0, 2, "Icon-40@2x.png", Idiom::Iphone),
    icon(40.0, 2, "Icon-40@2x.png", Idiom::Ipad),
    icon(40.0, 3, "Icon-40@3x.png", Idiom::Iphone),
    // notifications
    icon(20.0, 1, "Icon-20.png", Idiom::Ipad),
    icon(20.0, 2, "Icon-20@2x.png", Idiom::Iphone),
    icon(20.0, 2, "Icon-20@2x.png", Idiom::Ipad),
    icon(20.0, 3, "Icon-20@3x.png", Idiom::Iphone),
    // Apple Watch
    icon(24.0, 2, "Icon-24@2x.png", Idiom::Watch),
    icon(27.5, 2, "Icon-27.5@2x.png", Idiom::Watch),
    icon(29.0, 2, "Icon-29@2x.png", Idiom::Watch),
    icon(29.0, 3, "Icon-29@3x.png", Idiom::Watch),
    icon(40.0, 2, "Icon-40@2x.png", Idiom::Watch),
    icon(44.0, 2, "Icon-44@2x.png", Idiom::Watch),
    icon(50.0, 2, "Icon-50@2x.png", Idiom::Watch),
    icon(86.0, 2, "Icon-86@2x.png", Idiom::Watch),
    icon(98.0, 2, "Icon-98@2x.png", Idiom::Watch),
    icon(108.0, 2, "Icon-108@2x.png", Idiom::Watch),
    // Mac
    icon(16.0, 1, "Icon-16.png", Idiom::Mac),
    icon(16.0, 2, "Icon-16@2x.png", Idiom::Mac),
    icon(32.0, 1, "Icon-32.png", Idiom::Mac),
    icon(32.0, 2, "Icon-32@2x.png", Idiom::Mac),
    icon(128.0, 1, "Icon-128.png", Idiom::Mac),
    icon(128.0, 2, "Icon-128@2x.png", Idiom::Mac),
    icon(256.0, 1, "Icon-256.png", Idiom::Mac),
    icon(256.0, 2, "Icon-256@2x.png", Idiom::Mac),
    icon(512.0, 1, "Icon-512.png", Idiom::Mac),
    icon(512.0, 2, "Icon-512@2x.png", Idiom::Mac),
];
