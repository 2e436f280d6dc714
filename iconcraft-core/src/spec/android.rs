use super::IconTarget;
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
    /// Play Store listing, not a screen density.
    Web,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
            Density::Web => "web",
        }
    }
}

impl Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IconSpec {
    pub density: Density,
    pub size: u32,
    pub filename: &'static str,
    pub folder: &'static str,
}

const fn icon(
    density: Density,
    size: u32,
    filename: &'static str,
    folder: &'static str,
) -> IconSpec {
    IconSpec {
        density,
        size,
        filename,
        folder,
    }
}

impl IconTarget for IconSpec {
    fn pixel_size(&self) -> u32 {
        self.size
    }

    fn filename(&self) -> &str {
        self.filename
    }

    fn folder(&self) -> Option<&str> {
        Some(self.folder)
    }
}

impl Display for IconSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({})", self.folder, self.filename, self.density)
    }
}

pub const ICONS: &[IconSpec] = &[
    // legacy launcher icons
    icon(Density::Mdpi, 48, "ic_launcher.png", "mipmap-mdpi"),
    icon(Density::Hdpi, 72, "ic_launcher.png", "mipmap-hdpi"),
    icon(Density::Xhdpi, 96, "ic_launcher.png", "mipmap-xhdpi"),
    icon(Density::Xxhdpi, 144, "ic_launcher.png", "mipmap-xxhdpi"),
    icon(Density::Xxxhdpi, 192, "ic_launcher.png", "mipmap-xxxhdpi"),
    // adaptive icon foreground layer (API 26+)
    icon(Density::Mdpi, 108, "ic_launcher_foreground.png", "mipmap-mdpi"),
    icon(Density::Hdpi, 162, "ic_launcher_foreground.png", "mipmap-hdpi"),
    icon(Density::Xhdpi, 216, "ic_launcher_foreground.png", "mipmap-xhdpi"),
    icon(Density::Xxhdpi, 324, "ic_launcher_foreground.png", "mipmap-xxhdpi"),
    icon(Density::Xxxhdpi, 432, "ic_launcher_foreground.png", "mipmap-xxxhdpi"),
    // round launcher icons
    icon(Density::Mdpi, 48, "ic_launcher_round.png", "mipmap-mdpi"),
    icon(Density::Hdpi, 72, "ic_launcher_round.png", "mipmap-hdpi"),
    icon(Density::Xhdpi, 96, "ic_launcher_round.png", "mipmap-xhdpi"),
    icon(Density::Xxhdpi, 144, "ic_launcher_round.png", "mipmap-xxhdpi"),
    icon(Density::Xxxhdpi, 192, "ic_launcher_round.png", "mipmap-xxxhdpi"),
    // notifications
    icon(Density::Mdpi, 24, "ic_notification.png", "drawable-mdpi"),
    icon(Density::Hdpi, 36, "ic_notification.png", "drawable-hdpi"),
    icon(Density::Xhdpi, 48, "ic_notification.png", "drawable-xhdpi"),
    icon(Density::Xxhdpi, 72, "ic_notification.png", "drawable-xxhdpi"),
    icon(Density::Xxxhdpi, 96, "ic_notification.png", "drawable-xxxhdpi"),
    // Play Store
    icon(Density::Web, 512, "ic_launcher_web.png", "web"),
];
