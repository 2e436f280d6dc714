//! Static tables describing every icon file a platform needs.
use std::{fmt::Display, path::PathBuf};

pub mod android;
pub mod ios;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// Name of the output directory used when none is given explicitly.
    pub fn default_output_dir(&self) -> &'static str {
        match self {
            Platform::Ios => "AppIcon.appiconset",
            Platform::Android => "android-icons",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "iOS"),
            Platform::Android => write!(f, "Android"),
        }
    }
}

/// A single output image: where it goes and how large it is.
pub trait IconTarget: Display {
    fn pixel_size(&self) -> u32;

    fn filename(&self) -> &str;

    /// Subdirectory of the output directory, if the platform uses one.
    fn folder(&self) -> Option<&str> {
        None
    }

    fn relative_path(&self) -> PathBuf {
        match self.folder() {
            Some(folder) => PathBuf::from(folder).join(self.filename()),
            None => PathBuf::from(self.filename()),
        }
    }
}
