use super::ManifestError;
use crate::spec::ios::{IconSpec, Idiom};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const FILENAME: &str = "Contents.json";

/// The `Contents.json` of an Xcode app icon set.
#[derive(Debug, PartialEq, Serialize)]
pub struct Contents {
    pub images: Vec<Image>,
    pub info: Info,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Image {
    pub filename: String,
    pub idiom: Idiom,
    pub scale: String,
    pub size: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Info {
    pub author: &'static str,
    pub version: u32,
}

impl Default for Info {
    fn default() -> Self {
        Info {
            author: "xcode",
            version: 1,
        }
    }
}

impl Contents {
    pub fn new(icons: &[IconSpec]) -> Self {
        let images = icons
            .iter()
            .map(|icon| Image {
                filename: icon.filename.to_owned(),
                idiom: icon.idiom,
                scale: icon.scale_label(),
                size: icon.size_label(),
            })
            .collect();
        Contents {
            images,
            info: Info::default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn path(output_dir: &Path) -> PathBuf {
    output_dir.join(FILENAME)
}

pub fn write(output_dir: &Path, icons: &[IconSpec]) -> Result<PathBuf, ManifestError> {
    let manifest_path = path(output_dir);
    let json = Contents::new(icons)
        .to_json()
        .map_err(|e| ManifestError {
            path: manifest_path.clone(),
            source: e.into(),
        })?;
    super::write_file(manifest_path, json)
}
