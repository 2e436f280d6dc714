//! Turns a platform's icon table into a directory of images and manifests.
use crate::{
    manifest::{self, ManifestError},
    rasterizer::Rasterizer,
    spec::{android, ios, IconTarget, Platform},
};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to generate [icon #{}] {record} at {pixel_size}x{pixel_size}", index + 1)]
    ResizeFailed {
        index: usize,
        record: String,
        pixel_size: u32,
        #[source]
        source: eyre::Report,
    },
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ManifestError> for GenerateError {
    fn from(error: ManifestError) -> Self {
        GenerateError::Io {
            path: error.path,
            source: error.source,
        }
    }
}

/// Everything a successful run wrote.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Generated {
    pub platform: Platform,
    pub output_dir: PathBuf,
    /// One path per table entry, in table order.
    pub images: Vec<PathBuf>,
    pub manifests: Vec<PathBuf>,
}

/// Generates all icons of `platform` from `input` into `output_dir`.
///
/// Stops at the first record that can't be rasterized. Files written up to
/// that point are left in place and no manifest is written.
pub fn generate(
    platform: Platform,
    input: &Path,
    output_dir: &Path,
    rasterizer: &dyn Rasterizer,
) -> Result<Generated, GenerateError> {
    if !input.is_file() {
        return Err(GenerateError::InputNotFound(input.to_owned()));
    }
    create_dir(output_dir)?;

    tracing::info!("generating {} icons in {}", platform, output_dir.display());
    let (images, manifests) = match platform {
        Platform::Ios => {
            let images = rasterize_all(ios::ICONS, input, output_dir, rasterizer)?;
            (images, vec![manifest::ios::write(output_dir, ios::ICONS)?])
        }
        Platform::Android => {
            let images = rasterize_all(android::ICONS, input, output_dir, rasterizer)?;
            (images, manifest::android::write(output_dir)?)
        }
    };

    Ok(Generated {
        platform,
        output_dir: output_dir.to_owned(),
        images,
        manifests,
    })
}

fn rasterize_all<T: IconTarget>(
    icons: &[T],
    input: &Path,
    output_dir: &Path,
    rasterizer: &dyn Rasterizer,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut images = Vec::with_capacity(icons.len());
    for (index, icon) in icons.iter().enumerate() {
        if let Some(folder) = icon.folder() {
            create_dir(&output_dir.join(folder))?;
        }
        let path = output_dir.join(icon.relative_path());
        let size = icon.pixel_size();
        rasterizer.resize(input, &path, size).map_err(|source| {
            tracing::error!("failed to generate {}: {:#}", icon, source);
            GenerateError::ResizeFailed {
                index,
                record: icon.to_string(),
                pixel_size: size,
                source,
            }
        })?;
        tracing::info!("generated {} ({size}x{size})", icon.relative_path().display());
        images.push(path);
    }
    Ok(images)
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    tracing::debug!("creating directory {}", path.display());
    std::fs::create_dir_all(path).map_err(|source| GenerateError::Io {
        path: path.to_owned(),
        source,
    })
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Step {
    Image {
        record: String,
        path: PathBuf,
        pixel_size: u32,
    },
    Manifest {
        path: PathBuf,
    },
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Image {
                record,
                path,
                pixel_size,
            } => write!(
                f,
                "{record}: {} at {pixel_size}x{pixel_size}",
                path.display()
            ),
            Step::Manifest { path } => write!(f, "manifest: {}", path.display()),
        }
    }
}

/// What [`generate`] would write, without touching the file system.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Plan {
    pub platform: Platform,
    pub output_dir: PathBuf,
    pub steps: Vec<Step>,
}

pub fn plan(platform: Platform, output_dir: &Path) -> Plan {
    let (mut steps, manifests) = match platform {
        Platform::Ios => (
            image_steps(ios::ICONS, output_dir),
            vec![manifest::ios::path(output_dir)],
        ),
        Platform::Android => (
            image_steps(android::ICONS, output_dir),
            manifest::android::paths(output_dir),
        ),
    };
    steps.extend(manifests.into_iter().map(|path| Step::Manifest { path }));
    Plan {
        platform,
        output_dir: output_dir.to_owned(),
        steps,
    }
}

fn image_steps<T: IconTarget>(icons: &[T], output_dir: &Path) -> Vec<Step> {
    icons
        .iter()
        .map(|icon| Step::Image {
            record: icon.to_string(),
            path: output_dir.join(icon.relative_path()),
            pixel_size: icon.pixel_size(),
        })
        .collect()
}

impl Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} icons in {}", self.platform, self.output_dir.display())?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "[step #{}] {}", index + 1, step)?;
        }
        Ok(())
    }
}
