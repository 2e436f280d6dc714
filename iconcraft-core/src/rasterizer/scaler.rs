use super::Rasterizer;
use eyre::WrapErr;
use image::{imageops::FilterType, DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};
use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

/// Resampling filter used by the builtin rasterizer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// In-process rasterizer built on the `image` crate.
///
/// The last decoded source is kept, so rendering every record of a table from
/// the same input reads it only once.
#[derive(Debug, Default, Clone)]
pub struct Scaler {
    filter: Filter,
    source: RefCell<Option<(PathBuf, DynamicImage)>>,
}

impl Scaler {
    pub fn new(filter: Filter) -> Self {
        Scaler {
            filter,
            source: RefCell::default(),
        }
    }

    fn source(&self, input: &Path) -> eyre::Result<DynamicImage> {
        let mut cached = self.source.borrow_mut();
        match &*cached {
            Some((path, image)) if path == input => Ok(image.clone()),
            _ => {
                tracing::debug!("decoding {}", input.display());
                let image = image::open(input)
                    .wrap_err_with(|| format!("failed to read image {}", input.display()))?;
                *cached = Some((input.to_owned(), image.clone()));
                Ok(image)
            }
        }
    }
}

impl Rasterizer for Scaler {
    fn resize(&self, input: &Path, output: &Path, size: u32) -> eyre::Result<()> {
        if size == 0 {
            eyre::bail!("invalid target size 0");
        }
        let source = self.source(input)?;
        let resized = if source.width() == size && source.height() == size {
            source
        } else {
            source.resize_exact(size, size, self.filter.into())
        };
        resized
            .save_with_format(output, ImageFormat::Png)
            .wrap_err_with(|| format!("failed to write image {}", output.display()))?;
        Ok(())
    }
}
