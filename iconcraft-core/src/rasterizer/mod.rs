//! Backends that turn the source image into a square PNG of a given size.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod scaler;
pub mod sips;

pub use scaler::{Filter, Scaler};
pub use sips::Sips;

/// Writes a `size` × `size` PNG rendition of `input` to `output`.
///
/// Implementations overwrite an existing `output` and never create its parent
/// directory.
pub trait Rasterizer {
    fn resize(&self, input: &Path, output: &Path, size: u32) -> eyre::Result<()>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    #[default]
    Builtin,
    Sips,
}

#[derive(Debug, thiserror::Error)]
#[error("the sips rasterizer requires macOS, use the builtin rasterizer instead")]
pub struct UnsupportedHost;

/// Builds the configured rasterizer.
///
/// `sips` only ships with macOS, so picking it elsewhere is an error unless a
/// replacement binary is named explicitly.
pub fn from_config(
    kind: Kind,
    filter: Filter,
    sips_binary: Option<PathBuf>,
) -> Result<Box<dyn Rasterizer>, UnsupportedHost> {
    match kind {
        Kind::Builtin => Ok(Box::new(Scaler::new(filter))),
        Kind::Sips => match sips_binary {
            Some(binary) => Ok(Box::new(Sips::new(binary))),
            None if cfg!(target_os = "macos") => Ok(Box::new(Sips::default())),
            None => Err(UnsupportedHost),
        },
    }
}
