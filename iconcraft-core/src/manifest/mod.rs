//! Descriptor files written next to the generated images.
use std::path::{Path, PathBuf};

pub mod android;
pub mod ios;

fn write_file(path: PathBuf, contents: impl AsRef<[u8]>) -> Result<PathBuf, ManifestError> {
    std::fs::write(&path, contents).map_err(|source| ManifestError {
        path: path.clone(),
        source,
    })?;
    tracing::info!("generated {}", path.display());
    Ok(path)
}

fn create_dir(path: &Path) -> Result<(), ManifestError> {
    std::fs::create_dir_all(path).map_err(|source| ManifestError {
        path: path.to_owned(),
        source,
    })
}

#[derive(Debug, thiserror::Error)]
#[error("failed to write {}", path.display())]
pub struct ManifestError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
