use super::Rasterizer;
use eyre::WrapErr;
use std::path::{Path, PathBuf};
use xshell::Shell;

/// Rasterizer that shells out to the macOS `sips` tool.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Sips {
    binary: PathBuf,
}

impl Default for Sips {
    fn default() -> Self {
        Sips::new("sips")
    }
}

impl Sips {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Sips {
            binary: binary.into(),
        }
    }
}

impl Rasterizer for Sips {
    fn resize(&self, input: &Path, output: &Path, size: u32) -> eyre::Result<()> {
        let sh = Shell::new()?;
        let size = size.to_string();
        tracing::debug!(
            "running {} -z {size} {size} {} --out {}",
            self.binary.display(),
            input.display(),
            output.display()
        );
        sh.cmd(&self.binary)
            .arg("-z")
            .arg(&size)
            .arg(&size)
            .arg(input)
            .arg("--out")
            .arg(output)
            .quiet()
            .ignore_stdout()
            .run()
            .wrap_err_with(|| format!("{} failed", self.binary.display()))?;
        Ok(())
    }
}
