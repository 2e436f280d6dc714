use crate::cli::PlatformSelection;
use dirs_next as dirs;
use iconcraft_core::{
    appconfig::{AppConfig, Output},
    Platform,
};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

mod generate;

pub use generate::{generate, plan};

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("iconcraft").join("config.toml"))
}

/// Loads the configuration file given on the command line, or the one in the
/// user's config directory if it exists.
pub fn load_config(config_file: Option<&Path>) -> eyre::Result<AppConfig> {
    let config = match config_file {
        Some(path) => AppConfig::parse_file(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => AppConfig::parse_file(&path)?,
            _ => AppConfig::default(),
        },
    };
    if let Some(source) = &config.source {
        tracing::debug!("using configuration file {}", source.display());
    }
    Ok(config)
}

/// Resolves the output directory of every selected platform.
///
/// An explicit output directory is used as-is for a single platform; with
/// several platforms it becomes the parent of the configured directories.
pub fn output_dirs(
    selection: PlatformSelection,
    output: Option<&Path>,
    config: &Output,
) -> Vec<(Platform, PathBuf)> {
    let platforms = selection.platforms();
    platforms
        .iter()
        .map(|&platform| {
            let dir = match output {
                Some(output) if platforms.len() == 1 => output.to_owned(),
                Some(output) => output.join(config.for_platform(platform)),
                None => config.for_platform(platform).to_owned(),
            };
            (platform, dir)
        })
        .collect()
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_color(text: &str, fg_color: Color) -> std::io::Result<()> {
    use std::io::Write as _;

    let mut stdout = StandardStream::stdout(color_choice(atty::is(atty::Stream::Stdout)));
    stdout.set_color(ColorSpec::new().set_fg(Some(fg_color)))?;
    let result = stdout.write_all(text.as_bytes());
    stdout.reset().ok();
    result
}
