use iconcraft_core::{rasterizer, Platform};
use std::path::PathBuf;

/// Generates iOS and Android app icon sets from a single source image.
#[derive(clap::Parser, Debug)]
#[command(name = "iconcraft", version)]
pub struct Cli {
    /// The source image, ideally a 1024x1024 PNG
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// The platform to generate icons for
    #[arg(short, long, value_enum, default_value_t = PlatformSelection::Both)]
    pub platform: PlatformSelection,

    /// Sets the output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sets a custom configuration file path
    #[arg(short, long, env = "ICONCRAFT_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Overrides the configured rasterizer
    #[arg(long, value_enum)]
    pub rasterizer: Option<RasterizerKind>,

    /// Prints the files that would be generated without writing anything
    #[arg(long)]
    pub plan: bool,

    /// Increases log verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlatformSelection {
    Ios,
    Android,
    Both,
}

impl PlatformSelection {
    pub fn platforms(&self) -> &'static [Platform] {
        match self {
            PlatformSelection::Ios => &[Platform::Ios],
            PlatformSelection::Android => &[Platform::Android],
            PlatformSelection::Both => &Platform::ALL,
        }
    }
}

#[derive(clap::ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RasterizerKind {
    Builtin,
    Sips,
}

impl From<RasterizerKind> for rasterizer::Kind {
    fn from(kind: RasterizerKind) -> Self {
        match kind {
            RasterizerKind::Builtin => rasterizer::Kind::Builtin,
            RasterizerKind::Sips => rasterizer::Kind::Sips,
        }
    }
}
