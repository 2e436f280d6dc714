use clap::Parser;

pub mod cli;
pub mod commands;
pub mod logging;

/// Entry point shared by the `iconcraft` binary and the integration tests.
pub fn run() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = cli::Cli::parse();
    logging::setup_logger(cli.verbose)?;

    let config = commands::load_config(cli.config_file.as_deref())?;
    if cli.plan {
        commands::plan(&cli, &config)
    } else {
        commands::generate(&cli, &config)
    }
}
