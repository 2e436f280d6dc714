use super::{output_dirs, write_color};
use crate::cli::Cli;
use iconcraft_core::{appconfig::AppConfig, rasterizer, GenerateError, Generated};
use termcolor::Color;

fn print_summary(generated: &Generated) -> eyre::Result<()> {
    write_color(
        &format!(
            "{} icons written to {} ({} images, {} manifests)",
            generated.platform,
            generated.output_dir.display(),
            generated.images.len(),
            generated.manifests.len()
        ),
        Color::Green,
    )?;
    println!();
    Ok(())
}

pub fn generate(cli: &Cli, config: &AppConfig) -> eyre::Result<()> {
    if !cli.input.is_file() {
        return Err(GenerateError::InputNotFound(cli.input.clone()).into());
    }
    let kind = cli
        .rasterizer
        .map(Into::into)
        .unwrap_or(config.rasterizer);
    let rasterizer = rasterizer::from_config(kind, config.filter, config.sips_binary.clone())?;

    // every selected platform runs even if an earlier one failed
    let mut failures = Vec::new();
    for (platform, output_dir) in output_dirs(cli.platform, cli.output.as_deref(), &config.output) {
        match iconcraft_core::generate(platform, &cli.input, &output_dir, &*rasterizer) {
            Ok(generated) => print_summary(&generated)?,
            Err(error) => {
                write_color(&format!("{} icons failed", platform), Color::Red)?;
                println!();
                let report = eyre::Report::new(error)
                    .wrap_err(format!("failed to generate {} icons", platform));
                tracing::error!("{:#}", report);
                failures.push(report);
            }
        }
    }

    match failures.into_iter().next() {
        Some(report) => Err(report),
        None => Ok(()),
    }
}

pub fn plan(cli: &Cli, config: &AppConfig) -> eyre::Result<()> {
    for (platform, output_dir) in output_dirs(cli.platform, cli.output.as_deref(), &config.output) {
        print!("{}", iconcraft_core::plan(platform, &output_dir));
    }
    Ok(())
}
