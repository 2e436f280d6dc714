use tracing::Level;

fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn setup_logger(verbose: u8) -> eyre::Result<()> {
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(level(verbose)))
        .with(
            layer()
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
