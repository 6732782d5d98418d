use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the process-wide subscriber. Call once, before any demo runs.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used. Lines carry
/// the timestamp, level, component target and message.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_filter)?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(ansi_enabled(&std::io::stdout()))
                .with_target(true),
        )
        .try_init()?;

    Ok(())
}

/// Colour escapes only make sense on a terminal, not when piped.
fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(directives)?)
}
