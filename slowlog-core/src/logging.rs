use clap::ValueEnum;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Default directive when `RUST_LOG` is unset; keeps normal runs quiet.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Initialize the logging system with environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - Writes to stderr, leaving stdout for slow-log output
/// - Either compact text or JSON with flattened event fields
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal());

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = match format {
        LogFormat::Pretty => builder.compact().with_target(false).try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}
