//! Logging setup for the command-line tool.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "NESTMATCH_LOG";

/// Map `-v` occurrences to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `NESTMATCH_LOG` wins over `verbosity`.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive)
            .map_err(|e| anyhow::anyhow!("invalid {LOG_ENV} filter {directive:?}: {e}"))?,
        Err(_) => EnvFilter::new(default_directive(verbosity)),
    };

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
