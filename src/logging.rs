//! Diagnostic logging.
//!
//! Logs go to stderr so they never interleave with the interactive menu on
//! stdout. The level comes from the `-v` count unless `RUST_LOG` is set.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    /// Info and above.
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Map the number of `-v` flags to a verbosity.
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Self::Quiet,
            1 => Self::Normal,
            2 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    pub fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("prodtracker={}", verbosity.to_level());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
