//! Tracing subscriber setup.
//!
//! Filter resolution order:
//! 1. `SECFMT_LOG` environment variable
//! 2. `RUST_LOG` environment variable
//! 3. `-v` count (warn, info, debug, trace)

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SECFMT_LOG";

/// Default filter directive for a given `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
