//! Log output setup
//!
//! Logs go to stderr so they interleave with the output of the Go commands.
//! `RUST_LOG` takes precedence over the level chosen by `--debug`.

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Timestamp format used in debug mode
pub const TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Default level directive for the given mode
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. Debug mode lowers the level and adds timestamps.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if debug {
        builder
            .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
            .init();
    } else {
        builder.without_time().init();
    }
}
