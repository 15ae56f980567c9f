//! Diagnostic logging to stderr through `tracing`.
//!
//! `FSNAV_LOG` (or `RUST_LOG`) takes an `EnvFilter` directive and wins over
//! the level picked from the command line flags.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::flags::Flags;

pub const LOG_ENV: &str = "FSNAV_LOG";

static INIT: Once = Once::new();

/// Level used when no filter comes from the environment.
pub fn level_for(flags: &Flags) -> Level {
    if flags.debug {
        Level::DEBUG
    } else if flags.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install the subscriber. Later calls are ignored.
pub fn init_logging(flags: &Flags) {
    let level = level_for(flags);
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(build_filter(level))
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(flags.debug),
            )
            .init();
    });
}
