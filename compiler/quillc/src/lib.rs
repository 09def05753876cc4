//! Quill literal toolkit CLI.
//!
//! Library half of the `quill` binary. Commands render into any
//! [`std::io::Write`] so they can be driven from tests.
//!
//! ```text
//! files ──► read (parallel) ──► lex_literals ──► FileReport ──► text | json
//! ```

pub mod commands;
pub mod options;
pub mod report;

pub use options::{parse_options, CliOptions, OptionsError, StrategyChoice};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects `debug`, and the
/// default is `warn`. Events go to stderr so they never mix with reports.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let default = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
