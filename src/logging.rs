//! Tracing initialization for the binaries.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels,
/// e.g. `BLOG_LOG=blog_generator=debug`.
pub const LOG_ENV: &str = "BLOG_LOG";

/// Initialize logging to stderr.
///
/// `BLOG_LOG` wins when set and valid. Otherwise `verbose` selects
/// `blog_generator=debug`, and the default is `blog_generator=info`.
/// Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "blog_generator=debug"
        } else {
            "blog_generator=info"
        };
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
