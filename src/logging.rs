//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The filter is read from `SNAPDECK_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`. Navigation commands log at `debug`, committed
//! transitions and live-region announcements at `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "SNAPDECK_LOG";
const DEFAULT_FILTER: &str = "info";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_target(false))
        .try_init();
}
