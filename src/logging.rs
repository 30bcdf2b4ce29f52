// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Events go to stderr through a compact `tracing-subscriber` formatter.
//! The filter comes from `RUST_LOG`, else `FOLIO_LOG`, else
//! [`DEFAULT_FILTER`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Application-specific filter variable, read when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "FOLIO_LOG";

pub const DEFAULT_FILTER: &str = "folio=info";

/// Picks the filter directive from the two candidate variables.
#[must_use]
pub fn filter_directive(rust_log: Option<String>, app_log: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or_else(|| app_log.filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init() {
    let directive = filter_directive(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV).ok(),
    );
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Ignoring invalid log filter {directive:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(
            filter_directive(Some("debug".into()), Some("folio=trace".into())),
            "debug"
        );
    }

    #[test]
    fn app_variable_is_the_fallback() {
        assert_eq!(
            filter_directive(None, Some("folio=trace".into())),
            "folio=trace"
        );
        assert_eq!(
            filter_directive(Some("  ".into()), Some("folio=warn".into())),
            "folio=warn"
        );
    }

    #[test]
    fn default_applies_without_variables() {
        assert_eq!(filter_directive(None, None), DEFAULT_FILTER);
    }
}
