// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic logging for the native binary.
//!
//! Logs go to stderr so result output on stdout stays pipeable.
//! The filter comes from `KUMONO_LOG` (same syntax as `RUST_LOG`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "KUMONO_LOG";

/// Filter used when `KUMONO_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,kumono_search=info";

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into())
}
