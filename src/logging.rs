// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default filter. JSON output keeps targets for
/// structured queries; pretty output hides them.
pub fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}
