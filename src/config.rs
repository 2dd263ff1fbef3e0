// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `AUTH_MAX_TOKEN_LENGTH` | Largest accepted credential, in bytes | `1024` |
//! | `AUTH_MAX_MESSAGE_LENGTH` | Largest accepted base58 message segment | `512` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use crate::auth::token::{TokenLimits, DEFAULT_MAX_MESSAGE_LENGTH, DEFAULT_MAX_TOKEN_LENGTH};

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Upper bound on the credential after `Bearer `.
///
/// Checked before any base58 decoding, so oversized headers cost nothing.
pub const MAX_TOKEN_LENGTH_ENV: &str = "AUTH_MAX_TOKEN_LENGTH";

/// Upper bound on the base58 message segment.
pub const MAX_MESSAGE_LENGTH_ENV: &str = "AUTH_MAX_MESSAGE_LENGTH";

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Credential size limits from the environment.
///
/// Missing, unparsable or zero values fall back to the defaults.
pub fn token_limits_from_env() -> TokenLimits {
    token_limits_from(
        env::var(MAX_TOKEN_LENGTH_ENV).ok(),
        env::var(MAX_MESSAGE_LENGTH_ENV).ok(),
    )
}

fn token_limits_from(token: Option<String>, message: Option<String>) -> TokenLimits {
    let nonzero = |v: usize, default: usize| if v == 0 { default } else { v };
    TokenLimits {
        max_token_length: nonzero(parse_or(token, DEFAULT_MAX_TOKEN_LENGTH), DEFAULT_MAX_TOKEN_LENGTH),
        max_message_length: nonzero(
            parse_or(message, DEFAULT_MAX_MESSAGE_LENGTH),
            DEFAULT_MAX_MESSAGE_LENGTH,
        ),
    }
}

/// Bind address from `HOST` and `PORT`.
pub fn bind_address() -> String {
    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = parse_or(env::var(PORT_ENV).ok(), DEFAULT_PORT);
    format!("{host}:{port}")
}

/// Whether `LOG_FORMAT=json` was requested.
pub fn json_logs() -> bool {
    env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
