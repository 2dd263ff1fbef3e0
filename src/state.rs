// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use chrono::{DateTime, Utc};

use crate::auth::TokenLimits;

#[derive(Clone)]
pub struct AppState {
    /// Size limits every route verifier is built with.
    pub limits: TokenLimits,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(limits: TokenLimits) -> Self {
        Self {
            limits,
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TokenLimits::default())
    }
}
