// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route-owned action descriptors.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a protected route expects a credential to authorize.
///
/// Supplied by the route owner, never by the caller. When
/// `allow_skip_check` is set, any valid unexpired signature passes
/// regardless of the action it was signed for.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Action name the signed message must carry, e.g. `comment:create`.
    pub action: String,
    /// Skip action matching; only signature and expiry are enforced.
    #[serde(default, rename = "allowSkipCheck")]
    pub allow_skip_check: bool,
}

impl ActionDescriptor {
    /// Descriptor that requires an exact action match.
    pub fn strict(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            allow_skip_check: false,
        }
    }

    /// Descriptor for low-sensitivity routes that accept any action.
    pub fn skippable(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            allow_skip_check: true,
        }
    }

    /// Whether a message signed for `signed_action` is authorized here.
    ///
    /// Exact, case-sensitive comparison.
    pub fn authorizes(&self, signed_action: &str) -> bool {
        self.allow_skip_check || self.action == signed_action
    }
}
