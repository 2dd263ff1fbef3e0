// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authenticated principal representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Base58 wallet public key that signed the request's credential.
///
/// Only the gatekeeper constructs one after every check passed; handlers
/// receive it through the [`Authorized`](super::Authorized) extractor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Principal(String);

impl Principal {
    pub(crate) fn new(identity: String) -> Self {
        Self(identity)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Principal> for String {
    fn from(value: Principal) -> Self {
        value.0
    }
}
