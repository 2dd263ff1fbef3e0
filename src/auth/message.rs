// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The signed `{action, exp}` payload.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::AuthError;

/// Message a wallet signs to authorize one action until `exp`.
///
/// Extra JSON fields are ignored when decoding. `exp` accepts any JSON
/// number; issuers write whole seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignedMessage {
    /// Action the holder is authorizing, e.g. `comment:create`.
    pub action: String,
    /// Unix timestamp (seconds) after which the message is stale.
    pub exp: Number,
}

impl SignedMessage {
    pub fn new(action: impl Into<String>, exp: i64) -> Self {
        Self {
            action: action.into(),
            exp: Number::from(exp),
        }
    }

    /// Raw bytes that get signed: the JSON encoding of the message.
    pub fn to_bytes(&self) -> Vec<u8> {
        // Serializing a String and a finite number cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Base58 form used as the middle credential segment.
    pub fn encode(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Interpret decoded message bytes.
    ///
    /// Only call this on bytes whose signature already verified.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AuthError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AuthError::InvalidMessageFormat(format!("not utf-8: {e}")))?;
        serde_json::from_str(text).map_err(|e| AuthError::InvalidMessageFormat(e.to_string()))
    }

    /// Strictly after `exp`; the expiry instant itself is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        if let Some(exp) = self.exp.as_i64() {
            return now > exp;
        }
        if self.exp.is_u64() {
            // Beyond i64 seconds, so never reached.
            return false;
        }
        match self.exp.as_f64() {
            Some(exp) => now as f64 > exp,
            None => true,
        }
    }
}
