// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client side of the protocol: signing `{action, exp}` into a credential.
//!
//! Rust callers (integration tests, bots, other services) use this to talk
//! to gated routes:
//!
//! ```rust,ignore
//! let issuer = CredentialIssuer::new(signing_key);
//! let token = issuer.issue("comment:create", Utc::now().timestamp());
//! request.header(AUTHORIZATION, CredentialIssuer::bearer(&token));
//! ```

use chrono::Duration;
use ed25519_dalek::{Signer, SigningKey};

use super::message::SignedMessage;
use super::AuthError;

/// Default credential lifetime.
pub const DEFAULT_CREDENTIAL_TTL_MINUTES: i64 = 60;

/// Reserved action meaning "any cached, unexpired credential will do".
pub const SKIP_ACTION: &str = "skip";

/// Signs credentials with a wallet key.
pub struct CredentialIssuer {
    signing_key: SigningKey,
    identity: String,
}

impl CredentialIssuer {
    pub fn new(signing_key: SigningKey) -> Self {
        let identity = bs58::encode(signing_key.verifying_key().as_bytes()).into_string();
        Self {
            signing_key,
            identity,
        }
    }

    /// Base58 public key, as it appears in the first token segment.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Sign `action` valid for the default lifetime from `now`.
    pub fn issue(&self, action: &str, now: i64) -> String {
        self.issue_with_ttl(action, Duration::minutes(DEFAULT_CREDENTIAL_TTL_MINUTES), now)
    }

    pub fn issue_with_ttl(&self, action: &str, ttl: Duration, now: i64) -> String {
        self.sign(&SignedMessage::new(action, now + ttl.num_seconds()))
    }

    /// Produce `identity.message.signature`.
    pub fn sign(&self, message: &SignedMessage) -> String {
        self.sign_raw(&message.to_bytes())
    }

    /// Sign arbitrary message bytes; the server will still insist on JSON.
    pub fn sign_raw(&self, message: &[u8]) -> String {
        let signature = self.signing_key.sign(message);
        format!(
            "{}.{}.{}",
            self.identity,
            bs58::encode(message).into_string(),
            bs58::encode(signature.to_bytes()).into_string()
        )
    }

    /// `Authorization` header value for a token.
    pub fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }
}

/// Read a token's message without checking its signature.
///
/// Only for a client inspecting its own tokens.
pub fn decode_token_message(token: &str) -> Result<SignedMessage, AuthError> {
    let message = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AuthError::MalformedToken("no message segment".into()))?;
    let bytes = bs58::decode(message)
        .into_vec()
        .map_err(|_| AuthError::InvalidEncoding(super::error::Segment::Message))?;
    SignedMessage::from_bytes(&bytes)
}

/// Whether a token has expired as of `now`; unreadable tokens count as expired.
pub fn is_token_expired(token: &str, now: i64) -> bool {
    decode_token_message(token)
        .map(|m| m.is_expired_at(now))
        .unwrap_or(true)
}

/// Last issued token, reused for routes that skip the action check.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: Option<String>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Return a token for `action`.
    ///
    /// [`SKIP_ACTION`] reuses the cached token while it is fresh. Any other
    /// action always signs a new one. Whatever is signed replaces the cache.
    pub fn get_or_issue(&mut self, issuer: &CredentialIssuer, action: &str, now: i64) -> String {
        if action == SKIP_ACTION {
            if let Some(token) = self.token.as_deref() {
                if !is_token_expired(token, now) {
                    return token.to_string();
                }
            }
        }

        let token = issuer.issue(action, now);
        tracing::debug!(action, identity = issuer.identity(), "issued signed-action token");
        self.token = Some(token.clone());
        token
    }
}
