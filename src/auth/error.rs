// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Every variant names the exact check that failed so it can be logged.
//! The HTTP response is coarser: encoding, identity and signature failures
//! all render as "Invalid signature" so a caller cannot tell which part of
//! a forged credential was wrong.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Which segment of the credential failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Identity,
    Message,
    Signature,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Segment::Identity => "identity",
            Segment::Message => "message",
            Segment::Signature => "signature",
        };
        f.write_str(name)
    }
}

/// Reason a signed-action credential was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No authorization header present
    #[error("authorization header is missing")]
    MissingHeader,
    /// Scheme is not `Bearer`
    #[error("authorization scheme is not bearer")]
    MalformedScheme,
    /// Nothing after the scheme
    #[error("authorization token is missing")]
    MissingToken,
    /// Token is not three non-empty dot-separated segments, or is oversized
    #[error("token is malformed: {0}")]
    MalformedToken(String),
    /// A segment is not valid base58
    #[error("{0} segment is not valid base58")]
    InvalidEncoding(Segment),
    /// Identity does not decode to an Ed25519 public key
    #[error("identity is not an ed25519 public key: {0}")]
    InvalidIdentity(String),
    /// Signature bytes are malformed or do not verify
    #[error("signature verification failed: {0}")]
    InvalidSignature(String),
    /// Message is not `{action: string, exp: number}` JSON
    #[error("message format is invalid: {0}")]
    InvalidMessageFormat(String),
    /// `now` is past the message's `exp`
    #[error("credential expired at {exp} (now {now})")]
    Expired { exp: serde_json::Number, now: i64 },
    /// Signed action does not match the route's action
    #[error("action {signed:?} does not match required {required:?}")]
    ActionMismatch { signed: String, required: String },
    /// Principal requested on a route the gatekeeper never ran on
    #[error("principal requested on a route without the signed-action gate")]
    UngatedRoute,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: AuthErrorDetail,
}

#[derive(Serialize)]
struct AuthErrorDetail {
    message: &'static str,
    code: &'static str,
    /// Validation detail, only for malformed signed messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AuthError {
    /// Get the public error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "missing_auth_header",
            AuthError::MalformedScheme => "invalid_auth_header",
            AuthError::MissingToken => "missing_token",
            AuthError::MalformedToken(_) => "malformed_token",
            AuthError::InvalidEncoding(_)
            | AuthError::InvalidIdentity(_)
            | AuthError::InvalidSignature(_) => "invalid_signature",
            AuthError::InvalidMessageFormat(_) => "invalid_message",
            AuthError::Expired { .. } => "expired_signature",
            AuthError::ActionMismatch { .. } => "invalid_action",
            AuthError::UngatedRoute => "internal_error",
        }
    }

    /// Get the public message for this error.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "Missing Authorization header",
            AuthError::MalformedScheme => "Invalid Authorization header format",
            AuthError::MissingToken => "Missing auth token",
            AuthError::MalformedToken(_) => "Invalid auth token format",
            AuthError::InvalidEncoding(_)
            | AuthError::InvalidIdentity(_)
            | AuthError::InvalidSignature(_) => "Invalid signature",
            AuthError::InvalidMessageFormat(_) => "Invalid input",
            AuthError::Expired { .. } => "Expired signature",
            AuthError::ActionMismatch { .. } => "Invalid action",
            AuthError::UngatedRoute => "Internal server error",
        }
    }

    /// Validation detail safe to show the caller.
    ///
    /// Only the message schema error has any: by then the signature has
    /// verified, so the detail describes the caller's own payload.
    pub fn details(&self) -> Option<String> {
        match self {
            AuthError::InvalidMessageFormat(detail) => Some(detail.clone()),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// Structural problems found before any cryptographic work are client
    /// input errors; everything else is unauthorized.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MalformedScheme
            | AuthError::MalformedToken(_)
            | AuthError::InvalidMessageFormat(_) => StatusCode::BAD_REQUEST,
            AuthError::MissingHeader
            | AuthError::MissingToken
            | AuthError::InvalidEncoding(_)
            | AuthError::InvalidIdentity(_)
            | AuthError::InvalidSignature(_)
            | AuthError::Expired { .. }
            | AuthError::ActionMismatch { .. } => StatusCode::UNAUTHORIZED,
            AuthError::UngatedRoute => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(AuthErrorBody {
            error: AuthErrorDetail {
                message: self.public_message(),
                code: self.error_code(),
                details: self.details(),
            },
        });
        (self.status_code(), body).into_response()
    }
}
