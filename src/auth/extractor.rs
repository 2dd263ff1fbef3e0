// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for the verified principal.
//!
//! Use the `Authorized` extractor in handlers behind [`protect`](super::protect):
//!
//! ```rust,ignore
//! async fn my_handler(Authorized(principal): Authorized) -> impl IntoResponse {
//!     // principal is the base58 wallet key that signed the request
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{AuthError, Principal};

/// Extractor for the principal set by the signed-action middleware.
///
/// It never verifies anything itself. Using it on a route that was not
/// wrapped with [`protect`](super::protect) is a wiring bug and yields a
/// 500 response.
pub struct Authorized(pub Principal);

impl<S> FromRequestParts<S> for Authorized
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Principal>().cloned() {
            Some(principal) => Ok(Authorized(principal)),
            None => {
                tracing::error!(path = %parts.uri.path(), "Authorized extractor used on an ungated route");
                Err(AuthError::UngatedRoute)
            }
        }
    }
}
