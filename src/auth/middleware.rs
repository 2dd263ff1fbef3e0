// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signed-action middleware for Axum.
//!
//! Each protected route gets its own verifier, attached with [`protect`]:
//!
//! ```rust,ignore
//! let app = Router::new().route(
//!     "/comment/create",
//!     protect(post(create_comment), ActionDescriptor::strict("comment:create"), limits),
//! );
//! ```
//!
//! On success the [`Principal`](super::Principal) is stored in the request
//! extensions for the [`Authorized`](super::Authorized) extractor.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};

use super::token::TokenLimits;
use super::{ActionDescriptor, AuthError, SignedActionVerifier};

/// Authentication middleware function.
pub async fn signed_action_middleware(
    State(verifier): State<Arc<SignedActionVerifier>>,
    mut request: Request,
    next: Next,
) -> Response {
    let outcome = match request.headers().get(AUTHORIZATION).map(|v| v.to_str()) {
        // Non-visible-ASCII bytes can't form a bearer credential.
        Some(Err(_)) => Err(AuthError::MalformedScheme),
        Some(Ok(header)) => verifier.verify(Some(header)),
        None => verifier.verify(None),
    };

    match outcome {
        Ok(principal) => {
            tracing::debug!(
                action = %verifier.descriptor().action,
                principal = %principal,
                "signed action authorized"
            );
            request.extensions_mut().insert(principal);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(
                action = %verifier.descriptor().action,
                status = e.status_code().as_u16(),
                reason = %e,
                "signed action rejected"
            );
            e.into_response()
        }
    }
}

/// Gate a single route behind a signed-action check.
pub fn protect<S>(
    route: MethodRouter<S>,
    descriptor: ActionDescriptor,
    limits: TokenLimits,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let verifier = Arc::new(SignedActionVerifier::with_limits(descriptor, limits));
    route.route_layer(from_fn_with_state(verifier, signed_action_middleware))
}
