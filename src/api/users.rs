// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User session endpoints.
//!
//! These carry no business logic of their own; they confirm which wallet
//! a signed request came from. Profile and follow storage live elsewhere.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::{ActionDescriptor, Authorized, Principal};

/// Action signed to read the current session; any fresh signature will do.
pub fn current_user_action() -> ActionDescriptor {
    ActionDescriptor::skippable("user:currentUser")
}

/// Action signed to log in; must be signed for exactly `user:auth`.
pub fn auth_action() -> ActionDescriptor {
    ActionDescriptor::strict("user:auth")
}

/// Response for the user session endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct PrincipalResponse {
    /// Base58 public key that signed the request.
    pub pubkey: Principal,
}

impl From<Principal> for PrincipalResponse {
    fn from(pubkey: Principal) -> Self {
        Self { pubkey }
    }
}

/// Get the wallet that signed the current request.
#[utoipa::path(
    get,
    path = "/v1/user/current",
    tag = "Users",
    security(("signed_action" = [])),
    responses(
        (status = 200, description = "Signing wallet", body = PrincipalResponse),
        (status = 400, description = "Malformed credential"),
        (status = 401, description = "Invalid, expired or missing signature"),
    )
)]
pub async fn current_user(Authorized(principal): Authorized) -> Json<PrincipalResponse> {
    Json(principal.into())
}

/// Authenticate a wallet with a credential signed for `user:auth`.
#[utoipa::path(
    post,
    path = "/v1/user/auth",
    tag = "Users",
    security(("signed_action" = [])),
    responses(
        (status = 200, description = "Wallet authenticated", body = PrincipalResponse),
        (status = 400, description = "Malformed credential"),
        (status = 401, description = "Invalid, expired or wrong-action signature"),
    )
)]
pub async fn authenticate(Authorized(principal): Authorized) -> Json<PrincipalResponse> {
    tracing::info!(pubkey = %principal, "wallet authenticated");
    Json(principal.into())
}
