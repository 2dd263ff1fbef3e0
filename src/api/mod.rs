// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{protect, ActionDescriptor, Principal},
    state::AppState,
};

pub mod health;
pub mod users;

pub fn router(state: AppState) -> Router {
    let limits = state.limits;

    let v1_routes = Router::new()
        .route(
            "/user/current",
            protect(get(users::current_user), users::current_user_action(), limits),
        )
        .route(
            "/user/auth",
            protect(post(users::authenticate), users::auth_action(), limits),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .nest("/v1", v1_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Signed-action credential security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "signed_action",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    r#"Wallet signature: Bearer {pubkey}.{message}.{signature}

All three segments are base58. The message decodes to
{"action": "<route action>", "exp": <unix seconds>} and the signature is
Ed25519 over those message bytes."#,
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        users::current_user,
        users::authenticate
    ),
    components(
        schemas(
            ActionDescriptor,
            Principal,
            health::HealthResponse,
            health::LivenessResponse,
            users::PrincipalResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and health checks"),
        (name = "Users", description = "Wallet session checks")
    )
)]
struct ApiDoc;
