// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use signed_action_gatekeeper::{
    api::router,
    config::{bind_address, json_logs, token_limits_from_env},
    logging::init_logging,
    state::AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(json_logs());

    let limits = token_limits_from_env();
    tracing::info!(
        max_token_length = limits.max_token_length,
        max_message_length = limits.max_message_length,
        "credential limits loaded"
    );

    let app = router(AppState::new(limits));

    let addr = bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Signed-action gatekeeper listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
