// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signed-Action Gatekeeper - Wallet Signature Authentication
//!
//! Stateless request authentication for HTTP routes. A client proves it
//! controls an Ed25519 wallet key by signing a short-lived `{action, exp}`
//! message; each route checks the signature, the expiry and that the
//! message was signed for that route's action.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Credential parsing, verification, middleware and issuing
//! - `config` - Environment configuration
//! - `logging` - Tracing subscriber setup

pub mod api;
pub mod auth;
pub mod config;
pub mod logging;
pub mod state;
