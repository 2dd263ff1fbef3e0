// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Wallet-signature authentication for gated routes. There are no sessions
//! or bearer secrets: every request carries a credential signed by the
//! caller's Ed25519 wallet key.
//!
//! ## Auth Flow
//!
//! 1. Client signs `{"action": "<name>", "exp": <unix-seconds>}` with its wallet
//! 2. Client sends `Authorization: Bearer <pubkey>.<message>.<signature>`,
//!    each segment base58-encoded
//! 3. Server, per route:
//!    - Splits the credential into its three segments
//!    - Verifies the Ed25519 signature over the decoded message
//!    - Rejects the credential once `now > exp`
//!    - Requires `action` to match the route's [`ActionDescriptor`], unless
//!      the route allows skipping that check
//!    - Exposes the public key as the request's [`Principal`]
//!
//! ## Security
//!
//! - The message JSON is only parsed after the signature verified
//! - Header and message sizes are bounded before decoding
//! - Encoding, key and signature failures share one public error
//! - No clock skew tolerance

pub mod descriptor;
pub mod error;
pub mod extractor;
pub mod issuer;
pub mod message;
pub mod middleware;
pub mod principal;
pub mod signature;
pub mod token;
pub mod verifier;

pub use descriptor::ActionDescriptor;
pub use error::AuthError;
pub use extractor::Authorized;
pub use issuer::{CredentialIssuer, TokenCache};
pub use message::SignedMessage;
pub use middleware::{protect, signed_action_middleware};
pub use principal::Principal;
pub use token::TokenLimits;
pub use verifier::SignedActionVerifier;
