// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-route signed-action verification.
//!
//! A [`SignedActionVerifier`] is built once per protected route from its
//! [`ActionDescriptor`] and then checks each request's header:
//!
//! ```text
//! parse header -> decode segments -> verify signature
//!     -> decode message -> check expiry -> check action -> Principal
//! ```
//!
//! The first failing step ends the check. Verification keeps no state
//! between calls, so one verifier can be shared across threads.

use chrono::Utc;

use super::message::SignedMessage;
use super::signature::verify_credential;
use super::token::{parse_authorization, TokenLimits};
use super::{ActionDescriptor, AuthError, Principal};

/// Reusable verifier for one route's action descriptor.
#[derive(Debug, Clone)]
pub struct SignedActionVerifier {
    descriptor: ActionDescriptor,
    limits: TokenLimits,
}

impl SignedActionVerifier {
    pub fn new(descriptor: ActionDescriptor) -> Self {
        Self::with_limits(descriptor, TokenLimits::default())
    }

    pub fn with_limits(descriptor: ActionDescriptor, limits: TokenLimits) -> Self {
        Self { descriptor, limits }
    }

    pub fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    /// Verify a raw `Authorization` header value against the wall clock.
    pub fn verify(&self, header: Option<&str>) -> Result<Principal, AuthError> {
        self.verify_at(header, Utc::now().timestamp())
    }

    /// Verify a raw `Authorization` header value as of `now` (Unix seconds).
    pub fn verify_at(&self, header: Option<&str>, now: i64) -> Result<Principal, AuthError> {
        let encoded = parse_authorization(header, &self.limits)?;
        let verified = verify_credential(&encoded)?;

        // Only interpret the payload once the signature covers it.
        let message = SignedMessage::from_bytes(&verified.message)?;

        if message.is_expired_at(now) {
            return Err(AuthError::Expired {
                exp: message.exp,
                now,
            });
        }

        if !self.descriptor.authorizes(&message.action) {
            return Err(AuthError::ActionMismatch {
                signed: message.action,
                required: self.descriptor.action.clone(),
            });
        }

        Ok(Principal::new(verified.identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::CredentialIssuer;
    use ed25519_dalek::SigningKey;

    const NOW: i64 = 1_700_000_000;

    fn issuer() -> CredentialIssuer {
        CredentialIssuer::new(SigningKey::from_bytes(&[42u8; 32]))
    }

    fn header_for(action: &str, exp: i64) -> String {
        CredentialIssuer::bearer(&issuer().sign(&SignedMessage::new(action, exp)))
    }

    #[test]
    fn matching_action_is_authorized() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("comment:create"));
        let header = header_for("comment:create", NOW + 3600);

        let principal = verifier.verify_at(Some(&header), NOW).unwrap();
        assert_eq!(principal.as_str(), issuer().identity());
    }

    #[test]
    fn mismatched_action_is_rejected() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("comment:delete"));
        let header = header_for("comment:create", NOW + 3600);

        assert_eq!(
            verifier.verify_at(Some(&header), NOW),
            Err(AuthError::ActionMismatch {
                signed: "comment:create".into(),
                required: "comment:delete".into(),
            })
        );
    }

    #[test]
    fn skippable_route_ignores_action() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::skippable("comment:like"));
        let header = header_for("comment:create", NOW + 3600);

        assert!(verifier.verify_at(Some(&header), NOW).is_ok());
    }

    #[test]
    fn expired_credential_is_rejected_even_when_skippable() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::skippable("comment:like"));
        let header = header_for("comment:like", NOW - 1);

        assert_eq!(
            verifier.verify_at(Some(&header), NOW),
            Err(AuthError::Expired {
                exp: (NOW - 1).into(),
                now: NOW,
            })
        );
    }

    #[test]
    fn expiry_instant_itself_is_valid() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));
        let header = header_for("user:auth", NOW);

        assert!(verifier.verify_at(Some(&header), NOW).is_ok());
        assert!(matches!(
            verifier.verify_at(Some(&header), NOW + 1),
            Err(AuthError::Expired { .. })
        ));
    }

    #[test]
    fn too_many_parts_is_malformed_token() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));
        let err = verifier
            .verify_at(Some("Bearer not.a.valid.token.with.too.many.parts"), NOW)
            .unwrap_err();

        assert!(matches!(err, AuthError::MalformedToken(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn any_flipped_byte_is_rejected() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::skippable("user:auth"));
        let token = issuer().sign(&SignedMessage::new("user:auth", NOW + 60));
        let segments: Vec<Vec<u8>> = token
            .split('.')
            .map(|s| bs58::decode(s).into_vec().unwrap())
            .collect();

        for seg in 0..3 {
            for byte in 0..segments[seg].len() {
                let mut tampered = segments.clone();
                tampered[seg][byte] ^= 0x01;
                let header = format!(
                    "Bearer {}",
                    tampered
                        .iter()
                        .map(|s| bs58::encode(s).into_string())
                        .collect::<Vec<_>>()
                        .join(".")
                );
                assert!(
                    verifier.verify_at(Some(&header), NOW).is_err(),
                    "segment {seg} byte {byte} flip was accepted"
                );
            }
        }
    }

    #[test]
    fn unsigned_json_is_never_interpreted() {
        // Garbage payload with a bad signature must fail on the signature,
        // not on the message format.
        let identity = issuer().identity().to_string();
        let message = bs58::encode(b"not json").into_string();
        let signature = bs58::encode([0u8; 64]).into_string();
        let header = format!("Bearer {identity}.{message}.{signature}");

        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));
        assert!(matches!(
            verifier.verify_at(Some(&header), NOW),
            Err(AuthError::InvalidSignature(_))
        ));
    }

    #[test]
    fn signed_garbage_is_invalid_message_format() {
        let signer = issuer();
        let token = signer.sign_raw(b"{\"action\":\"user:auth\"}");
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));

        assert!(matches!(
            verifier.verify_at(Some(&CredentialIssuer::bearer(&token)), NOW),
            Err(AuthError::InvalidMessageFormat(_))
        ));
    }

    #[test]
    fn non_ed25519_identity_is_rejected() {
        // 48-char base58 address decodes to more than 32 bytes.
        let identity = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";
        let token = issuer().sign(&SignedMessage::new("comment:create", NOW + 3600));
        let rest = token.split_once('.').map(|(_, r)| r).unwrap();
        let header = format!("Bearer {identity}.{rest}");

        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("comment:create"));
        let err = verifier.verify_at(Some(&header), NOW).unwrap_err();
        assert!(matches!(err, AuthError::InvalidIdentity(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn fractional_exp_is_accepted_until_it_passes() {
        let signer = issuer();
        let token = signer.sign_raw(br#"{"action":"user:auth","exp":1700003600.0}"#);
        let header = CredentialIssuer::bearer(&token);
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));

        let principal = verifier.verify_at(Some(&header), NOW).unwrap();
        assert_eq!(principal.as_str(), signer.identity());
        assert!(matches!(
            verifier.verify_at(Some(&header), 1_700_003_601),
            Err(AuthError::Expired { .. })
        ));
    }

    #[test]
    fn empty_action_route_matches_empty_signed_action() {
        let signer = issuer();
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict(""));
        let token = signer.sign(&SignedMessage::new("", NOW + 60));

        assert!(verifier
            .verify_at(Some(&CredentialIssuer::bearer(&token)), NOW)
            .is_ok());
    }

    #[test]
    fn missing_header_is_rejected() {
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));
        assert_eq!(verifier.verify_at(None, NOW), Err(AuthError::MissingHeader));
    }

    #[test]
    fn wall_clock_verification_accepts_fresh_credential() {
        let signer = issuer();
        let token = signer.issue("user:auth", Utc::now().timestamp());
        let verifier = SignedActionVerifier::new(ActionDescriptor::strict("user:auth"));

        let principal = verifier.verify(Some(&CredentialIssuer::bearer(&token))).unwrap();
        assert_eq!(principal.as_str(), signer.identity());
    }
}
