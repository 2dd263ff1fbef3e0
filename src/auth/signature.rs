// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Base58 decoding and Ed25519 detached-signature verification.

use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

use super::error::Segment;
use super::token::EncodedCredential;
use super::AuthError;

/// Credential whose signature checked out over `message`.
///
/// `message` has not been interpreted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedCredential {
    /// Base58 identity exactly as presented by the caller.
    pub identity: String,
    /// Decoded message bytes the signature covers.
    pub message: Vec<u8>,
}

/// Decoded but unverified segments.
#[derive(Debug)]
struct DecodedSegments {
    identity: Vec<u8>,
    message: Vec<u8>,
    signature: Vec<u8>,
}

fn decode_segment(value: &str, segment: Segment) -> Result<Vec<u8>, AuthError> {
    bs58::decode(value)
        .into_vec()
        .map_err(|_| AuthError::InvalidEncoding(segment))
}

fn decode_segments(credential: &EncodedCredential<'_>) -> Result<DecodedSegments, AuthError> {
    Ok(DecodedSegments {
        identity: decode_segment(credential.identity, Segment::Identity)?,
        message: decode_segment(credential.message, Segment::Message)?,
        signature: decode_segment(credential.signature, Segment::Signature)?,
    })
}

/// Parse a 32-byte Ed25519 public key.
pub fn verifying_key(bytes: &[u8]) -> Result<VerifyingKey, AuthError> {
    let key: [u8; PUBLIC_KEY_LENGTH] = bytes
        .try_into()
        .map_err(|_| AuthError::InvalidIdentity(format!("{} bytes", bytes.len())))?;
    VerifyingKey::from_bytes(&key).map_err(|e| AuthError::InvalidIdentity(e.to_string()))
}

/// Verify a detached signature over `message`.
pub fn verify_detached(key: &VerifyingKey, message: &[u8], signature: &[u8]) -> Result<(), AuthError> {
    let sig: [u8; SIGNATURE_LENGTH] = signature.try_into().map_err(|_| {
        AuthError::InvalidSignature(format!("signature is {} bytes", signature.len()))
    })?;
    key.verify(message, &Signature::from_bytes(&sig))
        .map_err(|_| AuthError::InvalidSignature("signature does not match".into()))
}

/// Decode all three segments and verify the signature.
pub fn verify_credential(credential: &EncodedCredential<'_>) -> Result<VerifiedCredential, AuthError> {
    let decoded = decode_segments(credential)?;
    let key = verifying_key(&decoded.identity)?;
    verify_detached(&key, &decoded.message, &decoded.signature)?;

    Ok(VerifiedCredential {
        identity: credential.identity.to_string(),
        message: decoded.message,
    })
}
