// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorization header parsing.
//!
//! Splits `Bearer <identity>.<message>.<signature>` into its three still
//! base58-encoded segments. No decoding happens here.

use super::AuthError;

/// Default upper bound on the header value, in bytes.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 1024;

/// Default upper bound on the base58 message segment, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 512;

/// Longest base58 rendering of a 32-byte key.
pub const MAX_IDENTITY_LENGTH: usize = 44;

/// Size limits applied before any base58 or JSON decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLimits {
    pub max_token_length: usize,
    pub max_message_length: usize,
}

impl Default for TokenLimits {
    fn default() -> Self {
        Self {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

/// The three segments of a credential, still base58-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCredential<'a> {
    pub identity: &'a str,
    pub message: &'a str,
    pub signature: &'a str,
}

/// Extract the token from a raw `Authorization` header value.
///
/// The value is split on single spaces: the first word is the scheme and
/// the second is the token. Anything after the token is ignored, and a
/// doubled space leaves an empty token. An absent or empty header is
/// `MissingHeader`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingHeader),
    };

    let mut words = header.split(' ');
    let scheme = words.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedScheme);
    }

    match words.next() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken),
    }
}

/// Split a token into identity, message and signature.
pub fn split_token<'a>(
    token: &'a str,
    limits: &TokenLimits,
) -> Result<EncodedCredential<'a>, AuthError> {
    if token.len() > limits.max_token_length {
        return Err(AuthError::MalformedToken(format!(
            "token is {} bytes, limit is {}",
            token.len(),
            limits.max_token_length
        )));
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::MalformedToken(format!(
            "expected 3 parts, got {}",
            parts.len()
        )));
    }
    if parts.iter().any(|p| p.is_empty()) {
        return Err(AuthError::MalformedToken("empty segment".into()));
    }

    let (identity, message, signature) = (parts[0], parts[1], parts[2]);

    if message.len() > limits.max_message_length {
        return Err(AuthError::MalformedToken(format!(
            "message segment is {} chars, limit is {}",
            message.len(),
            limits.max_message_length
        )));
    }
    if identity.len() > MAX_IDENTITY_LENGTH {
        return Err(AuthError::InvalidIdentity(format!(
            "identity segment is {} chars",
            identity.len()
        )));
    }

    Ok(EncodedCredential {
        identity,
        message,
        signature,
    })
}

/// Parse a raw header value into its encoded segments.
pub fn parse_authorization<'a>(
    header: Option<&'a str>,
    limits: &TokenLimits,
) -> Result<EncodedCredential<'a>, AuthError> {
    if let Some(h) = header {
        // Scheme plus separator on top of the token limit.
        if h.len() > limits.max_token_length + "Bearer ".len() {
            return Err(AuthError::MalformedToken(format!(
                "header is {} bytes",
                h.len()
            )));
        }
    }
    let token = bearer_token(header)?;
    split_token(token, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_segments() {
        let parsed = parse_authorization(Some("Bearer abc.def.ghi"), &TokenLimits::default());
        assert_eq!(
            parsed,
            Ok(EncodedCredential {
                identity: "abc",
                message: "def",
                signature: "ghi",
            })
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        for header in ["bearer abc.def.ghi", "BEARER abc.def.ghi", "BeArEr abc.def.ghi"] {
            assert!(parse_authorization(Some(header), &TokenLimits::default()).is_ok());
        }
    }

    #[test]
    fn absent_or_empty_header_is_missing() {
        assert_eq!(bearer_token(None), Err(AuthError::MissingHeader));
        assert_eq!(bearer_token(Some("")), Err(AuthError::MissingHeader));
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert_eq!(bearer_token(Some("Basic dXNlcjpwYXNz")), Err(AuthError::MalformedScheme));
        assert_eq!(bearer_token(Some("Bearerabc.def.ghi")), Err(AuthError::MalformedScheme));
    }

    #[test]
    fn scheme_without_token_is_missing_token() {
        assert_eq!(bearer_token(Some("Bearer")), Err(AuthError::MissingToken));
        assert_eq!(bearer_token(Some("Bearer ")), Err(AuthError::MissingToken));
    }

    #[test]
    fn words_after_token_are_ignored() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi extra")), Ok("abc.def.ghi"));
        assert_eq!(
            parse_authorization(Some("Bearer abc.def.ghi extra words"), &TokenLimits::default())
                .map(|c| c.signature),
            Ok("ghi")
        );
    }

    #[test]
    fn double_space_leaves_token_missing() {
        assert_eq!(bearer_token(Some("Bearer  abc.def.ghi")), Err(AuthError::MissingToken));
    }

    #[test]
    fn split_token_borrows_from_token_not_limits() {
        let token = String::from("abc.def.ghi");
        let parsed = {
            let limits = TokenLimits::default();
            split_token(&token, &limits).unwrap()
        };
        assert_eq!(parsed.identity, "abc");
    }

    #[test]
    fn wrong_part_count_is_malformed() {
        let limits = TokenLimits::default();
        for token in ["abc.def", "abc", "not.a.valid.token.with.too.many.parts"] {
            assert!(matches!(
                split_token(token, &limits),
                Err(AuthError::MalformedToken(_))
            ));
        }
    }

    #[test]
    fn empty_segment_is_malformed() {
        let limits = TokenLimits::default();
        for token in [".def.ghi", "abc..ghi", "abc.def."] {
            assert!(matches!(
                split_token(token, &limits),
                Err(AuthError::MalformedToken(_))
            ));
        }
    }

    #[test]
    fn oversized_input_is_rejected_before_splitting() {
        let limits = TokenLimits {
            max_token_length: 16,
            max_message_length: 8,
        };
        let long = format!("Bearer {}", "a".repeat(64));
        assert!(matches!(
            parse_authorization(Some(&long), &limits),
            Err(AuthError::MalformedToken(_))
        ));
        assert!(matches!(
            split_token("a.123456789.c", &limits),
            Err(AuthError::MalformedToken(_))
        ));
    }

    #[test]
    fn overlong_identity_is_invalid_identity() {
        let token = format!("{}.def.ghi", "1".repeat(45));
        assert!(matches!(
            split_token(&token, &TokenLimits::default()),
            Err(AuthError::InvalidIdentity(_))
        ));
    }
}
