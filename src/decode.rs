//! Token decoding and verification.

use serde_json::{Map, Value};

use crate::algorithms::{self, utils, Algorithm};
use crate::error::{JwtError, JwtResult};
use crate::expiry;
use crate::keys::{IssuerKeys, KeyMaterial};
use crate::types::Claims;

/// Decode and verify a token against a single key.
///
/// Equivalent to [`decode_with_issuers`] with an empty issuer mapping.
pub fn decode(token: &str, key: &KeyMaterial) -> JwtResult<Claims> {
    decode_with_issuers(token, key, &IssuerKeys::new())
}

/// Decode and verify a token, selecting the verification key by issuer.
///
/// When the claims carry a string `iss` value present in `issuer_keys`, the
/// mapped key verifies the signature; otherwise `default_key` does. Checks
/// run in a fixed order: structural validation, then signature, then
/// expiration. A forged token reports [`JwtError::InvalidSignature`] even
/// if it is also expired, and an unsupported algorithm in the header always
/// fails verification rather than bypassing it.
pub fn decode_with_issuers(
    token: &str,
    default_key: &KeyMaterial,
    issuer_keys: &IssuerKeys,
) -> JwtResult<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(JwtError::invalid_token(
            "expected three dot-separated segments",
        ));
    }
    let header_segment = segments[0];
    let claims_segment = segments[1];
    let signature_segment = segments[2];

    let header_bytes = utils::base64_url_decode(header_segment)
        .map_err(|_| JwtError::invalid_token("invalid header encoding"))?;
    let header: Map<String, Value> = serde_json::from_slice(&header_bytes)
        .map_err(|_| JwtError::invalid_token("invalid header JSON"))?;

    let claims_bytes = utils::base64_url_decode(claims_segment)
        .map_err(|_| JwtError::invalid_token("invalid claims encoding"))?;
    let claims: Claims = serde_json::from_slice(&claims_bytes)
        .map_err(|_| JwtError::invalid_token("invalid claims JSON"))?;

    // A missing or non-string alg behaves like an unsupported identifier.
    let algorithm = header
        .get("alg")
        .and_then(Value::as_str)
        .and_then(Algorithm::resolve);

    let key = match claims.get("iss").and_then(Value::as_str) {
        Some(issuer) => issuer_keys.get(issuer).unwrap_or(default_key),
        None => default_key,
    };

    let mut signing_input =
        String::with_capacity(header_segment.len() + 1 + claims_segment.len());
    signing_input.push_str(header_segment);
    signing_input.push('.');
    signing_input.push_str(claims_segment);

    let signature_valid = match algorithm {
        Some(algorithm) => {
            algorithms::verify(algorithm, &signing_input, signature_segment, key)
        }
        None => false,
    };
    if !signature_valid {
        tracing::debug!("token rejected: signature verification failed");
        return Err(JwtError::InvalidSignature);
    }

    if expiry::is_expired(&claims, expiry::unix_now()) {
        tracing::debug!("token rejected: expired");
        return Err(JwtError::Expired);
    }

    Ok(claims)
}
