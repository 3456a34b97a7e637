//! Token encoding.

use serde_json::Value;

use crate::algorithms::{self, utils, Algorithm};
use crate::error::{JwtError, JwtResult};
use crate::expiry::{self, Expiration};
use crate::keys::KeyMaterial;
use crate::types::{Claims, JwtHeader};

/// Encode `claims` into a signed token.
///
/// The token is `base64url(header) . base64url(claims) . signature`, with
/// the signature computed over the first two segments joined by `"."`.
///
/// # Errors
///
/// [`JwtError::UnsupportedAlgorithm`] when `alg` is outside the supported
/// set, [`JwtError::InvalidKey`] when the key material does not fit the
/// algorithm family, [`JwtError::Serialization`] when the claims cannot be
/// serialized.
pub fn encode(alg: &str, claims: &Claims, key: &KeyMaterial) -> JwtResult<String> {
    let claims_json =
        serde_json::to_vec(claims).map_err(|e| JwtError::Serialization(e.to_string()))?;
    let claims_segment = utils::base64_url_encode(&claims_json);

    let header_json = serde_json::to_vec(&JwtHeader::new(alg))
        .map_err(|e| JwtError::Serialization(e.to_string()))?;
    let header_segment = utils::base64_url_encode(&header_json);

    let mut signing_input =
        String::with_capacity(header_segment.len() + 1 + claims_segment.len());
    signing_input.push_str(&header_segment);
    signing_input.push('.');
    signing_input.push_str(&claims_segment);

    let algorithm =
        Algorithm::resolve(alg).ok_or_else(|| JwtError::unsupported_algorithm(alg))?;
    let signature_segment = algorithms::sign(algorithm, &signing_input, key)?;

    let mut token = String::with_capacity(signing_input.len() + 1 + signature_segment.len());
    token.push_str(&signing_input);
    token.push('.');
    token.push_str(&signature_segment);
    Ok(token)
}

/// Encode `claims` with an expiration applied.
///
/// Computes the absolute expiry for `expiration` against the current time
/// and inserts it as the `exp` claim (overwriting any existing `exp`) in a
/// clone of the claims; the caller's claims are untouched. Then delegates to
/// [`encode`].
pub fn encode_with_expiry(
    alg: &str,
    claims: &Claims,
    expiration: Expiration,
    key: &KeyMaterial,
) -> JwtResult<String> {
    let mut claims = claims.clone();
    claims.insert(
        "exp",
        Value::from(expiry::compute(expiration, expiry::unix_now())),
    );
    encode(alg, &claims, key)
}
