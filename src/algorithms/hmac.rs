//! HMAC family (HS256, HS384, HS512).

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

use super::utils::base64_url_encode;
use super::HashAlg;
use crate::error::{JwtError, JwtResult};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the keyed MAC over `message` for the given hash.
pub(crate) fn sign(hash: HashAlg, message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    match hash {
        HashAlg::Sha256 => mac_sha256(message, secret),
        HashAlg::Sha384 => mac_sha384(message, secret),
        HashAlg::Sha512 => mac_sha512(message, secret),
    }
}

/// Verify an HMAC signature segment as received from the token.
///
/// The expected MAC is recomputed and base64url-encoded, and the encoded
/// strings are compared in constant time. The received segment is never
/// decoded on this path; the asymmetric families decode instead.
pub(crate) fn verify_encoded(
    hash: HashAlg,
    message: &str,
    signature_segment: &str,
    secret: &[u8],
) -> bool {
    let Ok(expected) = sign(hash, message, secret) else {
        return false;
    };
    let expected_segment = base64_url_encode(&expected);
    expected_segment
        .as_bytes()
        .ct_eq(signature_segment.as_bytes())
        .into()
}

fn mac_sha256(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn mac_sha384(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

fn mac_sha512(message: &str, secret: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
    mac.update(message.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
