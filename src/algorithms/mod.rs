//! Algorithm registry and signature dispatch.
//!
//! The registry maps identifier strings to a closed `(family, hash)` pair;
//! everything outside the supported subset resolves to `None`. Signing
//! returns the base64url-encoded signature segment. Verification takes the
//! signature segment exactly as received: the HMAC path compares encoded
//! strings, the asymmetric paths decode to raw bytes first.

pub(crate) mod ecdsa;
pub(crate) mod hmac;
pub(crate) mod rsa;
pub(crate) mod utils;

use crate::error::{JwtError, JwtResult};
use crate::keys::KeyMaterial;

/// Hash function selector within an algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HashAlg {
    Sha256,
    Sha384,
    Sha512,
}

/// Resolved algorithm descriptor: signature family plus hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Algorithm {
    Hmac(HashAlg),
    Rsa(HashAlg),
    Ecdsa(HashAlg),
}

impl Algorithm {
    /// Resolve an identifier string to a descriptor.
    ///
    /// The supported set is a deliberately restricted subset of RFC 7518:
    /// RS384/RS512, ES384/ES512, the PS* family, and `"none"` all resolve
    /// to `None`.
    pub(crate) fn resolve(identifier: &str) -> Option<Self> {
        match identifier {
            "HS256" => Some(Self::Hmac(HashAlg::Sha256)),
            "HS384" => Some(Self::Hmac(HashAlg::Sha384)),
            "HS512" => Some(Self::Hmac(HashAlg::Sha512)),
            "RS256" => Some(Self::Rsa(HashAlg::Sha256)),
            "ES256" => Some(Self::Ecdsa(HashAlg::Sha256)),
            _ => None,
        }
    }
}

/// Produce the base64url-encoded signature segment for `signing_input`.
pub(crate) fn sign(
    algorithm: Algorithm,
    signing_input: &str,
    key: &KeyMaterial,
) -> JwtResult<String> {
    let raw = match algorithm {
        Algorithm::Hmac(hash) => {
            let secret = key.secret_bytes().ok_or_else(|| {
                JwtError::invalid_key("HMAC signing requires a shared secret")
            })?;
            hmac::sign(hash, signing_input, secret)?
        }
        Algorithm::Rsa(HashAlg::Sha256) => {
            let private_key = key.rsa_signing_key()?;
            rsa::sign_sha256(signing_input, &private_key)?
        }
        Algorithm::Ecdsa(HashAlg::Sha256) => {
            let signing_key = key.ecdsa_signing_key()?;
            ecdsa::sign_p256(signing_input, &signing_key)?
        }
        // The registry never produces these combinations.
        Algorithm::Rsa(_) | Algorithm::Ecdsa(_) => {
            return Err(JwtError::UnsupportedAlgorithm(format!("{algorithm:?}")));
        }
    };

    Ok(utils::base64_url_encode(&raw))
}

/// Verify `signature_segment` over `signing_input` with `key`.
///
/// Every failure on this path collapses to `false`: wrong key variant,
/// unparseable PEM, undecodable or malformed signature bytes.
pub(crate) fn verify(
    algorithm: Algorithm,
    signing_input: &str,
    signature_segment: &str,
    key: &KeyMaterial,
) -> bool {
    match algorithm {
        Algorithm::Hmac(hash) => {
            let Some(secret) = key.secret_bytes() else {
                return false;
            };
            hmac::verify_encoded(hash, signing_input, signature_segment, secret)
        }
        Algorithm::Rsa(HashAlg::Sha256) => {
            let Ok(signature) = utils::base64_url_decode(signature_segment) else {
                return false;
            };
            let Ok(public_key) = key.rsa_verifying_key() else {
                return false;
            };
            rsa::verify_sha256(signing_input, &signature, &public_key)
        }
        Algorithm::Ecdsa(HashAlg::Sha256) => {
            let Ok(signature) = utils::base64_url_decode(signature_segment) else {
                return false;
            };
            let Ok(verifying_key) = key.ecdsa_verifying_key() else {
                return false;
            };
            ecdsa::verify_p256(signing_input, &signature, &verifying_key)
        }
        Algorithm::Rsa(_) | Algorithm::Ecdsa(_) => false,
    }
}
