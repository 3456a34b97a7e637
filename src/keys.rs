//! Key material handling.
//!
//! Keys are supplied per call and never cached: PEM material is re-parsed on
//! every sign or verify, and parsed handles let callers hoist that cost out
//! themselves.

use std::collections::HashMap;
use std::fmt;

use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePrivateKey as _, DecodePublicKey as _};
use rand::Rng;
use rsa::pkcs1::{DecodeRsaPrivateKey as _, DecodeRsaPublicKey as _};
use rsa::pkcs8::{DecodePrivateKey as _, DecodePublicKey as _};
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::{JwtError, JwtResult};

/// Mapping from issuer (`iss`) claim values to verification keys, consulted
/// during decode. Issuers absent from the mapping fall back to the default
/// key given to [`decode_with_issuers`](crate::decode_with_issuers).
pub type IssuerKeys = HashMap<String, KeyMaterial>;

/// Key material accepted by the signing and verification paths.
///
/// A key is either a shared secret (HMAC family), PEM bytes resolved to a
/// usable handle at the start of each operation, or an already-parsed
/// asymmetric handle.
#[derive(Clone)]
pub enum KeyMaterial {
    /// Shared secret for the HMAC family. Zeroized on drop.
    Secret(Zeroizing<Vec<u8>>),
    /// PEM-encoded asymmetric key, parsed per call.
    Pem(Vec<u8>),
    /// Parsed RSA private key.
    RsaPrivate(RsaPrivateKey),
    /// Parsed RSA public key.
    RsaPublic(RsaPublicKey),
    /// Parsed ECDSA P-256 signing key.
    EcdsaPrivate(SigningKey),
    /// Parsed ECDSA P-256 verifying key.
    EcdsaPublic(VerifyingKey),
}

impl KeyMaterial {
    /// Shared-secret key material for the HMAC family.
    #[must_use]
    pub fn secret(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Secret(Zeroizing::new(bytes.into()))
    }

    /// PEM-encoded asymmetric key material.
    #[must_use]
    pub fn pem(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Pem(bytes.into())
    }

    /// The shared secret, when this key is one.
    pub(crate) fn secret_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Secret(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }

    /// Resolve to an RSA private key for signing.
    pub(crate) fn rsa_signing_key(&self) -> JwtResult<RsaPrivateKey> {
        match self {
            Self::RsaPrivate(key) => Ok(key.clone()),
            Self::Pem(bytes) => {
                let pem = pem_str(bytes)?;
                RsaPrivateKey::from_pkcs8_pem(pem)
                    .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
                    .map_err(|e| JwtError::InvalidKey(format!("invalid RSA private key: {e}")))
            }
            _ => Err(JwtError::invalid_key(
                "RSA signing requires an RSA private key or PEM",
            )),
        }
    }

    /// Resolve to an RSA public key for verification.
    pub(crate) fn rsa_verifying_key(&self) -> JwtResult<RsaPublicKey> {
        match self {
            Self::RsaPublic(key) => Ok(key.clone()),
            Self::RsaPrivate(key) => Ok(key.to_public_key()),
            Self::Pem(bytes) => {
                let pem = pem_str(bytes)?;
                if let Ok(key) = RsaPublicKey::from_public_key_pem(pem) {
                    return Ok(key);
                }
                if let Ok(key) = RsaPublicKey::from_pkcs1_pem(pem) {
                    return Ok(key);
                }
                RsaPrivateKey::from_pkcs8_pem(pem)
                    .map(|key| key.to_public_key())
                    .map_err(|e| JwtError::InvalidKey(format!("invalid RSA public key: {e}")))
            }
            _ => Err(JwtError::invalid_key(
                "RSA verification requires an RSA key or PEM",
            )),
        }
    }

    /// Resolve to a P-256 signing key.
    pub(crate) fn ecdsa_signing_key(&self) -> JwtResult<SigningKey> {
        match self {
            Self::EcdsaPrivate(key) => Ok(key.clone()),
            Self::Pem(bytes) => {
                let pem = pem_str(bytes)?;
                SigningKey::from_pkcs8_pem(pem)
                    .map_err(|e| JwtError::InvalidKey(format!("invalid EC private key: {e}")))
            }
            _ => Err(JwtError::invalid_key(
                "ECDSA signing requires an EC private key or PEM",
            )),
        }
    }

    /// Resolve to a P-256 verifying key.
    pub(crate) fn ecdsa_verifying_key(&self) -> JwtResult<VerifyingKey> {
        match self {
            Self::EcdsaPublic(key) => Ok(key.clone()),
            Self::EcdsaPrivate(key) => Ok(key.verifying_key().clone()),
            Self::Pem(bytes) => {
                let pem = pem_str(bytes)?;
                if let Ok(key) = VerifyingKey::from_public_key_pem(pem) {
                    return Ok(key);
                }
                SigningKey::from_pkcs8_pem(pem)
                    .map(|key| key.verifying_key().clone())
                    .map_err(|e| JwtError::InvalidKey(format!("invalid EC public key: {e}")))
            }
            _ => Err(JwtError::invalid_key(
                "ECDSA verification requires an EC key or PEM",
            )),
        }
    }
}

// Key bytes never appear in logs or panic messages.
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Self::Secret(_) => "Secret",
            Self::Pem(_) => "Pem",
            Self::RsaPrivate(_) => "RsaPrivate",
            Self::RsaPublic(_) => "RsaPublic",
            Self::EcdsaPrivate(_) => "EcdsaPrivate",
            Self::EcdsaPublic(_) => "EcdsaPublic",
        };
        write!(f, "KeyMaterial::{variant}(..)")
    }
}

fn pem_str(bytes: &[u8]) -> JwtResult<&str> {
    std::str::from_utf8(bytes).map_err(|_| JwtError::invalid_key("key PEM is not valid UTF-8"))
}

/// Generate a random shared secret of `len` bytes for the HMAC family.
#[must_use]
pub fn generate_secret(len: usize) -> KeyMaterial {
    let mut rng = rand::rng();
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    KeyMaterial::secret(bytes)
}

/// Generate a fresh ES256 key pair as `(private, public)` key material.
pub fn generate_es256_keypair() -> JwtResult<(KeyMaterial, KeyMaterial)> {
    let mut rng = rand::rng();
    let mut scalar = [0u8; 32];
    rng.fill(&mut scalar);

    let signing_key = SigningKey::from_slice(&scalar)
        .map_err(|e| JwtError::InvalidKey(format!("generated scalar rejected: {e}")))?;
    let verifying_key = signing_key.verifying_key().clone();

    Ok((
        KeyMaterial::EcdsaPrivate(signing_key),
        KeyMaterial::EcdsaPublic(verifying_key),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_key_bytes() {
        let key = KeyMaterial::secret(b"super-secret-bytes".to_vec());
        let rendered = format!("{key:?}");
        assert_eq!(rendered, "KeyMaterial::Secret(..)");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn generated_secret_has_requested_length() {
        let key = generate_secret(48);
        assert_eq!(key.secret_bytes().map(<[u8]>::len), Some(48));
    }

    #[test]
    fn secret_key_rejected_on_asymmetric_paths() {
        let key = KeyMaterial::secret(b"secret".to_vec());
        assert!(key.rsa_signing_key().is_err());
        assert!(key.rsa_verifying_key().is_err());
        assert!(key.ecdsa_signing_key().is_err());
        assert!(key.ecdsa_verifying_key().is_err());
    }

    #[test]
    fn garbage_pem_is_an_error_not_a_panic() {
        let key = KeyMaterial::pem(b"-----BEGIN GARBAGE-----\nzzzz\n-----END GARBAGE-----\n".to_vec());
        assert!(key.rsa_signing_key().is_err());
        assert!(key.ecdsa_verifying_key().is_err());

        let key = KeyMaterial::pem(vec![0xff, 0xfe, 0x00]);
        assert!(matches!(key.rsa_signing_key(), Err(JwtError::InvalidKey(_))));
    }

    #[test]
    fn es256_keypair_halves_are_linked() {
        let (private, public) = generate_es256_keypair().unwrap();
        let derived = private.ecdsa_verifying_key().unwrap();
        let public = public.ecdsa_verifying_key().unwrap();
        assert_eq!(
            derived.to_encoded_point(false),
            public.to_encoded_point(false)
        );
    }
}
