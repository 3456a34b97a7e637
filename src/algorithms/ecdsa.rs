//! ECDSA family (ES256), P-256 with DER-structured signatures.
//!
//! ECDSA signatures are an (r, s) pair rather than an opaque byte string, so
//! the raw signature is DER-encoded before the base64url step and DER-parsed
//! after it.

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

use crate::error::{JwtError, JwtResult};

/// Sign with ECDSA P-256 over SHA-256 (ES256).
pub(crate) fn sign_p256(message: &str, signing_key: &SigningKey) -> JwtResult<Vec<u8>> {
    let signature: Signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::InvalidKey(format!("ECDSA signing failed: {e}")))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Verify an ES256 signature over raw (base64url-decoded) DER bytes.
pub(crate) fn verify_p256(message: &str, signature: &[u8], verifying_key: &VerifyingKey) -> bool {
    let Ok(signature) = Signature::from_der(signature) else {
        return false;
    };
    verifying_key.verify(message.as_bytes(), &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::pkcs8::DecodePrivateKey as _;

    const PRIVATE_PEM: &str = include_str!("../../tests/keys/ec_private.pem");

    #[test]
    fn sign_verify_round_trip() {
        let signing_key = SigningKey::from_pkcs8_pem(PRIVATE_PEM).unwrap();
        let verifying_key = signing_key.verifying_key();

        let signature = sign_p256("a.b", &signing_key).unwrap();
        assert!(verify_p256("a.b", &signature, verifying_key));
        assert!(!verify_p256("a.c", &signature, verifying_key));
    }

    #[test]
    fn non_der_bytes_fail_closed() {
        let signing_key = SigningKey::from_pkcs8_pem(PRIVATE_PEM).unwrap();
        let verifying_key = signing_key.verifying_key();
        assert!(!verify_p256("a.b", &[0u8; 64], verifying_key));
        assert!(!verify_p256("a.b", &[], verifying_key));
    }
}
