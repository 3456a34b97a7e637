//! RSA family (RS256), PKCS#1 v1.5.

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::error::{JwtError, JwtResult};

/// Sign with RSA PKCS#1 v1.5 over SHA-256 (RS256).
pub(crate) fn sign_sha256(message: &str, private_key: &RsaPrivateKey) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(private_key.clone());
    let signature = signing_key
        .try_sign(message.as_bytes())
        .map_err(|e| JwtError::InvalidKey(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

/// Verify an RS256 signature over raw (base64url-decoded) bytes.
pub(crate) fn verify_sha256(message: &str, signature: &[u8], public_key: &RsaPublicKey) -> bool {
    let verifying_key = VerifyingKey::<Sha256>::new(public_key.clone());
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };
    verifying_key.verify(message.as_bytes(), &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs8::DecodePrivateKey as _;

    const PRIVATE_PEM: &str = include_str!("../../tests/keys/rsa_private.pem");

    #[test]
    fn sign_verify_round_trip() {
        let private_key = RsaPrivateKey::from_pkcs8_pem(PRIVATE_PEM).unwrap();
        let public_key = private_key.to_public_key();

        let signature = sign_sha256("a.b", &private_key).unwrap();
        assert!(verify_sha256("a.b", &signature, &public_key));
        assert!(!verify_sha256("a.c", &signature, &public_key));
    }

    #[test]
    fn malformed_signature_bytes_fail_closed() {
        let private_key = RsaPrivateKey::from_pkcs8_pem(PRIVATE_PEM).unwrap();
        let public_key = private_key.to_public_key();
        assert!(!verify_sha256("a.b", b"not-a-signature", &public_key));
        assert!(!verify_sha256("a.b", &[], &public_key));
    }
}
