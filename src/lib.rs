//! JSON Web Token encoding and decoding.
//!
//! This crate signs and verifies compact JWTs (RFC 7519 wire format) with a
//! deliberately restricted algorithm set:
//! - HS256 / HS384 / HS512 (HMAC)
//! - RS256 (RSA PKCS#1 v1.5)
//! - ES256 (ECDSA P-256, DER-structured signatures)
//!
//! Decoding can select the verification key by the token's `iss` claim, and
//! expiration can be specified relative to now or anchored to the start of
//! the current hour or day.
//!
//! ```
//! use serde_json::json;
//! use tokensmith::{decode, encode, Claims, KeyMaterial};
//!
//! # fn main() -> tokensmith::JwtResult<()> {
//! let key = KeyMaterial::secret(b"0123456789abcdef0123456789abcdef".to_vec());
//! let claims: Claims = [("sub", json!("user-1"))].into_iter().collect();
//!
//! let token = encode("HS256", &claims, &key)?;
//! assert_eq!(decode(&token, &key)?, claims);
//! # Ok(())
//! # }
//! ```

pub(crate) mod algorithms;
mod decode;
mod encode;
mod error;
mod expiry;
mod keys;
mod types;

pub use decode::{decode, decode_with_issuers};
pub use encode::{encode, encode_with_expiry};
pub use error::{JwtError, JwtResult};
pub use expiry::Expiration;
pub use keys::{generate_es256_keypair, generate_secret, IssuerKeys, KeyMaterial};
pub use types::{Claims, JwtHeader};
