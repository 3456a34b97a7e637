//! Base64url helpers (RFC 7515: URL-safe alphabet, no padding).

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_unpadded_and_url_safe() {
        // 0xfb 0xef 0xff encodes to characters outside the standard alphabet.
        assert_eq!(base64_url_encode(&[0xfb, 0xef, 0xff]), "--__");
        assert_eq!(base64_url_encode(b"ab"), "YWI");
    }

    #[test]
    fn padded_or_standard_alphabet_input_is_rejected() {
        assert!(base64_url_decode("YWI=").is_err());
        assert!(base64_url_decode("+/").is_err());
        assert_eq!(base64_url_decode("YWI").as_deref(), Ok(b"ab".as_slice()));
    }
}
