// RSA Decryption Implementation
// Recovers the message integer and decodes its big-endian bytes

use std::string::FromUtf8Error;

use super::bigint::{mod_pow, to_bytes, RsaBigInt};

/// Decrypt a ciphertext: m = c^d mod n, decoded to big-endian bytes.
///
/// Leading zero bytes of the original message are not recoverable: the
/// integer encoding collapses them, so the round trip may return fewer
/// bytes than were encrypted. A known limitation of the raw encoding.
pub fn decrypt(ciphertext: &RsaBigInt, d: &RsaBigInt, n: &RsaBigInt) -> Vec<u8> {
    to_bytes(&mod_pow(ciphertext, d, n))
}

/// Decrypt a ciphertext and interpret the bytes as UTF-8
pub fn decrypt_to_string(
    ciphertext: &RsaBigInt,
    d: &RsaBigInt,
    n: &RsaBigInt,
) -> Result<String, FromUtf8Error> {
    String::from_utf8(decrypt(ciphertext, d, n))
}
