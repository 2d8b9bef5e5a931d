// RSA Encryption Implementation
// Encodes a message as a big-endian integer and raises it to e mod n

use super::bigint::{from_bytes, mod_pow, RsaBigInt};
use super::error::{RsaError, RsaResult};

/// Encrypt message bytes: c = m^e mod n, where m is the big-endian
/// integer encoding of the message.
///
/// The encoding must be numerically smaller than the modulus; otherwise
/// the exponentiation only sees m mod n and the message is silently
/// corrupted, so that case is rejected with `MessageTooLarge`. Use
/// `encrypt_wrapping` to reproduce the unchecked behavior.
pub fn encrypt(message: &[u8], e: &RsaBigInt, n: &RsaBigInt) -> RsaResult<RsaBigInt> {
    let m = from_bytes(message);

    if &m >= n {
        return Err(RsaError::MessageTooLarge {
            message_bits: m.bits(),
            modulus_bits: n.bits(),
        });
    }

    Ok(mod_pow(&m, e, n))
}

/// Encrypt a string using its UTF-8 bytes
pub fn encrypt_string(message: &str, e: &RsaBigInt, n: &RsaBigInt) -> RsaResult<RsaBigInt> {
    encrypt(message.as_bytes(), e, n)
}

/// Unchecked variant of `encrypt`: a message encoding >= n wraps mod n
/// and decrypts to the wrong bytes. Kept for behavioral parity with
/// textbook implementations that never validate the message size.
pub fn encrypt_wrapping(message: &[u8], e: &RsaBigInt, n: &RsaBigInt) -> RsaBigInt {
    mod_pow(&from_bytes(message), e, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::bigint::{from_u64, mod_pow};

    #[test]
    fn test_encrypt_textbook_fixture() {
        // p = 61, q = 53, n = 3233, e = 17: the byte 'A' (65) encrypts
        // to 2790 in the standard worked example
        let c = encrypt(b"A", &from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(c, from_u64(2790));
    }

    #[test]
    fn test_encrypt_string_matches_bytes() {
        let e = from_u64(17);
        let n = from_u64(3233);
        assert_eq!(
            encrypt_string("A", &e, &n).unwrap(),
            encrypt(b"A", &e, &n).unwrap()
        );
    }

    #[test]
    fn test_encrypt_rejects_oversize_message() {
        // "AB" encodes to 0x4142 = 16706 >= 3233
        let result = encrypt(b"AB", &from_u64(17), &from_u64(3233));
        assert!(matches!(
            result,
            Err(RsaError::MessageTooLarge {
                message_bits: 15,
                modulus_bits: 12,
            })
        ));
    }

    #[test]
    fn test_encrypt_wrapping_reduces_mod_n() {
        // The unchecked variant encrypts 16706 mod 3233 = 541 instead
        let n = from_u64(3233);
        let e = from_u64(17);
        let wrapped = encrypt_wrapping(b"AB", &e, &n);
        assert_eq!(wrapped, mod_pow(&(from_u64(16706) % &n), &e, &n));
    }

    #[test]
    fn test_encrypt_empty_message_is_zero() {
        // An empty message encodes as the integer 0
        let c = encrypt(b"", &from_u64(17), &from_u64(3233)).unwrap();
        assert_eq!(c, from_u64(0));
    }
}
