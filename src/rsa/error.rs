// RSA Error Types
// Typed failure conditions reported by the core operations

use thiserror::Error;

/// Errors that can occur during RSA key generation and encryption
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// The supplied public exponent shares a factor with phi, so no
    /// private exponent exists. The round must be restarted with a
    /// different exponent.
    #[error("e is not coprime with phi; choose a different exponent")]
    InvalidExponent,

    /// The message encodes to an integer at least as large as the
    /// modulus; encrypting it would silently reduce it mod n and the
    /// original message would be unrecoverable.
    #[error(
        "message is too large for the modulus ({message_bits}-bit message, {modulus_bits}-bit modulus)"
    )]
    MessageTooLarge {
        message_bits: u64,
        modulus_bits: u64,
    },
}

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;
