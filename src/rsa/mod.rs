// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;

pub use bigint::{generate_prime, RsaBigInt};
pub use decrypt::{decrypt, decrypt_to_string};
pub use encrypt::{encrypt, encrypt_string, encrypt_wrapping};
pub use error::{RsaError, RsaResult};
pub use keygen::{
    derive_private_exponent, generate_round, is_coprime, modulus_and_totient, KeyMaterial, KeyPair,
};
