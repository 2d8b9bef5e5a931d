// RSA Key Generation
// Derives the modulus, totient, and key pair from freshly drawn primes

use num_traits::One;

use super::bigint::{gcd, generate_prime, mod_inverse, RsaBigInt};
use super::error::{RsaError, RsaResult};

/// RSA key pair: the values the cipher actually needs.
/// Invariants: e * d ≡ 1 (mod phi) and gcd(e, phi) = 1.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPair {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
    pub d: RsaBigInt, // Private exponent
}

/// Everything derived in one key-generation round, including the values a
/// caller may want to display (p, q, phi). Retaining phi outside of this
/// teaching tool would be a real-world insecurity; it exists here so the
/// shell can print it, and it is dropped with the round.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    pub p: RsaBigInt,
    pub q: RsaBigInt,
    pub n: RsaBigInt,
    pub phi: RsaBigInt,
    pub e: RsaBigInt,
    pub d: RsaBigInt,
}

impl KeyMaterial {
    /// The (n, e, d) triple, without the factorization
    pub fn key_pair(&self) -> KeyPair {
        KeyPair {
            n: self.n.clone(),
            e: self.e.clone(),
            d: self.d.clone(),
        }
    }
}

/// Compute n = p * q and phi = (p - 1) * (q - 1)
pub fn modulus_and_totient(p: &RsaBigInt, q: &RsaBigInt) -> (RsaBigInt, RsaBigInt) {
    let n = p * q;
    let phi = (p - 1u8) * (q - 1u8);
    (n, phi)
}

/// True iff gcd(a, b) = 1
pub fn is_coprime(a: &RsaBigInt, b: &RsaBigInt) -> bool {
    gcd(a, b).is_one()
}

/// Compute d = e^(-1) mod phi via the extended Euclidean algorithm.
/// Fails with `InvalidExponent` when gcd(e, phi) != 1; callers should
/// check `is_coprime` first so they can prompt for a new exponent
/// before doing any other work.
pub fn derive_private_exponent(e: &RsaBigInt, phi: &RsaBigInt) -> RsaResult<RsaBigInt> {
    mod_inverse(e, phi).ok_or(RsaError::InvalidExponent)
}

/// Run one key-generation round: draw p and q at `bit_length` bits each,
/// compute n and phi, verify the supplied exponent, and derive d.
///
/// A single attempt per round: if e is not coprime with phi the round is
/// abandoned (p and q are not retried) and the caller restarts from
/// scratch. No key material survives a failed round.
pub fn generate_round(bit_length: u32, e: RsaBigInt) -> RsaResult<KeyMaterial> {
    let p = generate_prime(bit_length);
    let mut q = generate_prime(bit_length);

    // Redraw q on the astronomically unlikely equal draw; n = p^2
    // would be trivially factorable
    while q == p {
        q = generate_prime(bit_length);
    }

    let (n, phi) = modulus_and_totient(&p, &q);

    if !is_coprime(&e, &phi) {
        return Err(RsaError::InvalidExponent);
    }

    let d = derive_private_exponent(&e, &phi)?;

    Ok(KeyMaterial { p, q, n, phi, e, d })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::bigint::from_u64;

    #[test]
    fn test_modulus_and_totient() {
        // The classic worked example: p = 61, q = 53
        let (n, phi) = modulus_and_totient(&from_u64(61), &from_u64(53));
        assert_eq!(n, from_u64(3233));
        assert_eq!(phi, from_u64(3120));
    }

    #[test]
    fn test_is_coprime_matrix() {
        // (a, b, expected)
        let cases = [
            (1u64, 1u64, true),
            (2, 2, false),
            (7, 7, false),
            (14, 15, true),
            (12, 18, false),
            (17, 3120, true),
            (2, 3120, false),
            (65537, 3120, true),
        ];
        for (a, b, expected) in cases {
            assert_eq!(
                is_coprime(&from_u64(a), &from_u64(b)),
                expected,
                "is_coprime({}, {})",
                a,
                b
            );
        }
    }

    #[test]
    fn test_derive_private_exponent_fixture() {
        // e = 17, phi = 3120 gives the textbook d = 2753
        let d = derive_private_exponent(&from_u64(17), &from_u64(3120)).unwrap();
        assert_eq!(d, from_u64(2753));
    }

    #[test]
    fn test_derive_private_exponent_rejects_shared_factor() {
        // gcd(2, 4) = 2: no inverse, must fail rather than return a value
        let result = derive_private_exponent(&from_u64(2), &from_u64(4));
        assert_eq!(result, Err(RsaError::InvalidExponent));
    }

    #[test]
    fn test_generate_round_key_validity() {
        // 65537 is prime, so a round only fails if 65537 divides phi;
        // retry the odd unlucky draw rather than flake
        let material = loop {
            if let Ok(m) = generate_round(64, from_u64(65537)) {
                break m;
            }
        };

        assert_ne!(material.p, material.q);
        assert_eq!(material.n, &material.p * &material.q);
        assert_eq!(
            material.phi,
            (&material.p - 1u8) * (&material.q - 1u8)
        );
        // e * d ≡ 1 (mod phi)
        assert_eq!((&material.e * &material.d) % &material.phi, from_u64(1));

        let pair = material.key_pair();
        assert_eq!(pair.n, material.n);
        assert_eq!(pair.e, material.e);
        assert_eq!(pair.d, material.d);
    }

    #[test]
    fn test_generate_round_abandons_on_even_exponent() {
        // phi = (p-1)(q-1) is always even for odd primes, so e = 2 can
        // never be coprime with it and the round must be abandoned
        let result = generate_round(32, from_u64(2));
        assert_eq!(result.unwrap_err(), RsaError::InvalidExponent);
    }
}
