// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Miller-Rabin witness rounds used for prime generation.
/// Each round rules out a composite with probability at least 3/4,
/// so 64 rounds bound the failure probability by 4^-64 = 2^-128.
pub const MILLER_RABIN_ROUNDS: u32 = 64;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
/// Works on signed integers because the Bezout coefficients alternate sign
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = std::mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist (gcd(a, m) != 1)
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    let a = BigInt::from_biguint(Sign::Plus, a.clone());
    let m = BigInt::from_biguint(Sign::Plus, m.clone());

    let (gcd, x, _) = extended_gcd(&a, &m);
    if !gcd.is_one() {
        return None;
    }

    // Bezout coefficient may be negative; reduce into [0, m)
    let inverse = x.mod_floor(&m);
    inverse.to_biguint()
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &RsaBigInt, iterations: u32) -> bool {
    if n < &RsaBigInt::from(2u8) {
        return false;
    }
    if n == &RsaBigInt::from(2u8) || n == &RsaBigInt::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let mut d = n.clone() - 1u8;
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    // Witness loop
    let mut rng = thread_rng();
    let two = RsaBigInt::from(2u8);
    let n_minus_two = n - RsaBigInt::from(2u8);

    for _ in 0..iterations {
        // Pick random witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_two);

        // Compute x = a^d mod n
        let mut x = mod_pow(&a, &d, n);

        if x == RsaBigInt::one() || x == n - 1u8 {
            continue;
        }

        let mut continue_outer = false;
        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n - 1u8 {
                continue_outer = true;
                break;
            }
        }

        if continue_outer {
            continue;
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

/// Generate a random probable prime of exactly `bit_length` bits (top bit set).
/// Candidates are drawn uniformly from [2^(bit_length-1), 2^bit_length),
/// forced odd, and retried until one passes Miller-Rabin. The search is
/// unbounded; a prime of the requested size turns up quickly with
/// overwhelming probability.
pub fn generate_prime(bit_length: u32) -> RsaBigInt {
    assert!(bit_length >= 2, "no prime has fewer than 2 bits");

    let mut rng = thread_rng();
    let lower = RsaBigInt::one() << (bit_length - 1);
    let upper = RsaBigInt::one() << bit_length;

    loop {
        let candidate = rng.gen_biguint_range(&lower, &upper) | RsaBigInt::one();

        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
            return candidate;
        }
    }
}
