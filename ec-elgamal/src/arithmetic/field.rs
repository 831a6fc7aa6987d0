//! Prime field arithmetic on canonical residues.

use crate::{Error, Result};
use core::mem;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

/// Computes the unique `s` in `[0, p - 1]` such that `a * s ≡ 1 (mod p)`.
///
/// Uses the iterative extended Euclidean algorithm. `a` need not be reduced
/// modulo `p` beforehand.
///
/// # Errors
///
/// Returns [`Error::InverseUndefined`] if `gcd(a, p) ≠ 1` (in particular when
/// `a ≡ 0 (mod p)`), or if `p < 2`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus <= &BigUint::one() {
        return Err(Error::InverseUndefined);
    }

    let modulus = BigInt::from(modulus.clone());
    let (mut old_r, mut r) = (BigInt::from(a.clone()), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    // `old_r` now holds `gcd(a, p)`
    if !old_r.is_one() {
        return Err(Error::InverseUndefined);
    }

    Ok(reduce_signed(&old_s, &modulus))
}

/// Reduces a possibly negative integer into `[0, m)`.
fn reduce_signed(x: &BigInt, modulus: &BigInt) -> BigUint {
    let mut r = x % modulus;
    if r.is_negative() {
        r += modulus;
    }
    r.magnitude().clone()
}

/// Returns `x mod p`.
pub(crate) fn reduce(x: &BigUint, p: &BigUint) -> BigUint {
    x % p
}

/// Returns `a + b mod p`.
pub(crate) fn add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// Returns `a - b mod p`.
pub(crate) fn sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + p - b % p) % p
}

/// Returns `a * b mod p`.
pub(crate) fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Returns `a² mod p`.
pub(crate) fn square(a: &BigUint, p: &BigUint) -> BigUint {
    mul(a, a, p)
}

/// Returns `-a mod p`.
pub(crate) fn neg(a: &BigUint, p: &BigUint) -> BigUint {
    (p - a % p) % p
}
