use super::Ciphertext;
use crate::{Error, Result, SecretKey, arithmetic::field, mod_inverse};
use num_bigint::BigUint;

impl SecretKey<'_> {
    /// Decrypts a ciphertext using this secret key.
    ///
    /// Decrypting with a key other than the one the message was encrypted
    /// to returns an unrelated value, not an error.
    pub fn decrypt(&self, ciphertext: &Ciphertext<'_>) -> Result<BigUint> {
        decrypt(self, ciphertext)
    }
}

/// Decrypts `ciphertext` with `secret_key`.
///
/// # Errors
///
/// - [`Error::MessageOutOfRange`] if `C2 >= p`
/// - [`Error::CurveMismatch`] if `C1` is not on the key's curve
/// - [`Error::InvalidPoint`] if `C1` does not satisfy the curve equation
/// - [`Error::InverseUndefined`] if `d·C1` is the identity or has a zero
///   x-coordinate
pub fn decrypt(secret_key: &SecretKey<'_>, ciphertext: &Ciphertext<'_>) -> Result<BigUint> {
    let curve = secret_key.domain().curve();
    let p = curve.p();

    if ciphertext.c2() >= p {
        log::debug!("rejecting ciphertext: C2 outside of [0, p - 1]");
        return Err(Error::MessageOutOfRange);
    }

    let c1 = ciphertext.c1();
    if !curve.is(c1.curve()) {
        return Err(Error::CurveMismatch);
    }

    // S = d·C1 = d·k·G = k·Q
    let shared = c1.multiply(secret_key.as_scalar())?;
    let sx = shared.x().ok_or(Error::InverseUndefined)?;

    Ok(field::mul(ciphertext.c2(), &mod_inverse(sx, p)?, p))
}
