//! ElGamal-style public-key encryption of field elements.
//!
//! The sender draws an ephemeral scalar `k`, publishes `C1 = k·G`, and masks
//! the message with the x-coordinate of the Diffie-Hellman point `k·Q`:
//! `C2 = m · (k·Q)ₓ mod p`. The receiver recomputes `d·C1 = k·Q` and divides
//! it back out.
//!
//! Messages are integers in `[0, p - 1]`; encoding application data into that
//! range is the caller's concern.
//!
//! ## ⚠️ No integrity protection
//!
//! Ciphertexts are malleable and unauthenticated. Decrypting with the wrong
//! secret key (or a tampered `C2`) yields an unrelated field element rather
//! than an error. This is inherent to the scheme.
//!
//! ## Usage
#![cfg_attr(feature = "getrandom", doc = "```")]
#![cfg_attr(not(feature = "getrandom"), doc = "```ignore")]
//! use ec_elgamal::{BigUint, DomainParams, KeyPair};
//!
//! let domain = DomainParams::secp256k1();
//! let keypair = KeyPair::generate_os(&domain)?;
//!
//! let message = BigUint::from(123456789u32);
//! let ciphertext = keypair.public_key().encrypt_os(&message)?;
//!
//! let decrypted = keypair.secret_key().decrypt(&ciphertext)?;
//! assert_eq!(decrypted, message);
//! # Ok::<(), ec_elgamal::Error>(())
//! ```

mod decrypting;
mod encrypting;

pub use self::{decrypting::decrypt, encrypting::encrypt};

use crate::{AffinePoint, DomainParams, KeyPair, Result};
use num_bigint::BigUint;
use rand_core::TryCryptoRng;

/// Ciphertext `(C1, C2)`: the ephemeral point `k·G` and the masked message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ciphertext<'d> {
    c1: AffinePoint<'d>,
    c2: BigUint,
}

impl<'d> Ciphertext<'d> {
    /// Assemble a ciphertext from its components.
    ///
    /// Nothing is validated here; [`decrypt`] checks both components.
    pub fn new(c1: AffinePoint<'d>, c2: BigUint) -> Self {
        Self { c1, c2 }
    }

    /// Get C1
    pub fn c1(&self) -> &AffinePoint<'d> {
        &self.c1
    }

    /// Get C2
    pub fn c2(&self) -> &BigUint {
        &self.c2
    }

    /// Split into `(C1, C2)`.
    pub fn into_parts(self) -> (AffinePoint<'d>, BigUint) {
        (self.c1, self.c2)
    }
}

/// Generate a random key pair for the given domain.
pub fn generate_keypair<'d, R: TryCryptoRng + ?Sized>(
    domain: &'d DomainParams,
    rng: &mut R,
) -> Result<KeyPair<'d>> {
    KeyPair::generate(domain, rng)
}
