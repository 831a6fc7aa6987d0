use super::Ciphertext;
use crate::{Error, PublicKey, Result, arithmetic::field, keys::random_scalar};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::TryCryptoRng;

impl<'d> PublicKey<'d> {
    /// Encrypts a message using this public key.
    ///
    /// A fresh ephemeral scalar is drawn from `rng` on every call.
    pub fn encrypt<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        message: &BigUint,
    ) -> Result<Ciphertext<'d>> {
        encrypt(rng, self, message)
    }

    /// Encrypts a message using the operating system's random number
    /// generator.
    #[cfg(feature = "getrandom")]
    pub fn encrypt_os(&self, message: &BigUint) -> Result<Ciphertext<'d>> {
        encrypt(&mut rand_core::OsRng, self, message)
    }
}

/// Encrypts `message` under `public_key`.
///
/// The ephemeral scalar is held in a [`BigUint`], whose heap buffer is
/// released without being zeroized.
///
/// # Errors
///
/// - [`Error::MessageOutOfRange`] if `message >= p`
/// - [`Error::Rng`] if the random number generator fails
pub fn encrypt<'d, R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    public_key: &PublicKey<'d>,
    message: &BigUint,
) -> Result<Ciphertext<'d>> {
    let domain = public_key.domain();
    let p = domain.curve().p();

    if message >= p {
        log::debug!("rejecting message outside of [0, p - 1]");
        return Err(Error::MessageOutOfRange);
    }

    let generator = domain.generator();

    loop {
        // k ∈ [1, n - 1], never reused; its limbs are not wiped on drop
        let k = random_scalar(rng, domain.order())?;

        // S = k·Q, the shared secret point
        let shared = public_key.as_affine().multiply(&k)?;

        // the receiver must be able to invert Sₓ, otherwise draw a new k
        let sx = match shared.x() {
            Some(x) if !x.is_zero() => x,
            _ => {
                log::debug!("degenerate shared point, redrawing ephemeral scalar");
                continue;
            }
        };

        let c1 = generator.multiply(&k)?;
        let c2 = field::mul(message, sx, p);

        return Ok(Ciphertext::new(c1, c2));
    }
}
