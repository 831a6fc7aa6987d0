//! Secret keys, public keys and key pairs.

use crate::{AffinePoint, DomainParams, Error, Result};
use alloc::vec;
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

/// Secret scalar `d` in `[1, n - 1]`.
///
/// # ⚠️ Warning
///
/// This value is key material.
///
/// Please treat it with the care it deserves!
///
/// The random bytes a scalar is sampled from are zeroized, but the scalar
/// itself lives in a [`BigUint`] and is **not** wiped when the key is
/// dropped. Neither are copies made by [`Clone`] or intermediate values
/// produced during scalar multiplication.
#[derive(Clone, Eq, PartialEq)]
pub struct SecretKey<'d> {
    domain: &'d DomainParams,
    scalar: BigUint,
}

impl<'d> SecretKey<'d> {
    /// Generate a random [`SecretKey`].
    ///
    /// The scalar is drawn uniformly from `[1, n - 1]`.
    pub fn random<R: TryCryptoRng + ?Sized>(
        domain: &'d DomainParams,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self {
            domain,
            scalar: random_scalar(rng, domain.order())?,
        })
    }

    /// Create a secret key from a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScalarOutOfRange`] unless `1 <= scalar < n`.
    pub fn from_scalar(domain: &'d DomainParams, scalar: BigUint) -> Result<Self> {
        if scalar.is_zero() || &scalar >= domain.order() {
            log::debug!("rejecting secret scalar outside of [1, n - 1]");
            return Err(Error::ScalarOutOfRange);
        }

        Ok(Self { domain, scalar })
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    pub fn as_scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Domain parameters this key belongs to.
    pub fn domain(&self) -> &'d DomainParams {
        self.domain
    }

    /// Compute the [`PublicKey`] `d·G` which corresponds to this secret key.
    pub fn public_key(&self) -> Result<PublicKey<'d>> {
        let point = self.domain.generator().multiply(&self.scalar)?;
        Ok(PublicKey {
            domain: self.domain,
            point,
        })
    }
}

impl Debug for SecretKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// Public key: a non-identity point `Q = d·G`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey<'d> {
    domain: &'d DomainParams,
    point: AffinePoint<'d>,
}

impl<'d> PublicKey<'d> {
    /// Initialize [`PublicKey`] from an affine point.
    ///
    /// # Errors
    ///
    /// - [`Error::CurveMismatch`] if `point` is not on the domain's curve
    /// - [`Error::InvalidPoint`] if `point` is the identity or does not satisfy
    ///   the curve equation
    pub fn from_affine(domain: &'d DomainParams, point: AffinePoint<'d>) -> Result<Self> {
        if !domain.curve().is(point.curve()) {
            return Err(Error::CurveMismatch);
        }

        if point.is_identity() || !point.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        Ok(Self { domain, point })
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint<'d> {
        &self.point
    }

    /// Domain parameters this key belongs to.
    pub fn domain(&self) -> &'d DomainParams {
        self.domain
    }
}

/// Secret key together with its public key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyPair<'d> {
    secret_key: SecretKey<'d>,
    public_key: PublicKey<'d>,
}

impl<'d> KeyPair<'d> {
    /// Generate a random key pair.
    pub fn generate<R: TryCryptoRng + ?Sized>(
        domain: &'d DomainParams,
        rng: &mut R,
    ) -> Result<Self> {
        SecretKey::random(domain, rng)?.try_into()
    }

    /// Generate a random key pair using the operating system's random number
    /// generator.
    #[cfg(feature = "getrandom")]
    pub fn generate_os(domain: &'d DomainParams) -> Result<Self> {
        Self::generate(domain, &mut rand_core::OsRng)
    }

    /// Borrow the secret key.
    pub fn secret_key(&self) -> &SecretKey<'d> {
        &self.secret_key
    }

    /// Borrow the public key.
    pub fn public_key(&self) -> &PublicKey<'d> {
        &self.public_key
    }

    /// Split into the secret and public keys.
    pub fn into_parts(self) -> (SecretKey<'d>, PublicKey<'d>) {
        (self.secret_key, self.public_key)
    }
}

impl<'d> TryFrom<SecretKey<'d>> for KeyPair<'d> {
    type Error = Error;

    fn try_from(secret_key: SecretKey<'d>) -> Result<Self> {
        let public_key = secret_key.public_key()?;
        Ok(Self {
            secret_key,
            public_key,
        })
    }
}

/// Draw a scalar uniformly from `[1, n - 1]` by rejection sampling.
pub(crate) fn random_scalar<R: TryCryptoRng + ?Sized>(
    rng: &mut R,
    order: &BigUint,
) -> Result<BigUint> {
    let bits = order.bits();
    let mut bytes = Zeroizing::new(vec![0u8; order.to_bytes_be().len()]);

    // bytes.len() * 8 >= bits, so only the top byte carries excess bits
    let excess = (bytes.len() as u64) * 8 - bits;

    loop {
        rng.try_fill_bytes(bytes.as_mut_slice())
            .map_err(|_| Error::Rng)?;

        let k = BigUint::from_bytes_be(bytes.as_slice()) >> excess;
        if !k.is_zero() && &k < order {
            return Ok(k);
        }

        log::trace!("rejected out-of-range scalar candidate");
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyPair, PublicKey, SecretKey, random_scalar};
    use crate::{Curve, DomainParams, Error};
    use alloc::format;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn scalar_in_range() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        let order = BigUint::from(19u32);

        for _ in 0..1000 {
            let k = random_scalar(&mut rng, &order).unwrap();
            assert!(!k.is_zero());
            assert!(k < order);
        }
    }

    #[test]
    fn scalar_covers_range() {
        let mut rng = ChaCha8Rng::from_seed([1u8; 32]);
        let order = BigUint::from(19u32);
        let mut seen = [false; 19];

        for _ in 0..2000 {
            let k = random_scalar(&mut rng, &order).unwrap();
            seen[usize::try_from(&k).unwrap()] = true;
        }

        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|s| *s));
    }

    #[test]
    fn smallest_order() {
        let mut rng = ChaCha8Rng::from_seed([2u8; 32]);
        let k = random_scalar(&mut rng, &BigUint::from(2u32)).unwrap();
        assert!(k.is_one());
    }

    #[test]
    fn deterministic_with_seeded_rng() {
        let domain = DomainParams::secp256k1();
        let a = SecretKey::random(&domain, &mut ChaCha8Rng::from_seed([7u8; 32])).unwrap();
        let b = SecretKey::random(&domain, &mut ChaCha8Rng::from_seed([7u8; 32])).unwrap();
        let c = SecretKey::random(&domain, &mut ChaCha8Rng::from_seed([8u8; 32])).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_scalar() < domain.order());
    }

    #[test]
    fn scalar_bounds() {
        let domain = DomainParams::secp256k1();
        let n = domain.order().clone();

        assert_eq!(
            SecretKey::from_scalar(&domain, BigUint::zero()),
            Err(Error::ScalarOutOfRange)
        );
        assert_eq!(
            SecretKey::from_scalar(&domain, n.clone()),
            Err(Error::ScalarOutOfRange)
        );
        assert!(SecretKey::from_scalar(&domain, BigUint::one()).is_ok());
        assert!(SecretKey::from_scalar(&domain, n - 1u32).is_ok());
    }

    #[test]
    fn public_key_of_one_is_generator() {
        let domain = DomainParams::secp256k1();
        let secret_key = SecretKey::from_scalar(&domain, BigUint::one()).unwrap();

        assert_eq!(
            secret_key.public_key().unwrap().as_affine(),
            &domain.generator()
        );
    }

    #[test]
    fn public_key_of_two_is_doubled_generator() {
        let domain = DomainParams::secp256k1();
        let secret_key = SecretKey::from_scalar(&domain, BigUint::from(2u32)).unwrap();
        let generator = domain.generator();

        assert_eq!(
            secret_key.public_key().unwrap().as_affine(),
            &generator.add(&generator).unwrap()
        );
    }

    #[test]
    fn keypair_is_consistent() {
        let domain = DomainParams::secp256k1();
        let mut rng = ChaCha8Rng::from_seed([3u8; 32]);
        let keypair = KeyPair::generate(&domain, &mut rng).unwrap();

        let expected = domain
            .generator()
            .multiply(keypair.secret_key().as_scalar())
            .unwrap();
        assert_eq!(keypair.public_key().as_affine(), &expected);

        let (secret_key, public_key) = keypair.into_parts();
        assert_eq!(secret_key.public_key().unwrap(), public_key);
    }

    #[test]
    fn public_key_validation() {
        let domain = DomainParams::secp256k1();
        let curve = domain.curve();

        assert_eq!(
            PublicKey::from_affine(&domain, curve.identity()),
            Err(Error::InvalidPoint)
        );

        let off_curve = crate::AffinePoint::from_coordinates(curve, 1u32.into(), 1u32.into());
        assert_eq!(
            PublicKey::from_affine(&domain, off_curve),
            Err(Error::InvalidPoint)
        );

        let toy = Curve::new(2u32.into(), 2u32.into(), 17u32.into()).unwrap();
        let foreign = toy.point(5u32.into(), 1u32.into()).unwrap();
        assert_eq!(
            PublicKey::from_affine(&domain, foreign),
            Err(Error::CurveMismatch)
        );

        assert!(PublicKey::from_affine(&domain, domain.generator()).is_ok());
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let domain = DomainParams::secp256k1();
        let secret_key = SecretKey::from_scalar(&domain, BigUint::from(42u32)).unwrap();

        assert_eq!(format!("{secret_key:?}"), "SecretKey { .. }");
    }
}
