//! Elliptic curve domain parameters.
//!
//! A [`DomainParams`] value bundles the curve, its base point `G` and the
//! order `n` of the subgroup generated by `G`. It is constructed once and
//! passed by reference to every key and encryption operation.

use crate::{AffinePoint, Curve, Error, Result};
use hex_literal::hex;
use num_bigint::BigUint;

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// secp256k1 field modulus `p = 2²⁵⁶ - 2³² - 977`.
const SECP256K1_P: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// secp256k1 curve equation 𝒃-coefficient (𝒂 is zero).
const SECP256K1_B: u32 = 7;

/// secp256k1 base point x-coordinate.
const SECP256K1_GX: [u8; 32] =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// secp256k1 base point y-coordinate.
const SECP256K1_GY: [u8; 32] =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// Order of the secp256k1 base point.
const SECP256K1_N: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Lazily initialized secp256k1 domain parameters shared by the whole
/// process.
#[cfg(any(feature = "critical-section", feature = "std"))]
pub static SECP256K1: LazyLock<DomainParams> = LazyLock::new(DomainParams::secp256k1);

/// Curve, base point and base point order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DomainParams {
    curve: Curve,
    generator: (BigUint, BigUint),
    order: BigUint,
}

impl DomainParams {
    /// Create new domain parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomainParams`] unless `(gx, gy)` is on the
    /// curve, `order >= 2`, and `order·G` is the identity.
    pub fn new(curve: Curve, gx: BigUint, gy: BigUint, order: BigUint) -> Result<Self> {
        if !curve.contains(&gx, &gy) {
            log::debug!("rejecting domain parameters: generator is not on the curve");
            return Err(Error::InvalidDomainParams);
        }

        if order < BigUint::from(2u32) {
            log::debug!("rejecting domain parameters: order is smaller than 2");
            return Err(Error::InvalidDomainParams);
        }

        let params = Self {
            curve,
            generator: (gx, gy),
            order,
        };

        if !params.generator().multiply(&params.order)?.is_identity() {
            log::debug!("rejecting domain parameters: order does not annihilate generator");
            return Err(Error::InvalidDomainParams);
        }

        Ok(params)
    }

    /// secp256k1 domain parameters as specified in SEC 2: Recommended
    /// Elliptic Curve Domain Parameters.
    ///
    /// <https://www.secg.org/sec2-v2.pdf>
    ///
    /// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
    pub fn secp256k1() -> Self {
        Self {
            curve: Curve::from_raw(
                BigUint::default(),
                BigUint::from(SECP256K1_B),
                BigUint::from_bytes_be(&SECP256K1_P),
            ),
            generator: (
                BigUint::from_bytes_be(&SECP256K1_GX),
                BigUint::from_bytes_be(&SECP256K1_GY),
            ),
            order: BigUint::from_bytes_be(&SECP256K1_N),
        }
    }

    /// Curve equation and field modulus.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Base point of the curve.
    pub fn generator(&self) -> AffinePoint<'_> {
        let (gx, gy) = &self.generator;
        AffinePoint::from_coordinates(&self.curve, gx.clone(), gy.clone())
    }

    /// Order of the subgroup generated by the base point (i.e. scalar
    /// modulus).
    pub fn order(&self) -> &BigUint {
        &self.order
    }
}
