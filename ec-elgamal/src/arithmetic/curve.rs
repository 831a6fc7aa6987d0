//! Short Weierstrass curve equation.

use super::{AffinePoint, field};
use crate::{Error, Result};
use core::ptr;
use num_bigint::BigUint;
use num_traits::Zero;

/// Short Weierstrass curve `y² = x³ + a·x + b` over the prime field `𝔽ₚ`.
///
/// The coefficients are stored reduced modulo `p`, so a curve with `a = -3`
/// is constructed by passing `p - 3`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    a: BigUint,
    b: BigUint,
    p: BigUint,
}

impl Curve {
    /// Create a new curve from its equation coefficients and field modulus.
    ///
    /// `p` is assumed to be prime; this is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCurve`] if `p` is even or smaller than 5, or if
    /// the curve is singular, i.e. `4a³ + 27b² ≡ 0 (mod p)`.
    pub fn new(a: BigUint, b: BigUint, p: BigUint) -> Result<Self> {
        if p < BigUint::from(5u32) || !p.bit(0) {
            log::debug!("rejecting curve: modulus is not an odd integer >= 5");
            return Err(Error::InvalidCurve);
        }

        let curve = Self {
            a: field::reduce(&a, &p),
            b: field::reduce(&b, &p),
            p,
        };

        if curve.discriminant().is_zero() {
            log::debug!("rejecting curve: 4a³ + 27b² vanishes");
            return Err(Error::InvalidCurve);
        }

        Ok(curve)
    }

    /// Construct a curve from coefficients already known to be valid.
    pub(crate) fn from_raw(a: BigUint, b: BigUint, p: BigUint) -> Self {
        Self { a, b, p }
    }

    /// The 𝒂-coefficient of the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// The 𝒃-coefficient of the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime field modulus.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(&self) -> AffinePoint<'_> {
        AffinePoint::identity(self)
    }

    /// Create a point on this curve, checking that it satisfies the curve
    /// equation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] if `(x, y)` is not on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<AffinePoint<'_>> {
        if self.contains(&x, &y) {
            Ok(AffinePoint::from_coordinates(self, x, y))
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Do the coordinates `(x, y)` lie in `[0, p)` and satisfy the curve
    /// equation?
    pub fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= &self.p || y >= &self.p {
            return false;
        }

        field::square(y, &self.p) == self.rhs(x)
    }

    /// Evaluates `x³ + a·x + b`.
    fn rhs(&self, x: &BigUint) -> BigUint {
        let x3 = field::mul(&field::square(x, &self.p), x, &self.p);
        let ax = field::mul(&self.a, x, &self.p);
        field::add(&field::add(&x3, &ax, &self.p), &self.b, &self.p)
    }

    /// Evaluates `4a³ + 27b²`.
    fn discriminant(&self) -> BigUint {
        let p = &self.p;
        let a3 = field::mul(&field::square(&self.a, p), &self.a, p);
        let b2 = field::square(&self.b, p);
        field::add(
            &field::mul(&BigUint::from(4u32), &a3, p),
            &field::mul(&BigUint::from(27u32), &b2, p),
            p,
        )
    }

    /// Is `other` the same curve as `self`?
    pub(crate) fn is(&self, other: &Curve) -> bool {
        ptr::eq(self, other) || self == other
    }
}

#[cfg(test)]
mod tests {
    use super::Curve;
    use crate::Error;
    use num_bigint::BigUint;
    use num_traits::Zero;

    fn toy_curve() -> Curve {
        Curve::new(2u32.into(), 2u32.into(), 17u32.into()).unwrap()
    }

    #[test]
    fn contains_points() {
        let curve = toy_curve();
        assert!(curve.contains(&5u32.into(), &1u32.into()));
        assert!(curve.contains(&5u32.into(), &16u32.into()));
        assert!(curve.contains(&0u32.into(), &6u32.into()));
        assert!(!curve.contains(&5u32.into(), &2u32.into()));
    }

    #[test]
    fn rejects_unreduced_coordinates() {
        let curve = toy_curve();
        // (22, 1) ≡ (5, 1) but is not canonical
        assert!(!curve.contains(&22u32.into(), &1u32.into()));
        assert!(!curve.contains(&5u32.into(), &18u32.into()));
    }

    #[test]
    fn reduces_coefficients() {
        let curve = Curve::new(19u32.into(), 36u32.into(), 17u32.into()).unwrap();
        assert_eq!(curve, toy_curve());
    }

    #[test]
    fn rejects_singular_curve() {
        assert_eq!(
            Curve::new(BigUint::zero(), BigUint::zero(), 17u32.into()),
            Err(Error::InvalidCurve)
        );

        // 4·(-3)³ + 27·2² = -108 + 108 = 0
        assert_eq!(
            Curve::new(14u32.into(), 2u32.into(), 17u32.into()),
            Err(Error::InvalidCurve)
        );
    }

    #[test]
    fn rejects_bad_modulus() {
        assert_eq!(
            Curve::new(2u32.into(), 2u32.into(), 16u32.into()),
            Err(Error::InvalidCurve)
        );
        assert_eq!(
            Curve::new(1u32.into(), 1u32.into(), 3u32.into()),
            Err(Error::InvalidCurve)
        );
    }

    #[test]
    fn checked_point_constructor() {
        let curve = toy_curve();
        assert!(curve.point(5u32.into(), 1u32.into()).is_ok());
        assert_eq!(
            curve.point(5u32.into(), 2u32.into()),
            Err(Error::InvalidPoint)
        );
        assert!(curve.identity().is_identity());
    }
}
