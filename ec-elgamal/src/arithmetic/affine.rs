//! Affine curve points.

use super::{Curve, field};
use crate::{Error, Result};
use core::fmt;
use num_bigint::BigUint;

/// Point on a short Weierstrass curve in affine coordinates.
///
/// A point borrows the [`Curve`] it belongs to. Points are immutable values:
/// every group operation returns a new point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint<'c> {
    curve: &'c Curve,

    /// `None` for the point at infinity.
    coordinates: Option<(BigUint, BigUint)>,
}

impl<'c> AffinePoint<'c> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity(curve: &'c Curve) -> Self {
        Self {
            curve,
            coordinates: None,
        }
    }

    /// Create a point from its coordinates without checking the curve
    /// equation.
    ///
    /// Group operations reject such a point with [`Error::InvalidPoint`] if
    /// it is not on the curve. Use [`Curve::point`] for a checked
    /// constructor.
    pub fn from_coordinates(curve: &'c Curve, x: BigUint, y: BigUint) -> Self {
        Self {
            curve,
            coordinates: Some((x, y)),
        }
    }

    /// The curve this point belongs to.
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.coordinates.is_none()
    }

    /// Is this point the identity or a solution of the curve equation?
    pub fn is_on_curve(&self) -> bool {
        match &self.coordinates {
            None => true,
            Some((x, y)) => self.curve.contains(x, y),
        }
    }

    /// Returns `-self`.
    ///
    /// The y-coordinate is reduced modulo `p` first, so points built with
    /// [`AffinePoint::from_coordinates`] from unreduced values negate without
    /// being checked against the curve.
    pub fn negate(&self) -> Self {
        match &self.coordinates {
            None => self.clone(),
            Some((x, y)) => {
                Self::from_coordinates(self.curve, x.clone(), field::neg(y, self.curve.p()))
            }
        }
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPoint`] if either operand is not on the curve
    /// - [`Error::CurveMismatch`] if the operands belong to different curves
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.curve.is(other.curve) {
            return Err(Error::CurveMismatch);
        }

        if !self.is_on_curve() || !other.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        self.add_unchecked(other)
    }

    /// Returns `self + self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] if `self` is not on the curve.
    pub fn double(&self) -> Result<Self> {
        if !self.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        self.add_unchecked(self)
    }

    /// Group law for operands already known to be on the same curve.
    pub(super) fn add_unchecked(&self, other: &Self) -> Result<Self> {
        let (x1, y1) = match &self.coordinates {
            None => return Ok(other.clone()),
            Some(coords) => coords,
        };
        let (x2, y2) = match &other.coordinates {
            None => return Ok(self.clone()),
            Some(coords) => coords,
        };

        let curve = self.curve;
        let p = curve.p();

        // Q = -P, which also covers doubling a point with y = 0
        if x1 == x2 && *y1 == field::neg(y2, p) {
            return Ok(Self::identity(curve));
        }

        let slope = if x1 != x2 {
            // m = (y2 - y1) / (x2 - x1)
            let numerator = field::sub(y2, y1, p);
            let denominator = field::sub(x2, x1, p);
            field::mul(&numerator, &super::mod_inverse(&denominator, p)?, p)
        } else {
            // P = Q: m = (3·x1² + a) / (2·y1)
            let numerator = field::add(
                &field::mul(&BigUint::from(3u32), &field::square(x1, p), p),
                curve.a(),
                p,
            );
            let denominator = field::add(y1, y1, p);
            field::mul(&numerator, &super::mod_inverse(&denominator, p)?, p)
        };

        // x3 = m² - x1 - x2
        let x3 = field::sub(&field::sub(&field::square(&slope, p), x1, p), x2, p);

        // y3 = -(m·(x3 - x1) + y1)
        let y3 = field::neg(
            &field::add(&field::mul(&slope, &field::sub(&x3, x1, p), p), y1, p),
            p,
        );

        Ok(Self::from_coordinates(curve, x3, y3))
    }
}

impl fmt::Display for AffinePoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinates {
            None => write!(f, "Point(Identity)"),
            Some((x, y)) => write!(f, "Point(x={x:#x}, y={y:#x})"),
        }
    }
}
