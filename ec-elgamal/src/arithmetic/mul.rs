//! Scalar multiplication.

use super::AffinePoint;
use crate::{Error, Result};
use num_bigint::BigUint;

impl<'c> AffinePoint<'c> {
    /// Returns `k·self` using binary double-and-add.
    ///
    /// Bits of `k` are consumed from least to most significant: whenever a
    /// bit is set the running doubled point is added into the accumulator.
    /// This needs at most `bits(k)` doublings and additions, and
    /// `multiply(0)` is the identity for any valid point.
    ///
    /// This operation is variable time in `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPoint`] if `self` is not on the curve.
    pub fn multiply(&self, k: &BigUint) -> Result<Self> {
        if !self.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        let bits = k.bits();
        let mut acc = Self::identity(self.curve());
        let mut doubled = self.clone();

        for i in 0..bits {
            if k.bit(i) {
                acc = acc.add_unchecked(&doubled)?;
            }

            // skip the final, unused doubling
            if i + 1 < bits {
                doubled = doubled.add_unchecked(&doubled)?;
            }
        }

        Ok(acc)
    }
}
