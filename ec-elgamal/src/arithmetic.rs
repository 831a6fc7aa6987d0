//! A pure-Rust implementation of group operations on short Weierstrass curves
//! `y² = x³ + a·x + b` over a prime field.
//!
//! All values are arbitrary-precision [`BigUint`][num_bigint::BigUint]s kept
//! in canonical form, i.e. reduced into `[0, p)`.
//!
//! This arithmetic is **not** constant time.

mod affine;
mod curve;
pub(crate) mod field;
mod mul;

pub use self::{affine::AffinePoint, curve::Curve, field::mod_inverse};
