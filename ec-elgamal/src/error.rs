//! Error type

use core::fmt::{self, Display, Formatter};

/// Result type with the `ec-elgamal` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve arithmetic and encryption errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// A point operand does not satisfy the curve equation
    InvalidPoint,
    /// Operand and modulus are not coprime, so no modular inverse exists
    InverseUndefined,
    /// Secret scalar is outside of `[1, n - 1]`
    ScalarOutOfRange,
    /// Message or ciphertext field element is not in `[0, p - 1]`
    MessageOutOfRange,
    /// Curve coefficients or modulus describe a singular or unusable curve
    InvalidCurve,
    /// Generator and order do not form a valid cyclic subgroup
    InvalidDomainParams,
    /// Operands belong to different curves
    CurveMismatch,
    /// The random number generator failed
    Rng,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint => write!(f, "point is not on the curve"),
            Error::InverseUndefined => write!(f, "modular inverse is undefined"),
            Error::ScalarOutOfRange => write!(f, "scalar is out of range"),
            Error::MessageOutOfRange => write!(f, "field element is out of range"),
            Error::InvalidCurve => write!(f, "curve parameters are invalid"),
            Error::InvalidDomainParams => write!(f, "domain parameters are invalid"),
            Error::CurveMismatch => write!(f, "points belong to different curves"),
            Error::Rng => write!(f, "random number generator failure"),
        }
    }
}

impl core::error::Error for Error {}
