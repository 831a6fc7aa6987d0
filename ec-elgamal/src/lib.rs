#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[allow(unused_extern_crates)]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod domain;
pub mod error;
pub mod keys;
pub mod pke;

pub use num_bigint::{self, BigUint};
pub use rand_core;

pub use crate::{
    arithmetic::{AffinePoint, Curve, mod_inverse},
    domain::DomainParams,
    error::{Error, Result},
    keys::{KeyPair, PublicKey, SecretKey},
    pke::{Ciphertext, decrypt, encrypt, generate_keypair},
};

#[cfg(any(feature = "critical-section", feature = "std"))]
pub use crate::domain::SECP256K1;
