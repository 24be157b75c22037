//! Test-only reference model of secp256k1 arithmetic.
//!
//! Provides:
//!
//! - [`FieldElement`]: elements of the base field, kept as a lazy
//!   `numerator / denominator` fraction so that modular inversion only happens
//!   when a canonical integer is actually needed.
//! - [`AffinePoint`]: points on `y² = x³ + 7` (or the point at infinity) with
//!   the textbook chord-and-tangent addition law.
//! - The curve constants: [`FIELD_MODULUS`], [`ORDER`], [`ORDER_HALF`] and the
//!   generator returned by [`AffinePoint::generator`].
//!
//! The code is written to be read, not to be fast.
//!
//! # ⚠️ Security Warning
//!
//! Nothing here is constant-time and every operation branches on secret
//! values. Use it to cross-check other implementations in tests, never to
//! handle keys.
//!
//! # Example
//!
//! ```
//! use k256_reference::{AffinePoint, FieldElement};
//!
//! let g = AffinePoint::generator();
//! let two_g = g.add(&g)?;
//! assert_eq!(two_g, g.double()?);
//! assert_eq!(g.add(&-&g)?, AffinePoint::identity());
//!
//! // 7/1 and 14/2 are the same field element
//! assert_eq!(FieldElement::new(7, 1)?, FieldElement::new(14, 2)?);
//! # Ok::<(), k256_reference::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod arithmetic;
mod error;

#[cfg(test)]
mod test_vectors;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, CURVE_EQUATION_B, FIELD_MODULUS, ORDER, ORDER_HALF},
    error::{ArithmeticError, ConstructionError, Error, Result},
};
pub use num_bigint;

/// Big-endian encoding of a field element.
pub type FieldBytes = [u8; 32];
