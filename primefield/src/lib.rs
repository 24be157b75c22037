//! Schoolbook arithmetic in `GF(prime)` for small primes.
//!
//! Each [`FieldElement`] carries its own modulus, so operations between
//! elements of different fields are rejected at runtime with
//! [`Error::PrimesMustMatch`]. The modulus is trusted to be prime; nothing
//! here checks it.
//!
//! ```
//! use primefield::FieldElement;
//!
//! let a = FieldElement::new(7, 13)?;
//! let b = FieldElement::new(12, 13)?;
//! assert_eq!(a.add(&b)?, FieldElement::new(6, 13)?);
//! assert_eq!(a.div(&b)?.mul(&b)?, a);
//! # Ok::<(), primefield::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod error;

pub use crate::error::{Error, Result};

use core::fmt;

/// An element of the prime field of order `prime`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FieldElement {
    num: u64,
    prime: u64,
}

impl FieldElement {
    /// Create the element `num` of `GF(prime)`.
    ///
    /// Returns [`Error::NumOutOfRange`] unless `num < prime`.
    pub const fn new(num: u64, prime: u64) -> Result<Self> {
        if num >= prime {
            return Err(Error::NumOutOfRange);
        }

        Ok(Self { num, prime })
    }

    /// Representative in `[0, prime)`.
    pub const fn num(&self) -> u64 {
        self.num
    }

    /// Order of the field.
    pub const fn prime(&self) -> u64 {
        self.prime
    }

    /// Is this the additive identity?
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    fn same_field(&self, other: &Self) -> Result<()> {
        if self.prime != other.prime {
            return Err(Error::PrimesMustMatch);
        }

        Ok(())
    }

    /// Build an element from a value already reduced below `self.prime`.
    fn with_num(&self, num: u128) -> Self {
        debug_assert!(num < u128::from(self.prime));
        Self {
            num: num as u64,
            prime: self.prime,
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        let p = u128::from(self.prime);
        Ok(self.with_num((u128::from(self.num) + u128::from(other.num)) % p))
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        let p = u128::from(self.prime);
        Ok(self.with_num((u128::from(self.num) + p - u128::from(other.num)) % p))
    }

    /// Returns `self * other`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        let p = u128::from(self.prime);
        Ok(self.with_num((u128::from(self.num) * u128::from(other.num)) % p))
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        let p = u128::from(self.prime);
        self.with_num((p - u128::from(self.num)) % p)
    }

    /// Raises `self` to the power `exp`.
    ///
    /// By Fermat's little theorem `a^(prime-1) = 1` for non-zero `a`, so the
    /// exponent is first reduced modulo `prime - 1`; negative exponents then
    /// land on the matching positive one.
    ///
    /// Returns [`Error::DivisionByZero`] when raising zero to a negative power.
    pub fn pow(&self, exp: i64) -> Result<Self> {
        if self.num == 0 {
            return match exp {
                0 => Ok(self.with_num(1 % u128::from(self.prime))),
                e if e > 0 => Ok(*self),
                _ => Err(Error::DivisionByZero),
            };
        }

        // num != 0 implies prime >= 2
        let order = i128::from(self.prime - 1);
        let exp = i128::from(exp).rem_euclid(order) as u128;
        Ok(self.with_num(mod_pow(self.num, exp, self.prime)))
    }

    /// Returns the multiplicative inverse `self^(prime-2)`.
    ///
    /// Returns [`Error::DivisionByZero`] for zero.
    pub fn inv(&self) -> Result<Self> {
        if self.num == 0 {
            return Err(Error::DivisionByZero);
        }

        let exp = u128::from(self.prime - 2);
        Ok(self.with_num(mod_pow(self.num, exp, self.prime)))
    }

    /// Returns `self / other`.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.same_field(other)?;
        self.mul(&other.inv()?)
    }
}

/// Square-and-multiply `base^exp mod modulus`.
fn mod_pow(base: u64, mut exp: u128, modulus: u64) -> u128 {
    let m = u128::from(modulus);
    let mut base = u128::from(base) % m;
    let mut acc = 1 % m;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    acc
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({} % {})", self.num, self.prime)
    }
}
