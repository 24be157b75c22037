//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use super::FIELD_MODULUS;
use crate::{ArithmeticError, ConstructionError, FieldBytes};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// The field modulus as a signed integer, for reducing signed inputs.
static MODULUS_INT: Lazy<BigInt> = Lazy::new(|| BigInt::from(FIELD_MODULUS.clone()));

/// `p - 2`, the Fermat inversion exponent.
static INVERT_EXPONENT: Lazy<BigUint> = Lazy::new(|| &*FIELD_MODULUS - 2u32);

/// `(p + 1) / 4`, the square root exponent for `p ≡ 3 (mod 4)`.
static SQRT_EXPONENT: Lazy<BigUint> = Lazy::new(|| (&*FIELD_MODULUS + 1u32) >> 2u32);

/// An element in the finite field used for curve coordinates.
///
/// The value is held as a fraction `num / den` with both parts reduced modulo
/// `p`. Arithmetic never inverts: division only multiplies numerators with
/// denominators, and the one modular inversion needed to reach the canonical
/// integer is deferred to [`FieldElement::to_biguint`] and the methods built
/// on it.
///
/// Two elements may hold different fractions for the same value, so equality
/// is decided by cross-multiplication rather than by comparing the parts.
///
/// # `serde` support
///
/// When the `serde` feature of this crate is enabled, the `Serialize` and
/// `Deserialize` traits are impl'd for this type using the canonical 32-byte
/// big-endian encoding, hex encoded for text-based formats.
#[derive(Clone, Debug)]
pub struct FieldElement {
    num: BigUint,
    den: BigUint,
}

impl FieldElement {
    /// Returns the zero element.
    pub fn zero() -> Self {
        Self {
            num: BigUint::zero(),
            den: BigUint::one(),
        }
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self {
            num: BigUint::one(),
            den: BigUint::one(),
        }
    }

    /// Creates the field element `num / den`.
    ///
    /// Both parts are reduced modulo `p`; negative inputs wrap around to their
    /// representative in `[0, p)`.
    ///
    /// Returns [`ConstructionError::DenominatorZero`] if `den ≡ 0 (mod p)`.
    pub fn new(
        num: impl Into<BigInt>,
        den: impl Into<BigInt>,
    ) -> Result<Self, ConstructionError> {
        Self::from_reduced(reduce(&num.into()), reduce(&den.into()))
    }

    /// Builds an element from parts already reduced modulo `p`.
    fn from_reduced(num: BigUint, den: BigUint) -> Result<Self, ConstructionError> {
        if den.is_zero() {
            log::trace!("rejecting field element with zero denominator");
            return Err(ConstructionError::DenominatorZero);
        }

        if num.is_zero() {
            return Ok(Self::zero());
        }

        Ok(Self { num, den })
    }

    /// Builds an element from unreduced products of non-zero denominators.
    fn from_products(num: BigUint, den: BigUint) -> Self {
        let p = &*FIELD_MODULUS;
        let num = num % p;
        let den = den % p;
        debug_assert!(!den.is_zero(), "product of non-zero residues mod a prime");

        if num.is_zero() {
            Self::zero()
        } else {
            Self { num, den }
        }
    }

    /// Parses a big-endian integer, reducing it modulo `p` instead of rejecting
    /// values out of range.
    pub(crate) fn from_bytes_reduced(bytes: &FieldBytes) -> Self {
        Self::from_products(BigUint::from_bytes_be(bytes), BigUint::one())
    }

    /// Attempts to parse the given byte array as a big-endian field element.
    ///
    /// Returns [`ConstructionError::OutOfRange`] if the integer is not in
    /// `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self, ConstructionError> {
        let value = BigUint::from_bytes_be(bytes);

        if value >= *FIELD_MODULUS {
            log::trace!("rejecting field element encoding >= p");
            return Err(ConstructionError::OutOfRange);
        }

        Self::from_reduced(value, BigUint::one())
    }

    /// Returns the 32-byte big-endian encoding of the canonical value.
    pub fn to_bytes(&self) -> FieldBytes {
        let be = self.to_biguint().to_bytes_be();
        let mut bytes = FieldBytes::default();
        bytes[32 - be.len()..].copy_from_slice(&be);
        bytes
    }

    /// Returns the canonical value as 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        let digits = self.to_biguint().to_str_radix(16);
        format!("{digits:0>64}")
    }

    /// Raw numerator of the fraction, reduced modulo `p`.
    pub fn numerator(&self) -> &BigUint {
        &self.num
    }

    /// Raw denominator of the fraction, reduced modulo `p` and never zero.
    pub fn denominator(&self) -> &BigUint {
        &self.den
    }

    /// Is the fraction already in canonical form, i.e. with denominator one?
    pub fn is_normalized(&self) -> bool {
        self.den.is_one()
    }

    /// Returns the canonical integer value in `[0, p)`.
    ///
    /// Computes `num · den^(p-2) mod p` unless the denominator is already one.
    pub fn to_biguint(&self) -> BigUint {
        if self.den.is_one() {
            return self.num.clone();
        }

        let p = &*FIELD_MODULUS;
        let den_inv = self.den.modpow(&INVERT_EXPONENT, p);
        (&self.num * den_inv) % p
    }

    /// Returns the same value with denominator one.
    ///
    /// The receiver is left untouched.
    pub fn normalize(&self) -> Self {
        Self::from_products(self.to_biguint(), BigUint::one())
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> bool {
        // zero always carries numerator 0 and the numerator of a non-zero
        // value is never 0 because the denominator is invertible
        self.num.is_zero()
    }

    /// Determine if the canonical value is even.
    pub fn is_even(&self) -> bool {
        self.to_biguint().is_even()
    }

    /// Determine if the canonical value is odd.
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Returns `-self`.
    pub fn negate(&self) -> Self {
        Self::from_products(&*FIELD_MODULUS - &self.num, self.den.clone())
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        self.mul_scalar(2)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        Self::from_products(&self.num * &self.num, &self.den * &self.den)
    }

    /// Multiplies the numerator by the integer `k`, keeping the denominator.
    pub fn mul_scalar(&self, k: impl Into<BigInt>) -> Self {
        let num = reduce(&(BigInt::from(self.num.clone()) * k.into()));
        Self::from_products(num, self.den.clone())
    }

    /// Raises `self` to the integer power `exp`.
    ///
    /// Numerator and denominator are exponentiated separately; a negative
    /// exponent swaps them first, so `x.pow(-1)` is the inverse of `x`.
    ///
    /// Returns [`ConstructionError::DenominatorZero`] when raising zero to a
    /// negative power.
    pub fn pow(&self, exp: impl Into<BigInt>) -> Result<Self, ConstructionError> {
        let exp = exp.into();
        let p = &*FIELD_MODULUS;

        let (base_num, base_den) = match exp.sign() {
            Sign::Minus => (&self.den, &self.num),
            _ => (&self.num, &self.den),
        };

        Self::from_reduced(
            base_num.modpow(exp.magnitude(), p),
            base_den.modpow(exp.magnitude(), p),
        )
    }

    /// Returns the multiplicative inverse of `self`.
    ///
    /// Returns [`ConstructionError::DenominatorZero`] if `self` is zero.
    pub fn invert(&self) -> Result<Self, ConstructionError> {
        self.pow(-1)
    }

    /// Returns `self / rhs`.
    ///
    /// Returns [`ConstructionError::DenominatorZero`] if `rhs` is zero.
    pub fn div(&self, rhs: &Self) -> Result<Self, ConstructionError> {
        let p = &*FIELD_MODULUS;
        Self::from_reduced(
            (&self.num * &rhs.den) % p,
            (&self.den * &rhs.num) % p,
        )
    }

    /// Returns a square root of `self`.
    ///
    /// Since `p ≡ 3 (mod 4)` the candidate is `v^((p+1)/4)` for the canonical
    /// value `v`; it is a root exactly when `v` is a quadratic residue, so the
    /// candidate is squared and compared before being returned.
    ///
    /// Returns [`ArithmeticError::SqrtFailed`] for non-residues.
    pub fn sqrt(&self) -> Result<Self, ArithmeticError> {
        let p = &*FIELD_MODULUS;
        let value = self.to_biguint();
        let root = value.modpow(&SQRT_EXPONENT, p);

        if (&root * &root) % p != value {
            log::trace!("no square root for non-residue");
            return Err(ArithmeticError::SqrtFailed);
        }

        Ok(Self::from_products(root, BigUint::one()))
    }

    /// Does `self` have a square root in the field?
    pub fn has_sqrt(&self) -> bool {
        self.sqrt().is_ok()
    }
}

/// Reduces a signed integer into `[0, p)`.
fn reduce(value: &BigInt) -> BigUint {
    // `mod_floor` takes the sign of the positive modulus
    value.mod_floor(&MODULUS_INT).magnitude().clone()
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        let p = &*FIELD_MODULUS;
        (&self.num * &other.den) % p == (&other.num * &self.den) % p
    }
}

impl Eq for FieldElement {}

impl Default for FieldElement {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for FieldElement {
    fn from(n: u64) -> FieldElement {
        Self::from_products(BigUint::from(n), BigUint::one())
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::from_products(
            &self.num * &other.den + &other.num * &self.den,
            &self.den * &other.den,
        )
    }
}

impl Add<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        &self + other
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        &self + &other
    }
}

impl AddAssign<&FieldElement> for FieldElement {
    fn add_assign(&mut self, rhs: &FieldElement) {
        *self = &*self + rhs;
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        let p = &*FIELD_MODULUS;
        let lhs = (&self.num * &other.den) % p;
        let rhs = (&other.num * &self.den) % p;
        FieldElement::from_products(lhs + p - rhs, &self.den * &other.den)
    }
}

impl Sub<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        &self - other
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        &self - &other
    }
}

impl SubAssign<&FieldElement> for FieldElement {
    fn sub_assign(&mut self, rhs: &FieldElement) {
        *self = &*self - rhs;
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::from_products(&self.num * &other.num, &self.den * &other.den)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        &self * other
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        &self * &other
    }
}

impl MulAssign<&FieldElement> for FieldElement {
    fn mul_assign(&mut self, rhs: &FieldElement) {
        *self = &*self * rhs;
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex().to_uppercase())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = FieldBytes::default();
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Self::from_bytes(&bytes).map_err(de::Error::custom)
    }
}
