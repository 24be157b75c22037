//! Reference arithmetic on secp256k1: the base field and the curve group.

mod affine;
mod field;

pub use self::{affine::AffinePoint, field::FieldElement};

use crate::FieldBytes;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Order of the group generated by the base point.
const ORDER_BYTES: FieldBytes =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Base field modulus `p = 2²⁵⁶ - 2³² - 977`.
pub static FIELD_MODULUS: Lazy<BigUint> =
    Lazy::new(|| (BigUint::from(1u8) << 256) - (BigUint::from(1u8) << 32) - 977u32);

/// Order `n` of the cyclic subgroup generated by the base point.
pub static ORDER: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&ORDER_BYTES));

/// `⌊n / 2⌋`, the bound used by signing code to pick the low-S representative.
pub static ORDER_HALF: Lazy<BigUint> = Lazy::new(|| &*ORDER >> 1u32);

/// Coefficient `b = 7` of the curve equation `y² = x³ + 7`.
pub static CURVE_EQUATION_B: Lazy<FieldElement> = Lazy::new(|| FieldElement::from(7u64));
