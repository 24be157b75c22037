//! Affine points

use super::{CURVE_EQUATION_B, FieldElement};
use crate::{ArithmeticError, ConstructionError, FieldBytes};
use core::ops::Neg;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Base point x-coordinate, big endian.
const GENERATOR_X: FieldBytes =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// Base point y-coordinate, big endian.
const GENERATOR_Y: FieldBytes =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

static GENERATOR: Lazy<AffinePoint> = Lazy::new(|| {
    AffinePoint::new_unchecked(
        FieldElement::from_bytes_reduced(&GENERATOR_X),
        FieldElement::from_bytes_reduced(&GENERATOR_Y),
    )
});

/// secp256k1 curve point expressed in affine coordinates.
///
/// Either a solution `(x, y)` of `y² = x³ + 7`, or the point at infinity, in
/// which case the coordinates are meaningless and [`AffinePoint::x`] and
/// [`AffinePoint::y`] return `None`.
#[derive(Clone, Debug)]
pub struct AffinePoint {
    /// x-coordinate
    x: FieldElement,

    /// y-coordinate
    y: FieldElement,

    /// Is this point the point at infinity?
    infinity: bool,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            infinity: true,
        }
    }

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Create a new [`AffinePoint`] from coordinates satisfying the curve
    /// equation.
    ///
    /// Returns [`ConstructionError::PointNotOnCurve`] otherwise.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, ConstructionError> {
        if !Self::is_on_curve(&x, &y) {
            log::trace!("rejecting point off the curve: x = {x:x}");
            return Err(ConstructionError::PointNotOnCurve);
        }

        Ok(Self::new_unchecked(x, y))
    }

    /// Create a finite point without checking the curve equation.
    fn new_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Do `(x, y)` satisfy `y² = x³ + 7`?
    pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let lhs = y.square();
        let rhs = &(&x.square() * x) + &*CURVE_EQUATION_B;
        lhs == rhs
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        (!self.infinity).then_some(&self.x)
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        (!self.infinity).then_some(&self.y)
    }

    /// Returns `self + other`.
    ///
    /// Uses the chord through two distinct points, or the tangent when both
    /// inputs are the same point. Adding a point to its negation, which is the
    /// only other point with the same x-coordinate, gives the identity.
    ///
    /// Returns [`ArithmeticError::AddFailed`] if the slope has a zero
    /// denominator, i.e. when doubling a point with `y = 0`.
    pub fn add(&self, other: &AffinePoint) -> Result<AffinePoint, ArithmeticError> {
        if self.infinity {
            return Ok(other.clone());
        }

        if other.infinity {
            return Ok(self.clone());
        }

        let lambda = if self.x == other.x {
            if self.y != other.y {
                log::debug!("adding a point to its negation");
                return Ok(Self::identity());
            }

            // tangent: 3x² / 2y
            self.x.square().mul_scalar(3).div(&self.y.mul_scalar(2))
        } else {
            // chord: (y₂ - y₁) / (x₂ - x₁)
            (&other.y - &self.y).div(&(&other.x - &self.x))
        }
        .map_err(|_| {
            log::debug!("point addition hit a zero slope denominator");
            ArithmeticError::AddFailed
        })?;

        let x = &(&lambda.square() - &self.x) - &other.x;
        let y = &(&lambda * &(&self.x - &x)) - &self.y;

        Ok(Self::new_unchecked(x, y))
    }

    /// Doubles this point.
    pub fn double(&self) -> Result<AffinePoint, ArithmeticError> {
        self.add(self)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &AffinePoint) -> Result<AffinePoint, ArithmeticError> {
        self.add(&-other)
    }

    /// Returns `[k] self` using variable-time double-and-add.
    pub fn mul(&self, k: &BigUint) -> Result<AffinePoint, ArithmeticError> {
        let mut acc = Self::identity();

        for i in (0..k.bits()).rev() {
            acc = acc.double()?;

            if k.bit(i) {
                acc = acc.add(self)?;
            }
        }

        Ok(acc)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for AffinePoint {}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -&self
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        if self.infinity {
            return AffinePoint::identity();
        }

        AffinePoint::new_unchecked(self.x.clone(), -&self.y)
    }
}
