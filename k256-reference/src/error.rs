//! Error types.

/// Failure to build a field element or curve point from its inputs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    /// The denominator reduced to zero modulo the field prime.
    #[error("denominator is zero")]
    DenominatorZero,

    /// The coordinates do not satisfy `y² = x³ + 7`.
    #[error("point is not on the curve")]
    PointNotOnCurve,

    /// The decoded integer is not smaller than the field prime.
    #[error("encoded value is not below the field modulus")]
    OutOfRange,
}

/// Failure of an arithmetic operation on well-formed inputs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArithmeticError {
    /// The value is a quadratic non-residue.
    #[error("square root does not exist")]
    SqrtFailed,

    /// The slope of the addition law has a zero denominator.
    #[error("point addition failed")]
    AddFailed,
}

/// Any error returned by this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// See [`ConstructionError`].
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// See [`ArithmeticError`].
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Result type with the crate's [`Error`] as default.
pub type Result<T, E = Error> = core::result::Result<T, E>;
