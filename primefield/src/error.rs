//! Error types.

/// Error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The value is not in `[0, prime)`.
    #[error("num not in field range")]
    NumOutOfRange,

    /// The operands belong to fields of different order.
    #[error("primes must be the same")]
    PrimesMustMatch,

    /// Division by the zero element.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
