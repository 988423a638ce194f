//! Division errors.

use thiserror::Error;

/// Error returned when a quotient's denominator has no inverse.
///
/// Division is the only partial operation in the crate. Which variant is
/// reported depends on the algebra: definite algebras (complex, Hamilton,
/// Cayley) only reject zero, while split and nilpotent algebras reject every
/// zero divisor, zero included.
///
/// # Example
///
/// ```
/// use integral::{Algebra, Complex, DivisionError, Perplex};
///
/// let err = Complex::new(1, 2).quo(&Complex::zero()).unwrap_err();
/// assert_eq!(err, DivisionError::ZeroDenominator);
///
/// let err = Perplex::new(1, 2).quo(&Perplex::new(3, -3)).unwrap_err();
/// assert_eq!(err, DivisionError::ZeroDivisorDenominator);
/// assert_eq!(err.to_string(), "denominator is a zero divisor");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionError {
    /// The denominator of a definite algebra is zero.
    #[error("denominator is zero")]
    ZeroDenominator,

    /// The denominator of an indefinite or degenerate algebra has zero
    /// quadrance.
    #[error("denominator is a zero divisor")]
    ZeroDivisorDenominator,
}
