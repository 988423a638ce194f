//! Integral Cayley-Dickson algebras.
//!
//! Gaussian integers, perplex (split-complex) integers, infra (dual)
//! integers, integral Hamilton and Cockle quaternions, integral Cayley
//! octonions and the degenerate infra hybrids, all built by one generic
//! construction over arbitrary-precision integers.
//!
//! # Construction
//!
//! ```text
//! ℤ  ──μ──▶  ℤ²  ──μ──▶  ℤ⁴  ──μ──▶  ℤ⁸
//! ```
//!
//! Each arrow is [`Doubled<B, M>`]: pairs of the base algebra `B` with the
//! doubling parameter μ ∈ {−1, 0, +1} fixed by the marker `M`
//! ([`Definite`], [`Nilpotent`], [`Split`]). Multiplication, conjugation,
//! quadrance and division are written once, in terms of the base algebra's
//! operations, and every named type in [`catalogue`] is an alias.
//!
//! # Example
//!
//! ```
//! use integral::{Algebra, Cayley, Complex, Hamilton, Perplex};
//! use num_bigint::BigInt;
//!
//! // Gaussian integers
//! let z = Complex::new(3, 4);
//! assert_eq!(z.mul(&Complex::new(1, -2)), Complex::new(11, -2));
//! assert_eq!(z.quad(), BigInt::from(25));
//!
//! // Split-complex zero divisors
//! assert!(Perplex::new(1, 1).is_zero_divisor());
//!
//! // Quaternions do not commute
//! let (i, j) = (Hamilton::unit(1).unwrap(), Hamilton::unit(2).unwrap());
//! assert_eq!(j.mul(&i), i.mul(&j).neg());
//!
//! // Octonions do not associate
//! let e = |n| Cayley::unit(n).unwrap();
//! assert!(!e(1).associator(&e(2), &e(4)).is_zero());
//! ```
//!
//! # Division
//!
//! [`Algebra::quo`] returns [`DivisionError`] instead of panicking when the
//! denominator has no inverse, and divides with truncation toward zero
//! otherwise. See [`algebra`] for the exact rule.
//!
//! # Features
//!
//! - `serde`: `Serialize` / `Deserialize` for every element.

pub mod algebra;
pub mod catalogue;
pub mod doubled;
pub mod error;
pub mod parameter;
pub mod scalar;

pub use algebra::Algebra;
pub use catalogue::{
    Cayley, Cockle, Complex, Hamilton, Infra, InfraComplex, InfraPerplex, Perplex, Supra,
};
pub use doubled::Doubled;
pub use error::DivisionError;
pub use parameter::{Definite, Doubling, Nilpotent, Parameter, Split};

/// Prelude module for convenient imports.
///
/// ```
/// use integral::prelude::*;
///
/// assert_eq!(Hamilton::DIMENSION, 4);
/// ```
pub mod prelude {
    pub use crate::algebra::Algebra;
    pub use crate::catalogue::{
        Cayley, Cockle, Complex, Hamilton, Infra, InfraComplex, InfraPerplex, Perplex, Supra,
    };
    pub use crate::doubled::Doubled;
    pub use crate::error::DivisionError;
    pub use crate::parameter::{Definite, Doubling, Nilpotent, Parameter, Split};
}
