//! The named integral algebras.
//!
//! Each named algebra is one instantiation of [`Doubled`]; nothing else
//! distinguishes them.
//!
//! | Type | Base | μ sequence (inner → outer) | Dimension | Units |
//! |------|------|----------------------------|-----------|-------|
//! | [`Complex`] | ℤ | −1 | 2 | i |
//! | [`Perplex`] | ℤ | +1 | 2 | s |
//! | [`Infra`] | ℤ | 0 | 2 | α |
//! | [`Hamilton`] | [`Complex`] | −1, −1 | 4 | i, j, k |
//! | [`Cockle`] | [`Complex`] | −1, +1 | 4 | i, t, u |
//! | [`InfraComplex`] | [`Complex`] | −1, 0 | 4 | i, β, γ |
//! | [`InfraPerplex`] | [`Perplex`] | +1, 0 | 4 | s, τ, υ |
//! | [`Supra`] | [`Infra`] | 0, 0 | 4 | α, β, γ |
//! | [`Cayley`] | [`Hamilton`] | −1, −1, −1 | 8 | i, j, k, m, n, p, q |
//!
//! Components are always listed real part first, then the units in the
//! order shown.

use crate::doubled::Doubled;
use crate::parameter::{Definite, Nilpotent, Parameter, Split};
use num_bigint::BigInt;

/// Gaussian integer `a + bi` with `i² = −1`.
pub type Complex = Doubled<BigInt, Definite>;

/// Perplex (split-complex) integer `a + bs` with `s² = +1`.
///
/// `a ± a·s` are zero divisors: `(1 + s)(1 − s) = 0`.
pub type Perplex = Doubled<BigInt, Split>;

/// Infra (dual) integer `a + bα` with `α² = 0`.
///
/// Every element with zero real part is a zero divisor.
pub type Infra = Doubled<BigInt, Nilpotent>;

/// Hamilton quaternion with integer components, `a + bi + cj + dk`.
///
/// ```text
/// i² = j² = k² = −1
/// ij = −ji = k    jk = −kj = i    ki = −ik = j
/// ```
pub type Hamilton = Doubled<Complex, Definite>;

/// Cockle (split) quaternion with integer components, `a + bi + ct + du`.
///
/// ```text
/// i² = −1    t² = u² = +1
/// it = −ti = u    ut = −tu = i    ui = −iu = t
/// ```
pub type Cockle = Doubled<Complex, Split>;

/// Infra-complex integer `a + bi + cβ + dγ`.
///
/// ```text
/// i² = −1    β² = γ² = βγ = γβ = 0
/// iβ = −βi = γ    γi = −iγ = β
/// ```
pub type InfraComplex = Doubled<Complex, Nilpotent>;

/// Infra-perplex integer `a + bs + cτ + dυ`.
///
/// ```text
/// s² = +1    τ² = υ² = τυ = υτ = 0
/// sτ = −τs = υ    sυ = −υs = τ
/// ```
pub type InfraPerplex = Doubled<Perplex, Nilpotent>;

/// Supra integer `a + bα + cβ + dγ`: every unit squares to zero.
///
/// ```text
/// α² = β² = γ² = 0
/// αβ = −βα = γ    αγ = γα = βγ = γβ = 0
/// ```
pub type Supra = Doubled<Infra, Nilpotent>;

/// Cayley octonion with integer components,
/// `a + bi + cj + dk + em + fn + gp + hq`.
///
/// Every unit squares to −1. Multiplication is neither commutative nor
/// associative, but it is alternative: `(xx)y = x(xy)` and `(xy)y = x(yy)`.
pub type Cayley = Doubled<Hamilton, Definite>;

// -----------------------------------------------------------------------------
// Literal constructors, one per level
// -----------------------------------------------------------------------------

impl<M: Parameter> Doubled<BigInt, M> {
    /// Creates `a + b·e₁`.
    ///
    /// ```
    /// use integral::Complex;
    ///
    /// let z = Complex::new(3, 4) * Complex::new(1, -2);
    /// assert_eq!(z, Complex::new(11, -2));
    /// ```
    #[must_use]
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        Self::from_pair(a.into(), b.into())
    }
}

impl<M1: Parameter, M: Parameter> Doubled<Doubled<BigInt, M1>, M> {
    /// Creates `a + b·e₁ + c·e₂ + d·e₃`.
    #[must_use]
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        c: impl Into<BigInt>,
        d: impl Into<BigInt>,
    ) -> Self {
        Self::from_pair(
            Doubled::<BigInt, M1>::new(a, b),
            Doubled::<BigInt, M1>::new(c, d),
        )
    }
}

impl<M2: Parameter, M1: Parameter, M: Parameter> Doubled<Doubled<Doubled<BigInt, M2>, M1>, M> {
    /// Creates `a + b·e₁ + … + h·e₇`.
    #[allow(clippy::too_many_arguments)]
    #[allow(clippy::many_single_char_names)]
    #[must_use]
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        c: impl Into<BigInt>,
        d: impl Into<BigInt>,
        e: impl Into<BigInt>,
        f: impl Into<BigInt>,
        g: impl Into<BigInt>,
        h: impl Into<BigInt>,
    ) -> Self {
        Self::from_pair(
            Doubled::<Doubled<BigInt, M2>, M1>::new(a, b, c, d),
            Doubled::<Doubled<BigInt, M2>, M1>::new(e, f, g, h),
        )
    }
}
