//! The operation set shared by every algebra in the family.
//!
//! [`Algebra`] is both the contract a base algebra must meet before it can be
//! doubled and the complete public surface of every doubled algebra. The
//! base integers implement it directly (see [`crate::scalar`]); everything
//! else gets it from [`Doubled`](crate::Doubled).
//!
//! # Division
//!
//! Quotients multiply by the conjugate of the denominator and divide every
//! integer component by the denominator's quadrance, truncating toward zero:
//!
//! ```text
//! quo(x, y)      = (x · conj(y)) / quad(y)
//! quo_left(x, y) = (conj(y) · x) / quad(y)
//! ```
//!
//! Over the integers this is a pseudo-inverse. It is exact whenever the
//! numerator is divisible component-wise, for example `quo(x·y, y) == x`,
//! and otherwise rounds every component toward zero.

use crate::error::DivisionError;
use num_bigint::{BigInt, Sign};
use std::fmt::Debug;
use tracing::{debug, trace};

/// An algebra over the integers with a conjugation and a quadratic form.
///
/// Values are immutable; every operation returns a new value.
///
/// # Example
///
/// ```
/// use integral::{Algebra, Hamilton};
/// use num_bigint::BigInt;
///
/// let i = Hamilton::unit(1).unwrap();
/// let j = Hamilton::unit(2).unwrap();
/// let k = Hamilton::unit(3).unwrap();
///
/// assert_eq!(i.mul(&j), k);
/// assert_eq!(j.mul(&i), k.neg());
/// assert_eq!(k.quad(), BigInt::from(1));
/// ```
pub trait Algebra: Clone + Debug + PartialEq + Eq + Sized {
    /// Number of integer components.
    const DIMENSION: usize;

    /// True when the quadrance is positive-definite, i.e. every doubling
    /// step down to the integers used μ = −1.
    const DEFINITE: bool;

    /// The additive identity.
    fn zero() -> Self;

    /// Embeds an integer as a real element.
    fn from_real(k: BigInt) -> Self;

    /// Returns true for the additive identity.
    fn is_zero(&self) -> bool;

    /// Component-wise sum.
    fn add(&self, rhs: &Self) -> Self;

    /// Component-wise difference.
    fn sub(&self, rhs: &Self) -> Self;

    /// Additive inverse.
    fn neg(&self) -> Self;

    /// Multiplies every component by the integer `k`.
    fn scal(&self, k: &BigInt) -> Self;

    /// Conjugate. An involution that reverses products:
    /// `conj(x·y) == conj(y)·conj(x)`.
    fn conj(&self) -> Self;

    /// Product.
    fn mul(&self, rhs: &Self) -> Self;

    /// Quadrance, the integer quadratic form. Multiplicative:
    /// `quad(x·y) == quad(x)·quad(y)`.
    fn quad(&self) -> BigInt;

    /// The real (first) component.
    fn real(&self) -> &BigInt;

    /// Divides every component by `k`, truncating toward zero.
    ///
    /// `k` must be nonzero; callers go through [`Algebra::quo`], which
    /// checks the denominator first.
    fn trunc_div(&self, k: &BigInt) -> Self;

    /// Appends the components of `self` to `out` in basis order.
    fn push_cartesian<'a>(&'a self, out: &mut Vec<&'a BigInt>);

    /// Builds a value from the next [`Self::DIMENSION`] leaves, or `None` if
    /// the iterator runs dry first.
    fn pull_cartesian<I: Iterator<Item = BigInt>>(leaves: &mut I) -> Option<Self>;

    // -------------------------------------------------------------------------
    // Provided operations
    // -------------------------------------------------------------------------

    /// The multiplicative identity.
    #[must_use]
    fn one() -> Self {
        Self::from_real(BigInt::from(1))
    }

    /// `x·y − y·x`.
    #[must_use]
    fn commutator(&self, rhs: &Self) -> Self {
        self.mul(rhs).sub(&rhs.mul(self))
    }

    /// `(w·x)·y − w·(x·y)`, with `self` as `w`.
    ///
    /// Identically zero for every algebra of dimension 4 or less.
    #[must_use]
    fn associator(&self, x: &Self, y: &Self) -> Self {
        self.mul(x).mul(y).sub(&self.mul(&x.mul(y)))
    }

    /// Returns true if the quadrance vanishes.
    ///
    /// For split and nilpotent algebras these are exactly the elements
    /// without an inverse. Definite algebras have no zero divisors except
    /// zero itself.
    ///
    /// # Example
    ///
    /// ```
    /// use integral::{Algebra, Infra, Perplex};
    ///
    /// assert!(Perplex::new(1, 1).is_zero_divisor());
    /// assert!(Perplex::new(4, -4).is_zero_divisor());
    /// assert!(!Perplex::new(2, 1).is_zero_divisor());
    /// assert!(Infra::new(0, 7).is_zero_divisor());
    /// ```
    fn is_zero_divisor(&self) -> bool {
        self.quad().sign() == Sign::NoSign
    }

    /// Right quotient `(x · conj(y)) / quad(y)` with truncating division.
    ///
    /// # Errors
    ///
    /// [`DivisionError::ZeroDenominator`] if a definite algebra's `rhs` is
    /// zero, [`DivisionError::ZeroDivisorDenominator`] if any other
    /// algebra's `rhs` is a zero divisor.
    ///
    /// # Example
    ///
    /// ```
    /// use integral::{Algebra, Complex};
    ///
    /// let x = Complex::new(11, -2);
    /// let y = Complex::new(1, -2);
    /// assert_eq!(x.quo(&y).unwrap(), Complex::new(3, 4));
    ///
    /// // 7 / 2 truncates toward zero.
    /// let q = Complex::new(-7, 7).quo(&Complex::new(2, 0)).unwrap();
    /// assert_eq!(q, Complex::new(-3, 3));
    /// ```
    fn quo(&self, rhs: &Self) -> Result<Self, DivisionError> {
        let quad = denominator(rhs)?;
        Ok(self.mul(&rhs.conj()).trunc_div(&quad))
    }

    /// Left quotient `(conj(y) · x) / quad(y)` with truncating division.
    ///
    /// Differs from [`Algebra::quo`] only in noncommutative algebras.
    ///
    /// # Errors
    ///
    /// Same as [`Algebra::quo`].
    fn quo_left(&self, rhs: &Self) -> Result<Self, DivisionError> {
        let quad = denominator(rhs)?;
        Ok(rhs.conj().mul(self).trunc_div(&quad))
    }

    /// Returns true if `self` is zero or one of its powers `self^1 ..
    /// self^n` vanishes.
    ///
    /// # Example
    ///
    /// ```
    /// use integral::{Algebra, Cockle, Hamilton};
    ///
    /// // (i + t)² = 0 in the Cockle quaternions.
    /// assert!(Cockle::new(0, 1, 1, 0).is_nilpotent(2));
    /// assert!(!Hamilton::new(0, 1, 1, 0).is_nilpotent(8));
    /// ```
    fn is_nilpotent(&self, n: usize) -> bool {
        if self.is_zero() {
            return true;
        }
        let mut power = Self::one();
        for exponent in 1..=n {
            power = power.mul(self);
            if power.is_zero() {
                trace!(exponent, "power vanished");
                return true;
            }
        }
        false
    }

    /// All components in basis order.
    ///
    /// # Example
    ///
    /// ```
    /// use integral::{Algebra, Cockle};
    /// use num_bigint::BigInt;
    ///
    /// let z = Cockle::new(1, 2, 3, 4);
    /// let v: Vec<BigInt> = z.cartesian().into_iter().cloned().collect();
    /// assert_eq!(v, [1, 2, 3, 4].map(BigInt::from));
    /// ```
    fn cartesian(&self) -> Vec<&BigInt> {
        let mut out = Vec::with_capacity(Self::DIMENSION);
        self.push_cartesian(&mut out);
        out
    }

    /// Builds a value from exactly [`Self::DIMENSION`] components in basis
    /// order. Returns `None` for too few or too many.
    fn from_cartesian<I: IntoIterator<Item = BigInt>>(leaves: I) -> Option<Self> {
        let mut leaves = leaves.into_iter();
        let z = Self::pull_cartesian(&mut leaves)?;
        match leaves.next() {
            Some(_) => None,
            None => Some(z),
        }
    }

    /// The basis element with a single 1 at `index`. Index 0 is the
    /// multiplicative identity.
    fn unit(index: usize) -> Option<Self> {
        if index >= Self::DIMENSION {
            return None;
        }
        Self::from_cartesian((0..Self::DIMENSION).map(|i| BigInt::from(u8::from(i == index))))
    }
}

/// Checks a denominator and returns its quadrance.
///
/// A definite quadrance vanishes only at zero, so one test on the quadrance
/// covers both families.
fn denominator<A: Algebra>(y: &A) -> Result<BigInt, DivisionError> {
    let quad = y.quad();
    if quad.sign() != Sign::NoSign {
        return Ok(quad);
    }
    let err = if A::DEFINITE {
        DivisionError::ZeroDenominator
    } else {
        DivisionError::ZeroDivisorDenominator
    };
    debug!(
        dimension = A::DIMENSION,
        definite = A::DEFINITE,
        %err,
        "rejected quotient"
    );
    Err(err)
}
