//! The base of the tower: arbitrary-precision integers as a one-dimensional
//! algebra.
//!
//! Conjugation is the identity and the quadrance is the square, so one
//! doubling step over `BigInt` yields the usual two-dimensional formulas.

use crate::algebra::Algebra;
use num_bigint::BigInt;

impl Algebra for BigInt {
    const DIMENSION: usize = 1;
    const DEFINITE: bool = true;

    #[inline]
    fn zero() -> Self {
        num_traits::Zero::zero()
    }

    #[inline]
    fn from_real(k: BigInt) -> Self {
        k
    }

    #[inline]
    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    #[inline]
    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    #[inline]
    fn neg(&self) -> Self {
        -self
    }

    #[inline]
    fn scal(&self, k: &BigInt) -> Self {
        self * k
    }

    #[inline]
    fn conj(&self) -> Self {
        self.clone()
    }

    #[inline]
    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    #[inline]
    fn quad(&self) -> BigInt {
        self * self
    }

    #[inline]
    fn real(&self) -> &BigInt {
        self
    }

    // BigInt division rounds toward zero.
    #[inline]
    fn trunc_div(&self, k: &BigInt) -> Self {
        self / k
    }

    fn push_cartesian<'a>(&'a self, out: &mut Vec<&'a BigInt>) {
        out.push(self);
    }

    fn pull_cartesian<I: Iterator<Item = BigInt>>(leaves: &mut I) -> Option<Self> {
        leaves.next()
    }
}
