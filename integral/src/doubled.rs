//! The Cayley-Dickson doubling construction.
//!
//! [`Doubled<B, M>`] pairs two elements of a base algebra `B` and defines
//! every operation of the doubled algebra from `B`'s operations and the
//! parameter μ of the marker `M`:
//!
//! ```text
//! (a, b) + (c, d) = (a + c, b + d)
//! conj(a, b)      = (conj(a), −b)
//! (a, b)(c, d)    = (ac + μ·conj(d)·b,  da + b·conj(c))
//! quad(a, b)      = quad(a) − μ·quad(b)
//! ```
//!
//! Nesting the type reproduces the whole family; see [`crate::catalogue`].
//!
//! # Algebraic Properties
//!
//! | Levels over ℤ | Commutative | Associative | Alternative |
//! |---------------|-------------|-------------|-------------|
//! | 1 (dim 2)     | yes         | yes         | yes         |
//! | 2 (dim 4)     | no          | yes         | yes         |
//! | 3 (dim 8)     | no          | no          | yes         |
//!
//! The quadrance composes at every level: `quad(x·y) == quad(x)·quad(y)`.

use crate::algebra::Algebra;
use crate::parameter::{Doubling, Parameter};
use core::marker::PhantomData;
use core::ops;
use num_bigint::BigInt;

/// An element `(l, r)` of the algebra obtained by doubling `B` with
/// parameter `M`.
///
/// Both halves always come from the same base algebra; the parameter lives
/// in the type and costs nothing at run time.
///
/// # Example
///
/// ```
/// use integral::{Algebra, Complex, Definite, Doubled};
/// use num_bigint::BigInt;
///
/// // Doubling the integers once with μ = −1 gives the Gaussian integers.
/// let z: Doubled<BigInt, Definite> = Doubled::from_pair(3.into(), 4.into());
/// assert_eq!(z, Complex::new(3, 4));
/// assert_eq!(z.quad(), BigInt::from(25));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "B: serde::Serialize", deserialize = "B: serde::Deserialize<'de>"))
)]
pub struct Doubled<B, M> {
    l: B,
    r: B,
    #[cfg_attr(feature = "serde", serde(skip))]
    mu: PhantomData<M>,
}

impl<B, M> Doubled<B, M> {
    /// Creates the element `(l, r)`.
    #[inline]
    #[must_use]
    pub const fn from_pair(l: B, r: B) -> Self {
        Self {
            l,
            r,
            mu: PhantomData,
        }
    }

    /// The left half.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> &B {
        &self.l
    }

    /// The right half.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> &B {
        &self.r
    }

    /// Consumes the element and returns `(l, r)`.
    #[inline]
    #[must_use]
    pub fn into_pair(self) -> (B, B) {
        (self.l, self.r)
    }
}

impl<B: Algebra, M: Parameter> Doubled<B, M> {
    /// The doubling parameter of this algebra.
    pub const DOUBLING: Doubling = M::DOUBLING;
}

impl<B: Algebra, M: Parameter> Algebra for Doubled<B, M> {
    const DIMENSION: usize = 2 * B::DIMENSION;
    const DEFINITE: bool = B::DEFINITE && M::DOUBLING.is_definite();

    fn zero() -> Self {
        Self::from_pair(B::zero(), B::zero())
    }

    fn from_real(k: BigInt) -> Self {
        Self::from_pair(B::from_real(k), B::zero())
    }

    fn is_zero(&self) -> bool {
        self.l.is_zero() && self.r.is_zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::from_pair(self.l.add(&rhs.l), self.r.add(&rhs.r))
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::from_pair(self.l.sub(&rhs.l), self.r.sub(&rhs.r))
    }

    fn neg(&self) -> Self {
        Self::from_pair(self.l.neg(), self.r.neg())
    }

    fn scal(&self, k: &BigInt) -> Self {
        Self::from_pair(self.l.scal(k), self.r.scal(k))
    }

    fn conj(&self) -> Self {
        Self::from_pair(self.l.conj(), self.r.neg())
    }

    fn mul(&self, rhs: &Self) -> Self {
        let (a, b) = (&self.l, &self.r);
        let (c, d) = (&rhs.l, &rhs.r);

        let ac = a.mul(c);
        let l = match M::DOUBLING {
            Doubling::Definite => ac.sub(&d.conj().mul(b)),
            Doubling::Split => ac.add(&d.conj().mul(b)),
            Doubling::Nilpotent => ac,
        };
        let r = d.mul(a).add(&b.mul(&c.conj()));

        Self::from_pair(l, r)
    }

    fn quad(&self) -> BigInt {
        let quad = self.l.quad();
        match M::DOUBLING {
            Doubling::Definite => quad + self.r.quad(),
            Doubling::Split => quad - self.r.quad(),
            Doubling::Nilpotent => quad,
        }
    }

    #[inline]
    fn real(&self) -> &BigInt {
        self.l.real()
    }

    fn trunc_div(&self, k: &BigInt) -> Self {
        Self::from_pair(self.l.trunc_div(k), self.r.trunc_div(k))
    }

    fn push_cartesian<'a>(&'a self, out: &mut Vec<&'a BigInt>) {
        self.l.push_cartesian(out);
        self.r.push_cartesian(out);
    }

    fn pull_cartesian<I: Iterator<Item = BigInt>>(leaves: &mut I) -> Option<Self> {
        let l = B::pull_cartesian(leaves)?;
        let r = B::pull_cartesian(leaves)?;
        Some(Self::from_pair(l, r))
    }
}

// -----------------------------------------------------------------------------
// Operator overloads
// -----------------------------------------------------------------------------

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl<'a, B: Algebra, M: Parameter> ops::$trait<&'a Doubled<B, M>> for &'a Doubled<B, M> {
            type Output = Doubled<B, M>;

            #[inline]
            fn $method(self, rhs: &'a Doubled<B, M>) -> Doubled<B, M> {
                Algebra::$method(self, rhs)
            }
        }

        impl<B: Algebra, M: Parameter> ops::$trait for Doubled<B, M> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Algebra::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl<B: Algebra, M: Parameter> ops::Neg for &Doubled<B, M> {
    type Output = Doubled<B, M>;

    #[inline]
    fn neg(self) -> Doubled<B, M> {
        Algebra::neg(self)
    }
}

impl<B: Algebra, M: Parameter> ops::Neg for Doubled<B, M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Algebra::neg(&self)
    }
}
