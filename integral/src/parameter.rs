//! Doubling parameters.
//!
//! Every step of the Cayley-Dickson construction carries one integer
//! parameter μ ∈ {−1, 0, +1}. It decides the sign of the cross term in the
//! product and the sign of the second half of the quadrance:
//!
//! ```text
//! (a, b)(c, d) = (ac + μ·conj(d)·b,  da + b·conj(c))
//! quad(a, b)   = quad(a) − μ·quad(b)
//! ```
//!
//! The parameter belongs to the algebra, not to its values, so it is carried
//! at the type level by one of three zero-sized markers.

use core::fmt::Debug;
use core::hash::Hash;

/// The three members of the doubling family.
///
/// # Example
///
/// ```
/// use integral::Doubling;
///
/// assert_eq!(Doubling::Definite.mu(), -1);
/// assert_eq!(Doubling::Split.mu(), 1);
/// assert_eq!(Doubling::Nilpotent.mu(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Doubling {
    /// μ = −1. The new unit squares to −1 and a definite quadrance stays
    /// definite (complex, quaternion and octonion integers).
    Definite = -1,

    /// μ = 0. The new unit squares to zero (infra, or dual, integers).
    Nilpotent = 0,

    /// μ = +1. The new unit squares to +1 and the quadrance becomes
    /// indefinite (perplex and Cockle integers).
    Split = 1,
}

impl Doubling {
    /// All parameters in ascending order of μ.
    pub const ALL: [Self; 3] = [Self::Definite, Self::Nilpotent, Self::Split];

    /// Returns μ as an integer.
    #[inline]
    #[must_use]
    pub const fn mu(self) -> i8 {
        self as i8
    }

    /// Returns the parameter for μ, or `None` outside {−1, 0, +1}.
    ///
    /// # Example
    ///
    /// ```
    /// use integral::Doubling;
    ///
    /// assert_eq!(Doubling::from_mu(0), Some(Doubling::Nilpotent));
    /// assert_eq!(Doubling::from_mu(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_mu(mu: i8) -> Option<Self> {
        match mu {
            -1 => Some(Self::Definite),
            0 => Some(Self::Nilpotent),
            1 => Some(Self::Split),
            _ => None,
        }
    }

    /// Returns true for μ = −1.
    #[inline]
    #[must_use]
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite)
    }
}

/// Type-level doubling parameter.
///
/// Implemented by the markers [`Definite`], [`Split`] and [`Nilpotent`];
/// [`Doubled`](crate::Doubled) reads [`Parameter::DOUBLING`] to pick its
/// multiplication and quadrance formulas.
pub trait Parameter: Copy + Debug + Default + Eq + Hash + Send + Sync + 'static {
    /// The parameter this marker stands for.
    const DOUBLING: Doubling;
}

/// Marker for μ = −1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Definite;

/// Marker for μ = +1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Split;

/// Marker for μ = 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nilpotent;

impl Parameter for Definite {
    const DOUBLING: Doubling = Doubling::Definite;
}

impl Parameter for Split {
    const DOUBLING: Doubling = Doubling::Split;
}

impl Parameter for Nilpotent {
    const DOUBLING: Doubling = Doubling::Nilpotent;
}
