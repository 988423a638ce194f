//! Test-only random elements for the `integral` property suites.
//!
//! [`Generate`] is implemented once for the integer leaves and once for
//! [`Doubled`], so every algebra in the family gets a strategy that draws an
//! independent `i64` for each of its components.
//!
//! ```
//! use integral::{Algebra, Cayley};
//! use integral_test_helpers::Generate;
//! use proptest::strategy::{Strategy, ValueTree};
//! use proptest::test_runner::TestRunner;
//!
//! let mut runner = TestRunner::deterministic();
//! let z = Cayley::strategy().new_tree(&mut runner).unwrap().current();
//! assert_eq!(z.cartesian().len(), 8);
//! ```

use integral::{Algebra, Doubled, Parameter};
use num_bigint::BigInt;
use proptest::prelude::*;

/// Algebras that can produce a proptest strategy for their elements.
pub trait Generate: Algebra + 'static {
    /// Strategy with every leaf drawn independently from the full `i64`
    /// range.
    fn strategy() -> BoxedStrategy<Self> {
        Self::strategy_from(any::<i64>().prop_map(BigInt::from).boxed())
    }

    /// Strategy with every leaf drawn from `leaf`.
    fn strategy_from(leaf: BoxedStrategy<BigInt>) -> BoxedStrategy<Self>;

    /// Strategy with every leaf in `-bound..=bound`. Small leaves make
    /// collisions such as zero divisors likely.
    fn small(bound: i64) -> BoxedStrategy<Self> {
        Self::strategy_from((-bound..=bound).prop_map(BigInt::from).boxed())
    }
}

impl Generate for BigInt {
    fn strategy_from(leaf: BoxedStrategy<BigInt>) -> BoxedStrategy<Self> {
        leaf
    }
}

impl<B: Generate, M: Parameter> Generate for Doubled<B, M> {
    fn strategy_from(leaf: BoxedStrategy<BigInt>) -> BoxedStrategy<Self> {
        (B::strategy_from(leaf.clone()), B::strategy_from(leaf))
            .prop_map(|(l, r)| Doubled::from_pair(l, r))
            .boxed()
    }
}

/// Strategy for an element of `A` whose quadrance is nonzero.
pub fn invertible<A: Generate>() -> BoxedStrategy<A> {
    A::strategy()
        .prop_filter("denominator must be invertible", |y| !y.is_zero_divisor())
        .boxed()
}
