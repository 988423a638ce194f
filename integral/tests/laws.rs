//! Property-based tests for the algebraic laws of every named algebra.
//!
//! Uses proptest with the generic strategies from `integral-test-helpers`:
//! each suite is instantiated once per type so a failure names the algebra
//! it came from.

use integral::prelude::*;
use integral_test_helpers::{invertible, Generate};
use num_bigint::BigInt;
use proptest::prelude::*;

fn int(v: i64) -> BigInt {
    BigInt::from(v)
}

// =============================================================================
// Laws shared by the whole family
// =============================================================================

macro_rules! algebra_laws {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::*;

            type T = $ty;

            proptest! {
                #[test]
                fn add_commutative(x in T::strategy(), y in T::strategy()) {
                    prop_assert_eq!(x.add(&y), y.add(&x));
                }

                #[test]
                fn add_associative(x in T::strategy(), y in T::strategy(), z in T::strategy()) {
                    prop_assert_eq!(x.add(&y).add(&z), x.add(&y.add(&z)));
                }

                #[test]
                fn add_zero(x in T::strategy()) {
                    prop_assert_eq!(x.add(&T::zero()), x);
                }

                #[test]
                fn sub_is_add_neg(x in T::strategy(), y in T::strategy()) {
                    prop_assert_eq!(x.sub(&y), x.add(&y.neg()));
                }

                #[test]
                fn sub_anticommutative(x in T::strategy(), y in T::strategy()) {
                    prop_assert_eq!(x.sub(&y), y.sub(&x).neg());
                }

                #[test]
                fn scal_two_is_double(x in T::strategy()) {
                    prop_assert_eq!(x.scal(&int(2)), x.add(&x));
                }

                #[test]
                fn neg_involutive(x in T::strategy()) {
                    prop_assert_eq!(x.neg().neg(), x);
                }

                #[test]
                fn conj_involutive(x in T::strategy()) {
                    prop_assert_eq!(x.conj().conj(), x);
                }

                #[test]
                fn neg_conj_commute(x in T::strategy()) {
                    prop_assert_eq!(x.conj().neg(), x.neg().conj());
                }

                #[test]
                fn mul_one(x in T::strategy()) {
                    prop_assert_eq!(x.mul(&T::one()), x.clone());
                    prop_assert_eq!(T::one().mul(&x), x);
                }

                #[test]
                fn conj_anti_distributes_over_mul(x in T::strategy(), y in T::strategy()) {
                    prop_assert_eq!(x.mul(&y).conj(), y.conj().mul(&x.conj()));
                }

                #[test]
                fn conj_distributes_over_add_sub(x in T::strategy(), y in T::strategy()) {
                    prop_assert_eq!(x.add(&y).conj(), x.conj().add(&y.conj()));
                    prop_assert_eq!(x.sub(&y).conj(), x.conj().sub(&y.conj()));
                }

                #[test]
                fn scal_distributes(x in T::strategy(), y in T::strategy(), k in any::<i64>()) {
                    let k = int(k);
                    prop_assert_eq!(x.add(&y).scal(&k), x.scal(&k).add(&y.scal(&k)));
                    prop_assert_eq!(x.sub(&y).scal(&k), x.scal(&k).sub(&y.scal(&k)));
                }

                #[test]
                fn mul_distributes_left(x in T::strategy(), y in T::strategy(), z in T::strategy()) {
                    prop_assert_eq!(x.mul(&y.add(&z)), x.mul(&y).add(&x.mul(&z)));
                    prop_assert_eq!(x.mul(&y.sub(&z)), x.mul(&y).sub(&x.mul(&z)));
                }

                #[test]
                fn mul_distributes_right(x in T::strategy(), y in T::strategy(), z in T::strategy()) {
                    prop_assert_eq!(y.add(&z).mul(&x), y.mul(&x).add(&z.mul(&x)));
                    prop_assert_eq!(y.sub(&z).mul(&x), y.mul(&x).sub(&z.mul(&x)));
                }

                #[test]
                fn composition(x in T::strategy(), y in T::strategy()) {
                    prop_assert_eq!(x.mul(&y).quad(), x.quad() * y.quad());
                }

                #[test]
                fn conj_product_is_quadrance(x in T::strategy()) {
                    prop_assert_eq!(x.mul(&x.conj()), T::from_real(x.quad()));
                }

                #[test]
                fn small_zero_divisors_annihilate_their_conjugate(x in T::small(2)) {
                    if x.is_zero_divisor() {
                        prop_assert!(x.mul(&x.conj()).is_zero());
                    }
                }

                #[test]
                fn quo_inverts_right_mul(x in T::strategy(), y in invertible::<T>()) {
                    prop_assert_eq!(x.mul(&y).quo(&y), Ok(x));
                }

                #[test]
                fn quo_left_inverts_left_mul(x in T::strategy(), y in invertible::<T>()) {
                    prop_assert_eq!(y.mul(&x).quo_left(&y), Ok(x));
                }

                #[test]
                fn quo_rejects_zero(x in T::strategy()) {
                    prop_assert!(x.quo(&T::zero()).is_err());
                    prop_assert!(x.quo_left(&T::zero()).is_err());
                }

                #[test]
                fn cartesian_roundtrip(x in T::strategy()) {
                    let leaves: Vec<BigInt> = x.cartesian().into_iter().cloned().collect();
                    prop_assert_eq!(leaves.len(), <T as Algebra>::DIMENSION);
                    prop_assert_eq!(T::from_cartesian(leaves), Some(x));
                }
            }
        }
    };
}

algebra_laws!(complex, Complex);
algebra_laws!(perplex, Perplex);
algebra_laws!(infra, Infra);
algebra_laws!(hamilton, Hamilton);
algebra_laws!(cockle, Cockle);
algebra_laws!(infra_complex, InfraComplex);
algebra_laws!(infra_perplex, InfraPerplex);
algebra_laws!(supra, Supra);
algebra_laws!(cayley, Cayley);

// =============================================================================
// Commutativity
// =============================================================================

macro_rules! commutative {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::*;

            type T = $ty;

            proptest! {
                #[test]
                fn mul_commutative(x in T::strategy(), y in T::strategy()) {
                    prop_assert!(x.commutator(&y).is_zero());
                }
            }
        }
    };
}

commutative!(complex_commutative, Complex);
commutative!(perplex_commutative, Perplex);
commutative!(infra_commutative, Infra);

/// Every doubling past the first loses commutativity: `[e₁, e₂] = 2e₃`.
#[test]
fn doubled_twice_is_noncommutative() {
    fn witness<A: Algebra>() {
        let e = |n| A::unit(n).unwrap();
        let expected = e(3).scal(&int(2));
        assert_eq!(e(1).commutator(&e(2)), expected, "{}", std::any::type_name::<A>());
    }
    witness::<Hamilton>();
    witness::<Cockle>();
    witness::<InfraComplex>();
    witness::<InfraPerplex>();
    witness::<Supra>();
    witness::<Cayley>();
}

// =============================================================================
// Associativity and alternativity
// =============================================================================

macro_rules! associative {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::*;

            type T = $ty;

            proptest! {
                #[test]
                fn mul_associative(x in T::strategy(), y in T::strategy(), z in T::strategy()) {
                    prop_assert!(x.associator(&y, &z).is_zero());
                }
            }
        }
    };
}

associative!(complex_associative, Complex);
associative!(perplex_associative, Perplex);
associative!(infra_associative, Infra);
associative!(hamilton_associative, Hamilton);
associative!(cockle_associative, Cockle);
associative!(infra_complex_associative, InfraComplex);
associative!(infra_perplex_associative, InfraPerplex);
associative!(supra_associative, Supra);

mod cayley_alternative {
    use super::*;

    proptest! {
        #[test]
        fn left_alternative(x in Cayley::strategy(), y in Cayley::strategy()) {
            prop_assert!(x.associator(&x, &y).is_zero());
        }

        #[test]
        fn right_alternative(x in Cayley::strategy(), y in Cayley::strategy()) {
            prop_assert!(x.associator(&y, &y).is_zero());
        }

        #[test]
        fn flexible(x in Cayley::strategy(), y in Cayley::strategy()) {
            prop_assert!(x.associator(&y, &x).is_zero());
        }

        #[test]
        fn associator_is_antisymmetric(
            x in Cayley::small(3),
            y in Cayley::small(3),
            z in Cayley::small(3),
        ) {
            prop_assert_eq!(x.associator(&y, &z), y.associator(&x, &z).neg());
            prop_assert_eq!(x.associator(&y, &z), x.associator(&z, &y).neg());
        }
    }
}

// =============================================================================
// Quadrance sign
// =============================================================================

macro_rules! definite {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::*;

            type T = $ty;

            proptest! {
                #[test]
                fn quad_non_negative(x in T::small(4)) {
                    let quad = x.quad();
                    prop_assert!(quad >= int(0));
                    prop_assert_eq!(quad == int(0), x.is_zero());
                }
            }
        }
    };
}

definite!(complex_definite, Complex);
definite!(hamilton_definite, Hamilton);
definite!(cayley_definite, Cayley);

proptest! {
    #[test]
    fn indefinite_quadrance_takes_both_signs(a in 1i64..1000, b in 1i64..1000) {
        prop_assume!(a != b);
        let x = Perplex::new(a, b);
        let y = Perplex::new(b, a);
        prop_assert_eq!(x.quad(), y.quad().neg());
    }

    #[test]
    fn infra_real_part_decides_zero_divisors(a in any::<i64>(), b in any::<i64>()) {
        prop_assert!(Infra::new(0, b).is_zero_divisor());
        prop_assert_eq!(Infra::new(a, b).is_zero_divisor(), a == 0);
    }

    #[test]
    fn perplex_zero_divisors_lie_on_diagonals(a in -50i64..50, b in -50i64..50) {
        let x = Perplex::new(a, b);
        prop_assert_eq!(x.is_zero_divisor(), a == b || a == -b);
    }
}
