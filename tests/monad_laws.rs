//! Property-based tests for the Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! `Either` is checked in its right-biased form.

#![cfg(feature = "typeclass")]

use fpkit::either::Either;
use fpkit::iters::Collection;
use fpkit::typeclass::Monad;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

// =============================================================================
// Option<A>
// =============================================================================

fn halve(n: i32) -> Option<i32> {
    (n % 2 == 0).then_some(n / 2)
}

fn positive(n: i32) -> Option<i32> {
    (n > 0).then_some(n)
}

proptest! {
    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Option<()>>::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.flat_map(Some), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let left = value.flat_map(halve).flat_map(positive);
        let right = value.flat_map(|n| halve(n).flat_map(positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

fn checked_double(n: i32) -> Result<i32, String> {
    n.checked_mul(2).ok_or_else(|| format!("{n} overflows"))
}

fn non_zero(n: i32) -> Result<i32, String> {
    if n == 0 { Err("zero".to_string()) } else { Ok(n) }
}

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Result<(), String>>::pure(value).flat_map(checked_double), checked_double(value));
    }

    #[test]
    fn prop_result_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(value.clone().flat_map(Ok), value);
    }

    #[test]
    fn prop_result_associativity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let left = value.clone().flat_map(checked_double).flat_map(non_zero);
        let right = value.flat_map(|n| checked_double(n).flat_map(non_zero));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

fn classify(n: i32) -> Either<String, i32> {
    if n < 0 { Either::Left(format!("{n} is negative")) } else { Either::Right(n / 3) }
}

fn wrapping_increment(n: i32) -> Either<String, i32> {
    Either::Right(n.wrapping_add(1))
}

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Either<String, ()>>::pure(value).flat_map(classify), classify(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().flat_map(classify).flat_map(wrapping_increment);
        let right = value.flat_map(|n| classify(n).flat_map(wrapping_increment));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_left_short_circuits(message in any::<String>()) {
        let mut calls = 0;
        let result = Either::<String, i32>::Left(message.clone()).flat_map(|n| {
            calls += 1;
            classify(n)
        });
        prop_assert_eq!(result, Either::Left(message));
        prop_assert_eq!(calls, 0);
    }
}

// =============================================================================
// Collection<A>
// =============================================================================

fn neighbours(n: i16) -> Collection<i16> {
    Collection::from(vec![n.wrapping_sub(1), n.wrapping_add(1)])
}

fn evens_only(n: i16) -> Collection<i16> {
    Collection::from(if n % 2 == 0 { vec![n] } else { Vec::new() })
}

proptest! {
    #[test]
    fn prop_collection_left_identity(value in any::<i16>()) {
        prop_assert_eq!(<Collection<()>>::pure(value).flat_map(neighbours), neighbours(value));
    }

    #[test]
    fn prop_collection_right_identity(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let collection = Collection::from(values);
        prop_assert_eq!(collection.clone().flat_map(|n| Collection::from(vec![n])), collection);
    }

    #[test]
    fn prop_collection_associativity(values in prop::collection::vec(any::<i16>(), 0..50)) {
        let collection = Collection::from(values);
        let left = collection.clone().flat_map(neighbours).flat_map(evens_only);
        let right = collection.flat_map(|n| neighbours(n).flat_map(evens_only));
        prop_assert_eq!(left, right);
    }
}
