//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

#![cfg(feature = "typeclass")]

use fpkit::either::Either;
use fpkit::iters::Collection;
use fpkit::typeclass::Functor;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_identity_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in prop::result::maybe_ok(any::<String>(), any::<u8>())) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_identity_law(value in any::<i32>(), is_left in any::<bool>()) {
        let either: Either<i32, i32> = if is_left { Either::Left(value) } else { Either::Right(value) };
        prop_assert_eq!(either.fmap(|x| x), either);
    }

    #[test]
    fn prop_either_fmap_leaves_left_untouched(value in any::<i32>()) {
        let either: Either<i32, i32> = Either::Left(value);
        prop_assert_eq!(either.fmap(|n: i32| n.wrapping_add(1)), Either::Left(value));
    }

    #[test]
    fn prop_collection_identity_law(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let collection = Collection::from(values);
        prop_assert_eq!(collection.clone().fmap(|x| x), collection);
    }

    #[test]
    fn prop_collection_composition_law(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let collection = Collection::from(values);
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = collection.clone().fmap(function1).fmap(function2);
        let right = collection.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}
