//! Monad type class - sequencing computations with dependency.
//!
//! `flat_map` (bind) feeds the value of one computation into the next and
//! flattens the nested result. It only runs the follow-up on the "present"
//! branch: `Some`, `Ok`, `Right`, or each element of a collection.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::Monad;
//!
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//!
//! assert_eq!(Some(8).flat_map(halve).flat_map(halve), Some(2));
//! assert_eq!(Some(6).flat_map(halve).flat_map(halve), None);
//! ```

use super::functor::Functor;
use crate::either::Either;
use crate::iters::Collection;

/// Functors that can lift a plain value and chain dependent computations.
pub trait Monad: Functor {
    /// Lifts a value into the minimal context of this constructor.
    ///
    /// ```rust
    /// use fpkit::typeclass::Monad;
    ///
    /// assert_eq!(<Option<()>>::pure(42), Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to the contained value(s) and flattens one level.
    ///
    /// Short-circuits on the absent branch without calling `function`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// ```rust
    /// use fpkit::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Either<L, R> Implementation (right-biased)
// =============================================================================

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> Either<L, B>,
    {
        self.bind_right(function)
    }
}

// =============================================================================
// Collection<A> Implementation
// =============================================================================

impl<A> Monad for Collection<A> {
    #[inline]
    fn pure<B>(value: B) -> Collection<B> {
        Collection::from(vec![value])
    }

    fn flat_map<B, F>(self, function: F) -> Collection<B>
    where
        F: FnMut(A) -> Collection<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_skips_function_on_none() {
        let mut calls = 0;
        let result = None::<i32>.flat_map(|n| {
            calls += 1;
            Some(n)
        });
        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn result_flat_map_keeps_original_error() {
        let failed: Result<i32, &str> = Err("first");
        let result = failed.flat_map(|_| Err::<i32, &str>("second"));
        assert_eq!(result, Err("first"));
    }

    #[rstest]
    fn either_flat_map_passes_left_through() {
        let left: Either<&str, i32> = Either::Left("stop");
        assert_eq!(left.flat_map(|n| Either::Right(n + 1)), Either::Left("stop"));
    }

    #[rstest]
    fn collection_flat_map_concatenates_in_order() {
        let values = Collection::from(vec![1_usize, 2, 3]);
        let expanded = values.flat_map(|n| Collection::from(vec![n; n]));
        assert_eq!(expanded.into_vec(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn pure_builds_the_present_branch() {
        assert_eq!(<Result<(), String>>::pure(1), Ok(1));
        assert_eq!(<Either<String, ()>>::pure(1), Either::Right(1));
        assert_eq!(<Collection<()>>::pure(1).into_vec(), vec![1]);
    }
}
