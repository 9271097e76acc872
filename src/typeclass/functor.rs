//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value(s) inside a container while
//! keeping the container's shape: `None` stays `None`, an `Err` keeps its
//! error, a `Left` keeps its value, and a collection keeps its length and
//! order.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;
use crate::either::Either;
use crate::iters::Collection;

/// Types whose contents can be transformed without changing their structure.
///
/// The function is `FnMut` so that a single signature covers both
/// single-value containers and multi-element collections.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Functor;
    ///
    /// let ok: Result<i32, String> = Ok(21);
    /// assert_eq!(ok.fmap(|n| n * 2), Ok(42));
    ///
    /// let err: Result<i32, String> = Err("boom".to_string());
    /// assert_eq!(err.fmap(|n| n * 2), Err("boom".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every contained value with `value`.
    ///
    /// ```rust
    /// use fpkit::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the contained values, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        self.map_right(function)
    }
}

impl<T> Functor for Collection<T> {
    fn fmap<B, F>(self, function: F) -> Collection<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}
