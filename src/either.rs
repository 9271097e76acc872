//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is a general sum type: a value is either a `Left(L)` or a
//! `Right(R)`. Unlike `Result`, neither side carries error semantics, so the
//! API is symmetric. Every two-sided operation invokes exactly one of its
//! functions, and a one-sided operation re-wraps the inactive side untouched.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! // `fold` eliminates the sum into one common type.
//! let describe = |value: Either<i32, String>| {
//!     value.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"))
//! };
//! assert_eq!(describe(left), "Number: 42");
//! assert_eq!(describe(right), "String: hello");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that can be one of two types.
///
/// # Examples
///
/// ```rust
/// use fpkit::either::Either;
///
/// let value: Either<String, i32> = Either::Right(42);
/// assert_eq!(value.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `on_left` or `on_right` depending on the active side.
    ///
    /// Nothing is returned; callers capture results through the closures.
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let mut left_calls = 0;
    /// let mut right_calls = 0;
    /// Either::<i32, &str>::Right("r").match_with(|_| left_calls += 1, |_| right_calls += 1);
    /// assert_eq!((left_calls, right_calls), (0, 1));
    /// ```
    #[inline]
    pub fn match_with<F, G>(self, on_left: F, on_right: G)
    where
        F: FnOnce(L),
        G: FnOnce(R),
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Some(l)` for `Left(l)`, otherwise `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(r)` for `Right(r)`, otherwise `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Binding Operations
    // =========================================================================

    /// Chains a computation on the left value.
    ///
    /// A `Right` is passed through re-wrapped without calling `function`.
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let retry = |attempts: u32| {
    ///     if attempts < 3 { Either::Left(attempts + 1) } else { Either::Right("gave up") }
    /// };
    /// assert_eq!(Either::<u32, &str>::Left(1).bind_left(retry), Either::Left(2));
    /// assert_eq!(Either::<u32, &str>::Left(3).bind_left(retry), Either::Right("gave up"));
    /// assert_eq!(Either::<u32, &str>::Right("done").bind_left(retry), Either::Right("done"));
    /// ```
    #[inline]
    pub fn bind_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// A `Left` is passed through re-wrapped without calling `function`.
    #[inline]
    pub fn bind_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies one of two functions, each producing a whole new `Either`.
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let value: Either<i32, &str> = Either::Left(-4);
    /// let result: Either<String, usize> = value.bi_bind(
    ///     |n| if n < 0 { Either::Right(n.unsigned_abs() as usize) } else { Either::Left(n.to_string()) },
    ///     |s| Either::Right(s.len()),
    /// );
    /// assert_eq!(result, Either::Right(4));
    /// ```
    #[inline]
    pub fn bi_bind<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms whichever side is active, keeping the side.
    ///
    /// ```rust
    /// use fpkit::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.bimap(|x: i32| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Collapses both sides into a single type by case analysis.
    ///
    /// Exactly one of the two functions is invoked.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a pair of `Option`s, exactly one of which is `Some`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// Sides carry no ordering between them.
static_assertions::assert_not_impl_any!(Either<u8, u8>: PartialOrd, Ord);
