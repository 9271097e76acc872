//! Success/error combinators for `Result`.
//!
//! The error carried by an `Err` is opaque here: nothing in this module
//! inspects or classifies it. [`Fallible`] fixes the error to a boxed
//! [`BoxError`] for call sites that want one uniform error type, and [`lift`]
//! moves any fallible computation into it.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::result::{self, ResultExt};
//!
//! let parsed = result::lift(|| "21".parse::<i32>())
//!     .bind(|n| if n > 0 { Ok(n * 2) } else { Err("not positive".into()) });
//! assert_eq!(parsed.ok(), Some(42));
//! ```

/// Uniform error type for [`Fallible`] results.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A `Result` whose error is a [`BoxError`].
pub type Fallible<T> = Result<T, BoxError>;

/// Operations on `Result` that the standard library does not provide under
/// these names.
pub trait ResultExt<T, E>: Sized {
    /// Invokes `on_ok` or `on_err` depending on the tag.
    fn match_with<O, F>(self, on_ok: O, on_err: F)
    where
        O: FnOnce(T),
        F: FnOnce(E);

    /// Applies `function` to an `Ok` value.
    ///
    /// An `Err` short-circuits and keeps the original error unchanged.
    ///
    /// # Errors
    ///
    /// Returns the original error, or the error produced by `function`.
    fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Applies `function` on `Ok` or `error_function` on `Err`; either may
    /// produce a success or a failure, including a new error type.
    ///
    /// # Errors
    ///
    /// Returns whichever error the invoked function produces.
    fn bi_bind<U, E2, F, G>(self, function: F, error_function: G) -> Result<U, E2>
    where
        F: FnOnce(T) -> Result<U, E2>,
        G: FnOnce(E) -> Result<U, E2>;

    /// Transforms the `Ok` value or translates the error, keeping the tag.
    ///
    /// # Errors
    ///
    /// Returns the original error passed through `error_function`.
    fn bi_map<U, E2, F, G>(self, function: F, error_function: G) -> Result<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2;

    /// Returns the `Ok` value, or recovers one from the error.
    fn get_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn match_with<O, F>(self, on_ok: O, on_err: F)
    where
        O: FnOnce(T),
        F: FnOnce(E),
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.bi_bind(function, Err)
    }

    #[inline]
    fn bi_bind<U, E2, F, G>(self, function: F, error_function: G) -> Result<U, E2>
    where
        F: FnOnce(T) -> Result<U, E2>,
        G: FnOnce(E) -> Result<U, E2>,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => error_function(error),
        }
    }

    #[inline]
    fn bi_map<U, E2, F, G>(self, function: F, error_function: G) -> Result<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error_function(error)),
        }
    }

    #[inline]
    fn get_or_else<F>(self, recover: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.unwrap_or_else(recover)
    }
}

/// Executes `thunk` exactly once and boxes its error, if any.
///
/// # Errors
///
/// Returns the error of `thunk` as a [`BoxError`].
///
/// ```rust
/// use fpkit::result;
///
/// let failed = result::lift(|| "nope".parse::<u8>());
/// assert_eq!(failed.unwrap_err().to_string(), "invalid digit found in string");
/// ```
#[inline]
pub fn lift<T, E, F>(thunk: F) -> Fallible<T>
where
    E: Into<BoxError>,
    F: FnOnce() -> Result<T, E>,
{
    thunk().map_err(Into::into)
}

/// Transforms an `Ok` value; an `Err` propagates unchanged.
///
/// # Errors
///
/// Returns the error held by `result`.
#[inline]
pub fn map<T, U, E, F>(result: Result<T, E>, function: F) -> Result<U, E>
where
    F: FnOnce(T) -> U,
{
    result.map(function)
}
