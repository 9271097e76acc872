//! Presence/absence combinators for `Option`.
//!
//! The standard library's `Option` is already the tagged union this crate
//! needs, so this module only adds the operations it lacks: callback-style
//! matching, lazy defaults, copying a borrowed value in ([`wrap`]), capturing a
//! fallible computation ([`attempt`]), pairing ([`zip`]) and the two-sided
//! eliminator ([`bi_map`]). Mapping and binding come from
//! [`Functor`](crate::typeclass::Functor) and [`Monad`](crate::typeclass::Monad)
//! as well as the free functions below.
//!
//! Every operation is total: none of them panic.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::option::{self, OptionExt};
//!
//! let port = option::attempt(|| "8080".parse::<u16>())
//!     .keep_if(|port| *port >= 1024)
//!     .get_or_else(|| 3000);
//! assert_eq!(port, 8080);
//!
//! assert_eq!(option::zip(Some(42), None::<&str>), None);
//! ```

/// Operations on `Option` that the standard library does not provide under
/// these names.
pub trait OptionExt<T>: Sized {
    /// Invokes exactly one of the callbacks depending on the tag.
    fn match_with<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(T),
        N: FnOnce();

    /// Returns the contained value, or the result of `default`.
    ///
    /// `default` is only evaluated for `None`.
    fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T;

    /// Returns `self` if it is `Some`, otherwise evaluates `alternative`.
    fn or_else_with<F>(self, alternative: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>;

    /// Monadic bind: applies `function` to a `Some` value and flattens.
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    /// Keeps a `Some` only if `predicate` holds for its value.
    ///
    /// `predicate` is never invoked on `None`.
    fn keep_if<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool;

    /// One-element vector for `Some`, empty vector for `None`.
    fn to_vec(self) -> Vec<T>;

    /// Borrows the contained value, the counterpart of a nullable reference.
    fn get_ref(&self) -> Option<&T>;

    /// Structural equality: `None == None`, `Some(x) == Some(y)` iff `x == y`.
    fn equals(&self, other: &Option<T>) -> bool
    where
        T: PartialEq;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn match_with<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(default)
    }

    #[inline]
    fn or_else_with<F>(self, alternative: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        self.or_else(alternative)
    }

    #[inline]
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        bind(self, function)
    }

    #[inline]
    fn keep_if<P>(self, predicate: P) -> Option<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(predicate)
    }

    #[inline]
    fn to_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    #[inline]
    fn get_ref(&self) -> Option<&T> {
        self.as_ref()
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        match (self, other) {
            (Some(left), Some(right)) => left == right,
            (None, None) => true,
            _ => false,
        }
    }
}

/// Copies a borrowed value into an owned `Option`.
///
/// An absent reference yields `None`; a present one yields `Some` holding a
/// clone of the referenced value.
///
/// ```rust
/// use fpkit::option;
///
/// let config = std::collections::HashMap::from([("retries", 3)]);
/// assert_eq!(option::wrap(config.get("retries")), Some(3));
/// assert_eq!(option::wrap(config.get("timeout")), None);
/// ```
#[inline]
pub fn wrap<T: Clone>(reference: Option<&T>) -> Option<T> {
    reference.cloned()
}

/// Runs a fallible computation once, keeping only whether it succeeded.
///
/// The error detail is discarded.
#[inline]
pub fn attempt<T, E, F>(computation: F) -> Option<T>
where
    F: FnOnce() -> Result<T, E>,
{
    computation().ok()
}

/// Applies `function` only if `option` is `Some`, flattening one level.
#[inline]
pub fn bind<T, U, F>(option: Option<T>, function: F) -> Option<U>
where
    F: FnOnce(T) -> Option<U>,
{
    option.and_then(function)
}

/// Transforms a `Some` value; `None` maps to `None` without calling `function`.
#[inline]
pub fn map<T, U, F>(option: Option<T>, function: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    option.map(function)
}

/// Keeps a `Some` only if `predicate` holds for its value.
#[inline]
pub fn filter<T, P>(option: Option<T>, predicate: P) -> Option<T>
where
    P: FnOnce(&T) -> bool,
{
    option.filter(predicate)
}

/// Removes one level of nesting.
#[inline]
pub fn flatten<T>(option: Option<Option<T>>) -> Option<T> {
    option.flatten()
}

/// Pairs two options; `Some` only if both are `Some`.
#[inline]
pub fn zip<T, U>(first: Option<T>, second: Option<U>) -> Option<(T, U)> {
    first.zip(second)
}

/// Eliminates an option into a common type, invoking exactly one function.
///
/// ```rust
/// use fpkit::option;
///
/// let label = |count: Option<u32>| option::bi_map(count, |n| format!("{n} items"), || "empty".to_string());
/// assert_eq!(label(Some(3)), "3 items");
/// assert_eq!(label(None), "empty");
/// ```
#[inline]
pub fn bi_map<T, U, S, N>(option: Option<T>, if_some: S, if_none: N) -> U
where
    S: FnOnce(T) -> U,
    N: FnOnce() -> U,
{
    option.map_or_else(if_none, if_some)
}
