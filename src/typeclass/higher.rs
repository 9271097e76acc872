//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! [`TypeConstructor`] names the element type a container is currently applied
//! to and lets a trait re-apply the same constructor to another element type,
//! which is all [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use fpkit::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let cleared: Option<String> = reset(Some(42));
//! assert_eq!(cleared, None);
//! ```

use crate::either::Either;
use crate::iters::Collection;

/// A type constructor applied to one element type.
///
/// `Inner` is the element type; `WithType<B>` is the same constructor applied
/// to `B`. For every implementation `WithType<Inner>` is `Self`.
pub trait TypeConstructor {
    /// The element type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

/// `Either` is right-biased: the left side is fixed, the right side varies.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<T> TypeConstructor for Collection<T> {
    type Inner = T;
    type WithType<B> = Collection<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inner<T: TypeConstructor<Inner = i32>>() {}

    fn assert_same<T, U>()
    where
        T: TypeConstructor<WithType<String> = U>,
    {
    }

    #[test]
    fn inner_types_are_the_element_type() {
        assert_inner::<Option<i32>>();
        assert_inner::<Result<i32, String>>();
        assert_inner::<Either<String, i32>>();
        assert_inner::<Collection<i32>>();
    }

    #[test]
    fn with_type_keeps_the_constructor() {
        assert_same::<Option<i32>, Option<String>>();
        assert_same::<Result<i32, u8>, Result<String, u8>>();
        assert_same::<Either<u8, i32>, Either<u8, String>>();
        assert_same::<Collection<i32>, Collection<String>>();
    }
}
