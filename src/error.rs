//! Error types raised by the crate itself.
//!
//! Failures of caller-supplied computations are never wrapped here: they
//! travel unchanged inside `Err`. The only failure this crate originates is
//! recovering a dynamically-typed value as the wrong type.

use thiserror::Error;

/// A [`Dynamic`](crate::iters::Dynamic) value or
/// [`DynamicKey`](crate::iters::DynamicKey) did not hold the requested type.
///
/// # Examples
///
/// ```rust
/// use fpkit::iters::{downcast, into_dynamic};
///
/// let error = downcast::<String>(into_dynamic(7_u8)).unwrap_err();
/// assert!(error.to_string().starts_with("dynamic value is not a `"));
/// assert!(error.expected.ends_with("String"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dynamic value is not a `{expected}`")]
pub struct DowncastError {
    /// Name of the type the caller asked for.
    pub expected: &'static str,
}

impl DowncastError {
    /// Builds the error for a failed downcast to `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self {
            expected: std::any::type_name::<T>(),
        }
    }
}
