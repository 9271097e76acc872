//! Dynamically-typed elements for call sites that cannot name a static type.
//!
//! The `*_dynamic` combinator variants produce [`Dynamic`] values (and
//! [`DynamicKey`] grouping keys) instead of a concrete element type. They
//! behave exactly like their typed counterparts; the type is recovered later
//! with [`downcast`]. Prefer the typed combinators wherever the element type
//! can be written down.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::DowncastError;

/// A boxed value of any `Send` type.
pub type Dynamic = Box<dyn Any + Send>;

/// Boxes `value` as a [`Dynamic`].
#[inline]
pub fn into_dynamic<T: Any + Send>(value: T) -> Dynamic {
    Box::new(value)
}

/// Recovers a `T` from a [`Dynamic`].
///
/// # Errors
///
/// Returns [`DowncastError`] if the value is not a `T`.
///
/// ```rust
/// use fpkit::iters::{downcast, into_dynamic};
///
/// assert_eq!(downcast::<i32>(into_dynamic(42)), Ok(42));
/// assert!(downcast::<&str>(into_dynamic(42)).is_err());
/// ```
pub fn downcast<T: Any>(value: Dynamic) -> Result<T, DowncastError> {
    value
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| DowncastError::for_type::<T>())
}

// =============================================================================
// DynamicKey
// =============================================================================

trait ErasedKey: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn eq_key(&self, other: &dyn ErasedKey) -> bool;
    fn hash_key(&self, state: &mut dyn Hasher);
}

impl<T> ErasedKey for T
where
    T: Any + Send + Sync + fmt::Debug + Eq + Hash,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn eq_key(&self, other: &dyn ErasedKey) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_key(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

/// A grouping key of any hashable, comparable type.
///
/// Keys of different types never compare equal, even if their values would
/// convert into one another.
///
/// ```rust
/// use fpkit::iters::DynamicKey;
///
/// assert_eq!(DynamicKey::new(1_u8), DynamicKey::new(1_u8));
/// assert_ne!(DynamicKey::new(1_u8), DynamicKey::new(1_u16));
/// ```
pub struct DynamicKey(Box<dyn ErasedKey>);

impl DynamicKey {
    /// Erases the type of `value`.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync + fmt::Debug + Eq + Hash,
    {
        Self(Box::new(value))
    }

    /// Borrows the key as a `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Recovers the key as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DowncastError`] if the key is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, DowncastError> {
        self.0
            .into_any()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| DowncastError::for_type::<T>())
    }
}

impl PartialEq for DynamicKey {
    fn eq(&self, other: &Self) -> bool {
        (*self.0).eq_key(&*other.0)
    }
}

impl Eq for DynamicKey {}

impl Hash for DynamicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.0).hash_key(state);
    }
}

impl fmt::Debug for DynamicKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}
