//! Carrier wrappers that select which combinator methods a value exposes.
//!
//! None of these types own anything beyond the wrapped `Vec` or `HashMap`;
//! converting between them moves the same buffer. The size assertions at the
//! bottom of this file pin that down at compile time.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

// =============================================================================
// Collection
// =============================================================================

/// An ordered sequence supporting same-element-type operations.
///
/// Filtering, searching, partitioning, grouping and the dynamically-typed
/// variants live here. Transformations into another element type go through
/// [`Mappable`].
///
/// # Examples
///
/// ```rust
/// use fpkit::iters::Collection;
///
/// let words = Collection::from(vec!["apple", "bana", "cherry", "banana"]);
/// assert_eq!(words.find_last(|word| word.starts_with("ban")), Some(&"banana"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct Collection<T>(Vec<T>);

impl<T> Collection<T> {
    /// Wraps a vector without copying it.
    #[inline]
    pub const fn new(items: Vec<T>) -> Self {
        Self(items)
    }

    /// Unwraps the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Re-tags the sequence for transformation into `R` elements.
    #[inline]
    pub fn into_mappable<R>(self) -> Mappable<T, R> {
        Mappable::new(self.0)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.0).finish()
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    #[inline]
    fn from(collection: Collection<T>) -> Self {
        collection.0
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self(iterator.into_iter().collect())
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.0.extend(iterator);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Collection<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.0 == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Collection<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.0 == *other
    }
}

/// Wraps a vector as a [`Collection`].
#[inline]
pub fn lift_slice<T>(items: Vec<T>) -> Collection<T> {
    Collection::new(items)
}

// =============================================================================
// Mappable
// =============================================================================

/// An ordered sequence tagged with the element type `R` it is about to be
/// transformed into.
///
/// Fixing `R` up front lets `map`, `fold` and `flat_map` be methods whose
/// target type the caller names once, at the lift.
///
/// ```rust
/// use fpkit::iters::lift_map;
///
/// let lengths = lift_map::<&str, usize>(vec!["a", "bb", "ccc"]).map(str::len);
/// assert_eq!(lengths, [1, 2, 3]);
/// ```
#[repr(transparent)]
pub struct Mappable<T, R> {
    items: Vec<T>,
    target: PhantomData<fn() -> R>,
}

impl<T, R> Mappable<T, R> {
    /// Wraps a vector without copying it.
    #[inline]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items,
            target: PhantomData,
        }
    }

    /// Drops the target tag.
    #[inline]
    pub fn into_collection(self) -> Collection<T> {
        Collection::new(self.items)
    }

    /// Unwraps the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone, R> Clone for Mappable<T, R> {
    fn clone(&self) -> Self {
        Self::new(self.items.clone())
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Mappable<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.items).finish()
    }
}

impl<T, R> Deref for Mappable<T, R> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, R> From<Vec<T>> for Mappable<T, R> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T, R> From<Collection<T>> for Mappable<T, R> {
    #[inline]
    fn from(collection: Collection<T>) -> Self {
        collection.into_mappable()
    }
}

/// Wraps a vector as a [`Mappable`] targeting `R`.
#[inline]
pub fn lift_map<T, R>(items: Vec<T>) -> Mappable<T, R> {
    Mappable::new(items)
}

// =============================================================================
// Grouping
// =============================================================================

/// Elements keyed by a derived key, each group in source order.
///
/// Produced by the `group_by` family. Iteration over groups follows the
/// `HashMap` and is therefore unordered.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: Serialize + Eq + Hash, T: Serialize",
        deserialize = "K: Deserialize<'de> + Eq + Hash, T: Deserialize<'de>"
    ))
)]
#[repr(transparent)]
pub struct Grouping<K, T>(HashMap<K, Vec<T>>);

impl<K, T> Grouping<K, T> {
    /// Unwraps the underlying map.
    #[inline]
    pub fn into_map(self) -> HashMap<K, Vec<T>> {
        self.0
    }

    /// Re-tags the grouping for aggregation into `R` values.
    #[inline]
    pub fn into_aggregable<R>(self) -> Aggregable<K, T, R> {
        Aggregable::new(self)
    }
}

impl<K: Eq + Hash, T> Grouping<K, T> {
    pub(crate) fn push(&mut self, key: K, value: T) {
        self.0.entry(key).or_default().push(value);
    }
}

impl<K: Eq + Hash, T: PartialEq> PartialEq for Grouping<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Eq + Hash, T: Eq> Eq for Grouping<K, T> {}

impl<K, T> Default for Grouping<K, T> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Grouping<K, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(&self.0).finish()
    }
}

impl<K, T> Deref for Grouping<K, T> {
    type Target = HashMap<K, Vec<T>>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, T> From<HashMap<K, Vec<T>>> for Grouping<K, T> {
    #[inline]
    fn from(groups: HashMap<K, Vec<T>>) -> Self {
        Self(groups)
    }
}

impl<K, T> IntoIterator for Grouping<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::collections::hash_map::IntoIter<K, Vec<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Eq + Hash, T: PartialEq, const N: usize> PartialEq<[(K, Vec<T>); N]> for Grouping<K, T> {
    fn eq(&self, other: &[(K, Vec<T>); N]) -> bool {
        self.0.len() == N
            && other
                .iter()
                .all(|(key, values)| self.0.get(key).is_some_and(|group| group == values))
    }
}

// =============================================================================
// Aggregable
// =============================================================================

/// A [`Grouping`] tagged with the type `R` each group reduces to.
#[repr(transparent)]
pub struct Aggregable<K, T, R> {
    groups: Grouping<K, T>,
    target: PhantomData<fn() -> R>,
}

impl<K, T, R> Aggregable<K, T, R> {
    /// Wraps a grouping without copying it.
    #[inline]
    pub const fn new(groups: Grouping<K, T>) -> Self {
        Self {
            groups,
            target: PhantomData,
        }
    }

    /// Drops the target tag.
    #[inline]
    pub fn into_grouping(self) -> Grouping<K, T> {
        self.groups
    }
}

impl<K: fmt::Debug, T: fmt::Debug, R> fmt::Debug for Aggregable<K, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.groups, formatter)
    }
}

impl<K, T, R> Deref for Aggregable<K, T, R> {
    type Target = HashMap<K, Vec<T>>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.groups
    }
}

/// Wraps a grouping as an [`Aggregable`] targeting `R`.
#[inline]
pub fn lift_aggregable<K, T, R>(groups: Grouping<K, T>) -> Aggregable<K, T, R> {
    Aggregable::new(groups)
}

assert_eq_size!(Collection<u64>, Vec<u64>);
assert_eq_size!(Mappable<u64, String>, Vec<u64>);
assert_eq_size!(Grouping<u8, u64>, HashMap<u8, Vec<u64>>);
assert_eq_size!(Aggregable<u8, u64, String>, HashMap<u8, Vec<u64>>);
