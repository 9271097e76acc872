//! Per-group reduction of a [`Grouping`].
//!
//! Each group is reduced on its own, so the reducer never sees elements of
//! two different keys at once. Groups are visited in the map's order, which
//! is unspecified.

use std::collections::HashMap;
use std::hash::Hash;

use super::dynamic::Dynamic;
use super::types::{Aggregable, Collection, Grouping};

/// Reduces each group to a single value.
///
/// ```rust
/// use fpkit::iters;
///
/// let parity = iters::group_by(1..=6, |n| n % 2 == 0);
/// let sums = iters::aggregate(parity, |group| group.iter().sum::<i32>());
/// assert_eq!(sums[&true], 12);
/// assert_eq!(sums[&false], 9);
/// ```
pub fn aggregate<K, T, R, I, F>(groups: I, mut function: F) -> HashMap<K, R>
where
    I: IntoIterator<Item = (K, Vec<T>)>,
    K: Eq + Hash,
    F: FnMut(Collection<T>) -> R,
{
    groups
        .into_iter()
        .map(|(key, members)| (key, function(Collection::new(members))))
        .collect()
}

/// Reduces each group to a single value, also passing the group's key.
pub fn aggregate_i<K, T, R, I, F>(groups: I, mut function: F) -> HashMap<K, R>
where
    I: IntoIterator<Item = (K, Vec<T>)>,
    K: Eq + Hash,
    F: FnMut(&K, Collection<T>) -> R,
{
    groups
        .into_iter()
        .map(|(key, members)| {
            let reduced = function(&key, Collection::new(members));
            (key, reduced)
        })
        .collect()
}

impl<K: Eq + Hash, T, R> Aggregable<K, T, R> {
    /// See [`aggregate`].
    pub fn aggregate<F>(self, function: F) -> HashMap<K, R>
    where
        F: FnMut(Collection<T>) -> R,
    {
        aggregate(self.into_grouping(), function)
    }

    /// See [`aggregate_i`].
    pub fn aggregate_i<F>(self, function: F) -> HashMap<K, R>
    where
        F: FnMut(&K, Collection<T>) -> R,
    {
        aggregate_i(self.into_grouping(), function)
    }
}

impl<K: Eq + Hash, T> Grouping<K, T> {
    /// [`aggregate`] into dynamically-typed values.
    pub fn aggregate_dynamic<F>(self, function: F) -> HashMap<K, Dynamic>
    where
        F: FnMut(Collection<T>) -> Dynamic,
    {
        aggregate(self, function)
    }

    /// [`aggregate_i`] into dynamically-typed values.
    pub fn aggregate_i_dynamic<F>(self, function: F) -> HashMap<K, Dynamic>
    where
        F: FnMut(&K, Collection<T>) -> Dynamic,
    {
        aggregate_i(self, function)
    }
}
