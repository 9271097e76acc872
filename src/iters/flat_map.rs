//! Per-element expansion followed by concatenation.

use super::dynamic::Dynamic;
use super::types::{Collection, Mappable};

/// Expands each element into zero or more values and concatenates the
/// results in source order.
///
/// ```rust
/// use fpkit::iters;
///
/// let repeated = iters::flat_map(vec![1_usize, 2, 3], |n| vec![n; n]);
/// assert_eq!(repeated, [1, 2, 2, 3, 3, 3]);
/// ```
pub fn flat_map<T, R, I, J, F>(items: I, function: F) -> Collection<R>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = R>,
    F: FnMut(T) -> J,
{
    items.into_iter().flat_map(function).collect()
}

/// Expands each element together with its position.
pub fn flat_map_i<T, R, I, J, F>(items: I, mut function: F) -> Collection<R>
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = R>,
    F: FnMut(usize, T) -> J,
{
    items
        .into_iter()
        .enumerate()
        .flat_map(|(index, value)| function(index, value))
        .collect()
}

impl<T, R> Mappable<T, R> {
    /// See [`flat_map`].
    pub fn flat_map<J, F>(self, function: F) -> Collection<R>
    where
        J: IntoIterator<Item = R>,
        F: FnMut(T) -> J,
    {
        flat_map(self.into_vec(), function)
    }

    /// See [`flat_map_i`].
    pub fn flat_map_i<J, F>(self, function: F) -> Collection<R>
    where
        J: IntoIterator<Item = R>,
        F: FnMut(usize, T) -> J,
    {
        flat_map_i(self.into_vec(), function)
    }
}

impl<T> Collection<T> {
    /// [`flat_map`] into dynamically-typed elements.
    pub fn flat_map_dynamic<J, F>(self, function: F) -> Collection<Dynamic>
    where
        J: IntoIterator<Item = Dynamic>,
        F: FnMut(T) -> J,
    {
        flat_map(self, function)
    }

    /// [`flat_map_i`] into dynamically-typed elements.
    pub fn flat_map_i_dynamic<J, F>(self, function: F) -> Collection<Dynamic>
    where
        J: IntoIterator<Item = Dynamic>,
        F: FnMut(usize, T) -> J,
    {
        flat_map_i(self, function)
    }
}
