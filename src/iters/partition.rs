//! Splitting a sequence in two by a predicate.
//!
//! The first half holds the matching elements and the second the rest; each
//! half keeps the relative order the elements had in the source.

use super::types::Collection;

/// Splits `items` into `(matching, non_matching)`.
///
/// ```rust
/// use fpkit::iters;
///
/// let (even, odd) = iters::partition(1..=6, |n| n % 2 == 0);
/// assert_eq!(even, [2, 4, 6]);
/// assert_eq!(odd, [1, 3, 5]);
/// ```
pub fn partition<T, I, P>(items: I, mut predicate: P) -> (Collection<T>, Collection<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().partition(|value| predicate(value))
}

/// Splits `items` by a predicate that also sees each element's position.
pub fn partition_i<T, I, P>(items: I, mut predicate: P) -> (Collection<T>, Collection<T>)
where
    I: IntoIterator<Item = T>,
    P: FnMut(usize, &T) -> bool,
{
    let mut matching = Collection::default();
    let mut rest = Collection::default();
    for (index, value) in items.into_iter().enumerate() {
        if predicate(index, &value) {
            matching.extend(Some(value));
        } else {
            rest.extend(Some(value));
        }
    }
    (matching, rest)
}

impl<T> Collection<T> {
    /// See [`partition`].
    pub fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        partition(self, predicate)
    }

    /// See [`partition_i`].
    pub fn partition_i<P>(self, predicate: P) -> (Self, Self)
    where
        P: FnMut(usize, &T) -> bool,
    {
        partition_i(self, predicate)
    }
}
