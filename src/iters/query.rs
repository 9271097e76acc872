//! Searches and quantifiers.
//!
//! Searches report absence through `Option` and never panic. On an empty
//! carrier `all` and `none` are vacuously `true` and `any` is `false`.

use super::types::Collection;

/// Returns the first element satisfying `predicate`.
pub fn find<T, I, P>(items: I, mut predicate: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().find(|value| predicate(value))
}

/// Returns the first element satisfying `predicate`, scanning from the front.
///
/// Identical to [`find`]; named for symmetry with [`find_last`].
pub fn find_first<T, I, P>(items: I, predicate: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    find(items, predicate)
}

/// Returns the last element satisfying `predicate`, scanning from the back.
///
/// ```rust
/// use fpkit::iters;
///
/// let words = vec!["apple", "bana", "cherry", "banana"];
/// assert_eq!(iters::find_last(words, |word| word.starts_with("ban")), Some("banana"));
/// ```
pub fn find_last<T, I, P>(items: I, mut predicate: P) -> Option<T>
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
    P: FnMut(&T) -> bool,
{
    items.into_iter().rev().find(|value| predicate(value))
}

/// Returns the position of the first element satisfying `predicate`.
pub fn find_index<T, I, P>(items: I, predicate: P) -> Option<usize>
where
    I: IntoIterator<Item = T>,
    P: FnMut(T) -> bool,
{
    items.into_iter().position(predicate)
}

/// Returns `true` if at least one element satisfies `predicate`.
pub fn any<T, I, P>(items: I, predicate: P) -> bool
where
    I: IntoIterator<Item = T>,
    P: FnMut(T) -> bool,
{
    items.into_iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
pub fn all<T, I, P>(items: I, predicate: P) -> bool
where
    I: IntoIterator<Item = T>,
    P: FnMut(T) -> bool,
{
    items.into_iter().all(predicate)
}

/// Returns `true` if no element satisfies `predicate`.
pub fn none<T, I, P>(items: I, predicate: P) -> bool
where
    I: IntoIterator<Item = T>,
    P: FnMut(T) -> bool,
{
    !items.into_iter().any(predicate)
}

/// Counts the elements satisfying `predicate`.
pub fn count<T, I, P>(items: I, mut predicate: P) -> usize
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|value| predicate(value)).count()
}

impl<T> Collection<T> {
    /// Borrows the first element satisfying `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        find(self, |value| predicate(*value))
    }

    /// Borrows the first element satisfying `predicate`.
    pub fn find_first<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.find(predicate)
    }

    /// Borrows the last element satisfying `predicate`.
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        find_last(self, |value| predicate(*value))
    }

    /// Position of the first element satisfying `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        find_index(self, predicate)
    }

    /// See [`any`].
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        any(self, predicate)
    }

    /// See [`all`].
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        all(self, predicate)
    }

    /// See [`none`].
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        none(self, predicate)
    }

    /// See [`count`].
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        count(self, |value| predicate(*value))
    }
}
