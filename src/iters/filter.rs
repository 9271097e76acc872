//! Order-preserving selection over sequences, maps and strings.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::types::Collection;

/// Keeps the elements for which `predicate` holds, in source order.
///
/// ```rust
/// use fpkit::iters;
///
/// assert_eq!(iters::filter(vec![1, 2, 3, 4, 5, 6], |n| n % 2 == 0), [2, 4, 6]);
/// ```
pub fn filter<T, I, P>(items: I, mut predicate: P) -> Collection<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(|value| predicate(value)).collect()
}

/// Keeps the elements for which `predicate` holds given their position.
pub fn filter_i<T, I, P>(items: I, mut predicate: P) -> Collection<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(usize, &T) -> bool,
{
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| predicate(index, &value).then_some(value))
        .collect()
}

/// Keeps the entries for which `predicate` holds.
pub fn filter_entries<K, V, S, P>(mut entries: HashMap<K, V, S>, mut predicate: P) -> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    P: FnMut(&K, &V) -> bool,
{
    entries.retain(|key, value| predicate(key, value));
    entries
}

/// Keeps the characters of `text` for which `predicate` holds.
///
/// ```rust
/// use fpkit::iters;
///
/// assert_eq!(iters::filter_str("a1b2c3", |c| c.is_ascii_digit()), "123");
/// ```
pub fn filter_str<P>(text: &str, mut predicate: P) -> String
where
    P: FnMut(char) -> bool,
{
    text.chars().filter(|character| predicate(*character)).collect()
}

/// Keeps the characters of `text` for which `predicate` holds given their
/// character position.
pub fn filter_str_i<P>(text: &str, mut predicate: P) -> String
where
    P: FnMut(usize, char) -> bool,
{
    text.chars()
        .enumerate()
        .filter_map(|(index, character)| predicate(index, character).then_some(character))
        .collect()
}

impl<T> Collection<T> {
    /// See [`filter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        filter(self, predicate)
    }

    /// See [`filter_i`].
    pub fn filter_i<P>(self, predicate: P) -> Self
    where
        P: FnMut(usize, &T) -> bool,
    {
        filter_i(self, predicate)
    }
}
