//! Left-to-right reduction with an explicit seed.
//!
//! Folding an empty carrier returns the seed untouched. Map folds visit
//! entries in the map's own (unspecified) order, so their reducers should be
//! order-insensitive.

use super::dynamic::Dynamic;
use super::types::{Collection, Mappable};

/// Reduces `items` from the left, starting at `initial`.
///
/// ```rust
/// use fpkit::iters;
///
/// assert_eq!(iters::fold(vec![1, 2, 3, 4], 0, |sum, n| sum + n), 10);
/// assert_eq!(iters::fold(Vec::<i32>::new(), 7, |sum, n| sum + n), 7);
/// ```
pub fn fold<T, A, I, F>(items: I, initial: A, function: F) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(A, T) -> A,
{
    items.into_iter().fold(initial, function)
}

/// Reduces `items` from the left, also passing each element's position.
pub fn fold_i<T, A, I, F>(items: I, initial: A, mut function: F) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize, A, T) -> A,
{
    items
        .into_iter()
        .enumerate()
        .fold(initial, |accumulator, (index, value)| function(index, accumulator, value))
}

/// Reduces the entries of a map.
///
/// The visiting order is whatever the carrier yields; for a `HashMap` it is
/// unspecified.
pub fn fold_entries<K, V, A, I, F>(entries: I, initial: A, mut function: F) -> A
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(A, K, V) -> A,
{
    entries
        .into_iter()
        .fold(initial, |accumulator, (key, value)| function(accumulator, key, value))
}

/// Reduces the characters of `text`.
pub fn fold_str<A, F>(text: &str, initial: A, function: F) -> A
where
    F: FnMut(A, char) -> A,
{
    text.chars().fold(initial, function)
}

/// Reduces the characters of `text`, also passing each character position.
///
/// ```rust
/// use fpkit::iters;
///
/// let total = iters::fold_str_i("ABC", 0, |index, sum, c| sum + index as u32 + c as u32);
/// assert_eq!(total, 201);
/// ```
pub fn fold_str_i<A, F>(text: &str, initial: A, mut function: F) -> A
where
    F: FnMut(usize, A, char) -> A,
{
    text.chars()
        .enumerate()
        .fold(initial, |accumulator, (index, character)| {
            function(index, accumulator, character)
        })
}

impl<T, A> Mappable<T, A> {
    /// See [`fold`].
    pub fn fold<F>(self, initial: A, function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        fold(self.into_vec(), initial, function)
    }

    /// See [`fold_i`].
    pub fn fold_i<F>(self, initial: A, function: F) -> A
    where
        F: FnMut(usize, A, T) -> A,
    {
        fold_i(self.into_vec(), initial, function)
    }
}

impl<T> Collection<T> {
    /// [`fold`] with a dynamically-typed accumulator.
    pub fn fold_dynamic<F>(self, initial: Dynamic, function: F) -> Dynamic
    where
        F: FnMut(Dynamic, T) -> Dynamic,
    {
        fold(self, initial, function)
    }

    /// [`fold_i`] with a dynamically-typed accumulator.
    pub fn fold_i_dynamic<F>(self, initial: Dynamic, function: F) -> Dynamic
    where
        F: FnMut(usize, Dynamic, T) -> Dynamic,
    {
        fold_i(self, initial, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iters::{downcast, into_dynamic, lift_map};
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn fold_i_weights_by_position() {
        let weighted = fold_i(vec![10, 20, 30], 0, |index, sum, value| sum + index * value);
        assert_eq!(weighted, 80);
    }

    #[rstest]
    fn fold_entries_sums_values_in_any_order() {
        let stock = HashMap::from([("apple", 3), ("pear", 4)]);
        assert_eq!(fold_entries(stock, 0, |sum, _, count| sum + count), 7);
    }

    #[rstest]
    fn fold_str_counts_vowels() {
        let vowels = fold_str("functional", 0, |count, c| count + usize::from("aeiou".contains(c)));
        assert_eq!(vowels, 4);
    }

    #[rstest]
    fn mappable_fold_builds_another_type() {
        let joined = lift_map::<i32, String>(vec![1, 2, 3]).fold(String::new(), |text, n| text + &n.to_string());
        assert_eq!(joined, "123");
    }

    #[rstest]
    fn fold_dynamic_matches_typed_fold() {
        let total = Collection::from(vec![1_i64, 2, 3]).fold_dynamic(into_dynamic(0_i64), |sum, n| {
            into_dynamic(downcast::<i64>(sum).unwrap_or_default() + n)
        });
        assert_eq!(downcast::<i64>(total), Ok(6));
    }

    #[rstest]
    fn mappable_fold_i_matches_free_fold_i() {
        let items = vec![1_usize, 2, 3];
        let expected = fold_i(items.clone(), 0, |index, sum, n| sum + index * n);
        assert_eq!(lift_map::<usize, usize>(items).fold_i(0, |index, sum, n| sum + index * n), expected);
        assert_eq!(expected, 8);
    }

    #[rstest]
    fn fold_i_dynamic_matches_typed_fold_i() {
        let items = vec![10_usize, 20];
        let expected = fold_i(items.clone(), 0, |index, sum, n| sum + index + n);
        let total = Collection::from(items).fold_i_dynamic(into_dynamic(0_usize), |index, sum, n| {
            into_dynamic(downcast::<usize>(sum).unwrap_or_default() + index + n)
        });
        assert_eq!(downcast::<usize>(total), Ok(expected));
        assert_eq!(expected, 31);
    }
}
