//! Grouping elements under a derived key.

use std::hash::Hash;

use super::dynamic::DynamicKey;
use super::types::{Collection, Grouping};

/// Groups `items` by the key `function` derives from each element.
///
/// Within a group, elements keep their source order.
///
/// ```rust
/// use fpkit::iters;
///
/// let parity = iters::group_by(1..=6, |n| n % 2 == 0);
/// assert_eq!(parity[&false], vec![1, 3, 5]);
/// assert_eq!(parity[&true], vec![2, 4, 6]);
/// ```
pub fn group_by<T, K, I, F>(items: I, mut function: F) -> Grouping<K, T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups = Grouping::default();
    for value in items {
        groups.push(function(&value), value);
    }
    groups
}

/// Groups `items` by a key derived from each element and its position.
pub fn group_by_i<T, K, I, F>(items: I, mut function: F) -> Grouping<K, T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(usize, &T) -> K,
{
    let mut groups = Grouping::default();
    for (index, value) in items.into_iter().enumerate() {
        groups.push(function(index, &value), value);
    }
    groups
}

impl<T> Collection<T> {
    /// See [`group_by`].
    pub fn group_by<K, F>(self, function: F) -> Grouping<K, T>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        group_by(self, function)
    }

    /// See [`group_by_i`].
    pub fn group_by_i<K, F>(self, function: F) -> Grouping<K, T>
    where
        K: Eq + Hash,
        F: FnMut(usize, &T) -> K,
    {
        group_by_i(self, function)
    }

    /// [`group_by`] under dynamically-typed keys.
    pub fn group_by_dynamic<F>(self, function: F) -> Grouping<DynamicKey, T>
    where
        F: FnMut(&T) -> DynamicKey,
    {
        group_by(self, function)
    }

    /// [`group_by_i`] under dynamically-typed keys.
    pub fn group_by_i_dynamic<F>(self, function: F) -> Grouping<DynamicKey, T>
    where
        F: FnMut(usize, &T) -> DynamicKey,
    {
        group_by_i(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn group_by_keeps_source_order_within_groups() {
        let words = vec!["apple", "avocado", "banana", "apricot", "blueberry"];
        let by_initial = group_by(words, |word| word.chars().next());
        assert_eq!(
            by_initial,
            [
                (Some('a'), vec!["apple", "avocado", "apricot"]),
                (Some('b'), vec!["banana", "blueberry"]),
            ]
        );
    }

    #[rstest]
    fn group_by_i_buckets_by_position() {
        let buckets = group_by_i(vec![10, 11, 12, 13, 14], |index, _| index / 2);
        assert_eq!(buckets, [(0, vec![10, 11]), (1, vec![12, 13]), (2, vec![14])]);
    }

    #[rstest]
    fn group_by_of_empty_input_has_no_groups() {
        assert!(group_by(Vec::<i32>::new(), |n| *n).is_empty());
    }

    #[rstest]
    fn group_by_dynamic_matches_typed_grouping() {
        let groups = Collection::from(vec![1, 2, 3, 4]).group_by_dynamic(|n| DynamicKey::new(n % 2 == 0));
        assert_eq!(groups.get(&DynamicKey::new(true)), Some(&vec![2, 4]));
        assert_eq!(groups.get(&DynamicKey::new(false)), Some(&vec![1, 3]));
    }
}
