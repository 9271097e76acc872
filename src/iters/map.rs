//! Element-wise transformation over every carrier.
//!
//! Sequence maps preserve length and order. `map_err` is the fallible
//! variant: it stops at the first failing element and returns that error,
//! never a partial sequence.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use super::dynamic::Dynamic;
use super::types::{Collection, Mappable};

// =============================================================================
// Sequences
// =============================================================================

/// Transforms each element.
///
/// ```rust
/// use fpkit::iters;
///
/// assert_eq!(iters::map(vec![1, 2, 3], |n| n * n), [1, 4, 9]);
/// ```
pub fn map<T, R, I, F>(items: I, function: F) -> Collection<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
{
    items.into_iter().map(function).collect()
}

/// Transforms each element together with its position.
pub fn map_i<T, R, I, F>(items: I, mut function: F) -> Collection<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(usize, T) -> R,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| function(index, value))
        .collect()
}

/// Transforms each element with a fallible function.
///
/// Elements are visited in order. The first `Err` is returned unchanged and
/// no later element is visited.
///
/// # Errors
///
/// Returns the error produced by the first failing element.
///
/// ```rust
/// use fpkit::iters;
///
/// let parsed = iters::map_err(vec!["1", "2", "x"], |text| text.parse::<i32>());
/// assert!(parsed.is_err());
/// ```
pub fn map_err<T, R, E, I, F>(items: I, mut function: F) -> Result<Collection<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<R, E>,
{
    let iterator = items.into_iter();
    let mut mapped = Vec::with_capacity(iterator.size_hint().0);
    for (index, value) in iterator.enumerate() {
        match function(value) {
            Ok(result) => mapped.push(result),
            Err(error) => {
                trace!(index, "map_err stopped at failing element");
                return Err(error);
            }
        }
    }
    Ok(Collection::new(mapped))
}

// =============================================================================
// Key/value maps
// =============================================================================

/// Rebuilds a map from transformed key/value pairs.
///
/// If two entries map to the same new key, the one visited last wins; the
/// visiting order of a `HashMap` is unspecified.
pub fn map_entries<K, V, NK, NV, I, F>(entries: I, mut function: F) -> HashMap<NK, NV>
where
    I: IntoIterator<Item = (K, V)>,
    NK: Eq + Hash,
    F: FnMut(K, V) -> (NK, NV),
{
    entries
        .into_iter()
        .map(|(key, value)| function(key, value))
        .collect()
}

/// Transforms the keys of a map, keeping the values.
pub fn map_keys<K, V, NK, I, F>(entries: I, mut function: F) -> HashMap<NK, V>
where
    I: IntoIterator<Item = (K, V)>,
    NK: Eq + Hash,
    F: FnMut(K) -> NK,
{
    entries
        .into_iter()
        .map(|(key, value)| (function(key), value))
        .collect()
}

/// Transforms the values of a map, keeping the keys.
pub fn map_values<K, V, NV, I, F>(entries: I, mut function: F) -> HashMap<K, NV>
where
    I: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
    F: FnMut(V) -> NV,
{
    entries
        .into_iter()
        .map(|(key, value)| (key, function(value)))
        .collect()
}

// =============================================================================
// Strings
// =============================================================================

/// Transforms each character of `text`.
///
/// ```rust
/// use fpkit::iters;
///
/// assert_eq!(iters::map_str("héllo", |c| c.to_ascii_uppercase()), "HéLLO");
/// ```
pub fn map_str<F>(text: &str, function: F) -> String
where
    F: FnMut(char) -> char,
{
    text.chars().map(function).collect()
}

/// Transforms each character of `text` together with its character position.
pub fn map_str_i<F>(text: &str, mut function: F) -> String
where
    F: FnMut(usize, char) -> char,
{
    text.chars()
        .enumerate()
        .map(|(index, character)| function(index, character))
        .collect()
}

// =============================================================================
// Method forms
// =============================================================================

impl<T, R> Mappable<T, R> {
    /// See [`map`].
    pub fn map<F>(self, function: F) -> Collection<R>
    where
        F: FnMut(T) -> R,
    {
        map(self.into_vec(), function)
    }

    /// See [`map_i`].
    pub fn map_i<F>(self, function: F) -> Collection<R>
    where
        F: FnMut(usize, T) -> R,
    {
        map_i(self.into_vec(), function)
    }

    /// See [`map_err`].
    ///
    /// # Errors
    ///
    /// Returns the error produced by the first failing element.
    pub fn map_err<E, F>(self, function: F) -> Result<Collection<R>, E>
    where
        F: FnMut(T) -> Result<R, E>,
    {
        map_err(self.into_vec(), function)
    }
}

impl<T> Collection<T> {
    /// [`map`] into dynamically-typed elements.
    pub fn map_dynamic<F>(self, function: F) -> Collection<Dynamic>
    where
        F: FnMut(T) -> Dynamic,
    {
        map(self, function)
    }

    /// [`map_i`] into dynamically-typed elements.
    pub fn map_i_dynamic<F>(self, function: F) -> Collection<Dynamic>
    where
        F: FnMut(usize, T) -> Dynamic,
    {
        map_i(self, function)
    }

    /// [`map_err`] into dynamically-typed elements.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the first failing element.
    pub fn map_err_dynamic<E, F>(self, function: F) -> Result<Collection<Dynamic>, E>
    where
        F: FnMut(T) -> Result<Dynamic, E>,
    {
        map_err(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iters::{downcast, into_dynamic, lift_map};
    use rstest::rstest;

    #[rstest]
    fn map_i_passes_positions() {
        let labelled = map_i(vec!["a", "b"], |index, value| format!("{index}:{value}"));
        assert_eq!(labelled, ["0:a".to_string(), "1:b".to_string()]);
    }

    #[rstest]
    fn map_err_never_returns_a_partial_sequence() {
        let mut visited = Vec::new();
        let result = map_err(vec![1, 2, 3], |n| {
            visited.push(n);
            if n == 2 { Err("two") } else { Ok(n * 10) }
        });
        assert_eq!(result, Err("two"));
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn map_err_collects_every_success() {
        let result: Result<_, String> = map_err(vec![1, 2, 3], |n| Ok(n + 1));
        assert_eq!(result, Ok(Collection::from(vec![2, 3, 4])));
    }

    #[rstest]
    fn map_entries_rewrites_both_sides() {
        let prices = HashMap::from([("apple", 2), ("pear", 3)]);
        let doubled = map_entries(prices, |name, price| (name.len(), price * 2));
        assert_eq!(doubled, HashMap::from([(5, 4), (4, 6)]));
    }

    #[rstest]
    fn map_keys_and_values_touch_one_side() {
        let entries = HashMap::from([(1, "one")]);
        assert_eq!(map_keys(entries.clone(), |key| key * 10), HashMap::from([(10, "one")]));
        assert_eq!(map_values(entries, str::len), HashMap::from([(1, 3)]));
    }

    #[rstest]
    fn map_str_i_indexes_characters_not_bytes() {
        let result = map_str_i("aéb", |index, character| if index == 2 { 'X' } else { character });
        assert_eq!(result, "aéX");
    }

    #[rstest]
    fn mappable_map_uses_its_target_type() {
        let lengths: Collection<usize> = Mappable::<&str, usize>::from(vec!["ab", "c"]).map(str::len);
        assert_eq!(lengths, [2, 1]);
    }

    #[rstest]
    fn map_dynamic_matches_typed_map() {
        let values = Collection::from(vec![1, 2]).map_dynamic(|n| into_dynamic(n * 3));
        let recovered: Vec<i32> = values.into_iter().filter_map(|value| downcast::<i32>(value).ok()).collect();
        assert_eq!(recovered, vec![3, 6]);
    }

    #[rstest]
    fn mappable_map_err_stops_at_the_failing_element() {
        let mut visited = Vec::new();
        let result = lift_map::<i32, i32>(vec![1, 2, 3]).map_err(|n| {
            visited.push(n);
            if n == 2 { Err("two") } else { Ok(n * 10) }
        });
        assert_eq!(result, Err("two"));
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn map_err_dynamic_never_returns_a_partial_sequence() {
        let mut visited = Vec::new();
        let result = Collection::from(vec![1, 2, 3]).map_err_dynamic(|n| {
            visited.push(n);
            if n == 2 { Err("two") } else { Ok(into_dynamic(n)) }
        });
        assert!(matches!(result, Err("two")));
        assert_eq!(visited, vec![1, 2]);
    }

    #[rstest]
    fn map_err_dynamic_collects_every_success() {
        let result = Collection::from(vec![1, 2, 3]).map_err_dynamic(|n| Ok::<_, String>(into_dynamic(n + 1)));
        let recovered: Vec<i32> = result
            .map(|values| values.into_iter().filter_map(|value| downcast::<i32>(value).ok()).collect())
            .unwrap_or_default();
        assert_eq!(recovered, vec![2, 3, 4]);
    }

    #[rstest]
    fn mappable_map_i_matches_free_map_i() {
        let items = vec![1_usize, 2, 3];
        let expected = map_i(items.clone(), |index, n| index + n);
        assert_eq!(lift_map::<usize, usize>(items).map_i(|index, n| index + n), expected);
        assert_eq!(expected, [1, 3, 5]);
    }
}
