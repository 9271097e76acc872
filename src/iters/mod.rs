//! Uniform combinators over sequences, maps, strings and channels.
//!
//! Every operation comes as a free function taking anything iterable, plus a
//! method on one of the carrier wrappers:
//!
//! - [`Collection`]: same-element-type operations (filter, search,
//!   partition, group) and the `*_dynamic` variants
//! - [`Mappable`]: transformations whose target type is fixed at the lift
//!   (map, fold, flat map)
//! - [`Grouping`] / [`Aggregable`]: keyed groups and their per-group
//!   reduction
//!
//! Map carriers use the `*_entries`, `map_keys` and `map_values` functions;
//! string carriers the `*_str` functions, which work on `char`s and index by
//! character position rather than byte offset. The channel carrier is behind
//! the `async` feature.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::iters::{self, Collection};
//!
//! let orders = Collection::from(vec![("tea", 3_u32), ("cake", 5), ("tea", 2)]);
//! let totals = orders
//!     .group_by(|(item, _)| *item)
//!     .into_aggregable::<u32>()
//!     .aggregate(|group| group.iter().map(|(_, amount)| amount).sum());
//! assert_eq!(totals["tea"], 5);
//! assert_eq!(totals["cake"], 5);
//!
//! assert_eq!(iters::map_str("abc", |c| c.to_ascii_uppercase()), "ABC");
//! ```

mod aggregate;
#[cfg(feature = "async")]
mod channel;
mod dynamic;
mod filter;
mod flat_map;
mod fold;
mod group;
mod map;
mod partition;
mod query;
mod types;

pub use aggregate::{aggregate, aggregate_i};
#[cfg(feature = "async")]
pub use channel::{filter_channel, fold_channel, into_stream, map_channel};
pub use dynamic::{Dynamic, DynamicKey, downcast, into_dynamic};
pub use filter::{filter, filter_entries, filter_i, filter_str, filter_str_i};
pub use flat_map::{flat_map, flat_map_i};
pub use fold::{fold, fold_entries, fold_i, fold_str, fold_str_i};
pub use group::{group_by, group_by_i};
pub use map::{map, map_entries, map_err, map_i, map_keys, map_str, map_str_i, map_values};
pub use partition::{partition, partition_i};
pub use query::{all, any, count, find, find_first, find_index, find_last, none};
pub use types::{Aggregable, Collection, Grouping, Mappable, lift_aggregable, lift_map, lift_slice};
