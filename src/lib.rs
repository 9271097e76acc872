//! # fpkit
//!
//! Functional combinators for everyday Rust values.
//!
//! ## Overview
//!
//! - **Option and Result**: extension traits ([`OptionExt`](option::OptionExt),
//!   [`ResultExt`](result::ResultExt)) and free functions that add
//!   two-sided matching, lazy defaults and monadic binding to the standard
//!   types
//! - **Either**: a left/right sum type with no success or failure meaning
//!   attached to either side
//! - **Collection combinators**: map, filter, fold, search, partition, group
//!   and aggregate over sequences, maps, strings and `tokio` channels
//! - **Type Classes**: `Functor` and `Monad`, implemented by every container
//!   above
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `TypeConstructor`, `Functor`, `Monad`
//! - `async` (default): channel combinators on `tokio::sync::mpsc`
//! - `serde`: `Serialize`/`Deserialize` for `Either`, `Collection` and
//!   `Grouping`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let port = Some("8080")
//!     .bind(|text| text.parse::<u16>().ok())
//!     .keep_if(|port| *port >= 1024)
//!     .get_or_else(|| 3000);
//! assert_eq!(port, 8080);
//!
//! let (short, long) = lift_slice(vec!["ox", "yak", "gnu", "bison"]).partition(|name| name.len() < 3);
//! assert_eq!(short, ["ox"]);
//! assert_eq!(long, ["yak", "gnu", "bison"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the extension traits, `Either`, the carrier wrappers and,
/// when enabled, the type classes.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::DowncastError;
    pub use crate::iters::{Aggregable, Collection, Grouping, Mappable, lift_aggregable, lift_map, lift_slice};
    pub use crate::option::OptionExt;
    pub use crate::result::{BoxError, Fallible, ResultExt};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod either;
pub mod error;
pub mod iters;
pub mod option;
pub mod result;

#[cfg(feature = "typeclass")]
pub mod typeclass;
