//! Type class traits shared by every container in the crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: structure-preserving mapping
//! - [`Monad`]: `pure` plus `flat_map` (bind)
//!
//! `Option`, `Result`, [`Either`](crate::either::Either) (right-biased) and
//! [`Collection`](crate::iters::Collection) implement all three, so the
//! functor and monad laws are stated once and hold for each of them.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::either::Either;
//! use fpkit::typeclass::{Functor, Monad};
//!
//! let parsed: Either<String, i32> = Either::Right(20);
//! let doubled = parsed
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| if n > 0 { Either::Right(n * 2) } else { Either::Left("negative".to_string()) });
//! assert_eq!(doubled, Either::Right(42));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
