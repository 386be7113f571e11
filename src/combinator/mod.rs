//! Lazy combinators over [`Seq`](crate::sequence::Seq) and
//! [`Seq2`](crate::sequence::Seq2).
//!
//! Every combinator returns a new replayable sequence. Nothing runs until the
//! result is traversed, and per-traversal bookkeeping (the set behind
//! `distinct`, the buffer behind `order`) is rebuilt on every traversal.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::combinator::Order;
//! use lazyseq::sequence::Seq;
//!
//! let words = Seq::from_vec(vec!["pear", "fig", "apple", "fig", "kiwi"]);
//!
//! let short = words
//!     .distinct()
//!     .filter(|word| word.len() <= 4)
//!     .map(str::to_uppercase)
//!     .order(Order::Ascending);
//!
//! assert_eq!(short.to_vec(), vec!["FIG", "KIWI", "PEAR"]);
//! ```

mod aggregate;
mod collect;
mod combine;
mod filter;
mod order;
mod transform;

pub use combine::{Combined, Exhaust, Zipped, concat, concat2, zip, zip_as};
pub use order::Order;

/// Hash map produced by the `to_map*` collectors.
///
/// With the `fxhash` feature this uses `FxHasher`; otherwise the std hasher.
#[cfg(feature = "fxhash")]
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Hash map produced by the `to_map*` collectors.
///
/// With the `fxhash` feature this uses `FxHasher`; otherwise the std hasher.
#[cfg(not(feature = "fxhash"))]
pub type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "fxhash")]
type HashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fxhash"))]
type HashSet<T> = std::collections::HashSet<T>;
