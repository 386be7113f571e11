//! # lazyseq
//!
//! Composable lazy sequences for Rust: push-style producers that can be
//! pulled on demand, guarded for single use, memoized, and generated from
//! overflow-safe integer ranges.
//!
//! ## Overview
//!
//! - **Sequences**: [`Seq`](sequence::Seq) and [`Seq2`](sequence::Seq2), replayable
//!   producers that hand values to a sink until it asks to stop
//! - **Pull**: [`pull`](pull::pull) turns any sequence into a demand-driven cursor
//! - **Guards**: `once`, `continuable_once` and `finish_once` restrict a
//!   sequence to a single pass in different ways
//! - **Cache**: record the first complete traversal, replay it afterwards
//! - **Range**: integer progressions that stop instead of wrapping around,
//!   plus closed-interval time ranges
//! - **Combinators**: map, filter, distinct, zip, concat, order, scan and friends
//!
//! ## Feature Flags
//!
//! - `guard`: Single-pass guards
//! - `cache`: Memoizing cache decorator
//! - `range`: Integer and time ranges
//! - `combinator`: Transformation, filtering, combining and ordering
//! - `tracing`: Diagnostic events through the `tracing` crate
//! - `fxhash`: Use `FxHasher` for the hash sets and maps built by combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = range(0, 100).filter(|value| value % 2 == 0).take(3);
//! assert_eq!(evens.to_vec(), vec![0, 2, 4]);
//!
//! let mut cursor = evens.iter();
//! assert_eq!(cursor.next(), Some(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence types and every enabled module's public items.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::pull::*;
    pub use crate::sequence::*;

    #[cfg(feature = "guard")]
    pub use crate::guard::*;

    #[cfg(feature = "cache")]
    pub use crate::cache::*;

    #[cfg(feature = "range")]
    pub use crate::range::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

pub mod pull;
pub mod sequence;

#[cfg(feature = "guard")]
pub mod guard;

#[cfg(feature = "cache")]
pub mod cache;

#[cfg(feature = "range")]
pub mod range;

#[cfg(feature = "combinator")]
pub mod combinator;
