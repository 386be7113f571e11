//! Single-pass guards.
//!
//! Plain sequences are replayable: each traversal starts over. The guards in
//! this module wrap a sequence so that its elements are delivered only once:
//!
//! | Guard                  | Early stop                    | Concurrent traversals       |
//! |------------------------|-------------------------------|-----------------------------|
//! | [`once`]               | uses the sequence up          | one wins, the others get nothing |
//! | [`continuable_once`]   | next traversal resumes        | one at a time               |
//! | [`finish_once`]        | next traversal resumes        | elements are split between them |
//!
//! Misusing a guard never fails loudly: a traversal that is not allowed to
//! see anything simply yields nothing.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::guard::continuable_once;
//! use lazyseq::sequence::Seq;
//!
//! let batches = continuable_once(Seq::from_vec((1..=7).collect::<Vec<i32>>()));
//!
//! let mut sizes = Vec::new();
//! loop {
//!     let batch: Vec<i32> = batches.iter().take(3).collect();
//!     if batch.is_empty() {
//!         break;
//!     }
//!     sizes.push(batch.len());
//! }
//! assert_eq!(sizes, vec![3, 3, 1]);
//! ```

mod continuable;
mod finish;
mod once;

pub use continuable::{continuable_once, continuable_once2};
pub use finish::{finish_once, finish_once2};
pub use once::{OnceGuard, once, once2};

use crate::sequence::{Seq, Seq2};

impl<T: 'static> Seq<T> {
    /// See [`once`].
    pub fn once(&self) -> Self {
        once(self.clone())
    }
}

impl<T: Send + 'static> Seq<T> {
    /// See [`continuable_once`].
    pub fn continuable_once(&self) -> Self {
        continuable_once(self.clone())
    }

    /// See [`finish_once`].
    pub fn finish_once(&self) -> Self {
        finish_once(self.clone())
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// See [`once2`].
    pub fn once(&self) -> Self {
        once2(self.clone())
    }
}

impl<K: Send + 'static, V: Send + 'static> Seq2<K, V> {
    /// See [`continuable_once2`].
    pub fn continuable_once(&self) -> Self {
        continuable_once2(self.clone())
    }

    /// See [`finish_once2`].
    pub fn finish_once(&self) -> Self {
        finish_once2(self.clone())
    }
}
