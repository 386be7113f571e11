//! The sequence protocol.
//!
//! A [`Seq<T>`] is a cooperative producer: running it hands every value, in
//! order, to a caller-supplied sink callback until either the source is
//! exhausted or the sink returns `false` to request an early stop.
//! [`Seq2<K, V>`] is the two-valued analogue used for indexed and keyed data.
//!
//! Sequences are cheap to clone (the producer is shared behind an `Arc`) and
//! are replayable by convention: each call to [`Seq::run`] is an independent
//! traversal. The single-pass guards in [`crate::guard`] are the exception.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::sequence::Seq;
//!
//! let numbers = Seq::new(|sink: &mut dyn FnMut(i32) -> bool| {
//!     for value in 1..=5 {
//!         if !sink(value) {
//!             return;
//!         }
//!     }
//! });
//!
//! let mut seen = Vec::new();
//! numbers.run(&mut |value| {
//!     seen.push(value);
//!     value < 3
//! });
//! assert_eq!(seen, vec![1, 2, 3]);
//!
//! // A second run is an independent traversal.
//! assert_eq!(numbers.to_vec(), vec![1, 2, 3, 4, 5]);
//! ```

mod source;

pub use source::{
    SliceOrder, channel, map_entries, map_keys, map_values, slice, slice_elem, slice_idx,
    source, source2,
};

use std::fmt;
use std::sync::Arc;

type Producer<T> = dyn Fn(&mut dyn FnMut(T) -> bool) + Send + Sync;
type PairProducer<K, V> = dyn Fn(&mut dyn FnMut(K, V) -> bool) + Send + Sync;

/// A lazily evaluated, replayable sequence of values.
///
/// The producer receives a sink and must stop calling it as soon as it
/// returns `false`.
pub struct Seq<T> {
    producer: Arc<Producer<T>>,
}

impl<T> Seq<T> {
    /// Creates a sequence from a producer closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let letters = Seq::new(|sink: &mut dyn FnMut(char) -> bool| {
    ///     let _ = sink('a') && sink('b');
    /// });
    /// assert_eq!(letters.to_vec(), vec!['a', 'b']);
    /// ```
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(&mut dyn FnMut(T) -> bool) + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Runs one traversal, handing each value to `sink` until it returns `false`.
    #[inline]
    pub fn run(&self, sink: &mut dyn FnMut(T) -> bool) {
        (self.producer)(sink);
    }

    /// Runs one full traversal, calling `action` for every value.
    pub fn for_each<A>(&self, mut action: A)
    where
        A: FnMut(T),
    {
        self.run(&mut |value| {
            action(value);
            true
        });
    }

    /// Runs one traversal that continues while `action` returns `true`.
    ///
    /// Returns `false` if the traversal was cut short by `action`.
    pub fn for_each_while<A>(&self, mut action: A) -> bool
    where
        A: FnMut(T) -> bool,
    {
        let mut completed = true;
        self.run(&mut |value| {
            if action(value) {
                true
            } else {
                completed = false;
                false
            }
        });
        completed
    }
}

impl<T: 'static> Seq<T> {
    /// A sequence that never yields.
    pub fn empty() -> Self {
        Self::new(|_| {})
    }

    /// A sequence that yields exactly one clone of `value` per traversal.
    pub fn single(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move |sink| {
            sink(value.clone());
        })
    }

    /// A sequence over the elements of `values`, cloned on every traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let seq = Seq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone + Send + Sync,
    {
        let values: Arc<[T]> = values.into();
        Self::new(move |sink| {
            for value in values.iter() {
                if !sink(value.clone()) {
                    return;
                }
            }
        })
    }

    /// Collects one traversal into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::new();
        self.for_each(|value| values.push(value));
        values
    }
}

impl<T: Clone + Send + Sync + 'static> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Seq<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Seq").finish_non_exhaustive()
    }
}

/// A lazily evaluated, replayable sequence of key/value pairs.
pub struct Seq2<K, V> {
    producer: Arc<PairProducer<K, V>>,
}

impl<K, V> Seq2<K, V> {
    /// Creates a paired sequence from a producer closure.
    pub fn new<F>(producer: F) -> Self
    where
        F: Fn(&mut dyn FnMut(K, V) -> bool) + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(producer),
        }
    }

    /// Runs one traversal, handing each pair to `sink` until it returns `false`.
    #[inline]
    pub fn run(&self, sink: &mut dyn FnMut(K, V) -> bool) {
        (self.producer)(sink);
    }

    /// Runs one full traversal, calling `action` for every pair.
    pub fn for_each<A>(&self, mut action: A)
    where
        A: FnMut(K, V),
    {
        self.run(&mut |key, value| {
            action(key, value);
            true
        });
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// A paired sequence that never yields.
    pub fn empty() -> Self {
        Self::new(|_| {})
    }

    /// Views this paired sequence as a sequence of tuples.
    ///
    /// Every paired operation in this crate is built on this view, so the
    /// single-valued machinery is written exactly once.
    pub fn pairs(&self) -> Seq<(K, V)> {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.run(&mut |key, value| sink((key, value))))
    }

    /// Builds a paired sequence from a sequence of tuples.
    pub fn from_pairs(pairs: Seq<(K, V)>) -> Self {
        Self::new(move |sink| pairs.run(&mut |(key, value)| sink(key, value)))
    }

    /// Collects one traversal into a `Vec` of tuples.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        let mut pairs = Vec::new();
        self.for_each(|key, value| pairs.push((key, value)));
        pairs
    }
}

impl<K, V> Clone for Seq2<K, V> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<K, V> fmt::Debug for Seq2<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Seq2").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Seq<std::rc::Rc<i32>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Seq2<String, Vec<u8>>: Send, Sync, Clone);
