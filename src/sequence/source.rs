//! Source adapters: collections, maps, channels and deferred sources.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use super::{Seq, Seq2};

/// Direction in which [`slice`] walks its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SliceOrder {
    /// First element to last.
    #[default]
    Forward,
    /// Last element to first.
    Backward,
}

/// Index/element pairs of `values`, walked in `order`.
///
/// Indices always refer to the element's position in `values`, so a backward
/// walk yields descending indices.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{SliceOrder, slice};
///
/// let seq = slice(vec!['a', 'b', 'c'], SliceOrder::Backward);
/// assert_eq!(seq.to_vec(), vec![(2, 'c'), (1, 'b'), (0, 'a')]);
/// ```
pub fn slice<T>(values: Vec<T>, order: SliceOrder) -> Seq2<usize, T>
where
    T: Clone + Send + Sync + 'static,
{
    let values: Arc<[T]> = values.into();
    Seq2::new(move |sink| walk(&values, order, sink))
}

/// The elements of `values`, walked in `order`.
pub fn slice_elem<T>(values: Vec<T>, order: SliceOrder) -> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    slice(values, order).values()
}

/// The indices of `values`, walked in `order`.
pub fn slice_idx<T>(values: Vec<T>, order: SliceOrder) -> Seq<usize>
where
    T: Clone + Send + Sync + 'static,
{
    slice(values, order).keys()
}

fn walk<T: Clone>(values: &[T], order: SliceOrder, sink: &mut dyn FnMut(usize, T) -> bool) {
    match order {
        SliceOrder::Forward => {
            for (index, value) in values.iter().enumerate() {
                if !sink(index, value.clone()) {
                    return;
                }
            }
        }
        SliceOrder::Backward => {
            for (index, value) in values.iter().enumerate().rev() {
                if !sink(index, value.clone()) {
                    return;
                }
            }
        }
    }
}

/// Key/value pairs of `map`, in the map's iteration order.
pub fn map_entries<K, V>(map: HashMap<K, V>) -> Seq2<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let map = Arc::new(map);
    Seq2::new(move |sink| {
        for (key, value) in map.iter() {
            if !sink(key.clone(), value.clone()) {
                return;
            }
        }
    })
}

/// Keys of `map`.
pub fn map_keys<K, V>(map: HashMap<K, V>) -> Seq<K>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    map_entries(map).keys()
}

/// Values of `map`.
pub fn map_values<K, V>(map: HashMap<K, V>) -> Seq<V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    map_entries(map).values()
}

/// Values received from `receiver` until every sender has disconnected.
///
/// The channel is drained as it is traversed, so a second traversal only
/// sees values sent after the first one stopped.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::channel;
///
/// let (sender, receiver) = crossbeam_channel::unbounded();
/// for value in 0..3 {
///     sender.send(value).unwrap();
/// }
/// drop(sender);
///
/// assert_eq!(channel(receiver).to_vec(), vec![0, 1, 2]);
/// ```
pub fn channel<T>(receiver: Receiver<T>) -> Seq<T>
where
    T: Send + 'static,
{
    Seq::new(move |sink| {
        for value in &receiver {
            if !sink(value) {
                return;
            }
        }
    })
}

/// A sequence that re-evaluates `factory` at the start of every traversal.
///
/// Useful when the backing collection changes between traversals.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::source;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let length = Arc::new(AtomicUsize::new(2));
/// let shared = Arc::clone(&length);
/// let seq = source(move || 0..shared.load(Ordering::SeqCst));
///
/// assert_eq!(seq.to_vec(), vec![0, 1]);
/// length.store(4, Ordering::SeqCst);
/// assert_eq!(seq.to_vec(), vec![0, 1, 2, 3]);
/// ```
pub fn source<T, I, F>(factory: F) -> Seq<T>
where
    F: Fn() -> I + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    Seq::new(move |sink| {
        for value in factory() {
            if !sink(value) {
                return;
            }
        }
    })
}

/// The paired counterpart of [`source`].
pub fn source2<K, V, I, F>(factory: F) -> Seq2<K, V>
where
    F: Fn() -> I + Send + Sync + 'static,
    I: IntoIterator<Item = (K, V)>,
{
    Seq2::new(move |sink| {
        for (key, value) in factory() {
            if !sink(key, value) {
                return;
            }
        }
    })
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// The first component of every pair.
    pub fn keys(&self) -> Seq<K> {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.run(&mut |key, _| sink(key)))
    }

    /// The second component of every pair.
    pub fn values(&self) -> Seq<V> {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.run(&mut |_, value| sink(value)))
    }
}
