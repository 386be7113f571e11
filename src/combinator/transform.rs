//! Element-wise transformations between `Seq` and `Seq2`.

use super::Combined;
use crate::sequence::{Seq, Seq2};

impl<T: 'static> Seq<T> {
    /// Applies `function` to every value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let doubled = Seq::from_vec(vec![1, 2, 3]).map(|value| value * 2);
    /// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.run(&mut |value| sink(function(value))))
    }

    /// Splits every value into a pair.
    pub fn map2<K, V, F>(&self, function: F) -> Seq2<K, V>
    where
        K: 'static,
        V: 'static,
        F: Fn(T) -> (K, V) + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Seq2::new(move |sink| {
            upstream.run(&mut |value| {
                let (key, value) = function(value);
                sink(key, value)
            });
        })
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// Applies `function` to every pair.
    pub fn map<K2, V2, F>(&self, function: F) -> Seq2<K2, V2>
    where
        K2: 'static,
        V2: 'static,
        F: Fn(K, V) -> (K2, V2) + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Seq2::new(move |sink| {
            upstream.run(&mut |key, value| {
                let (key, value) = function(key, value);
                sink(key, value)
            });
        })
    }

    /// Folds every pair into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{SliceOrder, slice};
    ///
    /// let labels = slice(vec!["a", "b"], SliceOrder::Forward)
    ///     .map1(|index, name| format!("{index}:{name}"));
    /// assert_eq!(labels.to_vec(), vec!["0:a", "1:b"]);
    /// ```
    pub fn map1<U, F>(&self, function: F) -> Seq<U>
    where
        U: 'static,
        F: Fn(K, V) -> U + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| upstream.run(&mut |key, value| sink(function(key, value))))
    }

    /// Exchanges the two halves of every pair.
    pub fn swap(&self) -> Seq2<V, K> {
        self.map(|key, value| (value, key))
    }

    /// Packs every pair into a [`Combined`].
    pub fn combine(&self) -> Seq<Combined<K, V>> {
        self.map1(|first, second| Combined { first, second })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn map_is_lazy_and_replayable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mapped = Seq::from_vec(vec![1, 2]).map(move |value| {
            counter.fetch_add(1, Ordering::SeqCst);
            value + 1
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(mapped.to_vec(), vec![2, 3]);
        assert_eq!(mapped.to_vec(), vec![2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn map2_then_map1_restores_values() {
        let seq = Seq::from_vec(vec![3, 4]).map2(|value| (value, value * value));
        assert_eq!(seq.to_vec(), vec![(3, 9), (4, 16)]);
        assert_eq!(seq.map1(|root, square| square - root).to_vec(), vec![6, 12]);
    }

    #[test]
    fn swap_and_combine() {
        let seq = Seq2::from_pairs(Seq::from_vec(vec![(1, 'x')]));
        assert_eq!(seq.swap().to_vec(), vec![('x', 1)]);
        assert_eq!(
            seq.combine().to_vec(),
            vec![Combined {
                first: 1,
                second: 'x'
            }]
        );
    }

    #[test]
    fn map_stops_with_downstream() {
        let mut seen = Vec::new();
        Seq::from_vec(vec![1, 2, 3]).map(|value| value * 10).run(&mut |value| {
            seen.push(value);
            false
        });
        assert_eq!(seen, vec![10]);
    }
}
