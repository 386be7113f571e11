//! Filtering, de-duplication and slicing by position.

use std::hash::Hash;

use super::HashSet;
use crate::sequence::{Seq, Seq2};

impl<T: 'static> Seq<T> {
    /// Keeps the values for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            upstream.run(&mut |value| if predicate(&value) { sink(value) } else { true });
        })
    }

    /// Keeps the first occurrence of every value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let seq = Seq::from_vec(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(seq.distinct().to_vec(), vec![3, 1, 2]);
    /// ```
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.distinct_by(T::clone)
    }

    /// Keeps the first value for every distinct key produced by `key`.
    pub fn distinct_by<D, F>(&self, key: F) -> Self
    where
        D: Eq + Hash,
        F: Fn(&T) -> D + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut seen = HashSet::default();
            upstream.run(&mut |value| {
                if seen.insert(key(&value)) {
                    sink(value)
                } else {
                    true
                }
            });
        })
    }

    /// At most the first `count` values.
    ///
    /// `take(0)` never runs the upstream.
    pub fn take(&self, count: usize) -> Self {
        let upstream = self.clone();
        Self::new(move |sink| {
            if count == 0 {
                return;
            }
            let mut remaining = count;
            upstream.run(&mut |value| {
                if remaining == 0 {
                    return false;
                }
                remaining -= 1;
                sink(value) && remaining > 0
            });
        })
    }

    /// Everything after the first `count` values.
    pub fn skip(&self, count: usize) -> Self {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut skipped = 0;
            upstream.run(&mut |value| {
                if skipped < count {
                    skipped += 1;
                    true
                } else {
                    sink(value)
                }
            });
        })
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// Keeps the pairs for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&K, &V) -> bool + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            upstream.run(&mut |key, value| {
                if predicate(&key, &value) {
                    sink(key, value)
                } else {
                    true
                }
            });
        })
    }

    /// Keeps the first pair for every distinct key produced by `key`.
    pub fn distinct_by<D, F>(&self, key: F) -> Self
    where
        D: Eq + Hash,
        F: Fn(&K, &V) -> D + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Self::new(move |sink| {
            let mut seen = HashSet::default();
            upstream.run(&mut |first, second| {
                if seen.insert(key(&first, &second)) {
                    sink(first, second)
                } else {
                    true
                }
            });
        })
    }

    /// Keeps the first pair for every distinct left-hand value.
    pub fn distinct_keys(&self) -> Self
    where
        K: Eq + Hash + Clone,
    {
        self.distinct_by(|key, _| key.clone())
    }

    /// Keeps the first pair for every distinct right-hand value.
    pub fn distinct_values(&self) -> Self
    where
        V: Eq + Hash + Clone,
    {
        self.distinct_by(|_, value| value.clone())
    }

    /// At most the first `count` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::{SliceOrder, slice};
    ///
    /// let pairs = slice(vec!['a', 'b', 'c'], SliceOrder::Forward);
    /// assert_eq!(pairs.take(2).to_vec(), vec![(0, 'a'), (1, 'b')]);
    /// assert_eq!(pairs.skip(2).to_vec(), vec![(2, 'c')]);
    /// ```
    pub fn take(&self, count: usize) -> Self {
        Self::from_pairs(self.pairs().take(count))
    }

    /// Everything after the first `count` pairs.
    pub fn skip(&self, count: usize) -> Self {
        Self::from_pairs(self.pairs().skip(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(values: Vec<i32>) -> (Seq<i32>, Arc<AtomicUsize>) {
        let pulled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&pulled);
        let seq = Seq::new(move |sink: &mut dyn FnMut(i32) -> bool| {
            for value in &values {
                counter.fetch_add(1, Ordering::SeqCst);
                if !sink(*value) {
                    return;
                }
            }
        });
        (seq, pulled)
    }

    #[test]
    fn take_stops_upstream_after_last_value() {
        let (seq, pulled) = counted(vec![1, 2, 3, 4]);
        assert_eq!(seq.take(2).to_vec(), vec![1, 2]);
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn take_zero_never_runs_upstream() {
        let (seq, pulled) = counted(vec![1]);
        assert!(seq.take(0).to_vec().is_empty());
        assert_eq!(pulled.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn skip_past_the_end_is_empty() {
        assert!(Seq::from_vec(vec![1, 2]).skip(5).to_vec().is_empty());
        assert_eq!(Seq::from_vec(vec![1, 2, 3]).skip(1).to_vec(), vec![2, 3]);
    }

    #[test]
    fn distinct_set_is_per_traversal() {
        let seq = Seq::from_vec(vec![1, 1, 2]).distinct();
        assert_eq!(seq.to_vec(), vec![1, 2]);
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }

    #[test]
    fn paired_distinct_keeps_first_occurrence() {
        let seq = Seq2::from_pairs(Seq::from_vec(vec![(1, 'a'), (1, 'b'), (2, 'a')]));
        assert_eq!(seq.distinct_keys().to_vec(), vec![(1, 'a'), (2, 'a')]);
        assert_eq!(seq.distinct_values().to_vec(), vec![(1, 'a'), (1, 'b')]);
    }

    #[test]
    fn paired_filter() {
        let seq = Seq2::from_pairs(Seq::from_vec(vec![(1, 10), (2, 15), (3, 30)]));
        let multiples = seq.filter(|key, value| value % (key * 10) == 0);
        assert_eq!(multiples.to_vec(), vec![(1, 10), (3, 30)]);
    }

    #[test]
    fn paired_take_stops_upstream() {
        let (seq, pulled) = counted(vec![5, 6, 7, 8]);
        let pairs = seq.map2(|value| (value, value * 2));
        assert_eq!(pairs.take(2).to_vec(), vec![(5, 10), (6, 12)]);
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
        assert!(pairs.take(0).to_vec().is_empty());
        assert_eq!(pulled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn paired_skip_then_early_stop() {
        let pairs = Seq2::from_pairs(Seq::from_vec(vec![(0, 'a'), (1, 'b'), (2, 'c'), (3, 'd')]));
        let mut seen = Vec::new();
        pairs.skip(1).run(&mut |index, letter| {
            seen.push((index, letter));
            index < 2
        });
        assert_eq!(seen, vec![(1, 'b'), (2, 'c')]);
        assert!(pairs.skip(9).to_vec().is_empty());
    }
}
