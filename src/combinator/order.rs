//! Sorting and reversal.
//!
//! Every ordering combinator buffers one full upstream traversal, sorts (or
//! reverses) the buffer and then yields from it lazily, so an early stop still
//! skips the rest of the yield loop. The buffer is rebuilt on every traversal.

use std::cmp::Ordering;

use crate::sequence::{Seq, Seq2};

/// Sort direction for [`Seq::order`] and the paired variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl Order {
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Clone, Copy)]
enum Stability {
    Stable,
    Unstable,
}

fn sorted_by<T: 'static, C>(upstream: &Seq<T>, stability: Stability, compare: &C) -> Vec<T>
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut buffer = upstream.to_vec();
    match stability {
        Stability::Stable => buffer.sort_by(compare),
        Stability::Unstable => buffer.sort_unstable_by(compare),
    }
    buffer
}

fn ordered<T, C>(upstream: Seq<T>, stability: Stability, compare: C) -> Seq<T>
where
    T: 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    Seq::new(move |sink| {
        for value in sorted_by(&upstream, stability, &compare) {
            if !sink(value) {
                return;
            }
        }
    })
}

impl<T: 'static> Seq<T> {
    /// The values sorted in `order`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::combinator::Order;
    /// use lazyseq::sequence::Seq;
    ///
    /// let seq = Seq::from_vec(vec![2, 3, 1]);
    /// assert_eq!(seq.order(Order::Ascending).to_vec(), vec![1, 2, 3]);
    /// assert_eq!(seq.order(Order::Descending).to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn order(&self, order: Order) -> Self
    where
        T: Ord,
    {
        ordered(self.clone(), Stability::Unstable, move |left, right| {
            order.apply(left.cmp(right))
        })
    }

    /// The values sorted by `compare`. Equal values may be reordered.
    pub fn order_by<C>(&self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        ordered(self.clone(), Stability::Unstable, compare)
    }

    /// The values sorted by `compare`, keeping equal values in upstream order.
    pub fn stable_order_by<C>(&self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        ordered(self.clone(), Stability::Stable, compare)
    }

    /// The values in reverse upstream order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let seq = Seq::from_vec(vec![1, 2, 3]);
    /// assert_eq!(seq.reverse().to_vec(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&self) -> Self {
        let upstream = self.clone();
        Self::new(move |sink| {
            for value in upstream.to_vec().into_iter().rev() {
                if !sink(value) {
                    return;
                }
            }
        })
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// The pairs sorted by their left-hand value.
    pub fn order_keys(&self, order: Order) -> Self
    where
        K: Ord,
    {
        self.order_by(move |left, right| order.apply(left.0.cmp(&right.0)))
    }

    /// The pairs sorted by their right-hand value.
    pub fn order_values(&self, order: Order) -> Self
    where
        V: Ord,
    {
        self.order_by(move |left, right| order.apply(left.1.cmp(&right.1)))
    }

    /// The pairs sorted by `compare`. Equal pairs may be reordered.
    pub fn order_by<C>(&self, compare: C) -> Self
    where
        C: Fn(&(K, V), &(K, V)) -> Ordering + Send + Sync + 'static,
    {
        Self::from_pairs(ordered(self.pairs(), Stability::Unstable, compare))
    }

    /// The pairs sorted by `compare`, keeping equal pairs in upstream order.
    pub fn stable_order_by<C>(&self, compare: C) -> Self
    where
        C: Fn(&(K, V), &(K, V)) -> Ordering + Send + Sync + 'static,
    {
        Self::from_pairs(ordered(self.pairs(), Stability::Stable, compare))
    }

    /// The pairs in reverse upstream order.
    pub fn reverse(&self) -> Self {
        Self::from_pairs(self.pairs().reverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_order_keeps_ties_in_place() {
        let seq = Seq::from_vec(vec![(1, 'b'), (0, 'z'), (1, 'a')]);
        let sorted = seq.stable_order_by(|left, right| left.0.cmp(&right.0));
        assert_eq!(sorted.to_vec(), vec![(0, 'z'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn paired_order_by_key_and_value() {
        let seq = Seq2::from_pairs(Seq::from_vec(vec![("bob", 2), ("eve", 3), ("alice", 1)]));
        assert_eq!(
            seq.order_keys(Order::Descending).to_vec(),
            vec![("eve", 3), ("bob", 2), ("alice", 1)]
        );
        assert_eq!(
            seq.order_values(Order::Ascending).to_vec(),
            vec![("alice", 1), ("bob", 2), ("eve", 3)]
        );
    }

    #[test]
    fn early_stop_after_sorting() {
        let mut seen = Vec::new();
        Seq::from_vec(vec![5, 4, 3]).order(Order::Ascending).run(&mut |value| {
            seen.push(value);
            false
        });
        assert_eq!(seen, vec![3]);
    }

    #[test]
    fn reverse_stops_early() {
        let mut seen = Vec::new();
        Seq::from_vec(vec![1, 2, 3, 4, 5]).reverse().run(&mut |value| {
            if value < 3 {
                return false;
            }
            seen.push(value);
            true
        });
        assert_eq!(seen, vec![5, 4, 3]);
    }

    #[test]
    fn paired_reverse_keeps_pairs_together() {
        let seq = Seq2::from_pairs(Seq::from_vec(vec![(0, 'a'), (1, 'b'), (2, 'c')]));
        assert_eq!(seq.reverse().to_vec(), vec![(2, 'c'), (1, 'b'), (0, 'a')]);
        assert!(Seq2::<u8, u8>::empty().reverse().to_vec().is_empty());
    }
}
