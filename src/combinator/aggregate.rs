//! Counting and folding.

use crate::sequence::{Seq, Seq2};

impl<T: 'static> Seq<T> {
    /// Number of values in one full traversal.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_| count += 1);
        count
    }

    /// Reduces one full traversal to a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::range::range;
    ///
    /// assert_eq!(range(0, 11).fold(0, |sum, value| sum + value), 55);
    /// ```
    pub fn fold<A, F>(&self, init: A, mut function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        // `function` consumes the accumulator, and an `FnMut` sink cannot move
        // out of its capture, so the value is parked in an `Option` between calls.
        let mut accumulator = Some(init);
        self.for_each(|value| {
            accumulator = accumulator.take().map(|current| function(current, value));
        });
        match accumulator {
            Some(result) => result,
            None => unreachable!("fold accumulator is restored after every value"),
        }
    }

    /// Running folds: yields the accumulator after every value.
    ///
    /// Each traversal starts again from a clone of `init`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let totals = Seq::from_vec(vec![1, 2, 3, 4]).scan(0, |sum, value| sum + value);
    /// assert_eq!(totals.to_vec(), vec![1, 3, 6, 10]);
    /// ```
    pub fn scan<A, F>(&self, init: A, function: F) -> Seq<A>
    where
        A: Clone + Send + Sync + 'static,
        F: Fn(A, T) -> A + Send + Sync + 'static,
    {
        let upstream = self.clone();
        Seq::new(move |sink| {
            let mut accumulator = init.clone();
            upstream.run(&mut |value| {
                accumulator = function(accumulator.clone(), value);
                sink(accumulator.clone())
            });
        })
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// Number of pairs in one full traversal.
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.for_each(|_, _| count += 1);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_fold_of_empty() {
        assert_eq!(Seq::<i32>::empty().count(), 0);
        assert_eq!(Seq2::<i32, i32>::empty().count(), 0);
        assert_eq!(Seq::<i32>::empty().fold(7, |sum, value| sum + value), 7);
    }

    #[test]
    fn fold_keeps_order() {
        let joined = Seq::from_vec(vec!["a", "b", "c"]).fold(String::new(), |mut text, part| {
            text.push_str(part);
            text
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn scan_restarts_each_traversal() {
        let running = Seq::from_vec(vec![2, 3]).scan(1, |product, value| product * value);
        assert_eq!(running.to_vec(), vec![2, 6]);
        assert_eq!(running.to_vec(), vec![2, 6]);
    }
}
