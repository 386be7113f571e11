//! Zipping and concatenation.
//!
//! [`zip`] and [`zip_as`] advance two sequences in lock-step. A push-style
//! sequence cannot be interleaved with another one, so both sides are driven
//! through their own [`pull`] cursor, and both cursors are released when the
//! traversal ends, however it ends.

use crate::pull::pull;
use crate::sequence::{Seq, Seq2};

/// Two values travelling together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Combined<A, B> {
    /// Left-hand value.
    pub first: A,
    /// Right-hand value.
    pub second: B,
}

/// One step of [`zip_as`]: the value pulled from each side, if that side
/// still had one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zipped<A, B> {
    /// Value from the first sequence, `None` once it is exhausted.
    pub first: Option<A>,
    /// Value from the second sequence, `None` once it is exhausted.
    pub second: Option<B>,
}

/// When [`zip_as`] ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Exhaust {
    /// As soon as either side is exhausted.
    #[default]
    Shortest,
    /// Only once both sides are exhausted.
    Longest,
}

/// Pairs up the i-th values of `first` and `second`, stopping at the shorter.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::{Combined, zip};
/// use lazyseq::sequence::Seq;
///
/// let zipped = zip(Seq::from_vec(vec![1, 2, 3]), Seq::from_vec(vec!["a", "b"]));
/// assert_eq!(
///     zipped.to_vec(),
///     vec![
///         Combined { first: 1, second: "a" },
///         Combined { first: 2, second: "b" },
///     ]
/// );
/// ```
pub fn zip<A, B>(first: Seq<A>, second: Seq<B>) -> Seq<Combined<A, B>>
where
    A: Send + 'static,
    B: Send + 'static,
{
    Seq::new(move |sink| {
        lockstep(&first, &second, Exhaust::Shortest, &mut |step| match step {
            Zipped {
                first: Some(first),
                second: Some(second),
            } => sink(Combined { first, second }),
            _ => false,
        });
    })
}

/// Advances `first` and `second` together and maps every step with
/// `function`.
///
/// With [`Exhaust::Shortest`] the result ends as soon as either side runs
/// out. With [`Exhaust::Longest`] it continues until both have, and the
/// exhausted side shows up as `None`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::{Exhaust, zip_as};
/// use lazyseq::sequence::Seq;
///
/// let padded = zip_as(
///     Seq::from_vec(vec![1, 2, 3]),
///     Seq::from_vec(vec![10]),
///     |step| step.first.unwrap_or(0) + step.second.unwrap_or(0),
///     Exhaust::Longest,
/// );
/// assert_eq!(padded.to_vec(), vec![11, 2, 3]);
/// ```
pub fn zip_as<A, B, U, F>(first: Seq<A>, second: Seq<B>, function: F, exhaust: Exhaust) -> Seq<U>
where
    A: Send + 'static,
    B: Send + 'static,
    U: 'static,
    F: Fn(Zipped<A, B>) -> U + Send + Sync + 'static,
{
    Seq::new(move |sink| {
        lockstep(&first, &second, exhaust, &mut |step| sink(function(step)));
    })
}

/// Pulls one value from each side per step until `exhaust` says to end or
/// `sink` returns `false`. Both cursors are stopped before returning.
fn lockstep<A, B>(
    first: &Seq<A>,
    second: &Seq<B>,
    exhaust: Exhaust,
    sink: &mut dyn FnMut(Zipped<A, B>) -> bool,
) where
    A: Send + 'static,
    B: Send + 'static,
{
    let mut left = pull(first.clone());
    let mut right = pull(second.clone());
    loop {
        let step = Zipped {
            first: left.next(),
            second: right.next(),
        };
        let ended = match (&step.first, &step.second) {
            (None, None) => true,
            (Some(_), Some(_)) => false,
            _ => exhaust == Exhaust::Shortest,
        };
        if ended || !sink(step) {
            break;
        }
    }
    left.stop();
    right.stop();
}

/// `first` followed by each of `rest`, in order.
///
/// # Examples
///
/// ```rust
/// use lazyseq::combinator::concat;
/// use lazyseq::sequence::Seq;
///
/// let joined = concat(
///     Seq::from_vec(vec![1, 2]),
///     vec![Seq::empty(), Seq::from_vec(vec![3])],
/// );
/// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
/// ```
pub fn concat<T: 'static>(first: Seq<T>, rest: Vec<Seq<T>>) -> Seq<T> {
    if rest.is_empty() {
        return first;
    }
    Seq::new(move |sink| {
        let mut open = true;
        for seq in std::iter::once(&first).chain(&rest) {
            seq.run(&mut |value| {
                open = sink(value);
                open
            });
            if !open {
                return;
            }
        }
    })
}

/// The paired counterpart of [`concat`].
pub fn concat2<K: 'static, V: 'static>(first: Seq2<K, V>, rest: Vec<Seq2<K, V>>) -> Seq2<K, V> {
    let rest = rest.iter().map(Seq2::pairs).collect();
    Seq2::from_pairs(concat(first.pairs(), rest))
}

impl<T: Send + 'static> Seq<T> {
    /// See [`zip`].
    pub fn zip<B: Send + 'static>(&self, other: &Seq<B>) -> Seq<Combined<T, B>> {
        zip(self.clone(), other.clone())
    }
}

impl<T: 'static> Seq<T> {
    /// This sequence followed by `other`.
    pub fn chain(&self, other: &Self) -> Self {
        concat(self.clone(), vec![other.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_stops_at_shorter_side() {
        let zipped = zip(Seq::from_vec(vec!['a']), Seq::from_vec(vec![1, 2, 3]));
        assert_eq!(zipped.count(), 1);
    }

    #[test]
    fn zip_as_longest_reports_missing_sides() {
        let steps = zip_as(
            Seq::from_vec(vec![1]),
            Seq::from_vec(vec!['x', 'y']),
            |step| step,
            Exhaust::Longest,
        );
        assert_eq!(
            steps.to_vec(),
            vec![
                Zipped {
                    first: Some(1),
                    second: Some('x')
                },
                Zipped {
                    first: None,
                    second: Some('y')
                },
            ]
        );
    }

    #[test]
    fn zip_of_empty_sides_is_empty() {
        let steps = zip_as(
            Seq::<u8>::empty(),
            Seq::<u8>::empty(),
            |step| step,
            Exhaust::Longest,
        );
        assert!(steps.to_vec().is_empty());
    }

    #[test]
    fn concat_respects_early_stop_across_parts() {
        let joined = concat(Seq::from_vec(vec![1]), vec![Seq::from_vec(vec![2, 3])]);
        let mut seen = Vec::new();
        joined.run(&mut |value| {
            seen.push(value);
            value < 2
        });
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn concat2_keeps_pairs_in_order() {
        let first = Seq2::from_pairs(Seq::from_vec(vec![(1, 'a')]));
        let second = Seq2::from_pairs(Seq::from_vec(vec![(2, 'b')]));
        assert_eq!(
            concat2(first, vec![second]).to_vec(),
            vec![(1, 'a'), (2, 'b')]
        );
    }
}
