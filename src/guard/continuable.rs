//! Resumable single-pass guard for one consumer at a time.

use parking_lot::Mutex;

use super::once;
use crate::pull::{Cursor, pull};
use crate::sequence::{Seq, Seq2};

/// Where the shared cursor of a [`continuable_once`] sequence currently is.
enum Continuation<T> {
    /// No traversal has started yet.
    Fresh,
    /// A previous traversal stopped early; the cursor waits here.
    Parked(Cursor<T>),
    /// A traversal is running and holds the cursor.
    InUse,
    /// Upstream is exhausted and the cursor has been released.
    Drained,
}

struct ContinuationState<T> {
    slot: Mutex<Continuation<T>>,
}

impl<T: Send + 'static> ContinuationState<T> {
    fn new() -> Self {
        Self {
            slot: Mutex::new(Continuation::Fresh),
        }
    }

    fn check_out(&self, upstream: &Seq<T>) -> Option<Cursor<T>> {
        let mut slot = self.slot.lock();
        match std::mem::replace(&mut *slot, Continuation::InUse) {
            Continuation::Fresh => Some(pull(upstream.clone())),
            Continuation::Parked(cursor) => Some(cursor),
            Continuation::InUse => None,
            Continuation::Drained => {
                *slot = Continuation::Drained;
                None
            }
        }
    }

    fn traverse(&self, upstream: &Seq<T>, sink: &mut dyn FnMut(T) -> bool) {
        let Some(cursor) = self.check_out(upstream) else {
            return;
        };
        let mut lease = Lease {
            state: self,
            cursor: Some(cursor),
            drained: false,
        };

        while let Some(value) = lease.next() {
            if !sink(value) {
                return;
            }
        }
        lease.drained = true;
    }
}

/// A checked-out cursor. Returns it to the slot when the traversal ends,
/// including by unwinding.
struct Lease<'a, T> {
    state: &'a ContinuationState<T>,
    cursor: Option<Cursor<T>>,
    drained: bool,
}

impl<T: Send + 'static> Lease<'_, T> {
    fn next(&mut self) -> Option<T> {
        self.cursor.as_mut().and_then(Iterator::next)
    }
}

impl<T> Drop for Lease<'_, T> {
    fn drop(&mut self) {
        let Some(mut cursor) = self.cursor.take() else {
            return;
        };
        let mut slot = self.state.slot.lock();
        if self.drained {
            cursor.stop();
            *slot = Continuation::Drained;
            #[cfg(feature = "tracing")]
            tracing::trace!("continuable_once: upstream drained, cursor released");
        } else {
            *slot = Continuation::Parked(cursor);
        }
    }
}

/// A single-pass sequence whose traversals pick up where the last one stopped.
///
/// Like [`once`], `seq` is traversed at most once overall, but stopping early
/// does not use the sequence up: the next traversal continues from the next
/// element. Sequential traversals together yield every element of `seq`
/// exactly once, in order. After the last element has been delivered, further
/// traversals yield nothing.
///
/// Intended for one consumer at a time. A traversal started while another one
/// is in progress yields nothing; use [`finish_once`](super::finish_once) to
/// share one sequence between concurrent consumers.
///
/// # Examples
///
/// ```rust
/// use lazyseq::guard::continuable_once;
/// use lazyseq::sequence::Seq;
///
/// let seq = continuable_once(Seq::from_vec(vec![1, 2, 3, 4, 5, 6]));
///
/// let mut first = Vec::new();
/// seq.run(&mut |value| {
///     first.push(value);
///     value < 3
/// });
/// assert_eq!(first, vec![1, 2, 3]);
///
/// assert_eq!(seq.to_vec(), vec![4, 5, 6]);
/// assert!(seq.to_vec().is_empty());
/// ```
pub fn continuable_once<T: Send + 'static>(seq: Seq<T>) -> Seq<T> {
    let upstream = once(seq);
    let state = ContinuationState::new();
    Seq::new(move |sink| state.traverse(&upstream, sink))
}

/// The paired counterpart of [`continuable_once`].
pub fn continuable_once2<K, V>(seq: Seq2<K, V>) -> Seq2<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    Seq2::from_pairs(continuable_once(seq.pairs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_traversal_yields_nothing_and_keeps_cursor() {
        let seq = continuable_once(Seq::from_vec(vec![1, 2, 3]));
        let inner = seq.clone();

        let mut outer_seen = Vec::new();
        let mut inner_seen = Vec::new();
        seq.run(&mut |value| {
            outer_seen.push(value);
            inner_seen.extend(inner.to_vec());
            false
        });

        assert_eq!(outer_seen, vec![1]);
        assert!(inner_seen.is_empty());
        assert_eq!(seq.to_vec(), vec![2, 3]);
    }

    #[test]
    fn drained_state_is_inert() {
        let seq = continuable_once(Seq::from_vec(vec!['a']));
        assert_eq!(seq.to_vec(), vec!['a']);
        assert!(seq.to_vec().is_empty());
        assert!(seq.to_vec().is_empty());
    }
}
