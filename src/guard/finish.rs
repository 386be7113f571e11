//! Drain-once guard shared by concurrent consumers.

use parking_lot::Mutex;

use super::once;
use crate::pull::{Cursor, pull};
use crate::sequence::{Seq, Seq2};

enum Shared<T> {
    Fresh,
    Active(Cursor<T>),
    Drained,
}

/// One cursor shared by every traversal of a [`finish_once`] sequence.
struct SharedCursorState<T> {
    slot: Mutex<Shared<T>>,
}

impl<T: Send + 'static> SharedCursorState<T> {
    fn new() -> Self {
        Self {
            slot: Mutex::new(Shared::Fresh),
        }
    }

    /// Takes the next upstream element. The lock covers only the cursor step.
    fn advance(&self, upstream: &Seq<T>) -> Option<T> {
        let mut slot = self.slot.lock();
        if matches!(*slot, Shared::Fresh) {
            *slot = Shared::Active(pull(upstream.clone()));
        }
        let Shared::Active(cursor) = &mut *slot else {
            return None;
        };
        let value = cursor.next();
        if value.is_none() {
            cursor.stop();
            *slot = Shared::Drained;
            #[cfg(feature = "tracing")]
            tracing::trace!("finish_once: upstream drained, cursor released");
        }
        value
    }

    fn traverse(&self, upstream: &Seq<T>, sink: &mut dyn FnMut(T) -> bool) {
        while let Some(value) = self.advance(upstream) {
            if !sink(value) {
                return;
            }
        }
    }
}

/// A single-pass sequence that any number of consumers, on any number of
/// threads, drain together.
///
/// Every element of `seq` is delivered exactly once across all traversals:
/// a traversal that stops early leaves the remaining elements to the others,
/// and concurrent traversals split the elements between them. Upstream order
/// is preserved as elements leave the shared cursor, but which traversal
/// receives which element is unspecified.
///
/// The shared cursor is locked only while it advances, so consumers process
/// the elements they receive in parallel.
///
/// # Examples
///
/// ```rust
/// use lazyseq::guard::finish_once;
/// use lazyseq::sequence::Seq;
/// use std::thread;
///
/// let work = finish_once(Seq::from_vec((1..=100).collect::<Vec<i32>>()));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let work = work.clone();
///         thread::spawn(move || work.to_vec())
///     })
///     .collect();
///
/// let mut all: Vec<i32> = handles
///     .into_iter()
///     .flat_map(|handle| handle.join().unwrap())
///     .collect();
/// all.sort_unstable();
/// assert_eq!(all, (1..=100).collect::<Vec<_>>());
/// ```
pub fn finish_once<T: Send + 'static>(seq: Seq<T>) -> Seq<T> {
    let upstream = once(seq);
    let state = SharedCursorState::new();
    Seq::new(move |sink| state.traverse(&upstream, sink))
}

/// The paired counterpart of [`finish_once`].
pub fn finish_once2<K, V>(seq: Seq2<K, V>) -> Seq2<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    Seq2::from_pairs(finish_once(seq.pairs()))
}
