//! Memoizing cache decorator.
//!
//! [`cache`] wraps a sequence so that it behaves like the live sequence until
//! one traversal has run it to the end, and like a recording of that
//! traversal from then on.
//!
//! # Finalization
//!
//! The switch from live production to replay happens exactly once:
//!
//! - Every traversal that starts while the cache is live pulls from the
//!   upstream through its own cursor, recording what it yields.
//! - A traversal that exhausts the upstream tries to finalize the cache with a
//!   compare-and-swap on the phase. The winner publishes its recording; a
//!   loser's recording is discarded.
//! - Once the phase reads `REPLAY`, every traversal replays the recording and
//!   never touches the upstream again.
//!
//! A traversal that stops early never finalizes. If no traversal ever runs to
//! the end, every traversal re-runs the upstream production.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::cache::cache;
//! use lazyseq::sequence::Seq;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let produced = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&produced);
//! let expensive = Seq::new(move |sink: &mut dyn FnMut(u64) -> bool| {
//!     for value in 1..=3 {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!         if !sink(value * 100) {
//!             return;
//!         }
//!     }
//! });
//!
//! let cached = cache(expensive);
//! assert_eq!(cached.to_vec(), vec![100, 200, 300]);
//! assert_eq!(cached.to_vec(), vec![100, 200, 300]);
//! assert_eq!(produced.load(Ordering::SeqCst), 3);
//! ```

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::pull::pull;
use crate::sequence::{Seq, Seq2};

/// Phase: traversals re-run the upstream.
const PHASE_LIVE: u8 = 0;
/// Phase: a traversal won the finalization race and is publishing its recording.
const PHASE_FINALIZING: u8 = 1;
/// Phase: the recording is published; traversals only replay it.
const PHASE_REPLAY: u8 = 2;

/// Shared state of one cached sequence.
struct CacheState<T> {
    phase: AtomicU8,
    recording: OnceLock<Vec<T>>,
}

impl<T> CacheState<T>
where
    T: Clone + Send + Sync + 'static,
{
    const fn new() -> Self {
        Self {
            phase: AtomicU8::new(PHASE_LIVE),
            recording: OnceLock::new(),
        }
    }

    fn replay_source(&self) -> Option<&[T]> {
        if self.is_finalized() {
            self.recording.get().map(Vec::as_slice)
        } else {
            None
        }
    }

    fn traverse(&self, upstream: &Seq<T>, sink: &mut dyn FnMut(T) -> bool) {
        match self.replay_source() {
            Some(recording) => replay(recording, sink),
            None => self.live(upstream, sink),
        }
    }

    fn live(&self, upstream: &Seq<T>, sink: &mut dyn FnMut(T) -> bool) {
        let mut cursor = pull(upstream.clone());
        let mut recorded = Vec::new();
        while let Some(value) = cursor.next() {
            recorded.push(value.clone());
            if !sink(value) {
                return;
            }
        }
        cursor.stop();
        self.finalize(recorded);
    }

    fn finalize(&self, recorded: Vec<T>) -> bool {
        if self
            .phase
            .compare_exchange(
                PHASE_LIVE,
                PHASE_FINALIZING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            #[cfg(feature = "tracing")]
            tracing::trace!("cache: finalization already won, discarding recording");
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len = recorded.len(), "cache: finalized, switching to replay");

        // Only the compare-and-swap winner reaches this point, so the cell is empty.
        let _ = self.recording.set(recorded);
        self.phase.store(PHASE_REPLAY, Ordering::Release);
        true
    }

    fn is_finalized(&self) -> bool {
        self.phase.load(Ordering::Acquire) == PHASE_REPLAY
    }
}

fn replay<T: Clone>(recording: &[T], sink: &mut dyn FnMut(T) -> bool) {
    for value in recording {
        if !sink(value.clone()) {
            return;
        }
    }
}

/// A sequence that records `seq` on the first complete traversal and replays
/// the recording on every traversal after that.
///
/// See the [module documentation](self) for the exact finalization rules.
pub fn cache<T>(seq: Seq<T>) -> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    let state = CacheState::new();
    Seq::new(move |sink| state.traverse(&seq, sink))
}

/// The paired counterpart of [`cache`].
pub fn cache2<K, V>(seq: Seq2<K, V>) -> Seq2<K, V>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Seq2::from_pairs(cache(seq.pairs()))
}

impl<T> Seq<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// See [`cache`].
    pub fn cache(&self) -> Self {
        cache(self.clone())
    }
}

impl<K, V> Seq2<K, V>
where
    K: Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// See [`cache2`].
    pub fn cache(&self) -> Self {
        cache2(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_live() {
        let state = CacheState::<i32>::new();
        assert!(!state.is_finalized());
        assert!(state.replay_source().is_none());
    }

    #[test]
    fn full_traversal_finalizes() {
        let state = CacheState::new();
        let upstream = Seq::from_vec(vec![1, 2]);
        state.traverse(&upstream, &mut |_| true);
        assert!(state.is_finalized());
        assert_eq!(state.replay_source(), Some(&[1, 2][..]));
    }

    #[test]
    fn early_stop_does_not_finalize() {
        let state = CacheState::new();
        let upstream = Seq::from_vec(vec![1, 2]);
        state.traverse(&upstream, &mut |_| false);
        assert!(!state.is_finalized());
    }

    #[test]
    fn only_first_finalization_wins() {
        let state = CacheState::new();
        assert!(state.finalize(vec!['a']));
        assert!(!state.finalize(vec!['b']));
        assert_eq!(state.replay_source(), Some(&['a'][..]));
    }

    #[test]
    fn empty_upstream_finalizes_to_empty_replay() {
        let state = CacheState::<u8>::new();
        state.traverse(&Seq::empty(), &mut |_| true);
        assert!(state.is_finalized());
        assert_eq!(state.replay_source(), Some(&[][..]));
    }
}
