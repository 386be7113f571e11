//! Strict single-pass guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::sequence::{Seq, Seq2};

/// An owned "claimed" flag that can be won exactly once.
///
/// Each guarded sequence owns its own `OnceGuard`; there is no shared or
/// process-wide state.
///
/// # Examples
///
/// ```rust
/// use lazyseq::guard::OnceGuard;
///
/// let guard = OnceGuard::new();
/// assert!(guard.try_claim());
/// assert!(!guard.try_claim());
/// assert!(guard.is_claimed());
/// ```
#[derive(Debug, Default)]
pub struct OnceGuard {
    claimed: AtomicBool,
}

impl OnceGuard {
    /// Creates an unclaimed guard.
    pub const fn new() -> Self {
        Self {
            claimed: AtomicBool::new(false),
        }
    }

    /// Attempts to claim the guard. Only the first caller ever gets `true`.
    #[inline]
    pub fn try_claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Returns whether the guard has been claimed.
    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }
}

/// A sequence that can be traversed only once.
///
/// The first traversal claims the sequence before touching `seq` and then
/// behaves exactly like `seq`, including early stop: once the consumer
/// returns `false` it receives nothing more, even from an upstream that keeps
/// yielding. Every other traversal, sequential or concurrent, yields nothing.
/// Stopping early still uses up the sequence; see [`continuable_once`](super::continuable_once) for a variant
/// that resumes.
///
/// # Examples
///
/// ```rust
/// use lazyseq::guard::once;
/// use lazyseq::sequence::Seq;
///
/// let seq = once(Seq::from_vec(vec![1, 2, 3, 4, 5, 6]));
///
/// let mut first = Vec::new();
/// seq.run(&mut |value| {
///     first.push(value);
///     value < 3
/// });
/// assert_eq!(first, vec![1, 2, 3]);
///
/// assert!(seq.to_vec().is_empty());
/// ```
pub fn once<T: 'static>(seq: Seq<T>) -> Seq<T> {
    let guard = OnceGuard::new();
    Seq::new(move |sink| {
        if !guard.try_claim() {
            #[cfg(feature = "tracing")]
            tracing::trace!("once: sequence already claimed, yielding nothing");
            return;
        }
        // Upstreams may keep yielding after a refusal; the consumer never
        // sees anything past its first `false`.
        let mut open = true;
        seq.run(&mut |value| {
            open = open && sink(value);
            open
        });
    })
}

/// The paired counterpart of [`once`].
pub fn once2<K: 'static, V: 'static>(seq: Seq2<K, V>) -> Seq2<K, V> {
    Seq2::from_pairs(once(seq.pairs()))
}
