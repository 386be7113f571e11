//! Pull adapter: turning a push-style [`Seq`] into a demand-driven cursor.
//!
//! A [`Seq`] drives its consumer: the producer decides when the next value is
//! handed over. Combinators that must look at one element before deciding to
//! take another, or that interleave two producers, need the opposite: a cursor
//! they step themselves. [`pull`] provides that cursor.
//!
//! # How it works
//!
//! Rust has no stable native generators, so a [`Cursor`] runs the producer on
//! a dedicated thread and hands values across a pair of rendezvous channels:
//!
//! - every `next()` sends one *resume* signal and then receives exactly one
//!   message (a value, the end of the sequence, or a panic payload);
//! - the producer's sink sends the value and then blocks until the next resume
//!   signal arrives.
//!
//! The producer therefore never runs ahead of demand: the side effects that
//! lead up to value *n + 1* happen inside the `next()` that returns it.
//!
//! The thread is spawned lazily by the first `next()`. [`Cursor::stop`] (also
//! run on drop) disconnects both channels, which makes the parked sink return
//! `false`, and joins the thread.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::pull::pull;
//! use lazyseq::sequence::Seq;
//!
//! let mut cursor = pull(Seq::from_vec(vec![1, 2, 3]));
//! assert_eq!(cursor.next(), Some(1));
//! assert_eq!(cursor.next(), Some(2));
//! cursor.stop();
//! assert_eq!(cursor.next(), None);
//! ```

mod error;

pub use error::PullError;

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::sequence::{Seq, Seq2};

const PRODUCER_THREAD_NAME: &str = "lazyseq-pull";

/// What the producer thread hands back for one resume signal.
enum Message<T> {
    Item(T),
    Done,
    Panicked(Box<dyn Any + Send>),
}

/// The live half of a running cursor.
struct Producer<T> {
    resume: Sender<()>,
    values: Receiver<Message<T>>,
    handle: JoinHandle<()>,
}

enum CursorState<T> {
    /// Not pulled yet; no thread exists.
    Idle(Seq<T>),
    /// The producer thread is parked at a yield point (or at its start).
    Running(Producer<T>),
    /// Exhausted, stopped, or the producer panicked.
    Finished,
}

/// A demand-driven cursor over a [`Seq`].
///
/// Created by [`pull`] or [`Seq::iter`]. Values are produced one at a time,
/// only when asked for. Once the cursor returns `None` it stays finished.
///
/// Dropping a cursor stops it.
pub struct Cursor<T> {
    state: CursorState<T>,
}

/// Creates a cursor over `seq`.
///
/// No producer work happens until the first call to `next()`.
pub fn pull<T: Send + 'static>(seq: Seq<T>) -> Cursor<T> {
    Cursor {
        state: CursorState::Idle(seq),
    }
}

/// Creates a cursor over the pairs of `seq`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::pull::pull2;
/// use lazyseq::sequence::{SliceOrder, slice};
///
/// let mut cursor = pull2(slice(vec!["a", "b"], SliceOrder::Forward));
/// assert_eq!(cursor.next(), Some((0, "a")));
/// assert_eq!(cursor.next(), Some((1, "b")));
/// assert_eq!(cursor.next(), None);
/// ```
pub fn pull2<K, V>(seq: Seq2<K, V>) -> Cursor<(K, V)>
where
    K: Send + 'static,
    V: Send + 'static,
{
    pull(seq.pairs())
}

impl<T: Send + 'static> Cursor<T> {
    /// Advances the cursor, reporting producer failures as errors.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted or the cursor has
    /// been stopped; every later call returns `Ok(None)` as well.
    ///
    /// # Errors
    ///
    /// - [`PullError::Spawn`] if the producer thread could not be started.
    /// - [`PullError::ProducerPanicked`] if the producer panicked while being
    ///   resumed.
    ///
    /// In both cases the cursor is finished afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::pull::{PullError, pull};
    /// use lazyseq::sequence::Seq;
    ///
    /// let failing = Seq::new(|sink: &mut dyn FnMut(i32) -> bool| {
    ///     sink(1);
    ///     panic!("upstream failed");
    /// });
    ///
    /// let mut cursor = pull(failing);
    /// assert_eq!(cursor.try_next(), Ok(Some(1)));
    /// assert!(matches!(
    ///     cursor.try_next(),
    ///     Err(PullError::ProducerPanicked { .. })
    /// ));
    /// assert_eq!(cursor.try_next(), Ok(None));
    /// ```
    pub fn try_next(&mut self) -> Result<Option<T>, PullError> {
        match self.advance() {
            Ok(value) => Ok(value),
            Err(Failure::Spawn(error)) => Err(error),
            Err(Failure::Panicked(payload)) => Err(PullError::panicked(payload.as_ref())),
        }
    }

    fn advance(&mut self) -> Result<Option<T>, Failure> {
        if let CursorState::Idle(seq) = &self.state {
            let producer = spawn_producer(seq.clone()).map_err(|error| {
                #[cfg(feature = "tracing")]
                tracing::debug!(%error, "failed to spawn producer thread");
                Failure::Spawn(PullError::spawn(&error))
            });
            match producer {
                Ok(producer) => self.state = CursorState::Running(producer),
                Err(failure) => {
                    self.state = CursorState::Finished;
                    return Err(failure);
                }
            }
        }

        let CursorState::Running(producer) = &self.state else {
            return Ok(None);
        };

        let received = match producer.resume.send(()) {
            Ok(()) => producer.values.recv().ok(),
            Err(_) => None,
        };

        match received {
            Some(Message::Item(value)) => Ok(Some(value)),
            Some(Message::Panicked(payload)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("producer panicked, finishing cursor");
                self.stop();
                Err(Failure::Panicked(payload))
            }
            Some(Message::Done) | None => {
                self.stop();
                Ok(None)
            }
        }
    }
}

impl<T> Cursor<T> {
    /// Releases the producer thread.
    ///
    /// Idempotent, and safe to call before the first pull or after
    /// exhaustion. Every later `next()` returns `None`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub fn stop(&mut self) {
        if let CursorState::Running(producer) =
            std::mem::replace(&mut self.state, CursorState::Finished)
        {
            let Producer {
                resume,
                values,
                handle,
            } = producer;
            drop(resume);
            drop(values);
            // Producer panics are caught on the thread, so `join` only fails if
            // the sink itself panicked, which it never does.
            let _ = handle.join();
        }
    }

    /// Returns whether the cursor has been exhausted or stopped.
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, CursorState::Finished)
    }
}

enum Failure {
    Spawn(PullError),
    Panicked(Box<dyn Any + Send>),
}

fn spawn_producer<T: Send + 'static>(seq: Seq<T>) -> std::io::Result<Producer<T>> {
    let (resume_sender, resume_receiver) = bounded::<()>(0);
    let (value_sender, value_receiver) = bounded::<Message<T>>(0);

    let handle = thread::Builder::new()
        .name(PRODUCER_THREAD_NAME.to_string())
        .spawn(move || {
            if resume_receiver.recv().is_err() {
                return;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                seq.run(&mut |value| {
                    if value_sender.send(Message::Item(value)).is_err() {
                        return false;
                    }
                    resume_receiver.recv().is_ok()
                });
            }));
            let last = match outcome {
                Ok(()) => Message::Done,
                Err(payload) => Message::Panicked(payload),
            };
            // The consumer may already be gone.
            let _ = value_sender.send(last);
        })?;

    #[cfg(feature = "tracing")]
    tracing::trace!(thread = PRODUCER_THREAD_NAME, "spawned producer thread");

    Ok(Producer {
        resume: resume_sender,
        values: value_receiver,
        handle,
    })
}

impl<T: Send + 'static> Iterator for Cursor<T> {
    type Item = T;

    /// Returns the next value, or `None` once the sequence is exhausted or
    /// the cursor has been stopped.
    ///
    /// # Panics
    ///
    /// Re-raises a panic of the producer, and panics if the producer thread
    /// cannot be spawned. The cursor is finished afterwards.
    fn next(&mut self) -> Option<T> {
        match self.advance() {
            Ok(value) => value,
            Err(Failure::Spawn(error)) => panic!("{error}"),
            Err(Failure::Panicked(payload)) => panic::resume_unwind(payload),
        }
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            CursorState::Idle(_) => "Idle",
            CursorState::Running(_) => "Running",
            CursorState::Finished => "Finished",
        };
        formatter
            .debug_struct("Cursor")
            .field("state", &state)
            .finish()
    }
}

impl<T: Send + 'static> Seq<T> {
    /// A pull cursor over this sequence. Equivalent to [`pull`].
    pub fn iter(&self) -> Cursor<T> {
        pull(self.clone())
    }
}

impl<T: Send + 'static> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        pull(self)
    }
}

impl<T: Send + 'static> IntoIterator for &Seq<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_impl_all!(Cursor<String>: Send, Iterator);
