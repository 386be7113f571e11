//! Overflow-safe arithmetic progressions.
//!
//! [`range_step`] walks from `start` towards `stop` (exclusive) in steps of a
//! positive magnitude, in whichever direction `stop` lies. It works over every
//! primitive integer type and never wraps around: before each step the next
//! value is checked against the type's bounds and against `stop`, and the
//! sequence ends instead of producing a wrapped value.
//!
//! - The step is always a magnitude; direction comes from `start` and `stop`.
//! - A zero or negative step yields nothing rather than looping forever.
//! - `start` itself is always yielded (for a positive step), even when
//!   `start == stop` or when the very first step would overflow.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::range::{range, range_step};
//!
//! assert_eq!(range(0, 3).to_vec(), vec![0, 1, 2]);
//! assert_eq!(range(3, -2).to_vec(), vec![3, 2, 1, 0, -1]);
//! assert_eq!(range_step(8, -4, 2).to_vec(), vec![8, 6, 4, 2, 0, -2]);
//!
//! // The next step would overflow i8, so only the start is produced.
//! assert_eq!(range_step(120_i8, 127, 10).to_vec(), vec![120]);
//! assert_eq!(range_step(-120_i8, -128, 10).to_vec(), vec![-120]);
//!
//! // Zero steps never loop.
//! assert!(range_step(0, 5, 0).to_vec().is_empty());
//! ```

mod integer;
mod time;

pub use integer::{Integer, StepSize};
pub use time::{TimePoint, range_time};

use crate::sequence::Seq;

/// Which way a range walks. Fixed when the range is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// `start <= stop`; values increase.
    Ascending,
    /// `start > stop`; values decrease.
    Descending,
}

impl Direction {
    fn between<T: PartialOrd>(start: &T, stop: &T) -> Self {
        if start <= stop {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RangeState<T> {
    start: T,
    stop: T,
    step: u128,
    direction: Direction,
}

impl<T: Integer> RangeState<T> {
    fn new(start: T, stop: T, step: u128) -> Self {
        Self {
            start,
            stop,
            step,
            direction: Direction::between(&start, &stop),
        }
    }

    /// The value after `current`, unless it would overflow or reach `stop`.
    fn advance(&self, current: T) -> Option<T> {
        match self.direction {
            Direction::Ascending => current
                .checked_step_up(self.step)
                .filter(|next| *next < self.stop),
            Direction::Descending => current
                .checked_step_down(self.step)
                .filter(|next| *next > self.stop),
        }
    }

    fn drive(&self, sink: &mut dyn FnMut(T) -> bool) {
        if !sink(self.start) {
            return;
        }
        // A step wider than the whole type can never be taken.
        if self.step > T::span() {
            return;
        }
        let mut current = self.start;
        while let Some(next) = self.advance(current) {
            if !sink(next) {
                return;
            }
            current = next;
        }
    }
}

/// Values from `start` towards `stop` (exclusive) in unit steps.
///
/// Equivalent to `range_step(start, stop, 1)`.
pub fn range<T: Integer>(start: T, stop: T) -> Seq<T> {
    range_step(start, stop, 1_u8)
}

/// Values from `start` towards `stop` (exclusive) in steps of `step`.
///
/// `step` may be of any primitive integer type; only its magnitude matters,
/// and a zero or negative `step` produces an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::range::range_step;
///
/// assert_eq!(range_step(201_u8, 0, 50).to_vec(), vec![201, 151, 101, 51, 1]);
/// assert_eq!(range_step(0_i8, 5, 256_u16).to_vec(), vec![0]);
/// assert!(range_step(0, 5, -1).to_vec().is_empty());
/// ```
pub fn range_step<T: Integer, S: StepSize>(start: T, stop: T, step: S) -> Seq<T> {
    let Some(magnitude) = step.magnitude() else {
        return Seq::empty();
    };
    let state = RangeState::new(start, stop, magnitude);
    Seq::new(move |sink| state.drive(sink))
}
