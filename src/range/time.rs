//! Closed-interval ranges over points in time.

use std::time::{Duration, Instant, SystemTime};

use super::Direction;
use crate::sequence::Seq;

/// A point in time that can be moved by a [`Duration`] without panicking.
pub trait TimePoint: Copy + PartialOrd + Send + Sync + 'static {
    /// `self + interval`, or `None` if it cannot be represented.
    fn checked_later(self, interval: Duration) -> Option<Self>;

    /// `self - interval`, or `None` if it cannot be represented.
    fn checked_earlier(self, interval: Duration) -> Option<Self>;
}

impl TimePoint for Instant {
    fn checked_later(self, interval: Duration) -> Option<Self> {
        self.checked_add(interval)
    }

    fn checked_earlier(self, interval: Duration) -> Option<Self> {
        self.checked_sub(interval)
    }
}

impl TimePoint for SystemTime {
    fn checked_later(self, interval: Duration) -> Option<Self> {
        self.checked_add(interval)
    }

    fn checked_earlier(self, interval: Duration) -> Option<Self> {
        self.checked_sub(interval)
    }
}

/// Points from `from` to `to`, both inclusive, `interval` apart.
///
/// Walks forward when `from <= to` and backward otherwise. A zero `interval`
/// yields nothing.
///
/// # Examples
///
/// ```rust
/// use lazyseq::range::range_time;
/// use std::time::{Duration, SystemTime, UNIX_EPOCH};
///
/// let day = Duration::from_secs(24 * 60 * 60);
/// let from = UNIX_EPOCH;
/// let to = UNIX_EPOCH + 4 * day;
///
/// let days: Vec<SystemTime> = range_time(from, to, day).to_vec();
/// assert_eq!(days.len(), 5);
/// assert_eq!(days.last(), Some(&to));
///
/// let backwards = range_time(to, from, day).to_vec();
/// assert_eq!(backwards.first(), Some(&to));
/// assert_eq!(backwards.last(), Some(&from));
/// ```
pub fn range_time<P: TimePoint>(from: P, to: P, interval: Duration) -> Seq<P> {
    if interval.is_zero() {
        return Seq::empty();
    }
    let direction = Direction::between(&from, &to);
    Seq::new(move |sink| {
        let mut current = from;
        loop {
            let within = match direction {
                Direction::Ascending => current <= to,
                Direction::Descending => current >= to,
            };
            if !within || !sink(current) {
                return;
            }
            let next = match direction {
                Direction::Ascending => current.checked_later(interval),
                Direction::Descending => current.checked_earlier(interval),
            };
            match next {
                Some(next) => current = next,
                None => return,
            }
        }
    })
}
