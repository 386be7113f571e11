//! Integer domains for overflow-safe stepping.

use std::fmt;

/// A primitive integer type that [`range_step`](super::range_step) can walk.
///
/// Bounds are derived from the type's bit width and signedness, and every
/// step is checked against them before it is taken.
pub trait Integer: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Width of the type in bits.
    const BITS: u32;
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Smallest representable value.
    fn min_value() -> Self;

    /// Largest representable value.
    fn max_value() -> Self;

    /// Distance from `self` up to [`Integer::max_value`].
    fn headroom(self) -> u128;

    /// Distance from `self` down to [`Integer::min_value`].
    fn footroom(self) -> u128;

    /// `self + magnitude` modulo `2^BITS`.
    fn wrapping_up(self, magnitude: u128) -> Self;

    /// `self - magnitude` modulo `2^BITS`.
    fn wrapping_down(self, magnitude: u128) -> Self;

    /// Number of distinct values minus one, i.e. `max_value - min_value`.
    fn span() -> u128 {
        if Self::BITS >= u128::BITS {
            u128::MAX
        } else {
            (1_u128 << Self::BITS) - 1
        }
    }

    /// `self + magnitude`, or `None` if that leaves the type's range.
    #[inline]
    fn checked_step_up(self, magnitude: u128) -> Option<Self> {
        (magnitude <= self.headroom()).then(|| self.wrapping_up(magnitude))
    }

    /// `self - magnitude`, or `None` if that leaves the type's range.
    #[inline]
    fn checked_step_down(self, magnitude: u128) -> Option<Self> {
        (magnitude <= self.footroom()).then(|| self.wrapping_down(magnitude))
    }
}

/// A step argument. Only strictly positive steps have a magnitude.
pub trait StepSize: Copy {
    /// The step as an unsigned magnitude, or `None` for zero and negative steps.
    fn magnitude(self) -> Option<u128>;
}

macro_rules! impl_integer {
    ($($int:ty => $signed:expr),* $(,)?) => {
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            impl Integer for $int {
                const BITS: u32 = <$int>::BITS;
                const SIGNED: bool = $signed;

                #[inline]
                fn min_value() -> Self {
                    <$int>::MIN
                }

                #[inline]
                fn max_value() -> Self {
                    <$int>::MAX
                }

                #[inline]
                fn headroom(self) -> u128 {
                    self.abs_diff(<$int>::MAX) as u128
                }

                #[inline]
                fn footroom(self) -> u128 {
                    self.abs_diff(<$int>::MIN) as u128
                }

                #[inline]
                fn wrapping_up(self, magnitude: u128) -> Self {
                    self.wrapping_add(magnitude as $int)
                }

                #[inline]
                fn wrapping_down(self, magnitude: u128) -> Self {
                    self.wrapping_sub(magnitude as $int)
                }
            }

            #[allow(clippy::cast_sign_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
            impl StepSize for $int {
                #[inline]
                fn magnitude(self) -> Option<u128> {
                    (self > 0).then_some(self as u128)
                }
            }
        )*
    };
}

impl_integer! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    u128 => false,
    usize => false,
}
