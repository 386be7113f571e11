#![cfg(feature = "range")]
//! Integration tests for integer and time ranges.

use lazyseq::range::{range, range_step, range_time};
use rstest::rstest;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

// =============================================================================
// Unit steps
// =============================================================================

#[rstest]
#[case(0, 5, vec![0, 1, 2, 3, 4])]
#[case(5, 0, vec![5, 4, 3, 2, 1])]
#[case(-2, 2, vec![-2, -1, 0, 1])]
#[case(2, -2, vec![2, 1, 0, -1])]
#[case(0, 0, vec![0])]
#[case(3, 4, vec![3])]
fn range_i32(#[case] start: i32, #[case] stop: i32, #[case] expected: Vec<i32>) {
    assert_eq!(range(start, stop).to_vec(), expected);
}

#[rstest]
fn range_is_replayable() {
    let seq = range(0_u16, 3);
    assert_eq!(seq.to_vec(), vec![0, 1, 2]);
    assert_eq!(seq.to_vec(), vec![0, 1, 2]);
}

#[rstest]
fn range_honours_early_stop() {
    let mut seen = Vec::new();
    range(0_u64, 1_000_000).run(&mut |value| {
        seen.push(value);
        value < 2
    });
    assert_eq!(seen, vec![0, 1, 2]);
}

// =============================================================================
// Arbitrary steps
// =============================================================================

#[rstest]
#[case(0, 10, 3, vec![0, 3, 6, 9])]
#[case(10, 0, 3, vec![10, 7, 4, 1])]
#[case(0, 9, 3, vec![0, 3, 6])]
#[case(-10, 10, 7, vec![-10, -3, 4])]
#[case(8, -4, 2, vec![8, 6, 4, 2, 0, -2])]
fn range_step_i64(
    #[case] start: i64,
    #[case] stop: i64,
    #[case] step: i64,
    #[case] expected: Vec<i64>,
) {
    assert_eq!(range_step(start, stop, step).to_vec(), expected);
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i32::MIN)]
fn non_positive_step_is_empty(#[case] step: i32) {
    assert!(range_step(0, 10, step).to_vec().is_empty());
    assert!(range_step(10, 0, step).to_vec().is_empty());
    assert!(range_step(3, 3, step).to_vec().is_empty());
}

// =============================================================================
// Overflow safety
// =============================================================================

#[rstest]
fn u8_descending_stops_before_underflow() {
    assert_eq!(range_step(201_u8, 0, 50).to_vec(), vec![201, 151, 101, 51, 1]);
    assert_eq!(
        range_step(255_u8, 0, 50).to_vec(),
        vec![255, 205, 155, 105, 55, 5]
    );
}

#[rstest]
fn u8_ascending_stops_before_overflow() {
    assert_eq!(range_step(100_u8, 251, 50).to_vec(), vec![100, 150, 200, 250]);
    assert_eq!(
        range_step(0_u8, 251, 50).to_vec(),
        vec![0, 50, 100, 150, 200, 250]
    );
    assert_eq!(range_step(250_u8, 255, 10).to_vec(), vec![250]);
}

#[rstest]
fn step_wider_than_type_yields_only_start() {
    assert_eq!(range_step(0_i8, 5, 256).to_vec(), vec![0]);
    assert_eq!(range_step(0_i8, -5, 1000_u32).to_vec(), vec![0]);
    assert_eq!(range_step(0_u16, 9, u128::MAX).to_vec(), vec![0]);
}

#[rstest]
fn i8_walks_full_domain() {
    let all = range(i8::MIN, i8::MAX).to_vec();
    assert_eq!(all.len(), 255);
    assert_eq!(all.first(), Some(&i8::MIN));
    assert_eq!(all.last(), Some(&(i8::MAX - 1)));

    let down = range(i8::MAX, i8::MIN).to_vec();
    assert_eq!(down.len(), 255);
    assert_eq!(down.last(), Some(&(i8::MIN + 1)));
}

#[rstest]
fn signed_near_bounds() {
    assert_eq!(range_step(120_i8, 127, 10).to_vec(), vec![120]);
    assert_eq!(range_step(-120_i8, -128, 10).to_vec(), vec![-120]);
    assert_eq!(range_step(-128_i8, 127, 127).to_vec(), vec![-128, -1, 126]);
    assert_eq!(
        range_step(i64::MAX - 2, i64::MAX, 1).to_vec(),
        vec![i64::MAX - 2, i64::MAX - 1]
    );
}

#[rstest]
fn usize_and_isize_ranges() {
    assert_eq!(range(usize::MAX - 1, usize::MAX).to_vec(), vec![usize::MAX - 1]);
    assert_eq!(
        range_step(isize::MIN, isize::MAX, usize::MAX).to_vec(),
        vec![isize::MIN]
    );
}

// =============================================================================
// Time ranges
// =============================================================================

const DAY: Duration = Duration::from_secs(24 * 60 * 60);
const HOUR: Duration = Duration::from_secs(60 * 60);

/// 2024-01-01T00:00:00Z
fn new_year_2024() -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_704_067_200)
}

#[rstest]
fn daily_range_is_closed() {
    let from = new_year_2024();
    let to = from + 4 * DAY;

    let days = range_time(from, to, DAY).to_vec();
    assert_eq!(days.len(), 5);
    assert_eq!(days[0], from);
    assert_eq!(days[4], to);
}

#[rstest]
fn hourly_range_skips_partial_interval() {
    let midnight = new_year_2024();
    let from = midnight + Duration::from_secs(10 * 60);
    let to = midnight + 3 * HOUR;

    let hours = range_time(from, to, HOUR).to_vec();
    assert_eq!(hours, vec![from, from + HOUR, from + 2 * HOUR]);
}

#[rstest]
fn backward_time_range() {
    let midnight = new_year_2024();
    let from = midnight + 3 * HOUR + Duration::from_secs(10 * 60);

    let hours = range_time(from, midnight, HOUR).to_vec();
    assert_eq!(hours.len(), 4);
    assert_eq!(hours[0], from);
    assert_eq!(hours[3], midnight + Duration::from_secs(10 * 60));
}

#[rstest]
fn zero_interval_yields_nothing() {
    let now = Instant::now();
    assert!(range_time(now, now + HOUR, Duration::ZERO).to_vec().is_empty());
}

#[rstest]
fn instant_ranges_work() {
    let start = Instant::now();
    let points = range_time(start, start + Duration::from_millis(30), Duration::from_millis(10));
    assert_eq!(points.to_vec().len(), 4);
}
