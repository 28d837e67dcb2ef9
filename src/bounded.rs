//! Uniform draws constrained to a closed or half-open interval

use std::{
    fmt::Display,
    ops::{Range, RangeInclusive},
};

use crate::{
    error::InvalidRange,
    rand::{draw64, Random},
};

/// 2^32, the number of distinct values one draw can take
const DRAW32_SPAN: f64 = 4_294_967_296.0;

/// Numeric types that can be drawn uniformly from an interval.
///
/// Integers reduce a draw modulo the interval width. The bias this leaves for widths that do not
/// divide 2^32 is acceptable for test data but rules these generators out wherever exact
/// uniformity matters. Floats scale a full-range draw linearly onto the interval instead.
pub trait BoundedRandom: Copy + PartialOrd + Display {
    /// Draws from `[lower, upper]`
    fn random_in_range(random: &impl Random, lower: Self, upper: Self)
        -> Result<Self, InvalidRange>;

    /// Draws from `[lower, upper)`
    fn random_in_half_open(
        random: &impl Random,
        lower: Self,
        upper: Self,
    ) -> Result<Self, InvalidRange>;
}

macro_rules! impl_bounded_random_for_integer {
    ($($t:ty),*) => {$(
        impl BoundedRandom for $t {
            fn random_in_range(
                random: &impl Random,
                lower: Self,
                upper: Self,
            ) -> Result<Self, InvalidRange> {
                if upper < lower {
                    return Err(InvalidRange::new(lower, upper));
                }
                /* 128-bit arithmetic holds the width of any 64-bit range */
                let width = (upper as i128 - lower as i128) as u128 + 1;
                let offset = if width <= 1 << 32 {
                    random.draw32() as u128 % width
                } else {
                    draw64(random) as u128 % width
                };
                Ok((lower as i128 + offset as i128) as $t)
            }

            fn random_in_half_open(
                random: &impl Random,
                lower: Self,
                upper: Self,
            ) -> Result<Self, InvalidRange> {
                if upper <= lower {
                    return Err(InvalidRange::new(lower, upper));
                }
                Self::random_in_range(random, lower, upper - 1)
            }
        }
    )*};
}

impl_bounded_random_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_bounded_random_for_float {
    ($($t:ty),*) => {$(
        impl BoundedRandom for $t {
            fn random_in_range(
                random: &impl Random,
                lower: Self,
                upper: Self,
            ) -> Result<Self, InvalidRange> {
                if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
                    return Err(InvalidRange::new(lower, upper));
                }
                let value = scale(random, lower as f64, upper as f64) as $t;
                Ok(value.clamp(lower, upper))
            }

            fn random_in_half_open(
                random: &impl Random,
                lower: Self,
                upper: Self,
            ) -> Result<Self, InvalidRange> {
                if !(lower.is_finite() && upper.is_finite() && lower < upper) {
                    return Err(InvalidRange::new(lower, upper));
                }
                let value = scale(random, lower as f64, upper as f64) as $t;
                /* Rounding may land exactly on the excluded bound */
                Ok(if value < upper { value.max(lower) } else { lower })
            }
        }
    )*};
}

impl_bounded_random_for_float!(f32, f64);

/// Maps one draw linearly onto `[lower, upper]`
fn scale(random: &impl Random, lower: f64, upper: f64) -> f64 {
    let unit = random.draw32() as f64 / DRAW32_SPAN;
    let span = upper - lower;
    if span.is_finite() {
        unit * span + lower
    } else {
        /* Bounds near opposite ends of f64 overflow the span, halve it instead */
        let half = unit * (upper / 2.0 - lower / 2.0);
        lower + half + half
    }
}

/// Draws from a closed range, `random_in(&random, 1..=6)`
pub fn random_in<T: BoundedRandom>(
    random: &impl Random,
    range: RangeInclusive<T>,
) -> Result<T, InvalidRange> {
    let (lower, upper) = range.into_inner();
    T::random_in_range(random, lower, upper)
}

/// Draws from a half-open range, `random_in_exclusive(&random, 0..len)`
pub fn random_in_exclusive<T: BoundedRandom>(
    random: &impl Random,
    range: Range<T>,
) -> Result<T, InvalidRange> {
    T::random_in_half_open(random, range.start, range.end)
}

/// Even draw means `true`
pub fn random_bool(random: &impl Random) -> bool {
    random.draw32() % 2 == 0
}

/// Draws a percentage in `[0, 99]` and checks it against `percentage`
pub fn percentage_is_over(random: &impl Random, percentage: u32) -> bool {
    u32::random_in_range(random, 0, 99).is_ok_and(|draw| draw >= percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rand::{MockRandom, RandomImpl},
        test_helpers::rand::FakeRandom,
    };

    const TRIALS: usize = 1000;

    fn assert_always_within<T: BoundedRandom + std::fmt::Debug>(lower: T, upper: T) {
        for _ in 0..TRIALS {
            let value = T::random_in_range(&RandomImpl, lower, upper).unwrap();
            assert!(
                lower <= value && value <= upper,
                "{value:?} is outside [{lower:?}, {upper:?}]"
            );
        }
    }

    #[test]
    fn random_in_range_always_stays_within_integer_bounds() {
        assert_always_within(0, 0);
        assert_always_within(-5, -5);
        assert_always_within(0, 1);
        assert_always_within(-5, 5);
        assert_always_within(10, 20);
        assert_always_within(i32::MIN, i32::MAX);
        assert_always_within(i64::MIN, i64::MAX);
        assert_always_within(i64::MAX - 1, i64::MAX);
        assert_always_within(u8::MIN, u8::MAX);
        assert_always_within(u64::MIN, u64::MAX);
        assert_always_within(0usize, 3usize);
    }

    #[test]
    fn random_in_range_always_stays_within_float_bounds() {
        assert_always_within(0.0f64, 100.0f64);
        assert_always_within(-1.5f64, -1.5f64);
        assert_always_within(-1.0f32, 1.0f32);
        assert_always_within(f64::MIN, f64::MAX);
    }

    #[test]
    fn when_lower_equals_upper_then_random_in_range_returns_that_bound() {
        let random = FakeRandom::default().with_random_sequence(vec![123_456, u32::MAX]);

        assert_eq!(i32::random_in_range(&random, 42, 42), Ok(42));
        assert_eq!(f64::random_in_range(&random, 2.5, 2.5), Ok(2.5));
    }

    #[test]
    fn random_in_range_adds_draw_modulo_width_to_lower_bound() {
        let random = FakeRandom::default().with_random_sequence(vec![7, 5, 4]);

        assert_eq!(i32::random_in_range(&random, 10, 14), Ok(12));
        assert_eq!(i32::random_in_range(&random, 10, 14), Ok(10));
        assert_eq!(i32::random_in_range(&random, -2, 2), Ok(2));
    }

    #[test]
    fn random_in_range_reaches_both_ends_of_full_32_bit_range() {
        let random = FakeRandom::default().with_random_sequence(vec![0, u32::MAX, u32::MAX]);

        assert_eq!(i32::random_in_range(&random, i32::MIN, i32::MAX), Ok(i32::MIN));
        assert_eq!(i32::random_in_range(&random, i32::MIN, i32::MAX), Ok(i32::MAX));
        assert_eq!(u32::random_in_range(&random, 0, u32::MAX), Ok(u32::MAX));
    }

    #[test]
    fn random_in_range_makes_single_draw_for_ranges_up_to_2_pow_32_values() {
        /* Arrange */
        let mut random_mock = MockRandom::new();
        random_mock.expect_draw32().times(1).return_const(5u32);

        /* Act */
        let result = i64::random_in_range(&random_mock, 0, u32::MAX as i64);

        /* Assert */
        assert_eq!(result, Ok(5));
        random_mock.checkpoint();
    }

    #[test]
    fn random_in_range_makes_two_draws_for_ranges_wider_than_2_pow_32_values() {
        /* Arrange */
        let random = FakeRandom::default().with_random_sequence(vec![1, 2]);

        /* Act */
        let result = i64::random_in_range(&random, i64::MIN, i64::MAX);

        /* Assert */
        assert_eq!(result, Ok(i64::MIN + (1 << 32) + 2));
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn when_upper_is_below_lower_then_random_in_range_fails_without_drawing() {
        let mut random_mock = MockRandom::new();
        random_mock.expect_draw32().never();

        assert_eq!(
            i32::random_in_range(&random_mock, 10, 5),
            Err(InvalidRange::new(10, 5))
        );
        assert!(u8::random_in_range(&random_mock, 1, 0).is_err());
        assert!(f64::random_in_range(&random_mock, 1.0, 0.5).is_err());
        assert!(f32::random_in_range(&random_mock, 0.5, -0.5).is_err());
    }

    #[test]
    fn when_float_bound_is_not_finite_then_random_in_range_fails() {
        let random = FakeRandom::default();

        assert!(f64::random_in_range(&random, f64::NAN, 1.0).is_err());
        assert!(f64::random_in_range(&random, 0.0, f64::NAN).is_err());
        assert!(f64::random_in_range(&random, 0.0, f64::INFINITY).is_err());
        assert!(f32::random_in_range(&random, f32::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn float_random_in_range_scales_draw_linearly() {
        let random = FakeRandom::default().with_random_sequence(vec![0, 1 << 31, 1 << 30]);

        assert_eq!(f64::random_in_range(&random, 0.0, 100.0), Ok(0.0));
        assert_eq!(f64::random_in_range(&random, 0.0, 100.0), Ok(50.0));
        assert_eq!(f32::random_in_range(&random, -10.0, 10.0), Ok(-5.0));
    }

    #[test]
    fn float_random_in_range_never_exceeds_upper_bound_after_rounding() {
        let random = FakeRandom::default().with_random_sequence(vec![u32::MAX]);

        let result = f32::random_in_range(&random, 0.0, 100.0).unwrap();

        assert!(result <= 100.0);
    }

    #[test]
    fn random_in_half_open_never_returns_upper_bound() {
        let random = FakeRandom::default().with_random_sequence(vec![9, 10, u32::MAX]);

        assert_eq!(i32::random_in_half_open(&random, 0, 10), Ok(9));
        assert_eq!(i32::random_in_half_open(&random, 0, 10), Ok(0));
        /* 99.99999997 rounds to 100.0 in f32 */
        assert_eq!(f32::random_in_half_open(&random, 0.0, 100.0), Ok(0.0));
    }

    #[test]
    fn when_half_open_range_is_empty_then_random_in_half_open_fails() {
        let random = FakeRandom::default();

        assert!(i32::random_in_half_open(&random, 3, 3).is_err());
        assert!(u8::random_in_half_open(&random, 0, 0).is_err());
        assert!(f64::random_in_half_open(&random, 1.0, 1.0).is_err());
    }

    #[test]
    fn random_in_and_random_in_exclusive_accept_range_syntax() {
        let random = FakeRandom::default().with_random_sequence(vec![5, 5]);

        assert_eq!(random_in(&random, 1..=6), Ok(6));
        assert_eq!(random_in_exclusive(&random, 0..5usize), Ok(0));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = random_in(&random, 6..=1);
        assert!(inverted.is_err());
    }

    #[test]
    fn random_bool_is_true_for_even_draws() {
        let random = FakeRandom::default().with_random_sequence(vec![2, 3, 0, u32::MAX]);

        assert!(random_bool(&random));
        assert!(!random_bool(&random));
        assert!(random_bool(&random));
        assert!(!random_bool(&random));
    }

    #[test]
    fn percentage_is_over_compares_draw_reduced_to_percent() {
        let random = FakeRandom::default().with_random_sequence(vec![170, 69, 99]);

        assert!(percentage_is_over(&random, 70));
        assert!(!percentage_is_over(&random, 70));
        assert!(!percentage_is_over(&random, 100));
    }

    #[test]
    fn zero_and_one_are_drawn_about_equally_often() {
        const DRAWS: usize = 10_000;

        let ones = (0..DRAWS)
            .map(|_| i32::random_in_range(&RandomImpl, 0, 1).unwrap())
            .filter(|&v| v == 1)
            .count();

        assert!((4500..=5500).contains(&ones), "{ones} ones in {DRAWS} draws");
    }
}
