//! In-place day and year arithmetic on [`Ymd`].
//!
//! Every day operation expects a calendar-valid starting value. Starting from
//! anything else is a contract violation: debug builds assert, release builds
//! produce an unspecified (but memory-safe) value.

use crate::Ymd;
use crate::calendar::{civil_from_days, days_from_civil, is_leap_year, last_day_of_february};
use crate::consts::{
    DECEMBER, FEBRUARY, FEBRUARY_DAYS, FEBRUARY_DAYS_LEAP, FIRST_DAY, JANUARY, MARCH,
};

/// Days from `i32::MIN`-01-01 up to one past `i32::MAX`-12-31
#[allow(clippy::cast_lossless)]
const I32_YEARS_IN_DAYS: i64 = days_from_civil(i32::MAX as i64 + 1, 1, 1)
    - days_from_civil(i32::MIN as i64, 1, 1);

impl Ymd {
    /// Advances the date by one day, rolling over month and year ends.
    pub fn increment_day(&mut self) {
        debug_assert!(self.is_valid(), "increment_day on invalid date {:?}", self);

        let last = match self.month {
            DECEMBER => {
                if self.day == 31 {
                    self.year = self.year.wrapping_add(1);
                    self.month = JANUARY;
                    self.day = FIRST_DAY;
                } else {
                    self.day += 1;
                }
                return;
            }
            FEBRUARY => last_day_of_february(self.year),
            1 | 3 | 5 | 7 | 8 | 10 => 31,
            _ => 30,
        };

        if self.day == last {
            self.month += 1;
            self.day = FIRST_DAY;
        } else {
            self.day += 1;
        }
    }

    /// Moves the date back by one day, rolling over month and year starts.
    pub fn decrement_day(&mut self) {
        debug_assert!(self.is_valid(), "decrement_day on invalid date {:?}", self);

        if self.day != FIRST_DAY {
            self.day -= 1;
            return;
        }

        match self.month {
            JANUARY => {
                self.year = self.year.wrapping_sub(1);
                self.month = DECEMBER;
                self.day = 31;
            }
            MARCH => {
                self.month = FEBRUARY;
                self.day = last_day_of_february(self.year);
            }
            // predecessor has 31 days
            2 | 4 | 6 | 8 | 9 | 11 => {
                self.month -= 1;
                self.day = 31;
            }
            _ => {
                self.month -= 1;
                self.day = 30;
            }
        }
    }

    /// Moves the date by `days`, forward when positive and backward when negative.
    ///
    /// Equivalent to calling [`increment_day`](Self::increment_day) or
    /// [`decrement_day`](Self::decrement_day) `|days|` times, computed in
    /// constant time through a day count. Zero leaves the value untouched.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_days(&mut self, days: i32) {
        if days == 0 {
            return;
        }
        debug_assert!(self.is_valid(), "add_days on invalid date {:?}", self);

        let start = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        let mut target = start + i64::from(days);
        let (mut year, mut month, mut day) = civil_from_days(target);

        // The stepwise walk wraps the year at the i32 boundary and keeps going
        // in the wrapped year, so resume from the other end of the range.
        if i32::try_from(year).is_err() {
            target += if year > i64::from(i32::MAX) {
                -I32_YEARS_IN_DAYS
            } else {
                I32_YEARS_IN_DAYS
            };
            (year, month, day) = civil_from_days(target);
        }

        // |days| spans far fewer than 2^32 years, so one wrap lands back in range
        self.year = year as i32;
        self.month = month as i32;
        self.day = day as i32;
    }

    /// Moves the date forward one year, clamping February 29 to the 28th.
    pub fn increment_year(&mut self) {
        self.add_years(1);
    }

    /// Moves the date back one year, clamping February 29 to the 28th.
    pub fn decrement_year(&mut self) {
        self.add_years(-1);
    }

    /// Moves the date by `years`, clamping February 29 to the 28th when the
    /// target year is not a leap year. No other normalization happens.
    pub fn add_years(&mut self, years: i32) {
        self.year = self.year.wrapping_add(years);

        if self.month == FEBRUARY && self.day == FEBRUARY_DAYS_LEAP && !is_leap_year(self.year) {
            self.day = FEBRUARY_DAYS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::days_in_month;

    fn ymd(year: i32, month: i32, day: i32) -> Ymd {
        Ymd::new(year, month, day)
    }

    fn stepped(mut date: Ymd, days: i32) -> Ymd {
        for _ in 0..days.unsigned_abs() {
            if days > 0 {
                date.increment_day();
            } else {
                date.decrement_day();
            }
        }
        date
    }

    fn every_day(from_year: i32, to_year: i32) -> impl Iterator<Item = Ymd> {
        (from_year..=to_year).flat_map(|year| {
            (1..=12).flat_map(move |month| {
                (1..=days_in_month(year, month)).map(move |day| ymd(year, month, day))
            })
        })
    }

    #[test]
    fn test_increment_day_cases() {
        struct TestCase {
            from: Ymd,
            to: Ymd,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from: ymd(2023, 2, 28),
                to: ymd(2023, 3, 1),
                description: "end of non-leap February",
            },
            TestCase {
                from: ymd(2024, 2, 28),
                to: ymd(2024, 2, 29),
                description: "leap day follows the 28th",
            },
            TestCase {
                from: ymd(2024, 2, 29),
                to: ymd(2024, 3, 1),
                description: "end of leap February",
            },
            TestCase {
                from: ymd(2023, 12, 31),
                to: ymd(2024, 1, 1),
                description: "end of year",
            },
            TestCase {
                from: ymd(2023, 12, 30),
                to: ymd(2023, 12, 31),
                description: "inside December",
            },
            TestCase {
                from: ymd(2023, 4, 30),
                to: ymd(2023, 5, 1),
                description: "end of a 30-day month",
            },
            TestCase {
                from: ymd(2023, 7, 31),
                to: ymd(2023, 8, 1),
                description: "end of a 31-day month",
            },
            TestCase {
                from: ymd(1900, 2, 28),
                to: ymd(1900, 3, 1),
                description: "century non-leap February",
            },
        ];

        for case in &cases {
            let mut date = case.from;
            date.increment_day();
            assert_eq!(date, case.to, "{}", case.description);
        }
    }

    #[test]
    fn test_decrement_day_cases() {
        let cases = [
            (ymd(2024, 3, 1), ymd(2024, 2, 29)),
            (ymd(2023, 3, 1), ymd(2023, 2, 28)),
            (ymd(2024, 1, 1), ymd(2023, 12, 31)),
            (ymd(2024, 5, 1), ymd(2024, 4, 30)),
            (ymd(2024, 8, 1), ymd(2024, 7, 31)),
            (ymd(2024, 2, 1), ymd(2024, 1, 31)),
            (ymd(2024, 12, 1), ymd(2024, 11, 30)),
            (ymd(2024, 6, 15), ymd(2024, 6, 14)),
        ];

        for (from, to) in cases {
            let mut date = from;
            date.decrement_day();
            assert_eq!(date, to, "decrementing {from}");
        }
    }

    #[test]
    fn test_increment_decrement_round_trip() {
        for date in every_day(1899, 1901).chain(every_day(1999, 2001)) {
            let mut up = date;
            up.increment_day();
            assert!(up.is_valid(), "{date} incremented to invalid {up}");
            up.decrement_day();
            assert_eq!(up, date);

            let mut down = date;
            down.decrement_day();
            assert!(down.is_valid(), "{date} decremented to invalid {down}");
            down.increment_day();
            assert_eq!(down, date);
        }
    }

    #[test]
    fn test_increment_walks_every_day_in_order() {
        let days: Vec<Ymd> = every_day(2023, 2024).collect();
        for pair in days.windows(2) {
            let mut date = pair[0];
            date.increment_day();
            assert_eq!(date, pair[1]);
        }
    }

    #[test]
    fn test_year_boundaries_around_zero() {
        let mut date = ymd(0, 1, 1);
        date.decrement_day();
        assert_eq!(date, ymd(-1, 12, 31));
        date.increment_day();
        assert_eq!(date, ymd(0, 1, 1));

        let mut leap = ymd(0, 2, 28);
        leap.increment_day();
        assert_eq!(leap, ymd(0, 2, 29));
    }

    #[test]
    fn test_add_days_zero_is_noop() {
        for date in [ymd(2024, 2, 29), ymd(0, 0, 0), ymd(2023, 13, 40)] {
            let mut same = date;
            same.add_days(0);
            assert_eq!(same, date);
        }
    }

    #[test]
    fn test_add_days_matches_stepwise() {
        let starts = [
            ymd(2024, 2, 29),
            ymd(2023, 12, 31),
            ymd(1900, 2, 28),
            ymd(2000, 1, 1),
            ymd(1, 1, 1),
            ymd(-1, 3, 1),
        ];
        let offsets = [1, -1, 27, -59, 365, -366, 1_461, -1_461, 36_524, -36_525, 146_097];

        for start in starts {
            for days in offsets {
                let mut fast = start;
                fast.add_days(days);
                assert_eq!(fast, stepped(start, days), "{start} + {days} days");
            }
        }
    }

    #[test]
    fn test_add_days_matches_stepwise_across_year_wrap() {
        let cases = [
            (ymd(i32::MAX, 12, 31), 1),
            (ymd(i32::MAX, 12, 31), 20_000),
            (ymd(i32::MAX, 2, 28), 800),
            (ymd(i32::MIN, 1, 1), -1),
            (ymd(i32::MIN, 1, 1), -20_000),
            (ymd(i32::MIN, 3, 1), -800),
        ];

        for (start, days) in cases {
            let mut fast = start;
            fast.add_days(days);
            assert_eq!(fast, stepped(start, days), "{start} + {days} days");
        }

        let mut date = ymd(i32::MAX, 12, 31);
        date.add_days(1);
        assert_eq!(date, ymd(i32::MIN, 1, 1));
    }

    #[test]
    fn test_add_days_inverse() {
        let offsets = [1, -1, 400, -400, 10_000, -10_000, 2_000_000, -2_000_000];
        for start in [ymd(2024, 2, 29), ymd(1970, 1, 1), ymd(1582, 10, 15)] {
            for days in offsets {
                let mut date = start;
                date.add_days(days);
                assert!(date.is_valid());
                date.add_days(-days);
                assert_eq!(date, start, "{start} +/- {days}");
            }
        }
    }

    #[test]
    fn test_add_days_large_offsets() {
        let mut date = ymd(2000, 1, 1);
        date.add_days(146_097 * 10);
        assert_eq!(date, ymd(6000, 1, 1));

        let mut date = ymd(2000, 3, 1);
        date.add_days(-146_097 * 10);
        assert_eq!(date, ymd(-2000, 3, 1));

        let mut date = ymd(1970, 1, 1);
        date.add_days(i32::MAX);
        let mut back = date;
        back.add_days(i32::MIN + 1);
        assert_eq!(back, ymd(1970, 1, 1));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        let mut date = ymd(2024, 2, 29);
        date.add_years(1);
        assert_eq!(date, ymd(2025, 2, 28));

        let mut date = ymd(2023, 2, 28);
        date.add_years(1);
        assert_eq!(date, ymd(2024, 2, 28));

        let mut date = ymd(2024, 2, 29);
        date.add_years(4);
        assert_eq!(date, ymd(2028, 2, 29));

        let mut date = ymd(2000, 2, 29);
        date.add_years(100);
        assert_eq!(date, ymd(2100, 2, 28));

        let mut date = ymd(2024, 3, 31);
        date.add_years(-7);
        assert_eq!(date, ymd(2017, 3, 31));
    }

    #[test]
    fn test_increment_and_decrement_year() {
        let mut date = ymd(2024, 2, 29);
        date.increment_year();
        assert_eq!(date, ymd(2025, 2, 28));

        let mut date = ymd(2024, 2, 29);
        date.decrement_year();
        assert_eq!(date, ymd(2023, 2, 28));

        let mut date = ymd(2020, 6, 30);
        date.increment_year();
        date.decrement_year();
        assert_eq!(date, ymd(2020, 6, 30));
    }

    #[test]
    fn test_year_ops_leave_invalid_dates_alone() {
        let mut date = ymd(2023, 2, 30);
        date.add_years(1);
        assert_eq!(date, ymd(2024, 2, 30));
    }
}
