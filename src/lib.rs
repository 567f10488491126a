//! A plain year/month/day value with Gregorian day and year arithmetic.
//!
//! ```
//! use ymd::Ymd;
//!
//! let mut date = Ymd::from_yyyymmdd("20240228");
//! date.increment_day();
//! assert_eq!(date.to_string(), "20240229");
//! date.add_years(1);
//! assert_eq!(date, Ymd::new(2025, 2, 28));
//! ```

mod arithmetic;
mod calendar;
mod clock;
mod consts;
mod error;
mod prelude;

pub use calendar::{days_in_month, is_leap_year, last_day_of_february};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use error::ParseError;

use crate::prelude::*;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

/// A calendar date as three raw integers.
///
/// Construction never validates, so a value can hold any triple. Every
/// arithmetic operation keeps a valid date valid. The derived ordering is
/// lexicographic on (year, month, day).
///
/// `Display` pads month and day to two characters with `{:02}`, so a
/// negative field keeps its sign in front (`-1`, not `0-1`). Only invalid
/// values have negative months or days.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into,
)]
#[display(fmt = "{}{:02}{:02}", year, month, day)]
pub struct Ymd {
    year: i32,
    month: i32,
    day: i32,
}

impl Ymd {
    /// Creates a date from raw fields without validating them.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// The `00000000` sentinel every lenient constructor falls back to.
    pub const fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Today in the host's local time zone.
    pub fn now() -> Self {
        Self::today(&SystemClock)
    }

    /// Today according to `clock`.
    pub fn today<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from(clock.today())
    }

    /// The host-local date at `millis` milliseconds since the Unix epoch.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self::from_epoch_millis_with(millis, &SystemClock)
    }

    /// The date at `millis` milliseconds since the Unix epoch, in `clock`'s zone.
    ///
    /// Instants outside the representable range give the zero date.
    pub fn from_epoch_millis_with<C: Clock + ?Sized>(millis: i64, clock: &C) -> Self {
        clock.date_at_millis(millis).map_or_else(
            || {
                log::warn!("epoch milliseconds {millis} out of range, using zero date");
                Self::zero()
            },
            Self::from,
        )
    }

    /// Extracts the fields of any `chrono` date-like value; `None` gives the zero date.
    pub fn from_datelike<D: Datelike>(value: Option<&D>) -> Self {
        value.map_or_else(Self::zero, Self::fields_of)
    }

    // chrono keeps month in 1..=12 and day in 1..=31
    #[allow(clippy::cast_possible_wrap)]
    fn fields_of<D: Datelike>(value: &D) -> Self {
        Self::new(value.year(), value.month() as i32, value.day() as i32)
    }

    /// Reads a fixed-width `YYYYMMDD` string.
    ///
    /// Only the first eight bytes are consulted. Absent input, input shorter
    /// than eight bytes, or a field that is not an integer all give the zero
    /// date instead of an error. Use [`Ymd::parse_strict`] to get the error.
    pub fn from_yyyymmdd<'a>(value: impl Into<Option<&'a str>>) -> Self {
        let Some(s) = value.into() else {
            return Self::zero();
        };
        if s.len() < FIXED_WIDTH {
            log::debug!("{s:?} is shorter than {FIXED_WIDTH} bytes, using zero date");
            return Self::zero();
        }

        let field = |range: Range<usize>| s.get(range).and_then(|f| f.parse::<i32>().ok());
        match (field(YEAR_FIELD), field(MONTH_FIELD), field(DAY_FIELD)) {
            (Some(year), Some(month), Some(day)) => Self::new(year, month, day),
            _ => {
                log::debug!("{s:?} is not numeric YYYYMMDD, using zero date");
                Self::zero()
            }
        }
    }

    /// Parses the form written by `Display`, rejecting anything else.
    ///
    /// Accepts an optional `-` followed by at least five ASCII digits; the last
    /// four are `MMDD` and the rest is the year. The result must be a real
    /// calendar date.
    ///
    /// # Errors
    /// Returns a [`ParseError`] describing the first problem found.
    pub fn parse_strict(s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if digits.len() <= MONTH_DAY_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let (year, month_day) = trimmed.split_at(trimmed.len() - MONTH_DAY_DIGITS);
        let (month, day) = month_day.split_at(2);
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::YearOutOfRange(year.to_owned()))?;
        let month = Self::parse_digits(month)?;
        let day = Self::parse_digits(day)?;

        let date = Self::new(year, month, day);
        date.check()?;
        Ok(date)
    }

    fn parse_digits(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn check(&self) -> Result<(), ParseError> {
        if !(JANUARY..=DECEMBER).contains(&self.month) {
            return Err(ParseError::InvalidMonth(self.month));
        }
        if !self.is_valid() {
            return Err(ParseError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(())
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-based when valid)
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// True when the fields name a real proleptic Gregorian date.
    pub const fn is_valid(&self) -> bool {
        self.day >= FIRST_DAY && self.day <= days_in_month(self.year, self.month)
    }

    /// True for the `00000000` sentinel.
    pub const fn is_zero(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// True if this date sorts strictly before `other`.
    pub fn before(&self, other: &Self) -> bool {
        self < other
    }

    /// True if this date sorts strictly after `other`.
    pub fn after(&self, other: &Self) -> bool {
        self > other
    }

    /// Converts to a `chrono` date when valid and inside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.year,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )
    }
}

impl From<NaiveDate> for Ymd {
    fn from(date: NaiveDate) -> Self {
        Self::fields_of(&date)
    }
}

impl From<NaiveDateTime> for Ymd {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::fields_of(&datetime)
    }
}

/// Takes the wall-clock date in the value's own zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for Ymd {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::fields_of(&datetime)
    }
}

impl FromStr for Ymd {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl Serialize for Ymd {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ymd {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
