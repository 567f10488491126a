//! Time sources for the constructors that depend on "now" or on a time zone.
//!
//! The arithmetic never touches a clock; only [`Ymd::now`](crate::Ymd::now),
//! [`Ymd::today`](crate::Ymd::today) and the epoch-millisecond constructors do.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

/// A source of local calendar dates.
pub trait Clock {
    /// The local calendar date at the current instant.
    fn today(&self) -> NaiveDate;

    /// The local calendar date at `millis` milliseconds since the Unix epoch,
    /// or `None` if the instant is outside the representable range.
    fn date_at_millis(&self, millis: i64) -> Option<NaiveDate>;
}

/// The host clock in the host's local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn date_at_millis(&self, millis: i64) -> Option<NaiveDate> {
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.date_naive())
    }
}

/// A clock pinned to one instant in one fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Creates a clock that always reports `now`, in `now`'s offset.
    pub const fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Creates a clock at `millis` since the Unix epoch, observed from `offset`.
    /// Returns `None` if the instant is outside the representable range.
    pub fn at_epoch_millis(millis: i64, offset: FixedOffset) -> Option<Self> {
        offset.timestamp_millis_opt(millis).single().map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn date_at_millis(&self, millis: i64) -> Option<NaiveDate> {
        self.now
            .offset()
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.date_naive())
    }
}
