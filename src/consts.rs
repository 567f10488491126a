/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for March
pub const MARCH: i32 = 3;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// First day of every month
pub const FIRST_DAY: i32 = 1;

/// Days in February for non-leap years
pub const FEBRUARY_DAYS: i32 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Length of each month in a common year, looked up by month number.
/// Slot 0 pads the table so `DAYS_IN_MONTH[month]` works directly;
/// February leap days come from `last_day_of_february`.
pub const DAYS_IN_MONTH: [i32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Years divisible by this are leap years by default
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years drop the leap day
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// Every fourth century keeps it again
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const EPOCH_SHIFT: i64 = 719_468;

/// Length of the `YYYYMMDD` form
pub const FIXED_WIDTH: usize = 8;
/// Byte range of the year inside the `YYYYMMDD` form
pub const YEAR_FIELD: std::ops::Range<usize> = 0..4;
/// Byte range of the month inside the `YYYYMMDD` form
pub const MONTH_FIELD: std::ops::Range<usize> = 4..6;
/// Byte range of the day inside the `YYYYMMDD` form
pub const DAY_FIELD: std::ops::Range<usize> = 6..8;

/// Trailing `MMDD` digits of a rendered date
pub(crate) const MONTH_DAY_DIGITS: usize = 4;
