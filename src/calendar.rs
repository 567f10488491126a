//! Gregorian calendar helpers shared by construction, validation, and arithmetic.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_ERA, DECEMBER, EPOCH_SHIFT, FEBRUARY, FEBRUARY_DAYS,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
};

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
///
/// Total over every `i32`, including zero and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % CENTURY_CYCLE != 0 && year % LEAP_YEAR_CYCLE == 0)
}

/// Last day of February in `year`
pub const fn last_day_of_february(year: i32) -> i32 {
    if is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        FEBRUARY_DAYS
    }
}

/// Number of days in `month` of `year`.
///
/// Months outside `1..=12` have no days, so every day is out of range for them.
#[allow(clippy::cast_sign_loss)]
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    if month == FEBRUARY {
        last_day_of_february(year)
    } else if month >= JANUARY && month <= DECEMBER {
        // month is in 1..=12 here
        DAYS_IN_MONTH[month as usize]
    } else {
        0
    }
}

/// Days since 1970-01-01 for a valid civil date.
/// See: <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
pub(crate) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month + 9) % 12; // March-based month [0, 11]
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
/// See: <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
pub(crate) const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400;
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}
