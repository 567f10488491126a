/// Error returned by the strict `YYYYMMDD` parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("Empty date string")]
    EmptyInput,

    /// Not an optional `-` followed by at least five ASCII digits.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Year digits do not fit in an `i32`.
    #[error("Year out of range: {0}")]
    YearOutOfRange(String),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Day outside the month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },
}
