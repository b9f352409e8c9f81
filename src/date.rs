use chrono::{Datelike, NaiveDate};

use crate::Error;

/// Parses `text` only if it is exactly `YYYY-MM-DD` and names a real
/// calendar day.
pub fn parse_strict(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Day and month searched for regardless of year.
///
/// Values are not range checked: `13-99` is a valid query that simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayMonth {
    pub day: i32,
    pub month: i32,
}

impl DayMonth {
    pub const fn new(day: i32, month: i32) -> Self {
        DayMonth { day, month }
    }

    #[inline]
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.day() as i32 == self.day && date.month() as i32 == self.month
    }
}

impl std::str::FromStr for DayMonth {
    type Err = Error;

    /// Accepts `15-07`, `15.07`, `15/07`, `15 07` and any mix of those
    /// separators. Parts after the second one are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace(['.', '/', ' '], "-");
        let mut parts = normalized.split('-');
        let (day, month) = match (parts.next(), parts.next()) {
            (Some(day), Some(month)) => (day, month),
            _ => return Err(Error::MissingDateSegment(s.to_string())),
        };

        match (day.parse(), month.parse()) {
            (Ok(day), Ok(month)) => Ok(DayMonth { day, month }),
            _ => Err(Error::NonNumericDate(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.day, self.month)
    }
}
