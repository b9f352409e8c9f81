mod country;
mod date;
pub mod config;
pub mod console;
pub mod fetch;
pub mod query;
mod store;

pub use country::Country;
pub use date::{parse_strict, DayMonth};
pub use fetch::{
    fetch_all, HolidaySource, LoadReport, NagerClient, YearOutcome, TRACKED_COUNTRY, TRACKED_YEARS,
};
pub use query::Query;
pub use store::HolidayStore;

/// Represents a public holiday as delivered by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holiday {
    /// Date of holiday, `YYYY-MM-DD`. Kept exactly as received.
    pub date: Option<String>,
    /// Name of holiday in the country's language.
    pub local_name: Option<String>,
    /// International (English) name of holiday.
    pub name: Option<String>,
    /// two-letter country code defined in ISO 3166-1 alpha-2.
    pub country_code: Option<String>,
    /// Holiday falls on the same calendar date every year.
    pub fixed: bool,
    /// Holiday applies to the whole country.
    pub global: bool,
}

impl Holiday {
    /// Date of holiday if it is a valid `YYYY-MM-DD` calendar date.
    #[inline]
    pub fn calendar_date(&self) -> Option<chrono::NaiveDate> {
        self.date.as_deref().and_then(parse_strict)
    }
}

/// Error states the holiday tracker might encounter.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Request could not be sent or the server answered with a failure status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Response body is not a list of holidays.
    #[error("Holiday data could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    /// Day/month query has fewer than two parts.
    #[error("Expected day and month, got '{0}'")]
    MissingDateSegment(String),
    /// Day/month query has a part that is not a number.
    #[error("Day and month must be numeric, got '{0}'")]
    NonNumericDate(String),
    /// No year could be loaded.
    #[error("No holiday records could be loaded")]
    NoRecords,
    /// Console input or output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
