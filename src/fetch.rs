//! Loading holidays from the Nager.Date public holiday API.
//!
//! Every year is fetched on its own. A year that fails is recorded in the
//! [`LoadReport`] and the remaining years are still loaded.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::{Country, Error, Holiday, HolidayStore, Result};

/// Years loaded at startup, in load order.
pub const TRACKED_YEARS: [i32; 3] = [2023, 2024, 2025];

pub const TRACKED_COUNTRY: Country = Country::TR;

/// A place holidays for one year can be fetched from.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>>;
}

/// HTTP client for `GET <base>/<year>/<countryCode>`.
pub struct NagerClient {
    client: Client,
    base_url: String,
    country: Country,
}

impl NagerClient {
    pub fn new(config: &Config, country: Country) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            country,
        }
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn year_url(&self, year: i32) -> String {
        format!("{}/{}/{}", self.base_url, year, self.country)
    }
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>> {
        let url = self.year_url(year);
        tracing::debug!(%url, "requesting holidays");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_holidays(&body)
    }
}

/// Wire shape with every key lowercased.
#[derive(Debug, Deserialize)]
struct WireHoliday {
    date: Option<String>,
    #[serde(rename = "localname")]
    local_name: Option<String>,
    name: Option<String>,
    #[serde(rename = "countrycode")]
    country_code: Option<String>,
    #[serde(default)]
    fixed: bool,
    #[serde(default)]
    global: bool,
}

impl From<WireHoliday> for Holiday {
    fn from(value: WireHoliday) -> Self {
        Holiday {
            date: value.date,
            local_name: value.local_name,
            name: value.name,
            country_code: value.country_code,
            fixed: value.fixed,
            global: value.global,
        }
    }
}

/// Decodes a JSON array of holiday objects.
///
/// Keys are matched without regard to case and unknown keys are ignored.
/// A `null` body is an empty list.
pub fn decode_holidays(body: &str) -> Result<Vec<Holiday>> {
    let rows: Option<Vec<Map<String, Value>>> = serde_json::from_str(body)?;

    rows.unwrap_or_default()
        .into_iter()
        .map(|row| -> Result<Holiday> {
            let row: Map<String, Value> = row
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect();
            let wire: WireHoliday = serde_json::from_value(Value::Object(row))?;
            Ok(wire.into())
        })
        .collect()
}

/// Result of loading a single year.
#[derive(Debug)]
pub struct YearOutcome {
    pub year: i32,
    pub result: Result<Vec<Holiday>>,
}

impl YearOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of every year, in the order the years were requested.
#[derive(Debug, Default)]
pub struct LoadReport {
    outcomes: Vec<YearOutcome>,
}

impl LoadReport {
    pub fn outcomes(&self) -> &[YearOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = (i32, &Error)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|e| (outcome.year, e)))
    }

    pub fn record_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .map(Vec::len)
            .sum()
    }

    /// Moves every successfully loaded record into a store, years in
    /// ascending order.
    pub fn into_store(mut self) -> HolidayStore {
        self.outcomes.sort_by_key(|outcome| outcome.year);

        let mut store = HolidayStore::new();
        for outcome in self.outcomes {
            if let Ok(holidays) = outcome.result {
                store.extend(holidays);
            }
        }
        store
    }

    /// Like [`into_store`](Self::into_store), but an empty result is
    /// [`Error::NoRecords`].
    pub fn into_loaded_store(self) -> Result<HolidayStore> {
        let store = self.into_store();
        if store.is_empty() {
            return Err(Error::NoRecords);
        }
        Ok(store)
    }
}

/// Fetches `years` one after another.
pub async fn fetch_all<S>(source: &S, years: &[i32]) -> LoadReport
where
    S: HolidaySource + ?Sized,
{
    let mut outcomes = Vec::with_capacity(years.len());
    for &year in years {
        let result = source.fetch_year(year).await;
        match &result {
            Ok(holidays) => tracing::info!(year, count = holidays.len(), "loaded holidays"),
            Err(err) => tracing::warn!(year, error = %err, "could not load holidays"),
        }
        outcomes.push(YearOutcome { year, result });
    }
    LoadReport { outcomes }
}
