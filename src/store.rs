use crate::query::{self, Query};
use crate::Holiday;

/// All holidays loaded at startup, in the order they were fetched.
///
/// Records are only ever appended while loading; after that the store is
/// shared by reference and read.
#[derive(Debug, Clone, Default)]
pub struct HolidayStore {
    holidays: Vec<Holiday>,
}

impl HolidayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend<I>(&mut self, holidays: I)
    where
        I: IntoIterator<Item = Holiday>,
    {
        self.holidays.extend(holidays);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Holiday> {
        self.holidays.iter()
    }

    pub fn query(&self, query: &Query) -> query::Iter<'_> {
        query.run(&self.holidays)
    }
}

impl FromIterator<Holiday> for HolidayStore {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut store = HolidayStore::new();
        store.extend(iter);
        store
    }
}

impl<'a> IntoIterator for &'a HolidayStore {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DayMonth;

    fn dated(date: &str, name: &str) -> Holiday {
        Holiday {
            date: Some(date.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn sample() -> HolidayStore {
        [
            dated("2023-01-01", "New Year's Day"),
            dated("2023-07-15", "Democracy and National Unity Day"),
            dated("2024-07-15", "Democracy and National Unity Day"),
            dated("2025-01-01", "New Year's Day"),
        ]
        .into_iter()
        .collect()
    }

    fn dates<'a>(it: impl Iterator<Item = &'a Holiday>) -> Vec<&'a str> {
        it.map(|h| h.date.as_deref().unwrap_or("-")).collect()
    }

    #[test]
    fn keeps_insertion_order() {
        let store = sample();
        assert_eq!(store.len(), 4);
        assert_eq!(
            dates(store.iter()),
            ["2023-01-01", "2023-07-15", "2024-07-15", "2025-01-01"]
        );
        assert_eq!(dates(store.query(&Query::all())), dates(store.iter()));
    }

    #[test]
    fn decade_prefix_is_union_of_years() {
        let store = sample();
        let decade = dates(store.query(&Query::year("202")));
        let mut by_year = Vec::new();
        for year in ["2023", "2024", "2025"] {
            by_year.extend(dates(store.query(&Query::year(year))));
        }
        assert_eq!(decade, by_year);
    }

    #[test]
    fn queries_are_repeatable() {
        let store = sample();
        let query = Query::day_month(DayMonth::new(15, 7));
        let first = dates(store.query(&query));
        let second = dates(store.query(&query));
        assert_eq!(first, ["2023-07-15", "2024-07-15"]);
        assert_eq!(first, second);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn results_outlive_the_query() {
        let store = sample();
        let found: Vec<&Holiday> = {
            let query = Query::year("2025");
            store.query(&query).collect()
        };
        assert_eq!(dates(found.into_iter()), ["2025-01-01"]);

        let day_month: DayMonth = "01.01".parse().unwrap();
        let by_date = dates(store.query(&Query::day_month(day_month)));
        assert_eq!(by_date, ["2023-01-01", "2025-01-01"]);
    }

    #[test]
    fn empty_store() {
        let store = HolidayStore::new();
        assert!(store.is_empty());
        assert_eq!(store.query(&Query::all()).count(), 0);
    }
}
