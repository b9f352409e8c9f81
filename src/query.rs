use crate::date::DayMonth;
use crate::Holiday;

/// Filter over the loaded holidays.
///
/// The year filter compares raw date text while the day/month filter only
/// looks at dates that parse strictly, so a malformed date such as
/// `2024-99-99` still shows up when listing `2024` but never in a day/month
/// search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every holiday.
    All,
    /// Holidays whose date text starts with the given prefix.
    YearPrefix(String),
    /// Holidays on the given day and month of any year.
    DayMonth(DayMonth),
    /// Holidays whose local or international name contains the needle.
    /// The needle is stored lowercased.
    Name(String),
}

impl Query {
    #[inline]
    pub fn all() -> Self {
        Query::All
    }

    /// Prefix is used verbatim; `"202"` matches every year of the decade.
    pub fn year(prefix: impl Into<String>) -> Self {
        Query::YearPrefix(prefix.into())
    }

    #[inline]
    pub fn day_month(value: DayMonth) -> Self {
        Query::DayMonth(value)
    }

    pub fn name(needle: &str) -> Self {
        Query::Name(needle.to_lowercase())
    }

    pub fn matches(&self, holiday: &Holiday) -> bool {
        match self {
            Query::All => true,
            Query::YearPrefix(prefix) => holiday
                .date
                .as_deref()
                .is_some_and(|date| date.starts_with(prefix.as_str())),
            Query::DayMonth(day_month) => holiday
                .calendar_date()
                .is_some_and(|date| day_month.matches(date)),
            Query::Name(needle) => [&holiday.local_name, &holiday.name]
                .into_iter()
                .flatten()
                .any(|name| name.to_lowercase().contains(needle.as_str())),
        }
    }

    pub(crate) fn run<'a>(&self, holidays: &'a [Holiday]) -> Iter<'a> {
        Iter {
            inner: holidays.iter(),
            query: self.clone(),
        }
    }
}

/// Iterator over holiday query results, in load order.
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Holiday>,
    query: Query,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Holiday;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.inner.next()?;
            if self.query.matches(next) {
                return Some(next);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
