//! Interactive menu over a loaded [`HolidayStore`].

use std::io::{BufRead, Write};

use crate::fetch::{LoadReport, TRACKED_COUNTRY, TRACKED_YEARS};
use crate::{DayMonth, Error, Holiday, HolidayStore, Query, Result};

const RULE_WIDTH: usize = 90;
const BANNER_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ByYear,
    ByDate,
    ByName,
    All,
    Exit,
    Invalid,
}

impl MenuChoice {
    fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::ByYear,
            "2" => MenuChoice::ByDate,
            "3" => MenuChoice::ByName,
            "4" => MenuChoice::All,
            "5" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Writes the holiday table followed by the record count.
///
/// Absent values are shown as `-`.
pub fn write_table<W: Write>(out: &mut W, holidays: &[&Holiday]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<12} {:<40} {:<30}",
        "DATE", "LOCAL NAME", "INTERNATIONAL NAME"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for holiday in holidays {
        writeln!(
            out,
            "{:<12} {:<40} {:<30}",
            or_dash(&holiday.date),
            or_dash(&holiday.local_name),
            or_dash(&holiday.name)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{} records listed", holidays.len())
}

#[inline]
fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Menu loop reading commands from `input` and printing to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn announce_loading(&mut self) -> Result<()> {
        writeln!(self.output, "Fetching holiday data, please wait...")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn report_load(&mut self, report: &LoadReport) -> Result<()> {
        for (year, err) in report.failures() {
            writeln!(self.output, "{year}: could not fetch holiday data: {err}")?;
        }
        Ok(())
    }

    pub fn report_no_records(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "ERROR: holiday data could not be retrieved. Check your internet connection."
        )?;
        Ok(())
    }

    /// Runs until the exit action is chosen or input ends.
    pub fn run(&mut self, store: &HolidayStore) -> Result<()> {
        writeln!(
            self.output,
            "Ready! {} holiday records loaded.",
            store.len()
        )?;

        loop {
            self.print_menu()?;
            let choice = match self.read_line()? {
                Some(line) => MenuChoice::parse(&line),
                None => MenuChoice::Exit,
            };

            match choice {
                MenuChoice::ByYear => self.list_by_year(store)?,
                MenuChoice::ByDate => self.search_by_date(store)?,
                MenuChoice::ByName => self.search_by_name(store)?,
                MenuChoice::All => self.list_all(store)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                MenuChoice::Invalid => {
                    writeln!(self.output, "Invalid choice, please try again.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let years = TRACKED_YEARS.map(|y| y.to_string()).join(", ");
        let title = format!("{} PUBLIC HOLIDAYS", TRACKED_COUNTRY.name().to_uppercase());

        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.output, "{title:^width$}", width = BANNER_WIDTH)?;
        writeln!(self.output, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(self.output, "1. List by year ({years})")?;
        writeln!(self.output, "2. Search by date (e.g. 15-07 or 1.1)")?;
        writeln!(self.output, "3. Search by name (e.g. Ramazan)")?;
        writeln!(self.output, "4. Show all")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Missing input reads as an empty string.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn list(&mut self, heading: &str, holidays: &[&Holiday]) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {heading} ---")?;
        write_table(&mut self.output, holidays)?;
        Ok(())
    }

    fn list_by_year(&mut self, store: &HolidayStore) -> Result<()> {
        let year = self.prompt("Enter the year to list: ")?;
        let query = Query::year(year.as_str());
        let found: Vec<_> = store.query(&query).collect();

        if found.is_empty() {
            writeln!(self.output, "No holidays found for that year.")?;
            return Ok(());
        }
        self.list(&format!("{year} public holidays"), &found)
    }

    fn search_by_date(&mut self, store: &HolidayStore) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Search by date ---")?;
        let input = self.prompt("Enter a date (day and month): ")?;

        let day_month = match input.parse::<DayMonth>() {
            Ok(day_month) => day_month,
            Err(Error::MissingDateSegment(_)) => {
                writeln!(
                    self.output,
                    "Invalid input! Please enter day-month (e.g. 15-07)."
                )?;
                return Ok(());
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected day/month query");
                writeln!(
                    self.output,
                    "Invalid format! Please enter a numeric day and month."
                )?;
                return Ok(());
            }
        };

        let query = Query::day_month(day_month);
        let found: Vec<_> = store.query(&query).collect();

        if found.is_empty() {
            writeln!(self.output, "No public holiday found on that date.")?;
            return Ok(());
        }
        self.list(&format!("Holidays on {day_month}"), &found)
    }

    fn search_by_name(&mut self, store: &HolidayStore) -> Result<()> {
        let input = self.prompt("Enter a holiday name (e.g. Cumhuriyet): ")?;
        let query = Query::name(&input);
        let found: Vec<_> = store.query(&query).collect();

        if found.is_empty() {
            writeln!(self.output, "No holiday found matching that name.")?;
            return Ok(());
        }
        self.list(
            &format!("Holidays matching '{}'", input.to_lowercase()),
            &found,
        )
    }

    fn list_all(&mut self, store: &HolidayStore) -> Result<()> {
        let first = TRACKED_YEARS[0];
        let last = TRACKED_YEARS[TRACKED_YEARS.len() - 1];
        let all: Vec<_> = store.iter().collect();
        self.list(&format!("All public holidays {first}-{last}"), &all)
    }
}
