use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

use crate::input::CourseRecord;
use crate::order::Season;

/// A year at the start, optionally followed by a season at the end.
static TIME_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4}).*?(Spring|Summer|Fall|Winter)?\s*$")
        .expect("time period pattern should be valid")
});

/// The part of a time period that is relevant for ordering courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    year: u16,
    season: Option<Season>,
}

impl Term {
    #[must_use]
    pub const fn new(year: u16, season: Option<Season>) -> Self {
        Self { year, season }
    }

    /// Extracts the term from a time period like `2021 Fall` or `2019`.
    ///
    /// Returns `None` if the text does not start with a 4-digit year.
    #[must_use]
    pub fn parse(time_period: &str) -> Option<Self> {
        let captures = TIME_PERIOD.captures(time_period)?;
        let year = captures.get(1)?.as_str().parse().ok()?;
        let season = captures
            .get(2)
            .and_then(|season| season.as_str().parse().ok());

        Some(Self { year, season })
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn season(&self) -> Option<Season> {
        self.season
    }

    /// Courses without a season are ordered as if they took place in january.
    #[must_use]
    pub fn month_code(&self) -> &'static str {
        self.season.map_or("01", |season| season.code())
    }
}

/// Orders courses by their time period, ties are broken by the title.
///
/// Comparing two keys as strings compares them chronologically. Courses
/// without a recognizable time period get the year `0000` and therefore
/// end up last when sorting in descending order.
#[derive(Debug, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{}", _0)]
pub struct SortKey(String);

impl SortKey {
    #[must_use]
    pub fn new(record: &CourseRecord) -> Self {
        let term = record
            .time_period()
            .and_then(|time_period| Term::parse(time_period));

        match term {
            Some(term) => Self(format!(
                "{:04}-{}-{}",
                term.year(),
                term.month_code(),
                record.title()
            )),
            None => Self(format!("0000-00-{}", record.title())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&CourseRecord> for SortKey {
    fn from(record: &CourseRecord) -> Self {
        Self::new(record)
    }
}
