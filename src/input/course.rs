use serde::Deserialize;

use crate::input::TimePeriod;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// A single course from the data file.
///
/// Only `title` is required. Any other keys the data file carries for a
/// course are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseRecord {
    title: String,
    time_period: Option<TimePeriod>,
    description: Option<String>,
    instructors: Option<Vec<String>>,
    homepage: Option<String>,
    syllabus: Option<String>,
    org: Option<String>,
}

impl CourseRecord {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time_period: None,
            description: None,
            instructors: None,
            homepage: None,
            syllabus: None,
            org: None,
        }
    }

    #[must_use]
    pub fn with_time_period(mut self, time_period: impl Into<TimePeriod>) -> Self {
        self.time_period = Some(time_period.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_instructors<I, S>(mut self, instructors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructors = Some(instructors.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    #[must_use]
    pub fn with_syllabus(mut self, syllabus: impl Into<String>) -> Self {
        self.syllabus = Some(syllabus.into());
        self
    }

    #[must_use]
    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org = Some(org.into());
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The time period, unless it is missing or empty.
    #[must_use]
    pub fn time_period(&self) -> Option<&TimePeriod> {
        self.time_period
            .as_ref()
            .filter(|time_period| !time_period.is_empty())
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    #[must_use]
    pub fn instructors(&self) -> Option<&[String]> {
        self.instructors
            .as_deref()
            .filter(|instructors| !instructors.is_empty())
    }

    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        non_empty(&self.homepage)
    }

    #[must_use]
    pub fn syllabus(&self) -> Option<&str> {
        non_empty(&self.syllabus)
    }

    #[must_use]
    pub fn org(&self) -> Option<&str> {
        non_empty(&self.org)
    }
}
