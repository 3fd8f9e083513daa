use core::fmt;
use std::ops::Deref;

use derive_more::Display;
use serde::{de, Deserialize};

/// The free-form `time_period` of a course, like `2021 Fall` or `2019`.
///
/// Data files often contain a bare year, which yaml parses as a number, so
/// numbers are accepted and stored in their decimal form.
#[derive(Debug, Clone, Display, PartialEq, Eq, Hash)]
#[display("{}", _0)]
pub struct TimePeriod(String);

impl TimePeriod {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TimePeriod {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for TimePeriod {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

struct TimePeriodVisitor;

impl<'de> de::Visitor<'de> for TimePeriodVisitor {
    type Value = TimePeriod;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a time period like `2021 Fall` or a year")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(TimePeriod::new(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(TimePeriod(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(TimePeriod(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(TimePeriod(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(TimePeriod(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for TimePeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(TimePeriodVisitor)
    }
}
