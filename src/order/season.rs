use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

/// The academic season a course took place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    #[must_use]
    pub const fn seasons() -> [Self; 4] {
        [Self::Spring, Self::Summer, Self::Fall, Self::Winter]
    }

    /// The month the season starts in, as a 2-digit string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Spring => "03",
            Self::Summer => "06",
            Self::Fall => "09",
            Self::Winter => "11",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown season `{0}`")]
pub struct UnknownSeason(String);

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::seasons()
            .into_iter()
            .find(|season| season.to_string() == value)
            .ok_or_else(|| UnknownSeason(value.to_string()))
    }
}
