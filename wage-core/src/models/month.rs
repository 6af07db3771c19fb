use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar month in `YYYY-MM` form, the key of the monthly trend.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthLabel(String);

impl MonthLabel {
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    /// The month of the local clock.
    pub fn current() -> Self {
        Self::from_date(&Local::now().date_naive())
    }

    /// Parses `YYYY-MM`; anything chrono cannot read as a real month is
    /// rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() != 7 {
            return None;
        }
        NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .ok()
            .map(|date| Self::from_date(&date))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MonthLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid month label '{value}'"))
    }
}

impl From<MonthLabel> for String {
    fn from(label: MonthLabel) -> Self {
        label.0
    }
}
