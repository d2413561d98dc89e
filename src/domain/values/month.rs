use crate::domain::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, 1 (January) through 12 (December). Carries no year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Month(u32);

impl Month {
    pub const MARCH: Month = Month(3);

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(1..=12).contains(&value) {
            return Err(DomainError::Validation(format!(
                "month must be between 1 and 12, got {value}"
            )));
        }
        Ok(Month(value as u32))
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    pub fn name(&self) -> &'static str {
        NAMES[(self.0 - 1) as usize]
    }

    /// True when the timestamp falls in this month of any year.
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        date.month() == self.0
    }
}

impl TryFrom<i64> for Month {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Month::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Month::new(n);
        }
        let lower = s.to_lowercase();
        NAMES
            .iter()
            .position(|name| {
                let name = name.to_lowercase();
                name == lower || (lower.len() >= 3 && name.starts_with(&lower))
            })
            .map(|i| Month(i as u32 + 1))
            .ok_or_else(|| DomainError::Validation(format!("Unknown month: {s}")))
    }
}
