// ABOUTME: Domain value types for user settings
// ABOUTME: Time-of-day pairs and the pay frequency enum

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid pay frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid time of day: {0} (expected H:M)")]
    InvalidTime(String),
}

/// How often the configured rate is paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Hour,
    Day,
    Month,
    Year,
}

impl PayFrequency {
    pub fn as_str(&self) -> &str {
        match self {
            PayFrequency::Hour => "hour",
            PayFrequency::Day => "day",
            PayFrequency::Month => "month",
            PayFrequency::Year => "year",
        }
    }
}

impl FromStr for PayFrequency {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(PayFrequency::Hour),
            "day" => Ok(PayFrequency::Day),
            "month" => Ok(PayFrequency::Month),
            "year" => Ok(PayFrequency::Year),
            _ => Err(SettingsError::InvalidFrequency(s.to_string())),
        }
    }
}

/// An hour/minute pair independent of any date.
///
/// Values decoded from well-formed input stay within 0-23 / 0-59. A
/// malformed-but-splittable stored value ("99:99") is carried verbatim, so
/// consumers that need a checked time go through [`TimeOfDay::as_naive_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Checked conversion; `None` when either component is out of range.
    pub fn as_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }

    /// This time of day reattached to today's date, in local time. The
    /// originally saved date is never persisted, so reading back always
    /// lands on the current day.
    pub fn today_at(&self) -> Option<DateTime<Local>> {
        let time = self.as_naive_time()?;
        Local::now().with_time(time).single()
    }
}

/// Keeps the hour and minute of any time-carrying chrono value and drops
/// the rest, date included.
impl<T: Timelike> From<&T> for TimeOfDay {
    fn from(value: &T) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    /// Renders the stored textual form: `"<hour>:<minute>"`, no padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = SettingsError;

    /// Splits on the first `:` and integer-parses both sides. Anything
    /// else is an error; out-of-range components are accepted verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| SettingsError::InvalidTime(s.to_string()))?;
        let hour = hour
            .parse()
            .map_err(|_| SettingsError::InvalidTime(s.to_string()))?;
        let minute = minute
            .parse()
            .map_err(|_| SettingsError::InvalidTime(s.to_string()))?;
        Ok(Self { hour, minute })
    }
}
