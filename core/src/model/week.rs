use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

const WEEK_KEY_FORMAT: &str = "%Y-%m-%d";

const DAY_NAMES: [&str; 5] = ["Poniedziałek", "Wtorek", "Środa", "Czwartek", "Piątek"];

/// Identifies a work week by the date of its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    pub fn new(monday: NaiveDate) -> Result<Self, RecordError> {
        if monday.weekday() != Weekday::Mon {
            return Err(RecordError::NotAMonday(monday));
        }
        Ok(WeekKey(monday))
    }

    /// Monday of the week `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        WeekKey(date - Duration::days(offset))
    }

    pub fn monday(&self) -> NaiveDate {
        self.0
    }

    pub fn succ(&self) -> Self {
        WeekKey(self.0 + Duration::weeks(1))
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WEEK_KEY_FORMAT))
    }
}

impl FromStr for WeekKey {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), WEEK_KEY_FORMAT)
            .map_err(|_| RecordError::InvalidDate(s.to_string()))?;
        WeekKey::new(date)
    }
}

impl TryFrom<String> for WeekKey {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekKey> for String {
    fn from(key: WeekKey) -> Self {
        key.to_string()
    }
}

/// One weekday of a week, with the label used both as the grid row
/// header and as the stored `Dzien` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayLabel {
    pub date: NaiveDate,
    pub label: String,
}

impl DayLabel {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }

    /// Builds the canonical label, e.g. `Środa (21.10)`. Weekend dates
    /// get no name and only carry the date.
    pub fn for_date(date: NaiveDate) -> Self {
        let idx = date.weekday().num_days_from_monday() as usize;
        let label = match DAY_NAMES.get(idx) {
            Some(name) => format!("{} ({})", name, date.format("%d.%m")),
            None => date.format("%d.%m").to_string(),
        };
        Self { date, label }
    }

    pub fn name(&self) -> &str {
        self.label
            .split_once(" (")
            .map(|(name, _)| name)
            .unwrap_or(&self.label)
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A resolved Monday-to-Friday work week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub key: WeekKey,
    pub days: [DayLabel; 5],
}

impl Week {
    pub fn from_key(key: WeekKey) -> Self {
        let monday = key.monday();
        let days = [0, 1, 2, 3, 4].map(|i| DayLabel::for_date(monday + Duration::days(i)));
        Self { key, days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_key_rejects_non_monday() {
        assert!(WeekKey::new(date(2026, 10, 19)).is_ok());
        assert_eq!(
            WeekKey::new(date(2026, 10, 20)),
            Err(RecordError::NotAMonday(date(2026, 10, 20)))
        );
        assert!("2026-10-21".parse::<WeekKey>().is_err());
        assert!("19.10.2026".parse::<WeekKey>().is_err());
    }

    #[test]
    fn test_week_key_format() {
        let key: WeekKey = "2026-10-19".parse().unwrap();
        assert_eq!(key.to_string(), "2026-10-19");
        assert_eq!(key.succ().to_string(), "2026-10-26");
        assert_eq!(WeekKey::containing(date(2026, 10, 25)), key);
    }

    #[test]
    fn test_day_labels() {
        let week = Week::from_key("2026-12-28".parse().unwrap());
        let labels: Vec<&str> = week.days.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Poniedziałek (28.12)",
                "Wtorek (29.12)",
                "Środa (30.12)",
                "Czwartek (31.12)",
                "Piątek (01.01)",
            ]
        );
        assert_eq!(week.days[2].name(), "Środa");
        assert_eq!(week.days[4].date, date(2027, 1, 1));
    }
}
