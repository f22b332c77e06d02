use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::record::Record;
use crate::model::stats::Leaderboard;
use crate::service::stats::aggregate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeekSummary {
    /// The stored `Data_Week` value.
    pub week: String,
    pub records: usize,
    pub leaderboard: Leaderboard,
}

/// Splits the record set by week and aggregates each week on its own,
/// newest week first.
pub fn weekly_history(records: &[Record], roster: &[String]) -> Vec<WeekSummary> {
    let mut by_week: BTreeMap<&str, Vec<Record>> = BTreeMap::new();
    for record in records {
        by_week.entry(record.week.as_str()).or_default().push(record.clone());
    }

    by_week
        .into_iter()
        .rev()
        .map(|(week, rows)| WeekSummary {
            week: week.to_string(),
            records: rows.len(),
            leaderboard: aggregate(&rows, roster),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::choice::Choice;

    #[test]
    fn test_weeks_are_newest_first() {
        let roster = vec!["Alice".to_string(), "Bob".to_string()];
        let records = vec![
            Record::new("2026-10-12", "Wtorek (13.10)", "Alice", Choice::Driver),
            Record::new("2026-10-19", "Wtorek (20.10)", "Bob", Choice::Driver),
            Record::new("2026-10-19", "Środa (21.10)", "Alice", Choice::Passenger),
            Record::new("2026-10-05", "Piątek (09.10)", "Bob", Choice::NotGoing),
        ];
        let history = weekly_history(&records, &roster);
        let weeks: Vec<&str> = history.iter().map(|w| w.week.as_str()).collect();
        assert_eq!(weeks, vec!["2026-10-19", "2026-10-12", "2026-10-05"]);

        let latest = &history[0];
        assert_eq!(latest.records, 2);
        assert_eq!(latest.leaderboard.get("Bob").unwrap().driver_trips, 1);
        assert_eq!(latest.leaderboard.get("Alice").unwrap().points, 1);

        let merged = history
            .iter()
            .fold(Leaderboard::new(&roster), |acc, w| acc.merge(&w.leaderboard));
        assert_eq!(merged, aggregate(&records, &roster));
    }

    #[test]
    fn test_empty_history() {
        assert!(weekly_history(&[], &["Alice".to_string()]).is_empty());
    }
}
