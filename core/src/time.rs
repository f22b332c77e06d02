use chrono::{Datelike, Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::week::{Week, WeekKey};

/// From which weekend day on the planner shows the upcoming week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RolloverRule {
    /// Saturday and Sunday show next week.
    #[default]
    Saturday,
    /// Only Sunday shows next week; Saturday still shows the week just ending.
    Sunday,
}

impl RolloverRule {
    fn first_rollover_day(self) -> u32 {
        match self {
            RolloverRule::Saturday => 5,
            RolloverRule::Sunday => 6,
        }
    }
}

pub fn resolve_week(now: NaiveDateTime) -> Week {
    resolve_week_with(now, RolloverRule::default())
}

/// Picks the Monday-anchored work week to display for `now`.
///
/// On or after the rollover day the next week's Monday is used,
/// otherwise the current week's Monday, however late in the week it is.
pub fn resolve_week_with(now: NaiveDateTime, rule: RolloverRule) -> Week {
    let today = now.date();
    let w = today.weekday().num_days_from_monday();
    let monday = if w >= rule.first_rollover_day() {
        today + Duration::days(7 - w as i64)
    } else {
        today - Duration::days(w as i64)
    };
    Week::from_key(WeekKey::containing(monday))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_weekdays_stay_on_current_week() {
        // 2026-10-19 is a Monday
        for d in 19..=23 {
            let week = resolve_week(at(2026, 10, d, 8));
            assert_eq!(week.key.to_string(), "2026-10-19");
        }
        assert_eq!(resolve_week(at(2026, 10, 23, 23)).key.to_string(), "2026-10-19");
    }

    #[test]
    fn test_weekend_rolls_over() {
        assert_eq!(resolve_week(at(2026, 10, 24, 0)).key.to_string(), "2026-10-26");
        assert_eq!(resolve_week(at(2026, 10, 25, 12)).key.to_string(), "2026-10-26");
    }

    #[test]
    fn test_sunday_rule() {
        let sat = resolve_week_with(at(2026, 10, 24, 10), RolloverRule::Sunday);
        assert_eq!(sat.key.to_string(), "2026-10-19");
        let sun = resolve_week_with(at(2026, 10, 25, 10), RolloverRule::Sunday);
        assert_eq!(sun.key.to_string(), "2026-10-26");
    }

    #[test]
    fn test_every_day_resolves_to_a_monday() {
        let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2028, 12, 31).unwrap();
        while date <= end {
            let now = date.and_hms_opt(13, 0, 0).unwrap();
            let own = WeekKey::containing(date);
            let week = resolve_week(now);
            assert_eq!(week.key.monday().weekday(), Weekday::Mon);
            if date.weekday().num_days_from_monday() >= 5 {
                assert_eq!(week.key.monday() - own.monday(), Duration::days(7));
            } else {
                assert_eq!(week.key, own);
            }
            assert_eq!(week.days[0].date, week.key.monday());
            assert_eq!(week.days[4].date.weekday(), Weekday::Fri);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_rule_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            rollover: RolloverRule,
        }
        let w: Wrapper = toml::from_str("rollover = \"sunday\"").unwrap();
        assert_eq!(w.rollover, RolloverRule::Sunday);
    }
}
