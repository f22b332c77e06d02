
#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::error::StoreError;
    use crate::model::choice::Choice;
    use crate::model::record::Record;
    use crate::model::week::WeekKey;
    use crate::repository::{MemoryRecordStore, RecordStore};
    use crate::service::planner_service::PlannerService;
    use crate::time::RolloverRule;
    use chrono::{NaiveDate, NaiveDateTime};

    struct FlakyStore {
        inner: MemoryRecordStore,
        fail_fetch: Cell<bool>,
        fail_replace: Cell<bool>,
    }

    impl FlakyStore {
        fn new() -> Self {
            Self {
                inner: MemoryRecordStore::new(),
                fail_fetch: Cell::new(false),
                fail_replace: Cell::new(false),
            }
        }
    }

    impl RecordStore for FlakyStore {
        fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
            if self.fail_fetch.get() {
                return Err(StoreError::Unavailable("timed out".to_string()));
            }
            self.inner.fetch_all()
        }

        fn replace_week(&self, week: &WeekKey, records: &[Record]) -> Result<(), StoreError> {
            if self.fail_replace.get() {
                return Err(StoreError::Unavailable("timed out".to_string()));
            }
            self.inner.replace_week(week, records)
        }
    }

    fn roster() -> Vec<String> {
        vec!["Alice".to_string(), "Bob".to_string(), "Cleo".to_string()]
    }

    // Wednesday 2026-10-21
    fn wednesday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 21)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_save_then_load_returns_saved_grid() {
        let service = PlannerService::new(MemoryRecordStore::new(), roster(), RolloverRule::Saturday);
        let mut session = service.open_session(wednesday());
        assert!(!session.degraded);
        assert_eq!(session.week.key.to_string(), "2026-10-19");

        assert!(service.set_choice(&mut session, 0, "Alice", Choice::Driver));
        assert!(service.set_choice(&mut session, 0, "Bob", Choice::Passenger));
        assert!(service.set_choice(&mut session, 4, "Cleo", Choice::NotGoing));
        assert!(!service.set_choice(&mut session, 0, "Zoe", Choice::Driver));
        service.save(&mut session).unwrap();

        let reloaded = service.open_session(wednesday());
        assert_eq!(reloaded.grid, session.grid);
        assert_eq!(reloaded.records.len(), 15);

        let alice = reloaded.leaderboard.get("Alice").unwrap();
        assert_eq!((alice.points, alice.driver_trips), (2, 1));
        assert_eq!(session.leaderboard, reloaded.leaderboard);
    }

    #[test]
    fn test_unavailable_store_gives_degraded_blank_grid() {
        let store = FlakyStore::new();
        store
            .inner
            .replace_week(
                &"2026-10-19".parse().unwrap(),
                &[Record::new("2026-10-19", "Poniedziałek (19.10)", "Alice", Choice::Driver)],
            )
            .unwrap();
        store.fail_fetch.set(true);

        let service = PlannerService::new(store, roster(), RolloverRule::Saturday);
        let session = service.open_session(wednesday());
        assert!(session.degraded);
        assert!(session.grid.cells().all(|(_, _, c)| c == Choice::Unknown));
        assert_eq!(session.grid.cells().count(), 15);
        assert_eq!(session.leaderboard.total_points(), 0);
        assert!(service.history().is_err());
    }

    #[test]
    fn test_failed_save_is_reported() {
        let service = PlannerService::new(FlakyStore::new(), roster(), RolloverRule::Saturday);
        let mut session = service.open_session(wednesday());
        service.set_choice(&mut session, 1, "Bob", Choice::Driver);

        service.store().fail_replace.set(true);
        assert!(matches!(service.save(&mut session), Err(StoreError::Unavailable(_))));
        assert!(service.store().inner.fetch_all().unwrap().is_empty());
        assert_eq!(session.leaderboard.total_points(), 0);
    }

    #[test]
    fn test_refresh_failure_after_save_uses_local_rows() {
        let service = PlannerService::new(FlakyStore::new(), roster(), RolloverRule::Saturday);
        let mut session = service.open_session(wednesday());
        service.set_choice(&mut session, 2, "Cleo", Choice::Driver);

        service.store().fail_fetch.set(true);
        service.save(&mut session).unwrap();
        assert_eq!(session.records.len(), 15);
        assert_eq!(session.leaderboard.get("Cleo").unwrap().driver_trips, 1);
    }

    #[test]
    fn test_last_save_wins_for_whole_week() {
        let service = PlannerService::new(MemoryRecordStore::new(), roster(), RolloverRule::Saturday);
        let mut first = service.open_session(wednesday());
        let mut second = service.open_session(wednesday());

        service.set_choice(&mut first, 0, "Alice", Choice::Driver);
        service.save(&mut first).unwrap();

        service.set_choice(&mut second, 3, "Bob", Choice::Passenger);
        service.save(&mut second).unwrap();

        let latest = service.open_session(wednesday());
        assert_eq!(latest.grid, second.grid);
        assert_eq!(latest.grid.get(0, 0), Some(Choice::Unknown));
        assert_eq!(latest.grid.get(3, 1), Some(Choice::Passenger));
    }

    #[test]
    fn test_reload_discards_edits_and_history_lists_weeks() {
        let service = PlannerService::new(MemoryRecordStore::new(), roster(), RolloverRule::Saturday);
        let mut session = service.open_session(wednesday());
        service.set_choice(&mut session, 0, "Alice", Choice::Driver);
        service.save(&mut session).unwrap();

        let saturday = NaiveDate::from_ymd_opt(2026, 10, 24)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut next = service.open_session(saturday);
        assert_eq!(next.week.key.to_string(), "2026-10-26");
        service.set_choice(&mut next, 1, "Bob", Choice::Driver);
        service.reload(&mut next).unwrap();
        assert_eq!(next.grid.get(1, 1), Some(Choice::Unknown));
        assert_eq!(next.leaderboard.get("Alice").unwrap().points, 2);

        service.set_choice(&mut next, 1, "Bob", Choice::Driver);
        service.save(&mut next).unwrap();
        let history = service.history().unwrap();
        let weeks: Vec<&str> = history.iter().map(|w| w.week.as_str()).collect();
        assert_eq!(weeks, vec!["2026-10-26", "2026-10-19"]);
    }
}
