use chrono::NaiveDateTime;

use crate::error::StoreError;
use crate::model::choice::Choice;
use crate::model::grid::Grid;
use crate::model::record::Record;
use crate::model::stats::Leaderboard;
use crate::model::week::Week;
use crate::repository::RecordStore;
use crate::service::reconcile::{to_grid, to_records};
use crate::service::stats::aggregate;
use crate::time::{resolve_week_with, RolloverRule};
use crate::usecase::history::{weekly_history, WeekSummary};

/// State of one editing session: the week on screen, its editable grid
/// and the all-time stats as of the last fetch.
#[derive(Debug, Clone)]
pub struct Session {
    pub week: Week,
    pub grid: Grid,
    pub leaderboard: Leaderboard,
    /// Snapshot of the full record set the session was built from.
    pub records: Vec<Record>,
    /// Set when the store could not be read and the grid starts empty.
    pub degraded: bool,
}

pub struct PlannerService<R: RecordStore> {
    store: R,
    roster: Vec<String>,
    rule: RolloverRule,
}

impl<R: RecordStore> PlannerService<R> {
    pub fn new(store: R, roster: Vec<String>, rule: RolloverRule) -> Self {
        Self { store, roster, rule }
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Resolves the week for `now` and builds its grid. A failing store
    /// yields an all-`Unknown` grid flagged as degraded instead of an error.
    pub fn open_session(&self, now: NaiveDateTime) -> Session {
        let week = resolve_week_with(now, self.rule);
        let (records, degraded) = match self.store.fetch_all() {
            Ok(records) => (records, false),
            Err(err) => {
                tracing::warn!(error = %err, week = %week.key, "could not load records, starting from an empty grid");
                (Vec::new(), true)
            }
        };
        let grid = to_grid(&records, &week.key, &week.days, &self.roster);
        let leaderboard = aggregate(&records, &self.roster);
        Session {
            week,
            grid,
            leaderboard,
            records,
            degraded,
        }
    }

    /// Re-reads the store for the session's week, discarding unsaved edits.
    pub fn reload(&self, session: &mut Session) -> Result<(), StoreError> {
        let records = self.store.fetch_all()?;
        session.grid = to_grid(&records, &session.week.key, &session.week.days, &self.roster);
        session.leaderboard = aggregate(&records, &self.roster);
        session.records = records;
        session.degraded = false;
        Ok(())
    }

    pub fn set_choice(&self, session: &mut Session, day: usize, person: &str, choice: Choice) -> bool {
        session.grid.set_by_name(day, person, choice)
    }

    /// Writes the whole week back, replacing whatever the store held for
    /// it. Errors are returned untouched so the caller can report them.
    pub fn save(&self, session: &mut Session) -> Result<(), StoreError> {
        let week = &session.week;
        let rows = to_records(&session.grid, &week.key, &week.days, &self.roster);

        if let Err(err) = self.store.replace_week(&week.key, &rows) {
            tracing::error!(error = %err, week = %week.key, "saving week failed");
            return Err(err);
        }
        tracing::info!(week = %week.key, rows = rows.len(), "saved week");

        match self.store.fetch_all() {
            Ok(records) => session.records = records,
            Err(err) => {
                tracing::warn!(error = %err, "saved, but could not refresh records; using local copy");
                let week_str = week.key.to_string();
                session.records.retain(|r| r.week != week_str);
                session.records.extend(rows);
            }
        }
        session.leaderboard = aggregate(&session.records, &self.roster);
        session.degraded = false;
        Ok(())
    }

    pub fn history(&self) -> Result<Vec<WeekSummary>, StoreError> {
        let records = self.store.fetch_all()?;
        Ok(weekly_history(&records, &self.roster))
    }
}
