pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Config, StoreConfig};
pub use error::{RecordError, StoreError};
pub use input::{expand_key, resolve_day, resolve_person};
pub use model::choice::Choice;
pub use model::grid::Grid;
pub use model::record::Record;
pub use model::stats::{Leaderboard, PersonStats};
pub use model::week::{DayLabel, Week, WeekKey};
pub use repository::{FileRecordStore, HttpRecordStore, MemoryRecordStore, RecordStore};
pub use service::planner_service::{PlannerService, Session};
pub use service::reconcile::{to_grid, to_records};
pub use service::stats::aggregate;
pub use time::{resolve_week, resolve_week_with, RolloverRule};
pub use usecase::history::{weekly_history, WeekSummary};
