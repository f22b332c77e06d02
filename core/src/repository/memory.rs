use std::sync::Mutex;

use crate::error::StoreError;
use crate::model::record::Record;
use crate::model::week::WeekKey;
use crate::repository::traits::RecordStore;

/// Keeps rows in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<Record>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl RecordStore for MemoryRecordStore {
    fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn replace_week(&self, week: &WeekKey, records: &[Record]) -> Result<(), StoreError> {
        let mut stored = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        let week_str = week.to_string();
        stored.retain(|r| r.week != week_str);
        stored.extend_from_slice(records);
        Ok(())
    }
}
