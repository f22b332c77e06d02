use crate::error::StoreError;
use crate::model::record::Record;
use crate::model::week::WeekKey;

/// Where the sign-up rows live.
///
/// `fetch_all` returns an empty list for an empty store. `replace_week`
/// drops every row of `week` and writes `records` in their place,
/// leaving other weeks alone.
pub trait RecordStore {
    fn fetch_all(&self) -> Result<Vec<Record>, StoreError>;
    fn replace_week(&self, week: &WeekKey, records: &[Record]) -> Result<(), StoreError>;
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        (**self).fetch_all()
    }

    fn replace_week(&self, week: &WeekKey, records: &[Record]) -> Result<(), StoreError> {
        (**self).replace_week(week, records)
    }
}
