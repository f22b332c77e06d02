use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::error::StoreError;
use crate::model::record::{parse_rows, Record};
use crate::model::week::WeekKey;
use crate::repository::traits::RecordStore;

const DEFAULT_FILE_NAME: &str = "records.json";

/// Default data directory, `~/.carpool`.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".carpool"))
}

/// Rows kept as a JSON array in a single file.
#[derive(Clone, Debug)]
pub struct FileRecordStore {
    file_path: PathBuf,
}

impl FileRecordStore {
    /// Opens `<base_dir>/records.json`, creating it as an empty array
    /// when missing. Without `base_dir` the file lives in `~/.carpool`.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Self::at(dir.join(DEFAULT_FILE_NAME))
    }

    /// Opens a store at an explicit file path.
    pub fn at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Value>::new())?;
            writer.flush()?;
        }
        Ok(FileRecordStore { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_rows(&self) -> Result<Vec<Value>, StoreError> {
        let file = File::open(&self.file_path).map_err(|e| StoreError::io(&self.file_path, e))?;
        let reader = BufReader::new(file);
        let rows: Vec<Value> = serde_json::from_reader(reader)?;
        Ok(rows)
    }

    fn write_rows(&self, rows: &[Value]) -> Result<(), StoreError> {
        let tmp_path = self.file_path.with_extension("json.tmp");
        let file = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, rows)?;
        writer.flush().map_err(|e| StoreError::io(&tmp_path, e))?;
        drop(writer);
        fs::rename(&tmp_path, &self.file_path).map_err(|e| StoreError::io(&self.file_path, e))?;
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        let rows = self.read_rows()?;
        tracing::debug!(path = %self.file_path.display(), rows = rows.len(), "read record file");
        Ok(parse_rows(&rows))
    }

    fn replace_week(&self, week: &WeekKey, records: &[Record]) -> Result<(), StoreError> {
        let week_str = week.to_string();
        let mut rows = self.read_rows()?;
        // Rows we cannot parse are kept unless they clearly belong to this week.
        // The week is trimmed the same way row parsing trims it.
        rows.retain(|row| {
            row.get("Data_Week").and_then(Value::as_str).map(str::trim) != Some(week_str.as_str())
        });
        for record in records {
            rows.push(serde_json::to_value(record)?);
        }
        self.write_rows(&rows)
    }
}
