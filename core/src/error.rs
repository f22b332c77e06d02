use std::path::PathBuf;

/// Failure talking to a record store. Every variant means the store
/// could not be read or written; callers decide whether to degrade
/// (on fetch) or to surface it (on save).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("remote store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote store rejected the request: {0}")]
    Rejected(String),

    #[error("record store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single stored row or value was rejected. These never reach the
/// user: rows that fail to parse are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing or empty field `{0}`")]
    MissingField(&'static str),

    #[error("unrecognised choice `{0}`")]
    UnknownChoice(String),

    #[error("`{0}` is not on the roster")]
    RosterMismatch(String),

    #[error("{0} is not a Monday")]
    NotAMonday(chrono::NaiveDate),

    #[error("invalid date `{0}`")]
    InvalidDate(String),
}
