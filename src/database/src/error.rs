use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure to read or parse a seed.
#[derive(Debug)]
pub enum DatabaseError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read seed {path}: {source}"),
            Self::Json(err) => write!(f, "invalid seed json: {err}"),
        }
    }
}

impl Error for DatabaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected read or write against `LeagueData`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(String),
    NotFound { entity: &'static str, id: u32 },
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: u32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::NotFound { entity, id } => write!(f, "{entity} with id {id} not found"),
        }
    }
}

impl Error for StoreError {}
