// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a conversion run.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{0}")]
    Usage(String),

    #[error("{}: line {line}: {message}", path.display())]
    Format {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("line {line}: no {table} entry for {key:?}")]
    Lookup {
        line: u64,
        table: &'static str,
        key: String,
    },

    #[error("line {line}: cannot parse {field} {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("{}: line {line}: team {name:?} is listed more than once", path.display())]
    DuplicateKey {
        path: PathBuf,
        line: u64,
        name: String,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ScheduleError {
    /// Process exit code for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScheduleError::Io { .. } | ScheduleError::Csv { .. } => 1,
            ScheduleError::Usage(_) => 2,
            ScheduleError::Format { .. } => 3,
            ScheduleError::Lookup { .. } => 4,
            ScheduleError::Parse { .. } => 5,
            ScheduleError::DuplicateKey { .. } => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
