use std::error::Error;
use std::fmt;

use super::csv_rows::ParseError;
use super::fetcher::FetchError;
use crate::domain::DatasetKey;

/// Why one dataset resource could not be turned into a series.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Fetch { key: DatasetKey, source: FetchError },
    Parse { key: DatasetKey, source: ParseError },
}

impl LoadError {
    pub fn key(&self) -> DatasetKey {
        match self {
            LoadError::Fetch { key, .. } | LoadError::Parse { key, .. } => *key,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Fetch messages already carry the URL or path.
            LoadError::Fetch { source, .. } => write!(f, "{}", source),
            LoadError::Parse { key, source } => {
                write!(f, "Failed to parse {}: {}", key.resource_name(), source)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Fetch { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}
