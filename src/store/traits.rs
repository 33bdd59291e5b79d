//! Storage port used by the wizard, mockable in tests

use crate::state::FormValues;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the persistence medium
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored form values are not parseable: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key-value storage for the whole form value set
#[cfg_attr(test, mockall::automock)]
pub trait FormStore {
    /// Store `values` under `key`, replacing any previous entry
    fn save(&mut self, key: &str, values: &FormValues) -> Result<(), StoreError>;

    /// Previously saved values, `None` when nothing is stored under `key`
    fn load(&self, key: &str) -> Result<Option<FormValues>, StoreError>;

    /// Remove the entry under `key`; removing a missing entry succeeds
    fn clear(&mut self, key: &str) -> Result<(), StoreError>;
}
