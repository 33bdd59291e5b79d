//! Persistence for in-progress form values
//!
//! The wizard talks to storage only through [`FormStore`]. `FileStore` keeps
//! one JSON file per key on disk, `MemoryStore` keeps serialized payloads in a
//! map and backs the tests.

mod file;
#[cfg(test)]
mod memory;
mod submissions;
mod traits;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;
pub use submissions::SubmissionLog;
pub use traits::{FormStore, StoreError};

#[cfg(test)]
pub use traits::MockFormStore;

/// Key the form values are saved under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "userDetailsForm";
