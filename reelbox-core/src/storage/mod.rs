//! Storage layer for media files.
//!
//! Defines the quota-bounded `FileStorage` collection and the errors raised
//! when its restrictions are violated.

pub mod file_storage;

pub use file_storage::FileStorage;

/// Message reported when an add would break a storage restriction.
pub const RESTRICTION_VIOLATION_MESSAGE: &str = "Cannot add file due to restriction violations";

/// Message reported for an empty storage.
pub const EMPTY_STORAGE_MESSAGE: &str = "Your storage is empty";

/// Errors that occur during storage operations.
///
/// Covers invalid quota configuration, quota violations on insert, and
/// out-of-range positional removal.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Files or size limit is not strictly positive
    #[error("Storage limits must be positive: files_limit={files_limit}, size_limit={size_limit}")]
    InvalidLimits {
        /// Requested maximum number of files
        files_limit: i64,
        /// Requested maximum total size
        size_limit: i64,
    },

    /// Adding the file would exceed the files or size limit
    #[error("{}", RESTRICTION_VIOLATION_MESSAGE)]
    RestrictionViolation,

    /// Index does not address a stored file
    #[error("Wrong file index {index}")]
    WrongIndex {
        /// Rejected index
        index: i64,
    },

    /// Writing a report to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
