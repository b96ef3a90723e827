//! Reelbox Core - Bounded media file storage
//!
//! This crate provides the building blocks for a small video inventory:
//! validated media file values, a quota-bounded file storage, editors that
//! merge stored files into one output, and configuration and tracing setup.

pub mod config;
pub mod editor;
pub mod media;
pub mod storage;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::ReelboxConfig;
pub use editor::{EditError, Editor, FileEditor};
pub use media::{MediaError, MediaFile};
pub use storage::{FileStorage, StorageError};

/// Core errors that can bubble up from any Reelbox subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ReelboxError {
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReelboxError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ReelboxError::Media(e) => e.to_string(),
            ReelboxError::Storage(StorageError::Io(_))
            | ReelboxError::Edit(EditError::Io(_))
            | ReelboxError::Io(_) => "Output error occurred".to_string(),
            ReelboxError::Storage(e) => e.to_string(),
            ReelboxError::Edit(e) => e.to_string(),
            ReelboxError::Configuration { reason } => format!("Invalid configuration: {reason}"),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            ReelboxError::Io(_)
                | ReelboxError::Storage(StorageError::Io(_))
                | ReelboxError::Edit(EditError::Io(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, ReelboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_keeps_domain_text() {
        let error = ReelboxError::from(StorageError::WrongIndex { index: 4 });

        assert_eq!(error.user_message(), "Wrong file index 4");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_io_errors_are_not_user_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error = ReelboxError::from(EditError::Io(io));

        assert_eq!(error.user_message(), "Output error occurred");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_question_mark_converts_subsystem_errors() {
        fn build() -> Result<FileStorage> {
            let mut storage = FileStorage::create(1, 10)?;
            storage.add(MediaFile::new(5, "VideoFile1.mkv")?)?;
            storage.add(MediaFile::new(5, "VideoFile2.mkv")?)?;
            Ok(storage)
        }

        assert!(matches!(
            build(),
            Err(ReelboxError::Storage(StorageError::RestrictionViolation))
        ));
    }
}
