//! Centralized configuration for Reelbox.
//!
//! All tunable parameters are defined here to avoid hard-coded limits
//! scattered throughout the codebase.

use crate::storage::{FileStorage, StorageError};

/// Name given to the file produced by concatenating a storage.
pub const DEFAULT_EDITED_FILE_NAME: &str = "EditedVideo.mkv";

/// Central configuration for all Reelbox components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReelboxConfig {
    pub storage: StorageConfig,
    pub editor: EditorConfig,
}

/// Restrictions applied to new storages.
///
/// Limits are kept signed so invalid user input reaches
/// `FileStorage::create` and is rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Maximum number of files
    pub files_limit: i64,
    /// Maximum summed size of all files
    pub size_limit: i64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            files_limit: 10,
            size_limit: 1000,
        }
    }
}

impl StorageConfig {
    /// Builds an empty storage with these restrictions.
    ///
    /// # Errors
    ///
    /// - `StorageError::InvalidLimits` - If either limit is not positive
    pub fn create_storage(&self) -> Result<FileStorage, StorageError> {
        FileStorage::create(self.files_limit, self.size_limit)
    }
}

/// Settings for editing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Name of the edited output file
    pub output_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_EDITED_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReelboxConfig::default();

        assert_eq!(config.storage.files_limit, 10);
        assert_eq!(config.storage.size_limit, 1000);
        assert_eq!(config.editor.output_name, "EditedVideo.mkv");
    }

    #[test]
    fn test_create_storage_uses_limits() {
        let config = StorageConfig {
            files_limit: 3,
            size_limit: 50,
        };

        let storage = config.create_storage().unwrap();

        assert_eq!(storage.files_limit(), 3);
        assert_eq!(storage.size_limit(), 50);
    }

    #[test]
    fn test_create_storage_rejects_invalid_limits() {
        let config = StorageConfig {
            files_limit: 3,
            size_limit: -5,
        };

        assert!(config.create_storage().is_err());
    }
}
