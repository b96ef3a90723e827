//! Editing operations over stored media files.
//!
//! An `Editor` turns the contents of a storage into a single synthetic
//! output file. `FileEditor` is the concatenating strategy: it joins every
//! stored video into one long file without modifying the storage.

use std::io::Write;

use tracing::debug;

use crate::config::EditorConfig;
use crate::media::{MediaError, MediaFile};
use crate::storage::{EMPTY_STORAGE_MESSAGE, FileStorage};

/// Errors that occur while editing.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// Nothing to edit
    #[error("{}", EMPTY_STORAGE_MESSAGE)]
    EmptyStorage,

    /// Output file could not be described as a media file
    #[error("Invalid edited file: {0}")]
    InvalidOutput(#[from] MediaError),

    /// Writing the report to the output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Produces one edited file from a set of source files.
pub trait Editor {
    /// Runs the edit, reports the result to `out` and returns the edited file.
    ///
    /// # Errors
    ///
    /// - `EditError::EmptyStorage` - If there is nothing to edit
    /// - `EditError::Io` - If writing to `out` failed
    fn edit(&self, out: &mut dyn Write) -> Result<MediaFile, EditError>;
}

/// Editor that concatenates every file of a storage into one video.
#[derive(Debug, Clone)]
pub struct FileEditor<'a> {
    storage: &'a FileStorage,
    output_name: String,
}

impl<'a> FileEditor<'a> {
    /// Creates an editor over `storage` using the default output name.
    pub fn new(storage: &'a FileStorage) -> Self {
        Self::with_config(storage, &EditorConfig::default())
    }

    /// Creates an editor over `storage` using `config`.
    pub fn with_config(storage: &'a FileStorage, config: &EditorConfig) -> Self {
        Self {
            storage,
            output_name: config.output_name.clone(),
        }
    }
}

impl Editor for FileEditor<'_> {
    fn edit(&self, out: &mut dyn Write) -> Result<MediaFile, EditError> {
        if self.storage.is_empty() {
            return Err(EditError::EmptyStorage);
        }

        let total_size = i64::try_from(self.storage.total_size())
            .map_err(|_| MediaError::SizeOverflow)?;
        let edited = MediaFile::new(total_size, self.output_name.as_str())?;

        debug!(
            sources = self.storage.len(),
            edited = %edited,
            "Concatenated stored files"
        );
        writeln!(out, "Edited file is {}", edited.name())?;

        Ok(edited)
    }
}
