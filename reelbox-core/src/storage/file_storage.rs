//! Quota-bounded in-memory storage for media files.

use std::io::Write;

use tracing::{debug, warn};

use super::{EMPTY_STORAGE_MESSAGE, StorageError};
use crate::media::MediaFile;

/// Ordered collection of media files with a files limit and a size limit.
///
/// Insertion order is preserved and duplicates are allowed. At all times the
/// number of files stays within `files_limit` and their summed size within
/// `size_limit`; operations that would break either leave the storage
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    files_limit: usize,
    size_limit: u64,
    files: Vec<MediaFile>,
}

impl FileStorage {
    /// Creates an empty storage with the given restrictions.
    ///
    /// # Errors
    ///
    /// - `StorageError::InvalidLimits` - If either limit is zero or negative
    pub fn create(files_limit: i64, size_limit: i64) -> Result<Self, StorageError> {
        if files_limit <= 0 || size_limit <= 0 {
            return Err(StorageError::InvalidLimits {
                files_limit,
                size_limit,
            });
        }

        Ok(Self {
            // Positive i64 values only overflow usize on 32-bit targets
            files_limit: usize::try_from(files_limit).unwrap_or(usize::MAX),
            size_limit: size_limit.unsigned_abs(),
            files: Vec::new(),
        })
    }

    /// Maximum number of files this storage accepts.
    pub fn files_limit(&self) -> usize {
        self.files_limit
    }

    /// Maximum summed size this storage accepts.
    pub fn size_limit(&self) -> u64 {
        self.size_limit
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no files are stored.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Summed size of all stored files.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(MediaFile::size).sum()
    }

    /// Iterates stored files in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MediaFile> {
        self.files.iter()
    }

    /// Returns a snapshot of the stored files in insertion order.
    ///
    /// The snapshot is owned; changing it never affects the storage.
    pub fn all_files(&self) -> Vec<MediaFile> {
        self.files.clone()
    }

    /// Appends `file` if both restrictions still hold afterwards.
    ///
    /// # Errors
    ///
    /// - `StorageError::RestrictionViolation` - If the files limit is reached or the size limit would be exceeded
    pub fn add(&mut self, file: MediaFile) -> Result<(), StorageError> {
        let within_count = self.files.len() < self.files_limit;
        let within_size = self
            .total_size()
            .checked_add(file.size())
            .is_some_and(|total| total <= self.size_limit);

        if !(within_count && within_size) {
            warn!(
                file = %file,
                count = self.files.len(),
                files_limit = self.files_limit,
                total_size = self.total_size(),
                size_limit = self.size_limit,
                "Rejected file due to restriction violation"
            );
            return Err(StorageError::RestrictionViolation);
        }

        debug!(file = %file, "Added file to storage");
        self.files.push(file);
        Ok(())
    }

    /// Removes the first stored file equal to `file`.
    ///
    /// Returns whether a file was removed. A missing file is not an error.
    pub fn remove(&mut self, file: &MediaFile) -> bool {
        match self.files.iter().position(|stored| stored == file) {
            Some(position) => {
                self.files.remove(position);
                debug!(file = %file, position, "Removed file from storage");
                true
            }
            None => false,
        }
    }

    /// Removes and returns the file at `index`, shifting later files down.
    ///
    /// # Errors
    ///
    /// - `StorageError::WrongIndex` - If `index` is negative or not below the file count
    pub fn remove_at(&mut self, index: i64) -> Result<MediaFile, StorageError> {
        let position = self.checked_position(index)?;
        let removed = self.files.remove(position);
        debug!(file = %removed, position, "Removed file from storage");
        Ok(removed)
    }

    /// Returns the file at `index`.
    ///
    /// # Errors
    ///
    /// - `StorageError::WrongIndex` - If `index` is negative or not below the file count
    pub fn get(&self, index: i64) -> Result<&MediaFile, StorageError> {
        let position = self.checked_position(index)?;
        Ok(&self.files[position])
    }

    fn checked_position(&self, index: i64) -> Result<usize, StorageError> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.files.len())
            .ok_or_else(|| {
                warn!(index, count = self.files.len(), "Rejected out of range index");
                StorageError::WrongIndex { index }
            })
    }

    /// Returns names of files strictly larger than `size`, in insertion order.
    ///
    /// A negative threshold matches every file.
    pub fn names_larger_than(&self, size: i64) -> Vec<&str> {
        let threshold = u64::try_from(size).ok();
        self.iter()
            .filter(|file| threshold.is_none_or(|threshold| file.size() > threshold))
            .map(MediaFile::name)
            .collect()
    }

    /// Writes one line per file strictly larger than `size`.
    ///
    /// # Errors
    ///
    /// - `StorageError::Io` - If writing to `out` failed
    pub fn print_larger_than(&self, size: i64, out: &mut impl Write) -> Result<(), StorageError> {
        for name in self.names_larger_than(size) {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }

    /// One-line summary of the stored file names.
    ///
    /// Produces `"Your storage is empty"` when nothing is stored, otherwise the
    /// names joined by `", "` followed by `" in your storage"`.
    pub fn summary(&self) -> String {
        if self.files.is_empty() {
            return EMPTY_STORAGE_MESSAGE.to_string();
        }

        let names: Vec<&str> = self.files.iter().map(MediaFile::name).collect();
        format!("{} in your storage", names.join(", "))
    }

    /// Writes the summary line.
    ///
    /// # Errors
    ///
    /// - `StorageError::Io` - If writing to `out` failed
    pub fn print_summary(&self, out: &mut impl Write) -> Result<(), StorageError> {
        writeln!(out, "{}", self.summary())?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FileStorage {
    type Item = &'a MediaFile;
    type IntoIter = std::slice::Iter<'a, MediaFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
