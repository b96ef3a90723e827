//! Media file value type.
//!
//! A `MediaFile` is an immutable `(size, name)` pair validated at
//! construction. Combining two files produces a new file whose name records
//! both source numbers, e.g. `VideoFile1.mkv` + `VideoFile2.mkv` gives
//! `VideoFile1+2.mkv`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Extension every media file name must carry, including the dot.
pub const MKV_EXTENSION: &str = ".mkv";

/// Token that precedes the file number in conventional names.
const FILE_TOKEN: &str = "File";

/// Errors raised while constructing or combining media files.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// Name does not end with `.mkv`
    #[error("File name should have `.mkv` extension: {name}")]
    InvalidExtension {
        /// Rejected file name
        name: String,
    },

    /// Size is below zero
    #[error("File size should be non-negative, got {size}")]
    NegativeSize {
        /// Rejected size
        size: i64,
    },

    /// Combined size exceeds the representable range
    #[error("Combined file size overflows")]
    SizeOverflow,

    /// Name has no number token ending in a digit
    #[error("Cannot extract file number from name: {name}")]
    UnparsableNumber {
        /// Name that could not be parsed
        name: String,
    },
}

/// Immutable named and sized video file.
///
/// Equality and hashing are structural over `(size, name)`, so two files
/// built from the same inputs are interchangeable as map or set keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMediaFile")]
pub struct MediaFile {
    size: u64,
    name: String,
}

impl MediaFile {
    /// Creates a media file after validating its name and size.
    ///
    /// # Errors
    ///
    /// - `MediaError::InvalidExtension` - If `name` does not end with `.mkv`
    /// - `MediaError::NegativeSize` - If `size` is below zero
    pub fn new(size: i64, name: impl Into<String>) -> Result<Self, MediaError> {
        let name = name.into();
        if !name.ends_with(MKV_EXTENSION) {
            return Err(MediaError::InvalidExtension { name });
        }
        let size = u64::try_from(size).map_err(|_| MediaError::NegativeSize { size })?;

        Ok(Self { size, name })
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// File name including the `.mkv` extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Combines this file with `other` into a new file.
    ///
    /// The result size is the sum of both sizes. The result name keeps this
    /// file's prefix up to and including the `File` token, followed by
    /// `<N>+<M>.mkv` where `N` and `M` are the number tokens of this file and
    /// `other`. Neither operand is modified.
    ///
    /// # Errors
    ///
    /// - `MediaError::UnparsableNumber` - If either name lacks a number token ending in a digit
    /// - `MediaError::SizeOverflow` - If the summed size does not fit in `u64`
    pub fn combine(&self, other: &MediaFile) -> Result<MediaFile, MediaError> {
        let (prefix, current) = split_number_token(&self.name)?;
        let (_, next) = split_number_token(&other.name)?;
        let size = self
            .size
            .checked_add(other.size)
            .ok_or(MediaError::SizeOverflow)?;

        Ok(MediaFile {
            size,
            name: format!("{prefix}{current}+{next}{MKV_EXTENSION}"),
        })
    }
}

impl fmt::Display for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File(name={}, size={})", self.name, self.size)
    }
}

impl TryFrom<RawMediaFile> for MediaFile {
    type Error = MediaError;

    fn try_from(raw: RawMediaFile) -> Result<Self, Self::Error> {
        MediaFile::new(raw.size, raw.name)
    }
}

/// Unvalidated wire form of a media file.
#[derive(Deserialize)]
struct RawMediaFile {
    size: i64,
    name: String,
}

/// Splits a name into the prefix ending with the `File` token and the number
/// token that follows it, up to the first dot.
///
/// Names without a `File` token use an empty prefix and the whole stem.
fn split_number_token(name: &str) -> Result<(&str, &str), MediaError> {
    let (prefix, rest) = match name.find(FILE_TOKEN) {
        Some(position) => name.split_at(position + FILE_TOKEN.len()),
        None => ("", name),
    };
    let token = rest.split_once('.').map_or(rest, |(token, _)| token);

    match token.chars().last() {
        Some(last) if last.is_ascii_digit() => Ok((prefix, token)),
        _ => Err(MediaError::UnparsableNumber {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_new_accepts_valid_file() {
        let file = MediaFile::new(42, "VideoFile7.mkv").unwrap();

        assert_eq!(file.size(), 42);
        assert_eq!(file.name(), "VideoFile7.mkv");
    }

    #[test]
    fn test_new_accepts_zero_size() {
        assert!(MediaFile::new(0, "VideoFile0.mkv").is_ok());
    }

    #[test]
    fn test_new_rejects_wrong_extension() {
        let result = MediaFile::new(10, "VideoFile1.mp4");

        assert_eq!(
            result,
            Err(MediaError::InvalidExtension {
                name: "VideoFile1.mp4".to_string()
            })
        );
    }

    #[test]
    fn test_new_rejects_extension_without_dot() {
        assert!(MediaFile::new(10, "VideoFile1mkv").is_err());
    }

    #[test]
    fn test_new_rejects_negative_size() {
        let result = MediaFile::new(-1, "VideoFile1.mkv");

        assert_eq!(result, Err(MediaError::NegativeSize { size: -1 }));
    }

    #[test]
    fn test_display_contains_both_fields() {
        let file = MediaFile::new(15, "VideoFile3.mkv").unwrap();

        assert_eq!(file.to_string(), "File(name=VideoFile3.mkv, size=15)");
    }

    #[test]
    fn test_combine_sums_sizes_and_joins_numbers() {
        let first = MediaFile::new(10, "VideoFile1.mkv").unwrap();
        let second = MediaFile::new(20, "VideoFile2.mkv").unwrap();

        let combined = first.combine(&second).unwrap();

        assert_eq!(combined, MediaFile::new(30, "VideoFile1+2.mkv").unwrap());
        // Operands are untouched
        assert_eq!(first.name(), "VideoFile1.mkv");
        assert_eq!(second.size(), 20);
    }

    #[test]
    fn test_combine_chains_previous_result() {
        let first = MediaFile::new(1, "VideoFile1.mkv").unwrap();
        let second = MediaFile::new(2, "VideoFile2.mkv").unwrap();
        let third = MediaFile::new(3, "VideoFile3.mkv").unwrap();

        let combined = first.combine(&second).unwrap().combine(&third).unwrap();

        assert_eq!(combined.name(), "VideoFile1+2+3.mkv");
        assert_eq!(combined.size(), 6);
    }

    #[test]
    fn test_combine_keeps_multi_digit_numbers() {
        let first = MediaFile::new(1, "VideoFile12.mkv").unwrap();
        let second = MediaFile::new(2, "VideoFile3.mkv").unwrap();

        assert_eq!(first.combine(&second).unwrap().name(), "VideoFile12+3.mkv");
    }

    #[test]
    fn test_combine_without_file_token_uses_whole_stem() {
        let first = MediaFile::new(1, "clip4.mkv").unwrap();
        let second = MediaFile::new(2, "VideoFile5.mkv").unwrap();

        assert_eq!(first.combine(&second).unwrap().name(), "clip4+5.mkv");
    }

    #[test]
    fn test_combine_rejects_name_without_number() {
        let numbered = MediaFile::new(1, "VideoFile1.mkv").unwrap();
        let unnumbered = MediaFile::new(2, "VideoFile.mkv").unwrap();

        assert_eq!(
            numbered.combine(&unnumbered),
            Err(MediaError::UnparsableNumber {
                name: "VideoFile.mkv".to_string()
            })
        );
        assert!(unnumbered.combine(&numbered).is_err());
    }

    #[test]
    fn test_combine_rejects_non_digit_suffix() {
        let first = MediaFile::new(1, "VideoFileX.mkv").unwrap();
        let second = MediaFile::new(2, "VideoFile2.mkv").unwrap();

        assert!(matches!(
            first.combine(&second),
            Err(MediaError::UnparsableNumber { .. })
        ));
    }

    #[test]
    fn test_equality_is_structural() {
        let a = MediaFile::new(5, "VideoFile0.mkv").unwrap();
        let b = MediaFile::new(5, "VideoFile0.mkv").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, MediaFile::new(6, "VideoFile0.mkv").unwrap());
        assert_ne!(a, MediaFile::new(5, "VideoFile1.mkv").unwrap());
    }

    #[test]
    fn test_hash_set_deduplicates_equal_files() {
        let mut set = HashSet::new();
        set.insert(MediaFile::new(5, "VideoFile0.mkv").unwrap());
        set.insert(MediaFile::new(5, "VideoFile0.mkv").unwrap());
        set.insert(MediaFile::new(5, "VideoFile1.mkv").unwrap());

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let file = MediaFile::new(9, "VideoFile9.mkv").unwrap();
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(json, r#"{"size":9,"name":"VideoFile9.mkv"}"#);

        let parsed: MediaFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);

        let invalid = serde_json::from_str::<MediaFile>(r#"{"size":-3,"name":"VideoFile9.mkv"}"#);
        assert!(invalid.is_err());
        let invalid = serde_json::from_str::<MediaFile>(r#"{"size":3,"name":"VideoFile9.avi"}"#);
        assert!(invalid.is_err());
    }
}
