//! CLI command implementations

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reelbox_core::config::{ReelboxConfig, StorageConfig};
use reelbox_core::tracing_setup::CliLogLevel;
use reelbox_core::{Editor, FileEditor, FileStorage, MediaFile, Result};
use tracing::info;

/// Command-line arguments for Reelbox.
///
/// Files passed with `--file` are added to a fresh storage in order before
/// the subcommand runs.
#[derive(Debug, Parser)]
#[command(name = "reelbox")]
#[command(about = "Bounded media file storage")]
#[command(version)]
pub struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    pub log_level: CliLogLevel,

    /// Directory for the full debug log
    #[arg(long, global = true)]
    pub logs_dir: Option<PathBuf>,

    /// Maximum number of stored files
    #[arg(long, default_value_t = StorageConfig::default().files_limit, allow_negative_numbers = true)]
    pub files_limit: i64,

    /// Maximum summed size of stored files
    #[arg(long, default_value_t = StorageConfig::default().size_limit, allow_negative_numbers = true)]
    pub size_limit: i64,

    /// File to store, repeatable
    #[arg(short, long = "file", value_name = "NAME:SIZE", value_parser = parse_file_spec)]
    pub files: Vec<MediaFile>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List stored files
    List {
        /// Print the files as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print stored file names on one line
    Summary,
    /// Print names of files strictly larger than a size
    Larger {
        /// Size threshold
        #[arg(allow_negative_numbers = true)]
        size: i64,
    },
    /// Remove the first file equal to NAME:SIZE
    Remove {
        /// File to remove
        #[arg(value_name = "NAME:SIZE", value_parser = parse_file_spec)]
        file: MediaFile,
    },
    /// Remove the file at an index
    RemoveAt {
        /// Zero-based index
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Concatenate all stored files into one edited video
    Edit,
    /// Combine two stored files into a new file
    Combine {
        /// Index of the first file
        #[arg(allow_negative_numbers = true)]
        first: i64,
        /// Index of the second file
        #[arg(allow_negative_numbers = true)]
        second: i64,
    },
}

/// Parses a `NAME:SIZE` argument into a validated media file.
///
/// Splits on the last colon so names may contain colons themselves.
pub fn parse_file_spec(spec: &str) -> std::result::Result<MediaFile, String> {
    let (name, size) = spec
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:SIZE, got '{spec}'"))?;
    let size: i64 = size
        .trim()
        .parse()
        .map_err(|e| format!("invalid size '{size}': {e}"))?;

    MediaFile::new(size, name).map_err(|e| e.to_string())
}

/// Handle the CLI command
///
/// # Errors
/// - `ReelboxError::Storage` - Invalid limits, a rejected file or a wrong index
/// - `ReelboxError::Media` - Files could not be combined
/// - `ReelboxError::Edit` - Nothing to edit
/// - `ReelboxError::Io` - Writing output failed
pub fn handle_command(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = ReelboxConfig {
        storage: StorageConfig {
            files_limit: cli.files_limit,
            size_limit: cli.size_limit,
        },
        ..ReelboxConfig::default()
    };
    let mut storage = load_storage(&config.storage, cli.files)?;

    match cli.command {
        Commands::List { json } => list_files(&storage, json, out),
        Commands::Summary => Ok(storage.print_summary(out)?),
        Commands::Larger { size } => Ok(storage.print_larger_than(size, out)?),
        Commands::Remove { file } => {
            if !storage.remove(&file) {
                info!(file = %file, "File not present in storage");
            }
            Ok(storage.print_summary(out)?)
        }
        Commands::RemoveAt { index } => {
            storage.remove_at(index)?;
            Ok(storage.print_summary(out)?)
        }
        Commands::Edit => edit_files(&storage, &config, out),
        Commands::Combine { first, second } => {
            let combined = storage.get(first)?.combine(storage.get(second)?)?;
            writeln!(out, "{combined}")?;
            Ok(())
        }
    }
}

/// Builds a storage and adds `files` in order.
///
/// # Errors
/// - `ReelboxError::Storage` - Invalid limits or the first file that breaks a restriction
fn load_storage(config: &StorageConfig, files: Vec<MediaFile>) -> Result<FileStorage> {
    let mut storage = config.create_storage()?;
    for file in files {
        storage.add(file)?;
    }
    info!(
        count = storage.len(),
        total_size = storage.total_size(),
        "Loaded storage"
    );
    Ok(storage)
}

fn list_files(storage: &FileStorage, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &storage.all_files())
            .map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else {
        for file in storage {
            writeln!(out, "{file}")?;
        }
    }
    Ok(())
}

fn edit_files(storage: &FileStorage, config: &ReelboxConfig, out: &mut impl Write) -> Result<()> {
    let edited = FileEditor::with_config(storage, &config.editor).edit(out)?;
    writeln!(out, "Edited file size is {}", edited.size())?;
    Ok(())
}
