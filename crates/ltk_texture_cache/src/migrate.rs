//! Migration of a new-format texture dump onto a legacy texture pack.
//!
//! For every entry of the source directory the [`Migrator`]:
//!
//! 1. Parses the filename into a [`TextureKey`]. Unrecognized names, non-PNG
//!    entries and anything that is not a regular file are skipped.
//! 2. Decodes the image and checks its size against the key's dimensions.
//! 3. Rebuilds the legacy hash with [`legacy_hash`].
//! 4. Copies `legacy_dir/tex1_{W}x{H}_{OLD_HASH}_{FORMAT}.png` to
//!    `output_dir/tex1_{W}x{H}_{HASH}_{FORMAT}_mip{MIP}.png`, overwriting it.
//!
//! Entries are processed one at a time in filename order. A failure only affects
//! its own entry and is recorded in the [`MigrationReport`].

use std::fmt;
use std::fs;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::Level;

use crate::codec::{ImageCodec, PngCodec};
use crate::error::{EntryError, Error, Result};
use crate::format::PixelFormat;
use crate::hash::legacy_hash;
use crate::key::{LegacyKey, TextureKey};
use crate::pixels::PixelBuffer;

/// Why an entry was not considered for migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Directories, sockets and the like.
    NotAFile,
    /// The filename is not valid UTF-8 and cannot match the grammar.
    NonUtf8Name,
    /// The filename does not follow the `tex1_..._mip{N}.{ext}` grammar.
    UnrecognizedName,
    /// The filename parsed but the container is not PNG.
    UnsupportedExtension(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFile => write!(f, "not a regular file"),
            Self::NonUtf8Name => write!(f, "filename is not valid UTF-8"),
            Self::UnrecognizedName => write!(f, "failed to parse filename"),
            Self::UnsupportedExtension(ext) => write!(f, "unsupported extension '{}'", ext),
        }
    }
}

/// Result of processing a single directory entry.
#[derive(Debug)]
pub enum EntryOutcome {
    /// The legacy file was found and copied under its migrated name.
    Migrated {
        file_name: String,
        legacy: LegacyKey,
        legacy_name: String,
        output_name: String,
    },
    Skipped {
        file_name: String,
        reason: SkipReason,
    },
    Failed {
        file_name: String,
        error: EntryError,
    },
}

impl EntryOutcome {
    /// Name of the source directory entry this outcome belongs to.
    pub fn file_name(&self) -> &str {
        match self {
            Self::Migrated { file_name, .. }
            | Self::Skipped { file_name, .. }
            | Self::Failed { file_name, .. } => file_name,
        }
    }

    /// Level this outcome is logged at.
    ///
    /// Failures are warnings. Names that don't look like cache entries at all are
    /// worth a notice; every other skip is debug noise.
    pub fn log_level(&self) -> Level {
        match self {
            Self::Migrated { .. } => Level::INFO,
            Self::Skipped {
                reason: SkipReason::UnrecognizedName | SkipReason::NonUtf8Name,
                ..
            } => Level::INFO,
            Self::Skipped { .. } => Level::DEBUG,
            Self::Failed { .. } => Level::WARN,
        }
    }
}

/// Per-entry outcomes of a migration run, in processing order.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl MigrationReport {
    pub fn migrated(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Migrated { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

/// Progress information emitted after each entry is processed.
#[derive(Debug, Clone, Copy)]
pub struct MigrationProgress<'a> {
    /// 1-based index of the entry just processed.
    pub current: usize,
    /// Total number of entries in the source directory.
    pub total: usize,
    pub outcome: &'a EntryOutcome,
}

type ProgressCallback = Arc<dyn Fn(MigrationProgress<'_>) + Send + Sync>;

/// Migrates a new-format texture dump onto a legacy texture pack.
///
/// The output directory must already exist; nothing is created besides the
/// migrated files themselves.
pub struct Migrator<C = PngCodec> {
    source_dir: Utf8PathBuf,
    legacy_dir: Utf8PathBuf,
    output_dir: Utf8PathBuf,
    codec: C,
    progress_callback: Option<ProgressCallback>,
}

impl Migrator<PngCodec> {
    /// Create a migrator reading PNG entries.
    ///
    /// # Arguments
    ///
    /// * `source_dir` — Directory with the new-format dump (`..._mip{N}.png`).
    /// * `legacy_dir` — Directory with the legacy pack to copy images from.
    /// * `output_dir` — Directory the migrated files are written to.
    pub fn new(
        source_dir: impl Into<Utf8PathBuf>,
        legacy_dir: impl Into<Utf8PathBuf>,
        output_dir: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            legacy_dir: legacy_dir.into(),
            output_dir: output_dir.into(),
            codec: PngCodec,
            progress_callback: None,
        }
    }
}

impl<C: ImageCodec> Migrator<C> {
    /// Replace the image codec used to decode source entries.
    pub fn with_codec<D: ImageCodec>(self, codec: D) -> Migrator<D> {
        Migrator {
            source_dir: self.source_dir,
            legacy_dir: self.legacy_dir,
            output_dir: self.output_dir,
            codec,
            progress_callback: self.progress_callback,
        }
    }

    /// Register a callback invoked after every processed entry.
    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(MigrationProgress<'_>) + Send + Sync + 'static,
    {
        self.progress_callback = Some(Arc::new(callback));
        self
    }

    /// Migrate every entry of the source directory.
    ///
    /// Only fails if one of the directories is missing or the source directory
    /// cannot be listed. Per-entry problems end up in the report.
    pub fn run(&self) -> Result<MigrationReport> {
        for dir in [&self.source_dir, &self.legacy_dir, &self.output_dir] {
            if !dir.is_dir() {
                return Err(Error::MissingDirectory(dir.clone()));
            }
        }

        tracing::info!("Migrating texture dump: {}", self.source_dir);
        tracing::info!("Legacy pack: {}", self.legacy_dir);
        tracing::info!("Output: {}", self.output_dir);

        let read_dir_err = |source: std::io::Error| Error::ReadDir {
            path: self.source_dir.clone(),
            source,
        };
        let mut entries = fs::read_dir(&self.source_dir)
            .map_err(read_dir_err)?
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(read_dir_err)?;
        entries.sort_by_key(|entry| entry.file_name());

        let total = entries.len();
        let mut report = MigrationReport::default();

        for (index, entry) in entries.iter().enumerate() {
            let outcome = self.migrate_entry(entry);
            log_outcome(&outcome);
            self.emit_progress(MigrationProgress {
                current: index + 1,
                total,
                outcome: &outcome,
            });
            report.outcomes.push(outcome);
        }

        tracing::info!(
            "Migration finished: {} migrated, {} skipped, {} failed",
            report.migrated(),
            report.skipped(),
            report.failed()
        );

        Ok(report)
    }

    /// Reconstruct the legacy key of a new-format entry from its container bytes.
    pub fn legacy_key_for(
        &self,
        key: &TextureKey,
        bytes: &[u8],
    ) -> std::result::Result<LegacyKey, EntryError> {
        let decoded = self.codec.decode(bytes)?;
        if (decoded.width, decoded.height) != (key.width, key.height) {
            tracing::debug!(
                "Decoded size {}x{} differs from key size {}x{}",
                decoded.width,
                decoded.height,
                key.width,
                key.height
            );
        }

        let pixels = PixelBuffer::new(key.width, key.height, decoded.pixels)?;
        let old_hash = legacy_hash(pixels, PixelFormat::from_tag(key.format));
        tracing::debug!("Legacy hash of {:016X} is {:016X}", key.hash, old_hash);

        Ok(key.legacy_key(old_hash))
    }

    fn migrate_entry(&self, entry: &fs::DirEntry) -> EntryOutcome {
        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                return EntryOutcome::Skipped {
                    file_name: name.to_string_lossy().into_owned(),
                    reason: SkipReason::NonUtf8Name,
                }
            }
        };

        let path = self.source_dir.join(&file_name);
        if !path.is_file() {
            return EntryOutcome::Skipped {
                file_name,
                reason: SkipReason::NotAFile,
            };
        }

        let Some(key) = TextureKey::parse(&file_name) else {
            return EntryOutcome::Skipped {
                file_name,
                reason: SkipReason::UnrecognizedName,
            };
        };
        if !key.is_png() {
            return EntryOutcome::Skipped {
                file_name,
                reason: SkipReason::UnsupportedExtension(key.extension),
            };
        }

        tracing::debug!("Converting file {}", file_name);
        match self.migrate_texture(&path, &key) {
            Ok((legacy, legacy_name, output_name)) => EntryOutcome::Migrated {
                file_name,
                legacy,
                legacy_name,
                output_name,
            },
            Err(error) => EntryOutcome::Failed { file_name, error },
        }
    }

    fn migrate_texture(
        &self,
        path: &Utf8Path,
        key: &TextureKey,
    ) -> std::result::Result<(LegacyKey, String, String), EntryError> {
        let bytes = fs::read(path).map_err(|source| EntryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let legacy = self.legacy_key_for(key, &bytes)?;

        let legacy_name = legacy.file_name();
        let output_name = key.migrated_name();
        let from = self.legacy_dir.join(&legacy_name);
        let to = self.output_dir.join(&output_name);

        fs::copy(&from, &to).map_err(|source| EntryError::Copy { from, to, source })?;

        Ok((legacy, legacy_name, output_name))
    }

    /// Emit a progress event if a callback was registered.
    fn emit_progress(&self, progress: MigrationProgress<'_>) {
        if let Some(callback) = &self.progress_callback {
            callback(progress);
        }
    }
}

fn log_outcome(outcome: &EntryOutcome) {
    let message = match outcome {
        EntryOutcome::Migrated {
            file_name,
            legacy_name,
            ..
        } => format!("Migrated {} from {}", file_name, legacy_name),
        EntryOutcome::Skipped { file_name, reason } => {
            format!("Skipping {}: {}", file_name, reason)
        }
        EntryOutcome::Failed { file_name, error } => {
            format!("Failed to migrate {}: {}", file_name, error)
        }
    };

    let level = outcome.log_level();
    if level == Level::WARN {
        tracing::warn!("{}", message);
    } else if level == Level::INFO {
        tracing::info!("{}", message);
    } else {
        tracing::debug!("{}", message);
    }
}
