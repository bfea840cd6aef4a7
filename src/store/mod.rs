//! The entry store adapter: persistence for the mood entry collection.
//!
//! The persisted representation is a single JSON slot on disk holding the
//! serialized entry array. The store owns serialization and nothing else:
//! all derived values are computed elsewhere from the loaded collection.
//!
//! The store is an explicit, injectable repository: `main` constructs one
//! [`JsonFileStore`] at startup and passes it by reference to whatever
//! operation needs it. Nothing reads the slot through ambient global state.

use crate::constants;
use crate::entry::MoodEntry;
use crate::errors::{AppError, AppResult, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load/save access to the persisted entry collection.
///
/// Contract:
/// - `load` returns an empty collection when the slot does not exist yet:
///   absence is a valid empty state, never an error. Malformed contents
///   fail fast with [`StorageError::Corrupted`].
/// - `save` fully overwrites the persisted representation with the given
///   collection; there is no partial-update operation.
pub trait EntryStore {
    /// Reads the persisted entry collection.
    fn load(&self) -> AppResult<Vec<MoodEntry>>;

    /// Replaces the persisted representation with the given collection.
    fn save(&self, entries: &[MoodEntry]) -> AppResult<()>;
}

/// Production [`EntryStore`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given slot path. The file is not touched
    /// until the first `load` or `save`.
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Path of the underlying slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for JsonFileStore {
    fn load(&self) -> AppResult<Vec<MoodEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No entry store at {:?} yet, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                }
                .into());
            }
        };

        let entries: Vec<MoodEntry> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Corrupted {
                path: self.path.clone(),
                source: e,
            })?;

        debug!("Loaded {} entries from {:?}", entries.len(), self.path);
        Ok(entries)
    }

    fn save(&self, entries: &[MoodEntry]) -> AppResult<()> {
        let serialized = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialize { source: e })?;

        fs::write(&self.path, serialized).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;

        // Entry data is personal; keep the slot owner-readable only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(constants::DEFAULT_FILE_PERMISSIONS);
            fs::set_permissions(&self.path, permissions).map_err(|e| {
                StorageError::WriteFailed {
                    path: self.path.clone(),
                    source: e,
                }
            })?;
        }

        debug!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

/// Appends an entry to the persisted collection.
///
/// The storage layer has no partial-update operation: this loads the full
/// collection, appends, and saves the whole updated collection back.
/// Returns the updated collection so callers can render from it without a
/// second `load`.
pub fn append_entry(store: &dyn EntryStore, entry: MoodEntry) -> AppResult<Vec<MoodEntry>> {
    let mut entries = store.load()?;
    entries.push(entry);
    store.save(&entries)?;
    info!("Recorded mood entry ({} total)", entries.len());
    Ok(entries)
}

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Journal` if the provided path is not an absolute path
/// - `AppError::Io` if directory creation or permission setup fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Journal(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        // Owner-only access (0o700), matching the store file permissions.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}
