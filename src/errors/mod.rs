//! Error handling utilities for the moodlog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when reading or writing the
/// persisted entry store.
///
/// The store is a single JSON slot on disk. A *missing* slot is not an error
/// (it resolves to an empty collection); these variants cover genuine
/// failures: unreadable files, unparseable contents, and failed writes.
///
/// # Examples
///
/// Creating and formatting a corruption error:
///
/// ```
/// use moodlog::errors::StorageError;
/// use std::path::PathBuf;
///
/// let source = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
/// let error = StorageError::Corrupted {
///     path: PathBuf::from("/data/mood_entries.json"),
///     source,
/// };
///
/// assert!(format!("{}", error).contains("mood_entries.json"));
/// assert!(format!("{}", error).contains("could not be parsed"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error when the entry store file exists but cannot be read.
    #[error("Entry store at '{path}' could not be read: {source}. Please check file permissions.")]
    ReadFailed {
        /// Path of the entry store file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the entry store file cannot be written.
    #[error("Entry store at '{path}' could not be written: {source}. Please check permissions and available disk space.")]
    WriteFailed {
        /// Path of the entry store file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the persisted entry store contains data that cannot be parsed.
    ///
    /// Malformed data fails fast rather than being silently discarded: resetting
    /// to an empty collection would destroy the user's journal. Only a *missing*
    /// store resolves to an empty collection.
    #[error("Entry store at '{path}' could not be parsed: {source}. Repair or move the file to continue; it will not be overwritten automatically.")]
    Corrupted {
        /// Path of the entry store file
        path: PathBuf,
        /// The underlying JSON parse error
        #[source]
        source: serde_json::Error,
    },

    /// Error when the entry collection cannot be serialized for writing.
    #[error("Entry collection could not be serialized: {source}")]
    Serialize {
        /// The underlying JSON serialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents all possible errors that can occur in the moodlog application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal entry logic (e.g., invalid dates or unknown mood labels).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors when reading or writing the persisted entry store.
    ///
    /// This variant uses a dedicated StorageError type to provide detailed
    /// information about what went wrong with the entry store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use moodlog::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
