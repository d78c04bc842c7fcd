//! Contact photo storage
//!
//! This crate owns the photo root: a single flat directory holding at most one image per
//! contact, named `<contact_id><extension>`.
//!
//! ```text
//! <photo_root>/
//! ├── 550e8400e29b41d4a716446655440000.png
//! └── 7f3c2a0b9d8e4f6a8b1c2d3e4f5a6b7c.JPG
//! ```
//!
//! - [`resolve_extension`] derives the extension from the client's original filename
//! - [`PhotoStore`] writes uploads atomically and builds retrieval URLs
//! - [`PhotoRetriever`] serves stored bytes back by filename with a content type
//!
//! The root is created lazily on first write and never removed here. Nothing else lives in it:
//! no metadata sidecars and no subdirectories.
//!
//! ## Example Usage
//!
//! ```no_run
//! use contacts_files::{BaseUrl, PhotoStore};
//! use contacts_uuid::ContactId;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PhotoStore::new("uploads");
//! let id = ContactId::new();
//! let stored = store.save(&id, b"\x89PNG...", Some("me.png"), &BaseUrl::new("http://localhost:8080"))?;
//!
//! let photo = store.retriever().read(stored.filename.as_str())?;
//! assert_eq!(photo.content_type(), "image/png");
//! # Ok(())
//! # }
//! ```

mod constants;
mod extension;
mod filename;
mod media;
mod retriever;
mod store;

pub use constants::{DEFAULT_EXTENSION, PHOTO_ROUTE};
pub use extension::resolve_extension;
pub use filename::PhotoFilename;
pub use media::MediaType;
pub use retriever::{Photo, PhotoRetriever};
pub use store::{BaseUrl, PhotoStore, StoredPhoto};

use std::io::ErrorKind;

/// Errors that can occur during photo operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Filename failed validation (directory traversal, separators, hidden files)
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// No photo with that filename exists under the root
    #[error("Photo not found: {0}")]
    NotFound(String),

    /// Extension does not map to a served media type
    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),

    /// The process may not create or write to the photo root
    #[error("Permission denied while trying to {context}: {source}")]
    PermissionDenied {
        context: String,
        source: std::io::Error,
    },

    /// The filesystem or quota holding the photo root is full
    #[error("Storage full while trying to {context}: {source}")]
    StorageFull {
        context: String,
        source: std::io::Error,
    },

    /// Any other I/O failure
    #[error("I/O error while trying to {context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl FilesError {
    /// Classifies an I/O failure so permission problems and exhausted storage stay
    /// distinguishable from generic errors.
    pub(crate) fn storage(context: impl Into<String>, source: std::io::Error) -> Self {
        let context = context.into();
        match source.kind() {
            ErrorKind::PermissionDenied | ErrorKind::ReadOnlyFilesystem => {
                FilesError::PermissionDenied { context, source }
            }
            ErrorKind::StorageFull | ErrorKind::QuotaExceeded => {
                FilesError::StorageFull { context, source }
            }
            _ => FilesError::Io { context, source },
        }
    }

    /// True for failures of the underlying filesystem rather than of the caller's input.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            FilesError::PermissionDenied { .. } | FilesError::StorageFull { .. } | FilesError::Io { .. }
        )
    }
}

/// Result type for photo operations.
pub type FilesResult<T> = Result<T, FilesError>;
