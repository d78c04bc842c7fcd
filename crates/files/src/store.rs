//! Photo persistence.
//!
//! [`PhotoStore`] is bound to one photo root. Each contact owns exactly one file there, named
//! from its identifier plus the extension of the latest upload. Writes land in a dot-prefixed
//! temporary file inside the root and are renamed over the target, so a reader sees either the
//! previous photo or the new one in full. Once the new file is in place, copies stored under a
//! different extension for the same contact are removed.

use crate::constants::{PHOTO_ROUTE, TEMP_FILE_PREFIX, WRITE_LOCK_STRIPES};
use crate::filename::PhotoFilename;
use crate::media::MediaType;
use crate::retriever::PhotoRetriever;
use crate::{FilesError, FilesResult};
use chrono::{DateTime, Utc};
use contacts_uuid::ContactId;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Externally visible origin that photo URLs are built on.
///
/// Scheme, host, port and any path prefix the service is mounted under, for example
/// `https://contacts.example.org/api`. Trailing slashes are dropped. An empty base yields
/// root-relative URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(origin: impl AsRef<str>) -> Self {
        Self(origin.as_ref().trim().trim_end_matches('/').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/contacts/image/{filename}`
    pub fn photo_url(&self, filename: &PhotoFilename) -> String {
        format!("{}{}/{}", self.0, PHOTO_ROUTE, filename)
    }
}

/// Outcome of a successful [`PhotoStore::save`].
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct StoredPhoto {
    /// Name of the file under the photo root
    pub filename: PhotoFilename,

    /// Retrieval URL handed back to the client and recorded on the contact
    pub url: String,

    pub size_bytes: u64,

    /// Hexadecimal SHA-256 digest of the stored bytes
    pub sha256: String,

    /// Media type sniffed from the bytes, if recognised.
    ///
    /// Best-effort only; the served content type always follows the extension.
    pub detected_media_type: Option<String>,

    pub stored_at: DateTime<Utc>,
}

/// Writes contact photos under a single root directory.
///
/// Cheap to clone. Clones share one set of write locks: replacing a contact's file and clearing
/// its other variants happen under that contact's lock, so concurrent saves for the same id
/// always leave exactly one photo behind. The locks are per process.
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root_directory: PathBuf,
    write_locks: Arc<Vec<Mutex<()>>>,
}

impl PhotoStore {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            write_locks: Arc::new((0..WRITE_LOCK_STRIPES).map(|_| Mutex::new(())).collect()),
        }
    }

    /// The root as configured (not necessarily absolute or existing yet).
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// A retriever reading from the same root.
    pub fn retriever(&self) -> PhotoRetriever {
        PhotoRetriever::new(self.root_directory.clone())
    }

    /// Stores `content` as the photo for `contact_id` and returns where it can be fetched.
    ///
    /// The filename is `<contact_id><extension>`, the extension taken from `original_filename`
    /// (see [`crate::resolve_extension`]). Any existing photo for the contact is replaced in full,
    /// including one stored under a different extension. Saving the same bytes twice leaves
    /// identical state and returns the same URL.
    ///
    /// # Errors
    ///
    /// - [`FilesError::UnsupportedMedia`] if the resolved extension is not `.png`, `.jpg` or
    ///   `.jpeg`; nothing on disk is touched
    /// - [`FilesError::PermissionDenied`], [`FilesError::StorageFull`] or [`FilesError::Io`] if the
    ///   root cannot be created or the bytes cannot be written. A failed write leaves any previous
    ///   photo untouched.
    pub fn save(
        &self,
        contact_id: &ContactId,
        content: &[u8],
        original_filename: Option<&str>,
        base_url: &BaseUrl,
    ) -> FilesResult<StoredPhoto> {
        let filename = PhotoFilename::for_contact(contact_id, original_filename);
        let declared = filename
            .extension()
            .and_then(MediaType::from_extension)
            .ok_or_else(|| FilesError::UnsupportedMedia(filename.to_string()))?;

        let root = self.ensure_root()?;
        let target = root.join(filename.as_str());

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(".tmp")
            .tempfile_in(&root)
            .map_err(|e| {
                FilesError::storage(
                    format!("create temporary file in {}", root.display()),
                    e,
                )
            })?;

        temp.write_all(content).map_err(|e| {
            FilesError::storage(format!("write photo {}", target.display()), e)
        })?;
        temp.as_file().sync_all().map_err(|e| {
            FilesError::storage(format!("flush photo {}", target.display()), e)
        })?;

        let replaced = {
            let _guard = self.write_lock(contact_id);
            temp.persist(&target).map_err(|e| {
                FilesError::storage(format!("replace photo {}", target.display()), e.error)
            })?;
            remove_variants(&root, contact_id, Some(&filename))?
        };
        if replaced > 0 {
            tracing::debug!(
                contact_id = %contact_id,
                replaced,
                "removed photos stored under another extension"
            );
        }

        let detected_media_type = infer::get(content).map(|kind| kind.mime_type().to_owned());
        if let Some(detected) = detected_media_type.as_deref() {
            if declared.mime_type() != detected {
                tracing::warn!(
                    filename = %filename,
                    declared = %declared,
                    detected,
                    "photo content does not match its extension"
                );
            }
        }

        let url = base_url.photo_url(&filename);
        tracing::info!(
            contact_id = %contact_id,
            path = %target.display(),
            size_bytes = content.len(),
            "stored contact photo"
        );

        Ok(StoredPhoto {
            url,
            size_bytes: content.len() as u64,
            sha256: hex::encode(Sha256::digest(content)),
            detected_media_type,
            stored_at: Utc::now(),
            filename,
        })
    }

    /// Deletes every stored photo for `contact_id`, returning how many files were removed.
    ///
    /// A missing root is treated as nothing to remove.
    pub fn remove(&self, contact_id: &ContactId) -> FilesResult<usize> {
        if !self.root_directory.is_dir() {
            return Ok(0);
        }
        let _guard = self.write_lock(contact_id);
        remove_variants(&self.root_directory, contact_id, None)
    }

    fn write_lock(&self, contact_id: &ContactId) -> MutexGuard<'_, ()> {
        let stripe = usize::from(contact_id.uuid().as_bytes()[0]) % self.write_locks.len();
        // The guarded value is (), so a poisoned lock carries no broken state.
        self.write_locks[stripe]
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Creates the root (and missing parents) if needed and returns its canonical path.
    ///
    /// Concurrent callers may race on creation; an existing directory is not an error.
    fn ensure_root(&self) -> FilesResult<PathBuf> {
        fs::create_dir_all(&self.root_directory).map_err(|e| {
            FilesError::storage(
                format!(
                    "create photo directory {}",
                    self.root_directory.display()
                ),
                e,
            )
        })?;

        self.root_directory.canonicalize().map_err(|e| {
            FilesError::storage(
                format!(
                    "resolve photo directory {}",
                    self.root_directory.display()
                ),
                e,
            )
        })
    }
}

/// Removes files in `root` named `<contact_id>.<anything>`, except `keep`.
fn remove_variants(
    root: &Path,
    contact_id: &ContactId,
    keep: Option<&PhotoFilename>,
) -> FilesResult<usize> {
    let prefix = format!("{}.", contact_id);
    let entries = fs::read_dir(root)
        .map_err(|e| FilesError::storage(format!("list {}", root.display()), e))?;

    let mut removed = 0;
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(&prefix) || keep.is_some_and(|k| k.as_str() == name) {
            continue;
        }
        if !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }

        match fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            // Another writer got there first.
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(FilesError::storage(
                    format!("remove stale photo {}", entry.path().display()),
                    e,
                ))
            }
        }
    }

    Ok(removed)
}
