use crate::filename::PhotoFilename;
use crate::media::MediaType;
use crate::{FilesError, FilesResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Photo bytes read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub filename: PhotoFilename,
    pub media_type: MediaType,
    pub bytes: Vec<u8>,
}

impl Photo {
    pub fn content_type(&self) -> &'static str {
        self.media_type.mime_type()
    }

    /// Strong entity tag over the content: the quoted SHA-256 hex digest.
    pub fn etag(&self) -> String {
        format!("\"{}\"", hex::encode(Sha256::digest(&self.bytes)))
    }
}

/// Read side of the photo root.
#[derive(Debug, Clone)]
pub struct PhotoRetriever {
    root_directory: PathBuf,
}

impl PhotoRetriever {
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Reads the photo stored under `filename`.
    ///
    /// The name is validated before it touches the filesystem, then mapped to a media type from
    /// its extension. Only regular files directly under the root are served.
    ///
    /// # Errors
    ///
    /// - [`FilesError::InvalidPath`] if `filename` is not a single safe path component
    /// - [`FilesError::UnsupportedMedia`] if the extension is not `.png`, `.jpg` or `.jpeg`
    /// - [`FilesError::NotFound`] if no such file exists (including when the root is missing)
    /// - a storage error if the file exists but cannot be read
    pub fn read(&self, filename: &str) -> FilesResult<Photo> {
        let filename = PhotoFilename::parse(filename)?;
        let media_type = filename
            .extension()
            .and_then(MediaType::from_extension)
            .ok_or_else(|| FilesError::UnsupportedMedia(filename.to_string()))?;

        let path = self.root_directory.join(filename.as_str());
        match fs::symlink_metadata(&path) {
            Ok(meta) if meta.file_type().is_file() => {}
            Ok(_) => return Err(FilesError::NotFound(filename.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FilesError::NotFound(filename.to_string()))
            }
            Err(e) => {
                return Err(FilesError::storage(
                    format!("inspect photo {}", path.display()),
                    e,
                ))
            }
        }

        let bytes = fs::read(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FilesError::NotFound(filename.to_string())
            } else {
                FilesError::storage(format!("read photo {}", path.display()), e)
            }
        })?;

        tracing::debug!(filename = %filename, size_bytes = bytes.len(), "read contact photo");

        Ok(Photo {
            filename,
            media_type,
            bytes,
        })
    }
}
