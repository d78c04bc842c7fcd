//! Naming constants shared by the photo store and retriever.

/// Extension used when the uploaded filename carries none we can trust.
pub const DEFAULT_EXTENSION: &str = ".png";

/// Route under which stored photos are served; photo URLs are `{base}{PHOTO_ROUTE}/{filename}`.
pub const PHOTO_ROUTE: &str = "/contacts/image";

/// Prefix for in-flight uploads. Dot-prefixed so they are never valid photo filenames.
pub(crate) const TEMP_FILE_PREFIX: &str = ".upload-";

/// Longest filename accepted on the read path.
pub(crate) const MAX_FILENAME_LEN: usize = 255;

/// Number of write locks shared by a store; contacts map onto them by id.
pub(crate) const WRITE_LOCK_STRIPES: usize = 64;
