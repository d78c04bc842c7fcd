//! Constants used throughout the contacts core crate.
//!
//! This module contains path, filename and paging defaults so they stay consistent between the
//! REST server, the CLI and tests.

/// Default directory for contact records when no explicit directory is configured.
pub const DEFAULT_CONTACT_DATA_DIR: &str = "contact_data";

/// Default photo root when `PHOTO_DIRECTORY` is not set.
pub const DEFAULT_PHOTO_DIR: &str = "uploads";

/// Filename of the YAML record inside each contact directory.
pub const CONTACT_FILENAME: &str = "contact.yaml";

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default upper bound on an uploaded photo (10 MiB).
pub const DEFAULT_MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;
