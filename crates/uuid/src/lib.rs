//! Contact identifiers.
//!
//! Every contact is keyed by a UUID v4 rendered in a *canonical* form: **32 lowercase hexadecimal
//! characters** with no hyphens. The same string names the contact's record directory and prefixes
//! its stored photo, so a single representation is enforced everywhere.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Externally supplied identifiers (path parameters, multipart fields, CLI arguments) must already
//! be canonical. Use [`ContactId::parse`] to validate them.
//!
//! ## Sharded directory layout
//! Contact records are stored under `parent_dir/<id[0..2]>/<id[2..4]>/<id>/`, which keeps any
//! single directory from growing without bound.

mod contact_id;

pub use contact_id::{ContactId, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
