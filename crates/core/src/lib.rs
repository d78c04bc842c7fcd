//! # Contacts Core
//!
//! Business logic for the contact directory:
//! - Contact records stored as YAML in a sharded directory tree under `CONTACT_DATA_DIR`
//! - Paginated listing sorted by name
//! - Attaching a photo to a contact and serving it back by filename
//!
//! **No API concerns**: HTTP routing, multipart parsing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod contact;
pub mod contacts;
pub mod error;
pub mod photos;
pub mod repositories;

pub use config::CoreConfig;
pub use constants::{DEFAULT_CONTACT_DATA_DIR, DEFAULT_PHOTO_DIR};
pub use contact::{Contact, ContactPage, NewContact, PageRequest};
pub use contacts::ContactService;
pub use error::{ContactError, ContactResult};
pub use photos::ContactPhotoCoordinator;
pub use repositories::{file_store::FileContactStore, ContactStore};

pub use contacts_files::{BaseUrl, FilesError, MediaType, Photo};
pub use contacts_uuid::ContactId;
