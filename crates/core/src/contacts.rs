//! Contact CRUD.
//!
//! [`ContactService`] validates requests and delegates persistence to a [`ContactStore`]. It also
//! hands out the [`ContactPhotoCoordinator`] bound to the same store, so record updates made by
//! photo uploads and by CRUD calls go through one place.

use crate::config::CoreConfig;
use crate::constants::MAX_PAGE_SIZE;
use crate::contact::{Contact, ContactPage, NewContact, PageRequest};
use crate::photos::ContactPhotoCoordinator;
use crate::repositories::file_store::FileContactStore;
use crate::repositories::ContactStore;
use crate::{ContactError, ContactResult};
use contacts_files::PhotoStore;
use contacts_uuid::ContactId;
use std::sync::Arc;

/// Parses a caller-supplied id. A string that is not a canonical id cannot name any stored
/// contact, so it is reported as not found rather than as a validation failure.
pub(crate) fn parse_contact_id(id: &str) -> ContactResult<ContactId> {
    ContactId::parse(id).map_err(|_| ContactError::NotFound(id.to_string()))
}

#[derive(Clone, Debug)]
pub struct ContactService {
    store: Arc<dyn ContactStore>,
    photos: PhotoStore,
}

impl ContactService {
    /// Builds a service over the file-backed store and photo root named in `cfg`.
    pub fn new(cfg: &CoreConfig) -> Self {
        Self::with_store(
            Arc::new(FileContactStore::new(cfg.contact_data_dir())),
            PhotoStore::new(cfg.photo_dir()),
        )
    }

    pub fn with_store(store: Arc<dyn ContactStore>, photos: PhotoStore) -> Self {
        Self { store, photos }
    }

    pub fn photos(&self) -> ContactPhotoCoordinator {
        ContactPhotoCoordinator::new(self.store.clone(), self.photos.clone())
    }

    /// Creates a contact with a freshly allocated id and no photo.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidInput`] if `name` is blank, or a store error if the record
    /// cannot be written.
    pub fn create(&self, new: NewContact) -> ContactResult<Contact> {
        if new.name.trim().is_empty() {
            return Err(ContactError::InvalidInput("name is required".into()));
        }

        let contact = Contact::from_new(ContactId::new(), new);
        self.store.upsert(&contact)?;

        tracing::info!(contact_id = %contact.id, "created contact");
        Ok(contact)
    }

    /// One page of contacts sorted by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidInput`] if `size` is 0 or above the maximum page size.
    pub fn list(&self, page: u32, size: u32) -> ContactResult<ContactPage> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(ContactError::InvalidInput(format!(
                "page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        self.store.page(PageRequest { page, size })
    }

    pub fn get(&self, id: &str) -> ContactResult<Contact> {
        let contact_id = parse_contact_id(id)?;
        self.store
            .get(&contact_id)?
            .ok_or_else(|| ContactError::NotFound(id.to_string()))
    }

    /// Deletes a contact record and then, best-effort, its stored photo.
    ///
    /// Photo cleanup failures are logged, not returned: the record is already gone and an
    /// orphaned file is harmless.
    pub fn delete(&self, id: &str) -> ContactResult<()> {
        let contact_id = parse_contact_id(id)?;
        if !self.store.delete(&contact_id)? {
            return Err(ContactError::NotFound(id.to_string()));
        }

        match self.photos.remove(&contact_id) {
            Ok(removed) => {
                tracing::info!(contact_id = %contact_id, photos_removed = removed, "deleted contact")
            }
            Err(e) => tracing::warn!(
                contact_id = %contact_id,
                "deleted contact but could not remove its photo: {}",
                e
            ),
        }

        Ok(())
    }
}
