//! Attaching photos to contacts.
//!
//! [`ContactPhotoCoordinator`] ties the record store to the photo root. The photo file is
//! always written before the record is updated. If the update then fails, the file stays on
//! disk and the record keeps its previous `photo_url`; re-attaching the same photo repairs it.
//!
//! The record is read again after the file is written. A contact deleted in the meantime is not
//! brought back: its new file is removed and the attach reports `NotFound`. A delete landing
//! between that second read and the upsert can still be undone; the store has no compare-and-set.

use crate::contacts::parse_contact_id;
use crate::repositories::ContactStore;
use crate::{ContactError, ContactResult};
use contacts_files::{BaseUrl, Photo, PhotoRetriever, PhotoStore};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ContactPhotoCoordinator {
    store: Arc<dyn ContactStore>,
    photos: PhotoStore,
}

impl ContactPhotoCoordinator {
    pub fn new(store: Arc<dyn ContactStore>, photos: PhotoStore) -> Self {
        Self { store, photos }
    }

    /// Stores `content` as the photo of `contact_id` and records its URL on the contact.
    ///
    /// # Returns
    ///
    /// The retrieval URL, `{base_url}/contacts/image/{contact_id}{extension}`.
    ///
    /// # Errors
    ///
    /// - [`ContactError::NotFound`] if no such contact exists; nothing is written. Also returned
    ///   if the contact is deleted while the photo is being written.
    /// - [`ContactError::Files`] if the photo cannot be stored; the record is untouched
    /// - a store error if the record update fails after the photo was written
    pub fn attach_photo(
        &self,
        contact_id: &str,
        content: &[u8],
        original_filename: Option<&str>,
        base_url: &BaseUrl,
    ) -> ContactResult<String> {
        let id = parse_contact_id(contact_id)?;
        if self.store.get(&id)?.is_none() {
            return Err(ContactError::NotFound(contact_id.to_string()));
        }

        let stored = self
            .photos
            .save(&id, content, original_filename, base_url)?;

        let Some(mut contact) = self.store.get(&id)? else {
            if let Err(e) = self.photos.remove(&id) {
                tracing::warn!(
                    contact_id = %id,
                    "contact deleted during photo upload; could not remove its photo: {}",
                    e
                );
            }
            return Err(ContactError::NotFound(contact_id.to_string()));
        };

        contact.photo_url = Some(stored.url.clone());
        if let Err(e) = self.store.upsert(&contact) {
            tracing::error!(
                contact_id = %id,
                filename = %stored.filename,
                "photo stored but contact record update failed: {}",
                e
            );
            return Err(e);
        }

        tracing::info!(contact_id = %id, url = %stored.url, "attached photo to contact");
        Ok(stored.url)
    }

    /// Reads a stored photo by filename.
    pub fn read_photo(&self, filename: &str) -> ContactResult<Photo> {
        Ok(self.retriever().read(filename)?)
    }

    pub fn retriever(&self) -> PhotoRetriever {
        self.photos.retriever()
    }
}
