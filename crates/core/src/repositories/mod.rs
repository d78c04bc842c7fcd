//! Contact record persistence.
//!
//! [`ContactStore`] is the seam between the services and wherever records live. The shipped
//! implementation is [`file_store::FileContactStore`], one YAML file per contact.

pub mod file_store;

use crate::contact::{Contact, ContactPage, PageRequest};
use crate::ContactResult;
use contacts_uuid::ContactId;

/// Keyed record store for contacts.
///
/// Implementations must be safe to share between request handlers. Writes are
/// last-writer-wins; no locking is expected.
pub trait ContactStore: Send + Sync + std::fmt::Debug {
    /// Fetches one contact, `None` if no record exists.
    fn get(&self, id: &ContactId) -> ContactResult<Option<Contact>>;

    /// Returns every stored contact in no particular order.
    fn list_all(&self) -> ContactResult<Vec<Contact>>;

    /// Inserts or replaces the record for `contact.id`.
    fn upsert(&self, contact: &Contact) -> ContactResult<()>;

    /// Removes a record, returning whether one existed.
    fn delete(&self, id: &ContactId) -> ContactResult<bool>;

    /// One page of contacts sorted by name.
    fn page(&self, request: PageRequest) -> ContactResult<ContactPage> {
        Ok(ContactPage::paginate(self.list_all()?, request))
    }
}
