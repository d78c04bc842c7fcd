//! Contact records and paging types.

use contacts_uuid::ContactId;
use serde::{Deserialize, Serialize};

/// A directory entry.
///
/// `photo_url` is `None` until a photo has been stored for this contact; after that it always
/// holds the retrieval URL returned by the last successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Fields a client supplies when creating a contact; the id and photo are assigned later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: String,
    pub address: String,
    pub status: String,
}

impl Contact {
    pub(crate) fn from_new(id: ContactId, new: NewContact) -> Self {
        Self {
            id,
            name: new.name.trim().to_string(),
            email: new.email,
            title: new.title,
            phone: new.phone,
            address: new.address,
            status: new.status,
            photo_url: None,
        }
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

/// One page of contacts ordered by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    pub content: Vec<Contact>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based index of this page
    pub number: u32,
    pub size: u32,
}

impl ContactPage {
    /// Sorts `contacts` by name (ties broken by id) and cuts out the requested page.
    ///
    /// Pages past the end come back with empty `content` but accurate totals.
    pub fn paginate(mut contacts: Vec<Contact>, request: PageRequest) -> Self {
        contacts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        let total_elements = contacts.len() as u64;
        let size = request.size.max(1);
        let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
        let start = (request.page as usize).saturating_mul(size as usize);

        let content = contacts
            .into_iter()
            .skip(start)
            .take(size as usize)
            .collect();

        Self {
            content,
            total_elements,
            total_pages,
            number: request.page,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::from_new(
            ContactId::new(),
            NewContact {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_paginate_sorts_by_name() {
        let contacts = vec![contact("Carol"), contact("alice"), contact("Bob"), contact("Alice")];

        let page = ContactPage::paginate(contacts, PageRequest { page: 0, size: 10 });

        let names: Vec<&str> = page.content.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol", "alice"]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_slices_pages() {
        let contacts = (0..25).map(|i| contact(&format!("Contact {:02}", i))).collect();

        let page = ContactPage::paginate(contacts, PageRequest { page: 2, size: 10 });

        assert_eq!(page.content.len(), 5);
        assert_eq!(page.content[0].name, "Contact 20");
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number, 2);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let contacts = vec![contact("Alice")];

        let page = ContactPage::paginate(contacts, PageRequest { page: 5, size: 10 });

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 1);
    }

    #[test]
    fn test_contact_json_shape() {
        let mut c = contact("Alice");
        let json = serde_json::to_value(&c).unwrap();
        assert!(json.get("photoUrl").is_none(), "unset photo is omitted");

        c.photo_url = Some("http://localhost/contacts/image/x.png".into());
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["photoUrl"], "http://localhost/contacts/image/x.png");
        assert_eq!(json["id"], c.id.to_string());
    }

    #[test]
    fn test_new_contact_fields_default() {
        let new: NewContact = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();
        assert_eq!(new.name, "Alice");
        assert_eq!(new.email, "");
    }
}
