//! Request and response bodies for the REST API.
//!
//! These mirror the core types but carry the `utoipa` schema derives, keeping OpenAPI concerns
//! out of `contacts-core`.

use contacts_core::{Contact, ContactPage, NewContact};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Contact fields accepted on creation; `id` and `photoUrl` are assigned by the server.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateContactReq {
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: String,
    pub address: String,
    pub status: String,
}

impl From<CreateContactReq> for NewContact {
    fn from(req: CreateContactReq) -> Self {
        NewContact {
            name: req.name,
            email: req.email,
            title: req.title,
            phone: req.phone,
            address: req.address,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRes {
    pub id: String,
    pub name: String,
    pub email: String,
    pub title: String,
    pub phone: String,
    pub address: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<Contact> for ContactRes {
    fn from(contact: Contact) -> Self {
        ContactRes {
            id: contact.id.to_string(),
            name: contact.name,
            email: contact.email,
            title: contact.title,
            phone: contact.phone,
            address: contact.address,
            status: contact.status,
            photo_url: contact.photo_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageRes {
    pub content: Vec<ContactRes>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    pub size: u32,
}

impl From<ContactPage> for ContactPageRes {
    fn from(page: ContactPage) -> Self {
        ContactPageRes {
            content: page.content.into_iter().map(ContactRes::from).collect(),
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            number: page.number,
            size: page.size,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContactsParams {
    /// Zero-based page index (default 0)
    pub page: Option<u32>,
    /// Page size (default 10, max 100)
    pub size: Option<u32>,
}

/// Multipart body of `PUT /contacts/photo`. Documentation only; the handler reads fields
/// directly from the stream.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadPhotoForm {
    /// Contact id
    pub id: String,
    /// Image bytes; the part's filename decides the stored extension
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
