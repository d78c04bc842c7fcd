//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Request handling never reads process-wide environment variables, which keeps behaviour
//! consistent across threads and test harnesses.

use crate::constants::{DEFAULT_CONTACT_DATA_DIR, DEFAULT_MAX_PHOTO_BYTES, DEFAULT_PHOTO_DIR};
use crate::{ContactError, ContactResult};
use contacts_files::BaseUrl;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    contact_data_dir: PathBuf,
    photo_dir: PathBuf,
    public_base_url: Option<BaseUrl>,
    max_photo_bytes: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `public_base_url`, when set, replaces the per-request origin in photo URLs (useful behind
    /// proxies that rewrite `Host`).
    pub fn new(
        contact_data_dir: PathBuf,
        photo_dir: PathBuf,
        public_base_url: Option<BaseUrl>,
        max_photo_bytes: usize,
    ) -> ContactResult<Self> {
        if contact_data_dir.as_os_str().is_empty() {
            return Err(ContactError::InvalidInput(
                "contact data directory cannot be empty".into(),
            ));
        }
        if photo_dir.as_os_str().is_empty() {
            return Err(ContactError::InvalidInput(
                "photo directory cannot be empty".into(),
            ));
        }
        if max_photo_bytes == 0 {
            return Err(ContactError::InvalidInput(
                "max photo size must be greater than zero".into(),
            ));
        }

        Ok(Self {
            contact_data_dir,
            photo_dir,
            public_base_url,
            max_photo_bytes,
        })
    }

    /// Resolve configuration from the process environment.
    ///
    /// Reads `CONTACT_DATA_DIR`, `PHOTO_DIRECTORY`, `CONTACTS_PUBLIC_URL` and `MAX_PHOTO_BYTES`,
    /// falling back to the crate defaults. Call once at startup.
    pub fn from_env() -> ContactResult<Self> {
        let contact_data_dir = std::env::var("CONTACT_DATA_DIR")
            .unwrap_or_else(|_| DEFAULT_CONTACT_DATA_DIR.into());
        let photo_dir =
            std::env::var("PHOTO_DIRECTORY").unwrap_or_else(|_| DEFAULT_PHOTO_DIR.into());
        let public_base_url =
            public_base_url_from_env_value(std::env::var("CONTACTS_PUBLIC_URL").ok())?;
        let max_photo_bytes =
            max_photo_bytes_from_env_value(std::env::var("MAX_PHOTO_BYTES").ok())?;

        Self::new(
            PathBuf::from(contact_data_dir),
            PathBuf::from(photo_dir),
            public_base_url,
            max_photo_bytes,
        )
    }

    pub fn contact_data_dir(&self) -> &Path {
        &self.contact_data_dir
    }

    pub fn photo_dir(&self) -> &Path {
        &self.photo_dir
    }

    pub fn public_base_url(&self) -> Option<&BaseUrl> {
        self.public_base_url.as_ref()
    }

    pub fn max_photo_bytes(&self) -> usize {
        self.max_photo_bytes
    }
}

/// Parse an optional fixed public origin.
///
/// `None` or blank means "derive from each request". Otherwise the value must be an absolute
/// `http://` or `https://` URL.
pub fn public_base_url_from_env_value(value: Option<String>) -> ContactResult<Option<BaseUrl>> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ContactError::InvalidInput(format!(
            "CONTACTS_PUBLIC_URL must start with http:// or https://, got '{}'",
            value
        )));
    }

    Ok(Some(BaseUrl::new(value)))
}

/// Parse the upload size limit in bytes.
///
/// If `value` is `None` or blank, returns [`DEFAULT_MAX_PHOTO_BYTES`].
pub fn max_photo_bytes_from_env_value(value: Option<String>) -> ContactResult<usize> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_MAX_PHOTO_BYTES);
    };

    match value.parse::<usize>() {
        Ok(0) | Err(_) => Err(ContactError::InvalidInput(format!(
            "MAX_PHOTO_BYTES must be a positive integer, got '{}'",
            value
        ))),
        Ok(bytes) => Ok(bytes),
    }
}
