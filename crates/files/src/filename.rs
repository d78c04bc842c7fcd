use crate::constants::MAX_FILENAME_LEN;
use crate::extension::resolve_extension;
use crate::{FilesError, FilesResult};
use contacts_uuid::ContactId;

/// A filename that is safe to join onto the photo root.
///
/// Guarantees a single, visible path component: non-empty, at most 255 bytes, no `/`, `\`, `:`
/// or NUL, no `..`, and no leading `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoFilename(String);

impl PhotoFilename {
    /// Validates a filename supplied by a caller (for example a URL path segment).
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::InvalidPath`] if the name could address anything other than a
    /// direct child of the photo root.
    pub fn parse(input: impl AsRef<str>) -> FilesResult<Self> {
        let input = input.as_ref();

        if input.is_empty() {
            return Err(FilesError::InvalidPath("filename cannot be empty".into()));
        }
        if input.len() > MAX_FILENAME_LEN {
            return Err(FilesError::InvalidPath(format!(
                "filename exceeds {} bytes",
                MAX_FILENAME_LEN
            )));
        }
        if input.contains("..") {
            return Err(FilesError::InvalidPath(format!(
                "filename must not contain '..': {}",
                input
            )));
        }
        if input.starts_with('.') {
            return Err(FilesError::InvalidPath(format!(
                "filename must not start with '.': {}",
                input
            )));
        }
        if input
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':' | '\0'))
        {
            return Err(FilesError::InvalidPath(format!(
                "filename must be a single path component: {}",
                input
            )));
        }

        Ok(Self(input.to_owned()))
    }

    /// Builds the stored name for a contact's photo: `<contact_id><extension>`.
    pub fn for_contact(contact_id: &ContactId, original_filename: Option<&str>) -> Self {
        Self(format!(
            "{}{}",
            contact_id,
            resolve_extension(original_filename)
        ))
    }

    /// The extension including its leading `.`, if any.
    pub fn extension(&self) -> Option<&str> {
        self.0.rfind('.').map(|idx| &self.0[idx..])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoFilename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhotoFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PhotoFilename {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
