//! Mapping core errors to HTTP responses.

use axum::http::StatusCode;
use contacts_core::{ContactError, FilesError};

pub(crate) type ApiError = (StatusCode, &'static str);

/// Maps a core error to a status code and short client-facing message.
///
/// Server-side failures are logged with full detail; the client only sees the short message.
pub(crate) fn api_error(operation: &str, err: ContactError) -> ApiError {
    let response = match &err {
        ContactError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
        ContactError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Bad request"),
        ContactError::Files(files) => match files {
            FilesError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            FilesError::InvalidPath(_) => (StatusCode::BAD_REQUEST, "Invalid filename"),
            FilesError::UnsupportedMedia(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported media type")
            }
            FilesError::StorageFull { .. } => {
                (StatusCode::INSUFFICIENT_STORAGE, "Insufficient storage")
            }
            FilesError::PermissionDenied { .. } | FilesError::Io { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
            }
        },
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    };

    if response.0.is_server_error() {
        tracing::error!("{} error: {:?}", operation, err);
    } else {
        tracing::debug!("{} rejected: {}", operation, err);
    }

    response
}
