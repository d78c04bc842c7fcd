//! # API REST
//!
//! REST API for the contact directory.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON and multipart bodies, CORS, request origin, status codes)
//!
//! Business logic lives in `contacts-core`; handlers translate between HTTP and the core services.

#![warn(rust_2018_idioms)]

mod error;
pub mod models;
pub mod origin;

use axum::{
    extract::{
        multipart::MultipartError, DefaultBodyLimit, Multipart, Path as AxumPath, Query, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use contacts_core::{ContactPhotoCoordinator, ContactService, CoreConfig};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use error::{api_error, ApiError};
use models::{
    ContactPageRes, ContactRes, CreateContactReq, HealthRes, ListContactsParams, UploadPhotoForm,
};

/// Headroom on top of the photo limit for multipart boundaries and the `id` field.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Application state for the REST API server
///
/// Shared by all request handlers. The services are cheap to clone; each holds its store behind an
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
    contacts: ContactService,
    photos: ContactPhotoCoordinator,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let contacts = ContactService::new(&cfg);
        let photos = contacts.photos();
        Self {
            cfg,
            contacts,
            photos,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_contacts,
        create_contact,
        get_contact,
        delete_contact,
        upload_photo,
        get_photo,
    ),
    components(schemas(
        HealthRes,
        ContactRes,
        ContactPageRes,
        CreateContactReq,
        UploadPhotoForm,
    ))
)]
pub struct ApiDoc;

/// Builds the full application router: API routes, Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    let upload_limit = state
        .cfg
        .max_photo_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health))
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/:id", get(get_contact).delete(delete_contact))
        .route(
            "/contacts/photo",
            put(upload_photo).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/contacts/image/:filename", get(get_photo))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Contacts REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/contacts",
    params(ListContactsParams),
    responses(
        (status = 200, description = "One page of contacts sorted by name", body = ContactPageRes),
        (status = 400, description = "Invalid page or size"),
        (status = 500, description = "Internal server error")
    )
)]
/// Lists contacts one page at a time, sorted by name.
#[axum::debug_handler]
async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ListContactsParams>,
) -> Result<Json<ContactPageRes>, ApiError> {
    let page = params.page.unwrap_or(0);
    let size = params
        .size
        .unwrap_or(contacts_core::constants::DEFAULT_PAGE_SIZE);

    match state.contacts.list(page, size) {
        Ok(page) => Ok(Json(page.into())),
        Err(e) => Err(api_error("List contacts", e)),
    }
}

#[utoipa::path(
    post,
    path = "/contacts",
    request_body = CreateContactReq,
    responses(
        (status = 201, description = "Contact created", body = ContactRes,
            headers(("Location" = String, description = "Path of the new contact"))),
        (status = 400, description = "Invalid contact"),
        (status = 500, description = "Internal server error")
    )
)]
/// Creates a contact with a freshly generated id.
#[axum::debug_handler]
async fn create_contact(
    State(state): State<AppState>,
    Json(req): Json<CreateContactReq>,
) -> Result<impl IntoResponse, ApiError> {
    match state.contacts.create(req.into()) {
        Ok(contact) => {
            let location = format!("/contacts/{}", contact.id);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ContactRes::from(contact)),
            ))
        }
        Err(e) => Err(api_error("Create contact", e)),
    }
}

#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 200, description = "The contact", body = ContactRes),
        (status = 404, description = "No contact with this id"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn get_contact(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ContactRes>, ApiError> {
    match state.contacts.get(&id) {
        Ok(contact) => Ok(Json(contact.into())),
        Err(e) => Err(api_error("Get contact", e)),
    }
}

#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(("id" = String, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Contact and its photo removed"),
        (status = 404, description = "No contact with this id"),
        (status = 500, description = "Internal server error")
    )
)]
/// Deletes a contact. Its photo is removed on a best-effort basis.
#[axum::debug_handler]
async fn delete_contact(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<StatusCode, ApiError> {
    match state.contacts.delete(&id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(api_error("Delete contact", e)),
    }
}

#[utoipa::path(
    put,
    path = "/contacts/photo",
    request_body(content = UploadPhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Public URL of the stored photo", body = String,
            content_type = "text/plain"),
        (status = 400, description = "Missing, empty or malformed form fields"),
        (status = 404, description = "No contact with this id"),
        (status = 413, description = "Photo larger than the configured limit"),
        (status = 415, description = "File extension is not png, jpg or jpeg"),
        (status = 500, description = "Internal server error"),
        (status = 507, description = "Photo storage is full")
    )
)]
/// Stores a photo for a contact and records its public URL on the contact.
///
/// Form fields: `id` (contact id) and `file` (image bytes). The extension of the uploaded file's
/// name decides the stored filename, so at most one photo exists per contact.
#[axum::debug_handler]
async fn upload_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut id: Option<String> = None;
    let mut file: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("id") => id = Some(field.text().await.map_err(multipart_error)?),
            Some("file") => {
                let original = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some((original, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let id = id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or((StatusCode::BAD_REQUEST, "Missing id field"))?;
    let (original, bytes) = file.ok_or((StatusCode::BAD_REQUEST, "Missing file field"))?;

    if bytes.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Empty file"));
    }
    if bytes.len() > state.cfg.max_photo_bytes() {
        return Err((StatusCode::PAYLOAD_TOO_LARGE, "Photo too large"));
    }

    let base = origin::request_base_url(&headers, state.cfg.public_base_url());

    match state
        .photos
        .attach_photo(&id, &bytes, original.as_deref(), &base)
    {
        Ok(url) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            url,
        )),
        Err(e) => Err(api_error("Upload photo", e)),
    }
}

#[utoipa::path(
    get,
    path = "/contacts/image/{filename}",
    params(("filename" = String, Path, description = "Stored photo filename, e.g. `<id>.png`")),
    responses(
        (status = 200, description = "Photo bytes as image/png or image/jpeg"),
        (status = 304, description = "Photo unchanged since the given ETag"),
        (status = 400, description = "Filename is not a plain file name"),
        (status = 404, description = "No photo with this filename"),
        (status = 415, description = "Extension is not png, jpg or jpeg"),
        (status = 500, description = "Internal server error")
    )
)]
/// Serves a stored photo with its content type and a content-hash ETag.
#[axum::debug_handler]
async fn get_photo(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let photo = state
        .photos
        .read_photo(&filename)
        .map_err(|e| api_error("Get photo", e))?;

    let etag = photo.etag();
    let unchanged = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split(',').any(|tag| tag.trim() == etag || tag.trim() == "*"));
    if unchanged {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response());
    }

    Ok((
        [
            (header::CONTENT_TYPE, photo.content_type().to_string()),
            (header::ETAG, etag),
        ],
        photo.bytes,
    )
        .into_response())
}

fn multipart_error(e: MultipartError) -> ApiError {
    tracing::debug!("Upload photo multipart error: {}", e);
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => (StatusCode::PAYLOAD_TOO_LARGE, "Photo too large"),
        _ => (StatusCode::BAD_REQUEST, "Invalid multipart body"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use contacts_core::BaseUrl;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const BOUNDARY: &str = "contacts-test-boundary";

    struct Fixture {
        _temp: TempDir,
        cfg: Arc<CoreConfig>,
        app: Router,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with(None, 1024 * 1024)
        }

        fn with(public_url: Option<BaseUrl>, max_photo_bytes: usize) -> Self {
            let temp = TempDir::new().unwrap();
            let cfg = Arc::new(
                CoreConfig::new(
                    temp.path().join("contacts"),
                    temp.path().join("uploads"),
                    public_url,
                    max_photo_bytes,
                )
                .unwrap(),
            );
            let app = router(AppState::new(cfg.clone()));
            Self {
                _temp: temp,
                cfg,
                app,
            }
        }

        async fn send(&self, request: Request<Body>) -> Response {
            self.app.clone().oneshot(request).await.unwrap()
        }

        async fn create(&self, name: &str) -> Value {
            let response = self
                .send(json_request("POST", "/contacts", json!({ "name": name })))
                .await;
            assert_eq!(response.status(), StatusCode::CREATED);
            body_json(response).await
        }
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn multipart_body(id: Option<&str>, file: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        if let Some(id) = id {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"id\"\r\n\r\n{id}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn upload_request(host: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri("/contacts/photo")
            .header(header::HOST, host)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let fixture = Fixture::new();

        let response = fixture.send(get("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn test_create_sets_location_to_new_id() {
        let fixture = Fixture::new();

        let response = fixture
            .send(json_request(
                "POST",
                "/contacts",
                json!({ "name": "Alice", "email": "alice@example.com" }),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string();
        let body = body_json(response).await;
        let id = body["id"].as_str().unwrap();
        assert_eq!(id.len(), 32);
        assert_eq!(location, format!("/contacts/{}", id));
        assert!(body.get("photoUrl").is_none());
    }

    #[tokio::test]
    async fn test_create_without_name_is_bad_request() {
        let fixture = Fixture::new();

        let response = fixture
            .send(json_request("POST", "/contacts", json!({ "name": "  " })))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_and_malformed_ids_are_not_found() {
        let fixture = Fixture::new();

        let unknown = format!("/contacts/{}", "0".repeat(32));
        assert_eq!(
            fixture.send(get(&unknown)).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            fixture.send(get("/contacts/not-an-id")).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_list_pages_sorted_by_name() {
        let fixture = Fixture::new();
        for name in ["Carol", "Alice", "Bob"] {
            fixture.create(name).await;
        }

        let response = fixture.send(get("/contacts?page=0&size=2")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let names: Vec<&str> = body["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(body["totalElements"], 3);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["number"], 0);
        assert_eq!(body["size"], 2);
    }

    #[tokio::test]
    async fn test_list_rejects_zero_size() {
        let fixture = Fixture::new();

        let response = fixture.send(get("/contacts?size=0")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_then_fetch_photo() {
        let fixture = Fixture::new();
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];

        let response = fixture
            .send(upload_request(
                "contacts.test",
                multipart_body(Some(id), Some(("me.png", &png))),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let url = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(
            url,
            format!("http://contacts.test/contacts/image/{}.png", id)
        );

        let contact = body_json(fixture.send(get(&format!("/contacts/{}", id))).await).await;
        assert_eq!(contact["photoUrl"], url.as_str());

        let response = fixture
            .send(get(&format!("/contacts/image/{}.png", id)))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert!(response.headers().contains_key(header::ETAG));
        assert_eq!(body_bytes(response).await, png.to_vec());
    }

    #[tokio::test]
    async fn test_matching_etag_is_not_modified() {
        let fixture = Fixture::new();
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();
        fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(id), Some(("me.jpg", b"jpeg bytes"))),
            ))
            .await;

        let uri = format!("/contacts/image/{}.jpg", id);
        let first = fixture.send(get(&uri)).await;
        assert_eq!(first.headers()[header::CONTENT_TYPE], "image/jpeg");
        let etag = first.headers()[header::ETAG].clone();

        let response = fixture
            .send(
                Request::builder()
                    .uri(&uri)
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_upload_uses_configured_public_url() {
        let fixture = Fixture::with(Some(BaseUrl::new("https://cdn.example.org/")), 1024);
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();

        let response = fixture
            .send(upload_request(
                "internal:8080",
                multipart_body(Some(id), Some(("me.png", b"png"))),
            ))
            .await;

        let url = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(
            url,
            format!("https://cdn.example.org/contacts/image/{}.png", id)
        );
    }

    #[tokio::test]
    async fn test_upload_for_unknown_contact_stores_nothing() {
        let fixture = Fixture::new();
        let id = "0".repeat(32);

        let response = fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(&id), Some(("me.png", b"png"))),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(!fixture.cfg.photo_dir().join(format!("{}.png", id)).exists());
    }

    #[tokio::test]
    async fn test_upload_missing_fields_is_bad_request() {
        let fixture = Fixture::new();
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();

        let no_file = fixture
            .send(upload_request("localhost", multipart_body(Some(id), None)))
            .await;
        let no_id = fixture
            .send(upload_request(
                "localhost",
                multipart_body(None, Some(("me.png", b"png"))),
            ))
            .await;

        assert_eq!(no_file.status(), StatusCode::BAD_REQUEST);
        assert_eq!(no_id.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_unsupported_extension_keeps_current_photo() {
        let fixture = Fixture::new();
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();
        let first = fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(id), Some(("me.png", b"png"))),
            ))
            .await;
        let url = String::from_utf8(body_bytes(first).await).unwrap();

        let response = fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(id), Some(("me.gif", b"GIF89a"))),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let contact = body_json(fixture.send(get(&format!("/contacts/{}", id))).await).await;
        assert_eq!(contact["photoUrl"], url.as_str());
        let photo = fixture
            .send(get(&format!("/contacts/image/{}.png", id)))
            .await;
        assert_eq!(photo.status(), StatusCode::OK);
        assert!(!fixture.cfg.photo_dir().join(format!("{}.gif", id)).exists());
    }

    #[tokio::test]
    async fn test_upload_empty_file_is_bad_request() {
        let fixture = Fixture::new();
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();

        let response = fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(id), Some(("me.png", b""))),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!fixture.cfg.photo_dir().join(format!("{}.png", id)).exists());
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let fixture = Fixture::with(None, 16);
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();

        let response = fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(id), Some(("me.png", &[0u8; 64]))),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let contact = body_json(fixture.send(get(&format!("/contacts/{}", id))).await).await;
        assert!(contact.get("photoUrl").is_none());
    }

    #[tokio::test]
    async fn test_get_photo_rejects_traversal() {
        let fixture = Fixture::new();

        let response = fixture
            .send(get("/contacts/image/..%2F..%2Fetc%2Fpasswd.png"))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_photo_unsupported_extension() {
        let fixture = Fixture::new();
        std::fs::create_dir_all(fixture.cfg.photo_dir()).unwrap();
        std::fs::write(fixture.cfg.photo_dir().join("abc.gif"), b"GIF89a").unwrap();

        let response = fixture.send(get("/contacts/image/abc.gif")).await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_get_photo_missing_is_not_found() {
        let fixture = Fixture::new();

        let response = fixture.send(get("/contacts/image/nothing.png")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_contact_removes_photo() {
        let fixture = Fixture::new();
        let contact = fixture.create("Alice").await;
        let id = contact["id"].as_str().unwrap();
        fixture
            .send(upload_request(
                "localhost",
                multipart_body(Some(id), Some(("me.png", b"png"))),
            ))
            .await;

        let response = fixture
            .send(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/contacts/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            fixture
                .send(get(&format!("/contacts/{}", id)))
                .await
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            fixture
                .send(get(&format!("/contacts/image/{}.png", id)))
                .await
                .status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let fixture = Fixture::new();

        let response = fixture.send(get("/api-docs/openapi.json")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"]["/contacts/photo"].is_object());
    }
}
