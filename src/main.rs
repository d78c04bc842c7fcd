use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use contacts_core::CoreConfig;

/// Main entry point for the contacts server
///
/// Resolves configuration from the environment (optionally via `.env`), then serves the REST API
/// with its Swagger UI.
///
/// # Environment Variables
/// - `CONTACTS_REST_ADDR`: REST server address (default: "0.0.0.0:8080")
/// - `CONTACT_DATA_DIR`: Directory for contact records (default: "contact_data")
/// - `PHOTO_DIRECTORY`: Directory for contact photos (default: "uploads")
/// - `CONTACTS_PUBLIC_URL`: Fixed origin for photo URLs (default: taken from each request)
/// - `MAX_PHOTO_BYTES`: Largest accepted photo upload (default: 10 MiB)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contacts_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("contacts_core=info".parse()?)
                .add_directive("contacts_files=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("CONTACTS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let cfg = Arc::new(CoreConfig::from_env()?);

    tracing::info!("++ Starting contacts REST on {}", rest_addr);
    tracing::info!(
        "++ Contact records in {}, photos in {}",
        cfg.contact_data_dir().display(),
        cfg.photo_dir().display()
    );

    let app = router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
