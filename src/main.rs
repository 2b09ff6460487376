mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::mail::MailService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;

    startup::seed_admin(&db, &config).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let mail = MailService::new(http_client, config.mail_relay.clone());

    let mut app = router::router()
        .with_state(AppState::new(db, mail, config.upload_dir.clone()))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    if let Some(app_url) = &config.app_url {
        let origin = HeaderValue::from_str(app_url.origin().ascii_serialization().as_str())
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true),
        );
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
