//! # HTTP API
//!
//! Routes of the dashboard backend. Handlers are thin: they check request
//! parameters, hand filesystem work to [`run_blocking`], and render results
//! through [`response`] envelopes or [`AppError`].

pub mod dashboard;
pub mod health;
pub mod response;
pub mod themes;

use crate::config::app::CorsConfig;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};

/// Room for multipart boundaries and the small text fields next to the file
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    let theme_body_limit = state.limits.max_theme_bytes + MULTIPART_OVERHEAD_BYTES;
    let image_body_limit = state.limits.max_image_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/upload",
            post(dashboard::upload_image).layer(DefaultBodyLimit::max(image_body_limit)),
        )
        .route("/api/image/{filename}", get(dashboard::get_image))
        .route("/api/current-image", get(dashboard::current_image))
        .route(
            "/api/colors",
            get(dashboard::get_colors)
                .post(dashboard::update_colors)
                .put(dashboard::update_colors),
        )
        .route("/api/themes", get(themes::list_themes))
        .route("/api/themes/get", get(themes::get_theme))
        .route("/api/themes/my", get(themes::my_themes))
        .route(
            "/api/themes/upload",
            post(themes::upload_theme)
                .delete(themes::delete_theme)
                .layer(DefaultBodyLimit::max(theme_body_limit)),
        )
        .route("/api/themes/community", get(themes::community_themes))
        .layer(cors_layer(cors))
        .with_state(state)
}

/// CORS policy for the dashboard frontend.
///
/// A `*` entry allows every origin without credentials, since browsers refuse
/// credentialed wildcard responses. Otherwise only the listed origins are
/// allowed and credentials are permitted.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .expose_headers([CONTENT_LENGTH])
        .max_age(config.max_age());

    if config.allows_any_origin() {
        return base.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring invalid CORS origin '{origin}': {e}");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Run blocking filesystem work off the async executor.
pub(crate) async fn run_blocking<T, E, F>(task: F) -> AppResult<T>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(task).await?.map_err(Into::into)
}
