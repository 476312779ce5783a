use crate::api::response::ApiResponse;
use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use server::community::CommunityError;
use server::dashboard::DashboardError;
use server::theme::ThemeError;
use server::theme::validation::ThemeValidationError;
use thiserror::Error;

/// Errors returned by request handlers.
///
/// Every variant renders as the `{success: false, message}` envelope. The
/// message comes from the wrapped error's `user_message()`, so clients never
/// see filesystem paths; the full `Display` text goes to the log.
///
/// # Status mapping
///
/// - [`BadRequest`] and [`Validation`] - 400
/// - [`NotFound`] - 404
/// - [`Theme`], [`Dashboard`], [`Community`] - by the kind of failure
/// - [`Multipart`] - whatever axum reports for the malformed body
/// - [`Task`] - 500
///
/// [`BadRequest`]: AppError::BadRequest
/// [`Validation`]: AppError::Validation
/// [`NotFound`]: AppError::NotFound
/// [`Theme`]: AppError::Theme
/// [`Dashboard`]: AppError::Dashboard
/// [`Community`]: AppError::Community
/// [`Multipart`]: AppError::Multipart
/// [`Task`]: AppError::Task
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ThemeValidationError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error(transparent)]
    Community(#[from] CommunityError),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Theme(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Theme(
                ThemeError::UnknownSource(_) | ThemeError::InvalidPathSegment { .. },
            ) => StatusCode::BAD_REQUEST,
            AppError::Dashboard(DashboardError::ImageNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Dashboard(
                DashboardError::InvalidFilename(_) | DashboardError::InvalidColor { .. },
            ) => StatusCode::BAD_REQUEST,
            AppError::Community(CommunityError::RepositoryNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Multipart(e) => e.status(),
            AppError::Theme(_) | AppError::Dashboard(_) | AppError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(e) => e.user_message(),
            AppError::Theme(e) => e.user_message(),
            AppError::Dashboard(e) => e.user_message(),
            AppError::Community(e) => e.user_message(),
            AppError::Multipart(e) => e.body_text(),
            AppError::Task(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {self}");
        } else {
            log::debug!("Request rejected with {status}: {self}");
        }

        let body = ApiResponse::<()>::failure(self.user_message());
        (status, Json(body)).into_response()
    }
}
