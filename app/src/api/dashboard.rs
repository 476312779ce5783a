use super::run_blocking;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use serde::Serialize;
use server::dashboard::ColorPalette;
use server::dashboard::image::{content_type_for, image_url};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /api/upload` with the multipart field `image`.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            let original_name = field.file_name().unwrap_or_default().to_string();
            upload = Some((original_name, field.bytes().await?));
            break;
        }
    }

    let (original_name, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("Failed to retrieve image".to_string()))?;
    if bytes.len() > state.limits.max_image_bytes {
        return Err(AppError::BadRequest(format!(
            "Image too large (max {} bytes)",
            state.limits.max_image_bytes
        )));
    }

    let images = state.images.clone();
    let filename = run_blocking(move || images.save(&original_name, &bytes)).await?;

    Ok(Json(UploadResponse {
        message: "Image uploaded successfully".to_string(),
        url: image_url(&filename),
    }))
}

/// `GET /api/image/{filename}`
pub async fn get_image(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let images = state.images.clone();
    let content_type = content_type_for(&filename);
    let bytes = run_blocking(move || images.read(&filename)).await?;

    Ok(([(CONTENT_TYPE, content_type)], bytes))
}

/// `GET /api/current-image`: empty `url` until an image has been uploaded.
pub async fn current_image(State(state): State<AppState>) -> Json<ImageResponse> {
    Json(ImageResponse {
        url: state.images.current_url(),
    })
}

pub async fn get_colors(State(state): State<AppState>) -> AppResult<Json<ColorPalette>> {
    let colors = state.colors.clone();
    let palette = run_blocking(move || colors.load()).await?;
    Ok(Json(palette))
}

/// `POST`/`PUT /api/colors`
pub async fn update_colors(
    State(state): State<AppState>,
    payload: Result<Json<ColorPalette>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(palette) = payload.map_err(|rejection| {
        log::debug!("Rejected color update: {rejection}");
        AppError::BadRequest("Failed to parse colors".to_string())
    })?;

    let colors = state.colors.clone();
    run_blocking(move || colors.save(&palette)).await?;

    Ok(Json(MessageResponse {
        message: "Colors updated successfully".to_string(),
    }))
}
