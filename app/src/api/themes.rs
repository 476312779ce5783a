use super::response::{ApiResponse, ThemeListResponse};
use super::run_blocking;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use server::theme::validation::{
    ThemeContentValidator, ThemeNameValidator, ThemeValidationError, UserIdValidator,
};
use server::theme::{Theme, ThemeError};
use server::validation::Validator;

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    source: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    theme: String,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    user_id: String,
    #[serde(default)]
    theme_name: String,
}

#[derive(Debug, Serialize)]
pub struct DefaultThemes {
    pub default: Vec<Theme>,
}

#[derive(Debug, Serialize)]
pub struct ThemeBody {
    pub content: String,
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct ThemeId {
    pub theme_id: String,
}

/// `GET /api/themes`: bundled themes. Community themes are fetched separately.
pub async fn list_themes(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DefaultThemes>>> {
    let themes = state.themes.clone();
    let default = run_blocking(move || Ok::<_, AppError>(themes.get_default_themes())).await?;
    log::debug!("Listed {} default themes", default.len());

    Ok(Json(ApiResponse::data(DefaultThemes { default })))
}

/// `GET /api/themes/get?source&author&theme`
pub async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> AppResult<Json<ApiResponse<ThemeBody>>> {
    if query.source.is_empty() || query.theme.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required parameters: source, theme".to_string(),
        ));
    }

    let themes = state.themes.clone();
    let found = run_blocking(move || {
        themes
            .get_theme(&query.source, &query.author, &query.theme)
            .map_err(lookup_failed)
    })
    .await?;

    Ok(Json(ApiResponse::data(ThemeBody {
        content: found.content,
        theme: found.theme,
    })))
}

// Every lookup failure is reported as a missing theme.
fn lookup_failed(error: ThemeError) -> AppError {
    log::debug!("Theme lookup failed: {error}");
    AppError::NotFound(error.user_message())
}

/// `GET /api/themes/my?user_id`
pub async fn my_themes(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<ThemeListResponse>> {
    if query.user_id.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required parameter: user_id".to_string(),
        ));
    }
    UserIdValidator.validate(query.user_id.as_str())?;

    let themes = state.themes.clone();
    let listed = run_blocking(move || themes.get_user_themes(&query.user_id)).await?;

    Ok(Json(ThemeListResponse {
        success: true,
        themes: listed,
    }))
}

/// `POST /api/themes/upload` with multipart fields `user_id`, `theme_name`
/// and `theme_file`.
pub async fn upload_theme(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut user_id = String::new();
    let mut theme_name = String::new();
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => user_id = field.text().await?,
            "theme_name" => theme_name = field.text().await?,
            "theme_file" => file = Some(field.bytes().await?),
            _ => {}
        }
    }

    if user_id.is_empty() || theme_name.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required fields: user_id, theme_name".to_string(),
        ));
    }
    ThemeNameValidator.validate(theme_name.as_str())?;
    UserIdValidator.validate(user_id.as_str())?;

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let content =
        String::from_utf8(file.to_vec()).map_err(|_| ThemeValidationError::InvalidContent {
            reason: "Theme file is not valid UTF-8".to_string(),
        })?;
    ThemeContentValidator::new(state.limits.max_theme_bytes).validate(content.as_str())?;

    let themes = state.themes.clone();
    let saved_name = theme_name.clone();
    run_blocking(move || themes.save_user_theme(&user_id, &saved_name, &content)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message_with_data(
            "Theme uploaded successfully",
            ThemeId {
                theme_id: theme_name,
            },
        )),
    ))
}

/// `DELETE /api/themes/upload?user_id&theme_name`
pub async fn delete_theme(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> AppResult<Json<ApiResponse<()>>> {
    if query.user_id.is_empty() || query.theme_name.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required parameters: user_id, theme_name".to_string(),
        ));
    }
    UserIdValidator.validate(query.user_id.as_str())?;
    ThemeNameValidator.validate(query.theme_name.as_str())?;

    let themes = state.themes.clone();
    run_blocking(move || themes.delete_user_theme(&query.user_id, &query.theme_name)).await?;

    Ok(Json(ApiResponse::message("Theme deleted successfully")))
}

/// `GET /api/themes/community`: the registry listing as GitHub returned it,
/// or the fallback listing.
pub async fn community_themes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let listing = state.community.fetch_themes().await?;
    if listing.is_fallback() {
        log::debug!("Serving fallback community listing");
    }

    Ok(([(CONTENT_TYPE, "application/json")], listing.into_body()))
}
