use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use claims::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;
use vigilance::api::router;
use vigilance::config::load_config;
use vigilance::setup::seed_default_themes;
use vigilance::state::AppState;

// Helper module for building the app over a throwaway storage root
mod helpers {
    use super::*;

    const BOUNDARY: &str = "vigilance-test-boundary";

    pub struct Part<'a> {
        pub name: &'a str,
        pub filename: Option<&'a str>,
        pub data: &'a [u8],
    }

    pub fn text<'a>(name: &'a str, value: &'a str) -> Part<'a> {
        Part {
            name,
            filename: None,
            data: value.as_bytes(),
        }
    }

    pub fn file<'a>(name: &'a str, filename: &'a str, data: &'a [u8]) -> Part<'a> {
        Part {
            name,
            filename: Some(filename),
            data,
        }
    }

    /// App over a fresh storage root; `extra` is appended to the config file.
    /// The community registry points at a closed port.
    pub fn create_app_with(extra: &str) -> (TempDir, Router) {
        let root = tempfile::tempdir().expect("temp dir");
        let config_path = root.path().join("vigilance.toml");
        fs::write(
            &config_path,
            format!(
                "[storage]\nroot = \"{}\"\n\n[community]\napi_base = \"http://127.0.0.1:9\"\ntimeout_secs = 2\n\n{extra}",
                root.path().display()
            ),
        )
        .unwrap();

        let config = assert_ok!(load_config(Some(&config_path)).into_result());
        let state = assert_ok!(AppState::from_config(&config));
        let app = router(state, config.cors());
        (root, app)
    }

    pub fn create_app() -> (TempDir, Router) {
        create_app_with("")
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn delete(uri: &str) -> Request<Body> {
        Request::delete(uri).body(Body::empty()).unwrap()
    }

    pub fn multipart(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part.filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        part.name
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                        part.name
                    )
                    .as_bytes(),
                ),
            }
            body.extend_from_slice(part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = send(app, request).await;
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn upload_sunset(app: &Router) {
        let (status, body) = send_json(
            app,
            multipart(
                "/api/themes/upload",
                &[
                    text("user_id", "alice"),
                    text("theme_name", "sunset"),
                    file("theme_file", "sunset.toml", b"[colors]\nbg=\"#000\""),
                ],
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
    }
}

use helpers::*;

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_uptime() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["uptime"].as_str().unwrap().ends_with(" seconds"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin_by_default() {
        let (_root, app) = create_app();
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/themes/upload")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}

mod themes {
    use super::*;

    #[tokio::test]
    async fn test_list_default_themes() {
        let (root, app) = create_app();
        assert_ok!(seed_default_themes(root.path()));

        let (status, body) = send_json(&app, get("/api/themes")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let defaults = body["data"]["default"].as_array().unwrap();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults[0]["id"], "default_vigilance-dark");
        assert_eq!(defaults[0]["source"], "default");
        assert!(defaults[0].get("content").is_none());
    }

    #[tokio::test]
    async fn test_list_without_defaults_is_empty() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/themes")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["default"], json!([]));
    }

    #[tokio::test]
    async fn test_upload_then_list_and_fetch() {
        let (_root, app) = create_app();
        upload_sunset(&app).await;

        let (status, body) = send_json(&app, get("/api/themes/my?user_id=alice")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let themes = body["themes"].as_array().unwrap();
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0]["name"], "sunset");
        assert_eq!(themes[0]["source"], "user");
        assert_eq!(themes[0]["id"], "user_alice_sunset");

        let (status, body) = send_json(
            &app,
            get("/api/themes/get?source=user&author=alice&theme=sunset"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["content"], "[colors]\nbg=\"#000\"");
        assert_eq!(body["data"]["theme"]["name"], "sunset");
    }

    #[tokio::test]
    async fn test_upload_response_envelope() {
        let (_root, app) = create_app();

        let (status, body) = send_json(
            &app,
            multipart(
                "/api/themes/upload",
                &[
                    text("user_id", "bob"),
                    text("theme_name", "night_owl"),
                    file("theme_file", "night.toml", b"[metadata]\nname = \"Night Owl\""),
                ],
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Theme uploaded successfully",
                "data": {"theme_id": "night_owl"}
            })
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_requests() {
        let (_root, app) = create_app();

        let cases = [
            (
                vec![text("user_id", "alice"), file("theme_file", "a.toml", b"[a]")],
                "Missing required fields: user_id, theme_name",
            ),
            (
                vec![
                    text("user_id", "alice"),
                    text("theme_name", "bad name"),
                    file("theme_file", "a.toml", b"[a]"),
                ],
                "Invalid theme name. Use only alphanumeric, dash, and underscore",
            ),
            (
                vec![
                    text("user_id", "../etc"),
                    text("theme_name", "sunset"),
                    file("theme_file", "a.toml", b"[a]"),
                ],
                "Invalid user id. Use only alphanumeric, dash, and underscore",
            ),
            (
                vec![text("user_id", "alice"), text("theme_name", "sunset")],
                "No file provided",
            ),
            (
                vec![
                    text("user_id", "alice"),
                    text("theme_name", "sunset"),
                    file("theme_file", "a.toml", b"no tables here"),
                ],
                "Invalid TOML format",
            ),
        ];

        for (parts, message) in cases {
            let (status, body) = send_json(&app, multipart("/api/themes/upload", &parts)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{message}");
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], message);
        }

        let (_, body) = send_json(&app, get("/api/themes/my?user_id=alice")).await;
        assert_eq!(body["themes"], json!([]));
    }

    #[tokio::test]
    async fn test_upload_respects_configured_size_limit() {
        let (_root, app) = create_app_with("[limits]\nmax_theme_bytes = 16\n");
        let content = format!("[colors]\n{}", "x = \"#000000\"\n".repeat(4));

        let (status, body) = send_json(
            &app,
            multipart(
                "/api/themes/upload",
                &[
                    text("user_id", "alice"),
                    text("theme_name", "big"),
                    file("theme_file", "big.toml", content.as_bytes()),
                ],
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Theme file too large (max 16 bytes)");
    }

    #[tokio::test]
    async fn test_get_theme_errors() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/themes/get?source=user")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required parameters: source, theme");

        let (status, body) = send_json(
            &app,
            get("/api/themes/get?source=user&author=alice&theme=missing"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Theme not found");

        let (status, _) = send_json(&app, get("/api/themes/get?source=remote&theme=x")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_my_themes_requires_valid_user() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/themes/my")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required parameter: user_id");

        let (status, _) = send_json(&app, get("/api/themes/my?user_id=..")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send_json(&app, get("/api/themes/my?user_id=nobody")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["themes"], json!([]));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (root, app) = create_app();
        upload_sunset(&app).await;
        let path = root.path().join("uploads").join("alice").join("sunset.toml");
        assert!(path.exists());

        let (status, body) = send_json(
            &app,
            delete("/api/themes/upload?user_id=alice&theme_name=sunset"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Theme deleted successfully"})
        );
        assert!(!path.exists());

        let (status, body) = send_json(
            &app,
            delete("/api/themes/upload?user_id=alice&theme_name=sunset"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Theme not found");
    }

    #[tokio::test]
    async fn test_delete_requires_parameters() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, delete("/api/themes/upload?user_id=alice")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Missing required parameters: user_id, theme_name"
        );
    }

    #[tokio::test]
    async fn test_community_falls_back_when_registry_unreachable() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/themes/community")).await;

        assert_eq!(status, StatusCode::OK);
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "vigilance-team");
        assert_eq!(entries[0]["type"], "dir");
    }
}

mod dashboard {
    use super::*;

    #[tokio::test]
    async fn test_image_upload_and_serve() {
        let (_root, app) = create_app();

        let (_, body) = send_json(&app, get("/api/current-image")).await;
        assert_eq!(body, json!({"url": ""}));

        let (status, body) = send_json(
            &app,
            multipart("/api/upload", &[file("image", "beach.png", b"\x89PNG fake")]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Image uploaded successfully");
        let url = body["url"].as_str().unwrap().to_string();
        assert!(url.starts_with("/api/image/dashboard_"));
        assert!(url.ends_with(".png"));

        let (_, current) = send_json(&app, get("/api/current-image")).await;
        assert_eq!(current["url"], url.as_str());

        let response = app.clone().oneshot(get(&url)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"\x89PNG fake");
    }

    #[tokio::test]
    async fn test_image_errors() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/image/missing.png")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Image not found");

        let (status, body) = send_json(
            &app,
            multipart("/api/upload", &[text("caption", "no image here")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Failed to retrieve image");
    }

    #[tokio::test]
    async fn test_colors_default_update_and_reload() {
        let (root, app) = create_app();

        let (status, body) = send_json(&app, get("/api/colors")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["primary"], "#3b82f6");
        assert_eq!(body["accent_purple"], "#a855f7");

        let mut palette = body.clone();
        palette["primary"] = json!("#000000");
        let (status, body) =
            send_json(&app, json_request("PUT", "/api/colors", &palette.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Colors updated successfully"}));

        let (_, body) = send_json(&app, get("/api/colors")).await;
        assert_eq!(body["primary"], "#000000");
        assert!(root.path().join("colors.json").exists());

        palette["secondary"] = json!("#111111");
        let (status, _) =
            send_json(&app, json_request("POST", "/api/colors", &palette.to_string())).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_colors_rejects_bad_payloads() {
        let (_root, app) = create_app();

        let (status, body) = send_json(&app, json_request("POST", "/api/colors", "{ nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Failed to parse colors");

        let (_, defaults) = send_json(&app, get("/api/colors")).await;
        let mut palette = defaults.clone();
        palette["accent_red"] = json!("red");
        let (status, _) =
            send_json(&app, json_request("PUT", "/api/colors", &palette.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, after) = send_json(&app, get("/api/colors")).await;
        assert_eq!(after, defaults);
    }
}
