use serde::Serialize;
use server::theme::Theme;

/// `{success, message?, data?}` envelope used by the theme endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn message_with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `{success, themes}` envelope of the per-user listing.
#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    pub success: bool,
    pub themes: Vec<Theme>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelopes_omit_empty_fields() {
        let failure = serde_json::to_value(ApiResponse::failure("Theme not found")).unwrap();
        assert_eq!(failure, json!({"success": false, "message": "Theme not found"}));

        let data = serde_json::to_value(ApiResponse::data(json!({"content": "[x]"}))).unwrap();
        assert_eq!(data, json!({"success": true, "data": {"content": "[x]"}}));
    }
}
