use thiserror::Error;

use crate::global_constants;

/// Why an identification request produced no [`PlantRecord`](super::PlantRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentificationError {
    #[error("API key is not configured")]
    MissingApiKey,
    #[error("API key lacks permission for the model (HTTP 403)")]
    PermissionDenied,
    #[error("model not found (HTTP 404)")]
    ModelNotFound,
    #[error("service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("response contained no text")]
    EmptyResponse,
    #[error("response could not be parsed as plant information")]
    ResponseParse,
    #[error("identification failed without a message")]
    Unknown,
}

impl IdentificationError {
    /// Classifies an unsuccessful HTTP status. 403 and 404 get their own
    /// variants; everything else keeps the service's message.
    pub fn from_http_status(status: u16, message: String) -> Self {
        match status {
            403 => Self::PermissionDenied,
            404 => Self::ModelNotFound,
            _ if message.trim().is_empty() => Self::Service {
                status,
                message: format!("HTTP {}", status),
            },
            _ => Self::Service { status, message },
        }
    }

    pub fn from_transport_message(message: String) -> Self {
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Transport(message)
        }
    }

    /// The text shown inline under the upload zone.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => global_constants::MESSAGE_MISSING_API_KEY.to_string(),
            Self::PermissionDenied => global_constants::MESSAGE_PERMISSION_DENIED.to_string(),
            Self::ModelNotFound => global_constants::MESSAGE_MODEL_NOT_FOUND.to_string(),
            Self::Service { message, .. } => message.clone(),
            Self::Transport(message) => message.clone(),
            Self::EmptyResponse => global_constants::MESSAGE_EMPTY_RESPONSE.to_string(),
            Self::ResponseParse => global_constants::MESSAGE_PARSE_FAILURE.to_string(),
            Self::Unknown => global_constants::MESSAGE_IDENTIFICATION_FALLBACK.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status_maps_forbidden_to_permission_message() {
        let error = IdentificationError::from_http_status(403, "PERMISSION_DENIED".to_string());

        assert_eq!(error, IdentificationError::PermissionDenied);
        assert_eq!(
            error.user_message(),
            "API key doesn't have access to Gemini Vision API. Please check your API key permissions."
        );
    }

    #[test]
    fn test_from_http_status_maps_not_found_to_model_message() {
        let error = IdentificationError::from_http_status(404, "models/x is not found".to_string());

        assert_eq!(error, IdentificationError::ModelNotFound);
        assert_eq!(
            error.user_message(),
            "Invalid model specified. Please check the model name."
        );
    }

    #[test]
    fn test_from_http_status_keeps_other_messages_unchanged() {
        let message = "INVALID_ARGUMENT: Unable to process input image.".to_string();

        let error = IdentificationError::from_http_status(400, message.clone());

        assert_eq!(error.user_message(), message);
    }

    #[test]
    fn test_from_http_status_without_message_names_the_status() {
        let error = IdentificationError::from_http_status(500, "  ".to_string());

        assert_eq!(error.user_message(), "HTTP 500");
    }

    #[test]
    fn test_from_transport_message_passes_text_through() {
        let error = IdentificationError::from_transport_message("connection refused".to_string());

        assert_eq!(error.user_message(), "connection refused");
    }

    #[test]
    fn test_from_transport_message_without_text_uses_fallback() {
        let error = IdentificationError::from_transport_message(String::new());

        assert_eq!(error, IdentificationError::Unknown);
        assert_eq!(
            error.user_message(),
            "Failed to identify plant. Please try again."
        );
    }

    #[test]
    fn test_missing_api_key_and_parse_failure_messages() {
        assert_eq!(
            IdentificationError::MissingApiKey.user_message(),
            "API key is not configured"
        );
        assert_eq!(
            IdentificationError::ResponseParse.user_message(),
            "Failed to parse plant information"
        );
    }
}
