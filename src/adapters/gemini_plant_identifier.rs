use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::interfaces::adapters::PlantIdentificationService;
use crate::core::models::{IdentificationError, PlantRecord, SelectedImage, UserSettings};
use crate::global_constants::{
    LOG_TAG_GEMINI, PLANT_IDENTIFICATION_PROMPT, RESPONSE_MIME_TYPE_JSON,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Sends the image and fixed prompt to Gemini's `generateContent` endpoint.
///
/// The API key is looked up in the environment on every request, so a
/// missing key fails that request instead of startup. It travels in a header,
/// never in the URL.
pub struct GeminiPlantIdentifier {
    http_client: reqwest::Client,
    api_base_url: String,
    model_name: String,
    api_key_env_var: String,
}

impl GeminiPlantIdentifier {
    pub fn new(api_base_url: String, model_name: String, api_key_env_var: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base_url,
            model_name,
            api_key_env_var,
        }
    }

    pub fn from_settings(settings: &UserSettings) -> Self {
        Self::new(
            settings.api_base_url.clone(),
            settings.model_name.clone(),
            settings.api_key_env_var.clone(),
        )
    }

    fn resolve_api_key(&self) -> Result<String, IdentificationError> {
        match std::env::var(&self.api_key_env_var) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => {
                log::error!(
                    "{} API key variable {} is not set",
                    LOG_TAG_GEMINI,
                    self.api_key_env_var
                );
                Err(IdentificationError::MissingApiKey)
            }
        }
    }

    fn construct_endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            urlencoding::encode(&self.model_name)
        )
    }

    fn build_request_body(image: &SelectedImage) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::Text {
                        text: PLANT_IDENTIFICATION_PROMPT.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineDataPayload {
                            mime_type: image.media_type.clone(),
                            data: image.encode_base64(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE_JSON.to_string(),
            },
        }
    }

    async fn send_request(
        &self,
        url: &str,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, IdentificationError> {
        let response = self
            .http_client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            log::error!(
                "{} request failed with HTTP {}: {}",
                LOG_TAG_GEMINI,
                status.as_u16(),
                body_text
            );
            return Err(IdentificationError::from_http_status(
                status.as_u16(),
                extract_error_message(&body_text),
            ));
        }

        let parsed: GenerateContentResponse =
            response.json().await.map_err(transport_error)?;

        extract_response_text(parsed)
    }
}

#[async_trait]
impl PlantIdentificationService for GeminiPlantIdentifier {
    async fn identify_plant(
        &self,
        image: &SelectedImage,
    ) -> Result<PlantRecord, IdentificationError> {
        let api_key = self.resolve_api_key()?;

        log::info!(
            "{} identifying {:?} with model {}",
            LOG_TAG_GEMINI,
            image,
            self.model_name
        );

        let url = self.construct_endpoint_url();
        let body = Self::build_request_body(image);
        let response_text = self.send_request(&url, &api_key, &body).await?;

        log::debug!("{} response text: {}", LOG_TAG_GEMINI, response_text);

        let record = PlantRecord::parse_response_text(&response_text)?;
        log::info!("{} identified plant: {}", LOG_TAG_GEMINI, record.name);
        Ok(record)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataPayload {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn extract_response_text(response: GenerateContentResponse) -> Result<String, IdentificationError> {
    let text: String = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(IdentificationError::EmptyResponse);
    }
    Ok(text)
}

/// Drops the request URL from the error text before it reaches the UI or logs.
fn transport_error(error: reqwest::Error) -> IdentificationError {
    IdentificationError::from_transport_message(error.without_url().to_string())
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .and_then(|wrapper| wrapper.error.message)
        .unwrap_or_else(|| body.trim().to_string())
}
