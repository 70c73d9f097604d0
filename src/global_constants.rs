pub const APPLICATION_TITLE: &str = "Plant Identifier";
pub const APPLICATION_SUBTITLE: &str = "Upload a photo of any plant and get detailed information about its characteristics, care requirements, and growing conditions. Perfect for gardeners and plant enthusiasts!";

pub const LOG_TAG_ACQUISITION: &str = "[ACQUISITION]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_GEMINI: &str = "[GEMINI]";

pub const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";
pub const RESPONSE_MIME_TYPE_JSON: &str = "application/json";

pub const PLANT_IDENTIFICATION_PROMPT: &str = r#"Analyze this plant image and provide detailed information in the following JSON format:
{
  "name": "common name of the plant",
  "scientificName": "scientific name",
  "family": "plant family",
  "description": "detailed description of physical characteristics",
  "care": "comprehensive care instructions",
  "nativeRegion": "native habitat and region",
  "wateringNeeds": "specific watering requirements",
  "sunlightRequirements": "sunlight needs",
  "temperature": "ideal temperature range",
  "humidity": "humidity requirements",
  "soilType": "preferred soil conditions",
  "growthRate": "growth rate and mature size"
}
Ensure the response is only the JSON object with these fields."#;

pub const CAPTURED_IMAGE_FILE_NAME: &str = "captured-image.jpg";
pub const CAPTURED_IMAGE_MEDIA_TYPE: &str = "image/jpeg";
pub const CAPTURED_IMAGE_JPEG_QUALITY: u8 = 92;

pub const IMAGE_FILE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "heic", "heif"];

pub const MESSAGE_MISSING_API_KEY: &str = "API key is not configured";
pub const MESSAGE_PERMISSION_DENIED: &str =
    "API key doesn't have access to Gemini Vision API. Please check your API key permissions.";
pub const MESSAGE_MODEL_NOT_FOUND: &str = "Invalid model specified. Please check the model name.";
pub const MESSAGE_PARSE_FAILURE: &str = "Failed to parse plant information";
pub const MESSAGE_EMPTY_RESPONSE: &str = "The model returned no text for this image";
pub const MESSAGE_IDENTIFICATION_FALLBACK: &str = "Failed to identify plant. Please try again.";

pub const ALERT_TITLE_CAMERA: &str = "Camera";
pub const ALERT_NO_CAMERA: &str = "Your device doesn't seem to have a camera.";
pub const ALERT_CAMERA_CAPTURE_FAILED: &str =
    "Failed to capture image from camera. Please try again.";

pub const STATUS_READY: &str = "Ready - choose, drop or capture a plant photo";
pub const STATUS_IMAGE_SELECTED: &str = "Image selected - ready to identify";
pub const STATUS_IDENTIFYING: &str = "Analyzing Plant...";
pub const STATUS_IDENTIFIED: &str = "Plant identified";
pub const STATUS_IDENTIFICATION_FAILED: &str = "Identification failed";
pub const STATUS_CAPTURING: &str = "Capturing from camera...";

pub const SETTINGS_DIRECTORY_NAME: &str = "plant-identifier";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
