use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::models::IdentificationError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    #[serde(default, deserialize_with = "required_text")]
    pub name: String,
    #[serde(default, deserialize_with = "required_text")]
    pub description: String,
    #[serde(default, deserialize_with = "required_text")]
    pub care: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub scientific_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub family: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub native_region: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub watering_needs: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub sunlight_requirements: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub temperature: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub humidity: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub soil_type: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub growth_rate: Option<String>,
}

impl PlantRecord {
    /// Parses the model's reply. The whole text must be one JSON object and
    /// `name`, `description` and `care` must be present and truthy; anything
    /// else is a [`IdentificationError::ResponseParse`].
    pub fn parse_response_text(response_text: &str) -> Result<Self, IdentificationError> {
        let value: Value = serde_json::from_str(response_text).map_err(|error| {
            log::warn!("[PLANT_RECORD] Response is not valid JSON: {}", error);
            IdentificationError::ResponseParse
        })?;

        // Structs also deserialize from arrays, so the shape is checked first.
        if !value.is_object() {
            log::warn!("[PLANT_RECORD] Response JSON is not an object");
            return Err(IdentificationError::ResponseParse);
        }

        let record = Self::deserialize(value).map_err(|error| {
            log::warn!("[PLANT_RECORD] Response JSON has an unexpected shape: {}", error);
            IdentificationError::ResponseParse
        })?;

        for (key, text) in [
            ("name", &record.name),
            ("description", &record.description),
            ("care", &record.care),
        ] {
            if text.is_empty() {
                log::warn!("[PLANT_RECORD] Required field '{}' is missing or empty", key);
                return Err(IdentificationError::ResponseParse);
            }
        }

        Ok(record)
    }
}

/// `false` and `0` count as missing, like `null` and `""`.
fn required_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let is_falsy = match &value {
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    };

    if is_falsy {
        return Ok(String::new());
    }
    Ok(value_to_text(value).unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
