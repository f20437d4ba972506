use serde::{Deserialize, Serialize};
use serde_json::Value;
use tirgum_translator::TranslateError;

/// Body returned by the MyMemory `get` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub response_status: i64,
    #[serde(default)]
    pub response_data: Option<ResponseData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    pub translated_text: String,
}

/// Extract the translated text from a raw response body.
///
/// A body that is not JSON at all is a decode failure. Valid JSON without
/// `responseStatus == 200` and a `responseData.translatedText` string is a
/// rejection.
pub fn translated_text(body: &str) -> Result<String, TranslateError> {
    let value: Value = serde_json::from_str(body)?;
    let status = status_of(&value);

    let response: TranslationResponse = serde_json::from_value(value)
        .map_err(|_| TranslateError::Rejected { status })?;

    match response {
        TranslationResponse {
            response_status: 200,
            response_data: Some(data),
        } => Ok(data.translated_text),
        TranslationResponse {
            response_status, ..
        } => Err(TranslateError::Rejected {
            status: Some(response_status),
        }),
    }
}

// MyMemory reports some errors with the status as a string
fn status_of(value: &Value) -> Option<i64> {
    let status = value.get("responseStatus")?;
    status
        .as_i64()
        .or_else(|| status.as_str().and_then(|s| s.trim().parse().ok()))
}
