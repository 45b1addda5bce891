// JSON bodies exchanged with the `/api` relay.

use super::categories::{Category, CategoryScores};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One spreadsheet row: user, description, image, then the five category scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultRequest {
    pub user_name: String,
    pub result_description: String,
    pub image_url: String,
    pub perception_score: f32,
    pub intellect_score: f32,
    pub emotion_score: f32,
    pub physical_score: f32,
    pub extrasensory_score: f32,
}

impl SaveResultRequest {
    pub fn new(
        user_name: impl Into<String>,
        result_description: impl Into<String>,
        image_url: impl Into<String>,
        categories: &CategoryScores,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            result_description: result_description.into(),
            image_url: image_url.into(),
            perception_score: categories.get(Category::Perception),
            intellect_score: categories.get(Category::Intellect),
            emotion_score: categories.get(Category::Emotion),
            physical_score: categories.get(Category::Physical),
            extrasensory_score: categories.get(Category::Extrasensory),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("image generation already in progress")]
    Busy,
    #[error("HTTP error! status: {status}: {message}")]
    Status { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Build a status error, preferring the server's `{error, details}` body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody {
                error,
                details: Some(d),
            }) => format!("{error} ({d})"),
            Ok(ApiErrorBody { error, .. }) => error,
            Err(_) => body.trim().to_string(),
        };
        ApiError::Status { status, message }
    }
}

/// One-shot flag refusing a second image request while one is outstanding.
#[derive(Debug, Default)]
pub struct ImageRequestGuard {
    in_flight: bool,
}

impl ImageRequestGuard {
    pub fn try_begin(&mut self) -> Result<(), ApiError> {
        if self.in_flight {
            return Err(ApiError::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}
