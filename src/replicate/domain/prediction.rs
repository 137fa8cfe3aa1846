use serde::{Deserialize, Serialize};
use serde_json::Value;

// API: https://replicate.com/docs/reference/http#predictions.create
#[derive(Debug, Serialize)]
pub struct PredictionRequest<'a> {
    pub version: &'a str,
    pub input: SpeechInput<'a>,
}

#[derive(Debug, Serialize)]
pub struct SpeechInput<'a> {
    pub text: &'a str,
    pub speed: f32,
    pub voice: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl PredictionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionStatus::Starting => "starting",
            PredictionStatus::Processing => "processing",
            PredictionStatus::Succeeded => "succeeded",
            PredictionStatus::Failed => "failed",
            PredictionStatus::Canceled => "canceled",
        }
    }
}
