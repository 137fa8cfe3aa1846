use crate::domain::{Location, Waypoint};
use crate::narration::NarrationInput;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioRequest {
    pub trip_description: String,
    pub waypoints: Vec<Waypoint>,
    pub start_location: Location,
    pub end_location: Location,
}

pub const GENERATE_AUDIO_FAILED: &str = "Failed to generate audio";

pub async fn generate_audio(
    State(state): State<AppState>,
    request: Result<Json<GenerateAudioRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = request.map_err(|rejection| ApiError::rejected(rejection, GENERATE_AUDIO_FAILED))?;
    let input = NarrationInput {
        start_location: &request.start_location,
        end_location: &request.end_location,
        waypoints: &request.waypoints,
        trip_description: &request.trip_description,
    };
    let narration = state.narration.synthesize_narration(input).await?;

    let headers = [
        (header::CONTENT_TYPE, narration.content_type().to_string()),
        (header::CONTENT_LENGTH, narration.content_length().to_string()),
    ];
    Ok((headers, narration.audio).into_response())
}
