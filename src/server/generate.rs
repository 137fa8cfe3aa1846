use crate::domain::RawTrip;
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

pub const GENERATE_FAILED: &str = "Failed to process trip request";

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

pub async fn generate(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<RawTrip>, ApiError> {
    let Json(request) = request.map_err(|rejection| ApiError::rejected(rejection, GENERATE_FAILED))?;
    let trip = state.extractor.extract_trip(&request.prompt).await?;
    Ok(Json(trip))
}
