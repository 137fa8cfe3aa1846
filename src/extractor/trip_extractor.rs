use crate::domain::RawTrip;
use crate::extractor::prompt::extraction_request;
use crate::openai::ChatModel;
use crate::upstream::UpstreamError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct TripExtractor {
    chat: Arc<dyn ChatModel>,
    model: String,
}

impl TripExtractor {
    pub fn new(chat: Arc<dyn ChatModel>, model: impl Into<String>) -> Self {
        TripExtractor { chat, model: model.into() }
    }

    #[instrument(skip_all)]
    pub async fn extract_trip(&self, trip_description: &str) -> Result<RawTrip, ExtractionError> {
        info!("🧭 Extracting trip...");
        let completion = self.chat.complete(extraction_request(&self.model, trip_description)).await?;

        // A missing message is parsed like an empty object, failing on the required fields
        let content = completion.first_content().unwrap_or("{}");
        debug!(response = content, "🧭 Raw extraction response");

        let trip = serde_json::from_str::<RawTrip>(content).map_err(ExtractionError::MalformedResponse)?;
        info!(
            "🧭 Extracting trip... OK, '{}' to '{}' with {} waypoint(s)",
            trip.start_location.name,
            trip.end_location.name,
            trip.waypoints.len()
        );

        Ok(trip)
    }
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("malformed model response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
