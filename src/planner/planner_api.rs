use crate::domain::{RawTrip, Trip};
use crate::server::GenerateAudioRequest;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Calls the route and narration endpoints of a running server.
#[derive(Debug, Clone)]
pub struct PlannerApi {
    client: Client,
    server_url: String,
}

impl PlannerApi {
    pub fn new(client: Client, server_url: impl Into<String>) -> Self {
        PlannerApi {
            client,
            server_url: server_url.into(),
        }
    }

    #[instrument(skip_all)]
    pub async fn generate_route(&self, prompt: &str) -> Result<RawTrip, PlannerApiError> {
        let response = self
            .client
            .post(format!("{}/api/generate", self.server_url))
            .json(&serde_json::json!({ "prompt": prompt }))
            .send()
            .await?;

        Ok(check(response).await?.json::<RawTrip>().await?)
    }

    #[instrument(skip_all)]
    pub async fn generate_audio(&self, trip: &Trip, trip_description: &str) -> Result<Vec<u8>, PlannerApiError> {
        let request = GenerateAudioRequest {
            trip_description: trip_description.to_string(),
            waypoints: trip.waypoints.clone(),
            start_location: trip.start_location.clone(),
            end_location: trip.end_location.clone(),
        };

        let response = self.client.post(format!("{}/api/generate-audio", self.server_url)).json(&request).send().await?;
        let audio = check(response).await?.bytes().await?.to_vec();
        debug!("Received {} bytes of audio", audio.len());

        Ok(audio)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn check(response: Response) -> Result<Response, PlannerApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => "no error message".to_string(),
    };
    Err(PlannerApiError::Server { status, message })
}

#[derive(Error, Debug)]
pub enum PlannerApiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with {status}: {message}")]
    Server { status: StatusCode, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn generate_route_posts_the_prompt() -> Result<(), PlannerApiError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::Json(json!({ "prompt": "Rome to Naples" })))
            .with_status(200)
            .with_body(r#"{ "start_location": { "name": "Rome" }, "end_location": { "name": "Naples" }, "waypoints": [] }"#)
            .create_async()
            .await;

        let trip = PlannerApi::new(Client::new(), server.url()).generate_route("Rome to Naples").await?;

        mock.assert_async().await;
        assert_eq!(trip.start_location.name, "Rome");
        Ok(())
    }

    #[tokio::test]
    async fn generate_audio_sends_the_trip_in_the_client_shape() -> Result<(), PlannerApiError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate-audio")
            .match_body(Matcher::Json(json!({
                "tripDescription": "Rome to Naples",
                "waypoints": [],
                "startLocation": { "name": "Rome", "coordinates": [12.49, 41.89] },
                "endLocation": { "name": "Naples" }
            })))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(b"ID3")
            .create_async()
            .await;
        let trip = Trip {
            start_location: Location {
                name: "Rome".to_string(),
                coordinates: Some(crate::domain::LonLat(12.49, 41.89)),
            },
            end_location: Location {
                name: "Naples".to_string(),
                coordinates: None,
            },
            waypoints: vec![],
        };

        let audio = PlannerApi::new(Client::new(), server.url()).generate_audio(&trip, "Rome to Naples").await?;

        mock.assert_async().await;
        assert_eq!(audio, b"ID3".to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn surfaces_the_server_error_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(500)
            .with_body(r#"{ "error": "Failed to process trip request" }"#)
            .create_async()
            .await;

        let result = PlannerApi::new(Client::new(), server.url()).generate_route("anything").await;

        match result {
            Err(PlannerApiError::Server { status, message }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "Failed to process trip request");
            }
            other => panic!("Expected a server error, found {:?}", other),
        }
    }
}
