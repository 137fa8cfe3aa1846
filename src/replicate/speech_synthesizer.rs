use crate::app_config::AppConfig;
use crate::replicate::domain::{Prediction, PredictionRequest, PredictionStatus, SpeechInput};
use crate::upstream::{UpstreamError, ensure_success};
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use reqwest::Client;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, instrument};

/// What the synthesis service handed back.
pub enum SpeechOutput {
    /// Audio bytes, chunk by chunk in arrival order.
    Stream(BoxStream<'static, Result<Vec<u8>, UpstreamError>>),
    /// Any output that is not a readable audio file.
    Unsupported(Value),
}

impl Debug for SpeechOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechOutput::Stream(_) => write!(f, "Stream(..)"),
            SpeechOutput::Unsupported(value) => write!(f, "Unsupported({})", value),
        }
    }
}

#[async_trait]
pub trait SpeechSynthesizer: Debug + Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<SpeechOutput, UpstreamError>;
}

#[derive(Debug)]
pub struct ReplicateSynthesizer {
    client: Client,
    /// Unauthenticated, the output URL may point at any host.
    files: Client,
    url: String,
    version: String,
    voice: String,
    speed: f32,
    poll_interval: Duration,
    prediction_timeout: Duration,
}

impl ReplicateSynthesizer {
    pub fn new(client: Client, files: Client, config: &AppConfig) -> Self {
        let replicate = config.replicate();
        ReplicateSynthesizer {
            client,
            files,
            url: replicate.url().to_string(),
            version: replicate.version_id().to_string(),
            voice: replicate.voice().to_string(),
            speed: replicate.speed(),
            poll_interval: replicate.poll_interval(),
            prediction_timeout: replicate.prediction_timeout(),
        }
    }

    async fn create_prediction(&self, text: &str) -> Result<Prediction, UpstreamError> {
        let request = PredictionRequest {
            version: &self.version,
            input: SpeechInput {
                text,
                speed: self.speed,
                voice: &self.voice,
            },
        };

        let response = self
            .client
            .post(format!("{}/predictions", self.url))
            .header("Prefer", "wait")
            .json(&request)
            .send()
            .await?;

        Ok(ensure_success(response).await?.json::<Prediction>().await?)
    }

    async fn wait_for(&self, mut prediction: Prediction) -> Result<Prediction, UpstreamError> {
        while !prediction.status.is_terminal() {
            debug!(prediction_id = %prediction.id, status = prediction.status.as_str(), "⏳ Prediction still running");
            sleep(self.poll_interval).await;

            let response = self.client.get(format!("{}/predictions/{}", self.url, prediction.id)).send().await?;
            prediction = ensure_success(response).await?.json::<Prediction>().await?;
        }

        match prediction.status {
            PredictionStatus::Succeeded => Ok(prediction),
            status => Err(UpstreamError::PredictionFailed {
                id: prediction.id,
                status: status.as_str().to_string(),
                error: prediction.error,
            }),
        }
    }

    async fn stream_file(&self, url: &str) -> Result<BoxStream<'static, Result<Vec<u8>, UpstreamError>>, UpstreamError> {
        let response = ensure_success(self.files.get(url).send().await?).await?;

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(UpstreamError::from))
            .boxed())
    }
}

#[async_trait]
impl SpeechSynthesizer for ReplicateSynthesizer {
    #[instrument(skip_all, fields(voice = %self.voice))]
    async fn synthesize(&self, text: &str) -> Result<SpeechOutput, UpstreamError> {
        info!("🎙️ Synthesizing {} characters...", text.len());
        let prediction = self.create_prediction(text).await?;
        let prediction = timeout(self.prediction_timeout, self.wait_for(prediction))
            .await
            .map_err(|_| UpstreamError::PredictionTimedOut)??;

        match prediction.output {
            Some(Value::String(url)) => {
                info!(prediction_id = %prediction.id, "🎙️ Synthesizing {} characters... OK", text.len());
                Ok(SpeechOutput::Stream(self.stream_file(&url).await?))
            }
            output => Ok(SpeechOutput::Unsupported(output.unwrap_or(Value::Null))),
        }
    }
}
