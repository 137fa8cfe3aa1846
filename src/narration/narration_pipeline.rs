use crate::narration::prompt::{NarrationInput, narration_request};
use crate::openai::ChatModel;
use crate::replicate::{SpeechOutput, SpeechSynthesizer};
use crate::upstream::UpstreamError;
use futures::TryStreamExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// A synthesized narration, ready to be served as one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Narration {
    pub audio: Vec<u8>,
}

impl Narration {
    pub fn content_type(&self) -> &'static str {
        AUDIO_MPEG
    }

    pub fn content_length(&self) -> usize {
        self.audio.len()
    }
}

#[derive(Debug, Clone)]
pub struct NarrationPipeline {
    chat: Arc<dyn ChatModel>,
    speech: Arc<dyn SpeechSynthesizer>,
    model: String,
    temperature: f32,
}

impl NarrationPipeline {
    pub fn new(chat: Arc<dyn ChatModel>, speech: Arc<dyn SpeechSynthesizer>, model: impl Into<String>, temperature: f32) -> Self {
        NarrationPipeline {
            chat,
            speech,
            model: model.into(),
            temperature,
        }
    }

    #[instrument(skip_all, fields(start = %input.start_location.name, end = %input.end_location.name))]
    pub async fn synthesize_narration(&self, input: NarrationInput<'_>) -> Result<Narration, NarrationError> {
        info!("📻 Writing narration script...");
        let completion = self.chat.complete(narration_request(&self.model, self.temperature, &input)).await?;
        let script = completion
            .first_content()
            .map(str::trim)
            .filter(|script| !script.is_empty())
            .ok_or(NarrationError::EmptyScript)?;
        debug!(script, "📻 Narration script");
        info!("📻 Writing narration script... OK, {} characters", script.len());

        let stream = match self.speech.synthesize(script).await? {
            SpeechOutput::Stream(stream) => stream,
            SpeechOutput::Unsupported(output) => {
                debug!(%output, "📻 Unexpected synthesis output");
                return Err(NarrationError::UnsupportedOutput);
            }
        };

        let audio: Vec<u8> = stream.try_concat().await?;
        info!("📻 Received {} bytes of narration audio", audio.len());

        Ok(Narration { audio })
    }
}

#[derive(Error, Debug)]
pub enum NarrationError {
    #[error("the model returned no narration script")]
    EmptyScript,
    #[error("the synthesis service returned an unsupported output")]
    UnsupportedOutput,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
