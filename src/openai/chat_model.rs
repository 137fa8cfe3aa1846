use crate::openai::domain::{ChatCompletion, ChatRequest};
use crate::upstream::{UpstreamError, ensure_success};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::{debug, instrument};

#[async_trait]
pub trait ChatModel: Debug + Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, UpstreamError>;
}

#[derive(Debug)]
pub struct OpenAiChat {
    client: Client,
    url: String,
}

impl OpenAiChat {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        OpenAiChat { client, url: url.into() }
    }
}

#[async_trait]
impl ChatModel for OpenAiChat {
    #[instrument(skip_all, fields(model = %request.model))]
    async fn complete(&self, request: ChatRequest) -> Result<ChatCompletion, UpstreamError> {
        debug!("💬 Requesting chat completion...");
        let response = self.client.post(format!("{}/chat/completions", self.url)).json(&request).send().await?;
        let completion = ensure_success(response).await?.json::<ChatCompletion>().await?;
        debug!("💬 Requesting chat completion... OK, {} choice(s)", completion.choices.len());

        Ok(completion)
    }
}
