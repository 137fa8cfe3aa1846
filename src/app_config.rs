use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    openai: OpenAi,
    replicate: Replicate,
    client: Client,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn openai(&self) -> &OpenAi {
        &self.openai
    }

    pub fn replicate(&self) -> &Replicate {
        &self.replicate
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn override_server(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    pub fn override_server_url(&mut self, server_url: Option<String>) {
        if let Some(server_url) = server_url {
            self.client.server_url = server_url;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    host: String,
    port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct OpenAi {
    url: String,
    api_key: String,
    model: String,
    narration_model: String,
    narration_temperature: f32,
}

impl OpenAi {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn narration_model(&self) -> &str {
        &self.narration_model
    }

    pub fn narration_temperature(&self) -> f32 {
        self.narration_temperature
    }
}

#[derive(Debug, Deserialize)]
pub struct Replicate {
    url: String,
    api_token: String,
    model_version: String,
    voice: String,
    speed: f32,
    #[serde(with = "humantime_serde")]
    poll_interval: Duration,
    #[serde(with = "humantime_serde")]
    prediction_timeout: Duration,
}

impl Replicate {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// The version id, i.e. the part after the colon of `owner/model:version`.
    pub fn version_id(&self) -> &str {
        self.model_version.rsplit_once(':').map_or(self.model_version.as_str(), |(_, version)| version)
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn prediction_timeout(&self) -> Duration {
        self.prediction_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Client {
    server_url: String,
    history_directory: String,
    history_capacity: usize,
}

impl Client {
    pub fn server_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    pub fn history_directory(&self) -> &str {
        &self.history_directory
    }

    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    host: "127.0.0.1".to_string(),
                    port: 3000,
                },
                openai: OpenAi {
                    url: "https://openai.url".to_string(),
                    api_key: "openai-key".to_string(),
                    model: "gpt-4o".to_string(),
                    narration_model: "gpt-4o".to_string(),
                    narration_temperature: 0.7,
                },
                replicate: Replicate {
                    url: "https://replicate.url".to_string(),
                    api_token: "replicate-token".to_string(),
                    model_version: "jaaari/kokoro-82m:abc123".to_string(),
                    voice: "bf_isabella".to_string(),
                    speed: 0.9,
                    poll_interval: Duration::from_millis(10),
                    prediction_timeout: Duration::from_secs(2),
                },
                client: Client {
                    server_url: "http://localhost:3000".to_string(),
                    history_directory: ".roadtrip".to_string(),
                    history_capacity: 50,
                },
            },
        }
    }

    pub fn openai_url(mut self, url: String) -> Self {
        self.config.openai.url = url;
        self
    }

    pub fn replicate_url(mut self, url: String) -> Self {
        self.config.replicate.url = url;
        self
    }

    pub fn prediction_timeout(mut self, timeout: Duration) -> Self {
        self.config.replicate.prediction_timeout = timeout;
        self
    }

    pub fn server_url(mut self, url: String) -> Self {
        self.config.client.server_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("jaaari/kokoro-82m:dfdf537b", "dfdf537b")]
    #[case("dfdf537b", "dfdf537b")]
    fn version_id_strips_the_model_name(#[case] model_version: &str, #[case] expected: &str) {
        let mut config = AppConfigBuilder::new().build();
        config.replicate.model_version = model_version.to_string();

        assert_eq!(config.replicate().version_id(), expected);
    }

    #[test]
    fn urls_are_returned_without_a_trailing_slash() {
        let config = AppConfigBuilder::new()
            .openai_url("https://openai.url/v1/".to_string())
            .server_url("http://localhost:3000/".to_string())
            .build();

        assert_eq!(config.openai().url(), "https://openai.url/v1");
        assert_eq!(config.client().server_url(), "http://localhost:3000");
    }

    #[test]
    fn overrides_replace_only_provided_values() {
        let mut config = AppConfigBuilder::new().build();

        config.override_server(None, Some(8080));
        config.override_server_url(Some("http://planner:8080".to_string()));

        assert_eq!(config.server().address(), "127.0.0.1:8080");
        assert_eq!(config.client().server_url(), "http://planner:8080");
    }
}
