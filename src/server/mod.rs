mod error;
mod generate;
mod generate_audio;
mod router;
mod state;

use crate::app_config::AppConfig;
use crate::extractor::TripExtractor;
use crate::narration::NarrationPipeline;
use crate::openai::OpenAiChat;
use crate::replicate::ReplicateSynthesizer;
use crate::upstream::new_client;
use reqwest::Client;
use std::error::Error;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

pub use generate_audio::GenerateAudioRequest;
pub use router::create_router;
pub use state::AppState;

pub async fn serve(config: &AppConfig) -> Result<(), Box<dyn Error>> {
    let chat = Arc::new(OpenAiChat::new(new_client(config.openai().api_key())?, config.openai().url()));
    let speech = Arc::new(ReplicateSynthesizer::new(
        new_client(config.replicate().api_token())?,
        Client::new(),
        config,
    ));

    let state = AppState {
        extractor: TripExtractor::new(chat.clone(), config.openai().model()),
        narration: NarrationPipeline::new(chat, speech, config.openai().narration_model(), config.openai().narration_temperature()),
    };
    info!("✅  Initialized model clients");

    let address = config.server().address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🔥 {} is listening on http://{}", env!("CARGO_PKG_NAME"), address);

    axum::serve(listener, create_router(state)).with_graceful_shutdown(shutdown_signal()).await?;
    info!("👋 Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
