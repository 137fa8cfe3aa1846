mod narration_pipeline;
mod prompt;

pub use narration_pipeline::{AUDIO_MPEG, Narration, NarrationError, NarrationPipeline};
pub use prompt::NarrationInput;

#[cfg(test)]
pub use narration_pipeline::tests::{FakeSpeech, FakeSpeechOutput};
