pub mod domain;
mod speech_synthesizer;

pub use speech_synthesizer::{ReplicateSynthesizer, SpeechOutput, SpeechSynthesizer};
