mod prediction;

pub use prediction::{Prediction, PredictionRequest, PredictionStatus, SpeechInput};
