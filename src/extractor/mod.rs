mod prompt;
mod trip_extractor;

pub use trip_extractor::{ExtractionError, TripExtractor};

#[cfg(test)]
pub use trip_extractor::tests::FakeChat;
