use crate::extractor::TripExtractor;
use crate::narration::NarrationPipeline;

/// Immutable per-process state; requests share nothing else.
#[derive(Debug, Clone)]
pub struct AppState {
    pub extractor: TripExtractor,
    pub narration: NarrationPipeline,
}
