mod audio_session;
#[allow(clippy::module_inception)]
mod planner;
mod planner_api;
mod view_state;

pub use audio_session::{AudioSession, AudioSessionHandle, PlaybackState};
pub use planner::{Planner, PlannerError};
pub use planner_api::{PlannerApi, PlannerApiError};
pub use view_state::{Transport, ViewState};
