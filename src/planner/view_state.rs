use crate::domain::Trip;
use crate::route::MapState;

/// Audio transport as shown by the play bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    pub playing: bool,
    pub volume: f64,
    pub muted: bool,
    pub position: f64,
    pub duration: Option<f64>,
}

impl Default for Transport {
    fn default() -> Self {
        Transport {
            playing: false,
            volume: 1.0,
            muted: false,
            position: 0.0,
            duration: None,
        }
    }
}

impl Transport {
    pub fn effective_volume(&self) -> f64 {
        if self.muted { 0.0 } else { self.volume }
    }
}

/// Page state owned by the planner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub trip_description: String,
    pub trip: Option<Trip>,
    pub map: Option<MapState>,
    pub selected_waypoint: Option<usize>,
    pub sidebar_open: bool,
    pub transport: Transport,
}
