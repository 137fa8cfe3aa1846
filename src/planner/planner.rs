use crate::domain::Waypoint;
use crate::history::{HistoryEntry, HistoryStore};
use crate::planner::audio_session::{AudioSession, AudioSessionHandle};
use crate::planner::planner_api::{PlannerApi, PlannerApiError};
use crate::planner::view_state::ViewState;
use crate::route::{MapState, normalize};
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Client-side application: owns the view state and the active audio session.
///
/// Requests take `&mut self`, so a planner never has two requests outstanding.
/// A failed request leaves the trip, the map and the history as they were.
#[derive(Debug)]
pub struct Planner {
    api: PlannerApi,
    history: HistoryStore,
    state: ViewState,
    audio: AudioSessionHandle,
}

impl Planner {
    pub fn new(api: PlannerApi, history: HistoryStore) -> Self {
        Planner {
            api,
            history,
            state: ViewState::default(),
            audio: AudioSessionHandle::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn audio_session(&self) -> Option<&AudioSession> {
        self.audio.current()
    }

    #[instrument(skip_all)]
    pub async fn generate_route(&mut self, prompt: &str) -> Result<&MapState, PlannerError> {
        if prompt.trim().is_empty() {
            return Err(PlannerError::EmptyPrompt);
        }

        info!("🗺️ Generating route...");
        let raw = self.api.generate_route(prompt).await.inspect_err(|e| warn!("⚠️ Unable to generate route: {}", e))?;
        let trip = normalize(raw);

        if let Err(e) = self.history.record(HistoryEntry::new(prompt, trip.clone(), Utc::now())).await {
            warn!("⚠️ Unable to record the prompt in the history: {}", e);
        }

        let map = MapState::from_trip(&trip);
        info!("🗺️ Generating route... OK, {} point(s)", map.route.points().len());

        self.state.trip_description = prompt.to_string();
        self.state.trip = Some(trip);
        self.state.selected_waypoint = None;
        Ok(self.state.map.insert(map))
    }

    /// Replaces the current audio session. On failure the trip stays displayed and the transport goes back to idle.
    #[instrument(skip_all)]
    pub async fn generate_narration(&mut self) -> Result<&AudioSession, PlannerError> {
        let trip = self.state.trip.as_ref().ok_or(PlannerError::NoTrip)?;

        info!("🎧 Generating narration...");
        let audio = match self.api.generate_audio(trip, &self.state.trip_description).await {
            Ok(audio) => audio,
            Err(e) => {
                warn!("⚠️ Unable to generate narration: {}", e);
                if let Some(session) = self.audio.current_mut() {
                    session.pause();
                }
                self.state.transport.playing = false;
                return Err(e.into());
            }
        };
        info!("🎧 Generating narration... OK, {} bytes", audio.len());

        let mut session = AudioSession::new(audio, self.state.transport.effective_volume());
        session.play();
        debug!(session_id = %session.id(), volume = session.volume(), "🎧 Playing narration");
        let transport = &mut self.state.transport;
        transport.playing = true;
        transport.position = 0.0;
        transport.duration = None;

        let (session, released) = self.audio.replace(session);
        if let Some(released) = released {
            debug!(session_id = %released.id(), "🎧 Released previous narration");
        }
        Ok(&*session)
    }

    /// Starts a narration when none exists yet, otherwise toggles playback.
    pub async fn toggle_play(&mut self) -> Result<(), PlannerError> {
        let playing = self.state.transport.playing;
        let Some(session) = self.audio.current_mut() else {
            if !playing {
                self.generate_narration().await?;
            }
            return Ok(());
        };

        if playing {
            session.pause();
        } else {
            session.play();
        }
        self.state.transport.playing = !playing;
        Ok(())
    }

    pub fn set_volume(&mut self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        let transport = &mut self.state.transport;
        transport.volume = volume;
        transport.muted = volume == 0.0;

        if let Some(session) = self.audio.current_mut() {
            session.set_volume(volume);
        }
    }

    pub fn toggle_mute(&mut self) {
        let Some(session) = self.audio.current_mut() else {
            return;
        };

        let transport = &mut self.state.transport;
        transport.muted = !transport.muted;
        session.set_volume(transport.effective_volume());
    }

    /// Seeks to a fraction of the duration, once the duration is known.
    pub fn seek(&mut self, fraction: f64) {
        let Some(duration) = self.state.transport.duration.filter(|duration| *duration > 0.0) else {
            return;
        };
        let Some(session) = self.audio.current_mut() else {
            return;
        };

        let position = fraction.clamp(0.0, 1.0) * duration;
        session.seek(position);
        self.state.transport.position = position;
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.state.transport.duration = Some(duration);
    }

    pub fn on_time_update(&mut self, position: f64) {
        self.state.transport.position = position;
    }

    pub fn on_ended(&mut self) {
        self.audio.release();
        self.state.transport.playing = false;
    }

    pub fn select_waypoint(&mut self, index: usize) -> Option<&Waypoint> {
        let waypoint = self.state.trip.as_ref()?.waypoints.get(index)?;
        if waypoint.coordinates.is_none() {
            return None;
        }

        self.state.selected_waypoint = Some(index);
        Some(waypoint)
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_waypoint = None;
    }

    /// The sidebar can only be opened once there is a trip to show.
    pub fn toggle_sidebar(&mut self) {
        if self.state.trip.is_some() {
            self.state.sidebar_open = !self.state.sidebar_open;
        }
    }
}

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("describe the trip first")]
    EmptyPrompt,
    #[error("generate a route first")]
    NoTrip,
    #[error(transparent)]
    Api(#[from] PlannerApiError),
}
