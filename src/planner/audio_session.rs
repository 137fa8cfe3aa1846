use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
}

/// One narration's audio and its playback position.
#[derive(Debug)]
pub struct AudioSession {
    id: Uuid,
    audio: Vec<u8>,
    state: PlaybackState,
    volume: f64,
    position: f64,
}

impl AudioSession {
    pub fn new(audio: Vec<u8>, volume: f64) -> Self {
        AudioSession {
            id: Uuid::new_v4(),
            audio,
            state: PlaybackState::Paused,
            volume,
            position: 0.0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// A stopped session stays stopped; it has been released.
    pub fn play(&mut self) {
        if self.state != PlaybackState::Stopped {
            self.state = PlaybackState::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.position = 0.0;
    }

    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    pub fn seek(&mut self, position: f64) {
        self.position = position.max(0.0);
    }
}

/// Holds at most one session. Acquiring a new session stops and releases the previous one first.
#[derive(Debug, Default)]
pub struct AudioSessionHandle {
    current: Option<AudioSession>,
}

impl AudioSessionHandle {
    pub fn current(&self) -> Option<&AudioSession> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut AudioSession> {
        self.current.as_mut()
    }

    /// Returns the acquired session and the released one, already stopped.
    pub fn replace(&mut self, session: AudioSession) -> (&mut AudioSession, Option<AudioSession>) {
        let released = self.release();
        (self.current.insert(session), released)
    }

    pub fn release(&mut self) -> Option<AudioSession> {
        self.current.take().map(|mut session| {
            session.stop();
            session
        })
    }
}
