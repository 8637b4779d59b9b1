use super::engine::{MediaEngine, MediaEvent, PlayTicket, SessionId};
use super::state::{AudioSnapshot, PlayerStatus};
use tracing::{debug, warn};

pub const DEFAULT_SKIP_SECONDS: f64 = 10.0;
pub const MIN_PLAYBACK_RATE: f64 = 0.25;
pub const MAX_PLAYBACK_RATE: f64 = 2.0;

const PLAY_FAILED: &str = "Failed to play audio";
const GENERIC_FAULT: &str = "Audio playback error";

/// Callbacks fired by [`AudioPlayer`]. All methods default to no-ops.
pub trait PlayerObserver: Send {
    fn on_time_update(&mut self, _position: f64, _duration: f64) {}
    fn on_ended(&mut self) {}
    fn on_error(&mut self, _message: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Play(PlayTicket),
    Pause,
}

/// One media session at a time over a [`MediaEngine`].
///
/// Control calls record what the caller wants (the *intent*) and forward it
/// to the engine; engine events then move the status. When a play request
/// and a pause cross in flight, the most recent intent is enforced once the
/// engine reports back.
pub struct AudioPlayer<E> {
    engine: E,
    session: SessionId,
    source: Option<String>,
    status: PlayerStatus,
    intent: Intent,
    next_ticket: u64,
    position: f64,
    duration: f64,
    volume: f64,
    volume_before_mute: Option<f64>,
    rate: f64,
    error: Option<String>,
    ended_notified: bool,
    observers: Vec<Box<dyn PlayerObserver>>,
}

impl<E: MediaEngine> AudioPlayer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            session: SessionId::default(),
            source: None,
            status: PlayerStatus::Idle,
            intent: Intent::Pause,
            next_ticket: 0,
            position: 0.0,
            duration: 0.0,
            volume: 1.0,
            volume_before_mute: None,
            rate: 1.0,
            error: None,
            ended_notified: false,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn PlayerObserver>) {
        self.observers.push(observer);
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn playback_rate(&self) -> f64 {
        self.rate
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Tears down the current session and starts loading `src`.
    pub fn set_source(&mut self, src: impl Into<String>) -> SessionId {
        let src = src.into();
        self.engine.unload();
        self.session = SessionId(self.session.0 + 1);
        self.reset_session_state();
        self.status = PlayerStatus::Loading;
        self.engine.load(self.session, &src);
        debug!(session = %self.session, src = %src, "audio source loading");
        self.source = Some(src);
        self.session
    }

    /// Detaches the source and returns to `Idle`.
    pub fn clear_source(&mut self) {
        self.engine.unload();
        self.session = SessionId(self.session.0 + 1);
        self.reset_session_state();
        self.status = PlayerStatus::Idle;
        self.source = None;
    }

    fn reset_session_state(&mut self) {
        self.intent = Intent::Pause;
        self.position = 0.0;
        self.duration = 0.0;
        self.error = None;
        self.ended_notified = false;
    }

    /// Requests playback. While loading the request is held until the
    /// engine reports metadata. Without a usable source nothing happens and
    /// `None` is returned.
    pub fn play(&mut self) -> Option<PlayTicket> {
        if matches!(self.status, PlayerStatus::Idle | PlayerStatus::Error) {
            return None;
        }
        self.next_ticket += 1;
        let ticket = PlayTicket(self.next_ticket);
        self.intent = Intent::Play(ticket);
        self.error = None;
        if self.status.is_loaded() {
            self.engine.play(ticket);
        }
        Some(ticket)
    }

    pub fn pause(&mut self) {
        self.intent = Intent::Pause;
        if self.status.is_loaded() {
            self.engine.pause();
        }
    }

    /// Flips the latest intent, not the last reported status, so two quick
    /// toggles always cancel out.
    pub fn toggle(&mut self) {
        match self.intent {
            Intent::Play(_) => self.pause(),
            Intent::Pause => {
                self.play();
            }
        }
    }

    /// Moves to `seconds`, clamped to `[0, duration]`.
    pub fn seek(&mut self, seconds: f64) {
        if !self.status.is_loaded() || seconds.is_nan() {
            return;
        }
        let target = seconds.clamp(0.0, self.duration.max(0.0));
        self.engine.set_position(target);
        self.position = target;
        if self.status == PlayerStatus::Ended {
            self.status = PlayerStatus::Paused;
        }
    }

    pub fn skip_forward(&mut self, seconds: f64) {
        self.seek(self.position + seconds);
    }

    pub fn skip_backward(&mut self, seconds: f64) {
        self.seek(self.position - seconds);
    }

    /// Clamped to `[0, 1]`; zero reads as muted.
    pub fn set_volume(&mut self, volume: f64) {
        if volume.is_nan() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(volume);
        self.volume = volume;
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_nan() {
            return;
        }
        let rate = rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE);
        self.engine.set_playback_rate(rate);
        self.rate = rate;
    }

    pub fn mute(&mut self) {
        if self.volume > 0.0 {
            self.volume_before_mute = Some(self.volume);
        }
        self.set_volume(0.0);
    }

    /// Restores the volume from before [`mute`](Self::mute), or full volume
    /// when there is nothing audible to go back to.
    pub fn unmute(&mut self) {
        let restore = self
            .volume_before_mute
            .take()
            .filter(|v| *v > 0.0)
            .unwrap_or(1.0);
        self.set_volume(restore);
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    /// Applies an engine event. Events tagged with an older session are
    /// ignored; the return value says whether the event was applied.
    pub fn handle(&mut self, session: SessionId, event: MediaEvent) -> bool {
        if session != self.session || self.status == PlayerStatus::Idle {
            debug!(%session, current = %self.session, ?event, "dropping stale media event");
            return false;
        }
        if self.status == PlayerStatus::Error && !matches!(event, MediaEvent::LoadStarted) {
            return false;
        }

        match event {
            MediaEvent::LoadStarted => {
                self.status = PlayerStatus::Loading;
                self.error = None;
            }
            MediaEvent::MetadataLoaded { duration } => {
                self.duration = sanitize(duration);
                if self.status == PlayerStatus::Loading {
                    self.status = PlayerStatus::Ready;
                    if let Intent::Play(ticket) = self.intent {
                        self.engine.play(ticket);
                    }
                }
            }
            MediaEvent::TimeUpdate { position, duration } => {
                self.position = sanitize(position);
                self.duration = sanitize(duration);
                let (position, duration) = (self.position, self.duration);
                for observer in &mut self.observers {
                    observer.on_time_update(position, duration);
                }
            }
            MediaEvent::Playing => {
                self.status = PlayerStatus::Playing;
                self.ended_notified = false;
                if self.intent == Intent::Pause {
                    self.engine.pause();
                }
            }
            MediaEvent::Paused => {
                if matches!(self.status, PlayerStatus::Playing | PlayerStatus::Ready) {
                    self.status = PlayerStatus::Paused;
                }
            }
            MediaEvent::Ended => {
                self.status = PlayerStatus::Ended;
                self.intent = Intent::Pause;
                self.position = 0.0;
                if !self.ended_notified {
                    self.ended_notified = true;
                    for observer in &mut self.observers {
                        observer.on_ended();
                    }
                }
            }
            MediaEvent::PlayRejected { ticket, reason } => {
                if self.intent != Intent::Play(ticket) {
                    debug!(?ticket, "ignoring rejection of superseded play request");
                    return false;
                }
                warn!(%reason, "play request rejected");
                self.intent = Intent::Pause;
                if self.status == PlayerStatus::Playing {
                    self.status = PlayerStatus::Paused;
                }
                self.report_error(PLAY_FAILED.to_string());
            }
            MediaEvent::Fault { message } => {
                let message = if message.trim().is_empty() {
                    GENERIC_FAULT.to_string()
                } else {
                    message
                };
                warn!(session = %self.session, %message, "media fault");
                self.status = PlayerStatus::Error;
                self.intent = Intent::Pause;
                self.report_error(message);
            }
            MediaEvent::VolumeChanged { volume } => {
                self.volume = sanitize(volume).clamp(0.0, 1.0);
            }
            MediaEvent::RateChanged { rate } => {
                if !rate.is_nan() {
                    self.rate = rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE);
                }
            }
        }
        true
    }

    fn report_error(&mut self, message: String) {
        for observer in &mut self.observers {
            observer.on_error(&message);
        }
        self.error = Some(message);
    }

    pub fn snapshot(&self) -> AudioSnapshot {
        AudioSnapshot {
            status: self.status,
            is_playing: self.is_playing(),
            current_time: self.position,
            duration: self.duration,
            volume: self.volume,
            is_muted: self.is_muted(),
            playback_rate: self.rate,
            is_loading: self.status == PlayerStatus::Loading,
            error: self.error.clone(),
        }
    }
}

// NaN or infinite durations come from streams without a known length.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Load(SessionId, String),
        Play(PlayTicket),
        Pause,
        Position(f64),
        Volume(f64),
        Rate(f64),
        Unload,
    }

    #[derive(Default, Clone)]
    pub struct RecordingEngine {
        pub calls: Arc<Mutex<Vec<Call>>>,
    }

    impl RecordingEngine {
        pub fn take(&self) -> Vec<Call> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    impl MediaEngine for RecordingEngine {
        fn load(&mut self, session: SessionId, src: &str) {
            self.calls.lock().unwrap().push(Call::Load(session, src.into()));
        }
        fn play(&mut self, ticket: PlayTicket) {
            self.calls.lock().unwrap().push(Call::Play(ticket));
        }
        fn pause(&mut self) {
            self.calls.lock().unwrap().push(Call::Pause);
        }
        fn set_position(&mut self, seconds: f64) {
            self.calls.lock().unwrap().push(Call::Position(seconds));
        }
        fn set_volume(&mut self, volume: f64) {
            self.calls.lock().unwrap().push(Call::Volume(volume));
        }
        fn set_playback_rate(&mut self, rate: f64) {
            self.calls.lock().unwrap().push(Call::Rate(rate));
        }
        fn unload(&mut self) {
            self.calls.lock().unwrap().push(Call::Unload);
        }
    }

    /// Player with a loaded 120 second source.
    pub fn ready_player() -> (AudioPlayer<RecordingEngine>, RecordingEngine) {
        let engine = RecordingEngine::default();
        let mut player = AudioPlayer::new(engine.clone());
        let session = player.set_source("https://cdn.example.com/grove.mp3");
        player.handle(session, MediaEvent::LoadStarted);
        player.handle(session, MediaEvent::MetadataLoaded { duration: 120.0 });
        engine.take();
        (player, engine)
    }
}
