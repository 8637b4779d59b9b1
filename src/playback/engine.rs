use std::fmt;

/// Identifies one loaded source. Every `load` gets a fresh id so events
/// still in flight for a replaced source can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionId(pub u64);

/// Tags one `play` request. Only a rejection for the most recent ticket
/// affects player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayTicket(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// The media element the player drives. Calls are fire-and-forget; the
/// outcome comes back later as [`MediaEvent`]s passed to
/// [`AudioPlayer::handle`](super::AudioPlayer::handle).
pub trait MediaEngine: Send {
    fn load(&mut self, session: SessionId, src: &str);
    fn play(&mut self, ticket: PlayTicket);
    fn pause(&mut self);
    fn set_position(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f64);
    fn set_playback_rate(&mut self, rate: f64);
    fn unload(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    LoadStarted,
    MetadataLoaded { duration: f64 },
    TimeUpdate { position: f64, duration: f64 },
    Playing,
    Paused,
    Ended,
    /// The engine refused a play request, e.g. autoplay was blocked.
    PlayRejected { ticket: PlayTicket, reason: String },
    /// Decoding or network failure. The message may be empty.
    Fault { message: String },
    VolumeChanged { volume: f64 },
    RateChanged { rate: f64 },
}
