//! Audio playback control for a single media resource, plus the listening
//! context that ties the player to the story currently on air.

mod context;
mod engine;
mod player;
mod progress;
mod state;

pub use context::{ListeningContext, PlaybackError};
pub use engine::{MediaEngine, MediaEvent, PlayTicket, SessionId};
pub use player::{
    AudioPlayer, DEFAULT_SKIP_SECONDS, MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE, PlayerObserver,
};
pub use progress::{ProgressSync, ProgressUpdate, spawn_progress_writer};
pub use state::{AudioSnapshot, PlayerStatus};
