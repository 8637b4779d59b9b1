use super::engine::MediaEngine;
use super::player::AudioPlayer;
use super::progress::{ProgressSync, ProgressUpdate};
use super::state::{AudioSnapshot, PlayerStatus};
use crate::domain::story::Story;
use thiserror::Error;
use tokio::sync::{mpsc, watch};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("story {0} has no narration audio")]
    NoAudio(String),
}

/// The listening session of one user: which story is on air, whether the
/// mini player is shown, and the player driving the audio.
pub struct ListeningContext<E> {
    player: AudioPlayer<E>,
    current: Option<Story>,
    visible: bool,
    now_playing: watch::Sender<Option<String>>,
}

impl<E: MediaEngine> ListeningContext<E> {
    pub fn new(engine: E) -> Self {
        let (now_playing, _) = watch::channel(None);
        Self {
            player: AudioPlayer::new(engine),
            current: None,
            visible: false,
            now_playing,
        }
    }

    /// Feeds progress for the current story into `tx`.
    pub fn track_progress(&mut self, tx: mpsc::UnboundedSender<ProgressUpdate>) {
        let sync = ProgressSync::new(self.now_playing.subscribe(), tx);
        self.player.subscribe(Box::new(sync));
    }

    pub fn player(&self) -> &AudioPlayer<E> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut AudioPlayer<E> {
        &mut self.player
    }

    pub fn current_story(&self) -> Option<&Story> {
        self.current.as_ref()
    }

    pub fn is_player_visible(&self) -> bool {
        self.visible
    }

    /// Puts `story` on air and starts it. Replaying the current story
    /// resumes it instead of reloading, unless its audio faulted.
    pub fn play_story(&mut self, story: Story) -> Result<(), PlaybackError> {
        let same = self
            .current
            .as_ref()
            .is_some_and(|current| current.id == story.id);
        let faulted = matches!(self.player.status(), PlayerStatus::Error);
        if same && !faulted && self.player.source().is_some() {
            self.visible = true;
            self.player.play();
            return Ok(());
        }

        let src = story
            .audio
            .as_ref()
            .map(|audio| audio.full_narration.clone())
            .ok_or_else(|| PlaybackError::NoAudio(story.id.to_string()))?;

        self.now_playing.send_replace(Some(story.id.to_string()));
        self.player.set_source(src);
        self.player.play();
        self.current = Some(story);
        self.visible = true;
        Ok(())
    }

    pub fn pause_story(&mut self) {
        self.player.pause();
    }

    pub fn toggle_playback(&mut self) {
        self.player.toggle();
    }

    /// Hiding the player also pauses it.
    pub fn set_player_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.player.pause();
        }
    }

    pub fn snapshot(&self) -> AudioSnapshot {
        self.player.snapshot()
    }
}
