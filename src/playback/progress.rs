use super::player::PlayerObserver;
use crate::application::commands::library::{LibraryCommandService, RecordProgressCommand};
use crate::domain::library::{ProgressPercentage, UserId};
use crate::infrastructure::debounce::Debouncer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub story_id: String,
    pub percentage: f64,
    pub position: f64,
}

/// Turns player time updates into reading-progress updates for whichever
/// story is currently on air.
pub struct ProgressSync {
    story: watch::Receiver<Option<String>>,
    tx: mpsc::UnboundedSender<ProgressUpdate>,
    last_duration: f64,
}

impl ProgressSync {
    pub fn new(
        story: watch::Receiver<Option<String>>,
        tx: mpsc::UnboundedSender<ProgressUpdate>,
    ) -> Self {
        Self {
            story,
            tx,
            last_duration: 0.0,
        }
    }

    fn send(&self, percentage: f64, position: f64) {
        let Some(story_id) = self.story.borrow().clone() else {
            return;
        };
        // receiver gone means the writer shut down; nothing left to do
        let _ = self.tx.send(ProgressUpdate {
            story_id,
            percentage,
            position,
        });
    }
}

impl PlayerObserver for ProgressSync {
    fn on_time_update(&mut self, position: f64, duration: f64) {
        if duration <= 0.0 {
            return;
        }
        self.last_duration = duration;
        self.send(ProgressPercentage::from_position(position, duration).get(), position);
    }

    fn on_ended(&mut self) {
        self.send(100.0, self.last_duration);
    }
}

/// Persists the last progress update of every burst after `delay` of quiet.
pub fn spawn_progress_writer(
    commands: Arc<LibraryCommandService>,
    user_id: UserId,
    delay: Duration,
) -> Debouncer<ProgressUpdate> {
    Debouncer::spawn(delay, move |update: ProgressUpdate| {
        let commands = Arc::clone(&commands);
        async move {
            let command = RecordProgressCommand {
                user_id: Some(user_id.to_string()),
                story_id: Some(update.story_id.clone()),
                progress_percentage: Some(update.percentage),
                last_position: Some(update.position),
            };
            if let Err(err) = commands.record_progress(command).await {
                warn!(story_id = %update.story_id, error = %err, "failed to save progress");
            }
        }
    })
}
