//! Events published by the playback subsystem.
//!
//! Consumers subscribe with `broadcast::Sender::subscribe`. Only the fact
//! that something finished matters to the home screen; the id is carried
//! for logging.

use catalog::ItemId;
use tokio::sync::broadcast;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A playable item reached its end
    ItemFinished { item_id: Option<ItemId> },
}

/// Create a playback event channel.
pub fn playback_channel(capacity: usize) -> broadcast::Sender<PlaybackEvent> {
    let (sender, _) = broadcast::channel(capacity);
    sender
}
