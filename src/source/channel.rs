//! Channel-based data source.
//!
//! Receives stats snapshots via a tokio watch channel. This is useful for
//! embedding the dashboard in a process that produces its own stats, and
//! for driving the app in tests without any I/O.

use tokio::sync::watch;

use super::{StatsSnapshot, StatsSource};

/// A data source that receives stats snapshots via a channel.
///
/// The producer sends snapshots through the watch channel and this source
/// provides the latest one to the TUI. Intermediate values that were
/// overwritten before a poll are never observed, which matches the
/// last-resolved-wins display policy.
///
/// # Example
///
/// ```
/// use botwatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("embedded");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<StatsSnapshot>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source from the receiving end of a watch channel.
    pub fn new(receiver: watch::Receiver<StatsSnapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for pushing snapshots to a ChannelSource.
    pub fn create(source_description: &str) -> (watch::Sender<StatsSnapshot>, Self) {
        let (tx, rx) = watch::channel(StatsSnapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl StatsSource for ChannelSource {
    fn poll(&mut self) -> Option<StatsSnapshot> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            let snapshot = self.receiver.borrow_and_update().clone();
            Some(snapshot)
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<String> {
        None
    }
}
