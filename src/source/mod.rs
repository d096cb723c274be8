//! Data source abstraction for receiving stats snapshots.
//!
//! This module provides a trait-based abstraction for receiving stats
//! payloads from various backends (HTTP endpoint polling, files, in-memory
//! channels).

mod channel;
mod error;
mod file;
mod http;
mod snapshot;

pub use channel::ChannelSource;
pub use error::FetchError;
pub use file::FileSource;
pub use http::{HttpSource, HttpSourceBuilder};
pub use snapshot::{BotStats, StatsSnapshot, SystemStats, TopUser};

use std::fmt::Debug;

/// Trait for receiving stats snapshots from various backends.
///
/// # Example
///
/// ```
/// use botwatch::{FileSource, StatsSource};
///
/// let mut source = FileSource::new("stats.json");
/// if let Some(snapshot) = source.poll() {
///     println!("bot online: {:?}", snapshot.bot_status);
/// }
/// ```
pub trait StatsSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method must not block. When multiple snapshots arrived since the
    /// last poll, implementations return the most recently resolved one.
    fn poll(&mut self) -> Option<StatsSnapshot>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// The error from the most recent failed fetch, if any.
    ///
    /// Cleared by the next successful fetch.
    fn error(&self) -> Option<String>;
}
