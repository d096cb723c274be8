//! Application state and the poll-and-render cycle.

use std::time::Instant;

use anyhow::Result;

use crate::data::Dashboard;
use crate::source::StatsSource;
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn StatsSource>,
    pub dashboard: Dashboard,
    pub last_updated: Option<Instant>,
    pub load_error: Option<String>,

    /// Suffix appended to the earnings counter.
    pub currency: String,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn StatsSource>, currency: impl Into<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            dashboard: Dashboard::new(),
            last_updated: None,
            load_error: None,
            currency: currency.into(),
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source and render any new snapshot into the dashboard.
    ///
    /// Returns Ok(true) if a snapshot was applied, Ok(false) if there was
    /// no new data. A fetch error is surfaced via `load_error` and leaves
    /// every dashboard sink untouched; the loop continues on the next tick
    /// regardless.
    pub fn reload_data(&mut self) -> Result<bool> {
        if let Some(snapshot) = self.source.poll() {
            self.dashboard.apply(&snapshot, &self.currency);
            self.last_updated = Some(Instant::now());
            self.load_error = None;
            return Ok(true);
        }

        self.load_error = self.source.error();
        Ok(false)
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Export the current dashboard state to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let json = serde_json::to_string_pretty(&self.dashboard)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}
