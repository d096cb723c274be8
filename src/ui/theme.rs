//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and titles.
    pub highlight: Color,
    /// Color for the online badge and low gauge levels.
    pub ok: Color,
    /// Color for elevated gauge levels.
    pub warning: Color,
    /// Color for the offline badge and saturated gauge levels.
    pub critical: Color,
    /// Color for values that have no data yet.
    pub dim: Color,
    /// Style for card titles and section headers.
    pub header: Style,
    /// Style for the big counter values.
    pub value: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            ok: Color::Green,
            warning: Color::Yellow,
            critical: Color::Red,
            dim: Color::DarkGray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            value: Style::default().add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            ok: Color::Green,
            warning: Color::Yellow,
            critical: Color::Red,
            dim: Color::Gray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            value: Style::default().add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Style for the online/offline badge.
    pub fn status_style(&self, online: bool) -> Style {
        if online {
            Style::default().fg(self.ok).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
        }
    }

    /// Color for a gauge fill at the given (clamped) percentage.
    ///
    /// Display-only severity coloring; nothing alerts on these levels.
    pub fn gauge_color(&self, percent: f64) -> Color {
        if percent >= 95.0 {
            self.critical
        } else if percent >= 80.0 {
            self.warning
        } else {
            self.ok
        }
    }
}
