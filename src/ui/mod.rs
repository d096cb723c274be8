//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`overview`]: The dashboard view (counter cards, top users, gauges)
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Dashboard (overview::render)         │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    common::render_help overlays on top
//! ```

pub mod common;
pub mod overview;
pub mod theme;

pub use theme::Theme;
