//! Display formatting and the dashboard render target.
//!
//! This module turns raw stats snapshots into the text the UI shows.
//!
//! ## Submodules
//!
//! - [`format`]: Pure formatting helpers (thousands separators, uptime
//!   decomposition, rank labels)
//! - [`dashboard`]: The [`Dashboard`] render target - per-field display sinks
//!   updated from snapshots
//!
//! ## Data flow
//!
//! ```text
//! StatsSnapshot (raw JSON)
//!        │
//!        ▼
//! Dashboard::apply()   - writes only the sinks whose section is present
//!        │
//!        ▼
//! ui::overview::render - reads the sinks each frame
//! ```

pub mod dashboard;
pub mod format;

pub use dashboard::{Dashboard, GaugeValue, TopUserRow, NO_DELIVERY_DATA};
