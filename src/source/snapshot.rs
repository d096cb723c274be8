//! Shared types for stats snapshots.
//!
//! These types match the JSON payload served by the bot's `/api/stats`
//! endpoint. They are the common data format between the stats producer
//! and this dashboard consumer.
//!
//! The canonical schema keeps bot counters under `bot` and machine stats
//! under `system`:
//!
//! ```json
//! {
//!   "bot": { "total_users": 1200, "total_deliveries": 45000,
//!            "total_earnings": 980000, "active_buffs": 37 },
//!   "system": { "cpu": 12.5, "memory": 61.0, "disk": 44.3, "uptime": 93784 },
//!   "top_users": [ { "username": "ivan", "deliveries": 812 } ],
//!   "bot_status": true
//! }
//! ```
//!
//! Every top-level section is optional; a consumer updates only the display
//! fields whose section is present.

use serde::{Deserialize, Serialize};

/// One fetched stats payload.
///
/// A snapshot is valid only for the render cycle that consumed it: it is
/// applied to the [`Dashboard`](crate::data::Dashboard) exactly once and
/// then dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Bot-level counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotStats>,

    /// Host machine resource usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemStats>,

    /// Top users ranked descending by deliveries. The sequence order is the
    /// rank order; the consumer does not re-sort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_users: Option<Vec<TopUser>>,

    /// Whether the bot process is online.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_status: Option<bool>,
}

/// Aggregate bot counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotStats {
    pub total_users: u64,
    pub total_deliveries: u64,
    /// Summed earnings. An amount, not a count: backends report fractional
    /// totals, so this stays a float.
    pub total_earnings: f64,
    pub active_buffs: u64,
}

/// Host resource usage. Percentages are nominally 0-100 but are not
/// validated here; the render target clamps before display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStats {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
    /// Host uptime in whole seconds.
    pub uptime: u64,
}

/// One entry in the ranked top-users list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopUser {
    pub username: String,
    pub deliveries: u64,
}
