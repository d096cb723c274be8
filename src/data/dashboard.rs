//! The dashboard render target.
//!
//! [`Dashboard`] is a set of per-field display sinks: each sink holds the
//! last text (or value) rendered for one display target. Applying a snapshot
//! writes only the sinks whose payload section is present, so a failed or
//! partial poll leaves every other sink showing its previous value. That is
//! the whole degraded-state policy: stale data, no error banners.

use serde::Serialize;

use super::format::{format_amount, format_thousands, format_uptime, rank_label};
use crate::source::StatsSnapshot;

/// Placeholder row rendered when the top-users list is present but empty.
pub const NO_DELIVERY_DATA: &str = "No delivery data yet";

/// One rendered row of the top-users list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopUserRow {
    /// Medal glyph for ranks 0-2, "{rank+1}." beyond that.
    pub rank: String,
    pub username: String,
    /// Thousands-separated delivery count.
    pub deliveries: String,
}

/// A gauge sink: clamped fill percentage plus its text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeValue {
    /// Fill percentage, clamped to [0, 100].
    pub percent: f64,
    /// Text shown on the gauge, e.g. "61.0%".
    pub label: String,
}

impl GaugeValue {
    fn from_percent(raw: f64) -> Self {
        let percent = raw.clamp(0.0, 100.0);
        Self {
            percent,
            label: format!("{:.1}%", percent),
        }
    }
}

/// The fixed set of display sinks the render cycle writes to.
///
/// Every sink starts out `None` ("no data yet") and afterwards always holds
/// the most recently rendered value. A snapshot is applied exactly once and
/// nothing from it is cached anywhere but these sinks.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dashboard {
    pub users: Option<String>,
    pub deliveries: Option<String>,
    pub earnings: Option<String>,
    pub buffs: Option<String>,
    pub top_users: Option<Vec<TopUserRow>>,
    pub cpu: Option<GaugeValue>,
    pub memory: Option<GaugeValue>,
    pub disk: Option<GaugeValue>,
    pub uptime: Option<String>,
    pub online: Option<bool>,
}

impl Dashboard {
    /// Create an empty dashboard with every sink unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a snapshot into the sinks.
    ///
    /// Only sinks whose payload section is present are written; missing
    /// sections are silently skipped and their sinks keep whatever they
    /// showed before.
    pub fn apply(&mut self, snapshot: &StatsSnapshot, currency: &str) {
        if let Some(ref bot) = snapshot.bot {
            self.users = Some(format_thousands(bot.total_users));
            self.deliveries = Some(format_thousands(bot.total_deliveries));
            self.earnings = Some(format!("{} {}", format_amount(bot.total_earnings), currency));
            self.buffs = Some(format_thousands(bot.active_buffs));
        }

        if let Some(ref top) = snapshot.top_users {
            let rows = if top.is_empty() {
                vec![TopUserRow {
                    rank: String::new(),
                    username: NO_DELIVERY_DATA.to_string(),
                    deliveries: String::new(),
                }]
            } else {
                top.iter()
                    .enumerate()
                    .map(|(i, user)| TopUserRow {
                        rank: rank_label(i),
                        username: user.username.clone(),
                        deliveries: format_thousands(user.deliveries),
                    })
                    .collect()
            };
            self.top_users = Some(rows);
        }

        if let Some(ref system) = snapshot.system {
            self.cpu = Some(GaugeValue::from_percent(system.cpu));
            self.memory = Some(GaugeValue::from_percent(system.memory));
            self.disk = Some(GaugeValue::from_percent(system.disk));
            self.uptime = Some(format_uptime(system.uptime));
        }

        if let Some(status) = snapshot.bot_status {
            self.online = Some(status);
        }
    }
}
