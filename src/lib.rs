// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # botwatch
//!
//! A live operations TUI and library for a delivery bot's stats endpoint.
//!
//! This crate polls a `/api/stats` endpoint on a fixed cadence and renders
//! user counts, delivery counts, earnings, a ranked top-users list, system
//! resource gauges, uptime, and an online/offline badge in the terminal.
//! Fetch failures are logged and otherwise silent: the dashboard keeps
//! showing the last known values and the next tick tries again.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(dashboard)    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | FileSource | ChannelSource    │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and the poll-and-render cycle
//! - **[`source`]**: Data source abstraction ([`StatsSource`] trait) with
//!   implementations for HTTP endpoint polling, file polling, and
//!   channel-based input
//! - **[`data`]**: Formatting and the [`Dashboard`] render target - a set of
//!   per-field display sinks that keep their previous values when a payload
//!   section is missing or a fetch fails
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll the bot's stats endpoint every 5 seconds
//! botwatch --endpoint http://localhost:5000/api/stats
//!
//! # Watch a dumped payload file instead
//! botwatch --file stats.json
//! ```
//!
//! ### As a library with an HTTP source
//!
//! ```no_run
//! use botwatch::{App, HttpSource};
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let source = HttpSource::builder()
//!     .endpoint("http://localhost:5000/api/stats")
//!     .interval(Duration::from_secs(5))
//!     .start();
//! let app = App::new(Box::new(source), "₽");
//! # });
//! ```
//!
//! ### As a library with a channel source (embedding)
//!
//! ```
//! use botwatch::{App, ChannelSource};
//!
//! let (tx, source) = ChannelSource::create("embedded");
//! let app = App::new(Box::new(source), "₽");
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{Dashboard, GaugeValue, TopUserRow};
pub use source::{
    BotStats, ChannelSource, FetchError, FileSource, HttpSource, HttpSourceBuilder, StatsSnapshot,
    StatsSource, SystemStats, TopUser,
};
