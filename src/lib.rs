//! # Draft Pulse
//!
//! Fantasy draft league analytics: fetches pre-aggregated league
//! statistics from an upstream backend and derives the series the
//! dashboard charts render.
//!
//! ## Architecture
//!
//! - **models**: Upstream record types and derived series shapes
//! - **calculate**: Pure metric transforms (rankings, margins, deltas, shares)
//! - **palette**: Team colour assignment and shade ramps
//! - **fetch**: Typed client for the upstream aggregation API
//! - **api**: REST endpoints serving chart-ready series
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod fetch;
pub mod models;
pub mod palette;

pub use models::*;

use std::time::Duration;

/// Parse a human-friendly duration string (e.g., "6h", "30m", "90s").
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('h') {
        (n, 3600)
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        // Default to seconds
        (s, 1)
    };

    let num: u64 = num_str.parse().ok()?;
    Some(Duration::from_secs(num * multiplier))
}
