// Runtime configuration read from the environment.
//
// Variables
// - TIME_TRACKING_ADDR       listen address, default 0.0.0.0:8080
// - TIME_TRACKING_TOPIC      outbox topic for time entry intents, default time-entries.v1
// - TIME_TRACKING_PROJECTOR  projector name used for the watermark, default time_entry_summary
// - TIME_TRACKING_ADMIN_ID   user granted the admin role at startup, unset by default

use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TOPIC: &str = "time-entries.v1";
pub const DEFAULT_PROJECTOR: &str = "time_entry_summary";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub topic: String,
    pub projector_name: String,
    pub admin_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("TIME_TRACKING_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("TIME_TRACKING_ADDR is not a socket address: {raw_addr}"))?;
        Ok(Self {
            addr,
            topic: lookup("TIME_TRACKING_TOPIC").unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            projector_name: lookup("TIME_TRACKING_PROJECTOR")
                .unwrap_or_else(|| DEFAULT_PROJECTOR.to_string()),
            admin_id: lookup("TIME_TRACKING_ADMIN_ID")
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        })
    }
}
