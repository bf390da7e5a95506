use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Components {
    pub database: String,
    pub api: String,
    pub model: String,
}

/// Snapshot served by the `resource://system/status` resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    #[serde(rename = "status")]
    pub overall: String,
    pub components: Components,
    #[serde(rename = "lastUpdated")]
    pub timestamp: String,
}

impl SystemStatus {
    pub fn current() -> Self {
        Self::at(&Local::now())
    }

    pub fn at<Tz: TimeZone>(time: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            overall: "normal".to_string(),
            components: Components {
                database: "running".to_string(),
                api: "running".to_string(),
                model: "running".to_string(),
            },
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
