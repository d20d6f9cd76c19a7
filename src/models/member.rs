// Per-member record models

use serde::{Deserialize, Serialize};

/// A login inside this window counts as online.
pub const ONLINE_WINDOW_SECS: i64 = 3600;

/// Online state derived from the last-login timestamp; serializes to
/// lowercase JSON (e.g. "online").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Online,
    Offline,
}

impl OnlineStatus {
    /// Online iff the last login falls strictly inside the most recent hour.
    pub fn from_last_login(last_login: i64, now: i64) -> Self {
        if last_login > now - ONLINE_WINDOW_SECS {
            OnlineStatus::Online
        } else {
            OnlineStatus::Offline
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OnlineStatus::Online => "online",
            OnlineStatus::Offline => "offline",
        }
    }
}

/// Canonical member record; either fully populated from a fetched payload or
/// absent entirely, never partial. Field names match the legacy JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub uid: String,
    pub nickname: String,
    pub level: u32,
    pub status: OnlineStatus,
    pub region: String,
    pub banner_url: String,
    pub outfit_url: String,
    pub glory: u32,
    #[serde(rename = "realName")]
    pub real_name: String,
}
