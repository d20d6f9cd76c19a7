// Clan-level models: metadata, derived statistics, and the full summary

use serde::{Deserialize, Serialize};

use super::MemberRecord;

/// Clan metadata discovered via member responses; `name` is empty when no
/// member exposed a matching clan block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanInfo {
    pub id: String,
    pub name: String,
    pub region: String,
    pub total_glory: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighestLevelMember {
    pub nickname: String,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStats {
    pub total_members: usize,
    pub online_members: usize,
    pub offline_members: usize,
    pub average_level: u32,
    pub highest_level_member: Option<HighestLevelMember>,
}

/// One complete collection cycle: metadata, derived stats, member records,
/// and the collection timestamp (RFC 3339).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanSummary {
    pub clan_info: ClanInfo,
    pub member_stats: MemberStats,
    pub members: Vec<MemberRecord>,
    pub timestamp: String,
}
