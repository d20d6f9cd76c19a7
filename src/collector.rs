// Roster collection pipeline: batched concurrent fetches, clan discovery,
// and summary aggregation. A member that cannot be fetched is simply
// missing from the output; it never aborts a cycle.

use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::Value;
use tokio::time::Duration;
use tracing::debug;

use crate::config::{AppConfig, ClanConfig};
use crate::models::{
    ClanInfo, ClanSummary, HighestLevelMember, MemberRecord, MemberStats, OnlineStatus,
};
use crate::normalize;
use crate::player_repo::PlayerRepo;

pub struct Collector {
    players: Arc<PlayerRepo>,
    config: AppConfig,
}

impl Collector {
    pub fn new(players: Arc<PlayerRepo>, config: AppConfig) -> Self {
        Self { players, config }
    }

    /// Full details for one member, or None when the fetch failed.
    async fn member_details(&self, uid: &str) -> Option<MemberRecord> {
        let raw = self.players.get_player(uid).await?;
        let now = chrono::Utc::now().timestamp();
        Some(normalize::member_record(
            uid,
            &raw,
            now,
            &self.config.clan,
            &self.config.upstream,
        ))
    }

    /// Fetch every roster member in fixed-size concurrent batches, with a
    /// pause between consecutive batches. Later batches start only after
    /// the earlier batch has fully settled.
    pub async fn collect_members(&self) -> Vec<MemberRecord> {
        let uids = &self.config.clan.members;
        let pause = Duration::from_millis(self.config.upstream.batch_pause_ms);

        let mut members = Vec::with_capacity(uids.len());
        let mut batches = uids.chunks(self.config.upstream.batch_size).peekable();
        while let Some(batch) = batches.next() {
            let results = join_all(batch.iter().map(|uid| self.member_details(uid))).await;
            let fetched = results.into_iter().flatten().collect::<Vec<_>>();
            if fetched.len() < batch.len() {
                debug!(
                    failed = batch.len() - fetched.len(),
                    "batch had unfetchable members"
                );
            }
            members.extend(fetched);
            if batches.peek().is_some() {
                tokio::time::sleep(pause).await;
            }
        }
        members
    }

    /// Discover the clan block by probing members one at a time until one
    /// embeds a matching clan id. None when the roster is exhausted.
    pub async fn resolve_clan(&self) -> Option<Value> {
        for uid in &self.config.clan.members {
            if let Some(raw) = self.players.get_player(uid).await
                && let Some(block) = normalize::clan_block(&raw, &self.config.clan.id)
            {
                return Some(block.clone());
            }
        }
        None
    }

    /// The system's single entry point: clan metadata and member records,
    /// reduced into one summary. Never returns a partial summary.
    pub async fn clan_summary(&self) -> Option<ClanSummary> {
        tracing::info!(
            members = self.config.clan.members.len(),
            "collecting clan info"
        );
        let (clan_block, members) = tokio::join!(self.resolve_clan(), self.collect_members());
        let timestamp = chrono::Local::now().to_rfc3339();
        Some(summarize(
            &self.config.clan,
            clan_block.as_ref(),
            members,
            timestamp,
        ))
    }
}

/// Reduce member records plus the discovered clan block into a summary.
/// Members with level 0 count toward totals but are excluded from the
/// average and the top-member pick.
pub fn summarize(
    clan: &ClanConfig,
    clan_block: Option<&Value>,
    members: Vec<MemberRecord>,
    timestamp: String,
) -> ClanSummary {
    let total_members = members.len();
    let online_members = members
        .iter()
        .filter(|m| m.status == OnlineStatus::Online)
        .count();

    let leveled: Vec<&MemberRecord> = members.iter().filter(|m| m.level > 0).collect();
    let average_level = if leveled.is_empty() {
        0
    } else {
        leveled.iter().map(|m| m.level).sum::<u32>() / leveled.len() as u32
    };
    let highest_level_member = leveled
        .iter()
        .max_by_key(|m| m.level)
        .map(|m| HighestLevelMember {
            nickname: m.nickname.clone(),
            level: m.level,
        });

    let total_glory = members
        .iter()
        .filter(|m| m.glory > 0)
        .map(|m| u64::from(m.glory))
        .sum();

    ClanSummary {
        clan_info: ClanInfo {
            id: clan.id.clone(),
            name: clan_block.map(normalize::clan_name).unwrap_or_default(),
            region: clan.region.clone(),
            total_glory,
        },
        member_stats: MemberStats {
            total_members,
            online_members,
            offline_members: total_members - online_members,
            average_level,
            highest_level_member,
        },
        members,
        timestamp,
    }
}
