// Upstream payload normalization (pure, no I/O)
//
// The player-info API answers in one of two shapes: top-level
// `AccountInfo`/`GuildInfo` keys, or a nested `player_info` object with
// `basicInfo`/`clanBasicInfo`. Both collapse into MemberRecord here;
// malformed fields degrade to defaults and never fail the record.

use serde_json::Value;

use crate::config::{ClanConfig, UpstreamConfig};
use crate::models::{MemberRecord, OnlineStatus};

/// Candidate paths to the account-info block, tried in order; first hit wins.
const ACCOUNT_INFO_PATHS: &[&[&str]] = &[
    &["AccountInfo", "basicInfo"],
    &["player_info", "basicInfo"],
    &["player_info"],
];

/// Candidate paths to the embedded clan block, one per response variant.
const CLAN_INFO_PATHS: &[&[&str]] = &[&["GuildInfo"], &["player_info", "clanBasicInfo"]];

/// Expand a `{uid}`/`{region}` URL template.
pub fn fill_url(template: &str, uid: &str, region: &str) -> String {
    template.replace("{uid}", uid).replace("{region}", region)
}

/// Walk `path` into `raw`, yielding the value only if it is an object.
fn lookup<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = raw;
    for key in path {
        cur = cur.get(key)?;
    }
    cur.is_object().then_some(cur)
}

/// The account-info block, or `Null` when no candidate path matches
/// (every field lookup then falls back to its default).
fn account_info(raw: &Value) -> &Value {
    static NULL: Value = Value::Null;
    ACCOUNT_INFO_PATHS
        .iter()
        .find_map(|path| lookup(raw, path))
        .unwrap_or(&NULL)
}

/// Last-login seconds: integer as-is, numeric string parsed (0 on parse
/// failure), float truncated toward zero, any other type 0.
fn last_login_secs(v: Option<&Value>) -> i64 {
    match v {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

fn str_field(block: &Value, key: &str) -> String {
    block
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn uint_field(block: &Value, key: &str) -> u32 {
    block
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Map one raw upstream payload to a canonical member record.
///
/// The record is always produced: uid, region, and both derived URLs are
/// populated even when the account-info block is missing entirely.
pub fn member_record(
    uid: &str,
    raw: &Value,
    now: i64,
    clan: &ClanConfig,
    upstream: &UpstreamConfig,
) -> MemberRecord {
    let block = account_info(raw);
    let last_login = last_login_secs(block.get("lastLoginAt"));

    let glory = block
        .get("glory")
        .and_then(Value::as_u64)
        .or_else(|| block.get("honorScore").and_then(Value::as_u64))
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0);

    MemberRecord {
        uid: uid.to_string(),
        nickname: str_field(block, "nickname"),
        level: uint_field(block, "level"),
        status: OnlineStatus::from_last_login(last_login, now),
        region: block
            .get("region")
            .and_then(Value::as_str)
            .unwrap_or(&clan.region)
            .to_string(),
        banner_url: fill_url(&upstream.banner_url, uid, &clan.region),
        outfit_url: fill_url(&upstream.outfit_url, uid, &clan.region),
        glory,
        real_name: str_field(block, "realName"),
    }
}

/// The embedded clan block whose `clanId` matches, checking both response
/// variants. `clanId` may arrive as a JSON string or number.
pub fn clan_block<'a>(raw: &'a Value, clan_id: &str) -> Option<&'a Value> {
    CLAN_INFO_PATHS
        .iter()
        .filter_map(|path| lookup(raw, path))
        .find(|block| id_matches(block.get("clanId"), clan_id))
}

fn id_matches(v: Option<&Value>, clan_id: &str) -> bool {
    match v {
        Some(Value::String(s)) => s == clan_id,
        Some(Value::Number(n)) => n.to_string() == clan_id,
        _ => false,
    }
}

/// Clan display name from a resolved block: `clanName`, else `name`, else "".
pub fn clan_name(block: &Value) -> String {
    block
        .get("clanName")
        .and_then(Value::as_str)
        .or_else(|| block.get("name").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}
