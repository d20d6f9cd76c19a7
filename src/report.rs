// Plain-text clan report for the console cycle

use crate::models::ClanSummary;

/// Printed instead of a report when a cycle yields no summary.
pub const FETCH_FAILED_MESSAGE: &str = "Could not retrieve clan information";

/// Render a summary as a fixed-width console report.
pub fn render(summary: &ClanSummary) -> String {
    let clan = &summary.clan_info;
    let stats = &summary.member_stats;
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(60)));
    out.push_str(&format!("{:^60}\n", "CLAN INFORMATION"));
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!("Clan Name: '{}'\n", clan.name));
    out.push_str(&format!("Clan ID: {}\n", clan.id));
    out.push_str(&format!("Region: {}\n", clan.region));
    out.push_str(&format!("Total Glory: {}\n", clan.total_glory));
    out.push_str(&format!("{}\n", "-".repeat(60)));
    out.push_str(&format!("Total Members: {}\n", stats.total_members));
    out.push_str(&format!("Online Members: {}\n", stats.online_members));
    out.push_str(&format!("Offline Members: {}\n", stats.offline_members));
    out.push_str(&format!("Average Level: {}\n", stats.average_level));
    if let Some(top) = &stats.highest_level_member {
        out.push_str(&format!(
            "Highest Level Member: {} (Lv. {})\n",
            top.nickname, top.level
        ));
    }
    out.push_str(&format!("{}\n", "=".repeat(60)));

    out.push_str("\nMEMBER DETAILS:\n");
    out.push_str(&format!("{}\n", "-".repeat(100)));
    out.push_str(&format!(
        "{:<15} {:<12} {:<8} {:<10} {:<8} {:<15}\n",
        "Nickname", "UID", "Level", "Status", "Glory", "Real Name"
    ));
    out.push_str(&format!("{}\n", "-".repeat(100)));

    for member in &summary.members {
        // real name only when it adds information over the nickname
        let real_name = if member.real_name.is_empty() || member.real_name == member.nickname {
            ""
        } else {
            member.real_name.as_str()
        };
        out.push_str(&format!(
            "{:<15} {:<12} {:<8} {:<10} {:<8} {:<15}\n",
            member.nickname,
            member.uid,
            member.level,
            member.status.as_str(),
            member.glory,
            real_name
        ));
    }

    out.push_str(&format!("{}\n", "-".repeat(100)));
    out.push_str(&format!("Last Updated: {}\n", summary.timestamp));
    out
}
