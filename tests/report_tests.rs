// Console report rendering tests

use clan_api::models::{
    ClanInfo, ClanSummary, HighestLevelMember, MemberRecord, MemberStats, OnlineStatus,
};
use clan_api::report;

fn member(uid: &str, nickname: &str, real_name: &str) -> MemberRecord {
    MemberRecord {
        uid: uid.into(),
        nickname: nickname.into(),
        level: 42,
        status: OnlineStatus::Online,
        region: "ME".into(),
        banner_url: "https://banners.example.com/banner?uid=1".into(),
        outfit_url: "https://outfits.example.com/outfit?uid=1".into(),
        glory: 300,
        real_name: real_name.into(),
    }
}

fn summary(members: Vec<MemberRecord>) -> ClanSummary {
    let total = members.len();
    ClanSummary {
        clan_info: ClanInfo {
            id: "3082766228".into(),
            name: "NPT ESPORTS".into(),
            region: "ME".into(),
            total_glory: 600,
        },
        member_stats: MemberStats {
            total_members: total,
            online_members: total,
            offline_members: 0,
            average_level: 42,
            highest_level_member: Some(HighestLevelMember {
                nickname: "alpha".into(),
                level: 42,
            }),
        },
        members,
        timestamp: "2026-08-06T12:00:00+00:00".into(),
    }
}

#[test]
fn render_contains_every_summary_field() {
    let out = report::render(&summary(vec![
        member("111", "alpha", ""),
        member("222", "beta", "Bilal"),
    ]));

    assert!(out.contains("NPT ESPORTS"));
    assert!(out.contains("3082766228"));
    assert!(out.contains("Region: ME"));
    assert!(out.contains("Total Glory: 600"));
    assert!(out.contains("Total Members: 2"));
    assert!(out.contains("Online Members: 2"));
    assert!(out.contains("Offline Members: 0"));
    assert!(out.contains("Average Level: 42"));
    assert!(out.contains("Highest Level Member: alpha (Lv. 42)"));
    assert!(out.contains("111"));
    assert!(out.contains("beta"));
    assert!(out.contains("online"));
    assert!(out.contains("Bilal"));
    assert!(out.contains("Last Updated: 2026-08-06T12:00:00+00:00"));
}

#[test]
fn render_hides_real_name_equal_to_nickname() {
    let out = report::render(&summary(vec![member("111", "alpha", "alpha")]));
    // nickname appears in the row and the top-member line; the duplicate
    // real name column stays blank
    let row = out
        .lines()
        .find(|l| l.starts_with("alpha"))
        .expect("member row");
    assert_eq!(row.matches("alpha").count(), 1);
}

#[test]
fn render_omits_top_member_line_when_absent() {
    let mut s = summary(vec![]);
    s.member_stats.highest_level_member = None;
    let out = report::render(&s);
    assert!(!out.contains("Highest Level Member"));
}
