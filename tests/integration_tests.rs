// Integration tests: HTTP endpoints backed by a mock upstream

use std::sync::Arc;

use axum_test::TestServer;
use clan_api::collector::Collector;
use clan_api::config::AppConfig;
use clan_api::player_repo::PlayerRepo;
use clan_api::routes;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base: &str, members: &[&str]) -> AppConfig {
    let members_toml = members
        .iter()
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ");
    AppConfig::load_from_str(&format!(
        r#"
[server]
port = 8081
host = "127.0.0.1"

[upstream]
player_info_url = "{base}/player-info?uid={{uid}}&region={{region}}"
banner_url = "{base}/banner?uid={{uid}}&region={{region}}"
outfit_url = "{base}/outfit?uid={{uid}}&region={{region}}"
request_timeout_secs = 5
max_retries = 1
batch_size = 3
batch_pause_ms = 10

[clan]
id = "777"
region = "ME"
members = [{members_toml}]

[monitoring]
refresh_interval_secs = 300
"#
    ))
    .expect("test config")
}

fn test_app(config: AppConfig) -> axum::Router {
    let repo = Arc::new(PlayerRepo::new(&config.upstream, &config.clan.region).unwrap());
    routes::app(Arc::new(Collector::new(repo, config)))
}

#[tokio::test]
async fn test_root_endpoint() {
    let upstream = MockServer::start().await;
    let server = TestServer::new(test_app(test_config(&upstream.uri(), &[])));

    let response = server.get("/").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let upstream = MockServer::start().await;
    let server = TestServer::new(test_app(test_config(&upstream.uri(), &[])));

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ok"));
    assert_eq!(
        body.get("service").and_then(|v| v.as_str()),
        Some("clan-api")
    );
    assert!(body.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_clan_data_returns_full_summary() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player-info"))
        .and(query_param("uid", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AccountInfo": { "basicInfo": { "nickname": "one", "level": 50, "glory": 90 } },
            "GuildInfo": { "clanId": "777", "clanName": "NPT ESPORTS" }
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/player-info"))
        .and(query_param("uid", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "player_info": { "basicInfo": { "nickname": "two", "level": 30 } }
        })))
        .mount(&upstream)
        .await;

    let server = TestServer::new(test_app(test_config(&upstream.uri(), &["1", "2"])));
    let response = server.get("/api/clan-data").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["clan_info"]["id"], "777");
    assert_eq!(body["clan_info"]["name"], "NPT ESPORTS");
    assert_eq!(body["member_stats"]["total_members"], 2);
    assert_eq!(body["member_stats"]["average_level"], 40);

    let members = body["members"].as_array().expect("members array");
    assert_eq!(members.len(), 2);
    for m in members {
        assert!(!m["banner_url"].as_str().unwrap().is_empty());
        assert!(!m["outfit_url"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_clan_data_absorbs_total_upstream_failure() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player-info"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let server = TestServer::new(test_app(test_config(&upstream.uri(), &["1", "2"])));
    let response = server.get("/api/clan-data").await;
    // member failures are absorbed, not surfaced: an empty summary, not a 500
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["member_stats"]["total_members"], 0);
    assert_eq!(body["member_stats"]["average_level"], 0);
    assert!(body["member_stats"]["highest_level_member"].is_null());
    assert_eq!(body["clan_info"]["name"], "");
    assert_eq!(body["members"].as_array().map(Vec::len), Some(0));
}
