use fantasy_pool::{
    data_fetcher::api::{FetchClient, FetchConfig, NflApi},
    data_fetcher::models::HomeAway,
    data_fetcher::processors::{build_player_pool, flex_players},
    error::AppError,
    storage,
    summary::format_build_report,
    testing_utils::{RecordingSleeper, TestDataBuilder},
};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn api_for(server: &MockServer, sleeper: RecordingSleeper) -> NflApi<RecordingSleeper> {
    let config = FetchConfig::new(server.uri(), "test-key");
    NflApi::from_client(FetchClient::with_sleeper(config, sleeper).unwrap())
}

fn default_positions() -> Vec<String> {
    ["QB", "RB", "WR", "TE"].map(String::from).to_vec()
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_week_one(server: &MockServer) {
    mount_json(
        server,
        "/games/2025/REG/1/schedule.json",
        TestDataBuilder::weekly_schedule_json(&[("game-1", "KC", "BAL"), ("game-2", "NE", "MIA")]),
    )
    .await;
}

/// One roster failing with HTTP 500 on every attempt is skipped; the rest
/// of the week still lands in the pool.
#[tokio::test]
async fn test_failed_roster_is_skipped() {
    let server = MockServer::start().await;
    mount_week_one(&server).await;
    mount_json(
        &server,
        "/teams/team-kc/full_roster.json",
        TestDataBuilder::roster_json(&[("kc-qb", "KC Quarterback", "QB"), ("kc-k", "KC Kicker", "K")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/teams/team-bal/full_roster.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;
    mount_json(
        &server,
        "/teams/team-ne/full_roster.json",
        TestDataBuilder::roster_json(&[("ne-wr", "NE Receiver", "WR")]),
    )
    .await;
    mount_json(
        &server,
        "/teams/team-mia/full_roster.json",
        TestDataBuilder::roster_json(&[("mia-te", "MIA Tight End", "TE")]),
    )
    .await;

    let sleeper = RecordingSleeper::default();
    let api = api_for(&server, sleeper.clone());
    let build = build_player_pool(&api, 1, 2025, &default_positions())
        .await
        .unwrap();

    assert_eq!(build.teams_requested, 4);
    assert_eq!(build.teams_processed(), 3);
    assert!(build.is_partial());
    assert_eq!(build.teams_skipped[0].team_alias, "BAL");

    assert_eq!(build.pool.len(), 3);
    let positions: Vec<&str> = build.pool.positions().collect();
    assert_eq!(positions, vec!["QB", "RB", "WR", "TE"]);
    assert_eq!(build.pool.get("QB").unwrap()[0].player.id, "kc-qb");
    assert!(build.pool.get("RB").unwrap().is_empty());
    assert_eq!(build.pool.get("WR").unwrap()[0].appearance.opponent_alias, "MIA");
    assert_eq!(
        build.pool.get("TE").unwrap()[0].appearance.home_or_away,
        HomeAway::Away
    );

    // schedule, KC, BAL x3 (two retry waits, none after the last), NE, MIA
    let second = Duration::from_millis(1000);
    let retry = Duration::from_millis(5000);
    assert_eq!(
        sleeper.recorded(),
        vec![second, second, retry, retry, second, second]
    );

    let report = format_build_report(&build);
    assert!(report.contains("BAL"));
}

/// Rosters are fetched in schedule order, home team before away team.
#[tokio::test]
async fn test_pool_order_follows_schedule() {
    let server = MockServer::start().await;
    mount_week_one(&server).await;
    for (alias, id) in [("KC", "p1"), ("BAL", "p2"), ("NE", "p3"), ("MIA", "p4")] {
        mount_json(
            &server,
            &format!("/teams/{}/full_roster.json", TestDataBuilder::team_id(alias)),
            TestDataBuilder::roster_json(&[(id, "Back", "RB")]),
        )
        .await;
    }

    let api = api_for(&server, RecordingSleeper::default());
    let build = build_player_pool(&api, 1, 2025, &["RB".to_string()])
        .await
        .unwrap();

    assert!(!build.is_partial());
    let ids: Vec<&str> = build
        .pool
        .get("RB")
        .unwrap()
        .iter()
        .map(|p| p.player.id.as_str())
        .collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
}

/// Without a schedule there is nothing to build.
#[tokio::test]
async fn test_schedule_failure_fails_build() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games/2025/REG/1/schedule.json"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let api = api_for(&server, RecordingSleeper::default());
    let result = build_player_pool(&api, 1, 2025, &default_positions()).await;

    assert!(matches!(
        result,
        Err(AppError::RetryExhausted { attempts: 3, .. })
    ));
}

/// A week with no games gives an empty pool, not an error.
#[tokio::test]
async fn test_empty_week() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/games/2025/REG/1/schedule.json",
        TestDataBuilder::weekly_schedule_json(&[]),
    )
    .await;

    let api = api_for(&server, RecordingSleeper::default());
    let build = build_player_pool(&api, 1, 2025, &default_positions())
        .await
        .unwrap();

    assert_eq!(build.teams_requested, 0);
    assert!(build.pool.is_empty());
}

/// Built pool survives a save/load cycle and feeds the FLEX lookup.
#[tokio::test]
async fn test_build_save_and_reload() {
    let server = MockServer::start().await;
    mount_week_one(&server).await;
    let rosters = [
        ("KC", ("kc-qb", "Passer", "QB")),
        ("BAL", ("bal-rb", "Runner", "RB")),
        ("NE", ("ne-wr", "Catcher", "WR")),
        ("MIA", ("mia-te", "Blocker", "TE")),
    ];
    for (alias, player) in rosters {
        mount_json(
            &server,
            &format!("/teams/{}/full_roster.json", TestDataBuilder::team_id(alias)),
            TestDataBuilder::roster_json(&[player]),
        )
        .await;
    }

    let api = api_for(&server, RecordingSleeper::default());
    let build = build_player_pool(&api, 1, 2025, &default_positions())
        .await
        .unwrap();

    let dir = tempdir().unwrap();
    storage::save_player_pool(dir.path(), &build.pool, 1, 2025)
        .await
        .unwrap();
    let written = storage::save_position_files(dir.path(), &build.pool, 1, 2025)
        .await
        .unwrap();
    assert_eq!(written.len(), 4);

    let reloaded = storage::load_player_pool(dir.path(), 1, 2025).await.unwrap();
    assert_eq!(reloaded, build.pool);

    let flex = storage::load_flex_eligible(dir.path(), 1, 2025).await.unwrap();
    let flex_ids: Vec<&str> = flex.iter().map(|p| p.player.id.as_str()).collect();
    assert_eq!(flex_ids, vec!["bal-rb", "ne-wr", "mia-te"]);
    assert_eq!(flex, flex_players(&build.pool));
}

/// Roster lookup by alias ignores case.
#[tokio::test]
async fn test_roster_by_alias() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/league/teams.json",
        TestDataBuilder::teams_json(&["KC", "NE"]),
    )
    .await;
    mount_json(
        &server,
        "/teams/team-ne/full_roster.json",
        TestDataBuilder::roster_json(&[("ne-1", "Patriot", "QB")]),
    )
    .await;

    let api = api_for(&server, RecordingSleeper::default());
    let roster = api.fetch_roster_by_alias("ne").await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Patriot");

    let missing = api.fetch_roster_by_alias("XYZ").await;
    assert!(matches!(missing, Err(AppError::TeamNotFound { .. })));
}
