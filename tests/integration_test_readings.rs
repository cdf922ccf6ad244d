mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn reading_payload(member_id: &str, previous: i64, current: i64, month: i32) -> serde_json::Value {
    json!({
        "member_id": member_id,
        "previous_reading": previous,
        "current_reading": current,
        "month": month,
        "year": 2026
    })
}

#[tokio::test]
async fn base_tier_consumption_is_priced_at_the_base_rate() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    // 10 m3, all inside the first tier: 3000 fixed + 10 * 700
    let (status, body) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 0, 10, 1))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["consumption"], 10);
    assert_eq!(body["charge"], 10_000);
}

#[tokio::test]
async fn second_tier_consumption_adds_the_excess_rate() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    // 20 m3: 3000 + 15 * 700 + 5 * 900
    let (status, body) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 0, 20, 1))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["charge"], 18_000);
}

#[tokio::test]
async fn third_tier_consumption_adds_both_excess_rates() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    // 35 m3: 3000 + 15 * 700 + 15 * 900 + 5 * 1200
    let (status, body) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 0, 35, 1))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["charge"], 33_000);
}

#[tokio::test]
async fn subsidy_and_penalty_are_applied_to_the_charge() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    let (status, body) = app
        .post(
            "/api/v1/readings",
            &token,
            json!({
                "member_id": member.id,
                "previous_reading": 0,
                "current_reading": 10,
                "month": 1,
                "year": 2026,
                "subsidy": 2_000,
                "penalty": 1_500
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    // 10_000 + 1_500 penalty - 2_000 subsidy
    assert_eq!(body["charge"], 9_500);
}

#[tokio::test]
async fn negative_subsidy_or_penalty_is_rejected() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    for (subsidy, penalty) in [(-5_000, 0), (0, -2_000), (-5_000, -2_000)] {
        let (status, body) = app
            .post(
                "/api/v1/readings",
                &token,
                json!({
                    "member_id": member.id,
                    "previous_reading": 0,
                    "current_reading": 10,
                    "month": 1,
                    "year": 2026,
                    "subsidy": subsidy,
                    "penalty": penalty
                }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("non-negative"));
    }
}

#[tokio::test]
async fn meter_rollback_is_rejected() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    let (status, body) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 50, 40, 1))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("previous_reading"));
}

#[tokio::test]
async fn month_out_of_range_is_rejected() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    let (status, _) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 0, 10, 13))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn one_reading_per_member_per_period() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    let (status, _) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 0, 10, 3))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 10, 25, 3))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("period"));

    // a different month is fine
    let (status, _) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 10, 25, 4))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn reading_for_unknown_member_is_not_found() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let token = app.login_admin().await;

    let (status, _) = app
        .post("/api/v1/readings", &token, reading_payload("no-such-id", 0, 10, 1))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn member_readings_come_back_newest_first() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    for (prev, curr, month) in [(0, 10, 1), (10, 22, 2), (22, 30, 3)] {
        let (status, _) = app
            .post(
                "/api/v1/readings",
                &token,
                reading_payload(&member.id, prev, curr, month),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app
        .get(&format!("/api/v1/members/{}/readings", member.id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    let readings = body.as_array().unwrap();
    assert_eq!(readings.len(), 3);
    assert_eq!(readings[0]["month"], 3);
    assert_eq!(readings[2]["month"], 1);
}

#[tokio::test]
async fn recording_readings_requires_admin() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login("22.222.222-2", "pw").await;

    let (status, _) = app
        .post("/api/v1/readings", &token, reading_payload(&member.id, 0, 10, 1))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
