mod common;

use apr_backend::domain::services::ledger::ArrearsMode;
use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

async fn record_reading(app: &TestApp, token: &str, member_id: &str, current: i64, prev: i64, month: i32) {
    let (status, body) = app
        .post(
            "/api/v1/readings",
            token,
            json!({
                "member_id": member_id,
                "previous_reading": prev,
                "current_reading": current,
                "month": month,
                "year": 2026
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "reading failed: {:?}", body);
}

async fn record_payment(app: &TestApp, token: &str, member_id: &str, amount: i64) {
    let (status, body) = app
        .post(
            "/api/v1/payments",
            token,
            json!({
                "member_id": member_id,
                "amount": amount,
                "method": "transfer"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "payment failed: {:?}", body);
}

#[tokio::test]
async fn statement_balances_billed_against_paid() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    // 10 m3 -> 10_000
    record_reading(&app, &token, &member.id, 10, 0, 1).await;
    record_payment(&app, &token, &member.id, 6_000).await;

    let (status, body) = app
        .get(&format!("/api/v1/members/{}/statement", member.id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_billed"], 10_000);
    assert_eq!(body["total_paid"], 6_000);
    assert_eq!(body["balance"], 4_000);
    assert_eq!(body["months_in_arrears"], 1);
}

#[tokio::test]
async fn overpayment_clamps_the_balance_to_zero() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    record_reading(&app, &token, &member.id, 10, 0, 1).await;
    record_payment(&app, &token, &member.id, 15_000).await;

    let (status, body) = app
        .get(&format!("/api/v1/members/{}/statement", member.id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], 0);
    assert_eq!(body["months_in_arrears"], 0);
}

#[tokio::test]
async fn allocated_mode_clears_fully_covered_months() {
    // one payment covering two identical charges: allocation marks both
    // months settled, so only the uncovered remainder counts
    let app = TestApp::with_arrears_mode(ArrearsMode::Allocated).await;
    app.seed_admin().await;
    let member = app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    record_reading(&app, &token, &member.id, 10, 0, 1).await;
    record_reading(&app, &token, &member.id, 20, 10, 2).await;
    record_payment(&app, &token, &member.id, 10_000).await;

    let (status, body) = app
        .get(&format!("/api/v1/members/{}/statement", member.id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    // first month (10_000) fully covered, second (12_000) untouched
    assert_eq!(body["months_in_arrears"], 1);
    assert_eq!(body["balance"], 12_000);
}

#[tokio::test]
async fn statement_for_unknown_member_is_not_found() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let token = app.login_admin().await;

    let (status, _) = app
        .get("/api/v1/members/no-such-id/statement", &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delinquency_report_ranks_flagged_members_by_debt() {
    let app = TestApp::new().await;
    app.seed_admin().await;
    let small = app.seed_member("22.222.222-2", "pw", "member").await;
    let big = app.seed_member("33.333.333-3", "pw", "member").await;
    let current = app.seed_member("44.444.444-4", "pw", "member").await;
    let token = app.login_admin().await;

    record_reading(&app, &token, &small.id, 10, 0, 1).await; // 10_000
    record_reading(&app, &token, &big.id, 20, 0, 1).await; // 18_000
    record_reading(&app, &token, &big.id, 40, 20, 2).await; // + 18_000
    record_reading(&app, &token, &current.id, 10, 0, 1).await;

    for id in [&small.id, &big.id] {
        let (status, _) = app
            .put(
                &format!("/api/v1/members/{}/status", id),
                &token,
                json!({ "status": "delinquent" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app.get("/api/v1/reports/delinquency", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delinquent_count"], 2);
    assert_eq!(body["total_debt"], 46_000);
    assert_eq!(body["average_debt"], 23_000);

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries[0]["member_id"], big.id.as_str());
    assert_eq!(entries[0]["total_debt"], 36_000);
    assert_eq!(entries[0]["months_in_arrears"], 2);
    assert_eq!(entries[1]["member_id"], small.id.as_str());
    assert_eq!(entries[1]["total_debt"], 10_000);
}

#[tokio::test]
async fn delinquency_report_ignores_admins_and_active_members() {
    let app = TestApp::new().await;
    let admin = app.seed_admin().await;
    app.seed_member("22.222.222-2", "pw", "member").await;
    let token = app.login_admin().await;

    record_reading(&app, &token, &admin.id, 10, 0, 1).await;
    // flag the admin too; role filtering must still exclude them
    let (status, _) = app
        .put(
            &format!("/api/v1/members/{}/status", admin.id),
            &token,
            json!({ "status": "delinquent" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/v1/reports/delinquency", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["delinquent_count"], 0);
    assert_eq!(body["total_debt"], 0);
    assert!(body["entries"].as_array().unwrap().is_empty());
}
