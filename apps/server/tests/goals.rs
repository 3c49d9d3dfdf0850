mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{build_test_app, register_and_login, send};

async fn create_goal(app: &axum::Router, token: &str, payload: serde_json::Value) -> String {
    let (status, body) = send(app, Method::POST, "/api/v1/goals", Some(token), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn record_transaction(app: &axum::Router, token: &str, payload: serde_json::Value) {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/transactions",
        Some(token),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

fn savings_goal() -> serde_json::Value {
    json!({
        "type": "expense",
        "title": "Groceries budget",
        "category": "groceries",
        "targetAmount": 1000,
        "startDate": "2025-01-01T00:00:00",
        "endDate": "2030-01-01T00:00:00"
    })
}

#[tokio::test]
async fn progress_tracks_the_ledger() {
    let (app, _tmp) = build_test_app().await;
    let token = register_and_login(&app, "dana@example.com").await;
    let goal_id = create_goal(&app, &token, savings_goal()).await;

    let uri = format!("/api/v1/goals/{goal_id}");
    let (status, body) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["progress"].as_f64().unwrap(), 0.0);
    assert_eq!(body["data"]["status"], "active");

    record_transaction(
        &app,
        &token,
        json!({
            "type": "expense",
            "category": "groceries",
            "amount": 600,
            "date": "2025-06-15T10:00:00"
        }),
    )
    .await;

    // Listing runs the synchronizer over active goals.
    let (status, body) = send(&app, Method::GET, "/api/v1/goals", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let goal = &body["data"][0];
    assert_eq!(goal["currentAmount"].as_f64().unwrap(), 600.0);
    assert_eq!(goal["progress"].as_f64().unwrap(), 60.0);
    assert_eq!(goal["remainingAmount"].as_f64().unwrap(), 400.0);
    assert_eq!(goal["status"], "active");

    record_transaction(
        &app,
        &token,
        json!({
            "type": "expense",
            "category": "groceries",
            "amount": 500,
            "date": "2025-07-01T09:30:00"
        }),
    )
    .await;

    // Progress is capped at 100 even when the ledger overshoots the target.
    let sync_uri = format!("/api/v1/goals/{goal_id}/sync");
    let (status, body) = send(&app, Method::POST, &sync_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["currentAmount"].as_f64().unwrap(), 1100.0);
    assert_eq!(body["data"]["progress"].as_f64().unwrap(), 100.0);
    assert_eq!(body["data"]["remainingAmount"].as_f64().unwrap(), 0.0);
    assert_eq!(body["data"]["status"], "completed");
}

#[tokio::test]
async fn out_of_scope_transactions_are_ignored() {
    let (app, _tmp) = build_test_app().await;
    let token = register_and_login(&app, "erin@example.com").await;
    let goal_id = create_goal(&app, &token, savings_goal()).await;

    // Wrong category, wrong kind, and outside the window.
    record_transaction(
        &app,
        &token,
        json!({ "type": "expense", "category": "rent", "amount": 300, "date": "2025-06-15T00:00:00" }),
    )
    .await;
    record_transaction(
        &app,
        &token,
        json!({ "type": "income", "category": "groceries", "amount": 300, "date": "2025-06-15T00:00:00" }),
    )
    .await;
    record_transaction(
        &app,
        &token,
        json!({ "type": "expense", "category": "groceries", "amount": 300, "date": "2024-12-31T23:59:59" }),
    )
    .await;

    let sync_uri = format!("/api/v1/goals/{goal_id}/sync");
    let (status, body) = send(&app, Method::POST, &sync_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["currentAmount"].as_f64().unwrap(), 0.0);
    assert_eq!(body["data"]["progress"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn manual_override_is_reconciled_by_sync() {
    let (app, _tmp) = build_test_app().await;
    let token = register_and_login(&app, "finn@example.com").await;
    let goal_id = create_goal(&app, &token, savings_goal()).await;

    record_transaction(
        &app,
        &token,
        json!({ "type": "expense", "category": "groceries", "amount": 600, "date": "2025-06-15T00:00:00" }),
    )
    .await;

    let progress_uri = format!("/api/v1/goals/{goal_id}/progress");
    let (status, body) = send(
        &app,
        Method::PATCH,
        &progress_uri,
        Some(&token),
        Some(json!({ "currentAmount": 250 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["currentAmount"].as_f64().unwrap(), 250.0);
    assert_eq!(body["data"]["progress"].as_f64().unwrap(), 25.0);

    // The override loses to the ledger on the next sync.
    let sync_uri = format!("/api/v1/goals/{goal_id}/sync");
    let (_, body) = send(&app, Method::POST, &sync_uri, Some(&token), None).await;
    assert_eq!(body["data"]["currentAmount"].as_f64().unwrap(), 600.0);

    let (status, _) = send(
        &app,
        Method::PATCH,
        &progress_uri,
        Some(&token),
        Some(json!({ "currentAmount": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggling_deactivates_and_skips_bulk_sync() {
    let (app, _tmp) = build_test_app().await;
    let token = register_and_login(&app, "gwen@example.com").await;
    let goal_id = create_goal(&app, &token, savings_goal()).await;

    let toggle_uri = format!("/api/v1/goals/{goal_id}/toggle");
    let (status, body) = send(&app, Method::PATCH, &toggle_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["isActive"], false);
    assert_eq!(body["data"]["status"], "inactive");

    record_transaction(
        &app,
        &token,
        json!({ "type": "expense", "category": "groceries", "amount": 600, "date": "2025-06-15T00:00:00" }),
    )
    .await;

    // Bulk sync skips inactive goals, so the stored amount stays stale.
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/goals?isActive=false",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["currentAmount"].as_f64().unwrap(), 0.0);

    // An explicit sync runs regardless of is_active.
    let sync_uri = format!("/api/v1/goals/{goal_id}/sync");
    let (_, body) = send(&app, Method::POST, &sync_uri, Some(&token), None).await;
    assert_eq!(body["data"]["currentAmount"].as_f64().unwrap(), 600.0);
    assert_eq!(body["data"]["status"], "inactive");
}

#[tokio::test]
async fn goals_are_scoped_per_user() {
    let (app, _tmp) = build_test_app().await;
    let owner = register_and_login(&app, "holly@example.com").await;
    let other = register_and_login(&app, "ivan@example.com").await;
    let goal_id = create_goal(&app, &owner, savings_goal()).await;

    // Another user's transactions never count toward the goal.
    record_transaction(
        &app,
        &other,
        json!({ "type": "expense", "category": "groceries", "amount": 999, "date": "2025-06-15T00:00:00" }),
    )
    .await;
    let sync_uri = format!("/api/v1/goals/{goal_id}/sync");
    let (_, body) = send(&app, Method::POST, &sync_uri, Some(&owner), None).await;
    assert_eq!(body["data"]["currentAmount"].as_f64().unwrap(), 0.0);

    // A foreign goal is indistinguishable from a missing one.
    let uri = format!("/api/v1/goals/{goal_id}");
    let (status, _) = send(&app, Method::GET, &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // And the owner can still see it.
    let (status, _) = send(&app, Method::GET, &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn filters_summary_and_delete() {
    let (app, _tmp) = build_test_app().await;
    let token = register_and_login(&app, "june@example.com").await;
    let groceries = create_goal(&app, &token, savings_goal()).await;
    create_goal(
        &app,
        &token,
        json!({
            "type": "income",
            "title": "Side income",
            "category": "freelance",
            "targetAmount": 500,
            "startDate": "2025-01-01T00:00:00",
            "endDate": "2030-01-01T00:00:00"
        }),
    )
    .await;

    record_transaction(
        &app,
        &token,
        json!({ "type": "income", "category": "freelance", "amount": 500, "date": "2025-03-01T00:00:00" }),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/goals?status=completed",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Side income");

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/goals?type=expense",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "Groceries budget");

    let (status, body) = send(&app, Method::GET, "/api/v1/goals/summary", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalGoals"], 2);
    assert_eq!(body["data"]["completed"], 1);
    assert_eq!(body["data"]["active"], 1);
    assert_eq!(body["data"]["totalTargetAmount"].as_f64().unwrap(), 1500.0);

    let uri = format!("/api/v1/goals/{groceries}");
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn goal_validation_failures() {
    let (app, _tmp) = build_test_app().await;
    let token = register_and_login(&app, "kate@example.com").await;

    // Negative target.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(&token),
        Some(json!({
            "type": "expense",
            "title": "Bad",
            "category": "misc",
            "targetAmount": -10,
            "endDate": "2030-01-01T00:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // End date before start date.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(&token),
        Some(json!({
            "type": "expense",
            "title": "Bad window",
            "category": "misc",
            "targetAmount": 100,
            "startDate": "2026-01-01T00:00:00",
            "endDate": "2025-01-01T00:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
