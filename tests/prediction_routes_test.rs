// ABOUTME: HTTP tests for the health, prediction, and activity import and read routes
// ABOUTME: Drives the merged router in-process against an in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use anyhow::Result;
use axum::http::StatusCode;
use axum::Router;
use chrono::{Duration, NaiveDate, Utc};
use common::{create_test_database, records_from_steps};
use helpers::axum_test::AxumTestRequest;
use pierre_predictions::config::ServerConfig;
use pierre_predictions::database::repositories::{ActivityRepository, ActivityRepositoryImpl};
use pierre_predictions::database::Database;
use pierre_predictions::server::{build_router, ServerResources};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

async fn test_app() -> Result<(Router, Database)> {
    let database = create_test_database().await?;
    let resources = Arc::new(ServerResources::new(database.clone(), ServerConfig::default()));
    Ok((build_router(&resources), database))
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

async fn seed_month(database: &Database, user_id: Uuid) -> Result<()> {
    let steps: Vec<u32> = (0..30).map(|day| 7000 + (day % 7) * 500).collect();
    ActivityRepositoryImpl::new(database.clone())
        .upsert_activities(&records_from_steps(user_id, today(), &steps))
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_health_reports_database() -> Result<()> {
    let (app, _) = test_app().await?;

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["service"], "pierre-predictions");
    Ok(())
}

#[tokio::test]
async fn test_analyzers_without_data_answer_empty_object() -> Result<()> {
    let (app, _) = test_app().await?;
    let user_id = Uuid::new_v4();

    for analysis in ["goals", "anomalies", "trends", "insights"] {
        let response = AxumTestRequest::get(&format!("/api/users/{user_id}/predictions/{analysis}"))
            .send(app.clone())
            .await;

        assert_eq!(response.status(), StatusCode::OK, "{analysis}");
        assert_eq!(response.json::<Value>(), json!({}), "{analysis}");
    }
    Ok(())
}

#[tokio::test]
async fn test_goal_route_returns_stored_prediction() -> Result<()> {
    let (app, database) = test_app().await?;
    let user_id = Uuid::new_v4();
    seed_month(&database, user_id).await?;

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/predictions/goals"))
        .send(app)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["id"].is_string());
    assert_eq!(body["date"], today().to_string());
    assert!(body["description"].as_str().unwrap().contains("steps goal"));
    assert!(body["predictions"]["steps"]["likelihood"].is_number());
    assert!(body["recent_averages"]["active_minutes"].is_number());
    Ok(())
}

#[tokio::test]
async fn test_generate_then_list() -> Result<()> {
    let (app, database) = test_app().await?;
    let user_id = Uuid::new_v4();
    seed_month(&database, user_id).await?;

    let response = AxumTestRequest::post(&format!("/api/users/{user_id}/predictions/generate"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Predictions generated successfully");
    for key in ["goal_predictions", "anomalies", "trends", "insights"] {
        assert!(body["predictions"][key]["id"].is_string(), "{key}");
    }

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/predictions"))
        .send(app.clone())
        .await;
    let listed: Value = response.json();
    assert_eq!(listed["total"], 4);
    assert_eq!(listed["date"], today().to_string());

    let yesterday = today() - Duration::days(1);
    let response = AxumTestRequest::get(&format!(
        "/api/users/{user_id}/predictions?date={yesterday}"
    ))
    .send(app)
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["total"], 0);
    Ok(())
}

#[tokio::test]
async fn test_invalid_user_id_rejected() -> Result<()> {
    let (app, _) = test_app().await?;

    let response = AxumTestRequest::get("/api/users/not-a-uuid/predictions/goals")
        .send(app)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_invalid_date_rejected() -> Result<()> {
    let (app, _) = test_app().await?;
    let user_id = Uuid::new_v4();

    let response = AxumTestRequest::get(&format!("/api/users/{user_id}/predictions?date=03/03/2025"))
        .send(app)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_activity_import() -> Result<()> {
    let (app, database) = test_app().await?;
    let user_id = Uuid::new_v4();
    let date = today();

    let payload = json!([
        {"date": date - Duration::days(1), "steps": 8000, "distance_km": 6.1, "active_minutes": 40},
        {"date": date, "steps": 9500, "distance_km": 7.2},
    ]);
    let response = AxumTestRequest::post(&format!("/api/users/{user_id}/activities"))
        .json(&payload)
        .send(app.clone())
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["stored"], 2);

    let series = ActivityRepositoryImpl::new(database)
        .fetch_series(user_id, date - Duration::days(7))
        .await?;
    assert_eq!(series.len(), 2);
    assert_eq!(series.records()[1].active_minutes, 0);
    Ok(())
}

#[tokio::test]
async fn test_activity_import_rejects_bad_payloads() -> Result<()> {
    let (app, _) = test_app().await?;
    let uri = format!("/api/users/{}/activities", Uuid::new_v4());

    let empty = AxumTestRequest::post(&uri).json(&json!([])).send(app.clone()).await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

    let negative = AxumTestRequest::post(&uri)
        .json(&json!([{"date": "2025-03-03", "steps": 100, "distance_km": -1.0}]))
        .send(app.clone())
        .await;
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);

    let malformed = AxumTestRequest::post(&uri)
        .raw_json(r#"[{"date": "yesterday"}]"#)
        .send(app.clone())
        .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(malformed.json::<Value>()["error"]["code"], "INVALID_INPUT");

    let negative_steps = AxumTestRequest::post(&uri)
        .json(&json!([{"date": "2025-03-03", "steps": -5}]))
        .send(app)
        .await;
    assert_eq!(negative_steps.status(), StatusCode::BAD_REQUEST);
    let body: Value = negative_steps.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
    assert!(body["error"]["message"].as_str().unwrap().contains("activity payload"));
    Ok(())
}

#[tokio::test]
async fn test_activity_listing_is_newest_first_and_paged() -> Result<()> {
    let (app, database) = test_app().await?;
    let user_id = Uuid::new_v4();
    seed_month(&database, user_id).await?;
    seed_month(&database, Uuid::new_v4()).await?;

    let uri = format!("/api/users/{user_id}/activities");
    let first_page = AxumTestRequest::get(&uri).send(app.clone()).await;
    assert_eq!(first_page.status(), StatusCode::OK);
    let body: Value = first_page.json();
    assert_eq!(body["total"], 30);
    assert_eq!(body["limit"], 15);
    assert_eq!(body["offset"], 0);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 15);
    assert_eq!(data[0]["date"], json!(today()));
    assert_eq!(data[1]["date"], json!(today() - Duration::days(1)));
    assert!(data.iter().all(|record| record["user_id"] == json!(user_id)));

    let last_page = AxumTestRequest::get(&format!("{uri}?limit=10&offset=25"))
        .send(app)
        .await;
    let body: Value = last_page.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][4]["date"], json!(today() - Duration::days(29)));
    Ok(())
}

#[tokio::test]
async fn test_activity_listing_filters_by_date_range() -> Result<()> {
    let (app, database) = test_app().await?;
    let user_id = Uuid::new_v4();
    seed_month(&database, user_id).await?;

    let start = today() - Duration::days(9);
    let end = today() - Duration::days(5);
    let response = AxumTestRequest::get(&format!(
        "/api/users/{user_id}/activities?start_date={start}&end_date={end}"
    ))
    .send(app.clone())
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total"], 5);
    let dates: Vec<Value> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["date"].clone())
        .collect();
    assert_eq!(dates.first(), Some(&json!(end)));
    assert_eq!(dates.last(), Some(&json!(start)));

    let inverted = AxumTestRequest::get(&format!(
        "/api/users/{user_id}/activities?start_date={end}&end_date={start}"
    ))
    .send(app.clone())
    .await;
    assert_eq!(inverted.status(), StatusCode::BAD_REQUEST);

    let bad_date = AxumTestRequest::get(&format!("/api/users/{user_id}/activities?start_date=soon"))
        .send(app)
        .await;
    assert_eq!(bad_date.status(), StatusCode::BAD_REQUEST);
    assert_eq!(bad_date.json::<Value>()["error"]["code"], "INVALID_INPUT");
    Ok(())
}

#[tokio::test]
async fn test_activity_by_date() -> Result<()> {
    let (app, database) = test_app().await?;
    let user_id = Uuid::new_v4();
    seed_month(&database, user_id).await?;

    let date = today() - Duration::days(3);
    let found = AxumTestRequest::get(&format!("/api/users/{user_id}/activities/{date}"))
        .send(app.clone())
        .await;
    assert_eq!(found.status(), StatusCode::OK);
    let body: Value = found.json();
    assert_eq!(body["date"], json!(date));
    assert!(body["steps"].as_u64().unwrap() >= 7000);

    let missing_date = today() - Duration::days(40);
    let missing = AxumTestRequest::get(&format!("/api/users/{user_id}/activities/{missing_date}"))
        .send(app.clone())
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>()["error"]["code"], "RESOURCE_NOT_FOUND");

    let malformed = AxumTestRequest::get(&format!("/api/users/{user_id}/activities/03-03-2025"))
        .send(app)
        .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
