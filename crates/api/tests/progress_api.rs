//! HTTP-level integration tests for `/progress/{exercise_id}`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_exercise, get_auth, log_workout, register_and_login};
use sqlx::SqlitePool;

async fn catalog_exercise_id(pool: &SqlitePool, name: &str) -> i64 {
    gymtrack_db::seed::seed_exercises(pool)
        .await
        .expect("seeding should succeed");
    sqlx::query_scalar::<_, i64>("SELECT id FROM exercises WHERE name = $1 AND user_id IS NULL")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("catalog exercise exists")
}

async fn progress(app: &axum::Router, token: &str, exercise_id: i64) -> serde_json::Value {
    let response = get_auth(app.clone(), &format!("/api/progress/{exercise_id}"), token).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

fn primaries(json: &serde_json::Value) -> Vec<f64> {
    json["progress_data"]
        .as_array()
        .expect("progress_data is an array")
        .iter()
        .map(|p| p["primary_metric"].as_f64().expect("primary_metric is a number"))
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cardio_progress_uses_duration(pool: SqlitePool) {
    let running = catalog_exercise_id(&pool, "Correr").await;
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "runner@test.com").await;

    for (minutes, date) in [
        (20.0, "2025-04-01T07:00:00Z"),
        (30.0, "2025-04-02T07:00:00Z"),
        (25.0, "2025-04-03T07:00:00Z"),
    ] {
        log_workout(
            &app,
            &token,
            serde_json::json!({ "exercise_id": running, "time_minutes": minutes, "date": date }),
        )
        .await;
    }

    let json = progress(&app, &token, running).await;

    assert_eq!(primaries(&json), vec![20.0, 30.0, 25.0]);
    assert_eq!(json["max_primary"], 30.0);
    assert_eq!(json["avg_primary"], 25.0);
    assert_eq!(json["last_primary"], 25.0);
    assert_eq!(json["total_sessions"], 3);
    assert_eq!(json["primary_metric_name"], "Tiempo");
    assert_eq!(json["primary_metric_unit"], "min");
    for point in json["progress_data"].as_array().expect("array") {
        assert_eq!(point["primary_label"], "Tiempo");
        assert_eq!(point["primary_unit"], "min");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cardio_progress_falls_back_to_distance_per_entry(pool: SqlitePool) {
    let running = catalog_exercise_id(&pool, "Correr").await;
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "mixed@test.com").await;

    log_workout(
        &app,
        &token,
        serde_json::json!({ "exercise_id": running, "time_minutes": 20.0, "date": "2025-04-01T07:00:00Z" }),
    )
    .await;
    log_workout(
        &app,
        &token,
        serde_json::json!({ "exercise_id": running, "distance_km": 5.0, "date": "2025-04-02T07:00:00Z" }),
    )
    .await;
    log_workout(
        &app,
        &token,
        serde_json::json!({ "exercise_id": running, "time_minutes": 25.0, "date": "2025-04-03T07:00:00Z" }),
    )
    .await;

    let json = progress(&app, &token, running).await;
    let points = json["progress_data"].as_array().expect("array");

    assert_eq!(primaries(&json), vec![20.0, 5.0, 25.0]);
    assert_eq!(points[1]["primary_label"], "Distancia");
    assert_eq!(points[1]["primary_unit"], "km");
    assert_eq!(points[0]["primary_label"], "Tiempo");
    assert_eq!(points[2]["primary_label"], "Tiempo");
    assert_eq!(json["primary_metric_name"], "Tiempo");
    assert_eq!(json["max_primary"], 25.0);
    assert_eq!(json["last_primary"], 25.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_strength_progress_falls_back_to_repetitions(pool: SqlitePool) {
    let bench = catalog_exercise_id(&pool, "Press de Banca").await;
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "bench@test.com").await;

    for (reps, date) in [(8, "2025-05-01T18:00:00Z"), (10, "2025-05-03T18:00:00Z")] {
        log_workout(
            &app,
            &token,
            serde_json::json!({ "exercise_id": bench, "repetitions": reps, "date": date }),
        )
        .await;
    }

    let json = progress(&app, &token, bench).await;
    let points = json["progress_data"].as_array().expect("array");

    assert_eq!(primaries(&json), vec![8.0, 10.0]);
    assert!(points
        .iter()
        .all(|p| p["primary_label"] == "Repeticiones" && p["primary_unit"] == "reps"));
    assert_eq!(points[0]["reps"], 8);
    assert_eq!(json["primary_metric_name"], "Peso");
    assert_eq!(json["primary_metric_unit"], "kg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_progress_sorts_by_date_not_insertion(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "order@test.com").await;
    let squat = create_exercise(&app, &token, "Sentadilla", "Piernas").await;

    for (weight, date) in [
        (90.0, "2025-06-03T09:00:00Z"),
        (80.0, "2025-06-01T09:00:00Z"),
        (85.0, "2025-06-02T09:00:00Z"),
    ] {
        log_workout(
            &app,
            &token,
            serde_json::json!({ "exercise_id": squat, "weight": weight, "date": date }),
        )
        .await;
    }

    let json = progress(&app, &token, squat).await;

    assert_eq!(primaries(&json), vec![80.0, 85.0, 90.0]);
    assert_eq!(json["last_primary"], 90.0);
    assert_eq!(json["progress_data"][0]["date"], "2025-06-01T09:00:00Z");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_same_timestamp_sessions_keep_logging_order(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "ties@test.com").await;
    let press = create_exercise(&app, &token, "Press inclinado", "Pecho").await;

    for (weight, date) in [
        (70.0, "2025-06-02T09:00:00Z"),
        (50.0, "2025-06-01T09:00:00Z"),
        (60.0, "2025-06-02T09:00:00Z"),
        (65.0, "2025-06-02T09:00:00Z"),
    ] {
        log_workout(
            &app,
            &token,
            serde_json::json!({ "exercise_id": press, "weight": weight, "date": date }),
        )
        .await;
    }

    let json = progress(&app, &token, press).await;

    assert_eq!(primaries(&json), vec![50.0, 70.0, 60.0, 65.0]);
    assert_eq!(json["last_primary"], 65.0);
    assert_eq!(json["max_primary"], 70.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_sessions_without_charted_metric_still_count(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "sets@test.com").await;
    let fly = create_exercise(&app, &token, "Aperturas", "Pecho").await;

    log_workout(
        &app,
        &token,
        serde_json::json!({ "exercise_id": fly, "sets": 4, "date": "2025-07-01T09:00:00Z" }),
    )
    .await;
    log_workout(
        &app,
        &token,
        serde_json::json!({ "exercise_id": fly, "weight": 14.0, "date": "2025-07-02T09:00:00Z" }),
    )
    .await;

    let json = progress(&app, &token, fly).await;

    assert_eq!(json["total_sessions"], 2);
    assert_eq!(primaries(&json), vec![14.0]);
    assert_eq!(json["avg_primary"], 14.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_progress_without_history_is_zeroed(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "fresh@test.com").await;
    let plank = create_exercise(&app, &token, "Plancha", "Abdomen").await;

    let json = progress(&app, &token, plank).await;

    assert_eq!(json["max_primary"], 0.0);
    assert_eq!(json["avg_primary"], 0.0);
    assert_eq!(json["last_primary"], 0.0);
    assert_eq!(json["total_sessions"], 0);
    assert_eq!(json["primary_metric_name"], "Repeticiones");
    assert_eq!(json["primary_metric_unit"], "reps");
    assert_eq!(json["progress_data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_progress_only_includes_callers_entries(pool: SqlitePool) {
    let running = catalog_exercise_id(&pool, "Correr").await;
    let app = common::build_test_app(pool);
    let ana = register_and_login(&app, "ana@test.com").await;
    let bob = register_and_login(&app, "bob@test.com").await;

    log_workout(
        &app,
        &ana,
        serde_json::json!({ "exercise_id": running, "time_minutes": 40.0 }),
    )
    .await;

    let json = progress(&app, &bob, running).await;
    assert_eq!(json["total_sessions"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_progress_for_missing_or_foreign_exercise_is_not_found(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let ana = register_and_login(&app, "ana@test.com").await;
    let bob = register_and_login(&app, "bob@test.com").await;
    let private_id = create_exercise(&app, &ana, "Privado", "Pecho").await;

    let response = get_auth(app.clone(), "/api/progress/424242", &ana).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = get_auth(app, &format!("/api/progress/{private_id}"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
