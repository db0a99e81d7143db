//! HTTP-level integration tests for profiles, dashboard and quiz.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth, put_json_auth, signed_up, token_for};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_own_profile(pool: PgPool) {
    let (user_id, token) = signed_up(&pool, "amina").await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/users/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], user_id.to_string());
    assert_eq!(json["quiz_attempts"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn me_without_profile_returns_404(pool: PgPool) {
    let token = token_for(Uuid::new_v4());
    let response = get_auth(common::build_test_app(pool), "/api/v1/users/me", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    signed_up(&pool, "amina").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/users/me",
        serde_json::json!({"username": "amina", "email": "second@example.org"}),
        &token_for(Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creating_profile_twice_returns_409(pool: PgPool) {
    let (user_id, token) = signed_up(&pool, "amina").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/users/me",
        serde_json::json!({"username": "amina_two", "email": "amina.two@example.org"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/users/{user_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["username"], "amina");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_me_applies_partial_changes(pool: PgPool) {
    let (user_id, token) = signed_up(&pool, "amina").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/users/me",
        serde_json::json!({"location": "Kisumu", "sdg_focus_areas": ["SDG 5"]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/users/{user_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["location"], "Kisumu");
    assert_eq!(json["sdg_focus_areas"], serde_json::json!(["5"]));
    assert_eq!(json["username"], "amina");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_token_is_rejected(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/users/me",
        "not-a-jwt",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_shows_profile_and_created_projects(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({"title": "Solar Grid"}),
        &token,
    )
    .await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["profile"]["username"], "amina");
    assert_eq!(json["data"]["projects"][0]["title"], "Solar Grid");
}

// ---------------------------------------------------------------------------
// Quiz
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_questions_hide_answers(pool: PgPool) {
    let json = body_json(get(common::build_test_app(pool), "/api/v1/quiz").await).await;
    let questions = json["data"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert!(questions[0].get("correct").is_none());
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quiz_submission_scores_and_counts_attempts(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let answers = serde_json::json!({"answers": [1, 1, 1, 1, 1, 1, 1, 2, 1, 0]});

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/quiz/submit",
        answers.clone(),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["score"], 10);
    assert_eq!(json["data"]["total"], 10);
    assert_eq!(json["data"]["attempts"], 1);

    let json = body_json(
        post_json_auth(
            common::build_test_app(pool),
            "/api/v1/quiz/submit",
            serde_json::json!({"answers": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]}),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["score"], 1);
    assert_eq!(json["data"]["attempts"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn incomplete_quiz_is_rejected(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/quiz/submit",
        serde_json::json!({"answers": [1, 1]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
