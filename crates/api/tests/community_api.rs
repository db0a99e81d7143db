//! HTTP-level integration tests for the forum, mentorship, challenges,
//! resources and support endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_auth, post_json, post_json_auth, signed_up};
use sqlx::PgPool;

async fn create_post(pool: &PgPool, token: &str, title: &str) -> String {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/posts",
        serde_json::json!({
            "title": title,
            "content": "Looking for a designer",
            "sdg_badges": ["4"],
            "skills_criteria": ["Design"],
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["post_id"]
        .as_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Posts and upvotes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn posts_list_with_author(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    create_post(&pool, &token, "Hello").await;

    let json = body_json(get(common::build_test_app(pool), "/api/v1/posts").await).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["author_username"], "amina");
    assert_eq!(arr[0]["upvotes"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_post_is_rejected(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/posts",
        serde_json::json!({"title": " ", "content": "x"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_upvotes_all_count(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let id = create_post(&pool, &token, "Vote me").await;
    let uri = format!("/api/v1/posts/{id}/upvote");

    let responses = futures::future::join_all(
        (0..5).map(|_| post_auth(common::build_test_app(pool.clone()), &uri, &token)),
    )
    .await;
    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/posts/{id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["upvotes"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upvote_unknown_post_returns_404(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let response = post_auth(
        common::build_test_app(pool),
        &format!("/api/v1/posts/{}/upvote", uuid::Uuid::new_v4()),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn comments_round_trip(pool: PgPool) {
    let (_, author) = signed_up(&pool, "author").await;
    let (_, reader) = signed_up(&pool, "reader").await;
    let id = create_post(&pool, &author, "Thread").await;
    let uri = format!("/api/v1/posts/{id}/comments");

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        serde_json::json!({"content": "Count me in"}),
        &reader,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["author_username"], "reader");

    let json = body_json(get(common::build_test_app(pool), &uri).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["content"], "Count me in");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn comment_on_unknown_post_returns_404(pool: PgPool) {
    let (_, token) = signed_up(&pool, "reader").await;
    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/posts/{}/comments", uuid::Uuid::new_v4()),
        serde_json::json!({"content": "Hello?"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Mentorship
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mentorship_application_is_pending_and_listed(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/mentorship/applications",
        serde_json::json!({
            "application_type": "mentee",
            "expertise_areas": [" Solar ", ""],
            "motivation": "Learn grid design",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["expertise_areas"], serde_json::json!(["Solar"]));

    let json = body_json(
        get_auth(
            common::build_test_app(pool),
            "/api/v1/mentorship/applications/mine",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mentorship_rejects_unknown_type(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/mentorship/applications",
        serde_json::json!({"application_type": "sponsor"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Challenges and resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn challenge_create_and_get(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/challenges",
        serde_json::json!({"title": "Clean Water Hack", "sdg_targets": ["SDG 6"]}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["sdg_targets"], serde_json::json!(["6"]));
    let id = created["challenge_id"].as_str().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/challenges/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn padded_challenge_title_is_trimmed_before_length_check(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    let title = "a".repeat(200);
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/challenges",
        serde_json::json!({"title": format!("  {title}  ")}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["title"], title);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resources_filter_by_type(pool: PgPool) {
    let (_, token) = signed_up(&pool, "amina").await;
    for (title, kind) in [("Seed Fund", "grant"), ("Solar Course", "training")] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/resources",
            serde_json::json!({"title": title, "type": kind}),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            "/api/v1/resources?type=grant",
        )
        .await,
    )
    .await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["type"], "grant");

    let response = get(common::build_test_app(pool), "/api/v1/resources?type=loan").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Support
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn support_request_is_accepted(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/support",
        serde_json::json!({
            "name": "Amina",
            "email": "amina@example.org",
            "subject": "Access",
            "message": "I cannot see my projects",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn support_request_with_bad_email_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/support",
        serde_json::json!({
            "name": "Amina",
            "email": "nope",
            "subject": "Access",
            "message": "Hi",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
