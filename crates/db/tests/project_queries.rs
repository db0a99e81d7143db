//! Integration tests for project creation and filter composition.

use sqlx::PgPool;
use uuid::Uuid;

use hub_db::models::project::{CreateProject, ProjectFilters};
use hub_db::models::user::CreateUser;
use hub_db::repositories::{ProjectRepo, UserRepo};

async fn seed_user(pool: &PgPool, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    UserRepo::create(
        pool,
        id,
        &CreateUser {
            username: name.to_string(),
            email: format!("{name}@example.org"),
            gender_identity: None,
            location: None,
            skills: vec![],
            sdg_focus_areas: vec![],
        },
    )
    .await
    .unwrap();
    id
}

fn project(title: &str, description: &str, sdgs: &[&str]) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: Some(description.to_string()),
        sdg_alignment: sdgs.iter().map(|s| s.to_string()).collect(),
        team_members: vec![],
        impact_metrics: vec![],
    }
}

fn titles(rows: &[hub_db::models::project::ProjectWithCreator]) -> Vec<&str> {
    rows.iter().map(|r| r.project.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_returns_same_fields(pool: PgPool) {
    let owner = seed_user(&pool, "amina").await;
    let member = Uuid::new_v4().to_string();
    let input = CreateProject {
        title: "Solar Grid".to_string(),
        description: Some("Microgrid for the clinic".to_string()),
        sdg_alignment: vec!["7".to_string(), "13".to_string()],
        team_members: vec![member.clone()],
        impact_metrics: vec!["120 households".to_string()],
    };
    let created = ProjectRepo::create(&pool, owner, &input).await.unwrap();

    let fetched = ProjectRepo::find_by_id(&pool, created.project_id)
        .await
        .unwrap()
        .expect("created project is readable");

    assert_eq!(fetched.project.title, input.title);
    assert_eq!(fetched.project.description, input.description);
    assert_eq!(fetched.project.created_by, Some(owner));
    assert_eq!(fetched.project.sdg_alignment, input.sdg_alignment);
    assert_eq!(fetched.project.team_members, vec![member]);
    assert_eq!(fetched.project.impact_metrics, input.impact_metrics);
    assert_eq!(fetched.creator_username.as_deref(), Some("amina"));
    assert_eq!(fetched.creator_email.as_deref(), Some("amina@example.org"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_project_is_none(pool: PgPool) {
    assert!(ProjectRepo::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_title_case_insensitively(pool: PgPool) {
    let owner = seed_user(&pool, "owner").await;
    ProjectRepo::create(&pool, owner, &project("Solar Grid", "Energy", &["7"]))
        .await
        .unwrap();
    ProjectRepo::create(&pool, owner, &project("Water Access", "Wells", &["6"]))
        .await
        .unwrap();

    let filters = ProjectFilters {
        search: Some("solar".to_string()),
        ..Default::default()
    };
    let rows = ProjectRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(titles(&rows), vec!["Solar Grid"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_also_matches_description(pool: PgPool) {
    let owner = seed_user(&pool, "owner").await;
    ProjectRepo::create(&pool, owner, &project("Wells", "Clean water access", &[]))
        .await
        .unwrap();

    let filters = ProjectFilters {
        search: Some("WATER".to_string()),
        ..Default::default()
    };
    let rows = ProjectRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(titles(&rows), vec!["Wells"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_wildcards_match_literally(pool: PgPool) {
    let owner = seed_user(&pool, "owner").await;
    ProjectRepo::create(&pool, owner, &project("100% Renewable", "", &[]))
        .await
        .unwrap();
    ProjectRepo::create(&pool, owner, &project("1000 Trees", "", &[]))
        .await
        .unwrap();

    let filters = ProjectFilters {
        search: Some("100%".to_string()),
        ..Default::default()
    };
    let rows = ProjectRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(titles(&rows), vec!["100% Renewable"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sdg_filter_requires_superset(pool: PgPool) {
    let owner = seed_user(&pool, "owner").await;
    ProjectRepo::create(&pool, owner, &project("Tagged", "", &["5", "9"]))
        .await
        .unwrap();

    let only_five = ProjectFilters {
        sdg_alignment: Some(vec!["5".to_string()]),
        ..Default::default()
    };
    assert_eq!(
        titles(&ProjectRepo::list(&pool, &only_five).await.unwrap()),
        vec!["Tagged"]
    );

    let five_and_ten = ProjectFilters {
        sdg_alignment: Some(vec!["5".to_string(), "10".to_string()]),
        ..Default::default()
    };
    assert!(ProjectRepo::list(&pool, &five_and_ten)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filters_combine_with_and(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bobby").await;
    ProjectRepo::create(&pool, alice, &project("Solar Grid", "", &["7"]))
        .await
        .unwrap();
    ProjectRepo::create(&pool, bob, &project("Solar Pumps", "", &["7"]))
        .await
        .unwrap();
    ProjectRepo::create(&pool, alice, &project("Solar School", "", &["4"]))
        .await
        .unwrap();

    let filters = ProjectFilters {
        search: Some("solar".to_string()),
        sdg_alignment: Some(vec!["7".to_string()]),
        created_by: Some(alice),
    };
    let rows = ProjectRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(titles(&rows), vec!["Solar Grid"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let owner = seed_user(&pool, "owner").await;
    for title in ["First", "Second", "Third"] {
        ProjectRepo::create(&pool, owner, &project(title, "", &[]))
            .await
            .unwrap();
    }

    let rows = ProjectRepo::list(&pool, &ProjectFilters::default())
        .await
        .unwrap();
    assert_eq!(titles(&rows), vec!["Third", "Second", "First"]);
}

// ---------------------------------------------------------------------------
// My projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_for_user_covers_created_and_joined(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bobby").await;

    ProjectRepo::create(&pool, alice, &project("Alice Owns", "", &[]))
        .await
        .unwrap();
    let joined = ProjectRepo::create(&pool, bob, &project("Alice Joined", "", &[]))
        .await
        .unwrap();
    ProjectRepo::create(&pool, bob, &project("Bob Only", "", &[]))
        .await
        .unwrap();
    ProjectRepo::join(&pool, joined.project_id, alice)
        .await
        .unwrap();

    let rows = ProjectRepo::list_for_user(&pool, alice).await.unwrap();
    let mut got = titles(&rows);
    got.sort_unstable();
    assert_eq!(got, vec!["Alice Joined", "Alice Owns"]);
}
