pub mod challenge;
pub mod health;
pub mod mentorship;
pub mod post;
pub mod project;
pub mod resource;
pub mod user;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{catalog, dashboard, quiz, support};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                  list (public), create (auth)
/// /projects/mine                             caller's created + joined projects
/// /projects/{id}                             get (public), update, delete (owner)
/// /projects/{id}/join                        join (POST, auth)
/// /projects/{id}/leave                       leave (POST, auth)
///
/// /posts                                     list (public), create (auth)
/// /posts/{id}                                get (public), delete (author)
/// /posts/{id}/upvote                         upvote (POST, auth)
/// /posts/{id}/comments                       list (public), create (auth)
///
/// /users/me                                  create, get, update own profile
/// /users/{id}                                public profile
/// /users/{id}/projects                       created + joined projects
///
/// /dashboard                                 caller's profile + created projects
///
/// /quiz                                      questions without answers
/// /quiz/submit                               score and record attempt (POST, auth)
///
/// /mentorship/applications                   submit (POST, auth)
/// /mentorship/applications/mine              caller's applications
///
/// /challenges                                list, create (auth)
/// /challenges/{id}                           get
///
/// /resources                                 list, create (auth)
///
/// /support                                   contact form (POST, public)
///
/// /sdgs                                      SDG catalog
/// /skills                                    skill options
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/posts", post::router())
        .nest("/users", user::router())
        .nest("/mentorship", mentorship::router())
        .nest("/challenges", challenge::router())
        .nest("/resources", resource::router())
        .route("/dashboard", get(dashboard::get))
        .route("/quiz", get(quiz::questions))
        .route("/quiz/submit", post(quiz::submit))
        .route("/support", post(support::submit))
        .route("/sdgs", get(catalog::sdgs))
        .route("/skills", get(catalog::skills))
}
