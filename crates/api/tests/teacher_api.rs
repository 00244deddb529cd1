//! Integration tests for the teacher dashboard endpoints.

use axum::http::StatusCode;
use makerfest_db::models::project::UpsertProject;
use makerfest_db::repositories::ProjectRepo;
use sqlx::PgPool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{body_json, body_text, get_with_cookies, student_cookies, teacher_cookies};

async fn seed_project(pool: &PgPool, email: &str, name: &str, class: &str, status: &str) -> i64 {
    let input = UpsertProject {
        email: email.to_string(),
        student_name: name.to_string(),
        class_group: class.to_string(),
        project_title: format!("{name}'s project"),
        status: status.to_string(),
        ..Default::default()
    };
    ProjectRepo::insert(pool, &input).await.unwrap().id
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn teacher_routes_reject_students(pool: PgPool) {
    let app = common::build_test_app(pool);
    let cookies = student_cookies("a@x.edu");

    for uri in ["/api/v1/teacher/projects", "/api/v1/teacher/export"] {
        let response = get_with_cookies(app.clone(), uri, &cookies).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "FORBIDDEN");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn teacher_routes_reject_anonymous(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/teacher/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Submission list (canonical store)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_submitted_ordered_by_class_then_name(pool: PgPool) {
    seed_project(&pool, "zoe@x.edu", "Zoe", "8A", "submitted").await;
    seed_project(&pool, "adam@x.edu", "Adam", "8A", "submitted").await;
    seed_project(&pool, "bea@x.edu", "Bea", "8B", "submitted").await;
    seed_project(&pool, "drafty@x.edu", "Drafty", "8A", "draft").await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get_with_cookies(
            app.clone(),
            "/api/v1/teacher/projects",
            &teacher_cookies("teacher@x.edu"),
        )
        .await,
    )
    .await;

    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["student_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Adam", "Zoe", "Bea"]);

    // Class filter narrows the list; "All" does not.
    let json = body_json(
        get_with_cookies(
            app.clone(),
            "/api/v1/teacher/projects?class=8B",
            &teacher_cookies("teacher@x.edu"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let json = body_json(
        get_with_cookies(
            app,
            "/api/v1/teacher/projects?class=All",
            &teacher_cookies("teacher@x.edu"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn teacher_can_fetch_specific_record_by_id(pool: PgPool) {
    let id = seed_project(&pool, "a@x.edu", "A Name", "8B", "submitted").await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get_with_cookies(
            app.clone(),
            &format!("/api/v1/project?id={id}"),
            &teacher_cookies("teacher@x.edu"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["email"], "a@x.edu");

    // Students passing ?id= still get their own record.
    let json = body_json(
        get_with_cookies(
            app,
            &format!("/api/v1/project?id={id}"),
            &student_cookies("someone.else@x.edu"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Spreadsheet export (mirror store)
// ---------------------------------------------------------------------------

fn mirror_doc(id: &str, name: &str, class: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "email": format!("{}@x.edu", name.to_lowercase()),
        "student_name": name,
        "class_group": class,
        "project_title": format!("{name}'s project"),
        "status": status,
        // 2026-03-01T00:00:00Z
        "synced_at": 1772323200000i64,
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn export_builds_csv_from_mirror_documents(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "1": mirror_doc("1", "Zoe", "8A", "submitted"),
            "2": mirror_doc("2", "Adam", "8A", "submitted"),
            "3": mirror_doc("3", "Bea", "8B", "draft"),
        })))
        .mount(&server)
        .await;

    let app = common::build_test_app_with_mirror(pool, server.uri());
    let response = get_with_cookies(
        app,
        "/api/v1/teacher/export",
        &teacher_cookies("teacher@x.edu"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/csv"
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"makerfest-posters-All-"));
    assert!(disposition.ends_with(".csv\""));

    let csv = body_text(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Student Name,Class,Project Title,Status,Submission Date,Cloudinary Poster Link,PDF Link"
    );
    // Sorted by class then name; no poster yet, so both link columns carry
    // the sentinel.
    assert_eq!(
        lines[1],
        "\"Adam\",\"8A\",\"Adam's project\",\"submitted\",\"3/1/2026\",\"Not uploaded\",\"Not uploaded\""
    );
    assert!(lines[2].starts_with("\"Zoe\""));
    assert!(lines[3].starts_with("\"Bea\""));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn export_honours_class_filter_in_rows_and_filename(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "1": mirror_doc("1", "Zoe", "8A", "submitted"),
            "2": mirror_doc("2", "Bea", "8B", "submitted"),
        })))
        .mount(&server)
        .await;

    let app = common::build_test_app_with_mirror(pool, server.uri());
    let response = get_with_cookies(
        app,
        "/api/v1/teacher/export?class=8B",
        &teacher_cookies("teacher@x.edu"),
    )
    .await;

    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("makerfest-posters-8B-"));

    let csv = body_text(response).await;
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Bea"));
    assert!(!csv.contains("Zoe"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn export_surfaces_mirror_outage(pool: PgPool) {
    // Default test app: mirror is unreachable.
    let app = common::build_test_app(pool);
    let response = get_with_cookies(
        app,
        "/api/v1/teacher/export",
        &teacher_cookies("teacher@x.edu"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "MIRROR_UNAVAILABLE");
}

// ---------------------------------------------------------------------------
// Mirror failure never blocks the canonical write path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn upsert_succeeds_while_mirror_is_down(pool: PgPool) {
    // Default test app: every mirror write fails.
    let app = common::build_test_app(pool);
    let cookies = student_cookies("a@x.edu");

    let response = common::post_multipart(
        app.clone(),
        "/api/v1/project",
        &cookies,
        &[
            ("student_name", "A Name"),
            ("class_group", "8B"),
            ("project_title", "Solar Oven"),
            ("status", "submitted"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The canonical read path is fully consistent regardless.
    let json = body_json(get_with_cookies(app, "/api/v1/project", &cookies).await).await;
    assert_eq!(json["data"]["project_title"], "Solar Oven");
    assert_eq!(json["data"]["status"], "submitted");
}
