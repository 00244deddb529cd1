//! Integration tests for the mirror store client against a mock service.

use makerfest_mirror::{MirrorDocument, MirrorError, MirrorStore};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_document(id: &str, name: &str, class: &str) -> MirrorDocument {
    MirrorDocument {
        id: id.to_string(),
        email: format!("{name}@x.edu"),
        student_name: name.to_string(),
        class_group: class.to_string(),
        project_title: "Solar Oven".to_string(),
        problem_statement: String::new(),
        project_idea: String::new(),
        materials: String::new(),
        how_it_works: String::new(),
        challenges: String::new(),
        lessons_learned: String::new(),
        future_scope: String::new(),
        image_path: None,
        theme_id: None,
        status: Some("draft".to_string()),
        poster_url: None,
        poster_public_id: None,
        poster_uploaded_at: None,
        synced_at: Some(1_700_000_000_000),
    }
}

#[tokio::test]
async fn put_project_replaces_document() {
    let server = MockServer::start().await;
    let doc = sample_document("7", "Ann", "8A");

    Mock::given(method("PUT"))
        .and(path("/projects/7.json"))
        .and(body_json(&doc))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = MirrorStore::new(server.uri());
    store.put_project(7, &doc).await.unwrap();
}

#[tokio::test]
async fn merge_poster_patches_only_poster_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/projects/7.json"))
        .and(body_json(serde_json::json!({
            "poster_url": "https://img.example/p.png",
            "poster_public_id": "makerfest-posters/8A/Ann/p",
            "poster_uploaded_at": 1_700_000_001_000i64,
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = MirrorStore::new(server.uri());
    store
        .merge_poster(
            7,
            "https://img.example/p.png",
            "makerfest-posters/8A/Ann/p",
            1_700_000_001_000,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn fetch_all_parses_document_map() {
    let server = MockServer::start().await;
    let ann = sample_document("1", "Ann", "8A");
    let bob = sample_document("2", "Bob", "8B");

    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "1": ann, "2": bob })),
        )
        .mount(&server)
        .await;

    let store = MirrorStore::new(server.uri());
    let docs = store.fetch_all().await.unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].student_name, "Ann");
    assert_eq!(docs[1].student_name, "Bob");
}

#[tokio::test]
async fn fetch_all_treats_null_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let store = MirrorStore::new(server.uri());
    let docs = store.fetch_all().await.unwrap();
    assert!(docs.is_empty());
}

#[tokio::test]
async fn fetch_all_tolerates_partial_documents() {
    let server = MockServer::start().await;

    // A document written before the poster fields existed.
    Mock::given(method("GET"))
        .and(path("/projects.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "3": { "id": "3", "student_name": "Cid" }
        })))
        .mount(&server)
        .await;

    let store = MirrorStore::new(server.uri());
    let docs = store.fetch_all().await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].student_name, "Cid");
    assert!(docs[0].status.is_none());
    assert!(docs[0].synced_at.is_none());

    let record = docs[0].export_record();
    assert_eq!(record.student_name, "Cid");
    assert!(record.poster_url.is_none());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/projects/9.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = MirrorStore::new(server.uri());
    let err = store
        .put_project(9, &sample_document("9", "Zoe", "8C"))
        .await
        .expect_err("503 must surface");

    match err {
        MirrorError::HttpStatus(status) => assert_eq!(status, 503),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    // Nothing listens on this port.
    let store = MirrorStore::new("http://127.0.0.1:9");
    let err = store
        .put_project(1, &sample_document("1", "Ann", "8A"))
        .await
        .expect_err("connection must fail");
    assert!(matches!(err, MirrorError::Request(_)));
}
