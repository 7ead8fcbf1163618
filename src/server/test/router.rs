//! End-to-end checks through the assembled router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use url::Url;

use crate::server::{router::router, state::AppState, storage::DocumentStorage};
use test_utils::{builder::TestBuilder, factory};

const BOUNDARY: &str = "academia-test-boundary";

fn app(db: &DatabaseConnection, media: &tempfile::TempDir) -> Router {
    let state = AppState::new(
        db.clone(),
        DocumentStorage::new(media.path()),
        Url::parse("http://localhost:8080").unwrap(),
    );

    router().with_state(state)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Tests the health endpoint against a live database.
///
/// Expected: 200 OK
#[tokio::test]
async fn health_reports_ok() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();

    let response = app(db, &media)
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests that mutating endpoints reject requests without a token.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn create_without_token_is_unauthorized() {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();

    let response = app(db, &media)
        .oneshot(json_request(
            "POST",
            "/api/institutions",
            None,
            json!({ "category": "University", "name": "Northfield" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that a user who is not an admin cannot update an institution.
///
/// Expected: 403 Forbidden naming the institution level
#[tokio::test]
async fn non_admin_update_is_forbidden() {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();

    let owner = factory::create_user(db).await.unwrap();
    let institution = factory::create_institution(db, owner.id).await.unwrap();
    let (_, token) = factory::create_user_with_token(db).await.unwrap();

    let response = app(db, &media)
        .oneshot(json_request(
            "PATCH",
            &format!("/api/institutions/{}", institution.id),
            Some(&token),
            json!({ "name": "Renamed" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("admin of this institution"));
}

/// Tests that an institution admin can update it and sees the change.
///
/// Expected: 200 OK with the new name
#[tokio::test]
async fn admin_update_succeeds() {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();

    let (owner, token) = factory::create_user_with_token(db).await.unwrap();
    let institution = factory::create_institution(db, owner.id).await.unwrap();

    let response = app(db, &media)
        .oneshot(json_request(
            "PATCH",
            &format!("/api/institutions/{}", institution.id),
            Some(&token),
            json!({ "name": "Renamed" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Renamed");
}

/// Tests that the lookup route is not captured as an `{id}`.
///
/// Expected: 200 OK resolving the institution by name, ignoring case
#[tokio::test]
async fn lookup_by_name_resolves() {
    let test = TestBuilder::new()
        .with_organization_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();

    let owner = factory::create_user(db).await.unwrap();
    let institution = factory::create_institution(db, owner.id).await.unwrap();
    let uri = format!(
        "/api/institutions/lookup?name={}",
        institution.name.to_uppercase().replace(' ', "%20")
    );

    let response = app(db, &media)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], institution.id);
}

/// Tests that a registered account can authenticate with the issued token.
///
/// Expected: 201 Created on register, then 200 OK on `/accounts/me`
#[tokio::test]
async fn registered_token_authenticates() {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();
    let app = app(db, &media);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/accounts",
            None,
            json!({ "username": "ada" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let issued = body_json(response).await;
    let token = issued["token"].as_str().unwrap();

    let response = app
        .oneshot(
            Request::get("/api/accounts/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "ada");
}

/// Tests a multipart upload followed by a download of the stored file.
///
/// Expected: 201 Created with the title taken from the file name, then the same bytes
/// served as an attachment
#[tokio::test]
async fn upload_then_download() {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let media = tempfile::tempdir().unwrap();
    let app = app(db, &media);

    let (_, token) = factory::create_user_with_token(db).await.unwrap();

    let body = format!(
        "--{b}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"notes.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         hello\r\n\
         --{b}\r\n\
         Content-Disposition: form-data; name=\"categories\"\r\n\r\n\
         Math, Physics\r\n\
         --{b}--\r\n",
        b = BOUNDARY
    );

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/documents")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let document = body_json(response).await;
    assert_eq!(document["title"], "notes");
    assert_eq!(document["categories"].as_array().unwrap().len(), 2);

    let response = app
        .oneshot(
            Request::get(format!("/api/documents/{}/download", document["id"]))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"notes.txt\""
    );
    assert_eq!(body_bytes(response).await, b"hello");
}
