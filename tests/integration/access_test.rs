//! Integration tests for access resolution endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use sharescope_database::repositories::share::ShareRepository;
use sharescope_entity::share::NewShare;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_access_list_collapses_overlapping_grants() {
    let app = helpers::TestApp::new().await;

    // Bob is granted Q3 directly and through Testers.
    let response = app.get("/resources/5/access-list").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{ "id": 2, "name": "Bob" }, { "id": 3, "name": "Charlie" }])
    );
}

#[tokio::test]
async fn test_access_list_expands_groups() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/resources/10/access-list").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec![1, 2, 3, 5]);

    let response = app.get("/resources/6/access-list").await;
    assert_eq!(response.ids(), vec![4, 5]);
}

#[tokio::test]
async fn test_public_resource_lists_every_user() {
    let app = helpers::TestApp::new().await;

    for id in [3, 7, 8, 9] {
        let response = app.get(&format!("/resources/{id}/access-list")).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.ids(), vec![1, 2, 3, 4, 5], "resource {id}");
    }
}

#[tokio::test]
async fn test_unshared_resource_is_empty_not_missing() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/resources/4/access-list").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));

    let response = app.get("/resources/999/access-list").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({ "error": "NOT_FOUND", "message": "resource not found" })
    );
}

#[tokio::test]
async fn test_user_resources() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/users/5/resources").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec![3, 6, 7, 8, 9, 10]);
    assert_eq!(
        response.body[1],
        json!({ "id": 6, "name": "Admin Dashboard Access", "isPublic": false })
    );

    let response = app.get("/users/1/resources").await;
    assert_eq!(response.ids(), vec![1, 2, 3, 7, 8, 9, 10]);
}

#[tokio::test]
async fn test_unknown_user_sees_public_resources() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/users/404/resources").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.ids(), vec![3, 7, 8, 9]);
}

#[tokio::test]
async fn test_invalid_ids_are_rejected() {
    let app = helpers::TestApp::new().await;

    let cases = [
        ("0", "parameter 'id' must be a positive number"),
        ("-1", "parameter 'id' must be a positive number"),
        ("abc", "parameter 'id' must be a number"),
        ("1.5", "parameter 'id' must be an integer"),
        ("9007199254740993", "parameter 'id' must be an integer"),
        ("9223372036854775808", "parameter 'id' must be an integer"),
    ];

    for (raw, issue) in cases {
        for path in [
            format!("/resources/{raw}/access-list"),
            format!("/users/{raw}/resources"),
        ] {
            let response = app.get(&path).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(
                response.body,
                json!({
                    "error": "VALIDATION_ERROR",
                    "message": "invalid 'id' parameter",
                    "details": { "field": "id", "issues": [issue] }
                }),
                "{path}"
            );
        }
    }

    let response = app.get("/resources/7/access-list").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_share_row_changes_nothing() {
    let app = helpers::TestApp::new().await;

    ShareRepository::new(app.db.pool().clone())
        .create(&NewShare::with_user(5, 3))
        .await
        .expect("Failed to insert duplicate share");

    let response = app.get("/resources/5/access-list").await;
    assert_eq!(response.ids(), vec![2, 3]);

    let response = app.get("/users/3/resources").await;
    assert_eq!(response.ids(), vec![3, 5, 7, 8, 9, 10]);
}
