//! Integration tests for the aggregate report endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use sharescope_database::repositories::share::ShareRepository;
use sharescope_entity::share::NewShare;

#[tokio::test]
async fn test_resource_report() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/reports/resources").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.field_values("resourceId"), (1..=10).collect::<Vec<_>>());
    assert_eq!(
        response.field_values("userCount"),
        vec![1, 2, 5, 0, 2, 2, 5, 5, 5, 4]
    );
    assert_eq!(
        response.body[4],
        json!({
            "resourceId": 5,
            "name": "Q3 Testing Plan",
            "isPublic": false,
            "userCount": 2
        })
    );
    assert_eq!(response.body[8]["isPublic"], true);
}

#[tokio::test]
async fn test_user_report() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/reports/users").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.field_values("userId"), vec![1, 2, 3, 4, 5]);
    assert_eq!(response.field_values("resourceCount"), vec![7, 7, 6, 5, 6]);
    assert_eq!(
        response.body[4],
        json!({ "userId": 5, "name": "Eve", "resourceCount": 6 })
    );
}

#[tokio::test]
async fn test_reports_match_resolution() {
    let app = helpers::TestApp::new().await;

    let report = app.get("/reports/resources").await;
    for (id, count) in report
        .field_values("resourceId")
        .into_iter()
        .zip(report.field_values("userCount"))
    {
        let list = app.get(&format!("/resources/{id}/access-list")).await;
        assert_eq!(list.ids().len() as i64, count, "resource {id}");
    }

    let report = app.get("/reports/users").await;
    for (id, count) in report
        .field_values("userId")
        .into_iter()
        .zip(report.field_values("resourceCount"))
    {
        let list = app.get(&format!("/users/{id}/resources")).await;
        assert_eq!(list.ids().len() as i64, count, "user {id}");
    }
}

#[tokio::test]
async fn test_duplicate_share_row_keeps_counts() {
    let app = helpers::TestApp::new().await;
    let resources_before = app.get("/reports/resources").await.body;
    let users_before = app.get("/reports/users").await.body;

    let shares = ShareRepository::new(app.db.pool().clone());
    shares
        .create(&NewShare::with_user(10, 1))
        .await
        .expect("Failed to insert duplicate share");
    shares
        .create(&NewShare::with_group(5, 2))
        .await
        .expect("Failed to insert duplicate share");

    assert_eq!(app.get("/reports/resources").await.body, resources_before);
    assert_eq!(app.get("/reports/users").await.body, users_before);
}
