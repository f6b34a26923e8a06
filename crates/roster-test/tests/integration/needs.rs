#![allow(clippy::unused_async)]
//! Integration tests for service user care needs.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Needs are created for existing service users, listed with names, filtered
/// by service user, updated and deleted.
#[test_log::test(tokio::test)]
async fn need_lifecycle() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let tom = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");
    let ann = test_db
        .seed_service_user("SU002", "Ann", "Shaw")
        .await
        .expect("seed service user");
    let service = create_db_test_service(&test_db.url()).await;

    let need_id = TestRequest::post("/api/service-user-needs")
        .json(&serde_json::json!({
            "service_user_id": tom,
            "care_type": "Medication",
            "frequency": "Daily",
            "preferred_time": "08:30",
            "duration_minutes": 15
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_body_contains("Need added successfully")
        .ack_id();
    let _response = TestRequest::post("/api/service-user-needs")
        .json(&serde_json::json!({
            "service_user_id": ann,
            "care_type": "Personal care"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED);

    let listed: serde_json::Value = TestRequest::get("/api/service-user-needs")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
    assert_eq!(listed[0]["user_first_name"], "Tom");
    assert_eq!(listed[0]["active"], true);
    assert_eq!(listed[0]["preferred_time"], "08:30:00");

    let toms: serde_json::Value =
        TestRequest::get(&format!("/api/service-user-needs?service_user_id={tom}"))
            .send(&service)
            .await
            .assert_status(StatusCode::OK)
            .json();
    assert_eq!(toms.as_array().map(Vec::len), Some(1));
    assert_eq!(toms[0]["care_type"], "Medication");

    let _response = TestRequest::put(&format!("/api/service-user-needs/{need_id}"))
        .json(&serde_json::json!({
            "service_user_id": tom,
            "care_type": "Medication",
            "active": false
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let toms: serde_json::Value =
        TestRequest::get(&format!("/api/service-user-needs?service_user_id={tom}"))
            .send(&service)
            .await
            .json();
    assert_eq!(toms[0]["active"], false);
    assert!(toms[0]["frequency"].is_null());

    let _response = TestRequest::delete(&format!("/api/service-user-needs/{need_id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    let _response = TestRequest::delete(&format!("/api/service-user-needs/{need_id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// Needs referencing an unknown service user, or with a zero duration, are
/// rejected; a malformed filter is a bad request.
#[test_log::test(tokio::test)]
async fn need_rejections() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let tom = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");
    let service = create_db_test_service(&test_db.url()).await;

    let response = TestRequest::post("/api/service-user-needs")
        .json(&serde_json::json!({ "service_user_id": 5, "care_type": "Meals" }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Service user ID 5 does not exist");

    let _response = TestRequest::post("/api/service-user-needs")
        .json(&serde_json::json!({
            "service_user_id": tom,
            "care_type": "Meals",
            "duration_minutes": 0
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let _response = TestRequest::get("/api/service-user-needs?service_user_id=tom")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let _response = TestRequest::get("/api/service-user-needs?service_user_id=5")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(
        test_db.count_rows("service_user_needs").await.expect("count"),
        0
    );
}
