#![allow(clippy::unused_async)]
//! Integration tests for staff records.
//!
//! Tests:
//! - Create, read, update and delete through the HTTP API
//! - Validation and not-found responses

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// A created staff member is listed, can be fetched by ID, updated and deleted.
#[test_log::test(tokio::test)]
async fn staff_lifecycle() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;

    let response = TestRequest::post("/api/staff")
        .json(&serde_json::json!({
            "first_name": "Amy",
            "last_name": "Lee",
            "job_role": "Carer",
            "contracted_hours": 37.5,
            "primary_team": "North"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_body_contains("Staff created successfully");
    let id = response.ack_id();
    assert_eq!(id, 1);

    let listed: serde_json::Value = TestRequest::get("/api/staff")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["first_name"], "Amy");
    assert_eq!(listed[0]["contracted_hours"], 37.5);

    let response = TestRequest::put(&format!("/api/staff/{id}"))
        .json(&serde_json::json!({
            "first_name": "Amy",
            "last_name": "Lee-Hart",
            "job_role": "Senior Carer"
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.ack_id(), id);

    let fetched: serde_json::Value = TestRequest::get(&format!("/api/staff/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["last_name"], "Lee-Hart");
    assert_eq!(fetched["job_role"], "Senior Carer");
    // Full replacement: fields left out of the update are cleared
    assert!(fetched["primary_team"].is_null());

    let _response = TestRequest::delete(&format!("/api/staff/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Staff deleted successfully");

    assert_eq!(test_db.count_rows("staff_details").await.expect("count"), 0);
}

/// ## Summary
/// Missing required fields and malformed bodies are rejected with 400.
#[test_log::test(tokio::test)]
async fn staff_validation_errors() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db.url()).await;

    let response = TestRequest::post("/api/staff")
        .json(&serde_json::json!({
            "first_name": "Amy",
            "last_name": "Lee",
            "job_role": "  "
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("job_role"));

    let _response = TestRequest::post("/api/staff")
        .json(&serde_json::json!({ "first_name": "Amy" }))
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let _response = TestRequest::post("/api/staff")
        .header("Content-Type", "application/json")
        .body("{not json")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(test_db.count_rows("staff_details").await.expect("count"), 0);
}

/// ## Summary
/// Operations on an unknown ID answer 404 and leave the store unchanged.
#[test_log::test(tokio::test)]
async fn staff_not_found() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    test_db.seed_staff("Amy", "Lee").await.expect("seed staff");
    let service = create_db_test_service(&test_db.url()).await;

    let response = TestRequest::get("/api/staff/99")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Staff ID 99 does not exist");

    let _response = TestRequest::put("/api/staff/99")
        .json(&staff_payload("Ben", "Moss"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let _response = TestRequest::delete("/api/staff/99")
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let _response = TestRequest::delete("/api/staff/abc")
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(test_db.count_rows("staff_details").await.expect("count"), 1);
}
