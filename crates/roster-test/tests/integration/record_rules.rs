#![allow(clippy::unused_async)]
//! Service-level tests for the record rules, run directly against a store
//! handle without the HTTP layer.
//!
//! Tests:
//! - Failed creates leave no rows behind
//! - Updates and deletes of missing records report `NotFound`
//! - Availability is one row per staff member
//! - Concurrent creators for the same date get one success and `Conflict`s

use chrono::Weekday;
use futures::future::join_all;

use roster_test::component::db::query;
use roster_test::component::model::assignment::NewAssignment;
use roster_test::component::model::availability::NewStaffAvailability;
use roster_test::component::model::need::NewServiceUserNeed;
use roster_test::component::service::error::ServiceError;
use roster_test::component::service::{assignment, availability, need, service_user, staff};
use roster_test::component::types::WeekdayFlags;

use super::helpers::*;

fn visit(staff_id: i32, service_user_id: i32, day: u32) -> NewAssignment {
    NewAssignment {
        staff_id,
        service_user_id,
        assignment_date: date(2024, 6, day),
        start_time: time(9, 0),
        end_time: time(10, 0),
        notes: None,
    }
}

/// ## Summary
/// A second assignment on the same date is a `Conflict` and is not stored.
#[test_log::test(tokio::test)]
async fn conflicting_assignment_is_not_stored() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let staff_id = test_db.seed_staff("Amy", "Lee").await.expect("seed staff");
    let user_id = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");
    let mut conn = test_db.get_conn().await.expect("connection");

    let first = assignment::create_assignment(&mut conn, &visit(staff_id, user_id, 1))
        .await
        .expect("first assignment");
    assert_eq!(first.id, 1);

    let mut afternoon = visit(staff_id, user_id, 1);
    afternoon.start_time = time(14, 0);
    afternoon.end_time = time(15, 0);
    let err = assignment::create_assignment(&mut conn, &afternoon)
        .await
        .expect_err("same date must conflict");
    assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

    let listed = assignment::list_assignments(&mut conn)
        .await
        .expect("list assignments");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].assignment.start_time, time(9, 0));
}

/// ## Summary
/// Assignments referencing missing records are `NotFound` and not stored.
#[test_log::test(tokio::test)]
async fn assignment_with_missing_references_is_not_stored() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let staff_id = test_db.seed_staff("Amy", "Lee").await.expect("seed staff");
    let mut conn = test_db.get_conn().await.expect("connection");

    let err = assignment::create_assignment(&mut conn, &visit(staff_id, 12, 1))
        .await
        .expect_err("missing service user");
    assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");

    let err = assignment::create_assignment(&mut conn, &visit(12, 12, 1))
        .await
        .expect_err("missing staff");
    assert_eq!(err.to_string(), "Not found: Staff ID 12 does not exist");

    drop(conn);
    assert_eq!(
        test_db
            .count_rows("service_user_assignments")
            .await
            .expect("count"),
        0
    );
}

/// ## Summary
/// Updating or deleting records that do not exist is `NotFound` for every
/// record kind, and the store is unchanged.
#[test_log::test(tokio::test)]
async fn missing_records_are_not_found() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let staff_id = test_db.seed_staff("Amy", "Lee").await.expect("seed staff");
    let user_id = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");
    let mut conn = test_db.get_conn().await.expect("connection");

    let outcomes = [
        staff::update_staff(&mut conn, 404, &staff_payload("Ann", "Shaw"))
            .await
            .err(),
        staff::delete_staff(&mut conn, 404).await.err(),
        service_user::update_service_user(
            &mut conn,
            404,
            &service_user_payload("SU404", "Ann", "Shaw"),
        )
        .await
        .err(),
        service_user::delete_service_user(&mut conn, 404).await.err(),
        assignment::update_assignment(&mut conn, 404, &visit(staff_id, user_id, 3))
            .await
            .err(),
        assignment::delete_assignment(&mut conn, 404).await.err(),
        availability::delete_availability(&mut conn, 404).await.err(),
        need::delete_need(&mut conn, 404).await.err(),
    ];
    for outcome in outcomes {
        assert!(
            matches!(outcome, Some(ServiceError::NotFound(_))),
            "got {outcome:?}"
        );
    }

    let staff = staff::get_staff(&mut conn, staff_id).await.expect("staff");
    assert_eq!(staff.first_name, "Amy");
    let user = service_user::get_service_user(&mut conn, user_id)
        .await
        .expect("service user");
    assert_eq!(user.unique_reference_code, "SU001");
}

/// ## Summary
/// Upserting availability keeps one row per staff member.
#[test_log::test(tokio::test)]
async fn availability_is_one_row_per_staff() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let staff_id = test_db.seed_staff("Amy", "Lee").await.expect("seed staff");
    let mut conn = test_db.get_conn().await.expect("connection");

    let weekdays: WeekdayFlags = [Weekday::Mon, Weekday::Tue].into_iter().collect();
    let first = availability::upsert_availability(
        &mut conn,
        &NewStaffAvailability::from_days(staff_id, weekdays, Some(time(8, 0)), None),
    )
    .await
    .expect("first availability");

    let weekend: WeekdayFlags = [Weekday::Sat, Weekday::Sun].into_iter().collect();
    let second = availability::upsert_availability(
        &mut conn,
        &NewStaffAvailability::from_days(staff_id, weekend, None, None),
    )
    .await
    .expect("second availability");

    assert_eq!(first.id, second.id);
    assert_eq!(second.days(), weekend);
    assert_eq!(second.start_time, None);

    let listed = availability::list_availability(&mut conn)
        .await
        .expect("list availability");
    assert_eq!(listed.len(), 1);
}

/// ## Summary
/// Needs for a missing service user are `NotFound`; a created need is active
/// unless stated otherwise.
#[test_log::test(tokio::test)]
async fn need_references_are_checked() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let user_id = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");
    let mut conn = test_db.get_conn().await.expect("connection");

    let mut meals = NewServiceUserNeed {
        service_user_id: 99,
        care_type: "Meals".to_string(),
        description: None,
        frequency: Some("Daily".to_string()),
        preferred_time: Some(time(12, 0)),
        duration_minutes: Some(30),
        active: true,
    };
    let err = need::create_need(&mut conn, &meals)
        .await
        .expect_err("missing service user");
    assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");

    meals.service_user_id = user_id;
    let created = need::create_need(&mut conn, &meals).await.expect("need");
    assert!(created.active);

    let for_user = need::list_needs_for_service_user(&mut conn, user_id)
        .await
        .expect("needs for user");
    assert_eq!(for_user, vec![created]);
}

/// ## Summary
/// Several creators racing for the same service user and date on separate
/// connections end with exactly one stored assignment; every other caller
/// gets `Conflict`, whether the pre-check or the unique index caught it.
#[test_log::test(tokio::test)]
async fn concurrent_creates_for_one_date_store_one_row() {
    const CREATORS: u32 = 5;

    let test_db = TestDb::new().await.expect("Failed to create test database");
    let staff_id = test_db.seed_staff("Amy", "Lee").await.expect("seed staff");
    let user_id = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");

    let attempts = (0..CREATORS).map(|offset| {
        let test_db = &test_db;
        async move {
            let mut conn = test_db.get_conn().await.expect("connection");
            let mut request = visit(staff_id, user_id, 1);
            request.start_time = time(8 + offset, 0);
            request.end_time = time(9 + offset, 0);
            assignment::create_assignment(&mut conn, &request).await
        }
    });
    let outcomes = join_all(attempts).await;

    let created = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, Err(ServiceError::Conflict(_))))
        .count();
    assert_eq!(created, 1, "outcomes: {outcomes:?}");
    assert_eq!(conflicts, outcomes.len() - 1, "outcomes: {outcomes:?}");

    assert_eq!(
        test_db
            .count_rows("service_user_assignments")
            .await
            .expect("count"),
        1
    );
}

/// ## Summary
/// Reference codes are only logically unique: sharing one is logged but does
/// not block creating or updating a service user.
#[test_log::test(tokio::test)]
async fn shared_reference_codes_do_not_block_writes() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let tom = test_db
        .seed_service_user("SU001", "Tom", "Reed")
        .await
        .expect("seed service user");
    let ann = test_db
        .seed_service_user("SU002", "Ann", "Shaw")
        .await
        .expect("seed service user");
    let mut conn = test_db.get_conn().await.expect("connection");

    let updated = service_user::update_service_user(
        &mut conn,
        ann,
        &service_user_payload("SU001", "Ann", "Shaw"),
    )
    .await
    .expect("update with a shared code");
    assert_eq!(updated.id, ann);
    assert_eq!(updated.unique_reference_code, "SU001");

    let created = service_user::create_service_user(
        &mut conn,
        &service_user_payload("SU001", "Joe", "Hart"),
    )
    .await
    .expect("create with a shared code");

    let total = query::service_user::count_by_reference_code(&mut conn, "SU001", None)
        .await
        .expect("count");
    let others = query::service_user::count_by_reference_code(&mut conn, "SU001", Some(tom))
        .await
        .expect("count");
    assert_eq!(total, 3);
    assert_eq!(others, 2);
    assert_ne!(created.id, tom);
}
