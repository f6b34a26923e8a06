use chrono::{NaiveDate, NaiveTime};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// A staff member scheduled to visit a service user on one date.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::service_user_assignments)]
#[diesel(check_for_backend(Pg))]
pub struct Assignment {
    pub id: i32,
    pub staff_id: i32,
    pub service_user_id: i32,
    pub assignment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

/// Insert and full-record update struct for assignments
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::service_user_assignments)]
#[diesel(treat_none_as_null = true)]
pub struct NewAssignment {
    pub staff_id: i32,
    pub service_user_id: i32,
    pub assignment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub notes: Option<String>,
}

/// Assignment joined with staff and service user display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentWithNames {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub staff_first_name: String,
    pub staff_last_name: String,
    pub user_first_name: String,
    pub user_last_name: String,
}
