use chrono::NaiveDate;
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Staff member record
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = schema::staff_details)]
#[diesel(check_for_backend(Pg))]
pub struct Staff {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub job_role: String,
    pub line_manager: Option<String>,
    pub contracted_hours: Option<f64>,
    pub primary_team: Option<String>,
    pub preferred_travel_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub leave_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub work_number: Option<String>,
    pub postcode: Option<String>,
}

impl Staff {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Full set of mutable staff fields, used for both insert and full-record update.
///
/// `None` fields are written as NULL on update.
#[derive(Debug, Clone, PartialEq, Default, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::staff_details)]
#[diesel(treat_none_as_null = true)]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub job_role: String,
    pub line_manager: Option<String>,
    pub contracted_hours: Option<f64>,
    pub primary_team: Option<String>,
    pub preferred_travel_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub leave_date: Option<NaiveDate>,
    pub email: Option<String>,
    pub work_number: Option<String>,
    pub postcode: Option<String>,
}
