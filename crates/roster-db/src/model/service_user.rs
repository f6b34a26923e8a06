use chrono::NaiveDate;
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Care recipient record
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::service_user_details)]
#[diesel(check_for_backend(Pg))]
pub struct ServiceUser {
    pub id: i32,
    pub unique_reference_code: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub rag_rating: Option<String>,
    pub nhs_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub primary_team: Option<String>,
    pub contact_number: Option<String>,
    pub contact_email: Option<String>,
    pub full_address: Option<String>,
    pub keysafe_code: Option<String>,
}

impl ServiceUser {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Full set of mutable service user fields, used for both insert and full-record update.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::service_user_details)]
#[diesel(treat_none_as_null = true)]
pub struct NewServiceUser {
    pub unique_reference_code: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub rag_rating: Option<String>,
    pub nhs_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub primary_team: Option<String>,
    pub contact_number: Option<String>,
    pub contact_email: Option<String>,
    pub full_address: Option<String>,
    pub keysafe_code: Option<String>,
}
